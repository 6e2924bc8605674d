//! XML preprocessing applied before deserialization

use tracing::debug;

/// Strip inline HTML-like formatting tags from XML content.
///
/// Tags like `<i>`, `<sup>`, `<sub>`, `<b>` appear inside `ArticleTitle` and
/// abstract text and break quick-xml's serde deserializer, which expects
/// element content to be plain text.
pub(crate) fn strip_inline_markup(xml: &str) -> String {
    use regex::Regex;
    use std::sync::OnceLock;

    static INLINE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = INLINE_TAG_REGEX.get_or_init(|| {
        Regex::new(r"</?(?:i|b|u|sup|sub|em|strong)>").expect("Failed to compile inline tag regex")
    });

    let cleaned = re.replace_all(xml, "");

    if cleaned.len() != xml.len() {
        debug!(
            removed_bytes = xml.len() - cleaned.len(),
            "Stripped inline markup tags from XML"
        );
    }

    cleaned.into_owned()
}
