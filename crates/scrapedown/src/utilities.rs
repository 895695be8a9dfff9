//! Shared helpers and constants for page scraping.

/// The anchor artifact stripped from heading text by default.
///
/// Documentation anchor generators append a pilcrow permalink to each
/// heading; when the page's UTF-8 bytes get decoded as Latin-1 somewhere
/// along the way, the glyph surfaces as the two-character sequence
/// U+00C2 U+00B6.
pub const ANCHOR_ARTIFACT: &str = "\u{c2}\u{b6}";

/// Remove every occurrence of an artifact sequence from text
pub fn strip_artifact(text: &str, artifact: &str) -> String {
    // An empty needle would match between every pair of characters.
    if artifact.is_empty() {
        return text.to_string();
    }
    text.replace(artifact, "")
}
