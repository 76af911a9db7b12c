//! URL helpers for link targets.

/// Check if a link is external (has a URL scheme like http:, mailto:, etc.)
///
/// A valid scheme must:
/// - Have at least 1 character before the colon
/// - Only contain ASCII alphanumeric or `+`, `-`, `.`
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Split a link into its path and the `?query#fragment` tail.
///
/// The tail keeps its leading `?` or `#`; empty when there is none.
#[inline]
pub fn split_path_suffix(url: &str) -> (&str, &str) {
    match url.find(['?', '#']) {
        Some(pos) => url.split_at(pos),
        None => (url, ""),
    }
}
