//! URL slugs for tags.

use deunicode::deunicode;

/// Slugify free text for use as a single URL segment.
///
/// Transliterates to ASCII, lowercases, and collapses every run of
/// non-alphanumeric characters into one hyphen.
///
/// `"Dependency Injection"` -> `dependency-injection`, `"Café"` -> `cafe`
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut prev_hyphen = true;
    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            prev_hyphen = false;
        } else if !prev_hyphen {
            slug.push('-');
            prev_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
