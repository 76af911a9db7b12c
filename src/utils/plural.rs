//! Counted nouns for log and error messages.

use std::borrow::Cow;
use std::fmt;

/// English plural of `noun` for `n` items.
///
/// Covers the nouns this crate reports on: `link` -> `links`,
/// `entry` -> `entries`, `match` -> `matches`.
pub fn plural(noun: &str, n: usize) -> Cow<'_, str> {
    if n == 1 {
        return Cow::Borrowed(noun);
    }
    if let Some(stem) = noun.strip_suffix('y')
        && !stem.ends_with(['a', 'e', 'i', 'o', 'u'])
    {
        return Cow::Owned(format!("{stem}ies"));
    }
    if noun.ends_with(['s', 'x']) || noun.ends_with("ch") || noun.ends_with("sh") {
        return Cow::Owned(format!("{noun}es"));
    }
    Cow::Owned(format!("{noun}s"))
}

/// A count with its noun: `Count(3, "route")` displays as `3 routes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Count<'a>(pub usize, pub &'a str);

impl Count<'_> {
    /// The noun alone, pluralized for the count.
    pub fn noun(&self) -> Cow<'_, str> {
        plural(self.1, self.0)
    }
}

impl fmt::Display for Count<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0, self.noun())
    }
}
