//! Broken link report types and formatting.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::Style;

use crate::config::section::LinkLocation;
use crate::logger::paint;
use crate::utils::{Count, plural};

/// A single broken link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    /// The link target as written in the config.
    pub target: String,
    /// Why it does not resolve.
    pub reason: String,
}

/// Broken links grouped by config location, navbar first.
#[derive(Debug, Default)]
pub struct LinkReport {
    pub links: BTreeMap<LinkLocation, Vec<BrokenLink>>,
    /// Number of links looked at.
    pub checked: usize,
}

impl LinkReport {
    pub fn add(
        &mut self,
        location: LinkLocation,
        target: impl Into<String>,
        reason: impl Into<String>,
    ) {
        self.links.entry(location).or_default().push(BrokenLink {
            target: target.into(),
            reason: reason.into(),
        });
    }

    pub fn error_count(&self) -> usize {
        self.links.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Print every broken link to stderr.
    pub fn print(&self) {
        if self.links.is_empty() {
            return;
        }
        eprintln!();

        let count = self.error_count();
        let dim = Style::new().dimmed();
        eprintln!(
            "{} {}",
            paint("broken links", Style::new().red().bold()),
            paint(format_args!("({})", Count(count, "link")), dim)
        );

        for (location, links) in &self.links {
            eprintln!("{}{}{}", paint("[", dim), paint(location, Style::new().cyan()), paint("]", dim));
            for link in links {
                eprintln!(
                    "{} {} {}",
                    paint("→", Style::new().red()),
                    link.target,
                    paint(&link.reason, dim)
                );
            }
        }
    }
}

impl fmt::Display for LinkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.error_count();
        if total == 0 {
            let checked = Count(self.checked, "link");
            write!(f, "{}", paint(format_args!("all {checked} valid"), Style::new().green()))
        } else {
            let dim = Style::new().dimmed();
            write!(
                f,
                "{} {} {}",
                paint("found", dim),
                paint(total, Style::new().red().bold()),
                paint(format_args!("broken {}", plural("link", total)), dim)
            )
        }
    }
}
