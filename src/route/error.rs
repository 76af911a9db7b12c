//! Route table build errors.

use thiserror::Error;

use super::conflict::{PathConflict, format_conflicts};
use crate::utils::{Count, plural};

/// Fatal route table errors. Any of these aborts the build before output.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("{}", describe_duplicates(.conflicts))]
    DuplicatePath { conflicts: Vec<PathConflict> },

    #[error("cannot resolve content `{source_id}` for `{path}`: {reason}")]
    UnresolvableContent {
        source_id: String,
        path: String,
        reason: String,
    },

    #[error("invalid route path `{path}` from `{source_id}`: {reason}")]
    InvalidPath {
        source_id: String,
        path: String,
        reason: &'static str,
    },

    #[error("route `{path}` from `{source_id}` is outside its layout shell `{shell}`")]
    OutsideShell {
        source_id: String,
        path: String,
        shell: String,
    },
}

fn describe_duplicates(conflicts: &[PathConflict]) -> String {
    format!(
        "duplicate route {} ({}):\n{}",
        plural("path", conflicts.len()),
        Count(conflicts.len(), "conflict"),
        format_conflicts(conflicts)
    )
}

impl RouteError {
    /// The route path the error is about.
    pub fn path(&self) -> &str {
        match self {
            Self::DuplicatePath { conflicts } => conflicts.first().map_or("", |c| c.path.as_str()),
            Self::UnresolvableContent { path, .. }
            | Self::InvalidPath { path, .. }
            | Self::OutsideShell { path, .. } => path,
        }
    }
}
