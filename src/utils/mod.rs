//! Shared helpers.

pub mod date;
pub mod path;
mod plural;
pub mod slug;

pub use plural::{Count, plural};
