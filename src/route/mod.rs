//! Route table - content tree in, ordered route table out.
//!
//! # Module Structure
//!
//! - [`builder`]: traversal, hashing and assembly of the table
//! - [`conflict`]: duplicate path detection
//! - [`entry`]: [`RouteEntry`] and [`RouteTable`]
//! - [`error`]: [`RouteError`]
//! - [`hash`]: content-addressed [`ComponentRef`]s
//! - [`path`]: [`RoutePath`] normalization
//! - [`resolve`]: first-match-wins request resolution
//!
//! # Table Shape
//!
//! ```text
//! /docs               exact=false   (layout shell)
//!   /docs/intro       exact=true
//!   /docs/cheatsheet  exact=true
//! /blog               exact=true
//! *                   exact=true    (catch-all, always last)
//! ```

pub mod builder;
pub mod conflict;
mod entry;
mod error;
pub mod hash;
pub mod path;
mod resolve;

pub use builder::{BuildOptions, RouteTableBuilder};
pub use entry::RouteTable;
pub use error::RouteError;
pub use path::RoutePath;
pub use resolve::Resolution;
