//! Path and URL utilities.
//!
//! - [`fs`]: filesystem path normalization (`normalize_path`)
//! - [`route`]: link helpers (`is_external_link`, `split_path_suffix`)

pub mod fs;
pub mod route;

pub use fs::normalize_path;
