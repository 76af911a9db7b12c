//! Command-line interface module.

mod args;
pub mod build;
pub mod common;
pub mod resolve;
pub mod validate;

pub use args::{BuildArgs, Cli, Commands, ResolveArgs};
