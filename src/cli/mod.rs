//! Command-line interface module.

mod args;
pub mod build;
pub mod init;
pub mod render;
pub mod routes;
pub mod validate;

pub use args::{BuildArgs, Cli, Commands, RenderArgs, RenderFormat, ValidateArgs};
