//! Shared utilities.
//!
//! - [`date`]: `YYYY-MM-DD` dates for schema and sitemap fields
//! - [`fs`]: path normalization and file writing
//! - [`html`]: HTML and script-payload escaping
//! - `plural`: log line pluralization

pub mod date;
pub mod fs;
pub mod html;
mod plural;

pub use plural::{plural_count, plural_s};
