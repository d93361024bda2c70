//! Configuration section definitions.
//!
//! Each module corresponds to a section in `schemagen.toml`:
//!
//! | Module         | TOML Section       | Purpose                              |
//! |----------------|--------------------|--------------------------------------|
//! | `build`        | `[build]`          | Output directory, sitemap, dates     |
//! | `organization` | `[organization]`   | Publishing organization details      |
//! | `schema`       | `[schema]`         | Structured data copy and constants   |
//! | `site`         | `[site]`           | Site identity, author, verification  |
//!
//! Route metadata (`[routes."/path"]`) lives in [`crate::route`].

mod build;
mod organization;
mod schema;
mod site;

pub use build::{BuildSectionConfig, SitemapConfig};
pub use organization::OrganizationConfig;
pub use schema::SchemaConfig;
pub use site::{AuthorConfig, SiteInfoConfig, VerificationConfig};
