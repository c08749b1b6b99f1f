//! Static site builder for velour brochure sites.
//!
//! Loads a JSON content catalog, materializes one route per service, and
//! renders the home page plus per-service detail pages to static HTML.

pub mod assets;
pub mod builder;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder, SiteMeta};
