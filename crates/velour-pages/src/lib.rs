//! Page generation core for velour sites.
//!
//! Turns a collection of service records into `(slug, page)` pairs: a pure,
//! single-pass transformation executed once per build. Slug derivation is
//! stateless, so the host builder is free to parallelize over records.

pub mod materialize;
pub mod slug;

pub use materialize::{
    materialize, pair_with_slugs, Materialized, MaterializeError, Page, PageContext,
};
pub use slug::{derive_slug, is_valid_slug};
