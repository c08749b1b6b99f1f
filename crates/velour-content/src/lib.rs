//! Typed content store for velour sites.
//!
//! Loads service records and testimonials from local JSON files and validates
//! them at the boundary, so downstream build steps never probe for missing
//! fields.

pub mod model;
pub mod store;

pub use model::{ServiceRecord, Testimonial};
pub use store::{Catalog, ContentError, ContentStore};
