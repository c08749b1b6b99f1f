//! Content entities supplied by the store.

use serde::{Deserialize, Serialize};

/// One offered service, as authored in a JSON content file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    /// Unique identifier assigned by the content author.
    pub id: String,

    /// Display name. Free text: accents, punctuation, and mixed case are all
    /// expected here.
    pub title: String,

    /// One-line description shown on cards and listings.
    pub short_description: String,

    /// Full description shown on the service's own page.
    pub long_description: String,

    /// Display price, e.g. "R$ 120,00".
    #[serde(default)]
    pub price: Option<String>,

    /// Session duration, e.g. "60 min".
    #[serde(default)]
    pub duration: Option<String>,

    /// Ordered list of benefit bullet points.
    #[serde(default)]
    pub benefits: Vec<String>,

    /// Ordered list of image paths, relative to the content images directory.
    #[serde(default)]
    pub images: Vec<String>,

    /// Classification label, e.g. "facial".
    #[serde(default)]
    pub category: String,

    /// Whether the service is highlighted on the home page.
    #[serde(default)]
    pub featured: bool,
}

/// A client testimonial shown on the home page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Quoted text.
    pub text: String,

    /// Who said it.
    pub author: String,

    /// Star rating, 1-5.
    #[serde(default)]
    pub rating: Option<u8>,
}
