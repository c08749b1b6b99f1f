//! Page materialization from slugged service records.

use std::collections::HashMap;

use serde::Serialize;

use velour_content::ServiceRecord;

use crate::slug::{derive_slug, is_valid_slug};

/// Route binding for one rendered page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// Published route: the configured prefix joined with the slug, with a
    /// leading slash and URL-safe segments.
    pub path: String,

    /// Minimal binding the renderer needs; the full record is re-fetched by
    /// `id` at render time.
    pub context: PageContext,
}

/// The data a page template receives.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageContext {
    pub id: String,
    pub slug: String,
}

/// Output of one materialization pass.
#[derive(Debug)]
pub struct Materialized {
    /// One page per input record, in input order.
    pub pages: Vec<Page>,

    /// Equal to `pages.len()`; carried separately for build reporting.
    pub count: usize,
}

/// Errors from slug pairing and page materialization. All build-fatal: a page
/// must never be silently published at the bare route prefix or on top of
/// another page's route.
#[derive(Debug, thiserror::Error)]
pub enum MaterializeError {
    #[error("record {id:?} (title {title:?}) derives an empty slug and its id offers no fallback")]
    EmptySlug { id: String, title: String },

    #[error("record {id:?} carries malformed slug {slug:?}")]
    MalformedSlug { id: String, slug: String },

    #[error("records {first:?} and {second:?} both map to slug {slug:?}")]
    SlugCollision {
        slug: String,
        first: String,
        second: String,
    },
}

/// Pair every record with its derived slug, in input order.
///
/// A title that derives to an empty slug falls back to a slug derived from
/// the record's id; a record where both are empty is an error. The fallback
/// is deterministic, so repeated builds agree.
pub fn pair_with_slugs(
    records: &[ServiceRecord],
) -> Result<Vec<(&ServiceRecord, String)>, MaterializeError> {
    records
        .iter()
        .map(|record| {
            let mut slug = derive_slug(&record.title);

            if slug.is_empty() {
                slug = derive_slug(&record.id);
            }

            if slug.is_empty() {
                return Err(MaterializeError::EmptySlug {
                    id: record.id.clone(),
                    title: record.title.clone(),
                });
            }

            Ok((record, slug))
        })
        .collect()
}

/// Build one [`Page`] per `(record, slug)` pair.
///
/// Rejects malformed slugs and slug collisions instead of letting one page
/// overwrite another in the route table. Input order is preserved in the
/// output so build reports are reproducible.
pub fn materialize(
    pairs: &[(&ServiceRecord, String)],
    route_prefix: &str,
) -> Result<Materialized, MaterializeError> {
    let prefix = normalize_prefix(route_prefix);

    let mut pages = Vec::with_capacity(pairs.len());
    let mut seen: HashMap<&str, &str> = HashMap::new();

    for (record, slug) in pairs {
        if !is_valid_slug(slug) {
            return Err(MaterializeError::MalformedSlug {
                id: record.id.clone(),
                slug: slug.clone(),
            });
        }

        if let Some(first) = seen.get(slug.as_str()) {
            return Err(MaterializeError::SlugCollision {
                slug: slug.clone(),
                first: (*first).to_string(),
                second: record.id.clone(),
            });
        }
        seen.insert(slug.as_str(), record.id.as_str());

        pages.push(Page {
            path: format!("{prefix}/{slug}"),
            context: PageContext {
                id: record.id.clone(),
                slug: slug.clone(),
            },
        });
    }

    let count = pages.len();

    Ok(Materialized { pages, count })
}

// "/servicos/", "servicos", "/servicos" all become "/servicos".
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    format!("/{trimmed}")
}
