//! Content store over local JSON files.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use walkdir::WalkDir;

use crate::model::{ServiceRecord, Testimonial};

/// Errors surfaced by the content store. All of them are build-fatal for the
/// caller: a content failure must never be smoothed over into an empty site.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content directory not found: {}", dir.display())]
    MissingRoot { dir: PathBuf },

    #[error("services directory not found: {}", dir.display())]
    MissingServices { dir: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid record in {}: {reason}", path.display())]
    InvalidRecord { path: PathBuf, reason: String },

    #[error("duplicate service id {id:?} in {} (first seen in {})", second.display(), first.display())]
    DuplicateId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Loaded content snapshot for one build.
#[derive(Debug, Clone)]
pub struct Catalog {
    services: Vec<ServiceRecord>,
    testimonials: Vec<Testimonial>,
}

impl Catalog {
    /// Services in file order, stable across runs.
    pub fn services(&self) -> &[ServiceRecord] {
        &self.services
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    /// Look up the full record for a page context id.
    pub fn service_by_id(&self, id: &str) -> Option<&ServiceRecord> {
        self.services.iter().find(|s| s.id == id)
    }
}

// A service file may hold a single record or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum ServiceFile {
    Many(Vec<ServiceRecord>),
    One(ServiceRecord),
}

/// Reads and validates content from a directory tree:
///
/// ```text
/// content/
/// ├── services/*.json      one record or an array per file
/// ├── testimonials.json    optional
/// └── images/              copied verbatim by the builder
/// ```
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root.join("images")
    }

    /// Load the full content snapshot, or fail.
    ///
    /// Either every record loads and validates, or the whole query fails;
    /// there is no partial result.
    pub fn load(&self) -> Result<Catalog, ContentError> {
        if !self.root.exists() {
            return Err(ContentError::MissingRoot {
                dir: self.root.clone(),
            });
        }

        let services = self.load_services()?;
        let testimonials = self.load_testimonials()?;

        tracing::debug!(
            "Loaded {} services and {} testimonials from {}",
            services.len(),
            testimonials.len(),
            self.root.display()
        );

        Ok(Catalog {
            services,
            testimonials,
        })
    }

    fn load_services(&self) -> Result<Vec<ServiceRecord>, ContentError> {
        let services_dir = self.root.join("services");

        if !services_dir.exists() {
            return Err(ContentError::MissingServices { dir: services_dir });
        }

        let mut services = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        // Sorted walk keeps record order reproducible across builds.
        for entry in WalkDir::new(&services_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let content = fs::read_to_string(path).map_err(|e| ContentError::Read {
                path: path.to_path_buf(),
                source: e,
            })?;

            let parsed: ServiceFile =
                serde_json::from_str(&content).map_err(|e| ContentError::Parse {
                    path: path.to_path_buf(),
                    source: e,
                })?;

            let records = match parsed {
                ServiceFile::Many(records) => records,
                ServiceFile::One(record) => vec![record],
            };

            for record in records {
                validate_record(&record, path)?;

                if let Some(first) = seen.get(&record.id) {
                    return Err(ContentError::DuplicateId {
                        id: record.id.clone(),
                        first: first.clone(),
                        second: path.to_path_buf(),
                    });
                }
                seen.insert(record.id.clone(), path.to_path_buf());

                services.push(record);
            }
        }

        Ok(services)
    }

    fn load_testimonials(&self) -> Result<Vec<Testimonial>, ContentError> {
        let path = self.root.join("testimonials.json");

        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path).map_err(|e| ContentError::Read {
            path: path.clone(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| ContentError::Parse { path, source: e })
    }
}

fn validate_record(record: &ServiceRecord, path: &Path) -> Result<(), ContentError> {
    if record.id.trim().is_empty() {
        return Err(ContentError::InvalidRecord {
            path: path.to_path_buf(),
            reason: format!("record {:?} has an empty id", record.title),
        });
    }

    if record.images.iter().any(|img| img.trim().is_empty()) {
        return Err(ContentError::InvalidRecord {
            path: path.to_path_buf(),
            reason: format!("record {:?} has an empty image path", record.id),
        });
    }

    Ok(())
}
