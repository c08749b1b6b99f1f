//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use velour_content::{Catalog, ContentError, ContentStore};
use velour_pages::{materialize, pair_with_slugs, MaterializeError, Page};

use crate::assets::AssetPipeline;
use crate::templates::{ServiceCard, ServicePage, SiteContext, TemplateEngine, TestimonialView};

/// Site identity rendered into every page.
#[derive(Debug, Clone)]
pub struct SiteMeta {
    /// Business name
    pub name: String,

    /// Document title for the home page
    pub title: String,

    /// Meta description
    pub description: String,

    /// Hero tagline
    pub tagline: String,

    /// Page language
    pub locale: String,

    /// WhatsApp contact link
    pub whatsapp_url: Option<String>,

    /// Instagram profile link
    pub instagram_url: Option<String>,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            name: "Velour".to_string(),
            title: "Velour".to_string(),
            description: String::new(),
            tagline: String::new(),
            locale: "pt-BR".to_string(),
            whatsapp_url: None,
            instagram_url: None,
        }
    }
}

/// Configuration for building a site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Content directory holding services/, testimonials.json, images/
    pub content_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Base URL for the site
    pub base_url: String,

    /// Route prefix for service detail pages
    pub route_prefix: String,

    /// Minify CSS output
    pub minify: bool,

    /// Site identity
    pub site: SiteMeta,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            output_dir: PathBuf::from("dist"),
            base_url: "/".to_string(),
            route_prefix: "/servicos/".to_string(),
            minify: true,
            site: SiteMeta::default(),
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of service pages generated
    pub pages: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build. Every variant aborts the build before
/// anything is published.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("content query failed: {0}")]
    Content(#[from] ContentError),

    #[error("page materialization failed: {0}")]
    Materialize(#[from] MaterializeError),

    #[error("no record found for page context id {0:?}")]
    MissingRecord(String),

    #[error("failed to render template: {0}")]
    Template(String),

    #[error("failed to write output: {0}")]
    Write(String),
}

/// Static site builder.
pub struct SiteBuilder {
    config: BuildConfig,
    store: ContentStore,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        let store = ContentStore::new(&config.content_dir);

        Self {
            config,
            store,
            templates: TemplateEngine::new(),
        }
    }

    /// Build the site.
    ///
    /// A content query failure aborts the whole step with zero pages written;
    /// the site is never published with a missing section.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let catalog = self.store.load()?;

        let pairs = pair_with_slugs(catalog.services())?;
        let materialized = materialize(&pairs, &self.config.route_prefix)?;

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        let site = self.site_context();

        // Each page binds only its own record, so rendering parallelizes
        // cleanly across the collection.
        let results: Vec<Result<(), BuildError>> = materialized
            .pages
            .par_iter()
            .map(|page| self.build_service_page(page, &catalog, &site))
            .collect();

        for result in results {
            result?;
        }

        self.build_index(&catalog, &materialized.pages, &site)?;
        self.build_not_found(&site)?;
        self.generate_assets()?;
        self.copy_images()?;
        self.generate_route_table(&materialized.pages)?;
        self.generate_sitemap(&materialized.pages)?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: materialized.count,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    fn site_context(&self) -> SiteContext {
        let site = &self.config.site;

        SiteContext {
            name: site.name.clone(),
            title: site.title.clone(),
            description: site.description.clone(),
            tagline: site.tagline.clone(),
            base_url: self.config.base_url.clone(),
            locale: site.locale.clone(),
            whatsapp_url: site.whatsapp_url.clone(),
            instagram_url: site.instagram_url.clone(),
        }
    }

    /// Map a route like "/servicos/limpeza-de-pele" to its output file.
    fn output_file(&self, route: &str) -> PathBuf {
        self.config
            .output_dir
            .join(route.trim_start_matches('/'))
            .join("index.html")
    }

    fn image_url(&self, image: &str) -> String {
        format!("{}assets/images/{}", self.config.base_url, image)
    }

    /// Render one service detail page, re-fetching the full record by id.
    fn build_service_page(
        &self,
        page: &Page,
        catalog: &Catalog,
        site: &SiteContext,
    ) -> Result<(), BuildError> {
        let record = catalog
            .service_by_id(&page.context.id)
            .ok_or_else(|| BuildError::MissingRecord(page.context.id.clone()))?;

        let service = ServicePage {
            title: record.title.clone(),
            short_description: record.short_description.clone(),
            long_description: record.long_description.clone(),
            price: record.price.clone(),
            duration: record.duration.clone(),
            benefits: record.benefits.clone(),
            images: record.images.iter().map(|img| self.image_url(img)).collect(),
            category: record.category.clone(),
        };

        let html = self
            .templates
            .render_service(site, &service)
            .map_err(|e| BuildError::Template(e.to_string()))?;

        self.write_page(&self.output_file(&page.path), &html)?;

        tracing::debug!("Rendered {} at {}", record.title, page.path);

        Ok(())
    }

    fn build_index(
        &self,
        catalog: &Catalog,
        pages: &[Page],
        site: &SiteContext,
    ) -> Result<(), BuildError> {
        // Pages come back in record order, so the grid follows content order.
        let cards: Vec<ServiceCard> = pages
            .iter()
            .map(|page| {
                let record = catalog
                    .service_by_id(&page.context.id)
                    .ok_or_else(|| BuildError::MissingRecord(page.context.id.clone()))?;

                Ok(ServiceCard {
                    title: record.title.clone(),
                    short_description: record.short_description.clone(),
                    category: record.category.clone(),
                    featured: record.featured,
                    path: page.path.clone(),
                })
            })
            .collect::<Result<_, BuildError>>()?;

        let testimonials: Vec<TestimonialView> = catalog
            .testimonials()
            .iter()
            .map(|t| TestimonialView {
                text: t.text.clone(),
                author: t.author.clone(),
                rating: t.rating,
            })
            .collect();

        let html = self
            .templates
            .render_index(site, &cards, &testimonials)
            .map_err(|e| BuildError::Template(e.to_string()))?;

        self.write_page(&self.config.output_dir.join("index.html"), &html)
    }

    fn build_not_found(&self, site: &SiteContext) -> Result<(), BuildError> {
        let html = self
            .templates
            .render_not_found(site)
            .map_err(|e| BuildError::Template(e.to_string()))?;

        self.write_page(&self.config.output_dir.join("404.html"), &html)
    }

    fn write_page(&self, path: &Path, html: &str) -> Result<(), BuildError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::Write(e.to_string()))?;
        }

        fs::write(path, html).map_err(|e| BuildError::Write(e.to_string()))
    }

    /// Write the stylesheet, minified unless disabled.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::Write(e.to_string()))?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            AssetPipeline::minify_css(&css).unwrap_or(css)
        } else {
            css
        };

        fs::write(assets_dir.join("main.css"), css)
            .map_err(|e| BuildError::Write(e.to_string()))
    }

    /// Copy content images into the output tree.
    fn copy_images(&self) -> Result<(), BuildError> {
        let images_dir = self.store.images_dir();
        if !images_dir.exists() {
            return Ok(());
        }

        let target_root = self.config.output_dir.join("assets").join("images");

        for entry in WalkDir::new(&images_dir).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(&images_dir).unwrap_or(path);
            let target = target_root.join(relative);

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| BuildError::Write(e.to_string()))?;
            }

            fs::copy(path, &target).map_err(|e| {
                BuildError::Write(format!("{}: {}", path.display(), e))
            })?;
        }

        Ok(())
    }

    /// Write the route table: every published path with the id and slug it
    /// was built from. Consumed by hosting rewrites and deploy smoke checks.
    fn generate_route_table(&self, pages: &[Page]) -> Result<(), BuildError> {
        let json = serde_json::to_string_pretty(pages)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        fs::write(self.config.output_dir.join("routes.json"), json)
            .map_err(|e| BuildError::Write(e.to_string()))
    }

    /// Generate sitemap.xml and robots.txt.
    fn generate_sitemap(&self, pages: &[Page]) -> Result<(), BuildError> {
        let base = self.config.base_url.trim_end_matches('/');

        let mut urls = vec![format!("  <url>\n    <loc>{}/</loc>\n  </url>", base)];
        urls.extend(pages.iter().map(|page| {
            format!("  <url>\n    <loc>{}{}/</loc>\n  </url>", base, page.path)
        }));

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );

        fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}sitemap.xml",
            self.config.base_url
        );
        fs::write(self.config.output_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::Write(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_service(root: &std::path::Path, name: &str, id: &str, title: &str) {
        let json = format!(
            r#"{{
                "id": "{id}",
                "title": "{title}",
                "shortDescription": "curta",
                "longDescription": "longa",
                "benefits": ["um", "dois"],
                "featured": true
            }}"#
        );
        fs::write(root.join("services").join(name), json).unwrap();
    }

    fn site_fixture() -> (tempfile::TempDir, BuildConfig) {
        let temp = tempdir().unwrap();
        let content = temp.path().join("content");
        fs::create_dir_all(content.join("services")).unwrap();

        let config = BuildConfig {
            content_dir: content,
            output_dir: temp.path().join("dist"),
            ..Default::default()
        };

        (temp, config)
    }

    #[tokio::test]
    async fn builds_service_pages_and_index() {
        let (_temp, config) = site_fixture();
        let out = config.output_dir.clone();

        write_service(&config.content_dir, "a.json", "limpeza", "Limpeza de Pele");
        write_service(&config.content_dir, "b.json", "design", "Design de Sobrancelhas");

        let result = SiteBuilder::new(config).build().await.unwrap();

        assert_eq!(result.pages, 2);
        assert!(out.join("index.html").exists());
        assert!(out.join("servicos/limpeza-de-pele/index.html").exists());
        assert!(out
            .join("servicos/design-de-sobrancelhas/index.html")
            .exists());
        assert!(out.join("404.html").exists());
        assert!(out.join("assets/main.css").exists());
    }

    #[tokio::test]
    async fn index_links_every_service_page() {
        let (_temp, config) = site_fixture();
        let out = config.output_dir.clone();

        write_service(&config.content_dir, "a.json", "cilios", "Extensão de Cílios");

        SiteBuilder::new(config).build().await.unwrap();

        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.contains("/servicos/extensao-de-cilios/"));
        assert!(index.contains("Extensão de Cílios"));
    }

    #[tokio::test]
    async fn empty_collection_builds_zero_pages_without_error() {
        let (_temp, config) = site_fixture();
        let out = config.output_dir.clone();

        let result = SiteBuilder::new(config).build().await.unwrap();

        assert_eq!(result.pages, 0);
        assert!(out.join("index.html").exists());
    }

    #[tokio::test]
    async fn content_failure_aborts_without_publishing() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let config = BuildConfig {
            content_dir: temp.path().join("missing-content"),
            output_dir: out.clone(),
            ..Default::default()
        };

        let result = SiteBuilder::new(config).build().await;

        assert!(matches!(result, Err(BuildError::Content(_))));
        assert!(!out.join("index.html").exists());
    }

    #[tokio::test]
    async fn malformed_content_aborts_the_build() {
        let (_temp, config) = site_fixture();
        let out = config.output_dir.clone();

        fs::write(config.content_dir.join("services/bad.json"), "{oops").unwrap();

        let result = SiteBuilder::new(config).build().await;

        assert!(matches!(result, Err(BuildError::Content(_))));
        assert!(!out.join("index.html").exists());
    }

    #[tokio::test]
    async fn slug_collision_fails_the_build() {
        let (_temp, config) = site_fixture();

        write_service(&config.content_dir, "a.json", "a", "Limpeza de Pele");
        write_service(&config.content_dir, "b.json", "b", "Limpeza de Pele!!");

        let result = SiteBuilder::new(config).build().await;

        assert!(matches!(result, Err(BuildError::Materialize(_))));
    }

    #[tokio::test]
    async fn route_table_binds_path_to_id_and_slug() {
        let (_temp, config) = site_fixture();
        let out = config.output_dir.clone();

        write_service(&config.content_dir, "a.json", "nano", "Nano-Lips!!");

        SiteBuilder::new(config).build().await.unwrap();

        let routes = fs::read_to_string(out.join("routes.json")).unwrap();
        assert!(routes.contains("/servicos/nano-lips"));
        assert!(routes.contains(r#""id": "nano""#));
        assert!(routes.contains(r#""slug": "nano-lips""#));
    }

    #[tokio::test]
    async fn sitemap_lists_home_and_service_routes() {
        let (_temp, config) = site_fixture();
        let out = config.output_dir.clone();

        write_service(&config.content_dir, "a.json", "peeling", "Peeling Facial");

        SiteBuilder::new(config).build().await.unwrap();

        let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>/</loc>"));
        assert!(sitemap.contains("/servicos/peeling-facial/"));
        assert!(out.join("robots.txt").exists());
    }

    #[tokio::test]
    async fn copies_content_images() {
        let (_temp, config) = site_fixture();
        let out = config.output_dir.clone();

        let images = config.content_dir.join("images");
        fs::create_dir_all(&images).unwrap();
        fs::write(images.join("limpeza-1.jpg"), b"jpg").unwrap();

        SiteBuilder::new(config).build().await.unwrap();

        assert!(out.join("assets/images/limpeza-1.jpg").exists());
    }
}
