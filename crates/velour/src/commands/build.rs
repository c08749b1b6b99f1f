//! Static site build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;
use velour_static::{BuildConfig, SiteBuilder, SiteMeta};

/// Configuration file structure (velour.toml).
#[derive(Debug, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    site: SiteSection,
    #[serde(default)]
    content: ContentSection,
    #[serde(default)]
    build: BuildSection,
}

#[derive(Debug, Deserialize, Default)]
struct SiteSection {
    #[serde(default = "default_name")]
    name: String,
    title: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    tagline: String,
    #[serde(default = "default_locale")]
    locale: String,
    whatsapp: Option<String>,
    instagram: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct ContentSection {
    #[serde(default = "default_content_dir")]
    dir: String,
}

#[derive(Debug, Deserialize, Default)]
struct BuildSection {
    #[serde(default = "default_output")]
    output: String,
    #[serde(default = "default_base_url")]
    base_url: String,
    #[serde(default = "default_route_prefix")]
    route_prefix: String,
    #[serde(default = "default_minify")]
    minify: bool,
}

fn default_name() -> String {
    "Velour".to_string()
}
fn default_locale() -> String {
    "pt-BR".to_string()
}
fn default_content_dir() -> String {
    "content".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_route_prefix() -> String {
    "/servicos/".to_string()
}
fn default_minify() -> bool {
    true
}

/// Load configuration from velour.toml if it exists.
/// Returns an error if the config file exists but is malformed.
fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

impl ConfigFile {
    fn into_build_config(self, output: Option<PathBuf>, minify: Option<bool>) -> BuildConfig {
        let title = self
            .site
            .title
            .unwrap_or_else(|| self.site.name.clone());

        BuildConfig {
            content_dir: PathBuf::from(&self.content.dir),
            output_dir: output.unwrap_or_else(|| PathBuf::from(&self.build.output)),
            base_url: self.build.base_url,
            route_prefix: self.build.route_prefix,
            minify: minify.unwrap_or(self.build.minify),
            site: SiteMeta {
                name: self.site.name,
                title,
                description: self.site.description,
                tagline: self.site.tagline,
                locale: self.site.locale,
                whatsapp_url: self.site.whatsapp,
                instagram_url: self.site.instagram,
            },
        }
    }
}

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building site...");

    let file_config = load_config(config_path)?;
    let config = file_config.into_build_config(output, minify);

    let result = SiteBuilder::new(config).build().await?;

    tracing::info!("Built {} service pages in {}ms", result.pages, result.duration_ms);
    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_uses_defaults() {
        let config = load_config(Path::new("does-not-exist.toml")).unwrap();
        let build = config.into_build_config(None, None);

        assert_eq!(build.content_dir, PathBuf::from("content"));
        assert_eq!(build.output_dir, PathBuf::from("dist"));
        assert_eq!(build.route_prefix, "/servicos/");
        assert!(build.minify);
        assert_eq!(build.site.locale, "pt-BR");
    }

    #[test]
    fn parses_full_config() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("velour.toml");

        fs::write(
            &path,
            r#"
[site]
name = "Estúdio Aurora"
description = "Estética facial"
tagline = "Beleza que realça"
whatsapp = "https://wa.me/5500000000000"

[content]
dir = "conteudo"

[build]
output = "public"
route_prefix = "/tratamentos/"
minify = false
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        let build = config.into_build_config(None, None);

        assert_eq!(build.site.name, "Estúdio Aurora");
        // title falls back to the site name
        assert_eq!(build.site.title, "Estúdio Aurora");
        assert_eq!(build.content_dir, PathBuf::from("conteudo"));
        assert_eq!(build.output_dir, PathBuf::from("public"));
        assert_eq!(build.route_prefix, "/tratamentos/");
        assert!(!build.minify);
    }

    #[test]
    fn cli_flags_override_config() {
        let config = ConfigFile::default();
        let build = config.into_build_config(Some(PathBuf::from("out")), Some(false));

        assert_eq!(build.output_dir, PathBuf::from("out"));
        assert!(!build.minify);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("velour.toml");

        fs::write(&path, "[site\nname = ").unwrap();

        assert!(load_config(&path).is_err());
    }
}
