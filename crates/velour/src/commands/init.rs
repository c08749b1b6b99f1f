//! Initialize a site in a directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing velour site...");

    let content_dir = Path::new("content");
    let services_dir = content_dir.join("services");

    // Check if content already exists
    if content_dir.exists() {
        if !yes {
            tracing::warn!("content/ directory already exists. Use --yes to overwrite.");
            return Ok(());
        }
    }
    fs::create_dir_all(&services_dir).context("Failed to create content/services directory")?;
    fs::create_dir_all(content_dir.join("images"))
        .context("Failed to create content/images directory")?;

    // Create default config
    let config_path = Path::new("velour.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write velour.toml")?;
        tracing::info!("Created velour.toml");
    }

    // Create example service
    let service_path = services_dir.join("limpeza-de-pele.json");
    if !service_path.exists() || yes {
        fs::write(&service_path, DEFAULT_SERVICE)
            .context("Failed to write example service")?;
        tracing::info!("Created content/services/limpeza-de-pele.json");
    }

    // Create example testimonials
    let testimonials_path = content_dir.join("testimonials.json");
    if !testimonials_path.exists() || yes {
        fs::write(&testimonials_path, DEFAULT_TESTIMONIALS)
            .context("Failed to write testimonials.json")?;
        tracing::info!("Created content/testimonials.json");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'velour build' and then 'velour serve' to preview the site.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Velour Configuration

[site]
# Business name shown in the header and hero
name = "Meu Estúdio"

# Meta description
description = "Estética facial especializada em cuidados personalizados"

# Hero tagline
tagline = "Beleza e cuidado que realçam sua essência"

# Page language
locale = "pt-BR"

# Contact links (optional)
# whatsapp = "https://wa.me/5500000000000"
# instagram = "https://instagram.com/meuestudio"

[content]
# Directory holding services/, testimonials.json, and images/
dir = "content"

[build]
# Output directory for the built site
output = "dist"

# Base URL (for deployment)
base_url = "/"

# Route prefix for service detail pages
route_prefix = "/servicos/"

# Enable CSS minification
minify = true
"#;

const DEFAULT_SERVICE: &str = r#"{
  "id": "limpeza-de-pele",
  "title": "Limpeza de Pele",
  "shortDescription": "Tratamento profundo para remoção de impurezas e renovação celular.",
  "longDescription": "Tratamento profundo para remoção de impurezas e renovação celular, deixando sua pele limpa e radiante. Indicado para todos os tipos de pele.",
  "price": "R$ 150,00",
  "duration": "90 min",
  "benefits": [
    "Remoção de impurezas",
    "Renovação celular",
    "Pele radiante"
  ],
  "images": [],
  "category": "facial",
  "featured": true
}
"#;

const DEFAULT_TESTIMONIALS: &str = r#"[
  {
    "text": "Fiquei impressionada com o profissionalismo. O resultado ficou perfeito!",
    "author": "Maria",
    "rating": 5
  }
]
"#;
