//! Asset pipeline for the site stylesheet.

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the site CSS.
    pub fn generate_css() -> String {
        SITE_CSS.to_string()
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}

const SITE_CSS: &str = r#"/* Velour brochure theme */

:root {
  --gold: #c8a968;
  --gold-dark: #a8894e;
  --cream: #faf8f6;
  --ink: #2b2b2b;
  --gray: #6b6b6b;
  --content-max-width: 1100px;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, sans-serif;
  background: var(--cream);
  color: var(--ink);
  line-height: 1.6;
}

.navbar {
  display: flex;
  justify-content: space-between;
  align-items: center;
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 1rem 1.5rem;
}

.logo {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--ink);
  text-decoration: none;
}

.navbar nav a {
  margin-left: 1.5rem;
  color: var(--gray);
  text-decoration: none;
}

.navbar nav a:hover {
  color: var(--gold-dark);
}

main {
  max-width: var(--content-max-width);
  margin: 0 auto;
  padding: 0 1.5rem 4rem;
}

.hero {
  text-align: center;
  padding: 5rem 0 4rem;
}

.hero h1 {
  font-size: 2.75rem;
  font-weight: 700;
}

.tagline {
  color: var(--gray);
  font-size: 1.25rem;
  margin: 1rem 0 2rem;
}

.cta {
  display: inline-block;
  background: var(--gold);
  color: white;
  padding: 0.75rem 1.75rem;
  border-radius: 2rem;
  text-decoration: none;
  font-weight: 500;
}

.cta:hover {
  background: var(--gold-dark);
}

section h2 {
  font-size: 1.75rem;
  margin: 3rem 0 1.5rem;
  text-align: center;
}

.services-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: 1.5rem;
}

.service-card {
  background: white;
  border: 1px solid rgba(200, 169, 104, 0.15);
  border-radius: 1rem;
  padding: 2rem 1.5rem;
  text-align: center;
}

.service-card.featured {
  border-color: var(--gold);
}

.service-card h3 {
  margin-bottom: 0.75rem;
}

.service-card p {
  color: var(--gray);
  margin-bottom: 1.25rem;
}

.service-card a {
  color: var(--gold-dark);
  text-decoration: none;
  font-weight: 500;
}

.testimonial {
  max-width: 640px;
  margin: 0 auto 1.5rem;
  text-align: center;
  color: var(--gray);
}

.testimonial cite {
  display: block;
  margin-top: 0.5rem;
  color: var(--ink);
  font-style: normal;
  font-weight: 500;
}

.contact {
  text-align: center;
}

.service-page {
  padding-top: 3rem;
}

.service-header {
  text-align: center;
  margin-bottom: 3rem;
}

.service-header h1 {
  font-size: 2.25rem;
}

.subtitle {
  color: var(--gray);
  font-size: 1.15rem;
}

.benefits {
  margin: 1rem 0 2rem 1.25rem;
}

.service-meta {
  display: grid;
  grid-template-columns: auto 1fr;
  gap: 0.25rem 1rem;
  margin-bottom: 2rem;
}

.service-meta dt {
  font-weight: 600;
}

.gallery {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
  gap: 1rem;
  margin-bottom: 2rem;
}

.gallery img {
  width: 100%;
  border-radius: 0.75rem;
}

.not-found {
  text-align: center;
  padding: 6rem 0;
}

.footer {
  border-top: 1px solid rgba(0, 0, 0, 0.08);
  text-align: center;
  padding: 2rem 1.5rem;
  color: var(--gray);
}

.footer .social a {
  margin: 0 0.5rem;
  color: var(--gold-dark);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minifies_generated_css() {
        let css = AssetPipeline::generate_css();
        let minified = AssetPipeline::minify_css(&css).unwrap();

        assert!(minified.len() < css.len());
        assert!(minified.contains("--gold"));
    }

    #[test]
    fn minification_is_stable() {
        let css = AssetPipeline::generate_css();
        let once = AssetPipeline::minify_css(&css).unwrap();
        let twice = AssetPipeline::minify_css(&once).unwrap();

        assert_eq!(once, twice);
    }
}
