//! Template engine for rendering site pages.

use minijinja::{context, Environment};

/// Site-wide values available to every template.
#[derive(Debug, Clone, serde::Serialize)]
pub struct SiteContext {
    /// Business name shown in the header and footer
    pub name: String,
    /// Document title
    pub title: String,
    /// Meta description
    pub description: String,
    /// Hero tagline
    pub tagline: String,
    /// Base URL
    pub base_url: String,
    /// Page language, e.g. "pt-BR"
    pub locale: String,
    /// WhatsApp contact link, if configured
    pub whatsapp_url: Option<String>,
    /// Instagram profile link, if configured
    pub instagram_url: Option<String>,
}

/// One service card on the home page grid.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ServiceCard {
    /// Display title
    pub title: String,
    /// One-line description
    pub short_description: String,
    /// Classification label
    pub category: String,
    /// Highlighted on the grid
    pub featured: bool,
    /// Route of the service's detail page
    pub path: String,
}

/// A testimonial quote on the home page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TestimonialView {
    pub text: String,
    pub author: String,
    pub rating: Option<u8>,
}

/// Context for rendering one service detail page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ServicePage {
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub price: Option<String>,
    pub duration: Option<String>,
    pub benefits: Vec<String>,
    /// Image URLs, already resolved against the base URL
    pub images: Vec<String>,
    pub category: String,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("base.html".to_string(), BASE_TEMPLATE.to_string())
            .expect("Failed to add base template");

        env.add_template_owned("index.html".to_string(), INDEX_TEMPLATE.to_string())
            .expect("Failed to add index template");

        env.add_template_owned("service.html".to_string(), SERVICE_TEMPLATE.to_string())
            .expect("Failed to add service template");

        env.add_template_owned("404.html".to_string(), NOT_FOUND_TEMPLATE.to_string())
            .expect("Failed to add 404 template");

        Self { env }
    }

    /// Render the home page.
    pub fn render_index(
        &self,
        site: &SiteContext,
        services: &[ServiceCard],
        testimonials: &[TestimonialView],
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("index.html")?;

        tmpl.render(context! {
            site => site,
            page_title => &site.title,
            services => services,
            testimonials => testimonials,
        })
    }

    /// Render one service detail page.
    pub fn render_service(
        &self,
        site: &SiteContext,
        service: &ServicePage,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("service.html")?;

        tmpl.render(context! {
            site => site,
            page_title => format!("{} - {}", service.title, site.name),
            service => service,
        })
    }

    /// Render the 404 page.
    pub fn render_not_found(&self, site: &SiteContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("404.html")?;

        tmpl.render(context! {
            site => site,
            page_title => format!("Página não encontrada - {}", site.name),
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="{{ site.locale }}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="description" content="{{ site.description }}">
  <title>{{ page_title }}</title>
  <link rel="stylesheet" href="{{ site.base_url }}assets/main.css">
</head>
<body>
  <header class="navbar">
    <a href="{{ site.base_url }}" class="logo">{{ site.name }}</a>
    <nav>
      <a href="{{ site.base_url }}#servicos">Serviços</a>
      <a href="{{ site.base_url }}#depoimentos">Depoimentos</a>
      <a href="{{ site.base_url }}#contato">Contato</a>
    </nav>
  </header>
  <main>
    {% block content %}{% endblock %}
  </main>
  <footer class="footer">
    <p>{{ site.name }}</p>
    <div class="social">
      {% if site.instagram_url %}<a href="{{ site.instagram_url }}">Instagram</a>{% endif %}
      {% if site.whatsapp_url %}<a href="{{ site.whatsapp_url }}">WhatsApp</a>{% endif %}
    </div>
  </footer>
</body>
</html>"##;

const INDEX_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<section class="hero">
  <h1>{{ site.name }}</h1>
  <p class="tagline">{{ site.tagline }}</p>
  {% if site.whatsapp_url %}<a class="cta" href="{{ site.whatsapp_url }}">Agende seu horário</a>{% endif %}
</section>

<section id="servicos" class="services">
  <h2>Serviços</h2>
  <div class="services-grid">
  {% for service in services %}
    <article class="service-card{% if service.featured %} featured{% endif %}">
      <h3>{{ service.title }}</h3>
      <p>{{ service.short_description }}</p>
      <a href="{{ service.path }}/">Saiba mais</a>
    </article>
  {% endfor %}
  </div>
</section>

{% if testimonials %}
<section id="depoimentos" class="testimonials">
  <h2>Depoimentos</h2>
  {% for t in testimonials %}
  <blockquote class="testimonial">
    <p>{{ t.text }}</p>
    <cite>{{ t.author }}</cite>
  </blockquote>
  {% endfor %}
</section>
{% endif %}

<section id="contato" class="contact">
  <h2>Contato</h2>
  <p>{{ site.description }}</p>
  {% if site.whatsapp_url %}<a class="cta" href="{{ site.whatsapp_url }}">Agendar pelo WhatsApp</a>{% endif %}
</section>
{% endblock %}"##;

const SERVICE_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<article class="service-page">
  <header class="service-header">
    <h1>{{ service.title }}</h1>
    <p class="subtitle">{{ service.short_description }}</p>
  </header>

  <div class="service-body">
    <p>{{ service.long_description }}</p>

    {% if service.benefits %}
    <h2>Benefícios</h2>
    <ul class="benefits">
    {% for benefit in service.benefits %}
      <li>{{ benefit }}</li>
    {% endfor %}
    </ul>
    {% endif %}

    <dl class="service-meta">
      {% if service.price %}<dt>Investimento</dt><dd>{{ service.price }}</dd>{% endif %}
      {% if service.duration %}<dt>Duração</dt><dd>{{ service.duration }}</dd>{% endif %}
      {% if service.category %}<dt>Categoria</dt><dd>{{ service.category }}</dd>{% endif %}
    </dl>

    {% if service.images %}
    <div class="gallery">
    {% for image in service.images %}
      <img src="{{ image }}" alt="{{ service.title }}" loading="lazy">
    {% endfor %}
    </div>
    {% endif %}

    {% if site.whatsapp_url %}<a class="cta" href="{{ site.whatsapp_url }}">Agendar pelo WhatsApp</a>{% endif %}
  </div>
</article>
{% endblock %}"##;

const NOT_FOUND_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<section class="not-found">
  <h1>404</h1>
  <p>A página que você está procurando não existe.</p>
  <a class="cta" href="{{ site.base_url }}">Voltar ao início</a>
</section>
{% endblock %}"##;
