//! Template engine for rendering site pages.

use minijinja::{context, Environment};

use crate::pages::{Layout, PageView};

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", BASE_TEMPLATE),
    ("nav.html", NAV_TEMPLATE),
    ("footer.html", FOOTER_TEMPLATE),
    ("hero.html", HERO_TEMPLATE),
    ("home.html", HOME_TEMPLATE),
    ("about.html", ABOUT_TEMPLATE),
    ("courses.html", COURSES_TEMPLATE),
    ("gallery.html", GALLERY_TEMPLATE),
    ("achievements.html", ACHIEVEMENTS_TEMPLATE),
    ("contact.html", CONTACT_TEMPLATE),
];

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();

        for (name, source) in TEMPLATES {
            env.add_template_owned(name.to_string(), source.to_string())?;
        }

        Ok(Self { env })
    }

    /// Render a page using the specified template.
    pub fn render_page(
        &self,
        template: &str,
        layout: &Layout,
        page: &PageView,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;

        tmpl.render(context! {
            layout => layout,
            page => page,
        })
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ layout.page_title }} - {{ layout.site_title }}</title>
  <link rel="icon" href="{{ layout.logo }}">
  <link rel="stylesheet" href="{{ layout.base_url }}assets/main.css">
</head>
<body>
  {% include "nav.html" %}
  <main>
    {% block content %}{% endblock %}
  </main>
  {% include "footer.html" %}
  <script src="{{ layout.base_url }}assets/main.js"></script>
</body>
</html>"##;

const NAV_TEMPLATE: &str = r##"<header class="navbar">
  <div class="container navbar-inner">
    <a href="{{ layout.base_url }}" class="navbar-logo"><img src="{{ layout.logo }}" alt="{{ layout.site_title }}"></a>
    <ul class="nav-links">
    {% for link in layout.nav %}
      <li><a href="{{ link.href }}" class="nav-link{% if link.active %} active{% endif %}"{% if link.active %} aria-current="page"{% endif %}>{{ link.name }}</a></li>
    {% endfor %}
    </ul>
    <div class="navbar-actions">
      <button type="button" class="icon-btn" data-theme-toggle aria-label="Toggle theme">{{ layout.icons.sun | safe }}{{ layout.icons.moon | safe }}</button>
      <button type="button" class="icon-btn menu-btn" aria-label="Toggle menu" aria-expanded="false">{{ layout.icons.menu | safe }}</button>
    </div>
  </div>
  <nav class="container mobile-menu">
  {% for link in layout.nav %}
    <a href="{{ link.href }}" class="nav-link{% if link.active %} active{% endif %}">{{ link.name }}</a>
  {% endfor %}
  </nav>
</header>"##;

const FOOTER_TEMPLATE: &str = r##"{% set footer = layout.footer %}<footer class="footer">
  <div class="container grid grid-4">
    <div>
      <div class="footer-brand">
        <img src="{{ footer.logo }}" alt="{{ footer.name }}" class="{{ footer.logo_height }}">
        <h3>{{ footer.name }}</h3>
      </div>
      <p>{{ footer.description }}</p>
    </div>
    {% if footer.quick_links %}
    <div>
      <h3>Quick Links</h3>
      <ul class="footer-list">
      {% for link in footer.quick_links %}
        <li><a href="{{ link.url }}">{{ link.text }}</a></li>
      {% endfor %}
      </ul>
    </div>
    {% endif %}
    <div>
      <h3>Contact</h3>
      <ul class="footer-list">
        <li>{% if footer.address_icon %}{{ footer.address_icon | safe }}{% endif %}{{ footer.address }}</li>
        <li>{% if footer.phone_icon %}{{ footer.phone_icon | safe }}{% endif %}<a href="tel:{{ footer.phone }}">{{ footer.phone }}</a></li>
        <li>{% if footer.email_icon %}{{ footer.email_icon | safe }}{% endif %}<a href="mailto:{{ footer.email }}">{{ footer.email }}</a></li>
      </ul>
    </div>
    {% if footer.social %}
    <div>
      <h3>Follow Us</h3>
      <div class="social">
      {% for link in footer.social %}
        <a href="{{ link.url }}" aria-label="{{ link.platform }}" target="_blank" rel="noopener noreferrer">{% if link.icon %}{{ link.icon | safe }}{% else %}{{ link.platform }}{% endif %}</a>
      {% endfor %}
      </div>
    </div>
    {% endif %}
  </div>
  <div class="container copyright">{{ footer.copyright }}</div>
</footer>"##;

const HERO_TEMPLATE: &str = r##"<section class="page-hero">
  <div class="container">
    <h1>{{ page.hero.title }}</h1>
    {% if page.hero.subtitle %}<p>{{ page.hero.subtitle }}</p>{% endif %}
    {% if page.hero.description %}<p>{{ page.hero.description }}</p>{% endif %}
  </div>
</section>"##;

const HOME_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% set hero = page.hero %}
<section class="hero">
  {% if hero.slides %}
  <div class="carousel" data-interval="{{ hero.carousel.interval_ms }}" data-loop="{{ hero.carousel['loop'] }}" data-drag-free="{{ hero.carousel.drag_free }}" data-pause-on-hover="{{ hero.carousel.pause_on_hover }}" data-stop-on-interaction="{{ hero.carousel.stop_on_interaction }}">
    <div class="carousel-track">
    {% for slide in hero.slides %}
      <div class="carousel-slide" style="background-image: url('{{ slide }}')"></div>
    {% endfor %}
    </div>
  </div>
  {% endif %}
  <div class="hero-overlay"></div>
  <div class="container hero-content">
    <h1>{{ hero.title }}{% if hero.highlighted_title %} <span class="hero-highlight">{{ hero.highlighted_title }}</span>{% endif %}</h1>
    <p>{{ hero.description }}</p>
    {% if hero.buttons %}
    <div class="hero-buttons">
    {% for button in hero.buttons %}
      <a href="{{ button.url }}" class="btn{% if button.variant != 'default' %} btn-{{ button.variant }}{% endif %}">{{ button.text }}</a>
    {% endfor %}
    </div>
    {% endif %}
  </div>
</section>

{% if page.stats %}
<section class="section section-muted">
  <div class="container grid grid-4">
  {% for stat in page.stats %}
    <div class="stat">
      {% if stat.icon %}<span class="icon-badge">{{ stat.icon | safe }}</span>{% endif %}
      <div class="stat-value">{{ stat.value }}</div>
      <div>{{ stat.label }}</div>
    </div>
  {% endfor %}
  </div>
</section>
{% endif %}

{% if page.features.items %}
<section class="section">
  <div class="container">
    <h2 class="section-title">{{ page.features.title }}</h2>
    {% if page.features.subtitle %}<p class="section-subtitle">{{ page.features.subtitle }}</p>{% endif %}
    <div class="grid grid-4">
    {% for item in page.features.items %}
      <div class="card">
        {% if item.icon %}<span class="icon-badge">{{ item.icon | safe }}</span>{% endif %}
        <h3>{{ item.title }}</h3>
        <p>{{ item.description }}</p>
      </div>
    {% endfor %}
    </div>
  </div>
</section>
{% endif %}

{% set cta = page.cta %}
<section class="section section-primary">
  <div class="container">
    <h2 class="section-title">{{ cta.title }}</h2>
    <p class="section-subtitle">{{ cta.description }}</p>
    {% if cta.highlights %}
    <ul class="check-list">
    {% for highlight in cta.highlights %}
      <li>{% if cta.highlight_icon %}{{ cta.highlight_icon | safe }}{% endif %}{{ highlight }}</li>
    {% endfor %}
    </ul>
    {% endif %}
    <div class="hero-buttons">
      <a href="{{ cta.button_url }}" class="btn btn-secondary">{{ cta.button_text }}{% if cta.button_icon %}{{ cta.button_icon | safe }}{% endif %}</a>
    </div>
  </div>
</section>
{% endblock %}"##;

const ABOUT_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% include "hero.html" %}

<section class="section">
  <div class="container grid grid-2">
    <div class="prose">
      <h2 class="section-title">{{ page.story.title }}</h2>
      {% for paragraph in page.story.paragraphs %}
      <p>{{ paragraph }}</p>
      {% endfor %}
    </div>
    <div class="card">
      <h3>School Information</h3>
      <ul class="check-list">
      {% for fact in page.facts %}
        <li>{{ fact.icon | safe }}<span><strong>{{ fact.label }}:</strong> {{ fact.value }}</span></li>
      {% endfor %}
      </ul>
    </div>
  </div>
</section>

{% if page.mission_vision %}
<section class="section section-muted">
  <div class="container grid grid-2">
  {% for card in page.mission_vision %}
    <div class="card">
      {% if card.icon %}<span class="icon-badge">{{ card.icon | safe }}</span>{% endif %}
      <h3>{{ card.title }}</h3>
      <p>{{ card.description }}</p>
    </div>
  {% endfor %}
  </div>
</section>
{% endif %}

{% if page.values %}
<section class="section">
  <div class="container">
    <h2 class="section-title">{{ page.values_title }}</h2>
    <div class="grid grid-4">
    {% for value in page.values %}
      <div class="card">
        {% if value.icon %}<span class="icon-badge">{{ value.icon | safe }}</span>{% endif %}
        <h3>{{ value.title }}</h3>
        <p>{{ value.description }}</p>
      </div>
    {% endfor %}
    </div>
  </div>
</section>
{% endif %}
{% endblock %}"##;

const COURSES_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% include "hero.html" %}

{% if page.features %}
<section class="section">
  <div class="container grid grid-4">
  {% for feature in page.features %}
    <div class="card">
      {% if feature.icon %}<span class="icon-badge">{{ feature.icon | safe }}</span>{% endif %}
      <h3>{{ feature.title }}</h3>
      <p>{{ feature.description }}</p>
    </div>
  {% endfor %}
  </div>
</section>
{% endif %}

{% if page.levels %}
<section class="section section-muted">
  <div class="container">
  {% for level in page.levels %}
    <article class="level" data-curriculum="{{ level.curriculum.kind }}">
      <h2 class="level-title">{% if page.level_icon %}{{ page.level_icon | safe }}{% endif %}{{ level.name }}</h2>
      {% if level.description %}<p class="section-subtitle">{{ level.description }}</p>{% endif %}
      {% if level.key_features %}
      <div class="badges">
      {% for feature in level.key_features %}<span class="badge">{{ feature }}</span>{% endfor %}
      </div>
      {% endif %}
      {% if level.curriculum.kind == "streams" %}
      <div class="grid grid-2">
      {% for stream in level.curriculum.streams %}
        <div class="card stream">
          <h3>{{ stream.name }}</h3>
          <h4>Core Subjects</h4>
          <div class="badges">{% for subject in stream.core_subjects %}<span class="badge badge-secondary">{{ subject }}</span>{% endfor %}</div>
          <h4>Electives</h4>
          <div class="badges">{% for subject in stream.electives %}<span class="badge">{{ subject }}</span>{% endfor %}</div>
          {% if stream.career_paths %}
          <h4>Career Paths</h4>
          <ul class="check-list">
          {% for path in stream.career_paths %}
            <li>{% if page.check_icon %}{{ page.check_icon | safe }}{% endif %}{{ path }}</li>
          {% endfor %}
          </ul>
          {% endif %}
        </div>
      {% endfor %}
      </div>
      {% elif level.curriculum.kind == "grouped" %}
      {% for group in level.curriculum.groups %}
      <div class="grade-group">
        <h3>{{ group.label }}</h3>
        <div class="grid grid-3">
        {% for subject in group.subjects %}
          <div class="subject">{% if page.check_icon %}{{ page.check_icon | safe }}{% endif %}{{ subject }}</div>
        {% endfor %}
        </div>
      </div>
      {% endfor %}
      {% else %}
      <div class="grid grid-3">
      {% for subject in level.curriculum.subjects %}
        <div class="subject">{% if page.check_icon %}{{ page.check_icon | safe }}{% endif %}{{ subject }}</div>
      {% endfor %}
      </div>
      {% endif %}
    </article>
  {% endfor %}
  </div>
</section>
{% endif %}

{% if page.activities %}
<section class="section">
  <div class="container">
    <h2 class="section-title">Co-Curricular Activities</h2>
    <div class="badges">
    {% for activity in page.activities %}<span class="badge badge-secondary">{{ activity }}</span>{% endfor %}
    </div>
  </div>
</section>
{% endif %}

<section class="section section-muted">
  <div class="container grid grid-2">
    <div class="card">
      <h3>{{ page.admission_process.title }}</h3>
      <ol class="steps">
      {% for step in page.admission_process.steps %}
        <li class="step"><span class="step-number">{{ loop.index }}</span><span>{{ step }}</span></li>
      {% endfor %}
      </ol>
      {% if page.admission_process.documents_required %}
      <h4>Documents Required</h4>
      <ul class="check-list">
      {% for document in page.admission_process.documents_required %}
        <li>{% if page.check_icon %}{{ page.check_icon | safe }}{% endif %}{{ document }}</li>
      {% endfor %}
      </ul>
      {% endif %}
    </div>
    {% if page.scholarships.programs %}
    <div class="card">
      <h3>{{ page.scholarships.title }}</h3>
      {% for program in page.scholarships.programs %}
      <div class="scholarship">
        <h4>{{ program.name }}</h4>
        <p>{{ program.eligibility }}</p>
        <span class="badge">{{ program.benefit }}</span>
      </div>
      {% endfor %}
    </div>
    {% endif %}
  </div>
</section>
{% endblock %}"##;

const GALLERY_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% include "hero.html" %}

<section class="section">
  <div class="container">
    <div class="gallery-grid">
    {% for image in page.images %}
      <button type="button" class="gallery-item" style="aspect-ratio: {{ image.width }} / {{ image.height }}" data-index="{{ loop.index0 }}" data-src="{{ image.src }}" data-alt="{{ image.alt }}" data-width="{{ image.width }}" data-height="{{ image.height }}">
        <img src="{{ image.src }}" alt="{{ image.alt }}" width="{{ image.width }}" height="{{ image.height }}" loading="lazy">
      </button>
    {% endfor %}
    </div>
  </div>
</section>

{% if page.images %}
<div class="lightbox" role="dialog" aria-modal="true" data-index="{{ page.lightbox.index }}">
  <button type="button" class="icon-btn lightbox-close" aria-label="Close">{{ layout.icons.close | safe }}</button>
  <button type="button" class="icon-btn lightbox-prev" aria-label="Previous image">{{ page.prev_icon | safe }}</button>
  <img src="" alt="">
  <button type="button" class="icon-btn lightbox-next" aria-label="Next image">{{ page.next_icon | safe }}</button>
</div>
{% endif %}

{% if page.tour %}
<section class="section section-muted">
  <div class="container grid grid-2">
    <div>
      <h2 class="section-title">{{ page.tour.title }}</h2>
      <p>{{ page.tour.description }}</p>
    </div>
    <img src="{{ page.tour.poster }}" alt="{{ page.tour.title }}" loading="lazy">
  </div>
</section>
{% endif %}
{% endblock %}"##;

const ACHIEVEMENTS_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% include "hero.html" %}

{% if page.stats %}
<section class="section section-muted">
  <div class="container grid grid-4">
  {% for stat in page.stats %}
    <div class="stat">
      {% if stat.icon %}<span class="icon-badge">{{ stat.icon | safe }}</span>{% endif %}
      <div class="stat-value">{{ stat.value }}</div>
      <div>{{ stat.label }}</div>
    </div>
  {% endfor %}
  </div>
</section>
{% endif %}

{% for group in page.years %}
<section class="section">
  <div class="container">
    <h2 class="section-title">{{ group.year }}</h2>
    <div class="grid grid-2">
    {% for item in group.items %}
      <div class="card">
        {% if item.icon %}<span class="icon-badge">{{ item.icon | safe }}</span>{% endif %}
        <h3>{{ item.title }}</h3>
        <span class="badge">{{ item.category }}</span>
        <p>{{ item.description }}</p>
      </div>
    {% endfor %}
    </div>
  </div>
</section>
{% endfor %}

{% if page.alumni %}
<section class="section section-muted">
  <div class="container">
    <h2 class="section-title">Notable Alumni</h2>
    <div class="grid grid-3">
    {% for alumnus in page.alumni %}
      <div class="card">
        <h3>{{ alumnus.name }}</h3>
        <p>{{ alumnus.role }}</p>
        <span class="badge badge-secondary">Class of {{ alumnus.year }}</span>
      </div>
    {% endfor %}
    </div>
  </div>
</section>
{% endif %}
{% endblock %}"##;

const CONTACT_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
{% include "hero.html" %}
{% set form = page.form %}

<section class="section">
  <div class="container grid grid-2">
    <div class="card">
      <h3>{{ form.title }}</h3>
      <form class="form">
        <div class="form-row">
          <div class="field">
            <label for="first-name">{{ form.fields.first_name }}</label>
            <input id="first-name" placeholder="{{ form.placeholders.first_name }}" required>
          </div>
          <div class="field">
            <label for="last-name">{{ form.fields.last_name }}</label>
            <input id="last-name" placeholder="{{ form.placeholders.last_name }}" required>
          </div>
        </div>
        <div class="field">
          <label for="email">{{ form.fields.email }}</label>
          <input id="email" type="email" placeholder="{{ form.placeholders.email }}" required>
        </div>
        <div class="field">
          <label for="phone">{{ form.fields.phone }}</label>
          <input id="phone" type="tel" placeholder="{{ form.placeholders.phone }}">
        </div>
        <div class="field">
          <label for="subject">{{ form.fields.subject }}</label>
          <input id="subject" placeholder="{{ form.placeholders.subject }}" required>
        </div>
        <div class="field">
          <label for="message">{{ form.fields.message }}</label>
          <textarea id="message" placeholder="{{ form.placeholders.message }}" required></textarea>
        </div>
        <button type="submit" class="btn btn-block">{{ form.submit_button }}</button>
      </form>
    </div>

    <div>
      {% if page.info %}
      <div class="grid">
      {% for info in page.info %}
        <div class="card">
          {% if info.icon %}<span class="icon-badge">{{ info.icon | safe }}</span>{% endif %}
          <h3>{{ info.title }}</h3>
          <p>{{ info.content }}</p>
          {% if info.subtext %}<p>{{ info.subtext }}</p>{% endif %}
        </div>
      {% endfor %}
      </div>
      {% endif %}

      <a class="map-link" href="{{ page.map.google_url }}" target="_blank" rel="noopener noreferrer">
        {{ page.map.icon | safe }}
        <span>View on Google Maps</span>
        <small>{{ page.map.coordinates }}</small>
      </a>
    </div>
  </div>
</section>

<section class="section section-muted">
  <div class="container">
    <iframe class="map-embed" src="{{ page.map.embed_url }}" title="School location" loading="lazy"></iframe>
    <p><a href="{{ page.map.attribution_url }}" target="_blank" rel="noopener noreferrer">View larger map</a></p>
  </div>
</section>

<section class="section">
  <div class="container">
    <h2 class="section-title">{{ page.faq.title }}</h2>
    <p class="section-subtitle">{{ page.faq.description }}</p>
    <div class="hero-buttons">
      <a href="{{ page.faq_url }}" class="btn btn-outline">{{ page.faq.button_text }}</a>
    </div>
  </div>
</section>
{% endblock %}"##;
