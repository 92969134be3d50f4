//! Stylesheet and client runtime.

use gyanam_widgets::carousel::DEFAULT_INTERVAL_MS;
use gyanam_widgets::lightbox::CLOSED;

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Generate the site stylesheet.
    pub fn generate_css() -> String {
        DEFAULT_CSS.to_string()
    }

    /// Generate the client runtime.
    ///
    /// Carousel and lightbox defaults come from the widget models so the
    /// browser behaves the way those models describe.
    pub fn generate_js() -> String {
        DEFAULT_JS
            .replace("__CAROUSEL_INTERVAL_MS__", &DEFAULT_INTERVAL_MS.to_string())
            .replace("__LIGHTBOX_CLOSED__", &CLOSED.to_string())
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

const DEFAULT_CSS: &str = r#"/* Gyanam Academy theme */

:root {
  --background: #ffffff;
  --foreground: #1c1917;
  --muted: #f5f5f4;
  --muted-foreground: #78716c;
  --primary: #eab308;
  --primary-foreground: #1c1917;
  --accent: #fef3c7;
  --border: #e7e5e4;
  --card: #ffffff;
  --radius: 0.5rem;
  --container: 72rem;
  --font-sans: system-ui, -apple-system, "Segoe UI", sans-serif;
  --font-display: Georgia, "Times New Roman", serif;
}

:root.dark {
  --background: #0c0a09;
  --foreground: #fafaf9;
  --muted: #1c1917;
  --muted-foreground: #a8a29e;
  --accent: #422006;
  --border: #292524;
  --card: #1c1917;
}

* {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--background);
  color: var(--foreground);
  line-height: 1.6;
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

a {
  color: inherit;
  text-decoration: none;
}

main {
  flex: 1;
  padding-top: 4rem;
}

.container {
  max-width: var(--container);
  margin: 0 auto;
  padding: 0 1rem;
}

.icon {
  width: 1.25rem;
  height: 1.25rem;
  flex-shrink: 0;
}

/* Navbar */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 50;
  background: var(--background);
  border-bottom: 1px solid var(--border);
}

.navbar-inner {
  display: flex;
  height: 4rem;
  align-items: center;
  justify-content: space-between;
}

.navbar-logo img {
  height: 3.5rem;
  width: 3.5rem;
  border-radius: 9999px;
}

.nav-links {
  display: flex;
  gap: 0.25rem;
  list-style: none;
}

.nav-link {
  display: block;
  padding: 0.5rem 1rem;
  border-radius: var(--radius);
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--muted-foreground);
}

.nav-link:hover {
  background: var(--accent);
  color: var(--foreground);
}

.nav-link.active {
  background: var(--primary);
  color: #ffffff;
}

.navbar-actions {
  display: flex;
  gap: 0.5rem;
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border: none;
  border-radius: var(--radius);
  background: transparent;
  color: inherit;
  cursor: pointer;
}

.menu-btn,
.mobile-menu {
  display: none;
}

.mobile-menu.open {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  padding: 1rem 0;
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }

  .menu-btn {
    display: inline-flex;
  }
}

/* Sections */
.section {
  padding: 5rem 0;
}

.section-muted {
  background: var(--muted);
}

.section-primary {
  background: var(--primary);
  color: var(--primary-foreground);
}

.section-title {
  font-family: var(--font-display);
  font-size: 2rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 1rem;
}

.section-subtitle {
  color: var(--muted-foreground);
  text-align: center;
  max-width: 42rem;
  margin: 0 auto 3rem;
}

.page-hero {
  padding: 5rem 0;
  text-align: center;
  background: linear-gradient(135deg, var(--accent), var(--background));
}

.page-hero h1 {
  font-family: var(--font-display);
  font-size: 3rem;
  font-weight: 700;
}

.page-hero p {
  font-size: 1.25rem;
  color: var(--muted-foreground);
  max-width: 42rem;
  margin: 1.5rem auto 0;
}

/* Home hero with carousel */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  overflow: hidden;
  color: #ffffff;
}

.carousel,
.hero-overlay {
  position: absolute;
  inset: 0;
}

.carousel {
  overflow: hidden;
}

.carousel-track {
  display: flex;
  height: 100%;
  transition: transform 0.8s ease;
}

.carousel-slide {
  flex: 0 0 100%;
  min-width: 0;
  background-size: cover;
  background-position: center;
  filter: blur(2px) brightness(0.8);
  transform: scale(1.02);
}

.hero-overlay {
  background: rgba(0, 0, 0, 0.5);
  pointer-events: none;
}

.hero-content {
  position: relative;
  text-align: center;
  max-width: 56rem;
  margin: 0 auto;
}

.hero-content h1 {
  font-family: var(--font-display);
  font-size: 3.5rem;
  font-weight: 700;
}

.hero-highlight {
  display: block;
  color: var(--primary);
  font-size: 5rem;
}

.hero-buttons {
  display: flex;
  gap: 1rem;
  justify-content: center;
  flex-wrap: wrap;
  margin-top: 2rem;
}

/* Buttons and badges */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 2rem;
  border: 1px solid transparent;
  border-radius: var(--radius);
  font-weight: 600;
  cursor: pointer;
  background: var(--primary);
  color: var(--primary-foreground);
}

.btn-secondary {
  background: var(--muted);
  color: var(--foreground);
}

.btn-outline {
  background: transparent;
  border-color: var(--border);
  color: inherit;
}

.btn-block {
  width: 100%;
  justify-content: center;
}

.badge {
  display: inline-block;
  padding: 0.125rem 0.625rem;
  border-radius: 9999px;
  font-size: 0.75rem;
  font-weight: 600;
  background: var(--muted);
  border: 1px solid var(--border);
}

.badge-secondary {
  background: var(--accent);
}

.badges {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

/* Cards and grids */
.grid {
  display: grid;
  gap: 1.5rem;
}

.grid-2 {
  grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
}

.grid-3 {
  grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
}

.grid-4 {
  grid-template-columns: repeat(auto-fit, minmax(11rem, 1fr));
}

.card {
  background: var(--card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
}

.card h3 {
  font-size: 1.125rem;
  font-weight: 600;
  margin-bottom: 0.5rem;
}

.card p {
  font-size: 0.875rem;
  color: var(--muted-foreground);
}

.icon-badge {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 3rem;
  height: 3rem;
  border-radius: 9999px;
  background: var(--accent);
  color: var(--primary);
  margin-bottom: 1rem;
}

.stat {
  text-align: center;
}

.stat-value {
  font-size: 2rem;
  font-weight: 700;
}

.check-list {
  list-style: none;
  display: grid;
  gap: 0.5rem;
}

.check-list li {
  display: flex;
  align-items: flex-start;
  gap: 0.5rem;
}

.steps {
  list-style: none;
  display: grid;
  gap: 1rem;
}

.step {
  display: flex;
  gap: 1rem;
  align-items: flex-start;
  padding: 1rem;
  background: var(--muted);
  border-radius: var(--radius);
}

.step-number {
  flex-shrink: 0;
  width: 2rem;
  height: 2rem;
  border-radius: 9999px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--accent);
  font-weight: 600;
}

.prose p {
  margin-bottom: 1rem;
  color: var(--muted-foreground);
  font-size: 1.125rem;
}

/* Curriculum */
.level {
  margin-bottom: 4rem;
}

.level-title {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  font-family: var(--font-display);
  font-size: 2rem;
}

.subject {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem;
  background: var(--muted);
  border-radius: var(--radius);
  font-size: 0.875rem;
}

/* Gallery and lightbox */
.gallery-grid {
  display: grid;
  gap: 1rem;
  grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
}

.gallery-item {
  padding: 0;
  overflow: hidden;
  cursor: pointer;
  border: none;
  background: none;
  transition: transform 0.3s;
}

.gallery-item:hover {
  transform: scale(1.05);
}

.gallery-item img {
  width: 100%;
  height: 100%;
  object-fit: cover;
  display: block;
}

.lightbox {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: none;
  align-items: center;
  justify-content: center;
  background: rgba(0, 0, 0, 0.92);
}

.lightbox.open {
  display: flex;
}

.lightbox img {
  max-width: 90vw;
  max-height: 90vh;
}

.lightbox .icon-btn {
  position: absolute;
  color: #ffffff;
}

.lightbox-close {
  top: 1rem;
  right: 1rem;
}

.lightbox-prev {
  left: 1rem;
}

.lightbox-next {
  right: 1rem;
}

/* Forms */
.form {
  display: grid;
  gap: 1rem;
}

.form-row {
  display: grid;
  gap: 1rem;
  grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
}

.field {
  display: grid;
  gap: 0.5rem;
}

.field label {
  font-size: 0.875rem;
  font-weight: 500;
}

.field input,
.field textarea {
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--background);
  color: var(--foreground);
  font: inherit;
}

.field textarea {
  min-height: 90px;
}

.map-link {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  height: 200px;
  background: linear-gradient(135deg, var(--accent), var(--muted));
  border-radius: var(--radius);
}

.map-embed {
  width: 100%;
  height: 400px;
  border: 0;
}

/* Footer */
.footer {
  border-top: 1px solid var(--border);
  background: var(--muted);
  padding: 3rem 0;
  font-size: 0.875rem;
}

.footer h3 {
  font-weight: 600;
  margin-bottom: 1rem;
}

.footer-brand {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.footer-brand img {
  width: auto;
  object-fit: contain;
}

.footer-list {
  list-style: none;
  display: grid;
  gap: 0.5rem;
  color: var(--muted-foreground);
}

.social {
  display: flex;
  gap: 0.75rem;
}

.social a {
  display: flex;
  align-items: center;
  justify-content: center;
  width: 2.25rem;
  height: 2.25rem;
  border-radius: 9999px;
  background: var(--accent);
}

.copyright {
  margin-top: 2rem;
  padding-top: 2rem;
  border-top: 1px solid var(--border);
  text-align: center;
  color: var(--muted-foreground);
}

.h-12 { height: 3rem; }
.h-14 { height: 3.5rem; }
.h-16 { height: 4rem; }
.h-20 { height: 5rem; }
"#;

const DEFAULT_JS: &str = r#"// Gyanam Academy - client runtime
(function() {
  'use strict';

  // Theme toggle
  const root = document.documentElement;
  if (localStorage.getItem('theme') === 'dark') {
    root.classList.add('dark');
  }
  document.querySelectorAll('[data-theme-toggle]').forEach(btn => {
    btn.addEventListener('click', () => {
      const dark = root.classList.toggle('dark');
      localStorage.setItem('theme', dark ? 'dark' : 'light');
    });
  });

  // Mobile menu: toggled by the button, closed by any link
  const menuBtn = document.querySelector('.menu-btn');
  const menu = document.querySelector('.mobile-menu');
  if (menuBtn && menu) {
    menuBtn.addEventListener('click', () => {
      const open = menu.classList.toggle('open');
      menuBtn.setAttribute('aria-expanded', String(open));
    });
    menu.querySelectorAll('a').forEach(link => {
      link.addEventListener('click', () => {
        menu.classList.remove('open');
        menuBtn.setAttribute('aria-expanded', 'false');
      });
    });
  }

  // Background carousel: one slide per interval, looping, paused on hover
  document.querySelectorAll('.carousel').forEach(el => {
    const track = el.querySelector('.carousel-track');
    const slides = track ? track.children.length : 0;
    if (slides < 2) return;

    const interval = Number(el.dataset.interval) || __CAROUSEL_INTERVAL_MS__;
    const loop = el.dataset.loop !== 'false';
    const pauseOnHover = el.dataset.pauseOnHover !== 'false';
    let position = 0;
    let timer = null;

    const render = () => {
      track.style.transform = 'translateX(' + (-position * 100) + '%)';
    };
    const step = () => {
      const next = Math.round(position) + 1;
      if (next >= slides) {
        if (!loop) return;
        position = 0;
      } else {
        position = next;
      }
      render();
    };
    const play = () => {
      clearInterval(timer);
      timer = setInterval(step, interval);
    };
    const pause = () => {
      clearInterval(timer);
      timer = null;
    };

    // Hover and drag are tracked on the whole hero so the overlay and
    // content above the track still count.
    const surface = el.closest('.hero') || el;
    const stopOnInteraction = el.dataset.stopOnInteraction === 'true';
    let hovered = false;
    let stopped = false;
    const resume = () => {
      if (stopped || (hovered && pauseOnHover)) return;
      play();
    };

    surface.addEventListener('mouseenter', () => {
      hovered = true;
      if (pauseOnHover) pause();
    });
    surface.addEventListener('mouseleave', () => {
      hovered = false;
      resume();
    });

    // Free drag: the track stays where it is released
    let dragStart = null;
    surface.addEventListener('pointerdown', e => {
      if (e.target.closest('a, button')) return;
      dragStart = { x: e.clientX, position: position };
    });
    surface.addEventListener('pointermove', e => {
      if (!dragStart) return;
      const moved = dragStart.position + (dragStart.x - e.clientX) / el.clientWidth;
      position = loop
        ? ((moved % slides) + slides) % slides
        : Math.min(Math.max(moved, 0), slides - 1);
      render();
    });
    window.addEventListener('pointerup', () => {
      if (!dragStart) return;
      dragStart = null;
      if (stopOnInteraction) {
        stopped = true;
        pause();
      } else {
        resume();
      }
    });

    play();
  });

  // Contact form is display only; nothing leaves the page
  document.querySelectorAll('form.form').forEach(form => {
    form.addEventListener('submit', e => e.preventDefault());
  });

  // Gallery lightbox: a single viewer, closed at index -1
  const lightbox = document.querySelector('.lightbox');
  if (lightbox) {
    const thumbs = Array.from(document.querySelectorAll('.gallery-item'));
    const img = lightbox.querySelector('img');
    let index = __LIGHTBOX_CLOSED__;

    const show = k => {
      if (k < 0 || k >= thumbs.length) return;
      index = k;
      const thumb = thumbs[k];
      img.src = thumb.dataset.src;
      img.alt = thumb.dataset.alt || '';
      img.width = Number(thumb.dataset.width);
      img.height = Number(thumb.dataset.height);
      lightbox.classList.add('open');
      lightbox.dataset.index = String(index);
    };
    const close = () => {
      index = __LIGHTBOX_CLOSED__;
      lightbox.classList.remove('open');
      lightbox.dataset.index = String(index);
    };
    const move = delta => {
      if (index < 0) return;
      show((index + delta + thumbs.length) % thumbs.length);
    };

    thumbs.forEach((thumb, k) => thumb.addEventListener('click', () => show(k)));
    lightbox.querySelector('.lightbox-close').addEventListener('click', close);
    lightbox.querySelector('.lightbox-prev').addEventListener('click', () => move(-1));
    lightbox.querySelector('.lightbox-next').addEventListener('click', () => move(1));
    lightbox.addEventListener('click', e => {
      if (e.target === lightbox) close();
    });
    document.addEventListener('keydown', e => {
      if (index < 0) return;
      if (e.key === 'Escape') close();
      if (e.key === 'ArrowLeft') move(-1);
      if (e.key === 'ArrowRight') move(1);
    });
  }
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_css() {
        let css = AssetPipeline::generate_css();
        assert!(css.contains(":root"));
        assert!(css.contains(".nav-link.active"));
        assert!(css.contains(".lightbox.open"));
    }

    #[test]
    fn injects_widget_constants_into_js() {
        let js = AssetPipeline::generate_js();

        assert!(js.contains("|| 5000"));
        assert!(js.contains("let index = -1;"));
        assert!(!js.contains("__CAROUSEL_INTERVAL_MS__"));
        assert!(!js.contains("__LIGHTBOX_CLOSED__"));
    }

    #[test]
    fn hero_overlay_passes_pointer_events_to_carousel() {
        let css = AssetPipeline::generate_css();
        let rule = &css[css.rfind(".hero-overlay {").unwrap()..];
        let rule = &rule[..rule.find('}').unwrap()];

        assert!(rule.contains("pointer-events: none"));

        let minified = AssetPipeline::minify_css(&css).unwrap();
        assert!(minified.contains("pointer-events:none"));
    }

    #[test]
    fn carousel_resumes_only_when_not_hovered() {
        let js = AssetPipeline::generate_js();

        assert!(js.contains("el.closest('.hero') || el"));
        assert!(js.contains("if (stopped || (hovered && pauseOnHover)) return;"));
        assert!(!js.contains("el.addEventListener('mouseenter'"));
    }

    #[test]
    fn contact_form_submit_is_cancelled() {
        let js = AssetPipeline::generate_js();

        assert!(js.contains("form.addEventListener('submit', e => e.preventDefault())"));
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.card {
    background-color: white;
    padding: 10px;
}
        "#;

        let minified = AssetPipeline::minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".card"));
    }

    #[test]
    fn minifies_default_theme() {
        let css = AssetPipeline::generate_css();
        let minified = AssetPipeline::minify_css(&css).unwrap();

        assert!(minified.len() < css.len());
    }
}
