//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Datelike;
use rayon::prelude::*;
use walkdir::WalkDir;

use gyanam_content::{ContentError, ContentStore};
use gyanam_widgets::{href, Route};

use crate::assets::AssetPipeline;
use crate::pages::{Layout, PageView};
use crate::probe::{FileProbe, GalleryImage, GalleryLoader, ProbeRequest, DEFAULT_PROBE_TIMEOUT};
use crate::templates::TemplateEngine;

/// Configuration for building the site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding the JSON content documents
    pub content_dir: PathBuf,

    /// Directory copied verbatim into the output (logo, gallery, carousel)
    pub public_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Minify CSS output
    pub minify: bool,

    /// Base URL for the site
    pub base_url: String,

    /// Absolute origin (`https://example.org`) for sitemap links
    pub site_url: Option<String>,

    /// Site title
    pub title: String,

    /// Upper bound for reading one gallery image header
    pub probe_timeout: Duration,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            public_dir: PathBuf::from("public"),
            output_dir: PathBuf::from("dist"),
            minify: true,
            base_url: "/".to_string(),
            site_url: None,
            title: "Gyanam Academy".to_string(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Number of gallery images on the gallery page
    pub gallery_images: usize,

    /// Gallery images rendered with fallback dimensions
    pub fallback_images: usize,

    /// Number of files copied from the public directory
    pub public_files: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("Failed to read public directory: {0}")]
    ReadError(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static site builder.
pub struct SiteBuilder {
    config: BuildConfig,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build the site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        // Content is validated before anything is written
        let store = ContentStore::load(&self.config.content_dir)?;

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let public_files = self.copy_public()?;

        // Pages render only once every gallery probe has settled
        let gallery = self.load_gallery(&store).await;
        let fallback_images = gallery.iter().filter(|image| !image.measured).count();

        let templates =
            TemplateEngine::new().map_err(|e| BuildError::TemplateError(e.to_string()))?;
        let year = chrono::Local::now().year();

        let results: Vec<Result<(), BuildError>> = Route::ALL
            .par_iter()
            .map(|route| self.build_page(*route, &store, &gallery, &templates, year))
            .collect();

        for result in results {
            result?;
        }

        self.generate_assets()?;
        self.generate_sitemap()?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: Route::ALL.len(),
            gallery_images: gallery.len(),
            fallback_images,
            public_files,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Copy the public directory into the output root.
    fn copy_public(&self) -> Result<usize, BuildError> {
        let public = &self.config.public_dir;

        if !public.exists() {
            tracing::warn!("Public directory not found: {}", public.display());
            return Ok(0);
        }

        let mut copied = 0;

        for entry in WalkDir::new(public).follow_links(true) {
            let entry = entry.map_err(|e| BuildError::ReadError(e.to_string()))?;
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(public).unwrap_or(path);
            let target = self.config.output_dir.join(relative);

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
            }

            fs::copy(path, &target)
                .map_err(|e| BuildError::WriteError(format!("{}: {}", target.display(), e)))?;
            copied += 1;
        }

        tracing::debug!("Copied {} public files", copied);

        Ok(copied)
    }

    /// Measure every gallery image, falling back where a probe fails.
    async fn load_gallery(&self, store: &ContentStore) -> Vec<GalleryImage> {
        let gallery = &store.gallery;
        let directory = self
            .config
            .public_dir
            .join(gallery.directory.trim_matches('/'));

        let requests: Vec<ProbeRequest> = gallery
            .images
            .iter()
            .map(|file| ProbeRequest {
                src: gallery.url(file),
                alt: file.alt.clone(),
                path: directory.join(&file.name),
            })
            .collect();

        let loader = GalleryLoader::new(requests, self.config.probe_timeout);
        let images = loader.run(Arc::new(FileProbe)).await;

        tracing::debug!("Measured {} gallery images", images.len());

        images
    }

    /// Render and write a single route.
    fn build_page(
        &self,
        route: Route,
        store: &ContentStore,
        gallery: &[GalleryImage],
        templates: &TemplateEngine,
        year: i32,
    ) -> Result<(), BuildError> {
        let base_url = &self.config.base_url;
        let layout = Layout::new(route, &self.config.title, base_url, store, year);
        let page = PageView::build(route, store, gallery, base_url);

        let html = templates
            .render_page(route.template(), &layout, &page)
            .map_err(|e| BuildError::TemplateError(format!("{}: {}", route.template(), e)))?;

        let output_path = self.output_path(route);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        fs::write(&output_path, html).map_err(|e| BuildError::WriteError(e.to_string()))?;

        tracing::debug!("Rendered {} -> {}", route.path(), output_path.display());

        Ok(())
    }

    /// `dist/index.html` for the home page, `dist/<route>/index.html` otherwise.
    fn output_path(&self, route: Route) -> PathBuf {
        let dir = route.output_dir();
        if dir.is_empty() {
            self.config.output_dir.join("index.html")
        } else {
            self.config.output_dir.join(dir).join("index.html")
        }
    }

    /// Generate static assets.
    fn generate_assets(&self) -> Result<(), BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        let css = AssetPipeline::generate_css();
        let css = if self.config.minify {
            match AssetPipeline::minify_css(&css) {
                Ok(minified) => minified,
                Err(e) => {
                    tracing::warn!("{}, writing unminified CSS", e);
                    css
                }
            }
        } else {
            css
        };
        write_file(&assets_dir.join("main.css"), &css)?;

        let js = AssetPipeline::generate_js();
        write_file(&assets_dir.join("main.js"), &js)?;

        Ok(())
    }

    /// Generate sitemap and robots.txt.
    fn generate_sitemap(&self) -> Result<(), BuildError> {
        let origin = self.config.site_url.as_deref().unwrap_or("");
        let urls: Vec<String> = Route::ALL
            .iter()
            .map(|route| {
                format!(
                    "  <url>\n    <loc>{}{}</loc>\n  </url>",
                    origin,
                    href(&self.config.base_url, route.path())
                )
            })
            .collect();

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );
        write_file(&self.config.output_dir.join("sitemap.xml"), &sitemap)?;

        // Crawlers only accept an absolute sitemap location.
        let robots = match &self.config.site_url {
            Some(origin) => format!(
                "User-agent: *\nAllow: /\nSitemap: {}{}sitemap.xml\n",
                origin, self.config.base_url
            ),
            None => "User-agent: *\nAllow: /\n".to_string(),
        };
        write_file(&self.config.output_dir.join("robots.txt"), &robots)?;

        Ok(())
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), BuildError> {
    fs::write(path, contents)
        .map_err(|e| BuildError::WriteError(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gyanam_content::defaults;
    use tempfile::{tempdir, TempDir};

    /// A site directory seeded with the bundled content and one real image.
    fn site() -> TempDir {
        let temp = tempdir().unwrap();
        let content = temp.path().join("content");
        let gallery = temp.path().join("public").join("gallary");

        fs::create_dir_all(&content).unwrap();
        fs::create_dir_all(&gallery).unwrap();

        for (file, source) in defaults::DOCUMENTS {
            fs::write(content.join(file), source).unwrap();
        }
        fs::write(gallery.join("gal1.jpg"), png_header(1200, 900)).unwrap();
        fs::write(temp.path().join("public").join("logo.png"), png_header(64, 64)).unwrap();

        temp
    }

    fn config(root: &Path) -> BuildConfig {
        BuildConfig {
            content_dir: root.join("content"),
            public_dir: root.join("public"),
            output_dir: root.join("dist"),
            ..Default::default()
        }
    }

    fn png_header(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        bytes.extend_from_slice(&13u32.to_be_bytes());
        bytes.extend_from_slice(b"IHDR");
        bytes.extend_from_slice(&width.to_be_bytes());
        bytes.extend_from_slice(&height.to_be_bytes());
        bytes.extend_from_slice(&[8, 6, 0, 0, 0, 0, 0, 0, 0]);
        bytes
    }

    #[tokio::test]
    async fn builds_every_route() {
        let temp = site();
        let out = temp.path().join("dist");

        let result = SiteBuilder::new(config(temp.path())).build().await.unwrap();

        assert_eq!(result.pages, 6);
        assert!(out.join("index.html").exists());
        for dir in ["about-us", "courses", "gallery", "achievements", "contact"] {
            assert!(out.join(dir).join("index.html").exists(), "missing {}", dir);
        }
        assert!(out.join("assets").join("main.css").exists());
        assert!(out.join("assets").join("main.js").exists());
    }

    #[tokio::test]
    async fn missing_gallery_files_use_fallback_dimensions() {
        let temp = site();

        let result = SiteBuilder::new(config(temp.path())).build().await.unwrap();
        let html = fs::read_to_string(temp.path().join("dist/gallery/index.html")).unwrap();

        assert_eq!(result.gallery_images, 7);
        assert_eq!(result.fallback_images, 6);
        assert!(html.contains("aspect-ratio: 1200 / 900"));
        assert_eq!(html.matches("aspect-ratio: 800 / 600").count(), 6);
    }

    #[tokio::test]
    async fn copies_public_directory() {
        let temp = site();

        let result = SiteBuilder::new(config(temp.path())).build().await.unwrap();

        assert_eq!(result.public_files, 2);
        assert!(temp.path().join("dist/gallary/gal1.jpg").exists());
        assert!(temp.path().join("dist/logo.png").exists());
    }

    #[tokio::test]
    async fn generates_sitemap_and_robots() {
        let temp = site();

        SiteBuilder::new(BuildConfig {
            base_url: "/academy/".to_string(),
            ..config(temp.path())
        })
        .build()
        .await
        .unwrap();

        let sitemap = fs::read_to_string(temp.path().join("dist/sitemap.xml")).unwrap();
        let robots = fs::read_to_string(temp.path().join("dist/robots.txt")).unwrap();

        assert_eq!(sitemap.matches("<url>").count(), 6);
        assert!(sitemap.contains("<loc>/academy/</loc>"));
        assert!(sitemap.contains("<loc>/academy/about-us/</loc>"));
        assert!(!robots.contains("Sitemap:"));
    }

    #[tokio::test]
    async fn site_url_makes_sitemap_links_absolute() {
        let temp = site();

        SiteBuilder::new(BuildConfig {
            base_url: "/academy/".to_string(),
            site_url: Some("https://gyanam.example".to_string()),
            ..config(temp.path())
        })
        .build()
        .await
        .unwrap();

        let sitemap = fs::read_to_string(temp.path().join("dist/sitemap.xml")).unwrap();
        let robots = fs::read_to_string(temp.path().join("dist/robots.txt")).unwrap();

        assert!(sitemap.contains("<loc>https://gyanam.example/academy/contact/</loc>"));
        assert!(robots.contains("Sitemap: https://gyanam.example/academy/sitemap.xml\n"));
    }

    #[tokio::test]
    async fn unminified_css_keeps_formatting() {
        let temp = site();

        SiteBuilder::new(BuildConfig {
            minify: false,
            ..config(temp.path())
        })
        .build()
        .await
        .unwrap();

        let css = fs::read_to_string(temp.path().join("dist/assets/main.css")).unwrap();
        assert_eq!(css, AssetPipeline::generate_css());
    }

    #[tokio::test]
    async fn missing_content_directory_fails() {
        let temp = tempdir().unwrap();

        let err = SiteBuilder::new(config(temp.path())).build().await.unwrap_err();

        assert!(matches!(
            err,
            BuildError::Content(ContentError::DirectoryNotFound(_))
        ));
        assert!(!temp.path().join("dist").exists());
    }

    #[tokio::test]
    async fn invalid_document_names_the_file() {
        let temp = site();
        fs::write(temp.path().join("content/courses.json"), "{ \"hero\": 1 }").unwrap();

        let err = SiteBuilder::new(config(temp.path())).build().await.unwrap_err();

        assert!(err.to_string().contains("courses.json"));
    }
}
