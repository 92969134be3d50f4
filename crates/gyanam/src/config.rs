//! Site configuration (site.toml).

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use gyanam_static::BuildConfig;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub site_url: Option<String>,
    #[serde(default = "default_content")]
    pub content: String,
    #[serde(default = "default_public")]
    pub public: String,
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            base_url: default_base_url(),
            site_url: None,
            content: default_content(),
            public: default_public(),
            output: default_output(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct BuildSettings {
    #[serde(default = "default_minify")]
    pub minify: bool,
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            minify: default_minify(),
            probe_timeout_ms: default_probe_timeout_ms(),
        }
    }
}

fn default_title() -> String {
    "Gyanam Academy".to_string()
}
fn default_base_url() -> String {
    "/".to_string()
}
fn default_content() -> String {
    "content".to_string()
}
fn default_public() -> String {
    "public".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_minify() -> bool {
    true
}
fn default_probe_timeout_ms() -> u64 {
    5000
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("{} not found, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}

impl ConfigFile {
    /// Build settings with the CLI overrides applied.
    ///
    /// Relative directories resolve against the directory holding the
    /// config file.
    pub fn build_config(
        &self,
        config_path: &Path,
        output: Option<PathBuf>,
        minify: Option<bool>,
    ) -> BuildConfig {
        let root = config_path.parent().unwrap_or(Path::new(""));

        BuildConfig {
            content_dir: root.join(&self.site.content),
            public_dir: root.join(&self.site.public),
            output_dir: output.unwrap_or_else(|| root.join(&self.site.output)),
            minify: minify.unwrap_or(self.build.minify),
            base_url: normalize_base_url(&self.site.base_url),
            site_url: self
                .site
                .site_url
                .as_deref()
                .map(|url| url.trim_end_matches('/'))
                .filter(|url| !url.is_empty())
                .map(str::to_string),
            title: self.site.title.clone(),
            probe_timeout: Duration::from_millis(self.build.probe_timeout_ms),
        }
    }
}

/// Ensure the base URL starts and ends with `/`.
fn normalize_base_url(base_url: &str) -> String {
    let trimmed = base_url.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_uses_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("site.toml")).unwrap();

        assert_eq!(config, ConfigFile::default());
        assert_eq!(config.build.probe_timeout_ms, 5000);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site]\ntitle = \"Test School\"\n\n[build]\nminify = false\n").unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.site.title, "Test School");
        assert_eq!(config.site.output, "dist");
        assert!(!config.build.minify);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site\ntitle = ").unwrap();

        let err = load_config(&path).unwrap_err();

        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn cli_overrides_take_precedence() {
        let config = ConfigFile::default();

        let build = config.build_config(
            Path::new("site/site.toml"),
            Some(PathBuf::from("out")),
            Some(false),
        );

        assert_eq!(build.output_dir, PathBuf::from("out"));
        assert_eq!(build.content_dir, PathBuf::from("site/content"));
        assert!(!build.minify);
        assert_eq!(build.probe_timeout, Duration::from_millis(5000));
    }

    #[test]
    fn site_url_drops_trailing_slash() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site]\nsite_url = \"https://gyanam.example/\"\n").unwrap();

        let build = load_config(&path).unwrap().build_config(&path, None, None);

        assert_eq!(build.site_url.as_deref(), Some("https://gyanam.example"));
        assert_eq!(ConfigFile::default().build_config(&path, None, None).site_url, None);
    }

    #[test]
    fn normalizes_base_url() {
        assert_eq!(normalize_base_url("/"), "/");
        assert_eq!(normalize_base_url(""), "/");
        assert_eq!(normalize_base_url("academy"), "/academy/");
        assert_eq!(normalize_base_url("/academy/"), "/academy/");
    }
}
