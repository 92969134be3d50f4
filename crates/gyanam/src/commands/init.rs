//! Scaffold a site from the bundled starter content.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use gyanam_content::defaults::DOCUMENTS;

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing site...");

    let root = config_path.parent().unwrap_or(Path::new(""));
    scaffold(root, config_path, yes)?;

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'gyanam dev' to start the development server.");

    Ok(())
}

/// Write site.toml, the content documents and the public directories.
///
/// Existing files are kept unless `overwrite` is set.
fn scaffold(root: &Path, config_path: &Path, overwrite: bool) -> Result<()> {
    let content_dir = root.join("content");

    if content_dir.exists() {
        if !overwrite {
            tracing::warn!(
                "{} already exists. Use --yes to overwrite.",
                content_dir.display()
            );
            return Ok(());
        }
    } else {
        fs::create_dir_all(&content_dir).context("Failed to create content directory")?;
    }

    if !config_path.exists() || overwrite {
        fs::write(config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        tracing::info!("Created {}", config_path.display());
    }

    for (file, source) in DOCUMENTS {
        let path = content_dir.join(file);
        if !path.exists() || overwrite {
            fs::write(&path, source)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Created {}", path.display());
        }
    }

    for dir in ["gallary", "carousel"] {
        let path = root.join("public").join(dir);
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
    }
    tracing::info!("Place the logo, gallery and carousel images under public/");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Gyanam Academy site configuration

[site]
# Site title, shown in every page title
title = "Gyanam Academy"

# Base URL (for deployment under a sub-path)
base_url = "/"

# Absolute origin for sitemap links and robots.txt
# site_url = "https://www.gyanamacademy.in"

# Content documents, public assets and build output
content = "content"
public = "public"
output = "dist"

[build]
# Minify the stylesheet
minify = true

# Time limit for measuring one gallery image
probe_timeout_ms = 5000
"#;
