//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gyanam_static::SiteBuilder;

use crate::config::load_config;

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building site...");

    let config = load_config(config_path)?.build_config(config_path, output, minify);

    let result = SiteBuilder::new(config)
        .build()
        .await
        .context("Build failed")?;

    tracing::info!(
        "Built {} pages and copied {} public files in {}ms",
        result.pages,
        result.public_files,
        result.duration_ms
    );

    if result.fallback_images > 0 {
        tracing::warn!(
            "{} of {} gallery images could not be measured",
            result.fallback_images,
            result.gallery_images
        );
    }

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
