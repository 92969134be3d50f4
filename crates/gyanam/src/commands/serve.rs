//! Preview server command.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use axum::Router;
use tower_http::services::ServeDir;

use crate::config::load_config;

/// Directory to serve: `--dir` if given, else the configured build output.
fn serve_dir(config_path: &Path, dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => Ok(load_config(config_path)?
            .build_config(config_path, None, None)
            .output_dir),
    }
}

/// Run the serve command.
pub async fn run(config_path: &Path, port: u16, dir: Option<PathBuf>) -> Result<()> {
    let dir = serve_dir(config_path, dir)?;
    if !dir.exists() {
        anyhow::bail!(
            "Directory not found: {}. Run 'gyanam build' first.",
            dir.display()
        );
    }

    let addr: SocketAddr = format!("127.0.0.1:{}", port)
        .parse()
        .context("Invalid address")?;

    tracing::info!("Serving {} at http://{}", dir.display(), addr);

    let app = Router::new().fallback_service(ServeDir::new(&dir));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    let url = format!("http://{}", addr);
    if let Err(e) = open::that(&url) {
        tracing::debug!("Could not open browser: {}", e);
    }

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_to_configured_output() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("site.toml");
        fs::write(&config, "[site]\noutput = \"public_html\"\n").unwrap();

        assert_eq!(
            serve_dir(&config, None).unwrap(),
            temp.path().join("public_html")
        );
    }

    #[test]
    fn missing_config_uses_dist_beside_it() {
        let temp = tempdir().unwrap();

        assert_eq!(
            serve_dir(&temp.path().join("site.toml"), None).unwrap(),
            temp.path().join("dist")
        );
    }

    #[test]
    fn explicit_dir_wins() {
        let temp = tempdir().unwrap();
        let config = temp.path().join("site.toml");
        fs::write(&config, "[site]\noutput = \"public_html\"\n").unwrap();

        assert_eq!(
            serve_dir(&config, Some(PathBuf::from("elsewhere"))).unwrap(),
            PathBuf::from("elsewhere")
        );
    }
}
