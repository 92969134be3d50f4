//! Development server command.

use std::path::Path;

use anyhow::Result;
use gyanam_server::{DevServer, DevServerConfig};

use crate::config::load_config;

/// Run the dev server.
pub async fn run(config_path: &Path, port: u16, open: bool) -> Result<()> {
    tracing::info!("Starting development server on port {}", port);

    let build = load_config(config_path)?.build_config(config_path, None, None);

    let config = DevServerConfig {
        build,
        port,
        open,
        ..Default::default()
    };

    DevServer::new(config).start().await?;

    Ok(())
}
