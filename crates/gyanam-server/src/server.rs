//! Development server implementation.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::sync::mpsc;
use tower_http::services::ServeDir;

use gyanam_static::{BuildConfig, SiteBuilder};

use crate::watcher::{FileWatcher, WatchEvent};
use crate::websocket::{
    inject_reload_script, reload_client_script, ReloadHub, ReloadMessage, RELOAD_PATH,
    RELOAD_SCRIPT_PATH,
};

/// Configuration for the development server.
#[derive(Debug, Clone)]
pub struct DevServerConfig {
    /// Build settings used for the initial build and every rebuild
    pub build: BuildConfig,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Open browser on start
    pub open: bool,
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self {
            build: BuildConfig::default(),
            port: 7777,
            host: "127.0.0.1".to_string(),
            open: true,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address {0}")]
    InvalidAddress(String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),

    #[error("File watch error: {0}")]
    WatchError(String),
}

/// Shared server state.
struct ServerState {
    hub: ReloadHub,
}

/// Development server.
pub struct DevServer {
    config: DevServerConfig,
}

impl DevServer {
    /// Create a new development server.
    pub fn new(config: DevServerConfig) -> Self {
        Self { config }
    }

    /// Build the site, then serve it and rebuild on every change.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr_str = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = addr_str
            .parse()
            .map_err(|_| ServerError::InvalidAddress(addr_str))?;

        let hub = ReloadHub::new();
        let builder = SiteBuilder::new(self.config.build.clone());

        // A failed first build still serves whatever is on disk
        rebuild(&builder, &hub).await;

        let (watcher, rx) = FileWatcher::new(
            &self.config.build.content_dir,
            &self.config.build.public_dir,
        )
        .map_err(|e| ServerError::WatchError(e.to_string()))?;

        let watch_hub = hub.clone();
        tokio::spawn(async move {
            watch_loop(rx, builder, watch_hub).await;
            // Keep watcher alive
            drop(watcher);
        });

        let app = router(&self.config.build.output_dir, hub);

        tracing::info!("Starting dev server at http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        if self.config.open {
            let url = format!("http://{}", addr);
            if let Err(e) = open::that(&url) {
                tracing::debug!("Could not open browser: {}", e);
            }
        }

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Router serving the output directory with the reload endpoints.
pub fn router(output_dir: &Path, hub: ReloadHub) -> Router {
    let state = Arc::new(ServerState { hub });

    Router::new()
        .route(RELOAD_PATH, get(ws_handler))
        .route(RELOAD_SCRIPT_PATH, get(reload_script_handler))
        .fallback_service(ServeDir::new(output_dir))
        .layer(middleware::map_response(inject_into_html))
        .with_state(state)
}

/// Rebuild once per batch of queued changes.
async fn watch_loop(mut rx: mpsc::Receiver<WatchEvent>, builder: SiteBuilder, hub: ReloadHub) {
    while let Some(event) = rx.recv().await {
        log_event(&event);
        while let Ok(queued) = rx.try_recv() {
            log_event(&queued);
        }

        rebuild(&builder, &hub).await;
    }
}

fn log_event(event: &WatchEvent) {
    match event {
        WatchEvent::ContentChanged(path) => tracing::info!("Content changed: {}", path.display()),
        WatchEvent::PublicChanged(path) => tracing::info!("Asset changed: {}", path.display()),
        WatchEvent::Removed(path) => tracing::info!("Removed: {}", path.display()),
    }
}

async fn rebuild(builder: &SiteBuilder, hub: &ReloadHub) {
    match builder.build().await {
        Ok(result) => {
            tracing::info!(
                "Built {} pages in {}ms ({} subscribers)",
                result.pages,
                result.duration_ms,
                hub.subscriber_count()
            );
            hub.send(ReloadMessage::Reload);
        }
        Err(e) => {
            tracing::error!("Build failed: {}", e);
            hub.send(ReloadMessage::BuildFailed {
                message: e.to_string(),
            });
        }
    }
}

/// Add the reload script to every HTML response.
async fn inject_into_html(response: Response) -> Response {
    let is_html = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("text/html"));

    if !is_html {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Failed to read page body: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let html = inject_reload_script(&String::from_utf8_lossy(&bytes));
    parts.headers.remove(header::CONTENT_LENGTH);

    Response::from_parts(parts, Body::from(html))
}

/// Handler for the reload WebSocket endpoint.
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<ServerState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Forward hub messages to one browser until it disconnects.
async fn handle_ws(mut socket: WebSocket, state: Arc<ServerState>) {
    let mut rx = state.hub.subscribe();

    if send_message(&mut socket, &ReloadMessage::Connected).await.is_err() {
        return;
    }

    while let Ok(msg) = rx.recv().await {
        if send_message(&mut socket, &msg).await.is_err() {
            break;
        }
    }
}

async fn send_message(socket: &mut WebSocket, msg: &ReloadMessage) -> Result<(), axum::Error> {
    let json = match serde_json::to_string(msg) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Failed to encode reload message: {}", e);
            return Ok(());
        }
    };
    socket.send(Message::Text(json.into())).await
}

/// Handler for the reload client script.
async fn reload_script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        reload_client_script(),
    )
}
