//! Development server with live reload for the Gyanam Academy site.
//!
//! Builds the site, serves the output directory and rebuilds whenever the
//! content or public directories change, telling open browsers to reload.

pub mod server;
pub mod watcher;
pub mod websocket;

pub use server::{router, DevServer, DevServerConfig, ServerError};
pub use watcher::{FileWatcher, WatchEvent};
pub use websocket::{ReloadHub, ReloadMessage};
