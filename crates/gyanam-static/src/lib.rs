//! Static site generator for the Gyanam Academy website.
//!
//! Loads the content documents, measures the gallery images and renders one
//! HTML page per route together with the stylesheet and client runtime.

pub mod assets;
pub mod builder;
pub mod pages;
pub mod probe;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use probe::{GalleryImage, GalleryLoader, DEFAULT_PROBE_TIMEOUT};
