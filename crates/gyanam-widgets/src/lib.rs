//! Shared chrome and interactive widgets for the Gyanam Academy site.
//!
//! The site is static HTML, so interactive state lives in the browser. The
//! types here define that state and its transitions; the page builder emits
//! their configuration into the markup for the client runtime.

pub mod carousel;
pub mod lightbox;
pub mod nav;

pub use carousel::{Carousel, CarouselConfig};
pub use lightbox::Lightbox;
pub use nav::{href, nav_links, MobileMenu, NavLink, Route};
