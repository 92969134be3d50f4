//! Content documents for the Gyanam Academy site.
//!
//! Each route reads one JSON document from the content directory. This crate
//! owns their schemas, validates them on load, and resolves the symbolic icon
//! names they contain.

pub mod curriculum;
pub mod defaults;
pub mod icons;
pub mod map;
pub mod pages;
pub mod store;

pub use curriculum::{grade_label, CoursesContent, Curriculum, Level, Stream};
pub use icons::{Icon, IconSet};
pub use map::MapLocation;
pub use pages::{
    AboutContent, AchievementsContent, ContactContent, Document, FooterContent, GalleryContent,
    GalleryFile, Hero, HomeContent,
};
pub use store::{parse_document, ContentError, ContentStore};
