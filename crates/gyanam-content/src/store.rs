//! Loading and validating the content directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::curriculum::CoursesContent;
use crate::pages::{
    AboutContent, AchievementsContent, ContactContent, Document, FooterContent, GalleryContent,
    HomeContent,
};

/// Errors that can occur when loading content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Content directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Invalid {document}: {message}")]
    Invalid {
        document: &'static str,
        message: String,
    },
}

/// Parse and validate one document from its JSON source.
pub fn parse_document<T: Document>(source: &str) -> Result<T, ContentError> {
    let doc: T = serde_json::from_str(source).map_err(|e| ContentError::Invalid {
        document: T::FILE,
        message: e.to_string(),
    })?;

    doc.validate().map_err(|message| ContentError::Invalid {
        document: T::FILE,
        message,
    })?;

    Ok(doc)
}

/// Every content document of the site.
#[derive(Debug, Clone)]
pub struct ContentStore {
    pub home: HomeContent,
    pub about: AboutContent,
    pub courses: CoursesContent,
    pub gallery: GalleryContent,
    pub achievements: AchievementsContent,
    pub contact: ContactContent,
    pub footer: FooterContent,
}

impl ContentStore {
    /// Load all documents from a content directory.
    pub fn load(dir: &Path) -> Result<Self, ContentError> {
        if !dir.is_dir() {
            return Err(ContentError::DirectoryNotFound(dir.display().to_string()));
        }

        let store = Self {
            home: load_document(dir)?,
            about: load_document(dir)?,
            courses: load_document(dir)?,
            gallery: load_document(dir)?,
            achievements: load_document(dir)?,
            contact: load_document(dir)?,
            footer: load_document(dir)?,
        };

        tracing::debug!(
            "Loaded content from {} ({} curriculum levels, {} gallery images)",
            dir.display(),
            store.courses.curriculum.len(),
            store.gallery.images.len()
        );

        Ok(store)
    }

    /// File names of every document the store reads.
    pub fn files() -> [&'static str; 7] {
        [
            HomeContent::FILE,
            AboutContent::FILE,
            CoursesContent::FILE,
            GalleryContent::FILE,
            AchievementsContent::FILE,
            ContactContent::FILE,
            FooterContent::FILE,
        ]
    }
}

fn load_document<T: Document>(dir: &Path) -> Result<T, ContentError> {
    let path: PathBuf = dir.join(T::FILE);
    let source = fs::read_to_string(&path).map_err(|e| ContentError::ReadError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    parse_document(&source)
}
