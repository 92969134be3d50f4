//! Content document schemas for every route except courses.
//!
//! Field names follow the camelCase keys used in the JSON documents.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::map::MapLocation;

/// A content document backed by one JSON file.
pub trait Document: serde::de::DeserializeOwned {
    /// File name inside the content directory.
    const FILE: &'static str;

    /// Checks that serde cannot express.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Hero banner shared by the inner pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Hero {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Hero {
    fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("hero.title must not be empty".to_string());
        }
        Ok(())
    }
}

/// A card with an icon, title and description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IconCard {
    pub title: String,
    pub description: String,
    pub icon: String,
}

/// A headline number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stat {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub icon: Option<String>,
}

/// A plain link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Link {
    pub text: String,
    pub url: String,
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HomeContent {
    pub hero: HomeHero,
    #[serde(default)]
    pub stats: Vec<Stat>,
    pub features: FeatureSection,
    pub cta: CallToAction,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct HomeHero {
    pub title: String,
    #[serde(default)]
    pub highlighted_title: Option<String>,
    pub description: String,
    #[serde(default)]
    pub carousel_images: Vec<String>,
    #[serde(default)]
    pub cta_buttons: Vec<CtaButton>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CtaButton {
    pub text: String,
    pub url: String,
    #[serde(default = "default_variant")]
    pub variant: String,
}

fn default_variant() -> String {
    "default".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureSection {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub items: Vec<IconCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct CallToAction {
    pub title: String,
    pub description: String,
    #[serde(default = "default_highlights")]
    pub highlights: Vec<String>,
    pub button_text: String,
    pub button_url: String,
}

fn default_highlights() -> Vec<String> {
    vec![
        "Accredited Programs".to_string(),
        "Scholarship Available".to_string(),
        "Industry Partnerships".to_string(),
    ]
}

impl Document for HomeContent {
    const FILE: &'static str = "home.json";

    fn validate(&self) -> Result<(), String> {
        if self.hero.title.trim().is_empty() {
            return Err("hero.title must not be empty".to_string());
        }
        if let Some(image) = self.hero.carousel_images.iter().find(|i| i.trim().is_empty()) {
            return Err(format!("hero.carouselImages contains an empty entry: {:?}", image));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct AboutContent {
    pub hero: Hero,
    pub story: Story,
    /// Keyed entries ("mission", "vision"), kept in document order.
    #[serde(default)]
    pub mission_vision: IndexMap<String, IconCard>,
    pub values: ValuesSection,
    pub school_info: SchoolInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Story {
    pub title: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValuesSection {
    pub title: String,
    #[serde(default)]
    pub items: Vec<IconCard>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct SchoolInfo {
    pub location: Location,
    pub classes: ClassRange,
    pub affiliation: String,
    pub school_type: String,
    pub establishment_year: String,
    pub udise_code: String,
    pub management: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub village: String,
    pub block: String,
    pub district: String,
    pub state: String,
    pub pincode: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassRange {
    pub from: String,
    pub to: String,
}

impl Document for AboutContent {
    const FILE: &'static str = "about.json";

    fn validate(&self) -> Result<(), String> {
        self.hero.validate()
    }
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryContent {
    pub hero: Hero,
    /// URL prefix (and path under the public directory) holding the images.
    #[serde(default = "default_gallery_directory")]
    pub directory: String,
    pub images: Vec<GalleryFile>,
    #[serde(default)]
    pub tour: Option<VirtualTour>,
}

fn default_gallery_directory() -> String {
    "/gallary".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryFile {
    pub name: String,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VirtualTour {
    pub title: String,
    pub description: String,
    pub poster: String,
}

impl GalleryContent {
    /// Public URL of a gallery file.
    pub fn url(&self, file: &GalleryFile) -> String {
        format!("{}/{}", self.directory.trim_end_matches('/'), file.name)
    }
}

impl Document for GalleryContent {
    const FILE: &'static str = "gallery.json";

    fn validate(&self) -> Result<(), String> {
        self.hero.validate()?;
        for file in &self.images {
            if file.name.is_empty() || file.name.contains(['/', '\\']) || file.name == ".." {
                return Err(format!("images: invalid file name {:?}", file.name));
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Achievements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AchievementsContent {
    pub hero: Hero,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub achievements: Vec<YearGroup>,
    #[serde(default)]
    pub alumni: Vec<Alumnus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YearGroup {
    pub year: String,
    #[serde(default)]
    pub items: Vec<Achievement>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Achievement {
    pub title: String,
    pub category: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alumnus {
    pub name: String,
    pub role: String,
    pub year: String,
}

impl Document for AchievementsContent {
    const FILE: &'static str = "achievements.json";

    fn validate(&self) -> Result<(), String> {
        self.hero.validate()
    }
}

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ContactContent {
    pub hero: Hero,
    pub form: ContactForm,
    #[serde(default)]
    pub contact_info: Vec<ContactInfo>,
    pub faq: Faq,
    #[serde(default)]
    pub map: MapLocation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct ContactForm {
    pub title: String,
    pub fields: FormFields,
    pub placeholders: FormFields,
    pub submit_button: String,
}

/// One string per form control; used for both labels and placeholders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactInfo {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub subtext: Option<String>,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Faq {
    pub title: String,
    pub description: String,
    pub button_text: String,
}

impl Document for ContactContent {
    const FILE: &'static str = "contact.json";

    fn validate(&self) -> Result<(), String> {
        self.hero.validate()?;
        self.map.validate()
    }
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct FooterContent {
    pub brand: Brand,
    #[serde(default)]
    pub quick_links: Vec<Link>,
    pub contact_info: FooterContact,
    #[serde(default)]
    pub social_media: Vec<SocialLink>,
    pub copyright: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Brand {
    pub name: String,
    pub logo: String,
    #[serde(default)]
    pub logo_height: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FooterContact {
    pub address: String,
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    pub icon: String,
}

impl Document for FooterContent {
    const FILE: &'static str = "footer.json";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_fields_are_optional() {
        let hero: Hero = serde_json::from_str(r#"{ "title": "Gallery" }"#).unwrap();

        assert_eq!(hero.title, "Gallery");
        assert!(hero.subtitle.is_none());
        assert!(hero.description.is_none());
    }

    #[test]
    fn mission_vision_keeps_document_order() {
        let json = r#"{
            "hero": { "title": "About" },
            "story": { "title": "Story", "paragraphs": ["One", "Two"] },
            "missionVision": {
                "vision": { "title": "Vision", "description": "v", "icon": "Eye" },
                "mission": { "title": "Mission", "description": "m", "icon": "Target" }
            },
            "values": { "title": "Values", "items": [] },
            "schoolInfo": {
                "location": { "village": "V", "block": "B", "district": "D", "state": "S", "pincode": "1" },
                "classes": { "from": "Nursery", "to": "X" },
                "affiliation": "SEBA",
                "schoolType": "Co-ed",
                "establishmentYear": "2010",
                "udiseCode": "123",
                "management": "Private"
            }
        }"#;

        let about: AboutContent = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = about.mission_vision.keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["vision", "mission"]);
        assert_eq!(about.story.paragraphs, vec!["One", "Two"]);
    }

    #[test]
    fn gallery_builds_public_urls() {
        let gallery = GalleryContent {
            hero: Hero {
                title: "Gallery".to_string(),
                subtitle: None,
                description: None,
            },
            directory: "/gallary/".to_string(),
            images: vec![GalleryFile {
                name: "gal1.jpg".to_string(),
                alt: "One".to_string(),
            }],
            tour: None,
        };

        assert_eq!(gallery.url(&gallery.images[0]), "/gallary/gal1.jpg");
    }

    #[test]
    fn gallery_rejects_path_traversal() {
        let json = r#"{ "hero": { "title": "G" }, "images": [{ "name": "../secret.jpg", "alt": "x" }] }"#;
        let gallery: GalleryContent = serde_json::from_str(json).unwrap();

        assert!(gallery.validate().is_err());
    }

    #[test]
    fn home_uses_default_highlights() {
        let cta: CallToAction = serde_json::from_str(
            r#"{ "title": "Join", "description": "d", "buttonText": "Apply", "buttonUrl": "/contact" }"#,
        )
        .unwrap();

        assert_eq!(cta.highlights.len(), 3);
    }

    #[test]
    fn empty_hero_title_is_invalid() {
        let hero = Hero {
            title: "  ".to_string(),
            subtitle: None,
            description: None,
        };

        assert!(hero.validate().is_err());
    }
}
