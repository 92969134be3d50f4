//! Courses page content and curriculum shapes.
//!
//! A curriculum level carries its subjects in one of three shapes. The JSON
//! document may spell a level with a `streams` array, a flat `subjects`
//! array, or a `subjects` object grouped by grade. Deserialization settles
//! the shape once so renderers match on [`Curriculum`] and never inspect
//! the raw fields.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::pages::{Document, Hero, IconCard};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CoursesContent {
    pub hero: Hero,
    #[serde(default)]
    pub features: Vec<IconCard>,
    #[serde(default)]
    pub curriculum: Vec<Level>,
    pub admission_process: AdmissionProcess,
    pub scholarships: Scholarships,
    #[serde(default)]
    pub co_curricular_activities: Option<CoCurricular>,
}

impl Document for CoursesContent {
    const FILE: &'static str = "courses.json";

    fn validate(&self) -> Result<(), String> {
        if self.hero.title.trim().is_empty() {
            return Err("hero.title must not be empty".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct AdmissionProcess {
    pub title: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub documents_required: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scholarships {
    pub title: String,
    #[serde(default)]
    pub programs: Vec<Scholarship>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scholarship {
    pub name: String,
    pub eligibility: String,
    pub benefit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoCurricular {
    #[serde(default)]
    pub activities: Vec<String>,
}

/// One stage of schooling (primary, secondary, higher secondary...).
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(try_from = "RawLevel")]
pub struct Level {
    pub name: String,
    pub description: String,
    pub key_features: Vec<String>,
    pub curriculum: Curriculum,
}

/// The subjects taught at a level.
#[derive(Debug, Clone, PartialEq)]
pub enum Curriculum {
    /// A single list of subjects.
    Flat(Vec<String>),
    /// Subjects grouped by grade key (`"class_1"`, `"class_6_8"`...), in document order.
    Grouped(IndexMap<String, Vec<String>>),
    /// Named streams, each with its own subject lists.
    Streams(Vec<Stream>),
}

impl Curriculum {
    /// Short name of the shape, used in logs and markup.
    pub fn kind(&self) -> &'static str {
        match self {
            Curriculum::Flat(_) => "flat",
            Curriculum::Grouped(_) => "grouped",
            Curriculum::Streams(_) => "streams",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Stream {
    pub name: String,
    #[serde(default)]
    pub core_subjects: Vec<String>,
    #[serde(default)]
    pub electives: Vec<String>,
    #[serde(default)]
    pub career_paths: Option<Vec<String>>,
}

/// Display label for a grade key: the first `_` becomes `-`, then uppercase.
pub fn grade_label(key: &str) -> String {
    key.replacen('_', "-", 1).to_uppercase()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLevel {
    level: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    key_features: Option<Vec<String>>,
    #[serde(default)]
    subjects: Option<serde_json::Value>,
    #[serde(default)]
    streams: Option<Vec<Stream>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSubjects {
    Flat(Vec<String>),
    Grouped(IndexMap<String, Vec<String>>),
}

impl TryFrom<RawLevel> for Level {
    type Error = String;

    fn try_from(raw: RawLevel) -> Result<Self, Self::Error> {
        // Streams take precedence; subjects are not consulted when present.
        let curriculum = match (raw.streams, raw.subjects) {
            (Some(streams), _) => Curriculum::Streams(streams),
            (None, Some(subjects)) => match serde_json::from_value(subjects) {
                Ok(RawSubjects::Flat(subjects)) => Curriculum::Flat(subjects),
                Ok(RawSubjects::Grouped(groups)) => Curriculum::Grouped(groups),
                Err(e) => {
                    return Err(format!(
                        "curriculum level '{}' has unreadable subjects: {}",
                        raw.level, e
                    ))
                }
            },
            (None, None) => {
                return Err(format!(
                    "curriculum level '{}' has neither subjects nor streams",
                    raw.level
                ))
            }
        };

        Ok(Level {
            name: raw.level,
            description: raw.description,
            key_features: raw.key_features.unwrap_or_default(),
            curriculum,
        })
    }
}
