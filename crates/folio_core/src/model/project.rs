//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical catalog record for one portfolio project.
//! - Group the optional case-study content into one block so renderers can
//!   branch on its presence instead of probing individual fields.
//!
//! # Invariants
//! - `id` is a lowercase slug (`^[a-z0-9]+(?:-[a-z0-9]+)*$`).
//! - `title` and `description` are never blank.
//! - Ordered sequences (`tags`, `image_urls`, case-study lists) keep
//!   authoring order.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static PROJECT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid project id regex"));

/// Project classification. Closed set; new values require a code change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "WebXR")]
    WebXr,
    #[serde(rename = "Unity XR")]
    UnityXr,
    Simulation,
    Experiments,
}

impl Category {
    /// All categories in filter-bar order.
    pub const ALL: [Category; 4] = [
        Category::WebXr,
        Category::UnityXr,
        Category::Simulation,
        Category::Experiments,
    ];

    /// Display name, also used as the serialized value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::WebXr => "WebXR",
            Self::UnityXr => "Unity XR",
            Self::Simulation => "Simulation",
            Self::Experiments => "Experiments",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Parses a display name. Matching is exact after trimming, so
    /// `"webxr"` is rejected.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(ParseCategoryError::Empty);
        }
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ParseCategoryError::Unknown(normalized.to_string()))
    }
}

/// Category parse errors. Off-vocabulary values are caller errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseCategoryError {
    Empty,
    Unknown(String),
}

impl Display for ParseCategoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "category must not be empty"),
            Self::Unknown(value) => write!(
                f,
                "unknown category `{value}`; expected WebXR|Unity XR|Simulation|Experiments"
            ),
        }
    }
}

impl Error for ParseCategoryError {}

/// External links shown as action buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

/// Media references. No URL validation beyond presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMedia {
    /// Cover image for cards.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Gallery images for the detail page, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl ProjectMedia {
    /// Returns whether any media reference is present.
    pub fn has_media(&self) -> bool {
        self.image_url.is_some() || !self.image_urls.is_empty() || self.video_url.is_some()
    }
}

/// Titled paragraph used for key decisions and asset considerations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudyNote {
    pub title: String,
    pub description: String,
}

impl CaseStudyNote {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Retrospective lists closing a case study.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcomes {
    #[serde(default)]
    pub what_worked: Vec<String>,
    #[serde(default)]
    pub what_improve: Vec<String>,
}

/// Long-form detail content for one project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_statement: Option<String>,
    /// Paragraphs in reading order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub system_overview: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_decisions: Vec<CaseStudyNote>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub asset_considerations: Vec<CaseStudyNote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcomes: Option<Outcomes>,
}

impl CaseStudy {
    /// `true` when no case-study field carries content.
    pub fn is_empty(&self) -> bool {
        self.problem_statement.is_none()
            && self.system_overview.is_empty()
            && self.key_decisions.is_empty()
            && self.asset_considerations.is_empty()
            && self.outcomes.is_none()
    }
}

/// Canonical catalog record.
///
/// Links, media and the case study are flattened so the serialized shape
/// keeps `demoUrl`, `imageUrl`, `problemStatement` and friends at the top
/// level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Stable slug, used for lookup and as the `/projects/:id` parameter.
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_title: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    /// Display order matters; duplicates are allowed.
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: Category,
    #[serde(flatten)]
    pub links: ProjectLinks,
    #[serde(flatten)]
    pub media: ProjectMedia,
    /// Absent on the wire when every case-study field is absent.
    #[serde(flatten, deserialize_with = "case_study_from_fields")]
    pub case_study: Option<CaseStudy>,
}

impl Project {
    /// Creates a record with the required fields only.
    ///
    /// Optional groups start empty. Use struct update syntax to fill them.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            short_title: None,
            description: description.into(),
            long_description: None,
            tags: Vec::new(),
            category,
            links: ProjectLinks::default(),
            media: ProjectMedia::default(),
            case_study: None,
        }
    }

    /// Title for compact surfaces; falls back to `title`.
    pub fn display_title(&self) -> &str {
        self.short_title.as_deref().unwrap_or(self.title.as_str())
    }

    /// Detail-page lead paragraph; falls back to `description`.
    pub fn headline(&self) -> &str {
        self.long_description
            .as_deref()
            .unwrap_or(self.description.as_str())
    }

    pub fn has_case_study(&self) -> bool {
        self.case_study.is_some()
    }

    /// Validates record-level invariants.
    ///
    /// # Errors
    /// - `EmptyId` / `InvalidId` when `id` is not a lowercase slug.
    /// - `EmptyTitle` / `EmptyDescription` when required text is blank.
    /// - `EmptyTag` when any tag is blank.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.id.trim().is_empty() {
            return Err(ProjectValidationError::EmptyId);
        }
        if !is_valid_project_id(self.id.as_str()) {
            return Err(ProjectValidationError::InvalidId(self.id.clone()));
        }
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::EmptyTitle {
                id: self.id.clone(),
            });
        }
        if self.description.trim().is_empty() {
            return Err(ProjectValidationError::EmptyDescription {
                id: self.id.clone(),
            });
        }
        if let Some(index) = self.tags.iter().position(|tag| tag.trim().is_empty()) {
            return Err(ProjectValidationError::EmptyTag {
                id: self.id.clone(),
                index,
            });
        }
        Ok(())
    }
}

fn case_study_from_fields<'de, D>(deserializer: D) -> Result<Option<CaseStudy>, D::Error>
where
    D: Deserializer<'de>,
{
    let study = CaseStudy::deserialize(deserializer)?;
    Ok((!study.is_empty()).then_some(study))
}

/// Returns whether `value` is a well-formed project slug.
pub fn is_valid_project_id(value: &str) -> bool {
    PROJECT_ID_RE.is_match(value)
}

/// Record-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    EmptyId,
    InvalidId(String),
    EmptyTitle { id: String },
    EmptyDescription { id: String },
    EmptyTag { id: String, index: usize },
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "project id must not be empty"),
            Self::InvalidId(value) => {
                write!(f, "project id `{value}` is not a lowercase slug")
            }
            Self::EmptyTitle { id } => write!(f, "project `{id}` has an empty title"),
            Self::EmptyDescription { id } => {
                write!(f, "project `{id}` has an empty description")
            }
            Self::EmptyTag { id, index } => {
                write!(f, "project `{id}` has an empty tag at position {index}")
            }
        }
    }
}

impl Error for ProjectValidationError {}
