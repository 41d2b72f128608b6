use std::{collections::HashSet, sync::Arc, sync::LazyLock};

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::style::{Accent, Icon};

pub const CATALOG_FILE: &str = "portfolio.json";

static GLOBAL_CATALOG: LazyLock<Result<Catalog, CatalogError>> = LazyLock::new(Catalog::load);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("content file not found: {0}")]
    Missing(String),
    #[error("couldn't parse content: {0}")]
    Parse(String),
    #[error("duplicate project id: {0}")]
    DuplicateId(String),
    #[error("project {project} has an empty {field}")]
    EmptyField {
        project: String,
        field: &'static str,
    },
    #[error("profile name is empty")]
    EmptyProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub stack: Vec<String>,
    pub description: String,
    pub year: String,
    pub image: String,
    pub details: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
}

impl ProjectRecord {
    /// Leading `limit` stack tags plus how many were left out.
    pub fn stack_preview(&self, limit: usize) -> (&[String], usize) {
        let shown = limit.min(self.stack.len());
        (&self.stack[..shown], self.stack.len() - shown)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let empty = |field: &'static str| CatalogError::EmptyField {
            project: self.id.clone(),
            field,
        };
        let blank = |s: &str| s.trim().is_empty();
        let blank_list = |v: &[String]| v.is_empty() || v.iter().any(|s| blank(s));

        if blank(&self.id) {
            return Err(empty("id"));
        }
        for (field, value) in [
            ("title", &self.title),
            ("description", &self.description),
            ("year", &self.year),
            ("image", &self.image),
            ("details", &self.details),
        ] {
            if blank(value) {
                return Err(empty(field));
            }
        }
        if blank_list(&self.stack) {
            return Err(empty("stack"));
        }
        if blank_list(&self.features) {
            return Err(empty("features"));
        }
        if self.github.as_deref().is_some_and(blank) {
            return Err(empty("github"));
        }
        if self.live.as_deref().is_some_and(blank) {
            return Err(empty("live"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub tagline: String,
    pub location: String,
    pub quote: String,
    pub bio: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    pub icon: Icon,
    pub accent: Accent,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub period: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    Learning,
    Certification,
    Milestone,
    Education,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub year: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub icon: Icon,
    pub accent: Accent,
    pub kind: TimelineKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub location: String,
    pub email: String,
    pub phone_display: String,
    pub phone_dial: String,
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone_dial)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub profile: Profile,
    pub projects: Vec<Arc<ProjectRecord>>,
    pub skills: Vec<SkillCategory>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<String>,
    pub highlights: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
    pub contact: ContactInfo,
    pub social: Vec<SocialLink>,
}

impl Catalog {
    fn load() -> Result<Catalog, CatalogError> {
        let file = Assets::get(CATALOG_FILE)
            .ok_or_else(|| CatalogError::Missing(CATALOG_FILE.to_string()))?;
        let content = std::str::from_utf8(&file.data)
            .map_err(|e| CatalogError::Parse(e.to_string()))?;
        let catalog = Catalog::from_json(content);
        match &catalog {
            Ok(c) => log::debug!("loaded catalog with {} projects", c.projects.len()),
            Err(e) => log::error!("invalid catalog: {e}"),
        }
        catalog
    }

    pub fn from_json(content: &str) -> Result<Catalog, CatalogError> {
        let catalog: Catalog =
            serde_json::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.profile.name.trim().is_empty() {
            return Err(CatalogError::EmptyProfile);
        }
        let mut seen = HashSet::new();
        for project in &self.projects {
            project.validate()?;
            if !seen.insert(project.id.as_str()) {
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
        }
        Ok(())
    }

    pub fn project(&self, id: &str) -> Option<&Arc<ProjectRecord>> {
        self.projects.iter().find(|p| p.id == id)
    }
}

/// The embedded catalog, parsed and validated on first access.
pub fn catalog() -> Result<&'static Catalog, &'static CatalogError> {
    GLOBAL_CATALOG.as_ref()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn project(id: &str, title: &str) -> Arc<ProjectRecord> {
        Arc::new(ProjectRecord {
            id: id.to_string(),
            title: title.to_string(),
            stack: vec!["Rust".to_string(), "Leptos".to_string()],
            description: "A project".to_string(),
            year: "2024".to_string(),
            image: "/img/project.jpg".to_string(),
            details: "Longer text".to_string(),
            features: vec!["Fast".to_string()],
            github: None,
            live: None,
        })
    }

    fn small_catalog(projects: Vec<Arc<ProjectRecord>>) -> Catalog {
        let mut catalog = catalog().expect("embedded catalog should be valid").clone();
        catalog.projects = projects;
        catalog
    }

    #[test]
    fn test_embedded_catalog() {
        let catalog = catalog().expect("embedded catalog should be valid");
        let ids = catalog
            .projects
            .iter()
            .map(|p| p.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec![
                "nft-marketplace",
                "admin-dashboard",
                "workout-tracker",
                "library-management"
            ]
        );
        assert_eq!(
            catalog.project("workout-tracker").map(|p| p.title.as_str()),
            Some("Workout Tracker")
        );
        assert!(catalog.project("missing").is_none());
        assert_eq!(catalog.skills.len(), 5);
        assert!(!catalog.timeline.is_empty());
        assert!(catalog.contact.mailto().starts_with("mailto:"));
        assert!(catalog.contact.tel().starts_with("tel:+"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let catalog = small_catalog(vec![project("a", "A"), project("a", "B")]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateId("a".to_string()))
        );
    }

    #[test]
    fn test_empty_required_fields_rejected() {
        let mut record = (*project("a", "A")).clone();
        record.title = "  ".to_string();
        let catalog = small_catalog(vec![Arc::new(record)]);
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::EmptyField {
                project: "a".to_string(),
                field: "title"
            })
        );

        let mut record = (*project("b", "B")).clone();
        record.features.clear();
        let catalog = small_catalog(vec![Arc::new(record)]);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::EmptyField {
                field: "features",
                ..
            })
        ));
    }

    #[test]
    fn test_optional_links() {
        let mut record = (*project("a", "A")).clone();
        record.github = Some("https://example.com/a".to_string());
        assert!(small_catalog(vec![Arc::new(record.clone())])
            .validate()
            .is_ok());

        record.live = Some(String::new());
        assert!(matches!(
            small_catalog(vec![Arc::new(record)]).validate(),
            Err(CatalogError::EmptyField { field: "live", .. })
        ));
    }

    #[test]
    fn test_unknown_accent_fails_parse() {
        let json = serde_json::to_string(catalog().expect("embedded catalog should be valid"))
            .unwrap()
            .replace("\"accent\":\"coral\"", "\"accent\":\"chartreuse\"");
        assert!(matches!(
            Catalog::from_json(&json),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_stack_preview() {
        let mut record = (*project("a", "A")).clone();
        record.stack = ["React", "Node.js", "MongoDB", "Web3", "Solidity"]
            .map(String::from)
            .to_vec();
        let (shown, rest) = record.stack_preview(3);
        assert_eq!(shown, &record.stack[..3]);
        assert_eq!(rest, 2);

        let (shown, rest) = record.stack_preview(10);
        assert_eq!(shown.len(), 5);
        assert_eq!(rest, 0);
    }
}
