use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const PROJECTS_FILE: &str = "projects.json";
pub const RESUME_FILE: &str = "resume.json";

static CATALOG: LazyLock<Result<Catalog, CatalogError>> = LazyLock::new(Catalog::load);

#[derive(Embed)]
#[folder = "data"]
pub struct Data;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub summary: String,
    pub details: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    /// Tailwind gradient stops for the card's top strip.
    pub accent: String,
}

impl Project {
    /// Zero-padded number shown on cards, e.g. `07`.
    pub fn number(&self) -> String {
        format!("{:02}", self.id)
    }

    pub fn preview_tags(&self) -> &[String] {
        &self.tags[..self.tags.len().min(2)]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: u32,
    pub role: String,
    pub company: String,
    pub period: String,
    pub icon: String,
    pub summary: String,
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub period: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub label: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<SkillGroup>,
}

/// Read-only content for the Projects and Resume pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub resume: Resume,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("missing data file: {0}")]
    Missing(&'static str),
    #[error("couldn't parse {0}: {1}")]
    Parse(&'static str, String),
}

fn read_json<T: DeserializeOwned>(file: &'static str) -> Result<T, CatalogError> {
    let content = Data::get(file).ok_or(CatalogError::Missing(file))?;
    serde_json::from_slice(&content.data).map_err(|e| CatalogError::Parse(file, e.to_string()))
}

impl Catalog {
    fn load() -> Result<Self, CatalogError> {
        let mut projects = read_json::<Vec<Project>>(PROJECTS_FILE)?;
        projects.sort_by_key(|p| p.id);
        let resume = read_json::<Resume>(RESUME_FILE)?;
        log::info!(
            "loaded {} projects, {} experience entries",
            projects.len(),
            resume.experiences.len()
        );
        Ok(Self { projects, resume })
    }

    pub fn project(&self, id: u32) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

/// Parsed once per process; every caller shares the same instance.
pub fn catalog() -> Result<&'static Catalog, CatalogError> {
    match &*CATALOG {
        Ok(c) => Ok(c),
        Err(e) => {
            log::error!("{e}");
            Err(e.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads() {
        let catalog = catalog().expect("embedded data should parse");
        assert_eq!(catalog.projects.len(), 12);
        assert_eq!(catalog.resume.experiences.len(), 4);
        assert_eq!(catalog.resume.education.len(), 1);
        assert_eq!(catalog.resume.skills.len(), 2);
    }

    #[test]
    fn test_project_ids_unique_and_sorted() {
        let catalog = catalog().unwrap();
        let ids = catalog.projects.iter().map(|p| p.id).collect::<Vec<_>>();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_project_lookup() {
        let catalog = catalog().unwrap();
        let p = catalog.project(7).expect("project 7 exists");
        assert_eq!(p.title, "TreeDrive Server");
        assert_eq!(p.number(), "07");
        assert_eq!(p.preview_tags(), ["Python", "TCP/IP"]);
        assert!(catalog.project(0).is_none());
        assert!(catalog.project(13).is_none());
    }

    #[test]
    fn test_placeholder_link_is_absent() {
        let catalog = catalog().unwrap();
        let devops = catalog.project(5).unwrap();
        assert_eq!(devops.link, None);
        assert!(catalog
            .projects
            .iter()
            .filter(|p| p.id != 5)
            .all(|p| p.link.as_deref().is_some_and(|l| l.starts_with("https://"))));
    }

    #[test]
    fn test_every_entry_has_content() {
        let catalog = catalog().unwrap();
        for p in &catalog.projects {
            assert!(!p.title.is_empty());
            assert!(!p.tags.is_empty(), "{} has no tags", p.title);
            assert!(p.accent.starts_with("from-"));
        }
        for e in &catalog.resume.experiences {
            assert!(!e.tech.is_empty(), "{} has no tech", e.role);
            assert!(e.icon.starts_with("extra-"));
        }
    }

    #[test]
    fn test_preview_tags_short_list() {
        let p = Project {
            id: 99,
            title: "Solo".to_string(),
            summary: String::new(),
            details: String::new(),
            tags: vec!["Rust".to_string()],
            link: None,
            accent: "from-gray-500 to-slate-700".to_string(),
        };
        assert_eq!(p.preview_tags(), ["Rust"]);
        assert_eq!(p.number(), "99");
    }

    #[test]
    fn test_missing_file() {
        assert_eq!(
            read_json::<Resume>("nope.json"),
            Err(CatalogError::Missing("nope.json"))
        );
        assert!(matches!(
            read_json::<Resume>(PROJECTS_FILE),
            Err(CatalogError::Parse(PROJECTS_FILE, _))
        ));
    }
}
