//! Project catalog.
//!
//! The in-memory project list is the single source of truth for the
//! whole session. Projects are created on submission, mutated in place
//! on edit or live toggle, and never deleted.

pub mod filter;
pub mod seed;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use filter::{filter_and_sort, FilterState, Rails};

/// Streaming platform a team broadcasts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreamPlatform {
    Twitch,
    #[serde(rename = "YouTube")]
    YouTube,
}

impl std::fmt::Display for StreamPlatform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StreamPlatform::Twitch => write!(f, "Twitch"),
            StreamPlatform::YouTube => write!(f, "YouTube"),
        }
    }
}

/// A submitted hackathon project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub team_name: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub category_primary: String,
    pub category_secondary: Vec<String>,
    pub tech_tags: Vec<String>,
    pub stream_platform: StreamPlatform,
    pub stream_url: String,
    pub is_live: bool,
    pub thumbnail: String,
    pub viewer_count: u32,
    pub repo_url: String,
    pub demo_url: String,
}

/// Fields for a new submission; everything a caller does not control
/// gets the stock submission defaults
#[derive(Debug, Clone)]
pub struct NewProject {
    pub team_name: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub category_primary: String,
    pub category_secondary: Vec<String>,
}

/// Partial update for an existing project. `None` fields are left
/// untouched.
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub category_primary: Option<String>,
    pub category_secondary: Option<Vec<String>>,
}

/// Owns the session's project list
#[derive(Debug, Clone)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    /// Empty store (tests mostly)
    pub fn new() -> Self {
        Self { projects: Vec::new() }
    }

    /// Store seeded with the mock catalog
    pub fn seeded() -> Self {
        Self { projects: seed::mock_projects() }
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Find a team's own submission
    pub fn by_team(&self, team_name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.team_name == team_name)
    }

    /// Create a project from a submission. New projects go to the front
    /// of the list and start offline with the stock stream stub.
    pub fn add(&mut self, new: NewProject) -> &Project {
        let id = Uuid::new_v4().to_string();
        let thumbnail = format!("https://picsum.photos/seed/{id}/480/270");
        let project = Project {
            id,
            team_name: new.team_name,
            name: new.name,
            tagline: new.tagline,
            description: new.description,
            category_primary: new.category_primary,
            category_secondary: new.category_secondary,
            tech_tags: vec!["New".to_string(), "Hackathon".to_string()],
            stream_platform: StreamPlatform::Twitch,
            stream_url: "https://www.twitch.tv/some_user".to_string(),
            is_live: false,
            thumbnail,
            viewer_count: 0,
            repo_url: "https://github.com/example/new-project".to_string(),
            demo_url: "https://youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
        };
        self.projects.insert(0, project);
        &self.projects[0]
    }

    /// Apply a partial edit in place
    pub fn update(&mut self, id: &str, patch: ProjectUpdate) -> crate::Result<&Project> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| crate::HackcastError::ProjectNotFound(id.to_string()))?;
        if let Some(name) = patch.name {
            project.name = name;
        }
        if let Some(tagline) = patch.tagline {
            project.tagline = tagline;
        }
        if let Some(description) = patch.description {
            project.description = description;
        }
        if let Some(primary) = patch.category_primary {
            project.category_primary = primary;
        }
        if let Some(secondary) = patch.category_secondary {
            project.category_secondary = secondary;
        }
        Ok(project)
    }

    /// Toggle the live flag
    pub fn set_live(&mut self, id: &str, live: bool) -> crate::Result<()> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| crate::HackcastError::ProjectNotFound(id.to_string()))?;
        project.is_live = live;
        Ok(())
    }
}

impl Default for ProjectStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_project(name: &str) -> NewProject {
        NewProject {
            team_name: "Alex".to_string(),
            name: name.to_string(),
            tagline: String::new(),
            description: "desc".to_string(),
            category_primary: "Web app".to_string(),
            category_secondary: vec![],
        }
    }

    #[test]
    fn test_add_prepends_with_defaults() {
        let mut store = ProjectStore::seeded();
        let before = store.all().len();
        let id = store.add(new_project("Brand New")).id.clone();
        assert_eq!(store.all().len(), before + 1);
        let added = &store.all()[0];
        assert_eq!(added.id, id);
        assert!(!added.is_live);
        assert_eq!(added.viewer_count, 0);
        assert_eq!(added.tech_tags, vec!["New", "Hackathon"]);
    }

    #[test]
    fn test_update_patches_only_given_fields() {
        let mut store = ProjectStore::seeded();
        let id = store.all()[0].id.clone();
        let original_tagline = store.all()[0].tagline.clone();
        store
            .update(
                &id,
                ProjectUpdate { name: Some("Renamed".to_string()), ..Default::default() },
            )
            .unwrap();
        let project = store.get(&id).unwrap();
        assert_eq!(project.name, "Renamed");
        assert_eq!(project.tagline, original_tagline);
    }

    #[test]
    fn test_update_unknown_id_fails() {
        let mut store = ProjectStore::seeded();
        let err = store.update("nope", ProjectUpdate::default());
        assert!(matches!(err, Err(crate::HackcastError::ProjectNotFound(_))));
    }

    #[test]
    fn test_set_live_toggles() {
        let mut store = ProjectStore::seeded();
        let id = store.add(new_project("Toggler")).id.clone();
        store.set_live(&id, true).unwrap();
        assert!(store.get(&id).unwrap().is_live);
        store.set_live(&id, false).unwrap();
        assert!(!store.get(&id).unwrap().is_live);
    }
}
