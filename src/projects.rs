use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PROJECTS_FILE: &str = "projects.json";

/// Detail-page cache, keyed by lowercase project name. Holds only projects
/// that were found.
pub static GLOBAL_PROJECT_CACHE: LazyLock<DashMap<String, Project>> =
    LazyLock::new(DashMap::new);

static PROJECTS: LazyLock<Result<Vec<Project>, ProjectError>> = LazyLock::new(load_projects);

#[derive(Embed)]
#[folder = "data"]
pub struct Assets;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
}

impl Project {
    /// Path segment of the detail page.
    pub fn slug(&self) -> String {
        self.name.to_lowercase()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Project not found")]
    NotFound,
    #[error("Couldn't parse projects")]
    ParseError,
}

fn load_projects() -> Result<Vec<Project>, ProjectError> {
    let file = Assets::get(PROJECTS_FILE).ok_or(ProjectError::ParseError)?;
    parse_projects(&file.data)
}

pub fn parse_projects(raw: &[u8]) -> Result<Vec<Project>, ProjectError> {
    serde_json::from_slice(raw).map_err(|_| ProjectError::ParseError)
}

pub fn get_projects() -> Result<Vec<Project>, ProjectError> {
    PROJECTS.clone()
}

/// Looks a project up by name, ignoring case.
pub fn get_project(name: &str) -> Result<Project, ProjectError> {
    find_project(PROJECTS.as_ref().map_err(Clone::clone)?, name)
}

pub fn find_project(projects: &[Project], name: &str) -> Result<Project, ProjectError> {
    projects
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .cloned()
        .ok_or(ProjectError::NotFound)
}

/// Records the outcome of a detail-page fetch. Failed lookups are not
/// remembered, so the next visit asks the server again.
pub fn cache_lookup<E>(name: String, lookup: Result<Project, E>) -> Option<Project> {
    let project = lookup.ok()?;
    GLOBAL_PROJECT_CACHE.insert(name, project.clone());
    Some(project)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_projects_parse() {
        let projects = get_projects().expect("embedded projects should parse");
        assert!(!projects.is_empty());
        assert!(projects.iter().all(|p| !p.name.is_empty() && !p.description.is_empty()));
    }

    #[test]
    fn test_lookup_ignores_case() {
        let first = get_projects().unwrap().remove(0);
        assert_eq!(get_project(&first.slug()), Ok(first.clone()));
        assert_eq!(get_project(&first.name.to_uppercase()), Ok(first));
        assert_eq!(get_project("does-not-exist"), Err(ProjectError::NotFound));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_projects(b"{not json"), Err(ProjectError::ParseError));
        assert_eq!(
            parse_projects(br#"[{"name": "A"}]"#),
            Err(ProjectError::ParseError)
        );
        assert_eq!(
            parse_projects(br#"[{"name": "A", "description": "B"}]"#),
            Ok(vec![Project {
                name: "A".to_string(),
                description: "B".to_string(),
            }])
        );
    }

    #[test]
    fn test_failed_lookup_is_not_cached() {
        let name = "ghost-project".to_string();
        assert_eq!(cache_lookup(name.clone(), Err(ProjectError::NotFound)), None);
        assert!(!GLOBAL_PROJECT_CACHE.contains_key(&name));

        let found = Project {
            name: "Ghost-Project".to_string(),
            description: "Back from the dead".to_string(),
        };
        assert_eq!(
            cache_lookup::<ProjectError>(name.clone(), Ok(found.clone())),
            Some(found.clone())
        );
        assert_eq!(GLOBAL_PROJECT_CACHE.get(&name).map(|p| p.clone()), Some(found));
    }
}
