//! Project filtering, sorting, and the curated home rails.
//!
//! `filter_and_sort` is a pure transformation of the project list; it
//! never mutates the catalog. When no filter is active the home view
//! shows curated rails instead of a single filtered sequence.

use super::Project;

/// Transient filter state owned by the view layer
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Categories to match (primary OR any secondary); empty = no
    /// category filter
    pub active_categories: Vec<String>,
    /// Drop projects that are not currently live
    pub show_only_live: bool,
    /// Case-insensitive substring query; whitespace-only = no query
    pub search_query: String,
}

impl FilterState {
    /// Whether any filter would change the displayed list
    pub fn is_active(&self) -> bool {
        !self.active_categories.is_empty()
            || self.show_only_live
            || !self.search_query.trim().is_empty()
    }

    /// Reset to the unfiltered default view
    pub fn clear(&mut self) {
        self.active_categories.clear();
        self.show_only_live = false;
        self.search_query.clear();
    }
}

/// Filter the project list and sort the survivors by viewer count
/// descending. The sort is stable: projects with equal viewer counts
/// keep their relative order from the input list.
pub fn filter_and_sort<'a>(projects: &'a [Project], filter: &FilterState) -> Vec<&'a Project> {
    let query = filter.search_query.trim().to_lowercase();

    let mut result: Vec<&Project> = projects
        .iter()
        .filter(|p| !filter.show_only_live || p.is_live)
        .filter(|p| {
            filter.active_categories.is_empty()
                || filter.active_categories.contains(&p.category_primary)
                || p.category_secondary
                    .iter()
                    .any(|c| filter.active_categories.contains(c))
        })
        .filter(|p| query.is_empty() || matches_query(p, &query))
        .collect();

    result.sort_by(|a, b| b.viewer_count.cmp(&a.viewer_count));
    result
}

/// Substring match over every user-visible text field of a project.
/// `query` must already be trimmed and lowercased.
fn matches_query(project: &Project, query: &str) -> bool {
    project.name.to_lowercase().contains(query)
        || project.team_name.to_lowercase().contains(query)
        || project.tagline.to_lowercase().contains(query)
        || project.description.to_lowercase().contains(query)
        || project.category_primary.to_lowercase().contains(query)
        || project
            .category_secondary
            .iter()
            .any(|c| c.to_lowercase().contains(query))
        || project.tech_tags.iter().any(|t| t.to_lowercase().contains(query))
}

/// Curated groupings for the unfiltered home view. Every rail is a
/// subset of the full project list.
pub struct Rails;

impl Rails {
    /// Projects currently streaming
    pub fn live_now<'a>(projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| p.is_live).collect()
    }

    /// All projects ranked by viewer count descending (stable for ties)
    pub fn trending<'a>(projects: &'a [Project]) -> Vec<&'a Project> {
        let mut all: Vec<&Project> = projects.iter().collect();
        all.sort_by(|a, b| b.viewer_count.cmp(&a.viewer_count));
        all
    }

    /// Top four projects by viewer count, for the hero strip
    pub fn featured<'a>(projects: &'a [Project]) -> Vec<&'a Project> {
        let mut all = Self::trending(projects);
        all.truncate(4);
        all
    }

    /// Projects whose primary category matches exactly
    pub fn in_category<'a>(projects: &'a [Project], category: &str) -> Vec<&'a Project> {
        projects
            .iter()
            .filter(|p| p.category_primary == category)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::seed;
    use super::*;

    #[test]
    fn test_inactive_filter_state() {
        let mut filter = FilterState::default();
        assert!(!filter.is_active());
        filter.search_query = "   ".to_string();
        assert!(!filter.is_active());
        filter.show_only_live = true;
        assert!(filter.is_active());
        filter.clear();
        assert!(!filter.is_active());
    }

    #[test]
    fn test_rails_are_subsets() {
        let projects = seed::mock_projects();
        let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();
        for rail in [
            Rails::live_now(&projects),
            Rails::trending(&projects),
            Rails::featured(&projects),
            Rails::in_category(&projects, "Data visualization & analytics"),
        ] {
            assert!(rail.iter().all(|p| ids.contains(&p.id.as_str())));
        }
        assert!(Rails::featured(&projects).len() <= 4);
    }
}
