//! Catalog filtering, sorting, and store integration tests.

use pretty_assertions::assert_eq;

use hackcast::catalog::seed::mock_projects;
use hackcast::catalog::{filter_and_sort, FilterState, NewProject, ProjectStore, Rails};

fn ids(projects: &[&hackcast::catalog::Project]) -> Vec<String> {
    projects.iter().map(|p| p.id.clone()).collect()
}

// =============================================================================
// Filtering
// =============================================================================

mod filter_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_live_filter_keeps_only_live_projects() {
        let projects = mock_projects();
        let filter = FilterState { show_only_live: true, ..Default::default() };
        let result = filter_and_sort(&projects, &filter);
        assert!(result.iter().all(|p| p.is_live));
        assert_eq!(ids(&result), vec!["4", "1", "2"]);
    }

    #[test]
    fn test_category_matches_primary_or_secondary() {
        let projects = mock_projects();
        let filter = FilterState {
            active_categories: vec!["AI / Machine Learning".to_string()],
            ..Default::default()
        };
        let result = filter_and_sort(&projects, &filter);
        // Project 1 carries it as secondary, project 3 as secondary too;
        // neither has it as primary, which must not matter.
        assert_eq!(ids(&result), vec!["1", "3"]);
    }

    #[test]
    fn test_multiple_categories_are_or_combined() {
        let projects = mock_projects();
        let filter = FilterState {
            active_categories: vec![
                "Fintech & payments".to_string(),
                "AR / VR / MR".to_string(),
            ],
            ..Default::default()
        };
        let result = filter_and_sort(&projects, &filter);
        assert_eq!(ids(&result), vec!["4", "5"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let projects = mock_projects();
        let filter = FilterState { search_query: "CLIMATE".to_string(), ..Default::default() };
        let result = filter_and_sort(&projects, &filter);
        assert_eq!(ids(&result), vec!["2"]);
    }

    #[test]
    fn test_search_reaches_every_text_field() {
        let projects = mock_projects();
        // name, team, tagline, description, primary, secondary, tech tags
        let cases = [
            ("symptom checker", "3"),
            ("streamweavers", "1"),
            ("transparent project funding", "4"),
            ("smart contracts", "4"),
            ("healthtech", "3"),
            ("edtech", "5"),
            ("solidity", "4"),
        ];
        for (query, expected_id) in cases {
            let filter = FilterState { search_query: query.to_string(), ..Default::default() };
            let result = filter_and_sort(&projects, &filter);
            assert_eq!(ids(&result), vec![expected_id], "query: {query}");
        }
    }

    #[test]
    fn test_whitespace_query_matches_everything() {
        let projects = mock_projects();
        let filter = FilterState { search_query: "   ".to_string(), ..Default::default() };
        let result = filter_and_sort(&projects, &filter);
        assert_eq!(result.len(), projects.len());
    }

    #[test]
    fn test_filters_compose() {
        let projects = mock_projects();
        let filter = FilterState {
            active_categories: vec!["AI / Machine Learning".to_string()],
            show_only_live: true,
            search_query: "code".to_string(),
        };
        let result = filter_and_sort(&projects, &filter);
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_no_match_is_an_empty_list() {
        let projects = mock_projects();
        let filter = FilterState {
            search_query: "quantum blockchain toaster".to_string(),
            ..Default::default()
        };
        assert!(filter_and_sort(&projects, &filter).is_empty());
    }
}

// =============================================================================
// Sorting
// =============================================================================

mod sort_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sorted_by_viewer_count_descending() {
        let projects = mock_projects();
        let result = filter_and_sort(&projects, &FilterState::default());
        let counts: Vec<u32> = result.iter().map(|p| p.viewer_count).collect();
        let mut expected = counts.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(counts, expected);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let projects = mock_projects();
        // Projects 3 and 5 both have zero viewers; 3 comes first in the
        // catalog and must stay ahead of 5.
        let result = filter_and_sort(&projects, &FilterState::default());
        assert_eq!(ids(&result), vec!["4", "1", "2", "3", "5"]);
    }

    #[test]
    fn test_input_list_is_not_mutated() {
        let projects = mock_projects();
        let before = projects.clone();
        let _ = filter_and_sort(&projects, &FilterState::default());
        assert_eq!(projects, before);
    }
}

// =============================================================================
// Home rails
// =============================================================================

mod rails_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_live_now_matches_live_flag() {
        let projects = mock_projects();
        let live = Rails::live_now(&projects);
        assert_eq!(ids(&live), vec!["1", "2", "4"]);
    }

    #[test]
    fn test_featured_is_top_four_trending() {
        let projects = mock_projects();
        let featured = Rails::featured(&projects);
        assert_eq!(ids(&featured), vec!["4", "1", "2", "3"]);
    }

    #[test]
    fn test_category_rail_is_primary_only() {
        let projects = mock_projects();
        // Project 1 has AI only as secondary, so the AI rail excludes it.
        let rail = Rails::in_category(&projects, "AI / Machine Learning");
        assert!(rail.is_empty());
        let devtools = Rails::in_category(&projects, "Developer tools & productivity");
        assert_eq!(ids(&devtools), vec!["1"]);
    }
}

// =============================================================================
// Store
// =============================================================================

mod store_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_submission_appears_in_filtered_results() {
        let mut store = ProjectStore::seeded();
        let id = store
            .add(NewProject {
                team_name: "Casey".to_string(),
                name: "Tidecaster".to_string(),
                tagline: "Surf forecasts from buoy data.".to_string(),
                description: "Aggregates NOAA buoy feeds.".to_string(),
                category_primary: "Data visualization & analytics".to_string(),
                category_secondary: vec![],
            })
            .id
            .clone();

        let filter = FilterState { search_query: "tidecaster".to_string(), ..Default::default() };
        let result = filter_and_sort(store.all(), &filter);
        assert_eq!(ids(&result), vec![id]);
    }

    #[test]
    fn test_going_live_moves_project_into_live_rail() {
        let mut store = ProjectStore::seeded();
        assert!(!store.get("3").unwrap().is_live);
        store.set_live("3", true).unwrap();
        let live = Rails::live_now(store.all());
        assert!(live.iter().any(|p| p.id == "3"));
    }
}
