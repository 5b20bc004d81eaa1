//! Implements `hackcast browse`: the home view.
//!
//! Without filters the catalog is shown as curated rails (Live Now,
//! Trending, and two category rails), matching the default home page.
//! With any filter active a single filtered, viewer-count-sorted list
//! is shown instead.

use anyhow::Result;
use chrono::Utc;
use console::style;

use crate::catalog::{filter_and_sort, FilterState, Project, ProjectStore, Rails};
use crate::config::Config;
use crate::event;

/// Options for the browse command
#[derive(Debug, Clone, Default)]
pub struct BrowseOptions {
    /// Categories to filter by (primary or secondary, OR semantics)
    pub categories: Vec<String>,
    /// Show only projects that are currently live
    pub live: bool,
    /// Case-insensitive substring search
    pub search: Option<String>,
    /// Output as JSON (default: human-readable)
    pub json: bool,
}

/// Execute the browse command
pub fn execute_browse(options: BrowseOptions, config: &Config) -> Result<()> {
    let store = ProjectStore::seeded();
    let filter = FilterState {
        active_categories: options.categories,
        show_only_live: options.live,
        search_query: options.search.unwrap_or_default(),
    };

    if filter.is_active() {
        let results = filter_and_sort(store.all(), &filter);
        if options.json {
            println!("{}", serde_json::to_string_pretty(&results)?);
            return Ok(());
        }
        if results.is_empty() {
            println!("{}", style("No Projects Found").bold());
            println!("Try adjusting your search or filters to find what you're looking for.");
            return Ok(());
        }
        print_rail(&format!("Results ({})", results.len()), &results);
        return Ok(());
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(store.all())?);
        return Ok(());
    }

    print_header(config);
    print_rail("Live Now", &Rails::live_now(store.all()));
    print_rail("Trending", &Rails::trending(store.all()));
    print_rail(
        "Developer Tools",
        &Rails::in_category(store.all(), "Developer tools & productivity"),
    );
    print_rail(
        "Data Viz",
        &Rails::in_category(store.all(), "Data visualization & analytics"),
    );
    Ok(())
}

fn print_header(config: &Config) {
    println!("{}", style(&config.event_name).bold().underlined());
    if let Some(ends_at) = config.ends_at {
        match event::time_left(ends_at, Utc::now()) {
            Some(left) => println!("Submissions close in {}", style(left).cyan()),
            None => println!("{}", style("Submissions are closed").yellow()),
        }
    }
    println!();
}

fn print_rail(title: &str, projects: &[&Project]) {
    println!("{}", style(title).bold());
    if projects.is_empty() {
        println!("  (nothing here yet)");
    }
    for project in projects {
        let live = if project.is_live {
            style("● LIVE").red().to_string()
        } else {
            style("○ offline").dim().to_string()
        };
        println!(
            "  {:<12} {:>6} viewers  {} — {} [{}] ({})",
            live,
            project.viewer_count,
            style(&project.name).bold(),
            project.team_name,
            project.category_primary,
            project.id,
        );
    }
    println!();
}
