//! Implements `hackcast leaderboard`.

use anyhow::Result;
use console::style;

use crate::catalog::ProjectStore;
use crate::leaderboard::{mock_standings, MAX_POINTS};

/// Options for the leaderboard command
#[derive(Debug, Clone, Default)]
pub struct LeaderboardOptions {
    /// Output as JSON (default: human-readable)
    pub json: bool,
}

/// Execute the leaderboard command
pub fn execute_leaderboard(options: LeaderboardOptions) -> Result<()> {
    let standings = mock_standings();
    if options.json {
        println!("{}", serde_json::to_string_pretty(&standings)?);
        return Ok(());
    }

    let store = ProjectStore::seeded();
    println!("{}\n", style("Leaderboard").bold().underlined());
    println!(
        "  {:<4} {:<22} {:<16} {:>7} {:>8} {:>8}  {}",
        "#", "Player", "Handle", "Score", "Wins", "Matches", "Project"
    );
    for standing in &standings {
        let project = store
            .get(&standing.project_id)
            .map(|p| p.name.as_str())
            .unwrap_or("—");
        println!(
            "  {:<4} {:<22} {:<16} {:>6.1}% {:>8} {:>8}  {}",
            standing.rank,
            standing.name,
            standing.handle,
            standing.score_percent(),
            standing.wins,
            standing.matches,
            project,
        );
    }
    println!(
        "\n{}",
        style(format!("Score is points out of a {MAX_POINTS} ceiling.")).dim()
    );
    Ok(())
}
