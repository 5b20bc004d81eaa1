//! Leaderboard standings.
//!
//! Standings are seeded mock data, like the rest of the catalog. The
//! displayed score is the player's points as a percentage of the
//! season ceiling.

use serde::{Deserialize, Serialize};

/// Points ceiling used to normalize the displayed score
pub const MAX_POINTS: u32 = 50_000;

/// One row on the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub rank: u32,
    pub name: String,
    pub handle: String,
    /// Project this player streams for
    pub project_id: String,
    pub wins: u32,
    pub matches: u32,
    pub points: u32,
}

impl Standing {
    /// Points as a percentage of [`MAX_POINTS`]
    pub fn score_percent(&self) -> f64 {
        f64::from(self.points) / f64::from(MAX_POINTS) * 100.0
    }
}

/// The seeded standings, already ranked
pub fn mock_standings() -> Vec<Standing> {
    let rows: [(u32, &str, &str, &str, u32, u32, u32); 5] = [
        (1, "Blademir Malina Tori", "@popy_bob", "1", 443, 778, 44_872),
        (2, "Robert Fox", "@robert_fox", "2", 440, 887, 42_515),
        (3, "Molida Glinda", "@molida_glinda", "3", 412, 756, 40_550),
        (4, "David Gilo", "@david_gilo", "4", 401, 750, 39_550),
        (5, "Lana Kroos", "@lana_kroos", "5", 380, 740, 38_550),
    ];
    rows.iter()
        .map(|(rank, name, handle, project_id, wins, matches, points)| Standing {
            rank: *rank,
            name: name.to_string(),
            handle: handle.to_string(),
            project_id: project_id.to_string(),
            wins: *wins,
            matches: *matches,
            points: *points,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standings_ranked_by_points() {
        let standings = mock_standings();
        for pair in standings.windows(2) {
            assert!(pair[0].points >= pair[1].points);
            assert!(pair[0].rank < pair[1].rank);
        }
    }

    #[test]
    fn test_score_percent() {
        let standings = mock_standings();
        let top = &standings[0];
        assert!((top.score_percent() - 89.744).abs() < 0.001);
    }
}
