//! CLI command implementations.
//!
//! One submodule per subcommand; each exposes an options struct and an
//! `execute_*` entry point returning `anyhow::Result`.

pub mod browse;
pub mod init;
pub mod judge;
pub mod leaderboard;
pub mod rubric;
pub mod submit;
pub mod watch;

pub use browse::{execute_browse, BrowseOptions};
pub use init::{execute_init, InitOptions};
pub use judge::{execute_judge, JudgeOptions};
pub use leaderboard::{execute_leaderboard, LeaderboardOptions};
pub use rubric::{execute_rubric, RubricOptions};
pub use submit::{execute_submit, SubmitOptions};
pub use watch::{execute_watch, WatchOptions};

use anyhow::Result;

use crate::catalog::seed::RUBRIC_DOCUMENT;
use crate::config::Config;
use crate::error::HackcastError;

/// Read the rubric document from the configured path, falling back to
/// the embedded default when no file has been written yet
pub(crate) fn load_rubric_document(config: &Config) -> String {
    match std::fs::read_to_string(&config.rubric_path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!(
                path = %config.rubric_path,
                "rubric file not readable ({e}); using embedded default"
            );
            RUBRIC_DOCUMENT.to_string()
        }
    }
}

/// Load and parse the rubric. A parse failure blocks judging; it is
/// never downgraded to an empty rubric.
pub(crate) fn load_rubric(config: &Config) -> Result<(crate::rubric::Rubric, String)> {
    let document = load_rubric_document(config);
    let rubric = crate::rubric::Rubric::parse(&document)
        .ok_or_else(|| HackcastError::RubricUnavailable(config.rubric_path.clone()))?;
    Ok((rubric, document))
}
