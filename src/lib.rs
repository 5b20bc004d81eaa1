#![forbid(unsafe_code)]

//! # Hackcast
//!
//! Live hackathon streaming and judging console: project discovery,
//! a submission studio, a judging console with AI pre-scoring, a
//! leaderboard, and simulated live chat.
//!
//! All data is in-memory mock data seeded at startup; the only
//! external integration is the hosted Gemini completion API behind
//! [`gateway::Gateway`]. There is no persistence layer, no
//! authentication, and no real-time transport.
//!
//! ## Example
//!
//! ```rust
//! use hackcast::catalog::{filter_and_sort, FilterState, ProjectStore};
//! use hackcast::rubric::Rubric;
//! use hackcast::scoring::{grand_total, section_totals, Scores};
//!
//! let store = ProjectStore::seeded();
//! let mut filter = FilterState::default();
//! filter.show_only_live = true;
//! let live = filter_and_sort(store.all(), &filter);
//! assert!(live.iter().all(|p| p.is_live));
//!
//! let rubric = Rubric::parse(hackcast::catalog::seed::RUBRIC_DOCUMENT)
//!     .expect("rubric unavailable");
//! let totals = section_totals(&rubric, &Scores::new());
//! assert_eq!(grand_total(&totals), 0.0);
//! ```

pub mod catalog;
pub mod chat;
pub mod commands;
pub mod config;
pub mod error;
pub mod event;
pub mod gateway;
pub mod leaderboard;
pub mod rubric;
pub mod scoring;
pub mod session;

// Re-exports
pub use catalog::{filter_and_sort, FilterState, Project, ProjectStore};
pub use config::Config;
pub use error::{HackcastError, Result};
pub use gateway::{Categorization, Gateway};
pub use rubric::{Rubric, RubricCriterion, RubricSection};
pub use scoring::{grand_total, section_totals, AiScore, ScoreEntry, Scores, SectionTotal};
pub use session::{JudgeSession, User, UserRole};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
