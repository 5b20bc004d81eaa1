//! Session state: the active user role and the judging session.
//!
//! Role gates always match exhaustively on [`UserRole`]; there are no
//! stringly-typed role checks anywhere in the crate.

use serde::{Deserialize, Serialize};

use crate::scoring::Scores;

/// Closed set of user roles
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum, Default,
)]
pub enum UserRole {
    #[default]
    Visitor,
    Participant,
    Judge,
    Organizer,
}

impl UserRole {
    /// Whether this role may open the judging console
    pub fn can_judge(self) -> bool {
        match self {
            UserRole::Judge | UserRole::Organizer => true,
            UserRole::Visitor | UserRole::Participant => false,
        }
    }

    /// Whether this role may submit a project
    pub fn can_submit(self) -> bool {
        match self {
            UserRole::Participant | UserRole::Organizer => true,
            UserRole::Visitor | UserRole::Judge => false,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Visitor => write!(f, "Visitor"),
            UserRole::Participant => write!(f, "Participant"),
            UserRole::Judge => write!(f, "Judge"),
            UserRole::Organizer => write!(f, "Organizer"),
        }
    }
}

/// A session user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub role: UserRole,
    pub name: String,
    pub avatar: String,
}

impl User {
    /// The seeded user for a role
    pub fn for_role(role: UserRole) -> User {
        let (id, name, seed) = match role {
            UserRole::Visitor => ("user1", "Guest", "visitor"),
            UserRole::Participant => ("user2", "Alex", "participant"),
            UserRole::Judge => ("user3", "Casey", "judge"),
            UserRole::Organizer => ("user4", "Jordan", "organizer"),
        };
        User {
            id: id.to_string(),
            role,
            name: name.to_string(),
            avatar: format!("https://i.pravatar.cc/150?u={seed}"),
        }
    }
}

/// One judge's scoring session.
///
/// Scores belong to exactly one selected project; switching projects
/// discards them. The generation counter guards the AI pre-score
/// boundary: a response that comes back after the judge moved on is
/// dropped instead of being merged into the new project's scores.
#[derive(Debug, Clone, Default)]
pub struct JudgeSession {
    project_id: Option<String>,
    scores: Scores,
    generation: u64,
}

impl JudgeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    pub fn scores_mut(&mut self) -> &mut Scores {
        &mut self.scores
    }

    /// Current generation token; pass it back to [`apply_ai_scores`]
    /// when an AI pre-score request resolves.
    ///
    /// [`apply_ai_scores`]: JudgeSession::apply_ai_scores
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Select a project for judging. Clears the score sheet and
    /// invalidates any outstanding pre-score request.
    pub fn select_project(&mut self, project_id: &str) {
        self.project_id = Some(project_id.to_string());
        self.scores.clear();
        self.generation += 1;
    }

    /// Merge an AI pre-score response into the session.
    ///
    /// Returns `false` (and changes nothing) when `generation` is stale,
    /// i.e. the judge selected a different project while the request was
    /// in flight. Human entries made in the meantime survive the merge
    /// either way, since `human` always wins in aggregation.
    pub fn apply_ai_scores(&mut self, generation: u64, ai_scores: Scores) -> bool {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "discarding stale AI pre-score response"
            );
            return false;
        }
        for (criterion, entry) in ai_scores {
            if entry.ai.is_some() {
                self.scores.entry(criterion).or_default().ai = entry.ai;
            }
        }
        true
    }

    /// Record a human score for a criterion
    pub fn set_human_score(&mut self, criterion_name: &str, value: f64) {
        crate::scoring::set_human_score(&mut self.scores, criterion_name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{AiScore, ScoreEntry};

    fn ai_entry(score: f64) -> ScoreEntry {
        ScoreEntry {
            ai: Some(AiScore { score, rationale: "ok".to_string(), confidence: 0.9 }),
            human: None,
        }
    }

    #[test]
    fn test_role_gates_exhaustive() {
        assert!(UserRole::Judge.can_judge());
        assert!(UserRole::Organizer.can_judge());
        assert!(!UserRole::Visitor.can_judge());
        assert!(!UserRole::Participant.can_judge());
        assert!(UserRole::Participant.can_submit());
        assert!(!UserRole::Judge.can_submit());
    }

    #[test]
    fn test_select_project_resets_scores() {
        let mut session = JudgeSession::new();
        session.select_project("1");
        session.set_human_score("Code quality", 7.0);
        session.select_project("2");
        assert!(session.scores().is_empty());
        assert_eq!(session.project_id(), Some("2"));
    }

    #[test]
    fn test_stale_ai_response_discarded() {
        let mut session = JudgeSession::new();
        session.select_project("1");
        let pending = session.generation();

        // Judge switches projects while the request is in flight.
        session.select_project("2");

        let mut late = Scores::new();
        late.insert("Code quality".to_string(), ai_entry(8.0));
        assert!(!session.apply_ai_scores(pending, late));
        assert!(session.scores().is_empty());
    }

    #[test]
    fn test_fresh_ai_response_merges_under_human_edits() {
        let mut session = JudgeSession::new();
        session.select_project("1");
        let pending = session.generation();

        // Human edit lands before the AI response resolves.
        session.set_human_score("Code quality", 3.0);

        let mut fresh = Scores::new();
        fresh.insert("Code quality".to_string(), ai_entry(9.0));
        assert!(session.apply_ai_scores(pending, fresh));

        let entry = &session.scores()["Code quality"];
        assert_eq!(entry.human, Some(3.0));
        assert_eq!(entry.ai.as_ref().map(|a| a.score), Some(9.0));
        // The human edit wins in aggregation.
        assert_eq!(crate::scoring::effective_score(session.scores(), "Code quality"), 3.0);
    }
}
