//! Score aggregation.
//!
//! Combines AI-suggested and human-entered per-criterion scores into
//! section totals and a grand total. This is a pure read model: totals
//! are recomputed on every query and never cached, so they always
//! reflect the latest score mutation.
//!
//! The effective score for a criterion is the human override if present
//! (an explicit 0 counts), else the AI suggestion, else 0. No clamping
//! is performed against a criterion's max points; a human value above
//! the maximum inflates the total.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// AI-suggested score for a single criterion. Never mutated once
/// received from the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiScore {
    /// Suggested score
    pub score: f64,
    /// Brief justification for the score
    pub rationale: String,
    /// Model confidence in [0, 1]
    pub confidence: f64,
}

/// Per-criterion score state: an optional AI suggestion and an optional
/// human override
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai: Option<AiScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub human: Option<f64>,
}

/// Scores for one judging session, keyed by criterion name
pub type Scores = HashMap<String, ScoreEntry>;

/// Derived per-section totals. Computed on demand, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionTotal {
    /// Sum of effective scores over the section's criteria
    pub total: f64,
    /// Sum of max points over the section's criteria (malformed tokens
    /// count as 0)
    pub max: i64,
}

/// Compute per-section totals for a rubric and the current scores.
///
/// Total over any `Rubric`/`Scores` pair: missing entries contribute 0,
/// non-finite values contribute 0 instead of poisoning the sums. The
/// returned map iterates in a deterministic order.
pub fn section_totals(
    rubric: &crate::rubric::Rubric,
    scores: &Scores,
) -> BTreeMap<String, SectionTotal> {
    let mut totals = BTreeMap::new();
    for section in &rubric.sections {
        let mut total = 0.0;
        let mut max = 0i64;
        for criterion in &section.criteria {
            total += effective_score(scores, &criterion.name);
            max += criterion.max_points.unwrap_or(0);
        }
        totals.insert(section.name.clone(), SectionTotal { total, max });
    }
    totals
}

/// Sum of section totals. Addition is commutative, so section order
/// never changes the result; the deterministic map order keeps the
/// floating-point sum stable for testing.
pub fn grand_total(totals: &BTreeMap<String, SectionTotal>) -> f64 {
    totals.values().map(|t| t.total).sum()
}

/// The value actually counted toward totals: human override if present,
/// else AI suggestion, else zero
pub fn effective_score(scores: &Scores, criterion_name: &str) -> f64 {
    let value = scores
        .get(criterion_name)
        .and_then(|entry| entry.human.or_else(|| entry.ai.as_ref().map(|ai| ai.score)))
        .unwrap_or(0.0);
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Set (or create) the human score for a criterion, leaving any AI
/// suggestion untouched.
///
/// No validation against the criterion's max points happens here;
/// out-of-range values are recorded as entered.
pub fn set_human_score(scores: &mut Scores, criterion_name: &str, value: f64) {
    scores
        .entry(criterion_name.to_string())
        .or_default()
        .human = Some(value);
}
