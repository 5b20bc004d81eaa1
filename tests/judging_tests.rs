//! Score aggregation and judging session integration tests.

use pretty_assertions::assert_eq;

use hackcast::rubric::Rubric;
use hackcast::scoring::{
    grand_total, section_totals, set_human_score, AiScore, ScoreEntry, Scores,
};
use hackcast::session::JudgeSession;

fn ai_entry(score: f64) -> ScoreEntry {
    ScoreEntry {
        ai: Some(AiScore { score, rationale: "ok".to_string(), confidence: 0.5 }),
        human: None,
    }
}

// =============================================================================
// Aggregation
// =============================================================================

mod aggregation_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ai_only_scores_sum_per_section() {
        let doc = "# v1\n## Tech - 40\n- Code - 10\n- Design - 10\n## Impact - 20\n- Value - 10\n";
        let rubric = Rubric::parse(doc).unwrap();
        let mut scores = Scores::new();
        scores.insert("Code".to_string(), ai_entry(6.0));
        scores.insert("Design".to_string(), ai_entry(4.0));
        // "Value" has no entry at all.

        let totals = section_totals(&rubric, &scores);
        assert_eq!(totals["Tech"].total, 10.0);
        assert_eq!(totals["Tech"].max, 20);
        assert_eq!(totals["Impact"].total, 0.0);
        assert_eq!(totals["Impact"].max, 10);
    }

    #[test]
    fn test_human_zero_overrides_ai_score() {
        let doc = "## Tech - 40\n- Code - 10\n";
        let rubric = Rubric::parse(doc).unwrap();
        let mut scores = Scores::new();
        scores.insert("Code".to_string(), ai_entry(8.0));
        set_human_score(&mut scores, "Code", 0.0);

        let totals = section_totals(&rubric, &scores);
        // Explicit 0 wins; this must not fall through to the AI's 8.
        assert_eq!(totals["Tech"].total, 0.0);
    }

    #[test]
    fn test_human_above_max_is_not_clamped() {
        let doc = "## Tech - 40\n- Code - 10\n";
        let rubric = Rubric::parse(doc).unwrap();
        let mut scores = Scores::new();
        set_human_score(&mut scores, "Code", 15.0);

        let totals = section_totals(&rubric, &scores);
        assert_eq!(totals["Tech"].total, 15.0);
        assert_eq!(totals["Tech"].max, 10);
    }

    #[test]
    fn test_malformed_max_points_contribute_zero_without_panicking() {
        let doc = "## Tech - 40\n- Code - ten\n- Design - 10\n";
        let rubric = Rubric::parse(doc).unwrap();
        let mut scores = Scores::new();
        set_human_score(&mut scores, "Code", 5.0);

        let totals = section_totals(&rubric, &scores);
        // The malformed max reads as 0, the score still counts.
        assert_eq!(totals["Tech"].max, 10);
        assert_eq!(totals["Tech"].total, 5.0);
    }

    #[test]
    fn test_grand_total_invariant_under_section_reordering() {
        let forward = "## A - 1\n- A1 - 10\n## B - 1\n- B1 - 10\n";
        let reversed = "## B - 1\n- B1 - 10\n## A - 1\n- A1 - 10\n";
        let mut scores = Scores::new();
        set_human_score(&mut scores, "A1", 7.0);
        scores.insert("B1".to_string(), ai_entry(2.0));

        let a = grand_total(&section_totals(&Rubric::parse(forward).unwrap(), &scores));
        let b = grand_total(&section_totals(&Rubric::parse(reversed).unwrap(), &scores));
        assert_eq!(a, b);
        assert_eq!(a, 9.0);
    }

    #[test]
    fn test_aggregation_is_total_over_any_pair() {
        // Entries for criteria the rubric does not mention are ignored;
        // criteria without entries read as zero.
        let rubric = Rubric::parse("## S - 1\n- Known - 10\n").unwrap();
        let mut scores = Scores::new();
        scores.insert("Unknown".to_string(), ai_entry(99.0));
        let totals = section_totals(&rubric, &scores);
        assert_eq!(totals["S"].total, 0.0);
        assert_eq!(grand_total(&totals), 0.0);
    }
}

// =============================================================================
// End-to-end scenario
// =============================================================================

mod scenario_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_outline_to_totals() {
        let rubric = Rubric::parse("# v1\n## Tech - 40\n- Code - 10\n- Design - 10\n").unwrap();
        assert_eq!(rubric.sections.len(), 1);
        assert_eq!(rubric.sections[0].name, "Tech");
        assert_eq!(rubric.sections[0].weight, Some(40));

        let mut scores = Scores::new();
        set_human_score(&mut scores, "Code", 7.0);
        scores.insert("Design".to_string(), ai_entry(5.0));

        let totals = section_totals(&rubric, &scores);
        assert_eq!(totals["Tech"].total, 12.0);
        assert_eq!(totals["Tech"].max, 20);
        assert_eq!(grand_total(&totals), 12.0);
    }
}

// =============================================================================
// Judging session boundary
// =============================================================================

mod session_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_switching_projects_discards_scores() {
        let mut session = JudgeSession::new();
        session.select_project("1");
        session.set_human_score("Code", 9.0);
        session.select_project("2");
        assert!(session.scores().is_empty());
    }

    #[test]
    fn test_late_pre_score_for_previous_project_is_discarded() {
        let mut session = JudgeSession::new();
        session.select_project("1");
        let in_flight = session.generation();
        session.select_project("2");

        let mut late = Scores::new();
        late.insert("Code".to_string(), ai_entry(8.0));
        assert!(!session.apply_ai_scores(in_flight, late));
        assert!(session.scores().is_empty());
    }

    #[test]
    fn test_human_edit_during_in_flight_request_wins() {
        let mut session = JudgeSession::new();
        session.select_project("1");
        let in_flight = session.generation();

        session.set_human_score("Code", 2.0);
        let mut response = Scores::new();
        response.insert("Code".to_string(), ai_entry(10.0));
        assert!(session.apply_ai_scores(in_flight, response));

        let rubric = Rubric::parse("## Tech - 40\n- Code - 10\n").unwrap();
        let totals = section_totals(&rubric, session.scores());
        assert_eq!(totals["Tech"].total, 2.0);
    }
}
