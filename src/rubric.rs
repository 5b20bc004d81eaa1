//! Rubric outline parser.
//!
//! Translates the line-oriented rubric document (a stable, versionable
//! plain-text asset, see `rubric.md`) into a structured [`Rubric`].
//!
//! Grammar, per trimmed line:
//! - `# <version>` sets the rubric version (the last such line wins)
//! - `## <name> - <weight>` opens a new section; an already open section
//!   is sealed first
//! - `- <name> - <points>` appends a criterion to the open section; dash
//!   lines before any section header are dropped
//! - anything else is ignored
//!
//! Numeric tokens follow the leading-integer rule: `"10"` and `"10pts"`
//! both read as 10, while a missing or non-numeric token becomes `None`.
//! The aggregator treats `None` as a zero contribution (see
//! [`crate::scoring`]).

use serde::{Deserialize, Serialize};

/// Literal separator between a name and its numeric token
const NAME_VALUE_SEPARATOR: &str = " - ";

/// Smallest scorable unit within a rubric section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricCriterion {
    /// Criterion name, unique within its section
    pub name: String,
    /// Maximum point value; `None` if the document carried a malformed token
    pub max_points: Option<i64>,
}

/// A weighted group of criteria
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricSection {
    /// Section name, unique within the rubric
    pub name: String,
    /// Advisory weight; not enforced against the criteria's point sum
    pub weight: Option<i64>,
    /// Criteria in document order
    pub criteria: Vec<RubricCriterion>,
}

/// Weighted hierarchy of sections and criteria used to score a project.
///
/// Built once from the rubric document at startup and read-only after
/// that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rubric {
    /// Version string from the `#` line (empty if none was present)
    pub version: String,
    /// Sections in document order
    pub sections: Vec<RubricSection>,
}

impl Rubric {
    /// Parse a rubric outline document.
    ///
    /// Returns `None` when no rubric can be built from the input.
    /// Callers must treat `None` as "rubric unavailable" (judging is
    /// blocked), never as an empty rubric. A document with no headers
    /// at all still yields an empty-but-valid rubric; `None` is the
    /// failure outcome, not the degenerate one.
    ///
    /// Parsing is pure: the same document always yields structurally
    /// identical output.
    pub fn parse(document: &str) -> Option<Rubric> {
        let mut rubric = Rubric {
            version: String::new(),
            sections: Vec::new(),
        };
        let mut current: Option<RubricSection> = None;

        for line in document.trim().lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(rest) = line.strip_prefix("# ") {
                // Last version line wins. Multiple version lines are a
                // document-authoring quirk that is preserved, not fixed.
                rubric.version = rest.trim().to_string();
            } else if let Some(rest) = line.strip_prefix("## ") {
                // Sections are sealed at the next boundary, not streamed.
                if let Some(section) = current.take() {
                    rubric.sections.push(section);
                }
                let (name, weight) = split_name_value(rest);
                current = Some(RubricSection {
                    name,
                    weight,
                    criteria: Vec::new(),
                });
            } else if let Some(rest) = line.strip_prefix("- ") {
                // A dash line before any section header is silently dropped.
                if let Some(section) = current.as_mut() {
                    let (name, max_points) = split_name_value(rest);
                    section.criteria.push(RubricCriterion { name, max_points });
                }
            }
            // Any other non-blank line is ignored.
        }

        if let Some(section) = current.take() {
            rubric.sections.push(section);
        }

        Some(rubric)
    }

    /// Sum of all criteria max points across the rubric, malformed
    /// tokens counting as zero
    pub fn max_total(&self) -> i64 {
        self.sections
            .iter()
            .flat_map(|s| s.criteria.iter())
            .map(|c| c.max_points.unwrap_or(0))
            .sum()
    }
}

/// Split `"<name> - <value>"` on the first ` - ` into a trimmed name and
/// a parsed integer token
fn split_name_value(rest: &str) -> (String, Option<i64>) {
    match rest.split_once(NAME_VALUE_SEPARATOR) {
        Some((name, value)) => (name.trim().to_string(), parse_int_token(value)),
        None => (rest.trim().to_string(), None),
    }
}

/// Parse the leading base-10 integer of a token, `parseInt`-style.
///
/// `"40"`, `" 40 "`, `"40pts"` and `"-3x"` all parse; an empty token or
/// one with no leading digits yields `None` (the non-numeric sentinel).
fn parse_int_token(token: &str) -> Option<i64> {
    let token = token.trim();
    let (sign, digits) = match token.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, token.strip_prefix('+').unwrap_or(token)),
    };
    let prefix: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    if prefix.is_empty() {
        return None;
    }
    prefix.parse::<i64>().ok().map(|v| sign * v)
}
