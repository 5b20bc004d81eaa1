//! AI gateway.
//!
//! Boundary module for the hosted Gemini text/JSON completion API. The
//! gateway backs three conveniences: categorizing a project
//! description, pre-scoring a rubric, and summarizing chat. Every
//! failure here is recoverable; each call site defines its own
//! fallback (manual category picker, empty score set, user-visible
//! summary error) and nothing in the core treats a gateway error as
//! fatal.
//!
//! Schema building and response decoding are pure functions so they
//! can be tested against fixture JSON without network access.

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::catalog::seed::{CATEGORIES, FALLBACK_CATEGORY};
use crate::catalog::Project;
use crate::chat::ChatMessage;
use crate::config::GatewayConfig;
use crate::error::{HackcastError, Result};
use crate::rubric::Rubric;
use crate::scoring::{AiScore, ScoreEntry, Scores};

/// Categorization result for a project description
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Categorization {
    /// The single most relevant category
    #[serde(rename = "categoryPrimary")]
    pub category_primary: String,
    /// Up to two other relevant categories
    #[serde(rename = "categorySecondary", default)]
    pub category_secondary: Vec<String>,
}

impl Categorization {
    /// The fallback used when the gateway is unavailable or returns
    /// something unusable
    pub fn fallback() -> Self {
        Self {
            category_primary: FALLBACK_CATEGORY.to_string(),
            category_secondary: Vec::new(),
        }
    }
}

/// Client for the Gemini `generateContent` endpoint
pub struct Gateway {
    config: GatewayConfig,
    agent: ureq::Agent,
}

impl Gateway {
    pub fn new(config: GatewayConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build();
        Self { config, agent }
    }

    /// Whether an API key is configured. Call sites short-circuit to
    /// their fallback when it is not.
    pub fn is_configured(&self) -> bool {
        !self.config.api_key.is_empty()
    }

    /// Categorize a project description against the canonical category
    /// list
    pub fn categorize(&self, description: &str) -> Result<Categorization> {
        let prompt = format!(
            "Based on the following project description, please categorize it.\n\n\
             Description: \"{description}\"\n\n\
             Rules:\n\
             1. Choose one primary category from the list.\n\
             2. Choose up to two secondary categories from the list.\n\
             3. The primary category cannot be a secondary category.\n\
             4. Your response must be in the specified JSON format.\n\n\
             Category List: {}",
            CATEGORIES.join(", ")
        );
        let schema = categorize_schema();
        let text = self.generate_json(&self.config.model_fast, &prompt, &schema)?;
        decode_categorization(&text)
    }

    /// Pre-score a project against the rubric. The response schema is
    /// derived from the rubric so the model answers per criterion name.
    pub fn pre_score(&self, project: &Project, rubric: &Rubric, rubric_document: &str) -> Result<Scores> {
        let prompt = format!(
            "You are an expert judge at a hackathon. Your task is to provide a preliminary \
             score for a project based on its description and the official rubric. Provide a \
             score, a short rationale for that score, and a confidence level (0.0 to 1.0) for \
             each criterion.\n\n\
             Project Details:\n\
             - Name: {}\n\
             - Tagline: {}\n\
             - Description: {}\n\
             - Tech Stack: {}\n\n\
             Rubric:\n{}\n\n\
             Instructions:\n\
             - Evaluate the project against each criterion in the rubric.\n\
             - For \"Presentation\", infer quality from the project's descriptive clarity and \
             compelling tagline.\n\
             - For \"Technical\", evaluate based on the tech stack's appropriateness and \
             implied complexity.\n\
             - For \"Impact\" and \"Polish\", evaluate based on the project's description and \
             problem statement.\n\
             - Return a JSON object where keys are the exact criterion names from the rubric \
             (e.g., \"Clarity of problem\", \"Code quality\").",
            project.name,
            project.tagline,
            project.description,
            project.tech_tags.join(", "),
            rubric_document,
        );
        let schema = pre_score_schema(rubric);
        let text = self.generate_json(&self.config.model_pro, &prompt, &schema)?;
        decode_pre_score(&text)
    }

    /// Summarize a chat transcript into a short bulleted digest
    pub fn summarize_chat(&self, messages: &[ChatMessage]) -> Result<String> {
        let transcript = messages
            .iter()
            .map(|m| format!("{}: {}", m.user.name, m.message))
            .collect::<Vec<_>>()
            .join("\n");
        let prompt = format!(
            "You are a helpful assistant for a live stream platform. Summarize the following \
             chat conversation from a hackathon project stream. Focus on:\n\
             - The main topics being discussed.\n\
             - Any frequently asked questions.\n\
             - The overall sentiment or viewer reaction.\n\
             Keep the summary concise, easy to read, and use bullet points for clarity.\n\n\
             Chat Log:\n{transcript}"
        );
        self.generate_text(&self.config.model_fast, &prompt)
    }

    /// POST a prompt expecting a JSON response constrained by `schema`
    fn generate_json(&self, model: &str, prompt: &str, schema: &Value) -> Result<String> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema,
            },
        });
        self.call(model, body)
    }

    /// POST a prompt expecting free text
    fn generate_text(&self, model: &str, prompt: &str) -> Result<String> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });
        self.call(model, body)
    }

    fn call(&self, model: &str, body: Value) -> Result<String> {
        if !self.is_configured() {
            warn!("AI gateway not configured; set GEMINI_API_KEY");
            return Err(HackcastError::Gateway("API key not configured".to_string()));
        }
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            model
        );
        debug!(%model, "calling generateContent");
        let response: Value = self
            .agent
            .post(&url)
            .set("x-goog-api-key", &self.config.api_key)
            .set("User-Agent", "hackcast-cli")
            .send_json(body)
            .map_err(|e| HackcastError::Gateway(e.to_string()))?
            .into_json()
            .map_err(|e| HackcastError::Gateway(format!("invalid response body: {e}")))?;
        extract_text(&response)
    }
}

/// Pull the first candidate's text out of a `generateContent` response
fn extract_text(response: &Value) -> Result<String> {
    response["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| HackcastError::Gateway("response carried no text part".to_string()))
}

/// Response schema for `categorize`
fn categorize_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "categoryPrimary": {
                "type": "STRING",
                "description": "The single most relevant category for the project.",
            },
            "categorySecondary": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Up to two other relevant categories.",
            },
        },
        "required": ["categoryPrimary", "categorySecondary"],
    })
}

/// Response schema for `pre_score`: one object property per criterion
/// name across every rubric section
fn pre_score_schema(rubric: &Rubric) -> Value {
    let mut properties = serde_json::Map::new();
    for section in &rubric.sections {
        for criterion in &section.criteria {
            properties.insert(
                criterion.name.clone(),
                json!({
                    "type": "OBJECT",
                    "description": format!("Score for {}", criterion.name),
                    "properties": {
                        "score": {
                            "type": "NUMBER",
                            "description": format!(
                                "Score from 0 to {}",
                                criterion.max_points.unwrap_or(0)
                            ),
                        },
                        "rationale": {
                            "type": "STRING",
                            "description": "Brief justification for the score.",
                        },
                        "confidence": {
                            "type": "NUMBER",
                            "description": "Confidence in the score from 0.0 to 1.0",
                        },
                    },
                    "required": ["score", "rationale", "confidence"],
                }),
            );
        }
    }
    json!({ "type": "OBJECT", "properties": properties })
}

/// Decode the categorization JSON, falling back field-by-field instead
/// of rejecting a partial response
fn decode_categorization(text: &str) -> Result<Categorization> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| HackcastError::Gateway(format!("malformed categorization JSON: {e}")))?;
    let category_primary = value["categoryPrimary"]
        .as_str()
        .filter(|s| !s.is_empty())
        .unwrap_or(FALLBACK_CATEGORY)
        .to_string();
    let category_secondary = value["categorySecondary"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str())
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default();
    Ok(Categorization { category_primary, category_secondary })
}

/// Decode the pre-score JSON into `Scores` entries with only the `ai`
/// side populated
fn decode_pre_score(text: &str) -> Result<Scores> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| HackcastError::Gateway(format!("malformed pre-score JSON: {e}")))?;
    let object = value
        .as_object()
        .ok_or_else(|| HackcastError::Gateway("pre-score response is not an object".to_string()))?;

    let mut scores = Scores::new();
    for (criterion, entry) in object {
        match serde_json::from_value::<AiScore>(entry.clone()) {
            Ok(ai) => {
                scores.insert(criterion.clone(), ScoreEntry { ai: Some(ai), human: None });
            }
            Err(e) => {
                // One bad criterion does not invalidate the rest.
                warn!(%criterion, "skipping undecodable AI score: {e}");
            }
        }
    }
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::RUBRIC_DOCUMENT;

    #[test]
    fn test_extract_text_happy_path() {
        let response = json!({
            "candidates": [
                { "content": { "parts": [{ "text": "{\"ok\":true}" }] } }
            ]
        });
        assert_eq!(extract_text(&response).unwrap(), "{\"ok\":true}");
    }

    #[test]
    fn test_extract_text_missing_candidates() {
        let response = json!({ "promptFeedback": {} });
        assert!(extract_text(&response).is_err());
    }

    #[test]
    fn test_pre_score_schema_covers_every_criterion() {
        let rubric = Rubric::parse(RUBRIC_DOCUMENT).unwrap();
        let schema = pre_score_schema(&rubric);
        let properties = schema["properties"].as_object().unwrap();
        assert_eq!(properties.len(), 11);
        assert!(properties.contains_key("Clarity of problem"));
        assert!(properties.contains_key("Documentation"));
        assert_eq!(
            properties["Code quality"]["properties"]["score"]["description"],
            "Score from 0 to 10"
        );
    }

    #[test]
    fn test_decode_categorization() {
        let parsed = decode_categorization(
            r#"{"categoryPrimary":"Web app","categorySecondary":["Mobile app"]}"#,
        )
        .unwrap();
        assert_eq!(parsed.category_primary, "Web app");
        assert_eq!(parsed.category_secondary, vec!["Mobile app"]);
    }

    #[test]
    fn test_decode_categorization_empty_primary_falls_back() {
        let parsed =
            decode_categorization(r#"{"categoryPrimary":"","categorySecondary":[]}"#).unwrap();
        assert_eq!(parsed.category_primary, FALLBACK_CATEGORY);
    }

    #[test]
    fn test_decode_pre_score_skips_bad_entries() {
        let scores = decode_pre_score(
            r#"{
                "Code quality": {"score": 8, "rationale": "solid", "confidence": 0.7},
                "Architecture": {"score": "not a number"}
            }"#,
        )
        .unwrap();
        assert_eq!(scores.len(), 1);
        let entry = &scores["Code quality"];
        assert_eq!(entry.ai.as_ref().map(|a| a.score), Some(8.0));
        assert!(entry.human.is_none());
    }

    #[test]
    fn test_decode_pre_score_rejects_non_object() {
        assert!(decode_pre_score("[1,2,3]").is_err());
        assert!(decode_pre_score("not json").is_err());
    }
}
