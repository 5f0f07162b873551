use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::models::demand::Demand;

use super::types::AiInsight;

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const INSTRUCTION: &str = "Analyze the following student demands and provide a strategic campus \
insight report for the Campus Authority. Consider both upvotes (support) and downvotes \
(opposition/low priority) to weigh the true community need.";

#[derive(Debug)]
pub enum InsightError {
    /// No API key configured; the request was never sent.
    MissingKey,
    Http(reqwest::Error),
    Status(u16),
    /// The service answered but returned no candidate text.
    EmptyResponse,
    /// Candidate text was not valid report JSON.
    Malformed(serde_json::Error),
}

impl fmt::Display for InsightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsightError::MissingKey => write!(f, "no API key configured"),
            InsightError::Http(e) => write!(f, "request failed: {e}"),
            InsightError::Status(code) => write!(f, "service returned HTTP {code}"),
            InsightError::EmptyResponse => write!(f, "service returned no candidates"),
            InsightError::Malformed(e) => write!(f, "unparsable report JSON: {e}"),
        }
    }
}

impl From<reqwest::Error> for InsightError {
    fn from(e: reqwest::Error) -> Self {
        InsightError::Http(e)
    }
}

/// One line per demand, the exact shape the report prompt expects.
pub fn summarize_demands(demands: &[Demand]) -> String {
    demands
        .iter()
        .map(|d| {
            format!(
                "- [{}] {}: {} (Upvotes: {}, Downvotes: {})",
                d.category, d.title, d.description, d.upvotes, d.downvotes
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_prompt(demands: &[Demand]) -> String {
    format!("{INSTRUCTION}\n\nDemands:\n{}", summarize_demands(demands))
}

/// Parse candidate text into a report. Anything short of the full schema is
/// a hard failure; there is no partial result.
pub fn parse_insight(text: &str) -> Result<AiInsight, InsightError> {
    serde_json::from_str(text).map_err(InsightError::Malformed)
}

// generateContent response envelope; only the candidate text is of interest.
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

/// Client for the generative-AI report boundary. One request per user
/// action; no retry, no caching.
pub struct InsightClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl InsightClient {
    pub fn new(api_key: Option<String>, model: String, base_url: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            http,
            api_key,
            model,
            base_url,
        }
    }

    /// Build a client from `GEMINI_API_KEY`, `GEMINI_MODEL`, and
    /// `GEMINI_API_BASE`. A missing key is tolerated at startup; generation
    /// requests will fail until one is configured.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        if api_key.is_none() {
            log::warn!("No GEMINI_API_KEY set — strategic report generation will fail until configured");
        }
        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url =
            std::env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self::new(api_key, model, base_url)
    }

    /// Ask the service for a strategic report over the given demand list.
    pub async fn generate_report(&self, demands: &[Demand]) -> Result<AiInsight, InsightError> {
        let api_key = self.api_key.as_deref().ok_or(InsightError::MissingKey)?;

        let body = request_body(&build_prompt(demands));
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(InsightError::Status(status.as_u16()));
        }

        let envelope: GenerateContentResponse = response.json().await?;
        let text = envelope
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
            .filter(|t| !t.is_empty())
            .ok_or(InsightError::EmptyResponse)?;

        parse_insight(text)
    }
}

/// generateContent request: the prompt plus a response schema forcing the
/// service to answer with report JSON.
fn request_body(prompt: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "OBJECT",
                "properties": {
                    "sentimentSummary": {
                        "type": "STRING",
                        "description": "A professional summary of overall student sentiment based on the demands and vote distribution."
                    },
                    "keyTrends": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" },
                        "description": "List of top 3 emerging trends in student needs."
                    },
                    "strategicRecommendation": {
                        "type": "STRING",
                        "description": "A prioritized strategic recommendation for the Campus Authority."
                    },
                    "priorityLevel": {
                        "type": "STRING",
                        "description": "Overall priority level: LOW, MEDIUM, HIGH, or CRITICAL."
                    }
                },
                "required": ["sentimentSummary", "keyTrends", "strategicRecommendation", "priorityLevel"]
            }
        }
    })
}
