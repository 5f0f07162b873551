use serde::{Deserialize, Serialize};

/// Overall priority the model assigns to the campus situation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriorityLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl PriorityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            PriorityLevel::Low => "Low",
            PriorityLevel::Medium => "Medium",
            PriorityLevel::High => "High",
            PriorityLevel::Critical => "Critical",
        }
    }

    /// CSS badge class for the dashboard insight card.
    pub fn css_class(&self) -> &'static str {
        match self {
            PriorityLevel::Low => "priority-low",
            PriorityLevel::Medium => "priority-medium",
            PriorityLevel::High => "priority-high",
            PriorityLevel::Critical => "priority-critical",
        }
    }
}

/// Strategic report returned by the generative-AI service. Field names
/// mirror the JSON response schema the service is asked to produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiInsight {
    pub sentiment_summary: String,
    pub key_trends: Vec<String>,
    pub strategic_recommendation: String,
    pub priority_level: PriorityLevel,
}
