mod client;
mod types;

pub use client::{InsightClient, InsightError, build_prompt, parse_insight, summarize_demands};
pub use types::{AiInsight, PriorityLevel};
