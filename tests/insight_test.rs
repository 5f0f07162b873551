//! Integration tests for the strategic-report boundary: prompt
//! serialization, strict response parsing, and failure behavior.

mod common;

use campuspulse::insight::{
    AiInsight, InsightClient, InsightError, PriorityLevel, build_prompt, parse_insight,
    summarize_demands,
};
use campuspulse::models::demand::initial_demands;
use common::seeded_store;

#[test]
fn test_summary_line_format() {
    let demands = initial_demands();
    let shuttle: Vec<_> = demands.into_iter().filter(|d| d.id == "3").collect();

    let summary = summarize_demands(&shuttle);
    assert_eq!(
        summary,
        "- [Transport] Shuttle Express Frequency: Demand for 10-minute interval shuttles \
         between North and South campus gates. (Upvotes: 310, Downvotes: 89)"
    );
}

#[test]
fn test_summary_joins_lines_with_newlines() {
    let demands = initial_demands();
    let summary = summarize_demands(&demands);

    assert_eq!(summary.lines().count(), demands.len());
    assert!(summary.lines().all(|l| l.starts_with("- [")));
}

#[test]
fn test_prompt_carries_instruction_and_demands() {
    let demands = initial_demands();
    let prompt = build_prompt(&demands);

    assert!(prompt.starts_with("Analyze the following student demands"));
    assert!(prompt.contains("\n\nDemands:\n"));
    assert!(prompt.contains("- [Food] KFC Campus Express:"));
}

#[test]
fn test_parse_valid_report() {
    let body = r#"{
        "sentimentSummary": "Students are broadly supportive of infrastructure demands.",
        "keyTrends": ["Transport reliability", "Connectivity", "Late-night food"],
        "strategicRecommendation": "Prioritize the shuttle frequency program this semester.",
        "priorityLevel": "HIGH"
    }"#;

    let insight = parse_insight(body).unwrap();
    assert_eq!(insight.key_trends.len(), 3);
    assert_eq!(insight.priority_level, PriorityLevel::High);
    assert!(insight.strategic_recommendation.contains("shuttle"));
}

#[test]
fn test_parse_all_priority_levels() {
    for (code, level) in [
        ("LOW", PriorityLevel::Low),
        ("MEDIUM", PriorityLevel::Medium),
        ("HIGH", PriorityLevel::High),
        ("CRITICAL", PriorityLevel::Critical),
    ] {
        let body = format!(
            r#"{{"sentimentSummary": "s", "keyTrends": [], "strategicRecommendation": "r", "priorityLevel": "{code}"}}"#
        );
        let insight: AiInsight = parse_insight(&body).unwrap();
        assert_eq!(insight.priority_level, level);
    }
}

#[test]
fn test_parse_rejects_malformed_body() {
    assert!(matches!(
        parse_insight("this is not json"),
        Err(InsightError::Malformed(_))
    ));
}

#[test]
fn test_parse_rejects_missing_fields() {
    let body = r#"{"sentimentSummary": "only one field"}"#;
    assert!(parse_insight(body).is_err());
}

#[test]
fn test_parse_rejects_unknown_priority() {
    let body = r#"{"sentimentSummary": "s", "keyTrends": [], "strategicRecommendation": "r", "priorityLevel": "URGENT"}"#;
    assert!(parse_insight(body).is_err());
}

#[tokio::test]
async fn test_missing_api_key_fails_without_request() {
    let client = InsightClient::new(None, "test-model".to_string(), "http://127.0.0.1:9".to_string());

    let err = client.generate_report(&initial_demands()).await.unwrap_err();
    assert!(matches!(err, InsightError::MissingKey));
}

/// A failed generation surfaces an error and leaves the demand list as it
/// was; the boundary never mutates the store.
#[tokio::test]
async fn test_failed_generation_leaves_store_unchanged() {
    let store = seeded_store();
    let before = store.snapshot().await;

    // Nothing listens on the discard port; the request fails fast.
    let client = InsightClient::new(
        Some("test-key".to_string()),
        "test-model".to_string(),
        "http://127.0.0.1:9".to_string(),
    );
    assert!(client.generate_report(&before).await.is_err());

    let after = store.snapshot().await;
    assert_eq!(before.len(), after.len());
    for (b, a) in before.iter().zip(after.iter()) {
        assert_eq!(b.id, a.id);
        assert_eq!(b.upvotes, a.upvotes);
        assert_eq!(b.downvotes, a.downvotes);
        assert_eq!(b.status, a.status);
        assert_eq!(b.reviews.len(), a.reviews.len());
    }
}
