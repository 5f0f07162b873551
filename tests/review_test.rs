//! Integration tests for the review ledger: append-only semantics,
//! validation of rating and comment, and the average-rating display rule.

mod common;

use campuspulse::errors::AppError;
use campuspulse::models::demand::DemandStatus;
use common::{PLACEHOLDER_STUDENT, demand, store_with};
use regex::Regex;

fn completed_shop() -> campuspulse::models::demand::Demand {
    demand("shop", "Brew & Bean Cafe", "Food", DemandStatus::Completed)
}

#[tokio::test]
async fn test_add_review_is_append_only() {
    let store = store_with(vec![completed_shop()]);

    let first = store
        .add_review("shop", PLACEHOLDER_STUDENT, 4, "Great coffee")
        .await
        .unwrap()
        .unwrap();

    store
        .add_review("shop", "Alex", 5, "Best pastries on campus")
        .await
        .unwrap()
        .unwrap();

    let reviews = store.find("shop").await.unwrap().reviews;
    assert_eq!(reviews.len(), 2);

    // The first entry is preserved unchanged.
    assert_eq!(reviews[0].id, first.id);
    assert_eq!(reviews[0].rating, 4);
    assert_eq!(reviews[0].comment, "Great coffee");
    assert_eq!(reviews[0].student_name, PLACEHOLDER_STUDENT);

    assert_eq!(reviews[1].rating, 5);
    assert_eq!(reviews[1].student_name, "Alex");
}

#[tokio::test]
async fn test_review_fields_are_populated() {
    let store = store_with(vec![completed_shop()]);

    let review = store
        .add_review("shop", PLACEHOLDER_STUDENT, 3, "  Decent, queues are long  ")
        .await
        .unwrap()
        .unwrap();

    let id_format = Regex::new("^[0-9a-f]{16}$").unwrap();
    assert!(id_format.is_match(&review.id), "unexpected id {}", review.id);

    // Comment is stored trimmed, date as RFC 3339.
    assert_eq!(review.comment, "Decent, queues are long");
    assert!(chrono::DateTime::parse_from_rfc3339(&review.date).is_ok());
}

#[tokio::test]
async fn test_average_rating_one_decimal() {
    let store = store_with(vec![completed_shop()]);

    store.add_review("shop", "A", 4, "Good").await.unwrap();
    store.add_review("shop", "B", 5, "Very good").await.unwrap();

    let d = store.find("shop").await.unwrap();
    assert_eq!(d.average_rating(), Some(4.5));

    // [4, 4, 5] rounds to 4.3.
    store.add_review("shop", "C", 4, "Solid").await.unwrap();
    let d = store.find("shop").await.unwrap();
    assert_eq!(d.average_rating(), Some(4.3));
}

#[tokio::test]
async fn test_no_reviews_means_no_average() {
    let store = store_with(vec![completed_shop()]);

    assert_eq!(store.find("shop").await.unwrap().average_rating(), None);
}

#[tokio::test]
async fn test_out_of_range_rating_is_rejected() {
    let store = store_with(vec![completed_shop()]);

    for bad in [0u8, 6, 200] {
        let err = store
            .add_review("shop", PLACEHOLDER_STUDENT, bad, "Anything")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "rating {bad} accepted");
    }

    // Nothing was appended.
    assert!(store.find("shop").await.unwrap().reviews.is_empty());
}

#[tokio::test]
async fn test_empty_comment_is_rejected() {
    let store = store_with(vec![completed_shop()]);

    let err = store
        .add_review("shop", PLACEHOLDER_STUDENT, 5, "   ")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert!(store.find("shop").await.unwrap().reviews.is_empty());
}

#[tokio::test]
async fn test_unknown_demand_is_silent_noop() {
    let store = store_with(vec![completed_shop()]);

    let outcome = store
        .add_review("missing", PLACEHOLDER_STUDENT, 5, "Lost feedback")
        .await
        .unwrap();
    assert!(outcome.is_none());
    assert!(store.find("shop").await.unwrap().reviews.is_empty());
}
