//! Shared test infrastructure for model layer tests.
//!
//! Builders for demand records plus a store factory, so individual tests
//! only spell out the fields they care about.

#![allow(dead_code)]

use campuspulse::models::demand::{Demand, DemandStatus, DemandStore};

pub const PLACEHOLDER_STUDENT: &str = "Student Representative";

/// Minimal demand with zeroed counters and no reviews.
pub fn demand(id: &str, title: &str, category: &str, status: DemandStatus) -> Demand {
    Demand {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        category: category.to_string(),
        upvotes: 0,
        downvotes: 0,
        status,
        reviews: Vec::new(),
    }
}

/// Pending demand with the given vote counters.
pub fn demand_with_votes(id: &str, upvotes: u32, downvotes: u32) -> Demand {
    Demand {
        upvotes,
        downvotes,
        ..demand(id, &format!("Demand {id}"), "General", DemandStatus::Pending)
    }
}

/// Store preloaded with the given demands.
pub fn store_with(demands: Vec<Demand>) -> DemandStore {
    DemandStore::new(demands)
}

/// Store preloaded with the fixed startup catalogue.
pub fn seeded_store() -> DemandStore {
    DemandStore::with_seed()
}
