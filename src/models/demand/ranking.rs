use std::cmp::Reverse;

use super::types::{Demand, DemandStatus};

/// Case-insensitive substring match against title or category.
/// An empty (or whitespace) query matches everything.
pub fn matches_query(demand: &Demand, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    demand.title.to_lowercase().contains(&q) || demand.category.to_lowercase().contains(&q)
}

fn ranked(demands: &[Demand], query: &str, completed: bool) -> Vec<Demand> {
    let mut selected: Vec<Demand> = demands
        .iter()
        .filter(|d| (d.status == DemandStatus::Completed) == completed)
        .filter(|d| matches_query(d, query))
        .cloned()
        .collect();
    // Stable sort: ties keep the store's insertion order.
    selected.sort_by_key(|d| Reverse(d.net_score()));
    selected
}

/// Demands still moving through the pipeline, filtered by `query` and
/// ordered by descending net score.
pub fn active_pipeline(demands: &[Demand], query: &str) -> Vec<Demand> {
    ranked(demands, query, false)
}

/// Operational shops (completed demands), same filter and order.
pub fn completed_shops(demands: &[Demand], query: &str) -> Vec<Demand> {
    ranked(demands, query, true)
}
