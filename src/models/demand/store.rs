use rand::Rng;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::role::UserRole;

use super::seed;
use super::types::{Demand, DemandStatus, Review};

/// The authoritative in-memory demand list. Mutations happen in response to
/// user-initiated requests only; critical sections are short and never await.
pub struct DemandStore {
    demands: RwLock<Vec<Demand>>,
}

impl DemandStore {
    pub fn new(demands: Vec<Demand>) -> Self {
        Self {
            demands: RwLock::new(demands),
        }
    }

    pub fn with_seed() -> Self {
        Self::new(seed::initial_demands())
    }

    /// A full copy of the current list, in insertion order.
    pub async fn snapshot(&self) -> Vec<Demand> {
        self.demands.read().await.clone()
    }

    pub async fn find(&self, id: &str) -> Option<Demand> {
        self.demands.read().await.iter().find(|d| d.id == id).cloned()
    }

    /// Increment the upvote counter. Unmatched ids are a harmless no-op.
    /// Role and completion gating is the caller's responsibility.
    pub async fn upvote(&self, id: &str) -> bool {
        let mut demands = self.demands.write().await;
        match demands.iter_mut().find(|d| d.id == id) {
            Some(d) => {
                d.upvotes += 1;
                true
            }
            None => {
                log::debug!("upvote for unknown demand {id}");
                false
            }
        }
    }

    /// Increment the downvote counter. Same contract as [`upvote`](Self::upvote).
    pub async fn downvote(&self, id: &str) -> bool {
        let mut demands = self.demands.write().await;
        match demands.iter_mut().find(|d| d.id == id) {
            Some(d) => {
                d.downvotes += 1;
                true
            }
            None => {
                log::debug!("downvote for unknown demand {id}");
                false
            }
        }
    }

    /// Apply the single transition `role` may perform on the demand, if any.
    /// Returns the new status when a transition happened, `None` when the
    /// demand is unknown or the (role, status) pair has no modeled move.
    pub async fn advance(&self, id: &str, role: UserRole) -> Option<DemandStatus> {
        let mut demands = self.demands.write().await;
        let demand = demands.iter_mut().find(|d| d.id == id)?;
        let next = demand.status.advanced_by(role)?;
        demand.status = next;
        Some(next)
    }

    /// Append a review to the matching demand, preserving prior entries.
    ///
    /// Ratings outside 1..=5 and empty comments are rejected before any
    /// mutation. An unmatched `demand_id` returns `Ok(None)`.
    pub async fn add_review(
        &self,
        demand_id: &str,
        student_name: &str,
        rating: u8,
        comment: &str,
    ) -> Result<Option<Review>, AppError> {
        if !(1..=5).contains(&rating) {
            return Err(AppError::Validation(format!(
                "Rating must be between 1 and 5, got {rating}"
            )));
        }
        let comment = comment.trim();
        if comment.is_empty() {
            return Err(AppError::Validation("Review comment must not be empty".to_string()));
        }

        let mut demands = self.demands.write().await;
        let Some(demand) = demands.iter_mut().find(|d| d.id == demand_id) else {
            log::debug!("review for unknown demand {demand_id}");
            return Ok(None);
        };

        let review = Review {
            id: new_review_id(),
            student_name: student_name.to_string(),
            rating,
            comment: comment.to_string(),
            date: chrono::Utc::now().to_rfc3339(),
        };
        demand.reviews.push(review.clone());
        Ok(Some(review))
    }
}

/// Random 8-byte hex identifier for a review.
fn new_review_id() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 8] = rng.random();
    hex::encode(bytes)
}
