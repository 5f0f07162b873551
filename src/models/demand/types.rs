use serde::{Deserialize, Serialize};

use crate::models::role::UserRole;

/// Fulfillment pipeline stage of a demand. Strictly forward-only:
/// PENDING -> IN_REVIEW -> PARTNER_ASSIGNED -> COMPLETED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DemandStatus {
    Pending,
    InReview,
    PartnerAssigned,
    Completed,
}

impl DemandStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DemandStatus::Pending => "Pending",
            DemandStatus::InReview => "In Review",
            DemandStatus::PartnerAssigned => "Partner Assigned",
            DemandStatus::Completed => "Completed",
        }
    }

    /// The single transition the given role may apply at this stage, or
    /// `None` when that (role, status) pair has no modeled transition.
    ///
    /// Completed services only enter the catalogue through the startup seed;
    /// no role moves a demand into `Completed` from here.
    pub fn advanced_by(self, role: UserRole) -> Option<DemandStatus> {
        match (role, self) {
            (UserRole::Student, DemandStatus::Pending) => Some(DemandStatus::InReview),
            (UserRole::Partner, DemandStatus::InReview) => Some(DemandStatus::PartnerAssigned),
            _ => None,
        }
    }
}

/// Post-completion feedback left by a student. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub student_name: String,
    pub rating: u8,
    pub comment: String,
    pub date: String,
}

/// A campus service demand: either still moving through the pipeline or an
/// operational (completed) shop collecting reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Demand {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub upvotes: u32,
    pub downvotes: u32,
    pub status: DemandStatus,
    pub reviews: Vec<Review>,
}

impl Demand {
    /// Community support minus opposition; may be negative.
    pub fn net_score(&self) -> i64 {
        i64::from(self.upvotes) - i64::from(self.downvotes)
    }

    /// Mean review rating rounded to one decimal, or `None` without reviews.
    pub fn average_rating(&self) -> Option<f64> {
        if self.reviews.is_empty() {
            return None;
        }
        let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        let mean = f64::from(sum) / self.reviews.len() as f64;
        Some((mean * 10.0).round() / 10.0)
    }
}
