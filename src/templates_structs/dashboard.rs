use askama::Template;

use crate::insight::AiInsight;
use crate::models::demand::{Demand, DemandStatus};
use crate::models::role::UserRole;

/// A demand flattened into display fields, with the role-dependent
/// affordances already decided so the template stays declarative.
pub struct DemandCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status_label: &'static str,
    pub status_class: &'static str,
    pub net_score: i64,
    pub review_note: String,
    pub support_note: String,
    pub average_rating: Option<String>,
    pub can_vote: bool,
    pub action_label: Option<&'static str>,
    pub can_review: bool,
}

impl DemandCard {
    pub fn build(demand: &Demand, role: UserRole) -> Self {
        let completed = demand.status == DemandStatus::Completed;

        let average_rating = demand.average_rating().map(|avg| format!("{avg:.1}"));
        let review_note = if demand.reviews.is_empty() {
            "No reviews yet".to_string()
        } else {
            format!("{} Reviews", demand.reviews.len())
        };
        let support_note = if completed {
            "Fulfillment Verified".to_string()
        } else {
            format!("{} Supporters", demand.upvotes)
        };

        let action_label = match (role, demand.status) {
            (UserRole::Student, DemandStatus::Pending) => Some("Verify Interest"),
            (UserRole::Partner, DemandStatus::InReview) => Some("Propose Partnership"),
            _ => None,
        };

        Self {
            id: demand.id.clone(),
            title: demand.title.clone(),
            description: demand.description.clone(),
            category: demand.category.clone(),
            status_label: demand.status.label(),
            status_class: status_class(demand.status),
            net_score: demand.net_score(),
            review_note,
            support_note,
            average_rating,
            can_vote: role == UserRole::Student && !completed,
            action_label,
            can_review: role == UserRole::Student && completed,
        }
    }
}

fn status_class(status: DemandStatus) -> &'static str {
    match status {
        DemandStatus::Pending => "status-pending",
        DemandStatus::InReview => "status-in-review",
        DemandStatus::PartnerAssigned => "status-partner-assigned",
        DemandStatus::Completed => "status-completed",
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: super::PageContext,
    pub greeting: String,
    pub query: String,
    pub pipeline: Vec<DemandCard>,
    pub completed: Vec<DemandCard>,
    pub insight: Option<AiInsight>,
}
