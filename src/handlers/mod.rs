pub mod auth_handlers;
pub mod dashboard;
pub mod demand_handlers;
pub mod insight_handlers;
pub mod review_handlers;
