//! CampusPulse — a campus demand board connecting students, partners, and
//! the campus authority. Students vote demands up or down, demands move
//! through a fixed fulfillment pipeline, completed services collect reviews,
//! and the authority can request an AI-generated strategic report.

pub mod auth;
pub mod errors;
pub mod handlers;
pub mod insight;
pub mod models;
pub mod templates_structs;

pub const APP_NAME: &str = "CampusPulse";
