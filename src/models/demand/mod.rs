mod ranking;
mod seed;
mod store;
mod types;

pub use ranking::{active_pipeline, completed_shops, matches_query};
pub use seed::initial_demands;
pub use store::DemandStore;
pub use types::{Demand, DemandStatus, Review};
