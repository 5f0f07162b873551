pub mod demand;
pub mod role;
