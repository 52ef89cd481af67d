pub mod assessment;
pub mod config;
pub mod patient;
