//! Business logic services

pub mod patch;
pub mod user_service;

pub use patch::apply_patch;
pub use user_service::{UpsertOutcome, UserService};
