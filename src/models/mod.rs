//! Domain models
//!
//! This module contains the domain models used throughout the application.

pub mod pagination;
pub mod user;

pub use pagination::*;
pub use user::*;
