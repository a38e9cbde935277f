//! Utility functions

pub mod body;
pub mod links;
pub mod validation;

pub use body::{BodyFields, JsonBody};
pub use links::{LinkBuilder, Route};
pub use validation::{validate_replacement, FieldErrors};
