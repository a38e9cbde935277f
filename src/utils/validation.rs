//! Input validation utilities
//!
//! Field-level rules for the user representations. Errors are collected into
//! [`FieldErrors`], keyed by wire field name, so the same map feeds both the
//! 422 response body and the create-path decision between 400 and 422.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use validator::{Validate, ValidationErrors};

use crate::constants::fields;
use crate::handlers::users::request::{CreateUserRequest, ReplaceUserRequest};

/// Letters (any script) or ASCII digits, possibly empty
pub static LOGIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\p{L}]*$").expect("login pattern is a valid regex"));

/// A single character that is neither a letter nor a decimal digit
static NON_LOGIN_CHAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{Nd}]").expect("login character class is a valid regex"));

/// Message attached to a login that fails [`LOGIN_PATTERN`]
pub const LOGIN_PATTERN_MESSAGE: &str = "Login should contain only letters or digits";

/// Validation failures grouped by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one failure against `field`
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Fold every entry of `other` into `self`
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(())` when nothing was recorded, the map itself otherwise
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            let name = wire_name(&field.to_string());
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("The {} field is invalid ({})", name, error.code));
                out.add(name.clone(), message);
            }
        }
        out
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

/// Convert a Rust field identifier (`first_name`) into its wire name (`firstName`)
fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Structural rules for a create body (login present and non-empty)
pub fn validate_creation(input: &CreateUserRequest) -> FieldErrors {
    input.validate().err().map(FieldErrors::from).unwrap_or_default()
}

/// Character rule for a create body: one error per character that is not a
/// letter or digit
pub fn validate_login_characters(login: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for found in NON_LOGIN_CHAR.find_iter(login) {
        errors.add(
            fields::LOGIN,
            format!("Login contains '{}', which is not a letter or digit", found.as_str()),
        );
    }
    errors
}

/// Full rules for a replacement representation.
///
/// Used for PUT bodies and for the value produced by applying a patch
/// document, so both paths reject exactly the same states.
pub fn validate_replacement(input: &ReplaceUserRequest) -> FieldErrors {
    input.validate().err().map(FieldErrors::from).unwrap_or_default()
}
