//! Patch document interpreter for user representations
//!
//! Applies `add`/`remove`/`replace`/`move`/`copy`/`test` operations to the
//! fields of a [`ReplaceUserRequest`]. Only the known top-level fields are
//! addressable. A failing operation leaves the value untouched, records its
//! error and processing carries on with the next operation.

use serde_json::Value;

use crate::{
    constants::fields,
    handlers::users::request::{PatchOp, PatchOperation, ReplaceUserRequest},
    utils::validation::FieldErrors,
};

/// Error key used when an operation names no usable path
const DOCUMENT_KEY: &str = "patch";

/// Addressable fields of the user representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UserField {
    Id,
    FirstName,
    LastName,
    Login,
}

impl UserField {
    fn parse(path: &str) -> Option<Self> {
        let segment = path.strip_prefix('/').unwrap_or(path);
        [Self::Id, Self::FirstName, Self::LastName, Self::Login]
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(segment))
    }

    fn name(self) -> &'static str {
        match self {
            Self::Id => fields::ID,
            Self::FirstName => fields::FIRST_NAME,
            Self::LastName => fields::LAST_NAME,
            Self::Login => fields::LOGIN,
        }
    }

    fn get(self, target: &ReplaceUserRequest) -> Value {
        let text = match self {
            Self::Id => return Value::String(target.id.to_string()),
            Self::FirstName => &target.first_name,
            Self::LastName => &target.last_name,
            Self::Login => &target.login,
        };
        text.clone().map(Value::String).unwrap_or(Value::Null)
    }

    fn slot(self, target: &mut ReplaceUserRequest) -> Option<&mut Option<String>> {
        match self {
            Self::Id => None,
            Self::FirstName => Some(&mut target.first_name),
            Self::LastName => Some(&mut target.last_name),
            Self::Login => Some(&mut target.login),
        }
    }

    /// Check that `value` may be written here without writing it
    fn check(self, value: &Value) -> Result<Option<String>, String> {
        if self == Self::Id {
            return Err(format!("The target location '{}' is read-only", self.name()));
        }
        match value {
            Value::String(s) => Ok(Some(s.clone())),
            Value::Null => Ok(None),
            other => Err(format!(
                "The value '{}' is invalid for target location '{}'",
                other,
                self.name()
            )),
        }
    }

    fn set(self, target: &mut ReplaceUserRequest, value: Option<String>) {
        if let Some(slot) = self.slot(target) {
            *slot = value;
        }
    }
}

/// Resolve `path`, recording an error keyed by the raw path when unknown
fn resolve(path: &str, errors: &mut FieldErrors) -> Option<UserField> {
    let field = UserField::parse(path);
    if field.is_none() {
        let key = path.trim_start_matches('/');
        errors.add(
            if key.is_empty() { DOCUMENT_KEY } else { key },
            format!("The target location specified by path '{}' was not found", path),
        );
    }
    field
}

fn apply_operation(
    target: &mut ReplaceUserRequest,
    operation: &PatchOperation,
    errors: &mut FieldErrors,
) {
    let Some(field) = resolve(&operation.path, errors) else {
        return;
    };

    let source = match operation.op {
        PatchOp::Move | PatchOp::Copy => match operation.from.as_deref() {
            Some(from) => match resolve(from, errors) {
                Some(source) => Some(source),
                None => return,
            },
            None => {
                errors.add(DOCUMENT_KEY, "The 'from' member is required for move and copy");
                return;
            }
        },
        _ => None,
    };

    let outcome = match (operation.op, source) {
        (PatchOp::Add | PatchOp::Replace, _) => {
            field.check(&operation.value).map(|value| field.set(target, value))
        }
        (PatchOp::Remove, _) => field.check(&Value::Null).map(|value| field.set(target, value)),
        (PatchOp::Copy, Some(source)) => {
            field.check(&source.get(target)).map(|value| field.set(target, value))
        }
        (PatchOp::Move, Some(source)) => source
            .check(&Value::Null)
            .and_then(|_| field.check(&source.get(target)))
            .map(|value| {
                source.set(target, None);
                field.set(target, value);
            }),
        (PatchOp::Test, _) => {
            let current = field.get(target);
            if current == operation.value {
                Ok(())
            } else {
                Err(format!(
                    "The current value '{}' at path '{}' is not equal to the test value '{}'",
                    current,
                    field.name(),
                    operation.value
                ))
            }
        }
        (PatchOp::Move | PatchOp::Copy, None) => Ok(()),
    };

    if let Err(message) = outcome {
        errors.add(field.name(), message);
    }
}

/// Apply every operation in order, returning the errors they raised
pub fn apply_patch(target: &mut ReplaceUserRequest, operations: &[PatchOperation]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for operation in operations {
        apply_operation(target, operation, &mut errors);
    }
    errors
}
