//! Optional JSON body extractor
//!
//! Unlike `axum::Json`, an empty body (or a literal `null`) is not an error
//! here: handlers receive `None` and decide themselves. A body that is not
//! JSON, or whose shape is wrong as a whole, is an [`AppError::BadRequest`].
//! A malformed value under one of the type's [`BodyFields`] is reported as an
//! [`AppError::UnprocessableEntity`] keyed by that member's wire name.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use serde_path_to_error::Segment;

use crate::{error::AppError, utils::validation::FieldErrors};

/// Request bodies with members whose decode failures are field errors
pub trait BodyFields {
    /// Wire names of the members reported per field
    const FIELDS: &'static [&'static str];
}

/// JSON request body that may be absent
#[derive(Debug)]
pub struct JsonBody<T>(pub Option<T>);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + BodyFields,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody(None));
        }

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))?;

        if value.is_null() {
            return Ok(JsonBody(None));
        }

        decode(value).map(|body| JsonBody(Some(body)))
    }
}

/// Decode `value` into `T`, collecting every malformed field member.
///
/// Each failing field member is dropped from the object and decoding is
/// retried, so the loop runs at most once per member.
fn decode<T>(mut value: Value) -> Result<T, AppError>
where
    T: DeserializeOwned + BodyFields,
{
    let mut errors = FieldErrors::new();

    loop {
        let result = serde_path_to_error::deserialize::<_, T>(&value);
        let err = match result {
            Ok(body) => return errors.into_result().map(|()| body).map_err(AppError::from),
            Err(err) => err,
        };

        let field = match err.path().iter().next() {
            Some(Segment::Map { key }) => T::FIELDS.iter().copied().find(|f| *f == key.as_str()),
            _ => None,
        };
        let removed = field.and_then(|f| value.as_object_mut().and_then(|object| object.remove(f)));

        match (field, removed) {
            (Some(field), Some(_)) => {
                errors.add(field, format!("The value for {} is not valid: {}", field, err.inner()))
            }
            _ => return Err(AppError::BadRequest(format!("Invalid JSON body: {}", err))),
        }
    }
}
