//! Item shapes: turning response bodies into typed values.
//!
//! The shape of an item is its Rust type. Any `T: DeserializeOwned` works,
//! including the structs in [`models`](crate::models) and plain
//! `serde_json::Value` for resources without a dedicated model.

use serde::de::DeserializeOwned;

use crate::error::TetherError;

/// What a verb declares it returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Returns {
    /// A single object.
    One,
    /// A JSON array of objects.
    Many,
    /// Nothing worth parsing (e.g. `204 No Content` on delete).
    Empty,
}

impl Returns {
    /// Human-readable name used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Returns::One => "a single item",
            Returns::Many => "a list",
            Returns::Empty => "no",
        }
    }
}

/// The parsed result of a verb call, shaped by what the route declares.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    /// A single parsed item.
    One(T),
    /// Parsed items in server order.
    Many(Vec<T>),
    /// The endpoint returns no body.
    Empty,
}

impl<T> Payload<T> {
    /// Returns which shape this payload has.
    pub fn returns(&self) -> Returns {
        match self {
            Payload::One(_) => Returns::One,
            Payload::Many(_) => Returns::Many,
            Payload::Empty => Returns::Empty,
        }
    }

    /// Unwraps a single item.
    ///
    /// # Errors
    ///
    /// Returns `TetherError::UnexpectedPayload` for lists and empty payloads.
    pub fn into_one(self) -> Result<T, TetherError> {
        match self {
            Payload::One(item) => Ok(item),
            other => Err(TetherError::UnexpectedPayload {
                expected: Returns::One.as_str(),
                found: other.returns().as_str(),
            }),
        }
    }

    /// Unwraps a list of items.
    ///
    /// # Errors
    ///
    /// Returns `TetherError::UnexpectedPayload` for single items and empty payloads.
    pub fn into_many(self) -> Result<Vec<T>, TetherError> {
        match self {
            Payload::Many(items) => Ok(items),
            other => Err(TetherError::UnexpectedPayload {
                expected: Returns::Many.as_str(),
                found: other.returns().as_str(),
            }),
        }
    }
}

/// Parses a body holding one item.
pub fn parse_one<T: DeserializeOwned>(body: &str) -> Result<T, TetherError> {
    Ok(serde_json::from_str(body)?)
}

/// Parses a body holding a JSON array. A blank body is an empty list.
pub fn parse_many<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, TetherError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(body)?)
}

/// Parses a body according to a route's declared return shape.
pub(crate) fn parse_payload<T: DeserializeOwned>(
    returns: Returns,
    body: &str,
) -> Result<Payload<T>, TetherError> {
    match returns {
        Returns::One => parse_one(body).map(Payload::One),
        Returns::Many => parse_many(body).map(Payload::Many),
        Returns::Empty => Ok(Payload::Empty),
    }
}
