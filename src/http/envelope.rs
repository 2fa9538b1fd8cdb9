//! The list envelope every CLIP v2 read returns.

use serde::{Deserialize, Serialize};

/// Description used for every terminal failure reported through an envelope.
pub const GENERIC_FAILURE_DESCRIPTION: &str = "An error occurred while fetching the resource";

/// A single error entry as reported by the bridge (or synthesized on failure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseError {
    pub description: String,
}

impl ResponseError {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// `{ errors, data }` container.
///
/// Missing fields decode as empty lists; nothing else about the body is
/// checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    #[serde(default)]
    pub errors: Vec<ResponseError>,
    #[serde(default)]
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn success(data: Vec<T>) -> Self {
        Self {
            errors: Vec::new(),
            data,
        }
    }

    /// Terminal-failure envelope: one descriptor, no data.
    pub fn failure(description: impl Into<String>) -> Self {
        Self {
            errors: vec![ResponseError::new(description)],
            data: Vec::new(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Split into data or errors, the way callers branch on the envelope.
    pub fn into_result(self) -> Result<Vec<T>, Vec<ResponseError>> {
        if self.errors.is_empty() {
            Ok(self.data)
        } else {
            Err(self.errors)
        }
    }
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self::success(Vec::new())
    }
}
