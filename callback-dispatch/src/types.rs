//! Core types for the callback dispatcher
//!
//! An outcome is reported to the caller as an error-first pair: the first slot
//! carries the error (or nothing), the second carries the result (or nothing).
//! Exactly one slot is filled, which the `Outcome` enum guarantees by shape.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Selector routed to the error handler
pub const ERROR_SELECTOR: i64 = 1;

/// Selector routed to the success handler
pub const SUCCESS_SELECTOR: i64 = 2;

/// Error slot value reported for the error selector
pub const ERROR_MESSAGE: &str = "This is an error!";

/// Result slot value reported for the success selector
pub const SUCCESS_MESSAGE: &str = "This is a success!";

/// Error slot value reported for any selector without a dedicated handler
pub const UNKNOWN_MESSAGE: &str = "You passed in an unknown value!";

/// Which branch of the dispatch table produced an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    /// Selector 1: the error handler ran
    Error,
    /// Selector 2: the success handler ran
    Success,
    /// Any other selector: reported through the error slot
    Unknown,
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutcomeKind::Error => "error",
            OutcomeKind::Success => "success",
            OutcomeKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Owned outcome of a single dispatch
///
/// Serializes as `{"error": ..., "result": ...}` with `null` in the empty slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "OutcomePair", try_from = "OutcomePair")]
pub enum Outcome {
    /// The error slot is filled
    Error(String),
    /// The result slot is filled
    Success(String),
}

impl Outcome {
    /// Build an outcome from the two slots a continuation receives
    ///
    /// Returns `None` unless exactly one slot is filled.
    pub fn from_pair(error: Option<&str>, result: Option<&str>) -> Option<Self> {
        match (error, result) {
            (Some(err), None) => Some(Outcome::Error(err.to_string())),
            (None, Some(res)) => Some(Outcome::Success(res.to_string())),
            _ => None,
        }
    }

    /// The error slot
    pub fn error(&self) -> Option<&str> {
        match self {
            Outcome::Error(err) => Some(err),
            Outcome::Success(_) => None,
        }
    }

    /// The result slot
    pub fn result(&self) -> Option<&str> {
        match self {
            Outcome::Error(_) => None,
            Outcome::Success(res) => Some(res),
        }
    }

    /// True if the error slot is filled
    pub fn is_error(&self) -> bool {
        matches!(self, Outcome::Error(_))
    }

    /// Split into the error-first pair
    pub fn into_pair(self) -> (Option<String>, Option<String>) {
        match self {
            Outcome::Error(err) => (Some(err), None),
            Outcome::Success(res) => (None, Some(res)),
        }
    }
}

/// Wire shape of an outcome
#[derive(Debug, Clone, Serialize, Deserialize)]
struct OutcomePair {
    error: Option<String>,
    result: Option<String>,
}

impl From<Outcome> for OutcomePair {
    fn from(outcome: Outcome) -> Self {
        let (error, result) = outcome.into_pair();
        Self { error, result }
    }
}

impl TryFrom<OutcomePair> for Outcome {
    type Error = String;

    fn try_from(pair: OutcomePair) -> Result<Self, String> {
        Outcome::from_pair(pair.error.as_deref(), pair.result.as_deref())
            .ok_or_else(|| "exactly one of `error` and `result` must be set".to_string())
    }
}
