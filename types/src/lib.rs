//! Core domain types for Appraise.
//!
//! This crate contains pure domain types with no IO, no async, and minimal
//! dependencies. Everything here can be used from any layer of the service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Substituted for `name` when the payload omits it.
pub const DEFAULT_ITEM_NAME: &str = "Unknown Item";

/// Fixed descriptive string attached to every successful response.
pub const RESPONSE_MESSAGE: &str = "Score estimated by Appraise Authenticity Service";

// ============================================================================
// Request / Response
// ============================================================================

/// Incoming estimate payload.
///
/// Both fields are optional on the wire; defaults are resolved through the
/// accessors rather than at deserialization time, so the struct round-trips
/// what the caller actually sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScoreRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ScoreRequest {
    /// The name to echo back: the supplied one, or [`DEFAULT_ITEM_NAME`].
    #[must_use]
    pub fn item_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_ITEM_NAME)
    }

    /// The description to scan, defaulting to the empty string.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Successful estimate, serialized with the camelCase wire names
/// (`itemName`, `authenticityScore`, `message`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub item_name: String,
    pub authenticity_score: AuthenticityScore,
    pub message: String,
}

impl ScoreResponse {
    #[must_use]
    pub fn new(item_name: impl Into<String>, score: AuthenticityScore) -> Self {
        Self {
            item_name: item_name.into(),
            authenticity_score: score,
            message: RESPONSE_MESSAGE.to_string(),
        }
    }
}

// ============================================================================
// Authenticity Score
// ============================================================================

/// An authenticity score guaranteed to lie in `[10, 99]`.
///
/// Serializes as a bare integer. The two bands the estimator draws from
/// (`[10, 40]` for suspect descriptions, `[50, 99]` otherwise) are both
/// inside this range by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AuthenticityScore(u8);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("authenticity score {0} outside [{min}, {max}]", min = AuthenticityScore::MIN, max = AuthenticityScore::MAX)]
pub struct ScoreOutOfRange(pub u8);

impl AuthenticityScore {
    pub const MIN: u8 = 10;
    pub const MAX: u8 = 99;

    /// The floor of the valid range, as a score.
    pub const LOWEST: Self = Self(Self::MIN);

    pub fn new(value: u8) -> Result<Self, ScoreOutOfRange> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ScoreOutOfRange(value))
        }
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

// ============================================================================
// Errors
// ============================================================================

/// The sole request-level failure: the body was absent or not parseable
/// as a JSON object. Everything else is tolerated via defaults.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimateError {
    #[error("No data provided")]
    MissingPayload,
}

#[cfg(test)]
mod tests {
    use super::{
        AuthenticityScore, DEFAULT_ITEM_NAME, EstimateError, ScoreRequest, ScoreResponse,
    };

    #[test]
    fn request_defaults_applied_through_accessors() {
        let request: ScoreRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.item_name(), DEFAULT_ITEM_NAME);
        assert_eq!(request.description(), "");
    }

    #[test]
    fn request_keeps_supplied_fields() {
        let request: ScoreRequest =
            serde_json::from_str(r#"{"name":"Vintage Watch","description":"Genuine leather"}"#)
                .unwrap();
        assert_eq!(request.item_name(), "Vintage Watch");
        assert_eq!(request.description(), "Genuine leather");
    }

    #[test]
    fn request_tolerates_partial_payload() {
        let request: ScoreRequest = serde_json::from_str(r#"{"description":"COPY item"}"#).unwrap();
        assert_eq!(request.item_name(), DEFAULT_ITEM_NAME);
        assert_eq!(request.description(), "COPY item");
    }

    #[test]
    fn response_serializes_with_wire_names() {
        let score = AuthenticityScore::new(73).unwrap();
        let response = ScoreResponse::new("Handbag", score);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["itemName"], "Handbag");
        assert_eq!(json["authenticityScore"], 73);
        assert!(json["message"].as_str().unwrap().contains("Appraise"));
    }

    #[test]
    fn score_rejects_out_of_range_values() {
        assert!(AuthenticityScore::new(9).is_err());
        assert!(AuthenticityScore::new(100).is_err());
        assert_eq!(AuthenticityScore::new(10).unwrap().get(), 10);
        assert_eq!(AuthenticityScore::new(99).unwrap().get(), 99);
    }

    #[test]
    fn missing_payload_message_is_the_wire_message() {
        assert_eq!(EstimateError::MissingPayload.to_string(), "No data provided");
    }
}
