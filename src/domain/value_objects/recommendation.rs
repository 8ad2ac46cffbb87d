//! Outfit recommendation value objects
//!
//! `RecommendationResult` is the single structure consumers see: either the
//! validated outfits or a typed failure carrying enough context to display an
//! error (and, for malformed model output, the raw text for debugging).

use serde::{Deserialize, Serialize};

/// A reference to a catalog item inside a recommended outfit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitItemRef {
    pub id: u32,
    pub category: String,
    pub name: String,
}

/// One complete outfit proposed by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitRecommendation {
    pub name: String,
    /// Item references resolved against the catalog that produced the request
    pub items: Vec<OutfitItemRef>,
    /// Dominant colors of the look, hex RGB
    #[serde(default)]
    pub color_palette: Vec<String>,
    /// The model's styling rationale for the pairing
    #[serde(default)]
    pub justification: String,
}

/// Why a recommendation action failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Weather was unavailable, so the model was never called
    MissingInput,
    /// Network or timeout fault on an outbound call
    TransportError,
    /// The provider itself returned an error body
    ProviderError,
    /// Model output was not parseable as the expected JSON shape
    MalformedResponse,
}

/// Outcome of one recommendation action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecommendationResult {
    /// Two outfits are expected, but the sequence is returned as parsed
    Success { outfits: Vec<OutfitRecommendation> },
    Failure {
        kind: FailureKind,
        message: String,
        /// The unparseable payload, preserved for inspection
        #[serde(default, skip_serializing_if = "Option::is_none")]
        raw_text: Option<String>,
    },
}

impl RecommendationResult {
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
            raw_text: None,
        }
    }

    pub fn failure_with_raw(
        kind: FailureKind,
        message: impl Into<String>,
        raw_text: impl Into<String>,
    ) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
            raw_text: Some(raw_text.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
