use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ConfidenceLevel, ReviewStatus};
use crate::errors::CoreError;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct HypothesisEvidence {
    pub evidence_type: String,
    pub description: String,
    pub value: Option<f64>,
}

/// A flagged statistical price anomaly awaiting analyst judgment.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PriceHypothesis {
    pub hypothesis_id: String,
    pub contract_id: i64,
    pub hypothesis_type: String,
    pub confidence: f64,
    pub confidence_level: ConfidenceLevel,
    pub explanation: String,
    #[serde(default)]
    pub supporting_evidence: Vec<HypothesisEvidence>,
    pub amount_mxn: Option<f64>,
    pub sector_id: Option<i64>,
    #[serde(default)]
    pub is_reviewed: bool,
    pub is_valid: Option<bool>,
    pub review_notes: Option<String>,
}

impl PriceHypothesis {
    /// Position of this hypothesis in the review lifecycle.
    #[must_use]
    pub fn review_status(&self) -> ReviewStatus {
        match (self.is_reviewed, self.is_valid) {
            (true, Some(valid)) => ReviewStatus::from_judgment(valid),
            _ => ReviewStatus::Pending,
        }
    }

    /// Check that a review reaching `next` is allowed from the current
    /// status. Reviewed hypotheses are final.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] otherwise.
    pub fn check_review(&self, next: ReviewStatus) -> Result<(), CoreError> {
        let current = self.review_status();
        if current.can_transition_to(next) {
            return Ok(());
        }
        Err(CoreError::InvalidTransition {
            entity_type: String::from("hypothesis"),
            id: self.hypothesis_id.clone(),
            from: current.to_string(),
            to: next.to_string(),
        })
    }
}

/// Body of a review submission for hypotheses and investigation cases.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReviewRequest {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_notes: Option<String>,
}
