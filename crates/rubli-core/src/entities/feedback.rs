use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{EntityType, FeedbackType};

/// Analyst feedback on an entity's risk score. Posting twice for the same
/// entity replaces the earlier feedback.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RiskFeedback {
    pub entity_type: EntityType,
    pub entity_id: i64,
    pub feedback_type: FeedbackType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FeedbackReceipt {
    pub id: i64,
    pub entity_type: EntityType,
    pub entity_id: i64,
    pub feedback_type: FeedbackType,
    #[serde(default)]
    pub updated: bool,
}
