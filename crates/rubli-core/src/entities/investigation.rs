use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::CaseValidationStatus;

/// Investigation case assembled by the backend's case generator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct InvestigationCase {
    pub id: i64,
    pub case_id: String,
    pub title: String,
    pub case_type: String,
    pub sector_id: Option<i64>,
    pub sector_name: Option<String>,
    pub suspicion_score: f64,
    pub estimated_loss_mxn: Option<f64>,
    #[serde(default)]
    pub total_value_mxn: f64,
    #[serde(default)]
    pub vendor_count: u64,
    pub summary: Option<String>,
    pub validation_status: CaseValidationStatus,
    pub review_notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
