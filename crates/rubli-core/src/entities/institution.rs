use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Contracting institution with aggregate statistics.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct InstitutionListItem {
    pub id: i64,
    pub name: String,
    pub siglas: Option<String>,
    pub institution_type: Option<String>,
    #[serde(default)]
    pub total_contracts: u64,
    #[serde(default)]
    pub total_amount_mxn: f64,
    pub avg_risk_score: Option<f64>,
    pub sector_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct InstitutionDetail {
    #[serde(flatten)]
    pub summary: InstitutionListItem,
    #[serde(default)]
    pub vendor_count: u64,
    pub direct_award_pct: Option<f64>,
    pub high_risk_pct: Option<f64>,
}

/// A vendor as seen from one institution's procurement history.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct InstitutionVendor {
    pub vendor_id: i64,
    pub vendor_name: String,
    #[serde(default)]
    pub contract_count: u64,
    #[serde(default)]
    pub total_value_mxn: f64,
    pub avg_risk_score: Option<f64>,
}
