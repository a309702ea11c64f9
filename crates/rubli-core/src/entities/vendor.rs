use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Vendor row with aggregate statistics computed server-side.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct VendorListItem {
    pub id: i64,
    pub name: String,
    pub rfc: Option<String>,
    #[serde(default)]
    pub total_contracts: u64,
    #[serde(default)]
    pub total_value_mxn: f64,
    pub avg_risk_score: Option<f64>,
    pub high_risk_pct: Option<f64>,
    pub direct_award_pct: Option<f64>,
    pub primary_sector_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct VendorDetail {
    #[serde(flatten)]
    pub summary: VendorListItem,
    pub first_contract_year: Option<i32>,
    pub last_contract_year: Option<i32>,
    #[serde(default)]
    pub institution_count: u64,
    pub single_bid_pct: Option<f64>,
    #[serde(default)]
    pub sector_ids: Vec<i64>,
}
