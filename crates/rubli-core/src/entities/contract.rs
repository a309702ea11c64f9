use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RiskLevel;

/// A contract row as returned by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ContractListItem {
    pub id: i64,
    pub contract_number: Option<String>,
    pub title: Option<String>,
    pub amount_mxn: f64,
    pub contract_date: Option<NaiveDate>,
    pub contract_year: Option<i32>,
    pub sector_id: Option<i64>,
    pub sector_name: Option<String>,
    pub risk_score: Option<f64>,
    pub risk_level: Option<RiskLevel>,
    #[serde(default)]
    pub is_direct_award: bool,
    #[serde(default)]
    pub is_single_bid: bool,
    pub vendor_id: Option<i64>,
    pub vendor_name: Option<String>,
    pub institution_id: Option<i64>,
    pub institution_name: Option<String>,
}

/// Full contract record, including procedure metadata and risk factors.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ContractDetail {
    #[serde(flatten)]
    pub summary: ContractListItem,
    pub description: Option<String>,
    pub procedure_type: Option<String>,
    pub procedure_number: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    pub source_url: Option<String>,
}
