//! Response envelopes returned by the analytics API.
//!
//! Endpoints that the dashboards used to read as loose maps get explicit
//! structs here, so a shape change on the backend fails at parse time instead
//! of deep inside a view.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::MoneyFlowEdge;
use crate::enums::RiskLevel;

/// Page metadata attached to every paginated list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PaginationMeta {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
}

/// `{ data, pagination }` envelope used by list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// `{ data, total }` envelope used by unpaginated lists.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

/// Headline numbers for the dashboard landing view.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DashboardStats {
    pub total_contracts: u64,
    pub total_value_mxn: f64,
    #[serde(default)]
    pub total_vendors: u64,
    #[serde(default)]
    pub total_institutions: u64,
    pub avg_risk_score: Option<f64>,
    #[serde(default)]
    pub high_risk_contracts: u64,
    pub high_risk_pct: Option<f64>,
    pub direct_award_pct: Option<f64>,
    pub single_bid_pct: Option<f64>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct YearStat {
    pub year: i32,
    pub contracts: u64,
    pub total_value: f64,
    pub avg_risk: Option<f64>,
    pub direct_award_pct: Option<f64>,
    pub single_bid_pct: Option<f64>,
    pub high_risk_pct: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ContractStatistics {
    pub total_contracts: u64,
    pub total_value_mxn: f64,
    pub avg_contract_value: f64,
    pub median_contract_value: Option<f64>,
    #[serde(default)]
    pub direct_award_count: u64,
    #[serde(default)]
    pub single_bid_count: u64,
    #[serde(default)]
    pub by_year: Vec<YearStat>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RiskDistributionItem {
    pub risk_level: RiskLevel,
    pub count: u64,
    pub percentage: f64,
    #[serde(default)]
    pub total_value_mxn: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MoneyFlowResponse {
    pub flows: Vec<MoneyFlowEdge>,
    #[serde(default)]
    pub total_value: f64,
    #[serde(default)]
    pub total_contracts: u64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WatchlistStats {
    pub total: u64,
    #[serde(default)]
    pub watching: u64,
    #[serde(default)]
    pub investigating: u64,
    #[serde(default)]
    pub resolved: u64,
    #[serde(default)]
    pub high_priority: u64,
}

/// Acknowledgement returned by delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub id: i64,
}
