use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RiskLevel;

/// One of the fixed procurement sectors.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Sector {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub total_contracts: u64,
    #[serde(default)]
    pub total_value_mxn: f64,
    pub avg_risk_score: Option<f64>,
    #[serde(default)]
    pub high_risk_count: u64,
    pub direct_award_pct: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RiskBucket {
    pub risk_level: RiskLevel,
    pub count: u64,
    #[serde(default)]
    pub value_mxn: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SectorRiskDistribution {
    pub sector_id: i64,
    pub buckets: Vec<RiskBucket>,
}
