use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Spending category row. `sector_code` is absent for unmapped categories.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CategoryStat {
    pub category_id: i64,
    pub name: String,
    pub sector_code: Option<String>,
    #[serde(default)]
    pub total_contracts: u64,
    #[serde(default)]
    pub total_value: f64,
    #[serde(default)]
    pub avg_risk: f64,
}
