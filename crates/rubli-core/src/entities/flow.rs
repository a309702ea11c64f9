use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EntityType;

/// Aggregated money flow between two entities (e.g. institution → vendor).
///
/// `avg_risk` is `None` when the backend had no scored contracts for the pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MoneyFlowEdge {
    pub source_type: EntityType,
    pub source_id: i64,
    pub source_name: Option<String>,
    pub target_type: EntityType,
    pub target_id: i64,
    pub target_name: Option<String>,
    pub value: f64,
    #[serde(default)]
    pub contract_count: u64,
    pub avg_risk: Option<f64>,
}

impl MoneyFlowEdge {
    /// The `(id, name)` of the endpoint with the given type, checking the
    /// source first.
    #[must_use]
    pub fn endpoint(&self, entity_type: EntityType) -> Option<(i64, Option<&str>)> {
        if self.source_type == entity_type {
            Some((self.source_id, self.source_name.as_deref()))
        } else if self.target_type == entity_type {
            Some((self.target_id, self.target_name.as_deref()))
        } else {
            None
        }
    }
}
