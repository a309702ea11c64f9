use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EntityType;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NetworkNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: EntityType,
    pub name: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub contracts: u64,
    pub risk_score: Option<f64>,
}

/// Link between two node ids.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NetworkLink {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub contracts: u64,
    pub avg_risk: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NetworkGraph {
    pub nodes: Vec<NetworkNode>,
    pub links: Vec<NetworkLink>,
    #[serde(default)]
    pub total_nodes: u64,
    #[serde(default)]
    pub total_links: u64,
}
