//! Sankey diagram construction from money-flow edges.

use std::collections::HashMap;

use rubli_core::entities::MoneyFlowEdge;
use rubli_core::enums::EntityType;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyNode {
    pub entity_type: EntityType,
    pub id: i64,
    pub name: String,
}

/// Link between two positions in [`SankeyData::nodes`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyLink {
    pub source: usize,
    pub target: usize,
    pub value: f64,
    pub contract_count: u64,
    pub avg_risk: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SankeyData {
    pub nodes: Vec<SankeyNode>,
    pub links: Vec<SankeyLink>,
}

/// Build a Sankey layout input from edges.
///
/// Nodes are unique by `(type, id)` and appear in first-seen order. Edges
/// whose endpoints resolve to the same node are skipped since a Sankey link
/// cannot loop back to its own source.
#[must_use]
pub fn build_sankey(edges: &[MoneyFlowEdge]) -> SankeyData {
    let mut data = SankeyData::default();
    let mut index: HashMap<(EntityType, i64), usize> = HashMap::new();

    let mut node_for = |data: &mut SankeyData, entity_type, id, name: Option<&str>| -> usize {
        *index.entry((entity_type, id)).or_insert_with(|| {
            data.nodes.push(SankeyNode {
                entity_type,
                id,
                name: name
                    .filter(|n| !n.trim().is_empty())
                    .map_or_else(|| format!("{entity_type} {id}"), str::to_string),
            });
            data.nodes.len() - 1
        })
    };

    for edge in edges {
        let source = node_for(
            &mut data,
            edge.source_type,
            edge.source_id,
            edge.source_name.as_deref(),
        );
        let target = node_for(
            &mut data,
            edge.target_type,
            edge.target_id,
            edge.target_name.as_deref(),
        );
        if source == target {
            continue;
        }
        data.links.push(SankeyLink {
            source,
            target,
            value: edge.value,
            contract_count: edge.contract_count,
            avg_risk: edge.avg_risk,
        });
    }

    data
}
