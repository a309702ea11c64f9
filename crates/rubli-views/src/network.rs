//! Vendor-institution network filtering.

use std::collections::HashSet;

use rubli_core::entities::{NetworkGraph, NetworkNode};
use rubli_core::enums::EntityType;

/// Nodes at or above this risk score survive the high-risk toggle.
pub const HIGH_RISK_NODE_THRESHOLD: f64 = 0.35;

/// Visibility toggles for the network graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkFilter {
    pub show_vendors: bool,
    pub show_institutions: bool,
    pub high_risk_only: bool,
}

impl Default for NetworkFilter {
    fn default() -> Self {
        Self {
            show_vendors: true,
            show_institutions: true,
            high_risk_only: false,
        }
    }
}

impl NetworkFilter {
    /// Whether a node stays visible. A node with no risk score fails the
    /// high-risk toggle.
    #[must_use]
    pub fn keeps(&self, node: &NetworkNode) -> bool {
        let type_visible = match node.node_type {
            EntityType::Vendor => self.show_vendors,
            EntityType::Institution => self.show_institutions,
            _ => true,
        };
        type_visible
            && (!self.high_risk_only
                || node
                    .risk_score
                    .is_some_and(|risk| risk >= HIGH_RISK_NODE_THRESHOLD))
    }
}

/// Apply `filter` to a graph.
///
/// Nodes are filtered first; then every link with an endpoint that is no
/// longer present is dropped, so no link in the result dangles. Totals are
/// recomputed for the filtered graph.
#[must_use]
pub fn filter_network(graph: &NetworkGraph, filter: NetworkFilter) -> NetworkGraph {
    let nodes: Vec<NetworkNode> = graph
        .nodes
        .iter()
        .filter(|node| filter.keeps(node))
        .cloned()
        .collect();
    let kept: HashSet<&str> = nodes.iter().map(|node| node.id.as_str()).collect();

    let links: Vec<_> = graph
        .links
        .iter()
        .filter(|link| kept.contains(link.source.as_str()) && kept.contains(link.target.as_str()))
        .cloned()
        .collect();

    NetworkGraph {
        total_nodes: nodes.len() as u64,
        total_links: links.len() as u64,
        nodes,
        links,
    }
}
