//! Money-flow aggregations: top-N bars, sector rollups, and headline KPIs.

use std::collections::BTreeMap;

use rubli_core::entities::MoneyFlowEdge;
use rubli_core::enums::EntityType;
use rubli_core::format::truncate_label;
use serde::Serialize;

/// Bars kept by the top-N flow charts.
pub const DEFAULT_TOP_N: usize = 15;

/// Edges at or above this average risk count toward the risk-weighted value.
pub const HIGH_RISK_FLOW_THRESHOLD: f64 = 0.3;

/// Which end of an edge a top-N extraction looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowSide {
    Source,
    Target,
}

/// One bar in a horizontal flow chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowBar {
    pub id: i64,
    /// Axis label, truncated for display.
    pub label: String,
    pub name: String,
    pub value: f64,
    pub contract_count: u64,
    pub avg_risk: Option<f64>,
}

/// Edges whose `side` endpoint has type `entity_type`, largest `value` first,
/// cut to `n`.
///
/// The sort is stable, so edges with equal values keep their input order.
#[must_use]
pub fn top_flows(
    edges: &[MoneyFlowEdge],
    side: FlowSide,
    entity_type: EntityType,
    n: usize,
    label_width: usize,
) -> Vec<FlowBar> {
    let mut matching: Vec<&MoneyFlowEdge> = edges
        .iter()
        .filter(|edge| match side {
            FlowSide::Source => edge.source_type == entity_type,
            FlowSide::Target => edge.target_type == entity_type,
        })
        .collect();
    matching.sort_by(|a, b| b.value.total_cmp(&a.value));
    matching.truncate(n);

    matching
        .into_iter()
        .map(|edge| {
            let (id, name) = match side {
                FlowSide::Source => (edge.source_id, edge.source_name.as_deref()),
                FlowSide::Target => (edge.target_id, edge.target_name.as_deref()),
            };
            let name = display_name(entity_type, id, name);
            FlowBar {
                id,
                label: truncate_label(&name, label_width),
                name,
                value: edge.value,
                contract_count: edge.contract_count,
                avg_risk: edge.avg_risk,
            }
        })
        .collect()
}

/// Accumulated flow through one sector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorFlowTotal {
    pub sector_id: i64,
    pub name: String,
    pub value: f64,
    pub contract_count: u64,
}

/// Group edges by sector, whether the sector is the source or the target.
///
/// An edge between two different sectors credits both; an edge from a sector
/// to itself credits it once. Output is sorted by accumulated value
/// (descending), then sector id, so any permutation of the same edges gives
/// the same result.
#[must_use]
pub fn sector_rollup(edges: &[MoneyFlowEdge]) -> Vec<SectorFlowTotal> {
    let mut totals: BTreeMap<i64, (SectorFlowTotal, Vec<f64>)> = BTreeMap::new();

    for edge in edges {
        let mut credit = |id: i64, name: Option<&str>| {
            let (entry, values) = totals.entry(id).or_insert_with(|| {
                let total = SectorFlowTotal {
                    sector_id: id,
                    name: String::new(),
                    value: 0.0,
                    contract_count: 0,
                };
                (total, Vec::new())
            });
            values.push(edge.value);
            entry.contract_count += edge.contract_count;
            if let Some(name) = name.filter(|n| !n.is_empty()) {
                if entry.name.is_empty() || name < entry.name.as_str() {
                    entry.name = name.to_string();
                }
            }
        };

        let source_is_sector = edge.source_type == EntityType::Sector;
        let target_is_sector = edge.target_type == EntityType::Sector;
        if source_is_sector {
            credit(edge.source_id, edge.source_name.as_deref());
        }
        if target_is_sector && !(source_is_sector && edge.target_id == edge.source_id) {
            credit(edge.target_id, edge.target_name.as_deref());
        }
    }

    let mut out: Vec<SectorFlowTotal> = totals
        .into_values()
        .map(|(mut total, mut values)| {
            // Sorted first so the float sum does not depend on edge order.
            values.sort_by(f64::total_cmp);
            total.value = values.into_iter().sum();
            if total.name.is_empty() {
                total.name = display_name(EntityType::Sector, total.sector_id, None);
            }
            total
        })
        .collect();
    out.sort_by(|a, b| {
        b.value
            .total_cmp(&a.value)
            .then_with(|| a.sector_id.cmp(&b.sector_id))
    });
    out
}

/// Sum of `value` over edges with `avg_risk >= 0.3`.
///
/// Edges without a risk score contribute nothing.
#[must_use]
pub fn risk_weighted_value(edges: &[MoneyFlowEdge]) -> f64 {
    edges
        .iter()
        .filter(|edge| {
            edge.avg_risk
                .is_some_and(|risk| risk >= HIGH_RISK_FLOW_THRESHOLD)
        })
        .map(|edge| edge.value)
        .sum()
}

/// Headline numbers shown above the flow charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlowKpis {
    pub edge_count: usize,
    pub total_value: f64,
    pub total_contracts: u64,
    pub risk_weighted_value: f64,
    /// `risk_weighted_value / total_value`, or 0 when there is no value.
    pub high_risk_share: f64,
}

#[must_use]
pub fn flow_kpis(edges: &[MoneyFlowEdge]) -> FlowKpis {
    let total_value: f64 = edges.iter().map(|edge| edge.value).sum();
    let total_contracts = edges.iter().map(|edge| edge.contract_count).sum();
    let risky = risk_weighted_value(edges);
    FlowKpis {
        edge_count: edges.len(),
        total_value,
        total_contracts,
        risk_weighted_value: risky,
        high_risk_share: if total_value > 0.0 {
            risky / total_value
        } else {
            0.0
        },
    }
}

fn display_name(entity_type: EntityType, id: i64, name: Option<&str>) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name.to_string(),
        _ => format!("{entity_type} {id}"),
    }
}
