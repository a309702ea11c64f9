//! Category-level statistics rolled up into sectors.

use std::collections::BTreeMap;

use rubli_core::entities::CategoryStat;
use serde::Serialize;

/// Bucket for categories the backend has not mapped to a sector.
pub const OTHER_SECTOR: &str = "other";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySectorRollup {
    pub sector_code: String,
    pub category_count: usize,
    pub total_contracts: u64,
    pub total_value: f64,
    /// Contract-count-weighted mean of the member categories' `avg_risk`.
    pub avg_risk: f64,
}

#[derive(Default)]
struct Accumulator {
    categories: usize,
    contracts: u64,
    value: f64,
    risk_weight: f64,
}

fn sector_key(stat: &CategoryStat) -> &str {
    stat.sector_code
        .as_deref()
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .unwrap_or(OTHER_SECTOR)
}

/// Group categories by sector code.
///
/// Average risk is `Σ(risk × contracts) / Σ contracts`, or 0 for a sector
/// whose categories have no contracts. Sorted by total value (descending),
/// then sector code.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sectors_from_categories(stats: &[CategoryStat]) -> Vec<CategorySectorRollup> {
    let mut groups: BTreeMap<&str, Accumulator> = BTreeMap::new();
    for stat in stats {
        let acc = groups.entry(sector_key(stat)).or_default();
        acc.categories += 1;
        acc.contracts += stat.total_contracts;
        acc.value += stat.total_value;
        acc.risk_weight += stat.avg_risk * stat.total_contracts as f64;
    }

    let mut out: Vec<CategorySectorRollup> = groups
        .into_iter()
        .map(|(code, acc)| CategorySectorRollup {
            sector_code: code.to_string(),
            category_count: acc.categories,
            total_contracts: acc.contracts,
            total_value: acc.value,
            avg_risk: if acc.contracts == 0 {
                0.0
            } else {
                acc.risk_weight / acc.contracts as f64
            },
        })
        .collect();
    out.sort_by(|a, b| {
        b.total_value
            .total_cmp(&a.total_value)
            .then_with(|| a.sector_code.cmp(&b.sector_code))
    });
    out
}

/// One rectangle in the category treemap.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreemapNode {
    pub name: String,
    pub value: f64,
    pub avg_risk: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreemapNode>,
}

/// Root → sector → category hierarchy.
///
/// Sectors follow [`sectors_from_categories`] order; categories inside a
/// sector are sorted by value, largest first.
#[must_use]
pub fn build_treemap(stats: &[CategoryStat]) -> TreemapNode {
    let sectors = sectors_from_categories(stats);
    let children = sectors
        .into_iter()
        .map(|sector| {
            let mut leaves: Vec<TreemapNode> = stats
                .iter()
                .filter(|stat| sector_key(stat) == sector.sector_code)
                .map(|stat| TreemapNode {
                    name: stat.name.clone(),
                    value: stat.total_value,
                    avg_risk: Some(stat.avg_risk),
                    children: Vec::new(),
                })
                .collect();
            leaves.sort_by(|a, b| b.value.total_cmp(&a.value));
            TreemapNode {
                name: sector.sector_code,
                value: sector.total_value,
                avg_risk: Some(sector.avg_risk),
                children: leaves,
            }
        })
        .collect::<Vec<_>>();

    TreemapNode {
        name: "all".to_string(),
        value: children.iter().map(|c| c.value).sum(),
        avg_risk: None,
        children,
    }
}
