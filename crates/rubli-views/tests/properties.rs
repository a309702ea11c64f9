//! Cross-module properties of the aggregation views.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rubli_core::entities::{CategoryStat, MoneyFlowEdge, NetworkGraph, NetworkLink, NetworkNode};
use rubli_core::enums::EntityType;
use rubli_views::{
    FlowSide, NetworkFilter, filter_network, risk_weighted_value, sector_rollup,
    sectors_from_categories, top_flows,
};

fn flow(
    source: (EntityType, i64),
    target: (EntityType, i64),
    value: f64,
    contracts: u64,
    avg_risk: Option<f64>,
) -> MoneyFlowEdge {
    MoneyFlowEdge {
        source_type: source.0,
        source_id: source.1,
        source_name: None,
        target_type: target.0,
        target_id: target.1,
        target_name: None,
        value,
        contract_count: contracts,
        avg_risk,
    }
}

#[test]
fn top_flows_small_input_is_fully_sorted() {
    let edges = vec![
        flow((EntityType::Institution, 1), (EntityType::Vendor, 1), 30.0, 1, None),
        flow((EntityType::Institution, 2), (EntityType::Vendor, 1), 10.0, 1, None),
        flow((EntityType::Institution, 3), (EntityType::Vendor, 1), 20.0, 1, None),
    ];
    let values: Vec<f64> = top_flows(&edges, FlowSide::Source, EntityType::Institution, 15, 30)
        .into_iter()
        .map(|bar| bar.value)
        .collect();
    assert_eq!(values, vec![30.0, 20.0, 10.0]);
}

#[rstest]
#[case(0.0)]
#[case(1.0)]
#[case(1e12)]
fn null_risk_edge_never_changes_weighted_sum(#[case] value: f64) {
    let mut edges = vec![
        flow((EntityType::Institution, 1), (EntityType::Vendor, 1), 100.0, 1, Some(0.45)),
        flow((EntityType::Institution, 1), (EntityType::Vendor, 2), 60.0, 1, Some(0.1)),
    ];
    let before = risk_weighted_value(&edges);
    edges.push(flow(
        (EntityType::Institution, 2),
        (EntityType::Vendor, 3),
        value,
        1,
        None,
    ));
    assert_eq!(risk_weighted_value(&edges), before);
    assert_eq!(before, 100.0);
}

#[test]
fn sector_rollup_is_permutation_invariant() {
    let edges = vec![
        flow((EntityType::Sector, 1), (EntityType::Institution, 10), 100.0, 3, None),
        flow((EntityType::Sector, 2), (EntityType::Institution, 11), 250.0, 1, None),
        flow((EntityType::Institution, 12), (EntityType::Sector, 1), 40.0, 2, None),
        flow((EntityType::Sector, 3), (EntityType::Sector, 2), 8.0, 1, None),
        flow((EntityType::Sector, 3), (EntityType::Institution, 10), 16.0, 4, None),
    ];
    let expected = sector_rollup(&edges);

    let mut reversed = edges.clone();
    reversed.reverse();
    assert_eq!(sector_rollup(&reversed), expected);

    let mut rotated = edges.clone();
    rotated.rotate_left(2);
    assert_eq!(sector_rollup(&rotated), expected);

    let mut swapped = edges;
    swapped.swap(0, 3);
    assert_eq!(sector_rollup(&swapped), expected);

    let totals: Vec<(i64, f64)> = expected.iter().map(|t| (t.sector_id, t.value)).collect();
    assert_eq!(totals, vec![(2, 258.0), (1, 140.0), (3, 24.0)]);
}

#[test]
fn sector_rollup_fractional_sums_ignore_edge_order() {
    let edges = vec![
        flow((EntityType::Sector, 7), (EntityType::Institution, 1), 0.1, 1, None),
        flow((EntityType::Sector, 7), (EntityType::Institution, 2), 0.2, 1, None),
        flow((EntityType::Sector, 7), (EntityType::Institution, 3), 0.3, 1, None),
    ];
    let forward = sector_rollup(&edges);

    let mut reversed = edges.clone();
    reversed.reverse();
    let mut rotated = edges;
    rotated.rotate_left(1);

    assert_eq!(sector_rollup(&reversed), forward);
    assert_eq!(sector_rollup(&rotated), forward);
    assert_eq!(forward[0].value.to_bits(), sector_rollup(&reversed)[0].value.to_bits());
    assert_eq!(forward[0].contract_count, 3);
}

#[test]
fn sector_risk_is_weighted_by_contract_count() {
    let stats = vec![
        CategoryStat {
            category_id: 1,
            name: "Medicamentos".into(),
            sector_code: Some("salud".into()),
            total_contracts: 100,
            total_value: 1_000.0,
            avg_risk: 0.1,
        },
        CategoryStat {
            category_id: 2,
            name: "Equipo medico".into(),
            sector_code: Some("salud".into()),
            total_contracts: 1,
            total_value: 10.0,
            avg_risk: 0.9,
        },
    ];
    let rollup = sectors_from_categories(&stats);
    assert_eq!(rollup.len(), 1);
    let expected = (0.1 * 100.0 + 0.9) / 101.0;
    assert!((rollup[0].avg_risk - expected).abs() < 1e-12);
    assert!((rollup[0].avg_risk - 0.108).abs() < 1e-3);
    assert_eq!(rollup[0].total_contracts, 101);
}

#[rstest]
#[case(false, true)]
#[case(true, false)]
#[case(false, false)]
fn network_filter_leaves_no_dangling_links(#[case] vendors: bool, #[case] institutions: bool) {
    let node = |id: &str, node_type| NetworkNode {
        id: id.to_string(),
        node_type,
        name: id.to_string(),
        value: 0.0,
        contracts: 0,
        risk_score: Some(0.5),
    };
    let link = |s: &str, t: &str| NetworkLink {
        source: s.to_string(),
        target: t.to_string(),
        value: 1.0,
        contracts: 1,
        avg_risk: None,
    };
    let graph = NetworkGraph {
        nodes: vec![
            node("i1", EntityType::Institution),
            node("i2", EntityType::Institution),
            node("v1", EntityType::Vendor),
            node("v2", EntityType::Vendor),
        ],
        links: vec![
            link("i1", "v1"),
            link("i2", "v1"),
            link("i2", "v2"),
            link("v1", "v2"),
            link("i1", "missing"),
        ],
        total_nodes: 4,
        total_links: 5,
    };

    let filtered = filter_network(
        &graph,
        NetworkFilter {
            show_vendors: vendors,
            show_institutions: institutions,
            high_risk_only: false,
        },
    );

    for link in &filtered.links {
        assert!(filtered.nodes.iter().any(|n| n.id == link.source));
        assert!(filtered.nodes.iter().any(|n| n.id == link.target));
    }
    assert_eq!(filtered.total_links, filtered.links.len() as u64);
}
