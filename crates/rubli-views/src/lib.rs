//! # rubli-views
//!
//! Pure, synchronous transforms from API response shapes into chart-ready
//! structures. Nothing here performs I/O; callers recompute a view whenever
//! its input data or a filter changes.
//!
//! - [`flows`]: top-N flow bars, sector rollups, risk-weighted KPIs
//! - [`sankey`]: node/link construction for flow diagrams
//! - [`categories`]: category → sector rollups and treemap hierarchy
//! - [`network`]: node/link filtering for the vendor-institution graph
//! - [`scatter`]: vendor scatter-plot coordinates

pub mod categories;
pub mod flows;
pub mod network;
pub mod sankey;
pub mod scatter;

pub use categories::{CategorySectorRollup, TreemapNode, build_treemap, sectors_from_categories};
pub use flows::{
    FlowBar, FlowKpis, FlowSide, SectorFlowTotal, flow_kpis, risk_weighted_value, sector_rollup,
    top_flows,
};
pub use network::{NetworkFilter, filter_network};
pub use sankey::{SankeyData, SankeyLink, SankeyNode, build_sankey};
pub use scatter::{VendorPoint, vendor_scatter};
