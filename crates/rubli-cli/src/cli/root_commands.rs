use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    CaseCommands, CategoryCommands, ContractCommands, DossierCommands, FlowCommands,
    HypothesisCommands, InstitutionCommands, ScopeArgs, SectorCommands, StatsCommands,
    VendorCommands, WatchlistCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Dashboard figures, yearly trends, risk distribution.
    Stats {
        #[command(subcommand)]
        action: StatsCommands,
    },
    /// Procurement contracts.
    Contracts {
        #[command(subcommand)]
        action: ContractCommands,
    },
    /// Vendors (suppliers).
    Vendors {
        #[command(subcommand)]
        action: VendorCommands,
    },
    /// Buying institutions.
    Institutions {
        #[command(subcommand)]
        action: InstitutionCommands,
    },
    /// The fixed procurement sectors.
    Sectors {
        #[command(subcommand)]
        action: SectorCommands,
    },
    /// Money-flow views: top flows, sector rollup, KPIs, Sankey data.
    Flows {
        #[command(subcommand)]
        action: FlowCommands,
    },
    /// Spending categories and their sector rollup.
    Categories {
        #[command(subcommand)]
        action: CategoryCommands,
    },
    /// Vendor-institution network graph.
    Network(NetworkArgs),
    /// Price-anomaly hypotheses.
    Hypotheses {
        #[command(subcommand)]
        action: HypothesisCommands,
    },
    /// Investigation cases.
    Cases {
        #[command(subcommand)]
        action: CaseCommands,
    },
    /// Entities under watch.
    Watchlist {
        #[command(subcommand)]
        action: WatchlistCommands,
    },
    /// Investigation dossiers.
    Dossiers {
        #[command(subcommand)]
        action: DossierCommands,
    },
    /// Rate an entity's risk score.
    Feedback(FeedbackArgs),
}

/// Arguments for `rubli network`.
#[derive(Clone, Debug, Args)]
pub struct NetworkArgs {
    #[command(flatten)]
    pub scope: ScopeArgs,
    /// Center the graph on a vendor.
    #[arg(long)]
    pub vendor: Option<i64>,
    /// Center the graph on an institution.
    #[arg(long)]
    pub institution: Option<i64>,
    /// Drop links below this value (MXN).
    #[arg(long)]
    pub min_value: Option<f64>,
    /// Hops from the center node.
    #[arg(long)]
    pub depth: Option<u8>,
    #[arg(long)]
    pub hide_vendors: bool,
    #[arg(long)]
    pub hide_institutions: bool,
    /// Keep only nodes with risk score >= 0.35.
    #[arg(long)]
    pub high_risk: bool,
    /// Print links instead of nodes.
    #[arg(long)]
    pub links: bool,
}

/// Arguments for `rubli feedback`.
#[derive(Clone, Debug, Args)]
pub struct FeedbackArgs {
    /// institution, vendor, contract, ...
    #[arg(long = "entity")]
    pub entity_type: String,
    #[arg(long)]
    pub id: i64,
    /// not_suspicious, confirmed_suspicious, needs_review
    #[arg(long = "type")]
    pub feedback_type: String,
    #[arg(long)]
    pub reason: Option<String>,
}
