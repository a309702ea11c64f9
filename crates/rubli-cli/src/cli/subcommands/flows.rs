use clap::{Subcommand, ValueEnum};

use super::ScopeArgs;

/// Money-flow commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FlowCommands {
    /// Largest flows by one endpoint type.
    Top {
        /// Which end of the flow to rank.
        #[arg(long, default_value = "source")]
        side: FlowSideArg,
        /// Endpoint type: institution, vendor, sector
        #[arg(long, default_value = "institution")]
        entity: String,
        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Flow totals per sector.
    Sectors {
        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Total, high-risk value, and high-risk share.
    Kpi {
        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Node/link data for a Sankey diagram.
    Sankey {
        #[command(flatten)]
        scope: ScopeArgs,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum FlowSideArg {
    Source,
    Target,
}
