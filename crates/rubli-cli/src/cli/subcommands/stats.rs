use clap::Subcommand;

use super::ScopeArgs;

/// Aggregate statistics commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StatsCommands {
    /// Headline figures plus the yearly trend.
    Dashboard,
    /// Year-over-year contract totals.
    Years {
        #[arg(long)]
        sector: Option<i64>,
    },
    /// Contracts per risk level.
    Risk {
        #[command(flatten)]
        scope: ScopeArgs,
    },
}
