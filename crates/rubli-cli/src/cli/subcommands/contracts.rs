use clap::{Args, Subcommand, ValueEnum};

use super::{PageArgs, ScopeArgs};

/// Contract commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ContractCommands {
    /// List contracts (paginated, filtered, sorted).
    List(ContractListArgs),
    /// Get one contract with its risk factors.
    Get { id: i64 },
    /// Aggregate statistics.
    Stats {
        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Download the filtered contract list as CSV.
    Export {
        #[command(flatten)]
        filters: ContractFilterArgs,
        /// Output file (defaults to the server-suggested name).
        #[arg(long, short)]
        output: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ContractSort {
    Amount,
    Date,
    Risk,
}

impl ContractSort {
    #[must_use]
    pub const fn api_field(self) -> &'static str {
        match self {
            Self::Amount => "amount_mxn",
            Self::Date => "contract_date",
            Self::Risk => "risk_score",
        }
    }
}

#[derive(Clone, Debug, Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct ContractFilterArgs {
    #[arg(long)]
    pub sector: Option<i64>,
    #[arg(long)]
    pub year: Option<i32>,
    #[arg(long)]
    pub vendor: Option<i64>,
    #[arg(long)]
    pub institution: Option<i64>,
    /// low, medium, high, critical
    #[arg(long)]
    pub risk_level: Option<String>,
    #[arg(long)]
    pub direct_award: bool,
    #[arg(long)]
    pub single_bid: bool,
    #[arg(long)]
    pub min_amount: Option<f64>,
    #[arg(long)]
    pub max_amount: Option<f64>,
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ContractListArgs {
    #[command(flatten)]
    pub filters: ContractFilterArgs,
    #[command(flatten)]
    pub page: PageArgs,
    #[arg(long, default_value = "amount")]
    pub sort: ContractSort,
    /// Ascending order (default is descending).
    #[arg(long)]
    pub asc: bool,
}
