use clap::{Args, Subcommand, ValueEnum};

use super::{PageArgs, ScopeArgs};

/// Vendor commands.
#[derive(Clone, Debug, Subcommand)]
pub enum VendorCommands {
    /// List vendors.
    List(VendorListArgs),
    /// Get one vendor.
    Get { id: i64 },
    /// Contracts awarded to a vendor.
    Contracts {
        id: i64,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Top vendors by value, contract count, or risk.
    Top {
        #[arg(long, default_value = "value")]
        by: TopMetricArg,
        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Contracts-vs-risk scatter coordinates for the top vendors.
    Scatter {
        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Download the filtered vendor list as an Excel workbook.
    Export {
        #[arg(long)]
        sector: Option<i64>,
        #[arg(long)]
        risk_level: Option<String>,
        #[arg(long, short)]
        output: Option<String>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum TopMetricArg {
    Value,
    Count,
    Risk,
}

#[derive(Clone, Debug, Args)]
pub struct VendorListArgs {
    #[arg(long)]
    pub sector: Option<i64>,
    #[arg(long)]
    pub min_contracts: Option<u32>,
    /// low, medium, high, critical
    #[arg(long)]
    pub risk_level: Option<String>,
    #[arg(long)]
    pub search: Option<String>,
    #[command(flatten)]
    pub page: PageArgs,
}
