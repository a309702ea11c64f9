use clap::{Args, Subcommand};

use super::PageArgs;

/// Institution commands.
#[derive(Clone, Debug, Subcommand)]
pub enum InstitutionCommands {
    /// List institutions.
    List(InstitutionListArgs),
    /// Get one institution.
    Get { id: i64 },
    /// Vendors an institution buys from.
    Vendors { id: i64 },
}

#[derive(Clone, Debug, Args)]
pub struct InstitutionListArgs {
    #[arg(long)]
    pub sector: Option<i64>,
    #[arg(long = "type")]
    pub institution_type: Option<String>,
    #[arg(long)]
    pub search: Option<String>,
    #[command(flatten)]
    pub page: PageArgs,
}
