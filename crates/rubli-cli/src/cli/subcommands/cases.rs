use clap::{Args, Subcommand};

use super::{JudgmentArgs, PageArgs};

/// Investigation case commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CaseCommands {
    /// List cases.
    List {
        #[arg(long)]
        sector: Option<i64>,
        #[arg(long = "type")]
        case_type: Option<String>,
        /// pending, corroborated, confirmed, dismissed
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        min_score: Option<f64>,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Get a case by numeric ID.
    Get { id: i64 },
    /// Record a review judgment.
    Review(CaseReviewArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CaseReviewArgs {
    pub id: i64,
    #[command(flatten)]
    pub judgment: JudgmentArgs,
}
