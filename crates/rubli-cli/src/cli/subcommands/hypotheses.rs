use clap::{Args, Subcommand};

use super::{JudgmentArgs, PageArgs};

/// Price hypothesis commands.
#[derive(Clone, Debug, Subcommand)]
pub enum HypothesisCommands {
    /// List hypotheses.
    List {
        /// very_high, high, medium, low
        #[arg(long)]
        confidence: Option<String>,
        #[arg(long = "type")]
        hypothesis_type: Option<String>,
        #[arg(long)]
        sector: Option<i64>,
        /// Only unreviewed hypotheses.
        #[arg(long, conflicts_with = "reviewed")]
        pending: bool,
        /// Only reviewed hypotheses.
        #[arg(long)]
        reviewed: bool,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Get a hypothesis by ID.
    Get { id: String },
    /// Record a review judgment.
    Review(HypothesisReviewArgs),
}

#[derive(Clone, Debug, Args)]
pub struct HypothesisReviewArgs {
    pub id: String,
    #[command(flatten)]
    pub judgment: JudgmentArgs,
}
