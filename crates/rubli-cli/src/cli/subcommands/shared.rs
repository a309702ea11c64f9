use clap::Args;
use rubli_client::analysis::{AnalysisScope, MoneyFlowParams};
use rubli_client::contracts::StatisticsScope;

/// Page cursor for paginated lists.
#[derive(Clone, Debug, Args)]
pub struct PageArgs {
    /// 1-based page; past-the-end pages show the last page.
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Rows per page (defaults to --limit, then general.per_page).
    #[arg(long)]
    pub per_page: Option<u32>,
}

/// Year / sector scope shared by analysis views.
#[derive(Clone, Debug, Default, Args)]
pub struct ScopeArgs {
    #[arg(long)]
    pub year: Option<i32>,
    #[arg(long)]
    pub sector: Option<i64>,
}

/// Analyst judgment for a review.
impl ScopeArgs {
    #[must_use]
    pub const fn analysis(&self) -> AnalysisScope {
        AnalysisScope {
            year: self.year,
            sector_id: self.sector,
        }
    }

    #[must_use]
    pub const fn statistics(&self) -> StatisticsScope {
        StatisticsScope {
            sector_id: self.sector,
            year: self.year,
        }
    }

    #[must_use]
    pub const fn money_flow(&self, limit: Option<u32>) -> MoneyFlowParams {
        MoneyFlowParams {
            year: self.year,
            sector_id: self.sector,
            limit,
            min_value: None,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct JudgmentArgs {
    /// Mark as valid.
    #[arg(long, conflicts_with = "dismiss")]
    pub valid: bool,
    /// Dismiss.
    #[arg(long)]
    pub dismiss: bool,
    #[arg(long)]
    pub notes: Option<String>,
}

impl JudgmentArgs {
    #[must_use]
    pub const fn judgment(&self) -> Option<bool> {
        if self.valid {
            Some(true)
        } else if self.dismiss {
            Some(false)
        } else {
            None
        }
    }
}
