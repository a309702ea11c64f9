use std::sync::Arc;

use rubli_client::analysis::AnalysisScope;
use rubli_core::format::{format_compact_mxn, format_optional_risk};
use rubli_core::responses::{DashboardStats, ListResponse, RiskDistributionItem, YearStat};
use rubli_state::{Collection, QueryKey};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::StatsCommands;
use crate::commands::shared::fetch::{load, params_key};
use crate::context::AppContext;
use crate::output::{self, percent};

#[derive(Debug, Serialize)]
struct DashboardView<'a> {
    stats: &'a DashboardStats,
    risk_distribution: &'a [RiskDistributionItem],
    years: &'a [YearStat],
}

/// Handle `rubli stats`.
pub async fn handle(
    action: &StatsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StatsCommands::Dashboard => dashboard(ctx, flags).await,
        StatsCommands::Years { sector } => {
            let years = load_years(ctx, *sector).await?;
            output::output_list(&years, flags)
        }
        StatsCommands::Risk { scope } => {
            let distribution = load_risk(ctx, scope.analysis()).await?;
            output::output_list(&distribution, flags)
        }
    }
}

async fn load_years(
    ctx: &AppContext,
    sector: Option<i64>,
) -> anyhow::Result<Arc<ListResponse<YearStat>>> {
    let key = params_key(Collection::Analysis, "year-over-year", &sector);
    load(ctx, &key, "year-over-year trends", || {
        ctx.client.year_over_year(sector)
    })
    .await
}

async fn load_risk(
    ctx: &AppContext,
    scope: AnalysisScope,
) -> anyhow::Result<Arc<ListResponse<RiskDistributionItem>>> {
    let key = params_key(Collection::Analysis, "risk-distribution", &scope);
    load(ctx, &key, "risk distribution", || {
        ctx.client.risk_distribution(&scope)
    })
    .await
}

async fn dashboard(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stats_key = QueryKey::new(Collection::Stats).with("dashboard");
    let (stats, distribution, years) = tokio::join!(
        load(ctx, &stats_key, "dashboard statistics", || {
            ctx.client.dashboard_stats()
        }),
        load_risk(ctx, AnalysisScope::default()),
        load_years(ctx, None),
    );
    let (stats, distribution, years) = (stats?, distribution?, years?);

    let view = DashboardView {
        stats: &stats,
        risk_distribution: &distribution.data,
        years: &years.data,
    };
    output::output_summary(&view, &dashboard_pairs(&stats), flags)?;
    if flags.format == OutputFormat::Table {
        output::heading("Risk distribution", flags);
        output::output_rows(&distribution.data, flags.format)?;
        output::heading("By year", flags);
        output::output_rows(&years.data, flags.format)?;
    }
    Ok(())
}

fn dashboard_pairs(stats: &DashboardStats) -> Vec<(&'static str, String)> {
    let years = match (stats.min_year, stats.max_year) {
        (Some(min), Some(max)) => format!("{min}-{max}"),
        _ => String::from("-"),
    };
    vec![
        ("contracts", stats.total_contracts.to_string()),
        ("total value", format_compact_mxn(stats.total_value_mxn)),
        ("vendors", stats.total_vendors.to_string()),
        ("institutions", stats.total_institutions.to_string()),
        ("avg risk", format_optional_risk(stats.avg_risk_score)),
        ("high-risk contracts", stats.high_risk_contracts.to_string()),
        ("high-risk share", percent(stats.high_risk_pct)),
        ("direct awards", percent(stats.direct_award_pct)),
        ("single bids", percent(stats.single_bid_pct)),
        ("years", years),
    ]
}

#[cfg(test)]
mod tests {
    use super::dashboard_pairs;
    use rubli_core::responses::DashboardStats;

    #[test]
    fn dashboard_pairs_format_headline_numbers() {
        let stats = DashboardStats {
            total_contracts: 3_100_000,
            total_value_mxn: 9.9e12,
            total_vendors: 250_000,
            total_institutions: 1_800,
            avg_risk_score: Some(0.128),
            high_risk_contracts: 280_000,
            high_risk_pct: Some(9.0),
            direct_award_pct: Some(71.2),
            single_bid_pct: None,
            min_year: Some(2002),
            max_year: Some(2025),
        };
        let pairs = dashboard_pairs(&stats);
        let get = |name: &str| {
            pairs
                .iter()
                .find(|(metric, _)| *metric == name)
                .map(|(_, value)| value.as_str())
        };
        assert_eq!(get("total value"), Some("$9.9T"));
        assert_eq!(get("avg risk"), Some("12.8%"));
        assert_eq!(get("single bids"), Some("-"));
        assert_eq!(get("years"), Some("2002-2025"));
    }
}
