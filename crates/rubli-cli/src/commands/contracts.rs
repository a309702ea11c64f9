use rubli_client::contracts::ContractFilters;
use rubli_core::entities::ContractDetail;
use rubli_core::format::{format_compact_mxn, format_optional_risk};
use rubli_state::{Collection, PageState, QueryKey};

use crate::cli::subcommands::{ContractCommands, ContractFilterArgs, ContractListArgs, ScopeArgs};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::export::save_export;
use crate::commands::shared::fetch::{fetch_page, load, params_key, per_page};
use crate::commands::shared::parse::parse_opt;
use crate::context::AppContext;
use crate::output;
use crate::progress::with_spinner;

/// Handle `rubli contracts`.
pub async fn handle(
    action: &ContractCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ContractCommands::List(args) => list(args, ctx, flags).await,
        ContractCommands::Get { id } => get(*id, ctx, flags).await,
        ContractCommands::Stats { scope } => stats(scope, ctx, flags).await,
        ContractCommands::Export { filters, output } => {
            let filters = contract_filters(filters)?;
            let file = with_spinner(
                "exporting contracts",
                ctx.client.export_contracts_csv(&filters),
            )
            .await?;
            save_export(&file, output.as_deref(), "contracts", "csv", flags)
        }
    }
}

/// Request filters from command-line flags. Unset boolean flags mean "any",
/// not "false".
pub fn contract_filters(args: &ContractFilterArgs) -> anyhow::Result<ContractFilters> {
    if let (Some(min), Some(max)) = (args.min_amount, args.max_amount) {
        anyhow::ensure!(min <= max, "--min-amount ({min}) is above --max-amount ({max})");
    }
    Ok(ContractFilters {
        sector_id: args.sector,
        year: args.year,
        vendor_id: args.vendor,
        institution_id: args.institution,
        risk_level: parse_opt(args.risk_level.as_deref(), "risk level")?,
        is_direct_award: args.direct_award.then_some(true),
        is_single_bid: args.single_bid.then_some(true),
        min_amount: args.min_amount,
        max_amount: args.max_amount,
        search: args
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        ..ContractFilters::default()
    })
}

async fn list(args: &ContractListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filters = contract_filters(&args.filters)?;
    let field = args.sort.api_field();
    let mut state = PageState::new(
        Collection::Contracts,
        filters,
        per_page(args.page.per_page, flags, ctx),
        field,
    );
    if args.asc {
        // Re-selecting the active column flips it to ascending.
        state.select_sort(field);
    }

    let base = ContractFilters {
        sort_by: Some(field.to_string()),
        sort_order: Some(state.sort().order()),
        ..state.filters().clone()
    };
    let client = &ctx.client;
    let response = fetch_page(ctx, &mut state, args.page.page, "contracts", move |page, per_page| {
        let request = ContractFilters {
            page: Some(page),
            per_page: Some(per_page),
            ..base.clone()
        };
        async move { client.list_contracts(&request).await }
    })
    .await?;

    output::output_page(&response, state.pagination(), flags)
}

async fn get(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let key = QueryKey::new(Collection::Contracts).with("detail").with(id.to_string());
    let detail = load(ctx, &key, &format!("contract {id}"), || ctx.client.get_contract(id)).await?;
    output::output_summary(detail.as_ref(), &detail_pairs(&detail), flags)
}

fn detail_pairs(detail: &ContractDetail) -> Vec<(&'static str, String)> {
    let summary = &detail.summary;
    let text = |value: Option<&str>| value.unwrap_or("-").to_string();
    let yes_no = |value: bool| String::from(if value { "yes" } else { "no" });
    let factors = if detail.risk_factors.is_empty() {
        String::from("-")
    } else {
        detail.risk_factors.join(", ")
    };
    vec![
        ("id", summary.id.to_string()),
        ("number", text(summary.contract_number.as_deref())),
        ("title", text(summary.title.as_deref())),
        ("vendor", text(summary.vendor_name.as_deref())),
        ("institution", text(summary.institution_name.as_deref())),
        ("sector", text(summary.sector_name.as_deref())),
        ("date", summary.contract_date.map_or_else(|| String::from("-"), |d| d.to_string())),
        ("amount", format_compact_mxn(summary.amount_mxn)),
        ("risk", format_optional_risk(summary.risk_score)),
        ("risk level", summary.risk_level.map_or_else(|| String::from("-"), |l| l.to_string())),
        ("risk factors", factors),
        ("procedure", text(detail.procedure_type.as_deref())),
        ("direct award", yes_no(summary.is_direct_award)),
        ("single bid", yes_no(summary.is_single_bid)),
        ("source", text(detail.source_url.as_deref())),
    ]
}

async fn stats(scope: &ScopeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let params = scope.statistics();
    let key = params_key(Collection::Contracts, "statistics", &params);
    let stats = load(ctx, &key, "contract statistics", || {
        ctx.client.contract_statistics(&params)
    })
    .await?;

    let pairs = vec![
        ("contracts", stats.total_contracts.to_string()),
        ("total value", format_compact_mxn(stats.total_value_mxn)),
        ("average value", format_compact_mxn(stats.avg_contract_value)),
        (
            "median value",
            stats
                .median_contract_value
                .map_or_else(|| String::from("-"), format_compact_mxn),
        ),
        ("direct awards", stats.direct_award_count.to_string()),
        ("single bids", stats.single_bid_count.to_string()),
    ];
    output::output_summary(stats.as_ref(), &pairs, flags)?;
    if flags.format == OutputFormat::Table && !stats.by_year.is_empty() {
        output::heading("By year", flags);
        output::output_rows(&stats.by_year, flags.format)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rubli_core::enums::RiskLevel;

    use super::contract_filters;
    use crate::cli::subcommands::ContractFilterArgs;

    fn args() -> ContractFilterArgs {
        ContractFilterArgs {
            sector: None,
            year: None,
            vendor: None,
            institution: None,
            risk_level: None,
            direct_award: false,
            single_bid: false,
            min_amount: None,
            max_amount: None,
            search: None,
        }
    }

    #[test]
    fn unset_flags_stay_unset() {
        let filters = contract_filters(&args()).unwrap();
        assert_eq!(filters.is_direct_award, None);
        assert_eq!(filters.is_single_bid, None);
        assert_eq!(filters.risk_level, None);
    }

    #[test]
    fn flags_map_to_request_filters() {
        let filters = contract_filters(&ContractFilterArgs {
            sector: Some(1),
            risk_level: Some("critical".into()),
            direct_award: true,
            search: Some("  ".into()),
            ..args()
        })
        .unwrap();
        assert_eq!(filters.sector_id, Some(1));
        assert_eq!(filters.risk_level, Some(RiskLevel::Critical));
        assert_eq!(filters.is_direct_award, Some(true));
        assert_eq!(filters.search, None);
    }

    #[test]
    fn inverted_amount_range_is_rejected() {
        let err = contract_filters(&ContractFilterArgs {
            min_amount: Some(10.0),
            max_amount: Some(1.0),
            ..args()
        })
        .unwrap_err();
        assert!(err.to_string().contains("--min-amount"));
    }
}
