use std::sync::Arc;

use rubli_client::vendors::{TopVendorMetric, TopVendorsParams, VendorFilters};
use rubli_core::entities::{VendorDetail, VendorListItem};
use rubli_core::format::{format_compact_mxn, format_optional_risk};
use rubli_core::responses::ListResponse;
use rubli_state::{Collection, PageState, QueryKey};
use rubli_views::vendor_scatter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{PageArgs, ScopeArgs, TopMetricArg, VendorCommands, VendorListArgs};
use crate::commands::shared::export::save_export;
use crate::commands::shared::fetch::{fetch_page, load, params_key, per_page};
use crate::commands::shared::limit::top_n;
use crate::commands::shared::parse::parse_opt;
use crate::context::AppContext;
use crate::output::{self, percent};
use crate::progress::with_spinner;

/// Vendor lists are ranked by total contract value.
const SORT_FIELD: &str = "total_value_mxn";

/// Handle `rubli vendors`.
pub async fn handle(
    action: &VendorCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        VendorCommands::List(args) => list(args, ctx, flags).await,
        VendorCommands::Get { id } => get(*id, ctx, flags).await,
        VendorCommands::Contracts { id, page } => contracts(*id, page, ctx, flags).await,
        VendorCommands::Top { by, scope } => {
            let top = load_top(ctx, flags, metric(*by), scope).await?;
            output::output_list(&top, flags)
        }
        VendorCommands::Scatter { scope } => {
            let top = load_top(ctx, flags, TopVendorMetric::Value, scope).await?;
            let points = vendor_scatter(&top.data);
            tracing::debug!(
                vendors = top.data.len(),
                points = points.len(),
                "vendors without a risk score are left off the scatter"
            );
            output::output_rows(&points, flags.format)
        }
        VendorCommands::Export {
            sector,
            risk_level,
            output,
        } => {
            let filters = VendorFilters {
                sector_id: *sector,
                risk_level: parse_opt(risk_level.as_deref(), "risk level")?,
                ..VendorFilters::default()
            };
            let file =
                with_spinner("exporting vendors", ctx.client.export_vendors_excel(&filters)).await?;
            save_export(&file, output.as_deref(), "vendors", "xlsx", flags)
        }
    }
}

const fn metric(arg: TopMetricArg) -> TopVendorMetric {
    match arg {
        TopMetricArg::Value => TopVendorMetric::Value,
        TopMetricArg::Count => TopVendorMetric::Count,
        TopMetricArg::Risk => TopVendorMetric::Risk,
    }
}

fn vendor_filters(args: &VendorListArgs) -> anyhow::Result<VendorFilters> {
    Ok(VendorFilters {
        sector_id: args.sector,
        min_contracts: args.min_contracts,
        risk_level: parse_opt(args.risk_level.as_deref(), "risk level")?,
        search: args
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
        ..VendorFilters::default()
    })
}

async fn list(args: &VendorListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut state = PageState::new(
        Collection::Vendors,
        vendor_filters(args)?,
        per_page(args.page.per_page, flags, ctx),
        SORT_FIELD,
    );
    let base = VendorFilters {
        sort_by: Some(SORT_FIELD.to_string()),
        sort_order: Some(state.sort().order()),
        ..state.filters().clone()
    };
    let client = &ctx.client;
    let response = fetch_page(ctx, &mut state, args.page.page, "vendors", move |page, per_page| {
        let request = VendorFilters {
            page: Some(page),
            per_page: Some(per_page),
            ..base.clone()
        };
        async move { client.list_vendors(&request).await }
    })
    .await?;
    output::output_page(&response, state.pagination(), flags)
}

async fn get(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let key = QueryKey::new(Collection::Vendors).with("detail").with(id.to_string());
    let detail = load(ctx, &key, &format!("vendor {id}"), || ctx.client.get_vendor(id)).await?;
    output::output_summary(detail.as_ref(), &detail_pairs(&detail), flags)
}

fn detail_pairs(detail: &VendorDetail) -> Vec<(&'static str, String)> {
    let vendor = &detail.summary;
    let years = match (detail.first_contract_year, detail.last_contract_year) {
        (Some(first), Some(last)) if first == last => first.to_string(),
        (Some(first), Some(last)) => format!("{first}-{last}"),
        _ => String::from("-"),
    };
    vec![
        ("id", vendor.id.to_string()),
        ("name", vendor.name.clone()),
        ("rfc", vendor.rfc.clone().unwrap_or_else(|| String::from("-"))),
        ("contracts", vendor.total_contracts.to_string()),
        ("total value", format_compact_mxn(vendor.total_value_mxn)),
        ("avg risk", format_optional_risk(vendor.avg_risk_score)),
        ("high-risk share", percent(vendor.high_risk_pct)),
        ("direct awards", percent(vendor.direct_award_pct)),
        ("single bids", percent(detail.single_bid_pct)),
        ("institutions", detail.institution_count.to_string()),
        ("active years", years),
    ]
}

async fn contracts(
    id: i64,
    page: &PageArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut state = PageState::new(
        Collection::Vendors,
        id,
        per_page(page.per_page, flags, ctx),
        "contracts",
    );
    let client = &ctx.client;
    let what = format!("contracts of vendor {id}");
    let response = fetch_page(ctx, &mut state, page.page, &what, move |page, per_page| {
        client.vendor_contracts(id, Some(page), Some(per_page))
    })
    .await?;
    output::output_page(&response, state.pagination(), flags)
}

async fn load_top(
    ctx: &AppContext,
    flags: &GlobalFlags,
    by: TopVendorMetric,
    scope: &ScopeArgs,
) -> anyhow::Result<Arc<ListResponse<VendorListItem>>> {
    let limit = top_n(flags.limit, ctx.config.general.top_n);
    let params = TopVendorsParams {
        by: Some(by),
        limit: Some(u32::try_from(limit).unwrap_or(u32::MAX)),
        sector_id: scope.sector,
        year: scope.year,
    };
    let key = params_key(Collection::Vendors, "top", &params);
    load(ctx, &key, "top vendors", || ctx.client.top_vendors(&params)).await
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rubli_client::vendors::TopVendorMetric;
    use rubli_core::entities::{VendorDetail, VendorListItem};
    use rubli_core::enums::RiskLevel;

    use super::{detail_pairs, metric, vendor_filters};
    use crate::cli::subcommands::{PageArgs, TopMetricArg, VendorListArgs};

    #[test]
    fn metric_args_map_one_to_one() {
        assert_eq!(metric(TopMetricArg::Count), TopVendorMetric::Count);
        assert_eq!(metric(TopMetricArg::Risk), TopVendorMetric::Risk);
    }

    #[test]
    fn list_flags_become_filters() {
        let filters = vendor_filters(&VendorListArgs {
            sector: Some(3),
            min_contracts: Some(10),
            risk_level: Some("HIGH".into()),
            search: Some(" pemex ".into()),
            page: PageArgs {
                page: 1,
                per_page: None,
            },
        })
        .unwrap();
        assert_eq!(filters.sector_id, Some(3));
        assert_eq!(filters.min_contracts, Some(10));
        assert_eq!(filters.risk_level, Some(RiskLevel::High));
        assert_eq!(filters.search.as_deref(), Some("pemex"));
        assert_eq!(filters.page, None);
    }

    #[test]
    fn single_active_year_is_not_a_range() {
        let detail = VendorDetail {
            summary: VendorListItem {
                id: 9,
                name: String::from("Constructora"),
                rfc: None,
                total_contracts: 4,
                total_value_mxn: 2.5e6,
                avg_risk_score: Some(0.41),
                high_risk_pct: None,
                direct_award_pct: Some(75.0),
                primary_sector_id: None,
            },
            first_contract_year: Some(2021),
            last_contract_year: Some(2021),
            institution_count: 2,
            single_bid_pct: None,
            sector_ids: vec![],
        };
        let pairs = detail_pairs(&detail);
        let get = |name: &str| {
            pairs
                .iter()
                .find(|(metric, _)| *metric == name)
                .map(|(_, value)| value.clone())
        };
        assert_eq!(get("active years").as_deref(), Some("2021"));
        assert_eq!(get("total value").as_deref(), Some("$2.5M"));
        assert_eq!(get("avg risk").as_deref(), Some("41.0%"));
    }
}
