use rubli_client::institutions::InstitutionFilters;
use rubli_core::entities::InstitutionDetail;
use rubli_core::format::{format_compact_mxn, format_optional_risk};
use rubli_state::{Collection, PageState, QueryKey};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{InstitutionCommands, InstitutionListArgs};
use crate::commands::shared::fetch::{fetch_page, load, per_page};
use crate::context::AppContext;
use crate::output::{self, percent};

const SORT_FIELD: &str = "total_amount_mxn";

/// Handle `rubli institutions`.
pub async fn handle(
    action: &InstitutionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        InstitutionCommands::List(args) => list(args, ctx, flags).await,
        InstitutionCommands::Get { id } => {
            let id = *id;
            let key = QueryKey::new(Collection::Institutions)
                .with("detail")
                .with(id.to_string());
            let detail = load(ctx, &key, &format!("institution {id}"), || {
                ctx.client.get_institution(id)
            })
            .await?;
            output::output_summary(detail.as_ref(), &detail_pairs(&detail), flags)
        }
        InstitutionCommands::Vendors { id } => {
            let id = *id;
            let limit = flags.limit;
            let key = QueryKey::new(Collection::Institutions)
                .with("vendors")
                .with(id.to_string())
                .with(limit.map_or_else(String::new, |n| n.to_string()));
            let vendors = load(ctx, &key, &format!("vendors of institution {id}"), || {
                ctx.client.institution_vendors(id, limit)
            })
            .await?;
            output::output_list(&vendors, flags)
        }
    }
}

fn institution_filters(args: &InstitutionListArgs) -> InstitutionFilters {
    let clean = |value: Option<&str>| {
        value
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };
    InstitutionFilters {
        sector_id: args.sector,
        institution_type: clean(args.institution_type.as_deref()),
        search: clean(args.search.as_deref()),
        ..InstitutionFilters::default()
    }
}

async fn list(
    args: &InstitutionListArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut state = PageState::new(
        Collection::Institutions,
        institution_filters(args),
        per_page(args.page.per_page, flags, ctx),
        SORT_FIELD,
    );
    let base = InstitutionFilters {
        sort_by: Some(SORT_FIELD.to_string()),
        sort_order: Some(state.sort().order()),
        ..state.filters().clone()
    };
    let client = &ctx.client;
    let response = fetch_page(
        ctx,
        &mut state,
        args.page.page,
        "institutions",
        move |page, per_page| {
            let request = InstitutionFilters {
                page: Some(page),
                per_page: Some(per_page),
                ..base.clone()
            };
            async move { client.list_institutions(&request).await }
        },
    )
    .await?;
    output::output_page(&response, state.pagination(), flags)
}

fn detail_pairs(detail: &InstitutionDetail) -> Vec<(&'static str, String)> {
    let institution = &detail.summary;
    let text = |value: Option<&String>| value.cloned().unwrap_or_else(|| String::from("-"));
    vec![
        ("id", institution.id.to_string()),
        ("name", institution.name.clone()),
        ("acronym", text(institution.siglas.as_ref())),
        ("type", text(institution.institution_type.as_ref())),
        ("contracts", institution.total_contracts.to_string()),
        ("total spend", format_compact_mxn(institution.total_amount_mxn)),
        ("avg risk", format_optional_risk(institution.avg_risk_score)),
        ("vendors", detail.vendor_count.to_string()),
        ("direct awards", percent(detail.direct_award_pct)),
        ("high-risk share", percent(detail.high_risk_pct)),
    ]
}
