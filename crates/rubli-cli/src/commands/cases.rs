use rubli_client::investigation::CaseFilters;
use rubli_core::entities::InvestigationCase;
use rubli_core::format::{format_compact_mxn, format_risk_percent};
use rubli_state::{Collection, PageState, QueryKey, review_case};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{CaseCommands, CaseReviewArgs};
use crate::commands::shared::fetch::{fetch_page, load, per_page};
use crate::commands::shared::parse::parse_opt;
use crate::commands::shared::review::draft_from;
use crate::context::AppContext;
use crate::output;
use crate::progress::with_spinner;

/// Handle `rubli cases`.
pub async fn handle(
    action: &CaseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CaseCommands::List {
            sector,
            case_type,
            status,
            min_score,
            page,
        } => {
            if let Some(score) = min_score {
                anyhow::ensure!(
                    (0.0..=1.0).contains(score),
                    "--min-score must be between 0 and 1, got {score}"
                );
            }
            let filters = CaseFilters {
                sector_id: *sector,
                case_type: case_type.clone(),
                validation_status: parse_opt(status.as_deref(), "validation status")?,
                min_score: *min_score,
                ..CaseFilters::default()
            };
            let mut state = PageState::new(
                Collection::Cases,
                filters,
                per_page(page.per_page, flags, ctx),
                "suspicion_score",
            );
            let base = state.filters().clone();
            let client = &ctx.client;
            let response = fetch_page(ctx, &mut state, page.page, "cases", move |page, per_page| {
                let request = CaseFilters {
                    page: Some(page),
                    per_page: Some(per_page),
                    ..base.clone()
                };
                async move { client.list_cases(&request).await }
            })
            .await?;
            output::output_page(&response, state.pagination(), flags)
        }
        CaseCommands::Get { id } => {
            let id = *id;
            let key = QueryKey::new(Collection::Cases).with("detail").with(id.to_string());
            let case = load(ctx, &key, &format!("case {id}"), || ctx.client.get_case(id)).await?;
            output::output_summary(case.as_ref(), &detail_pairs(&case), flags)
        }
        CaseCommands::Review(args) => review(args, ctx, flags).await,
    }
}

fn detail_pairs(case: &InvestigationCase) -> Vec<(&'static str, String)> {
    let text = |value: Option<&String>| value.cloned().unwrap_or_else(|| String::from("-"));
    vec![
        ("id", case.id.to_string()),
        ("case", case.case_id.clone()),
        ("title", case.title.clone()),
        ("type", case.case_type.clone()),
        ("sector", text(case.sector_name.as_ref())),
        ("suspicion", format_risk_percent(case.suspicion_score)),
        (
            "estimated loss",
            case.estimated_loss_mxn
                .map_or_else(|| String::from("-"), format_compact_mxn),
        ),
        ("total value", format_compact_mxn(case.total_value_mxn)),
        ("vendors", case.vendor_count.to_string()),
        ("status", case.validation_status.to_string()),
        ("notes", text(case.review_notes.as_ref())),
        ("summary", text(case.summary.as_ref())),
    ]
}

async fn review(args: &CaseReviewArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut draft = draft_from(&args.judgment)?;
    let updated = with_spinner(
        &format!("reviewing case {}", args.id),
        review_case(&ctx.client, &ctx.cache, &mut draft, args.id),
    )
    .await?;
    tracing::info!(id = args.id, status = %updated.validation_status, "case reviewed");
    output::note(
        &format!("case {} is now {}", args.id, updated.validation_status),
        flags.format,
        flags.quiet,
    );
    output::output_summary(&updated, &detail_pairs(&updated), flags)
}

#[cfg(test)]
mod tests {
    use rubli_core::entities::InvestigationCase;
    use rubli_core::enums::CaseValidationStatus;

    use super::detail_pairs;

    #[test]
    fn case_pairs_show_status_and_loss() {
        let case = InvestigationCase {
            id: 12,
            case_id: String::from("CASE-012"),
            title: String::from("Overpriced medicine"),
            case_type: String::from("overpricing"),
            sector_id: Some(1),
            sector_name: None,
            suspicion_score: 0.875,
            estimated_loss_mxn: Some(4.2e8),
            total_value_mxn: 1.1e9,
            vendor_count: 3,
            summary: None,
            validation_status: CaseValidationStatus::Corroborated,
            review_notes: None,
            created_at: None,
        };
        let pairs = detail_pairs(&case);
        assert!(pairs.contains(&("status", String::from("corroborated"))));
        assert!(pairs.contains(&("estimated loss", String::from("$420.0M"))));
        assert!(pairs.contains(&("suspicion", String::from("87.5%"))));
        assert!(pairs.contains(&("sector", String::from("-"))));
    }
}
