use rubli_client::hypotheses::HypothesisFilters;
use rubli_core::entities::PriceHypothesis;
use rubli_core::format::{format_compact_mxn, format_risk_percent};
use rubli_state::{Collection, PageState, QueryKey, review_hypothesis};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::{HypothesisCommands, HypothesisReviewArgs, PageArgs};
use crate::commands::shared::fetch::{fetch_page, load, per_page};
use crate::commands::shared::parse::parse_opt;
use crate::commands::shared::review::draft_from;
use crate::context::AppContext;
use crate::output;
use crate::progress::with_spinner;

/// Handle `rubli hypotheses`.
pub async fn handle(
    action: &HypothesisCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        HypothesisCommands::List {
            confidence,
            hypothesis_type,
            sector,
            pending,
            reviewed,
            page,
        } => {
            let filters = HypothesisFilters {
                confidence_level: parse_opt(confidence.as_deref(), "confidence level")?,
                hypothesis_type: hypothesis_type.clone(),
                sector_id: *sector,
                is_reviewed: review_filter(*pending, *reviewed),
                ..HypothesisFilters::default()
            };
            list(filters, page, ctx, flags).await
        }
        HypothesisCommands::Get { id } => {
            let key = QueryKey::new(Collection::Hypotheses).with("detail").with(id.as_str());
            let hypothesis = load(ctx, &key, &format!("hypothesis {id}"), || {
                ctx.client.get_hypothesis(id)
            })
            .await?;
            output::output_summary(hypothesis.as_ref(), &detail_pairs(&hypothesis), flags)?;
            if flags.format == OutputFormat::Table && !hypothesis.supporting_evidence.is_empty() {
                output::heading("Evidence", flags);
                output::output(&hypothesis.supporting_evidence, flags.format)?;
            }
            Ok(())
        }
        HypothesisCommands::Review(args) => review(args, ctx, flags).await,
    }
}

/// `--pending` and `--reviewed` are mutually exclusive; neither means all.
const fn review_filter(pending: bool, reviewed: bool) -> Option<bool> {
    if pending {
        Some(false)
    } else if reviewed {
        Some(true)
    } else {
        None
    }
}

async fn list(
    filters: HypothesisFilters,
    page: &PageArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut state = PageState::new(
        Collection::Hypotheses,
        filters,
        per_page(page.per_page, flags, ctx),
        "confidence",
    );
    let base = state.filters().clone();
    let client = &ctx.client;
    let response = fetch_page(ctx, &mut state, page.page, "hypotheses", move |page, per_page| {
        let request = HypothesisFilters {
            page: Some(page),
            per_page: Some(per_page),
            ..base.clone()
        };
        async move { client.list_hypotheses(&request).await }
    })
    .await?;
    output::output_page(&response, state.pagination(), flags)
}

fn detail_pairs(hypothesis: &PriceHypothesis) -> Vec<(&'static str, String)> {
    vec![
        ("id", hypothesis.hypothesis_id.clone()),
        ("contract", hypothesis.contract_id.to_string()),
        ("type", hypothesis.hypothesis_type.clone()),
        (
            "confidence",
            format!(
                "{} ({})",
                format_risk_percent(hypothesis.confidence),
                hypothesis.confidence_level
            ),
        ),
        (
            "amount",
            hypothesis
                .amount_mxn
                .map_or_else(|| String::from("-"), format_compact_mxn),
        ),
        ("status", hypothesis.review_status().to_string()),
        (
            "notes",
            hypothesis.review_notes.clone().unwrap_or_else(|| String::from("-")),
        ),
        ("explanation", hypothesis.explanation.clone()),
    ]
}

async fn review(
    args: &HypothesisReviewArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut draft = draft_from(&args.judgment)?;
    let status = draft.pending_status();
    let key = QueryKey::new(Collection::Hypotheses).with("detail").with(args.id.as_str());
    let current = load(ctx, &key, &format!("hypothesis {}", args.id), || {
        ctx.client.get_hypothesis(&args.id)
    })
    .await?;
    current.check_review(status)?;

    let updated = with_spinner(
        &format!("reviewing hypothesis {}", args.id),
        review_hypothesis(&ctx.client, &ctx.cache, &mut draft, &args.id),
    )
    .await?;
    tracing::info!(id = %args.id, %status, "hypothesis reviewed");
    output::note(
        &format!("hypothesis {} marked {status}", args.id),
        flags.format,
        flags.quiet,
    );
    output::output_summary(&updated, &detail_pairs(&updated), flags)
}
