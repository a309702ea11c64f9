use rubli_core::entities::RiskFeedback;
use rubli_state::Mutations;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FeedbackArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output;
use crate::progress::with_spinner;

/// Handle `rubli feedback`.
pub async fn handle(args: &FeedbackArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let feedback = feedback_from(args)?;
    let receipt = with_spinner(
        "sending feedback",
        Mutations::new(&ctx.client, &ctx.cache).submit_feedback(&feedback),
    )
    .await?;
    tracing::info!(
        entity = %receipt.entity_type,
        id = receipt.entity_id,
        updated = receipt.updated,
        "feedback recorded"
    );
    let verb = if receipt.updated { "updated" } else { "recorded" };
    let pairs = vec![
        ("feedback", receipt.id.to_string()),
        ("entity", format!("{} {}", receipt.entity_type, receipt.entity_id)),
        ("type", receipt.feedback_type.to_string()),
        ("result", verb.to_string()),
    ];
    output::output_summary(&receipt, &pairs, flags)
}

fn feedback_from(args: &FeedbackArgs) -> anyhow::Result<RiskFeedback> {
    Ok(RiskFeedback {
        entity_type: parse_enum(&args.entity_type, "entity type")?,
        entity_id: args.id,
        feedback_type: parse_enum(&args.feedback_type, "feedback type")?,
        reason: args
            .reason
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use rubli_core::enums::{EntityType, FeedbackType};

    use super::feedback_from;
    use crate::cli::root_commands::FeedbackArgs;

    #[test]
    fn feedback_args_parse_into_request() {
        let feedback = feedback_from(&FeedbackArgs {
            entity_type: String::from("Vendor"),
            id: 42,
            feedback_type: String::from("confirmed-suspicious"),
            reason: Some(String::from(" ghost company ")),
        })
        .unwrap();
        assert_eq!(feedback.entity_type, EntityType::Vendor);
        assert_eq!(feedback.feedback_type, FeedbackType::ConfirmedSuspicious);
        assert_eq!(feedback.reason.as_deref(), Some("ghost company"));
    }

    #[test]
    fn unknown_feedback_type_is_rejected() {
        let err = feedback_from(&FeedbackArgs {
            entity_type: String::from("vendor"),
            id: 1,
            feedback_type: String::from("maybe"),
            reason: None,
        })
        .unwrap_err();
        assert!(err.to_string().contains("feedback type"));
    }
}
