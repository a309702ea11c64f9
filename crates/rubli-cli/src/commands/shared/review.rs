use rubli_state::ReviewDraft;

use crate::cli::subcommands::JudgmentArgs;

/// Fill a review draft from `--valid` / `--dismiss` / `--notes`.
pub fn draft_from(args: &JudgmentArgs) -> anyhow::Result<ReviewDraft> {
    let Some(is_valid) = args.judgment() else {
        anyhow::bail!("pass --valid or --dismiss to record a review");
    };
    let mut draft = ReviewDraft::new();
    draft.set_judgment(is_valid);
    if let Some(notes) = &args.notes {
        draft.set_notes(notes.as_str());
    }
    Ok(draft)
}

#[cfg(test)]
mod tests {
    use rubli_core::enums::ReviewStatus;

    use super::draft_from;
    use crate::cli::subcommands::JudgmentArgs;

    #[test]
    fn judgment_is_required() {
        let args = JudgmentArgs {
            valid: false,
            dismiss: false,
            notes: Some(String::from("unclear")),
        };
        assert!(draft_from(&args).is_err());
    }

    #[test]
    fn dismissal_carries_notes() {
        let args = JudgmentArgs {
            valid: false,
            dismiss: true,
            notes: Some(String::from("market price")),
        };
        let draft = draft_from(&args).unwrap();
        assert_eq!(draft.pending_status(), ReviewStatus::Dismissed);
        assert_eq!(draft.notes(), "market price");
    }
}
