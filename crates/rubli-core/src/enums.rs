//! Entity kinds, risk levels, and workflow status enums for RUBLI.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`,
//! matching the field values the analytics API emits. Review-style enums
//! provide `allowed_next_states()` so the client can reject transitions the
//! backend would refuse.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// EntityType
// ---------------------------------------------------------------------------

/// Kind of dimension entity referenced by flows, graph nodes, and watchlists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Institution,
    Vendor,
    Sector,
    Contract,
    Category,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Institution => "institution",
            Self::Vendor => "vendor",
            Self::Sector => "sector",
            Self::Contract => "contract",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Bucketed risk level assigned by the backend scoring model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Lower bound (inclusive) of the score range mapped to this level.
    #[must_use]
    pub const fn lower_bound(self) -> f64 {
        match self {
            Self::Low => 0.0,
            Self::Medium => 0.1,
            Self::High => 0.3,
            Self::Critical => 0.5,
        }
    }

    /// Map a `[0,1]` score to its level.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= Self::Critical.lower_bound() {
            Self::Critical
        } else if score >= Self::High.lower_bound() {
            Self::High
        } else if score >= Self::Medium.lower_bound() {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ConfidenceLevel
// ---------------------------------------------------------------------------

/// Confidence attached to a price hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    VeryHigh,
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryHigh => "very_high",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReviewStatus
// ---------------------------------------------------------------------------

/// Analyst review lifecycle shared by hypotheses and investigation cases.
///
/// ```text
/// pending → valid
///         → dismissed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Pending,
    Valid,
    Dismissed,
}

impl ReviewStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Valid, Self::Dismissed],
            Self::Valid | Self::Dismissed => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Status reached by a review carrying the given judgment.
    #[must_use]
    pub const fn from_judgment(is_valid: bool) -> Self {
        if is_valid { Self::Valid } else { Self::Dismissed }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Valid => "valid",
            Self::Dismissed => "dismissed",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CaseValidationStatus
// ---------------------------------------------------------------------------

/// Validation status stored on an investigation case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CaseValidationStatus {
    Pending,
    Corroborated,
    Confirmed,
    Dismissed,
}

impl CaseValidationStatus {
    /// Collapse onto the shared review lifecycle.
    #[must_use]
    pub const fn review_status(self) -> ReviewStatus {
        match self {
            Self::Pending => ReviewStatus::Pending,
            Self::Corroborated | Self::Confirmed => ReviewStatus::Valid,
            Self::Dismissed => ReviewStatus::Dismissed,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Corroborated => "corroborated",
            Self::Confirmed => "confirmed",
            Self::Dismissed => "dismissed",
        }
    }
}

impl fmt::Display for CaseValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WatchlistPriority / WatchlistStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WatchlistPriority {
    High,
    Medium,
    Low,
}

impl WatchlistPriority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for WatchlistPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of a watchlist entry.
///
/// ```text
/// watching → investigating → resolved
///          → resolved
/// resolved → watching (reopened)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WatchlistStatus {
    Watching,
    Investigating,
    Resolved,
}

impl WatchlistStatus {
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Watching => &[Self::Investigating, Self::Resolved],
            Self::Investigating => &[Self::Watching, Self::Resolved],
            Self::Resolved => &[Self::Watching],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Watching => "watching",
            Self::Investigating => "investigating",
            Self::Resolved => "resolved",
        }
    }
}

impl fmt::Display for WatchlistStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DossierStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DossierStatus {
    Active,
    Archived,
    Closed,
}

impl DossierStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for DossierStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FeedbackType
// ---------------------------------------------------------------------------

/// Analyst feedback on an entity's risk assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackType {
    NotSuspicious,
    ConfirmedSuspicious,
    NeedsReview,
}

impl FeedbackType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotSuspicious => "not_suspicious",
            Self::ConfirmedSuspicious => "confirmed_suspicious",
            Self::NeedsReview => "needs_review",
        }
    }
}

impl fmt::Display for FeedbackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SortOrder
// ---------------------------------------------------------------------------

/// Sort direction as sent in `sort_order` query parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_type_serializes_snake_case() {
        let json = serde_json::to_string(&EntityType::Institution).unwrap();
        assert_eq!(json, "\"institution\"");
        let parsed: EntityType = serde_json::from_str("\"vendor\"").unwrap();
        assert_eq!(parsed, EntityType::Vendor);
    }

    #[test]
    fn risk_level_from_score_uses_lower_bounds() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(0.099), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(0.1), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(0.3), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(0.5), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(1.0), RiskLevel::Critical);
    }

    #[test]
    fn review_status_transitions() {
        assert!(ReviewStatus::Pending.can_transition_to(ReviewStatus::Valid));
        assert!(ReviewStatus::Pending.can_transition_to(ReviewStatus::Dismissed));
        assert!(!ReviewStatus::Valid.can_transition_to(ReviewStatus::Dismissed));
        assert!(!ReviewStatus::Dismissed.can_transition_to(ReviewStatus::Pending));
    }

    #[test]
    fn review_status_from_judgment() {
        assert_eq!(ReviewStatus::from_judgment(true), ReviewStatus::Valid);
        assert_eq!(ReviewStatus::from_judgment(false), ReviewStatus::Dismissed);
    }

    #[test]
    fn case_status_collapses_to_review_status() {
        assert_eq!(
            CaseValidationStatus::Corroborated.review_status(),
            ReviewStatus::Valid
        );
        assert_eq!(
            CaseValidationStatus::Pending.review_status(),
            ReviewStatus::Pending
        );
    }

    #[test]
    fn watchlist_resolved_can_only_reopen() {
        assert_eq!(
            WatchlistStatus::Resolved.allowed_next_states(),
            &[WatchlistStatus::Watching]
        );
        assert!(WatchlistStatus::Watching.can_transition_to(WatchlistStatus::Investigating));
    }

    #[test]
    fn sort_order_flips_and_defaults_desc() {
        assert_eq!(SortOrder::default(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.flipped(), SortOrder::Asc);
        assert_eq!(SortOrder::Asc.flipped(), SortOrder::Desc);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(FeedbackType::NeedsReview.to_string(), "needs_review");
        assert_eq!(ConfidenceLevel::VeryHigh.to_string(), "very_high");
        assert_eq!(DossierStatus::Archived.to_string(), "archived");
        assert_eq!(WatchlistPriority::High.to_string(), "high");
    }
}
