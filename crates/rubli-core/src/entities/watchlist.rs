use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{EntityType, WatchlistPriority, WatchlistStatus};
use crate::errors::CoreError;

/// An entity an analyst is tracking.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WatchlistItem {
    pub id: i64,
    pub item_type: EntityType,
    pub item_id: i64,
    pub item_name: String,
    pub reason: String,
    pub priority: WatchlistPriority,
    pub status: WatchlistStatus,
    pub notes: Option<String>,
    pub alert_threshold: Option<f64>,
    pub current_risk_score: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WatchlistCreate {
    pub item_type: EntityType,
    pub item_id: i64,
    pub item_name: String,
    pub reason: String,
    pub priority: WatchlistPriority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_threshold: Option<f64>,
}

/// Partial update; absent fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WatchlistUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WatchlistStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<WatchlistPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_threshold: Option<f64>,
}

impl WatchlistUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.priority.is_none()
            && self.notes.is_none()
            && self.alert_threshold.is_none()
    }
}

fn check_threshold(threshold: Option<f64>) -> Result<(), CoreError> {
    match threshold {
        Some(value) if !(0.0..=1.0).contains(&value) => Err(CoreError::Validation(format!(
            "alert threshold is a risk score in [0, 1], got {value}"
        ))),
        _ => Ok(()),
    }
}

impl WatchlistItem {
    /// Check a status change. Setting the current status again is a no-op
    /// and always allowed.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTransition`] for a move the status
    /// lifecycle does not allow.
    pub fn check_transition(&self, next: WatchlistStatus) -> Result<(), CoreError> {
        if self.status == next || self.status.can_transition_to(next) {
            return Ok(());
        }
        Err(CoreError::InvalidTransition {
            entity_type: String::from("watchlist item"),
            id: self.id.to_string(),
            from: self.status.to_string(),
            to: next.to_string(),
        })
    }
}

impl WatchlistCreate {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for a blank name or reason, or an
    /// alert threshold outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.item_name.trim().is_empty() {
            return Err(CoreError::Validation(String::from("item name is empty")));
        }
        if self.reason.trim().is_empty() {
            return Err(CoreError::Validation(String::from(
                "a watchlist entry needs a reason",
            )));
        }
        check_threshold(self.alert_threshold)
    }
}

impl WatchlistUpdate {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for an empty update or an alert
    /// threshold outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.is_empty() {
            return Err(CoreError::Validation(String::from(
                "nothing to update: set status, priority, notes, or alert threshold",
            )));
        }
        check_threshold(self.alert_threshold)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn item(status: WatchlistStatus) -> WatchlistItem {
        WatchlistItem {
            id: 4,
            item_type: EntityType::Vendor,
            item_id: 5,
            item_name: String::from("Farmacos SA"),
            reason: String::from("price anomalies"),
            priority: WatchlistPriority::High,
            status,
            notes: None,
            alert_threshold: Some(0.5),
            current_risk_score: Some(0.6),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn resolved_items_only_reopen() {
        let resolved = item(WatchlistStatus::Resolved);
        assert!(resolved.check_transition(WatchlistStatus::Watching).is_ok());
        assert!(resolved.check_transition(WatchlistStatus::Resolved).is_ok());
        let err = resolved
            .check_transition(WatchlistStatus::Investigating)
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidTransition { .. }));
    }

    #[test]
    fn create_rejects_blank_reason_and_bad_threshold() {
        let mut create = WatchlistCreate {
            item_type: EntityType::Vendor,
            item_id: 5,
            item_name: String::from("Farmacos SA"),
            reason: String::from("  "),
            priority: WatchlistPriority::Medium,
            notes: None,
            alert_threshold: None,
        };
        assert!(create.validate().is_err());
        create.reason = String::from("single-bid streak");
        assert!(create.validate().is_ok());
        create.alert_threshold = Some(35.0);
        assert!(matches!(create.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn empty_update_is_rejected() {
        assert!(WatchlistUpdate::default().validate().is_err());
        let update = WatchlistUpdate {
            priority: Some(WatchlistPriority::Low),
            ..WatchlistUpdate::default()
        };
        assert!(update.validate().is_ok());
    }
}
