//! Analyst risk feedback.

use reqwest::Method;
use rubli_core::entities::{FeedbackReceipt, RiskFeedback};

use crate::{ApiClient, ClientError};

impl ApiClient {
    /// Submit feedback for an entity. The backend upserts on
    /// `(entity_type, entity_id)`, so resubmitting replaces the earlier value.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn submit_feedback(
        &self,
        feedback: &RiskFeedback,
    ) -> Result<FeedbackReceipt, ClientError> {
        self.send_json(Method::POST, "/feedback", Some(feedback)).await
    }
}
