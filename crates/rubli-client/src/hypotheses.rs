//! Price hypotheses and their review.

use reqwest::Method;
use rubli_core::entities::{PriceHypothesis, ReviewRequest};
use rubli_core::enums::ConfidenceLevel;
use rubli_core::responses::PaginatedResponse;
use serde::Serialize;

use crate::{ApiClient, ClientError, QueryParams};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HypothesisFilters {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub confidence_level: Option<ConfidenceLevel>,
    pub hypothesis_type: Option<String>,
    pub sector_id: Option<i64>,
    pub is_reviewed: Option<bool>,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn list_hypotheses(
        &self,
        filters: &HypothesisFilters,
    ) -> Result<PaginatedResponse<PriceHypothesis>, ClientError> {
        let query = QueryParams::from_serialize(filters)?;
        self.get_json("/analysis/price-hypotheses", &query).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 for an unknown id.
    pub async fn get_hypothesis(&self, id: &str) -> Result<PriceHypothesis, ClientError> {
        let path = format!("/analysis/price-hypotheses/{}", urlencoding::encode(id));
        self.get_json(&path, &QueryParams::new()).await
    }

    /// Record an analyst's judgment on a hypothesis. Returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn review_hypothesis(
        &self,
        id: &str,
        review: &ReviewRequest,
    ) -> Result<PriceHypothesis, ClientError> {
        let path = format!(
            "/analysis/price-hypotheses/{}/review",
            urlencoding::encode(id)
        );
        self.send_json(Method::PUT, &path, Some(review)).await
    }
}
