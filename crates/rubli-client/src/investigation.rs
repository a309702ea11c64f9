//! Investigation cases and their review.

use reqwest::Method;
use rubli_core::entities::{InvestigationCase, ReviewRequest};
use rubli_core::enums::CaseValidationStatus;
use rubli_core::responses::PaginatedResponse;
use serde::Serialize;

use crate::{ApiClient, ClientError, QueryParams};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CaseFilters {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub sector_id: Option<i64>,
    pub case_type: Option<String>,
    pub validation_status: Option<CaseValidationStatus>,
    pub min_score: Option<f64>,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn list_cases(
        &self,
        filters: &CaseFilters,
    ) -> Result<PaginatedResponse<InvestigationCase>, ClientError> {
        let query = QueryParams::from_serialize(filters)?;
        self.get_json("/investigation/cases", &query).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 for an unknown id.
    pub async fn get_case(&self, id: i64) -> Result<InvestigationCase, ClientError> {
        self.get_json(&format!("/investigation/cases/{id}"), &QueryParams::new())
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn review_case(
        &self,
        id: i64,
        review: &ReviewRequest,
    ) -> Result<InvestigationCase, ClientError> {
        self.send_json(
            Method::PUT,
            &format!("/investigation/cases/{id}/review"),
            Some(review),
        )
        .await
    }
}
