//! Sector endpoints.

use rubli_core::entities::{Sector, SectorRiskDistribution};
use rubli_core::responses::ListResponse;

use crate::{ApiClient, ClientError, QueryParams};

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn list_sectors(&self) -> Result<ListResponse<Sector>, ClientError> {
        self.get_json("/sectors", &QueryParams::new()).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 for an unknown id.
    pub async fn get_sector(&self, id: i64) -> Result<Sector, ClientError> {
        self.get_json(&format!("/sectors/{id}"), &QueryParams::new())
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn sector_risk_distribution(
        &self,
        id: i64,
        year: Option<i32>,
    ) -> Result<SectorRiskDistribution, ClientError> {
        let query = QueryParams::new().with("year", year);
        self.get_json(&format!("/sectors/{id}/risk-distribution"), &query)
            .await
    }
}
