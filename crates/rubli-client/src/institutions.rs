//! Institution endpoints.

use rubli_core::entities::{InstitutionDetail, InstitutionListItem, InstitutionVendor};
use rubli_core::enums::SortOrder;
use rubli_core::responses::{ListResponse, PaginatedResponse};
use serde::Serialize;

use crate::{ApiClient, ClientError, QueryParams};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstitutionFilters {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub sector_id: Option<i64>,
    pub institution_type: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn list_institutions(
        &self,
        filters: &InstitutionFilters,
    ) -> Result<PaginatedResponse<InstitutionListItem>, ClientError> {
        let query = QueryParams::from_serialize(filters)?;
        self.get_json("/institutions", &query).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 for an unknown id.
    pub async fn get_institution(&self, id: i64) -> Result<InstitutionDetail, ClientError> {
        self.get_json(&format!("/institutions/{id}"), &QueryParams::new())
            .await
    }

    /// Vendors an institution buys from, largest first.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn institution_vendors(
        &self,
        id: i64,
        limit: Option<u32>,
    ) -> Result<ListResponse<InstitutionVendor>, ClientError> {
        let query = QueryParams::new().with("limit", limit);
        self.get_json(&format!("/institutions/{id}/vendors"), &query)
            .await
    }
}
