//! Vendor endpoints.

use rubli_core::entities::{ContractListItem, VendorDetail, VendorListItem};
use rubli_core::enums::{RiskLevel, SortOrder};
use rubli_core::responses::{ListResponse, PaginatedResponse};
use serde::Serialize;

use crate::{ApiClient, ClientError, QueryParams};

/// Filters accepted by `GET /vendors` and the vendor Excel export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VendorFilters {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub sector_id: Option<i64>,
    pub min_contracts: Option<u32>,
    pub risk_level: Option<RiskLevel>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

/// Ranking metric for `GET /vendors/top`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TopVendorMetric {
    #[default]
    Value,
    Count,
    Risk,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TopVendorsParams {
    pub by: Option<TopVendorMetric>,
    pub limit: Option<u32>,
    pub sector_id: Option<i64>,
    pub year: Option<i32>,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn list_vendors(
        &self,
        filters: &VendorFilters,
    ) -> Result<PaginatedResponse<VendorListItem>, ClientError> {
        let query = QueryParams::from_serialize(filters)?;
        self.get_json("/vendors", &query).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 for an unknown id.
    pub async fn get_vendor(&self, id: i64) -> Result<VendorDetail, ClientError> {
        self.get_json(&format!("/vendors/{id}"), &QueryParams::new())
            .await
    }

    /// Contracts awarded to one vendor, paginated.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn vendor_contracts(
        &self,
        id: i64,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> Result<PaginatedResponse<ContractListItem>, ClientError> {
        let query = QueryParams::new()
            .with("page", page)
            .with("per_page", per_page);
        self.get_json(&format!("/vendors/{id}/contracts"), &query)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn top_vendors(
        &self,
        params: &TopVendorsParams,
    ) -> Result<ListResponse<VendorListItem>, ClientError> {
        let query = QueryParams::from_serialize(params)?;
        self.get_json("/vendors/top", &query).await
    }
}
