//! Contract endpoints.

use rubli_core::entities::{ContractDetail, ContractListItem};
use rubli_core::enums::{RiskLevel, SortOrder};
use rubli_core::responses::{ContractStatistics, PaginatedResponse};
use serde::Serialize;

use crate::{ApiClient, ClientError, QueryParams};

/// Filters accepted by `GET /contracts` and the contract CSV export.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContractFilters {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub sector_id: Option<i64>,
    pub year: Option<i32>,
    pub vendor_id: Option<i64>,
    pub institution_id: Option<i64>,
    pub risk_level: Option<RiskLevel>,
    pub is_direct_award: Option<bool>,
    pub is_single_bid: Option<bool>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

/// Scope for `GET /contracts/statistics`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatisticsScope {
    pub sector_id: Option<i64>,
    pub year: Option<i32>,
}

impl ApiClient {
    /// One page of contracts matching `filters`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn list_contracts(
        &self,
        filters: &ContractFilters,
    ) -> Result<PaginatedResponse<ContractListItem>, ClientError> {
        let query = QueryParams::from_serialize(filters)?;
        self.get_json("/contracts", &query).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Api`] with status 404 for an unknown id.
    pub async fn get_contract(&self, id: i64) -> Result<ContractDetail, ClientError> {
        self.get_json(&format!("/contracts/{id}"), &QueryParams::new())
            .await
    }

    /// Aggregate contract statistics, optionally scoped to a sector or year.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn contract_statistics(
        &self,
        scope: &StatisticsScope,
    ) -> Result<ContractStatistics, ClientError> {
        let query = QueryParams::from_serialize(scope)?;
        self.get_json("/contracts/statistics", &query).await
    }
}
