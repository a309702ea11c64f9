//! Cross-cutting analysis endpoints: money flow, categories, trends.

use rubli_core::entities::CategoryStat;
use rubli_core::responses::{ListResponse, MoneyFlowResponse, RiskDistributionItem, YearStat};
use serde::Serialize;

use crate::{ApiClient, ClientError, QueryParams};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MoneyFlowParams {
    pub year: Option<i32>,
    pub sector_id: Option<i64>,
    pub limit: Option<u32>,
    pub min_value: Option<f64>,
}

/// Year and sector scope shared by several analysis endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisScope {
    pub year: Option<i32>,
    pub sector_id: Option<i64>,
}

impl ApiClient {
    /// Aggregated source → target flows.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn money_flow(
        &self,
        params: &MoneyFlowParams,
    ) -> Result<MoneyFlowResponse, ClientError> {
        let query = QueryParams::from_serialize(params)?;
        self.get_json("/analysis/money-flow", &query).await
    }

    /// Category-level spending rows.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn category_summary(
        &self,
        scope: &AnalysisScope,
    ) -> Result<ListResponse<CategoryStat>, ClientError> {
        let query = QueryParams::from_serialize(scope)?;
        self.get_json("/categories/summary", &query).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn year_over_year(
        &self,
        sector_id: Option<i64>,
    ) -> Result<ListResponse<YearStat>, ClientError> {
        let query = QueryParams::new().with("sector_id", sector_id);
        self.get_json("/analysis/year-over-year", &query).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn risk_distribution(
        &self,
        scope: &AnalysisScope,
    ) -> Result<ListResponse<RiskDistributionItem>, ClientError> {
        let query = QueryParams::from_serialize(scope)?;
        self.get_json("/analysis/risk-distribution", &query).await
    }
}
