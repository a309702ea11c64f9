//! Binary exports. These endpoints return file bytes, not JSON.

use crate::contracts::ContractFilters;
use crate::vendors::VendorFilters;
use crate::{ApiClient, ClientError, ExportFile, QueryParams};

impl ApiClient {
    /// Contracts matching `filters` as CSV.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body cannot be read.
    pub async fn export_contracts_csv(
        &self,
        filters: &ContractFilters,
    ) -> Result<ExportFile, ClientError> {
        let query = QueryParams::from_serialize(filters)?;
        self.get_bytes("/export/contracts/csv", &query).await
    }

    /// Vendors matching `filters` as an Excel workbook.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body cannot be read.
    pub async fn export_vendors_excel(
        &self,
        filters: &VendorFilters,
    ) -> Result<ExportFile, ClientError> {
        let query = QueryParams::from_serialize(filters)?;
        self.get_bytes("/export/vendors/excel", &query).await
    }
}
