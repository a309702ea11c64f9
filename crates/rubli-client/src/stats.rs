//! Dashboard statistics.

use rubli_core::responses::DashboardStats;

use crate::{ApiClient, ClientError, QueryParams};

impl ApiClient {
    /// Headline numbers for the landing dashboard.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ClientError> {
        self.get_json("/stats/dashboard", &QueryParams::new()).await
    }
}
