//! Vendor/institution network graph.

use rubli_core::entities::NetworkGraph;
use serde::Serialize;

use crate::{ApiClient, ClientError, QueryParams};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NetworkParams {
    pub year: Option<i32>,
    pub sector_id: Option<i64>,
    pub vendor_id: Option<i64>,
    pub institution_id: Option<i64>,
    pub min_value: Option<f64>,
    pub limit: Option<u32>,
    pub depth: Option<u8>,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn network_graph(&self, params: &NetworkParams) -> Result<NetworkGraph, ClientError> {
        let query = QueryParams::from_serialize(params)?;
        self.get_json("/network/graph", &query).await
    }
}
