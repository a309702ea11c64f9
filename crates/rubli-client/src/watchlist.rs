//! Watchlist endpoints.

use reqwest::Method;
use rubli_core::entities::{WatchlistCreate, WatchlistItem, WatchlistUpdate};
use rubli_core::enums::{EntityType, WatchlistPriority, WatchlistStatus};
use rubli_core::responses::{DeleteResponse, ListResponse, WatchlistStats};
use serde::Serialize;

use crate::{ApiClient, ClientError, QueryParams};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WatchlistFilters {
    pub item_type: Option<EntityType>,
    pub status: Option<WatchlistStatus>,
    pub priority: Option<WatchlistPriority>,
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn list_watchlist(
        &self,
        filters: &WatchlistFilters,
    ) -> Result<ListResponse<WatchlistItem>, ClientError> {
        let query = QueryParams::from_serialize(filters)?;
        self.get_json("/watchlist", &query).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn watchlist_stats(&self) -> Result<WatchlistStats, ClientError> {
        self.get_json("/watchlist/stats", &QueryParams::new()).await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn add_to_watchlist(
        &self,
        item: &WatchlistCreate,
    ) -> Result<WatchlistItem, ClientError> {
        self.send_json(Method::POST, "/watchlist", Some(item)).await
    }

    /// Apply a partial update. Sending the same update twice is harmless.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn update_watchlist_item(
        &self,
        id: i64,
        update: &WatchlistUpdate,
    ) -> Result<WatchlistItem, ClientError> {
        self.send_json(Method::PATCH, &format!("/watchlist/{id}"), Some(update))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails or the body does not parse.
    pub async fn remove_from_watchlist(&self, id: i64) -> Result<DeleteResponse, ClientError> {
        self.send_json::<(), _>(Method::DELETE, &format!("/watchlist/{id}"), None)
            .await
    }
}
