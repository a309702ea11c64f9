//! Write workflows for watchlist, dossiers and risk feedback.
//!
//! Every write goes through [`invalidate_on_success`]: the server response
//! is returned as-is and the affected collections are invalidated. Nothing is
//! applied to cached data before or after the write.

use std::fmt;
use std::future::Future;

use rubli_client::{ApiClient, ClientError};
use rubli_core::entities::{
    Dossier, DossierCreate, DossierItem, DossierItemCreate, DossierUpdate, FeedbackReceipt,
    RiskFeedback, WatchlistCreate, WatchlistItem, WatchlistUpdate,
};
use rubli_core::responses::DeleteResponse;

use crate::query::{Collection, QueryCache};

/// Await `write`; if it succeeds invalidate each of `collections`.
///
/// # Errors
///
/// Returns the error from `write` unchanged. The cache is left untouched.
pub async fn invalidate_on_success<T, E, Fut>(
    cache: &QueryCache,
    collections: &[Collection],
    write: Fut,
) -> Result<T, E>
where
    E: fmt::Display,
    Fut: Future<Output = Result<T, E>>,
{
    match write.await {
        Ok(value) => {
            for collection in collections {
                let invalidated = cache.invalidate(*collection);
                tracing::debug!(%collection, invalidated, "mutation invalidated queries");
            }
            Ok(value)
        }
        Err(error) => {
            tracing::warn!(%error, "mutation failed, cache untouched");
            Err(error)
        }
    }
}

/// Client and cache bundled for write calls.
#[derive(Debug, Clone, Copy)]
pub struct Mutations<'a> {
    client: &'a ApiClient,
    cache: &'a QueryCache,
}

impl<'a> Mutations<'a> {
    #[must_use]
    pub const fn new(client: &'a ApiClient, cache: &'a QueryCache) -> Self {
        Self { client, cache }
    }

    /// # Errors
    ///
    /// Returns the client error unchanged.
    pub async fn add_to_watchlist(
        &self,
        item: &WatchlistCreate,
    ) -> Result<WatchlistItem, ClientError> {
        invalidate_on_success(
            self.cache,
            &[Collection::Watchlist],
            self.client.add_to_watchlist(item),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns the client error unchanged.
    pub async fn update_watchlist_item(
        &self,
        id: i64,
        update: &WatchlistUpdate,
    ) -> Result<WatchlistItem, ClientError> {
        invalidate_on_success(
            self.cache,
            &[Collection::Watchlist],
            self.client.update_watchlist_item(id, update),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns the client error unchanged.
    pub async fn remove_from_watchlist(&self, id: i64) -> Result<DeleteResponse, ClientError> {
        invalidate_on_success(
            self.cache,
            &[Collection::Watchlist],
            self.client.remove_from_watchlist(id),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns the client error unchanged.
    pub async fn create_dossier(&self, dossier: &DossierCreate) -> Result<Dossier, ClientError> {
        invalidate_on_success(
            self.cache,
            &[Collection::Dossiers],
            self.client.create_dossier(dossier),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns the client error unchanged.
    pub async fn update_dossier(
        &self,
        id: i64,
        update: &DossierUpdate,
    ) -> Result<Dossier, ClientError> {
        invalidate_on_success(
            self.cache,
            &[Collection::Dossiers],
            self.client.update_dossier(id, update),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns the client error unchanged.
    pub async fn delete_dossier(&self, id: i64) -> Result<DeleteResponse, ClientError> {
        invalidate_on_success(
            self.cache,
            &[Collection::Dossiers],
            self.client.delete_dossier(id),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns the client error unchanged.
    pub async fn add_dossier_item(
        &self,
        dossier_id: i64,
        item: &DossierItemCreate,
    ) -> Result<DossierItem, ClientError> {
        invalidate_on_success(
            self.cache,
            &[Collection::Dossiers],
            self.client.add_dossier_item(dossier_id, item),
        )
        .await
    }

    /// # Errors
    ///
    /// Returns the client error unchanged.
    pub async fn remove_dossier_item(
        &self,
        dossier_id: i64,
        item_id: i64,
    ) -> Result<DeleteResponse, ClientError> {
        invalidate_on_success(
            self.cache,
            &[Collection::Dossiers],
            self.client.remove_dossier_item(dossier_id, item_id),
        )
        .await
    }

    /// Feedback also invalidates the rated entity's collection, since its
    /// risk view may change.
    ///
    /// # Errors
    ///
    /// Returns the client error unchanged.
    pub async fn submit_feedback(
        &self,
        feedback: &RiskFeedback,
    ) -> Result<FeedbackReceipt, ClientError> {
        invalidate_on_success(
            self.cache,
            &[
                Collection::Feedback,
                Collection::for_entity(feedback.entity_type),
            ],
            self.client.submit_feedback(feedback),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::query::QueryKey;

    fn seed(cache: &QueryCache, key: &QueryKey) {
        let ticket = cache.begin(key);
        cache.complete(&ticket, Ok(Arc::new(0_u8)));
    }

    #[tokio::test]
    async fn success_invalidates_only_named_collections() {
        let cache = QueryCache::new();
        let watch = QueryKey::new(Collection::Watchlist).with("list");
        let stats = QueryKey::new(Collection::Watchlist).with("stats");
        let dossiers = QueryKey::new(Collection::Dossiers).with("list");
        for key in [&watch, &stats, &dossiers] {
            seed(&cache, key);
        }

        let out = invalidate_on_success(&cache, &[Collection::Watchlist], async {
            Ok::<_, String>(5)
        })
        .await
        .unwrap();

        assert_eq!(out, 5);
        assert!(cache.needs_fetch(&watch));
        assert!(cache.needs_fetch(&stats));
        assert!(!cache.needs_fetch(&dossiers));
    }

    #[tokio::test]
    async fn failure_leaves_cache_alone() {
        let cache = QueryCache::new();
        let watch = QueryKey::new(Collection::Watchlist).with("list");
        seed(&cache, &watch);

        let err = invalidate_on_success(&cache, &[Collection::Watchlist], async {
            Err::<(), _>("timeout".to_string())
        })
        .await
        .unwrap_err();

        assert_eq!(err, "timeout");
        assert!(!cache.needs_fetch(&watch));
    }
}
