//! Analyst review of hypotheses and investigation cases.
//!
//! A [`ReviewDraft`] holds the pending judgment and notes. It is cleared only
//! after the server accepts the review; a failed submission leaves it intact
//! so the analyst can retry without re-entering anything.

use std::future::Future;

use rubli_client::{ApiClient, ClientError};
use rubli_core::entities::{InvestigationCase, PriceHypothesis, ReviewRequest};
use rubli_core::enums::ReviewStatus;

use crate::error::ReviewError;
use crate::query::{Collection, QueryCache};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    judgment: Option<bool>,
    notes: String,
    submitting: bool,
}

impl ReviewDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` marks the item valid, `false` dismisses it.
    pub const fn set_judgment(&mut self, is_valid: bool) {
        self.judgment = Some(is_valid);
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    #[must_use]
    pub const fn judgment(&self) -> Option<bool> {
        self.judgment
    }

    /// Status the item will have once this draft is accepted.
    #[must_use]
    pub fn pending_status(&self) -> ReviewStatus {
        self.judgment
            .map_or(ReviewStatus::Pending, ReviewStatus::from_judgment)
    }

    #[must_use]
    pub fn notes(&self) -> &str {
        &self.notes
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.judgment.is_none() && self.notes.is_empty()
    }

    /// Request body for this draft. Blank notes are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::MissingJudgment`] if no judgment has been set.
    pub fn request(&self) -> Result<ReviewRequest, ReviewError> {
        let is_valid = self.judgment.ok_or(ReviewError::MissingJudgment)?;
        let notes = self.notes.trim();
        Ok(ReviewRequest {
            is_valid,
            review_notes: (!notes.is_empty()).then(|| notes.to_string()),
        })
    }

    /// Start a submission: validates the draft and sets the submitting flag.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::AlreadySubmitting`] while a previous submission
    /// is unresolved, or [`ReviewError::MissingJudgment`].
    pub fn begin(&mut self) -> Result<ReviewRequest, ReviewError> {
        if self.submitting {
            return Err(ReviewError::AlreadySubmitting);
        }
        let request = self.request()?;
        self.submitting = true;
        Ok(request)
    }

    /// Settle a submission started with [`Self::begin`].
    ///
    /// On success every cached query in `collection` is invalidated and the
    /// draft is cleared. On failure only the submitting flag is reset.
    ///
    /// # Errors
    ///
    /// Returns the client error as [`ReviewError::Client`].
    pub fn finish<T>(
        &mut self,
        cache: &QueryCache,
        collection: Collection,
        result: Result<T, ClientError>,
    ) -> Result<T, ReviewError> {
        self.submitting = false;
        match result {
            Ok(value) => {
                let invalidated = cache.invalidate(collection);
                tracing::debug!(%collection, invalidated, "review accepted");
                *self = Self::default();
                Ok(value)
            }
            Err(error) => {
                tracing::warn!(%collection, %error, "review rejected, draft kept");
                Err(error.into())
            }
        }
    }

    /// [`Self::begin`], send, [`Self::finish`].
    ///
    /// # Errors
    ///
    /// See [`Self::begin`] and [`Self::finish`].
    pub async fn submit<T, F, Fut>(
        &mut self,
        cache: &QueryCache,
        collection: Collection,
        send: F,
    ) -> Result<T, ReviewError>
    where
        F: FnOnce(ReviewRequest) -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        let request = self.begin()?;
        let guard = Submitting(self);
        let result = send(request).await;
        guard.0.finish(cache, collection, result)
    }
}

/// Clears the submitting flag if a [`ReviewDraft::submit`] future is dropped
/// before the send resolves.
struct Submitting<'a>(&'a mut ReviewDraft);

impl Drop for Submitting<'_> {
    fn drop(&mut self) {
        self.0.submitting = false;
    }
}

/// Submit `draft` as the review of price hypothesis `id`.
///
/// # Errors
///
/// See [`ReviewDraft::submit`].
pub async fn review_hypothesis(
    client: &ApiClient,
    cache: &QueryCache,
    draft: &mut ReviewDraft,
    id: &str,
) -> Result<PriceHypothesis, ReviewError> {
    draft
        .submit(cache, Collection::Hypotheses, |request| async move {
            client.review_hypothesis(id, &request).await
        })
        .await
}

/// Submit `draft` as the review of investigation case `id`.
///
/// # Errors
///
/// See [`ReviewDraft::submit`].
pub async fn review_case(
    client: &ApiClient,
    cache: &QueryCache,
    draft: &mut ReviewDraft,
    id: i64,
) -> Result<InvestigationCase, ReviewError> {
    draft
        .submit(cache, Collection::Cases, |request| async move {
            client.review_case(id, &request).await
        })
        .await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::query::QueryKey;

    fn seeded_cache() -> (QueryCache, QueryKey) {
        let cache = QueryCache::new();
        let key = QueryKey::new(Collection::Hypotheses).with("list");
        let ticket = cache.begin(&key);
        cache.complete(&ticket, Ok(Arc::new(1_u32)));
        (cache, key)
    }

    #[test]
    fn request_requires_judgment() {
        let mut draft = ReviewDraft::new();
        draft.set_notes("looks fine");
        assert!(matches!(draft.request(), Err(ReviewError::MissingJudgment)));
        assert_eq!(draft.pending_status(), ReviewStatus::Pending);
    }

    #[test]
    fn blank_notes_are_omitted() {
        let mut draft = ReviewDraft::new();
        draft.set_judgment(false);
        draft.set_notes("   ");
        let request = draft.request().unwrap();
        assert!(!request.is_valid);
        assert_eq!(request.review_notes, None);
        assert_eq!(draft.pending_status(), ReviewStatus::Dismissed);
    }

    #[test]
    fn begin_twice_is_rejected() {
        let mut draft = ReviewDraft::new();
        draft.set_judgment(true);
        draft.begin().unwrap();
        assert!(matches!(draft.begin(), Err(ReviewError::AlreadySubmitting)));
    }

    #[tokio::test]
    async fn success_clears_draft_and_invalidates_collection() {
        let (cache, key) = seeded_cache();
        let mut draft = ReviewDraft::new();
        draft.set_judgment(true);
        draft.set_notes("overpriced vs. catalog");

        let sent = draft
            .submit(&cache, Collection::Hypotheses, |request| async move {
                Ok::<_, ClientError>(request)
            })
            .await
            .unwrap();

        assert!(sent.is_valid);
        assert_eq!(sent.review_notes.as_deref(), Some("overpriced vs. catalog"));
        assert!(draft.is_empty());
        assert!(!draft.is_submitting());
        assert!(cache.needs_fetch(&key));
    }

    #[tokio::test]
    async fn cancelled_submit_releases_the_draft() {
        let cache = QueryCache::new();
        let mut draft = ReviewDraft::new();
        draft.set_judgment(true);
        draft.set_notes("pending");

        let submit = draft.submit(&cache, Collection::Cases, |_| {
            std::future::pending::<Result<(), ClientError>>()
        });
        let elapsed = tokio::time::timeout(std::time::Duration::from_millis(10), submit).await;
        assert!(elapsed.is_err());

        assert!(!draft.is_submitting());
        assert_eq!(draft.notes(), "pending");
        assert!(draft.begin().is_ok());
    }

    #[tokio::test]
    async fn failure_keeps_draft_and_cache() {
        let (cache, key) = seeded_cache();
        let mut draft = ReviewDraft::new();
        draft.set_judgment(false);
        draft.set_notes("duplicate");

        let err = draft
            .submit(&cache, Collection::Hypotheses, |_| async {
                Err::<(), _>(ClientError::Api {
                    status: 500,
                    message: "boom".into(),
                })
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ReviewError::Client(_)));
        assert_eq!(draft.judgment(), Some(false));
        assert_eq!(draft.notes(), "duplicate");
        assert!(!draft.is_submitting());
        assert!(!cache.needs_fetch(&key));
    }
}
