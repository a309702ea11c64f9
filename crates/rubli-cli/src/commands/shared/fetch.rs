//! Reads go through the query cache, behind a spinner.

use std::sync::Arc;

use anyhow::Context;
use rubli_client::ClientError;
use rubli_core::responses::PaginatedResponse;
use rubli_state::{Collection, PageState, QueryKey};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::progress::with_spinner;

/// Page size: `--per-page`, then `--limit`, then `general.per_page`.
#[must_use]
pub fn per_page(local: Option<u32>, flags: &GlobalFlags, ctx: &AppContext) -> u32 {
    effective_limit(local, flags.limit, ctx.config.general.per_page)
}

/// Read `key` from the cache, fetching it if it is missing or stale.
pub async fn load<T, F, Fut>(
    ctx: &AppContext,
    key: &QueryKey,
    what: &str,
    fetch: F,
) -> anyhow::Result<Arc<T>>
where
    T: Send + Sync + 'static,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    with_spinner(&format!("loading {what}"), ctx.cache.get_or_fetch(key, fetch))
        .await
        .with_context(|| format!("failed to load {what}"))
}

/// Fetch page `requested` of a list. The server's row count is fed back into
/// `state`; a page past the end is clamped to the last page and fetched
/// again.
pub async fn fetch_page<F, S, T, Fetch, Fut>(
    ctx: &AppContext,
    state: &mut PageState<F, S>,
    requested: u32,
    what: &str,
    fetch: Fetch,
) -> anyhow::Result<Arc<PaginatedResponse<T>>>
where
    F: Serialize + PartialEq + Clone,
    S: Serialize + Copy + PartialEq,
    T: Send + Sync + 'static,
    Fetch: Fn(u32, u32) -> Fut,
    Fut: Future<Output = Result<PaginatedResponse<T>, ClientError>>,
{
    let per_page = state.pagination().per_page();
    let requested = requested.max(1);
    let response = load(ctx, &state.query_key_for(requested), what, || {
        fetch(requested, per_page)
    })
    .await?;

    state.apply_total(response.pagination.total);
    state.pagination_mut().go_to(requested);
    let page = state.pagination().page();
    if page == requested {
        return Ok(response);
    }

    tracing::warn!(
        requested,
        page,
        total_pages = state.pagination().total_pages(),
        "page out of range, showing the last page"
    );
    load(ctx, &state.query_key(), what, || fetch(page, per_page)).await
}

/// Cache key for an endpoint of `collection` called with `params`.
#[must_use]
pub fn params_key<P: Serialize>(collection: Collection, endpoint: &str, params: &P) -> QueryKey {
    QueryKey::new(collection)
        .with(endpoint)
        .with(serde_json::to_string(params).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use rubli_client::analysis::AnalysisScope;
    use rubli_client::contracts::ContractFilters;
    use rubli_config::{ApiConfig, RubliConfig};
    use rubli_state::{Collection, PageState};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::{fetch_page, params_key};
    use crate::context::AppContext;

    fn context_for(server: &MockServer) -> AppContext {
        AppContext::init(RubliConfig {
            api: ApiConfig {
                base_url: server.uri(),
                ..ApiConfig::default()
            },
            ..RubliConfig::default()
        })
        .expect("context should build")
    }

    fn contract_page(page: u32, rows: serde_json::Value) -> serde_json::Value {
        json!({
            "data": rows,
            "pagination": { "page": page, "per_page": 1, "total": 3, "total_pages": 3 }
        })
    }

    #[tokio::test]
    async fn past_the_end_page_is_clamped_and_refetched() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/contracts"))
            .and(query_param("page", "9"))
            .respond_with(ResponseTemplate::new(200).set_body_json(contract_page(9, json!([]))))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/contracts"))
            .and(query_param("page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(contract_page(
                3,
                json!([{ "id": 77, "amount_mxn": 1000.0 }]),
            )))
            .expect(1)
            .mount(&server)
            .await;

        let ctx = context_for(&server);
        let mut state = PageState::new(
            Collection::Contracts,
            ContractFilters::default(),
            1,
            "amount_mxn",
        );
        let client = &ctx.client;
        let response = fetch_page(&ctx, &mut state, 9, "contracts", |page, per_page| {
            let request = ContractFilters {
                page: Some(page),
                per_page: Some(per_page),
                ..ContractFilters::default()
            };
            async move { client.list_contracts(&request).await }
        })
        .await
        .expect("clamped page should load");

        assert_eq!(state.pagination().page(), 3);
        assert_eq!(state.pagination().total_pages(), 3);
        assert_eq!(response.data[0].id, 77);
    }

    #[test]
    fn params_shape_the_key() {
        let all = params_key(Collection::Analysis, "money-flow", &AnalysisScope::default());
        let scoped = params_key(
            Collection::Analysis,
            "money-flow",
            &AnalysisScope {
                year: Some(2023),
                sector_id: None,
            },
        );
        assert_ne!(all, scoped);
        assert!(scoped.has_prefix(&["analysis", "money-flow"]));
    }
}
