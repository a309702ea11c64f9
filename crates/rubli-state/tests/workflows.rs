//! Review and mutation workflows against a mock API.

use pretty_assertions::assert_eq;
use rubli_client::ApiClient;
use rubli_client::contracts::ContractFilters;
use rubli_config::ApiConfig;
use rubli_core::entities::RiskFeedback;
use rubli_core::enums::{EntityType, FeedbackType, ReviewStatus};
use rubli_state::{
    Collection, Mutations, PageState, QueryCache, QueryKey, QueryStatus, ReviewDraft, ReviewError,
    review_hypothesis,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: server.uri(),
        ..Default::default()
    })
    .expect("client should build")
}

fn hypothesis_json(is_valid: bool) -> serde_json::Value {
    json!({
        "hypothesis_id": "PH-1",
        "contract_id": 3,
        "hypothesis_type": "statistical_outlier",
        "confidence": 0.8,
        "confidence_level": "high",
        "explanation": "unit price 4x median",
        "is_reviewed": true,
        "is_valid": is_valid,
        "review_notes": null
    })
}

async fn seed(cache: &QueryCache, key: &QueryKey) {
    cache
        .fetch(key, || async { Ok::<_, String>(()) })
        .await
        .unwrap();
}

#[tokio::test]
async fn accepted_review_clears_draft_and_invalidates_hypotheses() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/analysis/price-hypotheses/PH-1/review"))
        .and(body_json(json!({ "is_valid": true })))
        .respond_with(ResponseTemplate::new(200).set_body_json(hypothesis_json(true)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cache = QueryCache::new();
    let list = QueryKey::new(Collection::Hypotheses).with("list");
    let cases = QueryKey::new(Collection::Cases).with("list");
    seed(&cache, &list).await;
    seed(&cache, &cases).await;

    let mut draft = ReviewDraft::new();
    draft.set_judgment(true);
    let updated = review_hypothesis(&client, &cache, &mut draft, "PH-1")
        .await
        .unwrap();

    assert_eq!(updated.review_status(), ReviewStatus::Valid);
    assert!(draft.is_empty());
    assert!(cache.needs_fetch(&list));
    assert!(!cache.needs_fetch(&cases));
}

#[tokio::test]
async fn rejected_review_keeps_draft_for_retry() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/v1/analysis/price-hypotheses/PH-1/review"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database locked"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cache = QueryCache::new();
    let mut draft = ReviewDraft::new();
    draft.set_judgment(false);
    draft.set_notes("catalog price");

    let err = review_hypothesis(&client, &cache, &mut draft, "PH-1")
        .await
        .unwrap_err();

    match err {
        ReviewError::Client(inner) => assert_eq!(inner.status(), Some(500)),
        other => panic!("expected client error, got {other:?}"),
    }
    assert_eq!(draft.judgment(), Some(false));
    assert_eq!(draft.notes(), "catalog price");
    assert!(!draft.is_submitting());
}

#[tokio::test]
async fn review_without_judgment_never_hits_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cache = QueryCache::new();
    let mut draft = ReviewDraft::new();
    let err = review_hypothesis(&client, &cache, &mut draft, "PH-1")
        .await
        .unwrap_err();
    assert!(matches!(err, ReviewError::MissingJudgment));
}

#[tokio::test]
async fn feedback_invalidates_rated_entity_collection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/feedback"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "entity_type": "vendor",
            "entity_id": 5,
            "feedback_type": "not_suspicious",
            "updated": true
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cache = QueryCache::new();
    let vendors = QueryKey::new(Collection::Vendors).with("detail").with("5");
    let contracts = QueryKey::new(Collection::Contracts).with("list");
    seed(&cache, &vendors).await;
    seed(&cache, &contracts).await;

    let receipt = Mutations::new(&client, &cache)
        .submit_feedback(&RiskFeedback {
            entity_type: EntityType::Vendor,
            entity_id: 5,
            feedback_type: FeedbackType::NotSuspicious,
            reason: None,
        })
        .await
        .unwrap();

    assert!(receipt.updated);
    assert!(cache.needs_fetch(&vendors));
    assert!(!cache.needs_fetch(&contracts));
}

#[tokio::test]
async fn page_state_drives_list_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/contracts"))
        .and(query_param("year", "2023"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "pagination": { "page": 1, "per_page": 50, "total": 120, "total_pages": 3 }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let cache = QueryCache::new();
    let mut page: PageState<ContractFilters, &'static str> = PageState::new(
        Collection::Contracts,
        ContractFilters::default(),
        50,
        "amount_mxn",
    );
    page.update_filters(|f| f.year = Some(2023));

    let key = page.query_key();
    let filters = ContractFilters {
        page: Some(page.pagination().page()),
        per_page: Some(page.pagination().per_page()),
        ..page.filters().clone()
    };
    let result = cache
        .fetch(&key, || client.list_contracts(&filters))
        .await
        .unwrap();
    page.apply_total(result.pagination.total);

    assert_eq!(page.status(&cache), QueryStatus::Success);
    assert_eq!(page.pagination().total_pages(), 3);
    page.pagination_mut().next();
    assert_eq!(page.status(&cache), QueryStatus::Idle);
}
