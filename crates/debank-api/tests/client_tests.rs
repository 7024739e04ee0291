// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for `DebankClient`
//!
//! These tests run the client over the real HTTP transport against a wiremock
//! server standing in for the DeBank web API.

use api_client::ApiError;
use debank_api::{ChainAggregate, DebankClient, ResponseMode};
use serde_json::json;
use shared_types::{ChainId, ChainSelector};
use tokio_util::sync::CancellationToken;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

use fixtures::*;

/// Test the browser header set reaches the backend
#[tokio::test]
async fn requests_carry_browser_headers() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/total_balance"))
        .and(query_param("addr", ADDRESS))
        .and(header("accept", "*/*"))
        .and(header("origin", "https://debank.com"))
        .and(header("referer", "https://debank.com/"))
        .and(header("source", "web"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(success(json!({"total_usd_value": 1234.5}))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = DebankClient::new(test_config(&mock_server)).unwrap();
    let total = client.total_balance(ADDRESS).await.unwrap();

    assert_eq!(total, 1234.5);
}

/// Test a backend-declared failure on HTTP 200
#[tokio::test]
async fn backend_error_surfaces_message() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/addr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(failure("invalid address")))
        .mount(&mock_server)
        .await;

    let client = DebankClient::new(test_config(&mock_server)).unwrap();
    let result = client.user("0xnot-an-address").await;

    assert_eq!(
        result,
        Err(ApiError::Backend {
            status: 200,
            message: "invalid address".to_string()
        })
    );
}

/// Test rate limiting is a transport error and is not retried
#[tokio::test]
async fn rate_limited_is_transport_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/asset/net_curve_24h"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = DebankClient::new(test_config(&mock_server)).unwrap();
    let result = client.net_curve_24h(ADDRESS).await;

    assert_eq!(result, Err(ApiError::Transport { status: 429 }));
}

/// Test a body without the success marker is a transport error
#[tokio::test]
async fn unmarked_body_is_transport_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/hi/user/info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": ADDRESS}})))
        .mount(&mock_server)
        .await;

    let client = DebankClient::new(test_config(&mock_server)).unwrap();
    let result = client.user_info(ADDRESS).await;

    assert_eq!(result, Err(ApiError::Transport { status: 200 }));
}

/// Test a job resolving on the third poll
#[tokio::test]
async fn job_resolves_after_pending_polls() {
    let mock_server = MockServer::start().await;
    mount_job(
        &mock_server,
        "nft/collection_list",
        "eth",
        2,
        json!([collection("0xpunks", "eth", 80_000.0)]),
    )
    .await;

    let client = DebankClient::new(test_config(&mock_server)).unwrap();
    let portfolio = client
        .nft_collections(
            ADDRESS,
            &ChainSelector::One(ChainId::new("eth")),
            ResponseMode::Typed,
        )
        .await
        .unwrap()
        .typed()
        .unwrap();

    assert_eq!(portfolio["eth"].nft_usd_value(), 80_000.0);
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 3);
}

/// Test a job still pending after every attempt
#[tokio::test]
async fn job_exhaustion_is_timeout() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nft/history_collection_list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pending_job()))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = DebankClient::new(test_config(&mock_server)).unwrap();
    let result = client
        .profit_leaderboard(ADDRESS, &ChainSelector::One(ChainId::new("eth")))
        .await;

    assert_eq!(result, Err(ApiError::JobTimeout { attempts: 3 }));
}

/// Test paginated history over three pages
#[tokio::test]
async fn history_pages_follow_the_cursor() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/history/list"))
        .and(query_param("start_time", "0"))
        .and(query_param("page_count", "20"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(success(history_page(1_700_003_000, 20))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    // last record of page one sits at 1_700_001_860.5
    Mock::given(method("GET"))
        .and(path("/history/list"))
        .and(query_param("start_time", "1700001860"))
        .and(query_param("page_count", "20"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(success(history_page(1_700_001_800, 20))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/history/list"))
        .and(query_param("start_time", "1700000660"))
        .and(query_param("page_count", "5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(success(history_page(1_700_000_600, 5))),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = DebankClient::new(test_config(&mock_server)).unwrap();
    let history = client
        .history(ADDRESS, &ChainSelector::One(ChainId::new("eth")), 0, 45)
        .await
        .unwrap();

    assert_eq!(history.len(), 45);
    assert!(
        history
            .records
            .windows(2)
            .all(|pair| pair[0].time_at >= pair[1].time_at)
    );
    assert_eq!(history.token("eth").unwrap()["page"], 1_700_000_600);
}

/// Test the full aggregation across every used chain
#[tokio::test]
async fn balance_across_all_chains() {
    let mock_server = MockServer::start().await;
    mount_data(&mock_server, "nft/used_chains", json!(["eth", "base"])).await;
    mount_job(
        &mock_server,
        "nft/collection_list",
        "eth",
        1,
        json!([collection("0xpunks", "eth", 100.0)]),
    )
    .await;
    mount_job(&mock_server, "nft/collection_list", "base", 0, json!([])).await;
    mount_data(
        &mock_server,
        "token/cache_balance_list",
        json!([
            token("eth", "eth", 2500.0, 2.0),
            token("bnb", "bsc", 600.0, 1.0),
            token("weth", "base", 2500.0, 0.01),
        ]),
    )
    .await;
    mount_data(
        &mock_server,
        "portfolio/project_list",
        json!([project("aerodrome", "base", 10_000.0)]),
    )
    .await;

    let client = DebankClient::new(test_config(&mock_server)).unwrap();
    let portfolio = client
        .balance(ADDRESS, &ChainSelector::All, ResponseMode::Typed)
        .await
        .unwrap()
        .typed()
        .unwrap();

    let chains: Vec<_> = portfolio.keys().map(ChainId::as_str).collect();
    assert_eq!(chains, vec!["base", "eth", "bsc"]);
    assert_eq!(portfolio["base"].usd_value(), 10_025.0);
    assert_eq!(portfolio["eth"].usd_value(), 5100.0);
    let values: Vec<f64> = portfolio.values().map(ChainAggregate::usd_value).collect();
    assert!(values.windows(2).all(|pair| pair[0] >= pair[1]));
}

/// Test cancellation interrupts a job between polls
#[tokio::test]
async fn cancellation_stops_polling() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nft/collection_list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pending_job()))
        .mount(&mock_server)
        .await;

    let token = CancellationToken::new();
    let mut config = test_config(&mock_server);
    config.poll.delay = std::time::Duration::from_secs(30);
    let client = DebankClient::new(config)
        .unwrap()
        .with_cancellation(token.clone());

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        token.cancel();
    });

    let result = client
        .nft_collections(
            ADDRESS,
            &ChainSelector::One(ChainId::new("eth")),
            ResponseMode::Raw,
        )
        .await;
    canceller.await.unwrap();

    assert_eq!(result, Err(ApiError::Cancelled));
    assert_eq!(mock_server.received_requests().await.unwrap().len(), 1);
}
