//! Integration tests for the Loopring REST client.
//!
//! Every test drives a real `LoopringClient` against a local `httpmock`
//! server, so the full path (query building, API key header, envelope
//! handling, key normalization, typed payloads) is exercised without
//! touching the relayer.

use httpmock::prelude::*;
use serde_json::{json, Value};

use loopring_sdk::prelude::*;

const ACCOUNT_ID: u64 = 12345;
const API_KEY: &str = "test-api-key-0123456789";

// =============================================================================
// Helpers
// =============================================================================

fn client(server: &MockServer) -> LoopringClient {
    LoopringClient::builder()
        .account_id(ACCOUNT_ID)
        .api_key(API_KEY)
        .endpoint(server.base_url())
        .build()
        .unwrap()
}

fn lenient_client(server: &MockServer) -> LoopringClient {
    LoopringClient::builder()
        .account_id(ACCOUNT_ID)
        .api_key(API_KEY)
        .endpoint(server.base_url())
        .handle_errors(false)
        .build()
        .unwrap()
}

fn order_json(hash: &str) -> Value {
    json!({
        "hash": hash,
        "clientOrderId": "",
        "side": "SELL",
        "market": "LRC-ETH",
        "price": "0.000305",
        "volumes": {
            "baseAmount": "1000000000000000000000",
            "quoteAmount": "305000000000000000",
            "baseFilled": "0",
            "quoteFilled": "0",
            "fee": "0"
        },
        "validity": {"start": 1700000000, "end": 1702592000},
        "orderType": "LIMIT_ORDER",
        "tradeChannel": "ORDER_BOOK",
        "status": "processing"
    })
}

fn invalid_key_body() -> Value {
    json!({"resultInfo": {"code": 104002, "message": "invalid apikey"}})
}

// =============================================================================
// Orders
// =============================================================================

mod orders {
    use super::*;

    #[tokio::test]
    async fn test_list_orders() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v3/orders")
                    .header("X-API-KEY", API_KEY)
                    .query_param("accountId", "12345")
                    .query_param("market", "LRC-ETH")
                    .query_param("status", "processing,waiting")
                    .query_param("limit", "10");
                then.status(200).json_body(json!({
                    "totalNum": 2,
                    "orders": [order_json("0x01"), order_json("0x02")]
                }));
            })
            .await;

        let query = OrdersQuery::new()
            .with_market("LRC-ETH")
            .with_statuses([OrderStatus::Processing, OrderStatus::Waiting])
            .with_limit(10);
        let list = client(&server)
            .orders()
            .list(&query)
            .await
            .unwrap()
            .into_complete()
            .unwrap();

        mock.assert_async().await;
        assert_eq!(list.total_num, 2);
        let hashes: Vec<_> = list.iter().map(|o| o.hash.as_str()).collect();
        assert_eq!(hashes, ["0x01", "0x02"]);
        assert_eq!(list.orders[0].side, Side::Sell);
    }

    #[tokio::test]
    async fn test_get_order() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v3/order")
                    .header("X-API-KEY", API_KEY)
                    .query_param("accountId", "12345")
                    .query_param("orderHash", "0xabc");
                then.status(200).json_body(order_json("0xabc"));
            })
            .await;

        let payload = client(&server).orders().get("0xabc").await.unwrap();

        mock.assert_async().await;
        let order = payload.as_complete().unwrap();
        assert_eq!(order.hash, "0xabc");
        assert_eq!(order.validity.start.timestamp(), 1700000000);
        assert_eq!(order.volumes.base_amount, "1000000000000000000000");
        assert_eq!(payload.raw().get("orderType"), Some(&json!("LIMIT_ORDER")));
    }

    #[tokio::test]
    async fn test_get_order_empty_hash_skips_network() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.any_request();
                then.status(200).json_body(order_json("0x0"));
            })
            .await;

        let err = client(&server).orders().get("").await.unwrap_err();

        assert!(matches!(err, SdkError::InvalidArgument(ref m) if m.contains("order_hash")));
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_next_storage_id() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v3/storageId")
                    .header("X-API-KEY", API_KEY)
                    .query_param("accountId", "12345")
                    .query_param("sellTokenId", "0");
                then.status(200)
                    .json_body(json!({"orderId": 4, "offchainId": 1001}));
            })
            .await;

        let id = client(&server)
            .orders()
            .next_storage_id(0)
            .await
            .unwrap()
            .into_complete()
            .unwrap();

        mock.assert_async().await;
        assert_eq!(id.order_id, 4);
        assert_eq!(id.offchain_id, 1001);
        assert_eq!(id.next().map(|n| n.order_id), Some(6));
    }

    #[tokio::test]
    async fn test_submit_is_unsupported() {
        let server = MockServer::start_async().await;
        let request = SubmitOrderRequest {
            exchange: "0xexchange".to_string(),
            account_id: ACCOUNT_ID,
            storage_id: 4,
            sell_token: Token {
                token_id: 0,
                volume: "1000".to_string(),
            },
            buy_token: Token {
                token_id: 1,
                volume: "2000".to_string(),
            },
            all_or_none: false,
            fill_amount_b_or_s: false,
            valid_until: 1702592000,
            max_fee_bips: 50,
            eddsa_signature: None,
            client_order_id: None,
            order_type: None,
            trade_channel: None,
            taker: None,
            pool_address: None,
            affiliate: None,
        };

        let err = client(&server).orders().submit(&request).await.unwrap_err();
        assert!(matches!(err, SdkError::Unsupported("submit_order")));
    }
}

// =============================================================================
// Error handling modes
// =============================================================================

mod error_modes {
    use super::*;

    #[tokio::test]
    async fn test_raising_mode_maps_result_info() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v3/order");
                then.status(400).json_body(invalid_key_body());
            })
            .await;

        let err = client(&server).orders().get("0xabc").await.unwrap_err();

        match err {
            SdkError::Api(api) => {
                assert_eq!(api.code, ErrorCode::InvalidApiKey);
                assert_eq!(api.message, "invalid apikey");
            }
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_lenient_mode_returns_placeholder() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v3/order");
                then.status(200).json_body(invalid_key_body());
            })
            .await;

        let payload = lenient_client(&server)
            .orders()
            .get("0xabc")
            .await
            .unwrap();

        assert!(!payload.is_complete());
        assert!(payload.as_complete().is_none());
        assert_eq!(payload.to_string(), "Incomplete Order.");
        assert_eq!(payload.result_info().unwrap().code, 104002);
        assert!(payload.raw().get("resultInfo").is_some());
    }

    #[tokio::test]
    async fn test_raising_mode_rejects_partial_body() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v3/storageId");
                then.status(200).json_body(json!({"orderId": 4}));
            })
            .await;

        let err = client(&server)
            .orders()
            .next_storage_id(1)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SdkError::Object(ObjectError::Incomplete {
                type_name: "StorageId",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_status_without_envelope_is_http_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v3/timestamp");
                then.status(503).body("maintenance");
            })
            .await;

        let err = lenient_client(&server).relayer().timestamp().await.unwrap_err();

        assert!(matches!(
            err,
            SdkError::Http(HttpError::ServerError { status: 503, .. })
        ));
    }

    #[tokio::test]
    async fn test_non_json_body_is_http_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/v3/timestamp");
                then.status(200).body("<html>ok</html>");
            })
            .await;

        let err = client(&server).relayer().timestamp().await.unwrap_err();
        assert!(matches!(err, SdkError::Http(HttpError::InvalidBody(_))));
    }
}

// =============================================================================
// Public endpoints
// =============================================================================

mod public {
    use super::*;

    #[tokio::test]
    async fn test_relayer_timestamp() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v3/timestamp")
                    .header_missing("X-API-KEY");
                then.status(200).json_body(json!({"timestamp": 1700000000000u64}));
            })
            .await;

        let time = client(&server)
            .relayer()
            .timestamp()
            .await
            .unwrap()
            .into_complete()
            .unwrap();

        mock.assert_async().await;
        assert_eq!(time.timestamp.timestamp(), 1700000000);
        assert_eq!(time.millis(), 1700000000000);
    }

    #[tokio::test]
    async fn test_depth() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/v3/depth")
                    .header_missing("X-API-KEY")
                    .query_param("market", "LRC-ETH")
                    .query_param("level", "0")
                    .query_param("limit", "50");
                then.status(200).json_body(json!({
                    "market": "LRC-ETH",
                    "version": 1234,
                    "timestamp": 1700000000000u64,
                    "asks": [["100.5", "2", "10", "200"]],
                    "bids": [["99.5", "1", "5", "99.5"]]
                }));
            })
            .await;

        let book = client(&server)
            .orderbooks()
            .depth(&DepthQuery::new("LRC-ETH"))
            .await
            .unwrap()
            .into_complete()
            .unwrap();

        mock.assert_async().await;
        assert_eq!(book.asks.len(), 1);
        assert_eq!(book.bids.len(), 1);
        assert_eq!(book.asks[0].quantity, 2);
        assert_eq!(book.bids[0].quantity, 1);
        assert_eq!(book.len(), 3);
        assert_eq!(book.timestamp.timestamp(), 1700000000);
    }

    #[tokio::test]
    async fn test_depth_requires_market() {
        let server = MockServer::start_async().await;
        let err = client(&server)
            .orderbooks()
            .depth(&DepthQuery::new(""))
            .await
            .unwrap_err();
        assert!(matches!(err, SdkError::InvalidArgument(_)));
    }
}

// =============================================================================
// Session lifecycle
// =============================================================================

mod session {
    use super::*;

    #[tokio::test]
    async fn test_close_twice() {
        let server = MockServer::start_async().await;
        let client = client(&server);

        assert!(!client.is_closed().await);
        client.close().await;
        client.close().await;
        assert!(client.is_closed().await);
    }

    #[tokio::test]
    async fn test_request_after_close() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.any_request();
                then.status(200).json_body(json!({"timestamp": 1}));
            })
            .await;

        let client = client(&server);
        let shared = client.clone();
        client.close().await;

        let err = shared.relayer().timestamp().await.unwrap_err();

        assert!(shared.is_closed().await);
        assert!(matches!(err, SdkError::Http(HttpError::SessionClosed)));
        mock.assert_hits_async(0).await;
    }
}
