use btce::core::kernel::{sign, ReqwestRest};
use btce::{
    BtceBuilder, BtceConnector, ExchangeConfig, ExchangeError, HistoryFilter, OrderSide,
    PublicOptions,
};
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test_api_key";
const API_SECRET: &str = "test_secret_key";

fn connector_for(server: &MockServer) -> BtceConnector<ReqwestRest> {
    let config = ExchangeConfig::new(API_KEY.to_string(), API_SECRET.to_string())
        .base_url(server.uri())
        .timeout_seconds(10);
    BtceBuilder::new(config).build().unwrap()
}

async fn mount_trade_api(server: &MockServer, body: &str) {
    Mock::given(method("POST"))
        .and(path("/tapi"))
        .and(header("Key", API_KEY))
        .and(header_exists("Sign"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

fn nonce_of(body: &[u8]) -> i64 {
    std::str::from_utf8(body)
        .unwrap()
        .split('&')
        .find_map(|pair| pair.strip_prefix("nonce="))
        .unwrap()
        .parse()
        .unwrap()
}

#[cfg(test)]
mod trading_tests {
    use super::*;

    #[tokio::test]
    async fn test_trade_is_signed_and_decoded() {
        let server = MockServer::start().await;
        mount_trade_api(
            &server,
            r#"{"success":1,"return":{"received":0.1,"remains":0.9,"order_id":5,"funds":{"usd":325,"btc":2.498}}}"#,
        )
        .await;
        let connector = connector_for(&server);

        let first = connector
            .trading
            .trade("btc_usd", OrderSide::Buy, 900.0, 1.0)
            .await
            .unwrap();
        let second = connector
            .trading
            .trade("btc_usd", OrderSide::Buy, 900.0, 1.0)
            .await
            .unwrap();
        assert_eq!(first.order_id, 5);
        assert_eq!(second.order_id, 5);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);

        for request in &requests {
            let body = std::str::from_utf8(&request.body).unwrap();
            assert!(body.starts_with("method=Trade&nonce="));
            assert!(body.ends_with("&amount=1&pair=btc_usd&rate=900&type=buy"));

            let signature = request.headers.get("sign").unwrap().to_str().unwrap();
            assert_eq!(signature, sign(API_SECRET, &request.body).unwrap());
        }
        assert!(nonce_of(&requests[1].body) > nonce_of(&requests[0].body));
    }

    #[tokio::test]
    async fn test_no_orders_is_api_error() {
        let server = MockServer::start().await;
        mount_trade_api(&server, r#"{"success":0,"error":"no orders"}"#).await;
        let connector = connector_for(&server);

        let err = connector
            .trading
            .active_orders(Some("btc_usd"))
            .await
            .unwrap_err();

        assert_eq!(err.api_message(), Some("no orders"));
        assert!(!err.is_network());
        assert!(!err.is_decode());
    }

    #[tokio::test]
    async fn test_malformed_response_is_decode_error() {
        let server = MockServer::start().await;
        mount_trade_api(&server, "not json").await;
        let connector = connector_for(&server);

        let err = connector.trading.get_info().await.unwrap_err();
        assert!(err.is_decode());
        assert!(err.api_message().is_none());
    }

    #[tokio::test]
    async fn test_unexpected_return_shape_is_decode_error() {
        let server = MockServer::start().await;
        mount_trade_api(&server, r#"{"success":1,"return":"unexpected-string"}"#).await;
        let connector = connector_for(&server);

        let err = connector
            .trading
            .trade("btc_usd", OrderSide::Sell, 950.5, 0.25)
            .await
            .unwrap_err();
        assert!(err.is_decode());
    }

    #[tokio::test]
    async fn test_http_error_status_still_decodes_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tapi"))
            .respond_with(
                ResponseTemplate::new(500).set_body_string(r#"{"success":0,"error":"api key dont have trade permission"}"#),
            )
            .mount(&server)
            .await;
        let connector = connector_for(&server);

        let err = connector
            .trading
            .trade_history(&HistoryFilter::default(), None)
            .await
            .unwrap_err();
        assert_eq!(err.api_message(), Some("api key dont have trade permission"));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        let config = ExchangeConfig::new(API_KEY.to_string(), API_SECRET.to_string())
            .base_url("http://127.0.0.1:1".to_string());
        let connector = BtceBuilder::new(config).build().unwrap();

        let err = connector.trading.get_info().await.unwrap_err();
        assert!(err.is_network(), "unexpected error: {err:?}");
    }

    #[tokio::test]
    async fn test_read_only_connector_refuses_trading() {
        let server = MockServer::start().await;
        let config = ExchangeConfig::read_only().base_url(server.uri());
        let connector = BtceBuilder::new(config).build().unwrap();

        let err = connector.trading.get_info().await.unwrap_err();
        assert!(matches!(err, ExchangeError::AuthError(_)));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}

#[cfg(test)]
mod market_data_tests {
    use super::*;

    #[tokio::test]
    async fn test_ticker_for_several_pairs() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/3/ticker/btc_usd-ltc_usd"))
            .and(query_param("ignore_invalid", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"btc_usd":{"high":110,"low":100,"avg":105,"vol":1000,"vol_cur":9.5,"last":104,
                    "buy":104.5,"sell":103.9,"updated":1500000000},
                   "ltc_usd":{"high":4,"low":3,"avg":3.5,"vol":10,"vol_cur":3,"last":3.2,
                    "buy":3.3,"sell":3.1,"updated":1500000000}}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;
        let connector = connector_for(&server);

        let options = PublicOptions {
            ignore_invalid: true,
            limit: None,
        };
        let ticker = connector
            .market
            .ticker(&["btc_usd", "ltc_usd"], options)
            .await
            .unwrap();

        assert_eq!(ticker.len(), 2);
        assert!((ticker["btc_usd"].buy - 104.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_depth_and_info() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/3/depth/btc_usd"))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"btc_usd":{"asks":[[900.5,0.1],[901,1.5]],"bids":[[899,2.5],[898.1,0.3]]}}"#,
            ))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/3/info"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"server_time":1500000000,"pairs":{"btc_usd":{"decimal_places":3,"min_price":0.1,
                    "max_price":3200,"min_amount":0.01,"hidden":0,"fee":0.2}}}"#,
            ))
            .mount(&server)
            .await;
        let connector = connector_for(&server);

        let options = PublicOptions {
            limit: Some(2),
            ..PublicOptions::default()
        };
        let depth = connector.market.depth(&["btc_usd"], options).await.unwrap();
        assert_eq!(depth["btc_usd"].asks.len(), 2);
        assert!((depth["btc_usd"].asks[1].amount() - 1.5).abs() < f64::EPSILON);

        let info = connector.market.info().await.unwrap();
        assert_eq!(info.server_time, 1_500_000_000);
        assert!((info.pairs["btc_usd"].fee - 0.2).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn test_public_calls_are_not_signed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/3/trades/btc_usd"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"btc_usd":[{"type":"bid","price":900,"amount":0.5,"tid":1,"timestamp":1500000000}]}"#,
            ))
            .mount(&server)
            .await;
        let connector = connector_for(&server);

        let trades = connector
            .market
            .trades(&["btc_usd"], PublicOptions::default())
            .await
            .unwrap();
        assert_eq!(trades["btc_usd"].len(), 1);

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].headers.get("sign").is_none());
        assert!(requests[0].headers.get("key").is_none());
        assert_eq!(connector.trading.nonces().last(), 0);
    }
}
