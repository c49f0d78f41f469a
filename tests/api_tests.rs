//! Integration tests for gw2api-rs
//!
//! All requests go to a local wiremock server, so no network access or API
//! key is needed.
//!
//! Blocking tests start the mock server on a separate Tokio runtime and call
//! the client from the plain test thread, since a blocking client refuses to
//! run inside an async runtime. Non-blocking tests run under `#[tokio::test]`
//! and receive outcomes from their continuations over channels.
//!
//! Run with: cargo test --test api_tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use std::time::Duration;

use serde_json::json;
use tokio::runtime::Runtime;
use tokio::sync::{mpsc, oneshot};
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gw2api::prelude::*;

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Start a mock server on its own runtime for blocking tests
fn start_server() -> (Runtime, MockServer) {
    init_logging();
    let rt = Runtime::new().expect("Failed to build runtime");
    let server = rt.block_on(MockServer::start());
    (rt, server)
}

fn mount(rt: &Runtime, server: &MockServer, mock: Mock) {
    rt.block_on(mock.mount(server));
}

fn request_count(rt: &Runtime, server: &MockServer) -> usize {
    rt.block_on(server.received_requests())
        .map(|requests| requests.len())
        .unwrap_or(0)
}

fn blocking_client(server: &MockServer) -> Gw2Client {
    Gw2Client::with_config(ClientConfig::blocking().with_base_url(server.uri()))
        .expect("Failed to create client")
}

fn non_blocking_client(server: &MockServer) -> Gw2Client {
    Gw2Client::with_config(ClientConfig::non_blocking().with_base_url(server.uri()))
        .expect("Failed to create client")
}

/// A continuation that forwards its outcome to a oneshot receiver
fn forward() -> (Option<Continuation>, oneshot::Receiver<Result<serde_json::Value>>) {
    let (tx, rx) = oneshot::channel();
    let continuation: Continuation = Box::new(move |outcome| {
        let _ = tx.send(outcome);
    });
    (Some(continuation), rx)
}

fn counting_handler() -> (Arc<AtomicUsize>, impl Fn(Error) + Send + Sync + 'static) {
    let count = Arc::new(AtomicUsize::new(0));
    let counter = count.clone();
    (count, move |err: Error| {
        assert!(err.is_transport(), "handler got non-transport error: {:?}", err);
        counter.fetch_add(1, Ordering::SeqCst);
    })
}

// ============================================================================
// BLOCKING DISPATCH
// ============================================================================

mod blocking_tests {
    use super::*;

    #[test]
    fn test_build_returns_body_unchanged() {
        let (rt, server) = start_server();
        mount(
            &rt,
            &server,
            Mock::given(method("GET"))
                .and(path("/v2/build"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 115267 }))),
        );

        let client = blocking_client(&server);
        let body = client.call("build", None, None).unwrap();
        assert_eq!(body, Some(json!({ "id": 115267 })));

        let requests = rt.block_on(server.received_requests()).unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url.query(), None);
    }

    #[test]
    fn test_query_parameters_on_the_wire() {
        let (rt, server) = start_server();
        mount(
            &rt,
            &server,
            Mock::given(method("GET"))
                .and(path("/v2/items"))
                .and(query_param("ids", "a,b,c"))
                .and(query_param("page", "0"))
                .and(query_param("page_size", "200"))
                .and(query_param("access_token", "ABCD-1234"))
                .and(query_param("lang", "de"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([]))),
        );

        let client = blocking_client(&server);
        let options = RequestOptions::new()
            .with_ids(vec!["a", "b", "c"])
            .with_page(0, 200)
            .with_key("ABCD-1234")
            .with_language("de");

        let body = client.call("items", Some(options), None).unwrap();
        assert_eq!(body, Some(json!([])));
    }

    #[test]
    fn test_oversized_page_size_is_dropped() {
        let (rt, server) = start_server();
        mount(
            &rt,
            &server,
            Mock::given(method("GET"))
                .and(path("/v2/items"))
                .and(query_param("page", "1"))
                .and(query_param_is_missing("page_size"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2]))),
        );

        let client = blocking_client(&server);
        let options = RequestOptions::new().with_page(1, 201);
        assert!(client.call("items", Some(options), None).unwrap().is_some());
    }

    #[test]
    fn test_quantity_only_for_exchange() {
        let (rt, server) = start_server();
        mount(
            &rt,
            &server,
            Mock::given(method("GET"))
                .and(path("/v2/commerce/listings"))
                .and(query_param_is_missing("quantity"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([]))),
        );

        let client = blocking_client(&server);
        let options = RequestOptions::new().with_quantity(100);
        assert!(client
            .call("commerce/listings", Some(options), None)
            .unwrap()
            .is_some());
    }

    #[test]
    fn test_api_error_raised_without_handler() {
        let (rt, server) = start_server();
        mount(
            &rt,
            &server,
            Mock::given(method("GET"))
                .and(path("/v2/account"))
                .respond_with(
                    ResponseTemplate::new(401).set_body_json(json!({ "text": "invalid key" })),
                ),
        );

        let client = blocking_client(&server);
        match client.call("account", None, None) {
            Err(Error::Api {
                status, message, ..
            }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid key");
            }
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn test_handler_consumes_transport_error() {
        let (rt, server) = start_server();
        mount(
            &rt,
            &server,
            Mock::given(method("GET"))
                .and(path("/v2/build"))
                .respond_with(ResponseTemplate::new(503)),
        );

        let client = blocking_client(&server);
        let (count, handler) = counting_handler();
        client.set_error_handler(handler);

        let result = client.call("build", None, None);
        assert!(matches!(result, Ok(None)));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handler_from_config() {
        let (count, handler) = counting_handler();
        let config = ClientConfig::blocking()
            .with_base_url("http://127.0.0.1:1")
            .with_error_handler(handler);
        let client = Gw2Client::with_config(config).unwrap();

        assert!(matches!(client.call("build", None, None), Ok(None)));
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_connection_failure_is_transport_error() {
        let client = Gw2Client::with_config(
            ClientConfig::blocking().with_base_url("http://127.0.0.1:1"),
        )
        .unwrap();

        let err = client.call("build", None, None).unwrap_err();
        assert!(err.is_transport(), "unexpected error: {:?}", err);
    }

    #[test]
    fn test_handler_ignores_argument_errors() {
        let (count, handler) = counting_handler();
        let client = Gw2Client::new().unwrap();
        client.set_error_handler(handler);

        assert!(matches!(
            client.call("", None, None),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            client.guild().details(None, None),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_continuation_receives_result() {
        let (rt, server) = start_server();
        mount(
            &rt,
            &server,
            Mock::given(method("GET"))
                .and(path("/v2/worlds"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([1001, 1002]))),
        );

        let client = blocking_client(&server);
        let (continuation, mut rx) = forward();

        assert!(matches!(client.call("worlds", None, continuation), Ok(None)));
        // The blocking path runs the continuation before returning.
        let outcome = rx.try_recv().expect("continuation not invoked");
        assert_eq!(outcome.unwrap(), json!([1001, 1002]));
    }

    #[test]
    fn test_handler_withholds_error_from_continuation() {
        let (rt, server) = start_server();
        mount(
            &rt,
            &server,
            Mock::given(method("GET"))
                .and(path("/v2/worlds"))
                .respond_with(ResponseTemplate::new(500)),
        );

        let client = blocking_client(&server);
        let (count, handler) = counting_handler();
        client.set_error_handler(handler);

        let invoked = Arc::new(AtomicUsize::new(0));
        let flag = invoked.clone();
        let continuation: Continuation = Box::new(move |_| {
            flag.fetch_add(1, Ordering::SeqCst);
        });

        assert!(matches!(
            client.call("worlds", None, Some(continuation)),
            Ok(None)
        ));
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(invoked.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_timeout_surfaces_as_transport_error() {
        let (rt, server) = start_server();
        mount(
            &rt,
            &server,
            Mock::given(method("GET"))
                .and(path("/v2/build"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(json!({ "id": 1 }))
                        .set_delay(Duration::from_millis(500)),
                ),
        );

        let client = Gw2Client::with_config(
            ClientConfig::blocking()
                .with_base_url(server.uri())
                .with_timeout(Duration::from_millis(50)),
        )
        .unwrap();

        assert!(matches!(client.call("build", None, None), Err(Error::Timeout)));
    }

    #[test]
    fn test_undecodable_body_is_json_error() {
        let (rt, server) = start_server();
        mount(
            &rt,
            &server,
            Mock::given(method("GET"))
                .and(path("/v2/files"))
                .respond_with(ResponseTemplate::new(200).set_body_string("<html>")),
        );

        let client = blocking_client(&server);
        assert!(matches!(client.call("files", None, None), Err(Error::Json(_))));
    }

    #[test]
    fn test_blocking_client_refuses_async_context() {
        let (rt, server) = start_server();
        let client = blocking_client(&server);

        let result = rt.block_on(async { client.call("build", None, None) });
        assert!(matches!(result, Err(Error::Usage(_))));
        assert_eq!(request_count(&rt, &server), 0);
    }

    #[tokio::test]
    async fn test_blocking_client_dropped_in_async_context() {
        init_logging();
        let client = Gw2Client::new().unwrap();

        assert!(matches!(
            client.call("build", None, None),
            Err(Error::Usage(_))
        ));

        // Must not panic while tearing down the client's own runtime.
        drop(client);
    }
}

// ============================================================================
// NON-BLOCKING DISPATCH
// ============================================================================

mod non_blocking_tests {
    use super::*;

    #[tokio::test]
    async fn test_continuation_required() {
        init_logging();
        let server = MockServer::start().await;
        let client = non_blocking_client(&server);

        assert!(matches!(
            client.call("build", None, None),
            Err(Error::Usage(_))
        ));
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_continuation_receives_body() {
        init_logging();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/colors"))
            .and(query_param("ids", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 1 }])))
            .mount(&server)
            .await;

        let client = non_blocking_client(&server);
        let (continuation, rx) = forward();

        let returned = client
            .call("colors", Some(RequestOptions::new().with_ids("1")), continuation)
            .unwrap();
        assert!(returned.is_none());

        let body = tokio::time::timeout(Duration::from_secs(5), rx)
            .await
            .expect("timed out")
            .expect("continuation dropped")
            .unwrap();
        assert_eq!(body, json!([{ "id": 1 }]));
    }

    #[tokio::test]
    async fn test_continuation_receives_error_without_handler() {
        init_logging();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/account/bank"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "text": "requires scope inventories"
            })))
            .mount(&server)
            .await;

        let client = non_blocking_client(&server);
        let (continuation, rx) = forward();
        client.account().bank(None, continuation).unwrap();

        let err = rx.await.expect("continuation dropped").unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert!(err.is_client_error());
    }

    #[tokio::test]
    async fn test_handler_receives_error_exactly_once() {
        init_logging();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/build"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let client = non_blocking_client(&server);
        let (tx, mut handler_rx) = mpsc::unbounded_channel();
        client.set_error_handler(move |err| {
            let _ = tx.send(err);
        });

        let (continuation, rx) = forward();
        client.call("build", None, continuation).unwrap();

        // The continuation is dropped without being invoked.
        assert!(rx.await.is_err());

        let err = handler_rx.recv().await.expect("handler not invoked");
        assert_eq!(err.status(), Some(502));
        assert!(handler_rx.try_recv().is_err());
    }
}

// ============================================================================
// ENDPOINT SERVICES
// ============================================================================

mod service_tests {
    use super::*;

    #[test]
    fn test_single_resource_uses_first_id() {
        let (rt, server) = start_server();
        mount(
            &rt,
            &server,
            Mock::given(method("GET"))
                .and(path("/v2/characters/charA/inventory"))
                .and(query_param("access_token", "key"))
                .and(query_param_is_missing("ids"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "bags": [] }))),
        );

        let client = blocking_client(&server);
        let options = RequestOptions::new()
            .with_ids(vec!["charA", "charB"])
            .with_key("key");

        let body = client.characters().inventory(Some(options), None).unwrap();
        assert_eq!(body, Some(json!({ "bags": [] })));
    }

    #[test]
    fn test_single_resource_requires_id() {
        let (rt, server) = start_server();
        let client = blocking_client(&server);

        assert!(matches!(
            client.characters().equipment(None, None),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            client
                .guild()
                .members(Some(RequestOptions::new().with_key("key")), None),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(request_count(&rt, &server), 0);
    }

    #[test]
    fn test_guild_paths() {
        let (rt, server) = start_server();
        let guild_id = "116E0C0E-0035-44A9-BB22-4AE3E23127E5";
        mount(
            &rt,
            &server,
            Mock::given(method("GET"))
                .and(path(format!("/v2/guild/{}", guild_id)))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "tag": "ArtN" }))),
        );
        mount(
            &rt,
            &server,
            Mock::given(method("GET"))
                .and(path(format!("/v2/guild/{}/log", guild_id)))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([]))),
        );

        let client = blocking_client(&server);
        let options = RequestOptions::new().with_ids(guild_id);

        let details = client.guild().details(Some(options.clone()), None).unwrap();
        assert_eq!(details, Some(json!({ "tag": "ArtN" })));

        let log = client.guild().log(Some(options), None).unwrap();
        assert_eq!(log, Some(json!([])));
    }

    #[test]
    fn test_exchange_coins() {
        let (rt, server) = start_server();
        mount(
            &rt,
            &server,
            Mock::given(method("GET"))
                .and(path("/v2/commerce/exchange/coins"))
                .and(query_param("quantity", "100"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_json(json!({ "coins_per_gem": 2935, "quantity": 0 })),
                ),
        );

        let client = blocking_client(&server);
        let quote = client
            .commerce()
            .exchange(ExchangeType::Coins, 100, None, None)
            .unwrap()
            .unwrap();
        assert_eq!(quote["coins_per_gem"], 2935);
    }

    #[test]
    fn test_exchange_requires_quantity() {
        let client = Gw2Client::new().unwrap();
        assert!(matches!(
            client.commerce().exchange(ExchangeType::Gems, 0, None, None),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            "karma".parse::<ExchangeType>(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_transactions_path() {
        let (rt, server) = start_server();
        mount(
            &rt,
            &server,
            Mock::given(method("GET"))
                .and(path("/v2/commerce/transactions/history/buys"))
                .and(query_param("page", "0"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([]))),
        );

        let client = blocking_client(&server);
        let scope: TransactionScope = "history".parse().unwrap();
        let body = client
            .commerce()
            .transactions(
                scope,
                TransactionKind::Buys,
                Some(RequestOptions::new().with_page_index(0)),
                None,
            )
            .unwrap();
        assert_eq!(body, Some(json!([])));
    }

    #[test]
    fn test_prices_endpoint() {
        let (rt, server) = start_server();
        mount(
            &rt,
            &server,
            Mock::given(method("GET"))
                .and(path("/v2/commerce/prices"))
                .and(query_param("ids", "19700"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": 19700 }]))),
        );

        let client = blocking_client(&server);
        let body = client
            .commerce()
            .prices(Some(RequestOptions::new().with_ids(19700u64)), None)
            .unwrap();
        assert_eq!(body, Some(json!([{ "id": 19700 }])));
    }

    #[test]
    fn test_recipe_search_by_input() {
        let (rt, server) = start_server();
        mount(
            &rt,
            &server,
            Mock::given(method("GET"))
                .and(path("/v2/recipes/search"))
                .and(query_param("input", "46731"))
                .and(query_param_is_missing("output"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([7314, 7315]))),
        );

        let client = blocking_client(&server);
        let ids = client.recipes().search(Some(46731), None, None, None).unwrap();
        assert_eq!(ids, Some(json!([7314, 7315])));
    }

    #[test]
    fn test_recipe_search_validation() {
        let client = Gw2Client::new().unwrap();
        assert!(matches!(
            client.recipes().search(Some(1), Some(2), None, None),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            client.recipes().search(None, None, None, None),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_recipe_search_rejects_output_already_in_options() {
        let (rt, server) = start_server();
        let client = blocking_client(&server);

        let options = RequestOptions::new().with_output(50065);
        assert!(matches!(
            client.recipes().search(Some(46731), None, Some(options), None),
            Err(Error::InvalidArgument(_))
        ));

        let options = RequestOptions::new().with_input(46731).with_output(50065);
        assert!(matches!(
            client.recipes().search(None, None, Some(options), None),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(request_count(&rt, &server), 0);
    }

    #[test]
    fn test_recipe_search_rejects_zero_id() {
        let (rt, server) = start_server();
        let client = blocking_client(&server);

        assert!(matches!(
            client.recipes().search(Some(0), None, None, None),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            client.recipes().search(None, Some(0), None, None),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(request_count(&rt, &server), 0);
    }

    #[test]
    fn test_recipe_search_by_output_from_options() {
        let (rt, server) = start_server();
        mount(
            &rt,
            &server,
            Mock::given(method("GET"))
                .and(path("/v2/recipes/search"))
                .and(query_param("output", "50065"))
                .and(query_param_is_missing("input"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([8459]))),
        );

        let client = blocking_client(&server);
        let options = RequestOptions::new().with_output(50065);
        let ids = client.recipes().search(None, None, Some(options), None).unwrap();
        assert_eq!(ids, Some(json!([8459])));
    }

    #[test]
    fn test_hyphenated_game_endpoints() {
        let (rt, server) = start_server();
        mount(
            &rt,
            &server,
            Mock::given(method("GET"))
                .and(path("/v2/traits-beta"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([]))),
        );
        mount(
            &rt,
            &server,
            Mock::given(method("GET"))
                .and(path("/v2/events-state"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([]))),
        );

        let client = blocking_client(&server);
        assert!(client.game().traits_beta(None, None).unwrap().is_some());
        assert!(client.game().events_state(None, None).unwrap().is_some());
    }

    #[tokio::test]
    async fn test_wvw_objectives_non_blocking() {
        init_logging();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/wvw/objectives"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["38-6"])))
            .mount(&server)
            .await;

        let client = non_blocking_client(&server);
        let (continuation, rx) = forward();
        client.wvw().objectives(None, continuation).unwrap();

        let body = rx.await.expect("continuation dropped").unwrap();
        assert_eq!(body, json!(["38-6"]));
    }
}
