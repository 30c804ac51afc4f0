//! Integration tests for the API client using wiremock
//!
//! These tests drive real resource dispatch (endpoint lookup, template
//! resolution, bearer auth, JSON bodies) against mocked endpoints and
//! verify status-code mapping and fail-fast validation.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{bearer_token, body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bitgo::{
    ApiResource, Client, Create, Credential, Environment, Error, Keychain, List, PendingApproval,
    Read, SharedClient, Wallet, WalletShare,
};

/// Build a client pointed at the mock server.
fn client_for(server: &MockServer) -> SharedClient {
    let client = Client::new(Environment::Custom(server.uri())).expect("client should build");
    Arc::new(client)
}

fn credential() -> Credential {
    Credential::from("test-token")
}

/// Fetching a wallet resolves the READ template with the id appended
/// and exposes the reply through typed accessors.
#[tokio::test]
async fn wallet_get_resolves_read_template() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallet/abc123"))
        .and(bearer_token("test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "abc123",
            "label": "spending",
            "balance": 150_000,
            "confirmedBalance": 140_000
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let wallet = Wallet::get(&client, &credential(), &[], "abc123")
        .await
        .expect("wallet fetch should succeed");

    assert_eq!(wallet.id().unwrap(), "abc123");
    assert_eq!(wallet.label().unwrap(), "spending");
    assert_eq!(wallet.balance().unwrap(), 150_000);
    assert_eq!(wallet.confirmed_balance().unwrap(), 140_000);
}

/// LIST has no mutable segments, so it resolves to the bare collection
/// path.
#[tokio::test]
async fn wallet_list_hits_collection_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallet"))
        .and(bearer_token("test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "wallets": [{"id": "w1"}, {"id": "w2"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let listing = Wallet::list(&client, &credential(), &[], None)
        .await
        .expect("listing should succeed");

    let wallets = listing.resource().property("wallets").unwrap();
    assert_eq!(wallets.as_array().unwrap().len(), 2);
}

/// CREATE posts the request parameters as the JSON body.
#[tokio::test]
async fn wallet_create_posts_params() {
    let server = MockServer::start().await;

    let params = json!({"label": "new wallet", "m": 2, "n": 3});

    Mock::given(method("POST"))
        .and(path("/wallet"))
        .and(bearer_token("test-token"))
        .and(body_json(&params))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "w9", "label": "new wallet"})),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let wallet = Wallet::create(&client, &credential(), &[], params)
        .await
        .expect("create should succeed");

    assert_eq!(wallet.id().unwrap(), "w9");
}

/// Approving a pending approval PUTs a state update against its id.
#[tokio::test]
async fn pending_approval_approve_puts_state() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/pendingapprovals/ap1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ap1",
            "state": "pending"
        })))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/pendingapprovals/ap1"))
        .and(body_json(json!({"state": "approved"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ap1",
            "state": "approved"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let approval = PendingApproval::get(&client, &credential(), &[], "ap1")
        .await
        .expect("fetch should succeed");
    assert_eq!(approval.state().unwrap(), "pending");

    let approved = approval.approve().await.expect("approve should succeed");
    assert_eq!(approved.state().unwrap(), "approved");
}

/// Paging parameters ride the query string on GET.
#[tokio::test]
async fn keychain_list_sends_paging_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/keychain"))
        .and(query_param("skip", "0"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "keychains": [{"xpub": "xpub661"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let page = Keychain::list_page(&client, &credential(), 0, 100)
        .await
        .expect("paged list should succeed");

    assert!(page.resource().property("keychains").is_ok());
}

/// Sharing a wallet posts against the wallet's own share path, with the
/// wallet id substituted from the positional arguments.
#[tokio::test]
async fn share_wallet_posts_to_wallet_share_path() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/wallet/w1/simpleshare"))
        .and(body_json(json!({
            "user": "friend@example.com",
            "permissions": "view,spend",
            "skipKeychain": false,
            "disableEmail": false,
            "walletPassphrase": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "share1",
            "walletId": "w1"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let share = WalletShare::share_wallet(
        &client,
        &credential(),
        "w1",
        "friend@example.com",
        &["view", "spend"],
        Some("hunter2"),
        false,
        false,
    )
    .await
    .expect("share should succeed");

    assert_eq!(share.id().unwrap(), "share1");
    assert_eq!(share.wallet_id().unwrap(), "w1");
}

/// A 401 reply maps to `Unauthorized` and carries the server's error
/// message.
#[tokio::test]
async fn unauthorized_maps_to_typed_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallet/abc123"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "invalid token"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = Wallet::get(&client, &credential(), &[], "abc123")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Unauthorized(message) if message == "invalid token"));
}

/// A 404 reply maps to `NotFound`.
#[tokio::test]
async fn not_found_maps_to_typed_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallet/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "not found"})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = Wallet::get(&client, &credential(), &[], "missing")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NotFound(_)));
}

/// Statuses without a dedicated variant fall back to `Http`.
#[tokio::test]
async fn server_error_maps_to_http_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallet"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = Wallet::list(&client, &credential(), &[], None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Http { status: 503 }));
}

/// A blank token is rejected before anything reaches the wire.
#[tokio::test]
async fn blank_token_never_reaches_the_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = Wallet::get(&client, &Credential::from("   "), &[], "abc123")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidAccessToken(_)));
}

/// Wallets have no DELETE entry; asking for one fails locally.
#[tokio::test]
async fn action_missing_from_table_never_reaches_the_server() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = Wallet::request_resource(&client, &credential(), "DELETE", &["w1"], None)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::UnknownAction(action) if action == "DELETE"));
}

/// An empty 2xx body comes back as JSON null from the raw client.
#[tokio::test]
async fn empty_success_body_yields_null() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/session"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = Client::new(Environment::Custom(server.uri())).expect("client should build");
    let value = client
        .get("session", Some(&credential()))
        .await
        .expect("request should succeed");

    assert!(value.is_null());
}

/// A success reply that is not JSON surfaces as a deserialization error.
#[tokio::test]
async fn malformed_json_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/wallet/abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = Wallet::get(&client, &credential(), &[], "abc123")
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Deserialize(_)));
}
