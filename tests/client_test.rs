use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use deezrs::client::DeezerClient;
use deezrs::config::ClientConfig;
use deezrs::error::Error;
use deezrs::request::{ApiBase, Method, Request};
use deezrs::transport::{Transport, TransportResponse};
use deezrs::types::Fetch;

/// Transport fake that records every issued request and replays canned
/// responses, so no test touches the network.
struct FakeTransport {
    responses: Mutex<VecDeque<TransportResponse>>,
    requests: Mutex<Vec<Request>>,
}

impl FakeTransport {
    fn new(responses: Vec<TransportResponse>) -> Self {
        FakeTransport {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn execute(&self, request: &Request) -> deezrs::Result<TransportResponse> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| ok("")))
    }
}

// Helper function to create a 200 response with the given body
fn ok(body: &str) -> TransportResponse {
    TransportResponse {
        status: 200,
        body: body.to_string(),
    }
}

// Helper function to create an empty response with the given status
fn status(status: u16) -> TransportResponse {
    TransportResponse {
        status,
        body: String::new(),
    }
}

// Helper function to create a client wired to a recording fake transport
fn test_client(responses: Vec<TransportResponse>) -> (DeezerClient, Arc<FakeTransport>) {
    let transport = Arc::new(FakeTransport::new(responses));
    let config = ClientConfig::new("APP_ID", "SECRET", "http://localhost:8000/callback");
    let client = DeezerClient::with_transport(config, transport.clone());
    (client, transport)
}

#[tokio::test]
async fn test_authorization_url_is_pure_and_network_free() {
    let (client, transport) = test_client(vec![]);

    let first = client.authorization_url().unwrap();
    let second = client.authorization_url().unwrap();

    // Identical config yields an identical URL
    assert_eq!(first, second);

    // Carries the three authorization parameters
    assert!(first.starts_with("https://connect.deezer.com/oauth/auth.php?"));
    assert!(first.contains("app_id=APP_ID"));
    assert!(first.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8000%2Fcallback"));
    assert!(first.contains("perms=manage_library"));

    // Never contacts the transport
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_authorization_url_uses_configured_perms() {
    let transport = Arc::new(FakeTransport::new(vec![]));
    let config = ClientConfig::new("APP_ID", "SECRET", "http://localhost:8000/callback")
        .with_perms("basic_access");
    let client = DeezerClient::with_transport(config, transport);

    let url = client.authorization_url().unwrap();
    assert!(url.contains("perms=basic_access"));
}

#[tokio::test]
async fn test_exchange_code_parses_token_body() {
    let (client, transport) = test_client(vec![ok("access_token=ABC123&expires=0")]);

    let token = client.exchange_code("THE_CODE").await.unwrap();
    assert_eq!(token.access_token(), Some("ABC123"));
    assert_eq!(token.expires(), Some("0"));

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];

    // GET against the auth base's token endpoint
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.base, ApiBase::Auth);
    assert_eq!(
        request.url,
        "https://connect.deezer.com/oauth/access_token.php"
    );

    // Carries the app credentials and the code, plus the verb echo
    assert_eq!(request.params.get("app_id").map(String::as_str), Some("APP_ID"));
    assert_eq!(request.params.get("secret").map(String::as_str), Some("SECRET"));
    assert_eq!(
        request.params.get("code").map(String::as_str),
        Some("THE_CODE")
    );
    assert_eq!(
        request.params.get("request_method").map(String::as_str),
        Some("GET")
    );

    // Auth-base calls never carry an access token
    assert!(!request.params.contains_key("access_token"));
}

#[tokio::test]
async fn test_exchange_code_does_not_store_the_token() {
    let (client, _transport) = test_client(vec![ok("access_token=ABC123&expires=0")]);

    let token = client.exchange_code("THE_CODE").await.unwrap();

    // Applying the token is the caller's explicit step
    assert_eq!(client.access_token().await, None);
    client.set_access_token(token.access_token().unwrap()).await;
    assert_eq!(client.access_token().await.as_deref(), Some("ABC123"));
}

#[tokio::test]
async fn test_exchange_code_rejects_malformed_body() {
    let (client, _transport) = test_client(vec![ok("<html>borked</html>")]);

    let result = client.exchange_code("THE_CODE").await;
    assert!(matches!(result, Err(Error::MalformedAuthResponse { .. })));
}

#[tokio::test]
async fn test_data_requests_carry_verb_and_current_token() {
    let (client, transport) = test_client(vec![
        ok(r#"{"id": 1, "name": "someone"}"#),
        ok(r#"{"id": 99}"#),
        ok("true"),
    ]);
    client.set_access_token("TOKEN_A").await;

    client.me().await.unwrap();
    client.playlist_create("mix").await.unwrap();

    // Token updates apply to requests built afterwards
    client.set_access_token("TOKEN_B").await;
    client.playlist_remove_tracks(7, &[4]).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 3);

    let expected = [
        (Method::Get, "TOKEN_A"),
        (Method::Post, "TOKEN_A"),
        (Method::Delete, "TOKEN_B"),
    ];
    for (request, (method, token)) in requests.iter().zip(expected) {
        assert_eq!(request.base, ApiBase::Data);
        assert_eq!(request.method, method);
        assert_eq!(
            request.params.get("request_method").map(String::as_str),
            Some(method.as_str())
        );
        assert_eq!(
            request.params.get("access_token").map(String::as_str),
            Some(token)
        );
    }
}

#[tokio::test]
async fn test_search_track_merges_filters() {
    let (client, transport) = test_client(vec![ok(
        r#"{"data": [{"id": 3, "title": "One More Time"}], "total": 1}"#,
    )]);

    let result = client
        .search_track("one more time", &[("order", "RANKING")])
        .await
        .unwrap();

    let page = result.found().unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].title, "One More Time");

    let request = &transport.requests()[0];
    assert!(request.url.ends_with("/search/track"));
    assert_eq!(
        request.params.get("q").map(String::as_str),
        Some("one more time")
    );
    assert_eq!(
        request.params.get("order").map(String::as_str),
        Some("RANKING")
    );
}

#[tokio::test]
async fn test_search_track_rejects_reserved_filter_keys() {
    let (client, transport) = test_client(vec![]);

    let result = client
        .search_track("query", &[("access_token", "sneaky")])
        .await;
    assert!(matches!(result, Err(Error::ReservedParameter { .. })));

    // Rejected before anything is issued
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_empty_get_body_yields_empty_fetch() {
    for body in ["", "null", "{}"] {
        let (client, _transport) = test_client(vec![ok(body)]);

        let result = client.search_track("nothing here", &[]).await.unwrap();
        assert!(result.is_empty(), "body {:?} should yield Fetch::Empty", body);
    }
}

#[tokio::test]
async fn test_track_lookup_by_id() {
    let (client, transport) = test_client(vec![ok(
        r#"{"id": 42, "title": "Aerodynamic", "duration": 212,
            "artist": {"id": 27, "name": "Daft Punk"},
            "album": {"id": 300, "title": "Discovery"}}"#,
    )]);

    let track = client.track(42).await.unwrap().found().unwrap();
    assert_eq!(track.id, 42);
    assert_eq!(track.artist.unwrap().name, "Daft Punk");
    assert_eq!(track.album.unwrap().title, "Discovery");

    assert!(transport.requests()[0].url.ends_with("/track/42"));
}

#[tokio::test]
async fn test_playlist_track_ids_encode_comma_joined() {
    let (client, transport) = test_client(vec![ok("true"), ok("true")]);

    client.playlist_add_tracks(55, &[1, 2, 3]).await.unwrap();
    client.playlist_remove_tracks(55, &[1, 2, 3]).await.unwrap();

    let requests = transport.requests();

    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[1].method, Method::Delete);
    for request in &requests {
        assert!(request.url.ends_with("/playlist/55/tracks"));
        assert_eq!(request.params.get("songs").map(String::as_str), Some("1,2,3"));
    }
}

#[tokio::test]
async fn test_playlist_info_decodes() {
    let (client, _transport) = test_client(vec![ok(
        r#"{"id": 55, "title": "roadtrip", "public": true, "nb_tracks": 2,
            "creator": {"id": 1, "name": "someone"},
            "tracks": {"data": [{"id": 10, "title": "a"}, {"id": 11, "title": "b"}]}}"#,
    )]);

    let playlist = client.playlist(55).await.unwrap().found().unwrap();
    assert_eq!(playlist.title, "roadtrip");
    assert_eq!(playlist.nb_tracks, Some(2));
    assert_eq!(playlist.tracks.unwrap().data.len(), 2);
}

#[tokio::test]
async fn test_history_endpoint() {
    let (client, transport) = test_client(vec![ok(
        r#"{"data": [{"id": 5, "title": "played recently"}], "total": 1}"#,
    )]);

    let history = client.history().await.unwrap();
    assert!(matches!(history, Fetch::Found(_)));
    assert!(transport.requests()[0].url.ends_with("/user/me/history"));
}

#[tokio::test]
async fn test_refresh_token_fails_without_network() {
    let (client, transport) = test_client(vec![]);

    let result = client.refresh_token().await;
    assert!(matches!(
        result,
        Err(Error::NotImplemented { operation: "refresh_token" })
    ));

    // Must never attempt a network call
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_http_status_mapping() {
    let (client, _transport) = test_client(vec![status(401)]);
    assert!(matches!(client.me().await, Err(Error::Unauthorized)));

    let (client, _transport) = test_client(vec![status(404)]);
    assert!(matches!(client.track(1).await, Err(Error::NotFound)));

    let (client, _transport) = test_client(vec![status(500)]);
    assert!(matches!(
        client.history().await,
        Err(Error::Server { status: 500 })
    ));
}
