//! End-to-end tests against a local axum server using the real reqwest transport.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, Uri};
use pushinator::{PushinatorClient, ReqwestTransport};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
struct CapturedRequest {
    method: String,
    path: String,
    authorization: Option<String>,
    content_type: Option<String>,
    body: serde_json::Value,
}

#[derive(Clone)]
struct MockApi {
    status: StatusCode,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockApi {
    fn requests(&self) -> Vec<CapturedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn record(
    State(api): State<MockApi>,
    method: axum::http::Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, &'static str) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    api.requests.lock().unwrap().push(CapturedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        authorization: header("authorization"),
        content_type: header("content-type"),
        body: serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null),
    });

    (api.status, r#"{"success":true}"#)
}

/// Starts a mock API answering every request with `status`.
async fn spawn_mock_api(status: StatusCode) -> (String, MockApi) {
    let api = MockApi {
        status,
        requests: Arc::new(Mutex::new(Vec::new())),
    };

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().fallback(record).with_state(api.clone());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), api)
}

struct Case {
    name: &'static str,
    token: &'static str,
    channel_id: &'static str,
    message: &'static str,
    server_status: StatusCode,
    expected_error: Option<&'static str>,
}

const CASES: &[Case] = &[
    Case {
        name: "successful notification",
        token: "valid-token",
        channel_id: "channel-123",
        message: "Hello, world!",
        server_status: StatusCode::OK,
        expected_error: None,
    },
    Case {
        name: "missing token",
        token: "",
        channel_id: "channel-123",
        message: "Hello, world!",
        server_status: StatusCode::OK,
        expected_error: Some("API token is required"),
    },
    Case {
        name: "missing channel",
        token: "valid-token",
        channel_id: "",
        message: "Hello, world!",
        server_status: StatusCode::OK,
        expected_error: Some("channel ID is required"),
    },
    Case {
        name: "missing message",
        token: "valid-token",
        channel_id: "channel-123",
        message: "",
        server_status: StatusCode::OK,
        expected_error: Some("message is required"),
    },
    Case {
        name: "server error",
        token: "valid-token",
        channel_id: "channel-123",
        message: "Hello, world!",
        server_status: StatusCode::BAD_REQUEST,
        expected_error: Some("failed to send notification: 400 Bad Request"),
    },
];

#[tokio::test]
async fn test_send_notification_cases() {
    for case in CASES {
        let (base_url, api) = spawn_mock_api(case.server_status).await;

        let mut client = PushinatorClient::new(case.token);
        client.set_base_url(&base_url);

        let result = client.send_notification(case.channel_id, case.message).await;

        match case.expected_error {
            None => assert!(result.is_ok(), "{}: unexpected error {:?}", case.name, result),
            Some(expected) => {
                let err = result.expect_err(case.name);
                assert_eq!(err.to_string(), expected, "{}", case.name);
            }
        }

        let requests = api.requests();
        if matches!(case.expected_error, Some(msg) if !msg.starts_with("failed to send")) {
            assert!(requests.is_empty(), "{}: validation must not hit the network", case.name);
            continue;
        }

        assert_eq!(requests.len(), 1, "{}", case.name);
        let request = &requests[0];
        assert_eq!(request.method, "POST", "{}", case.name);
        assert_eq!(request.path, "/notifications/send", "{}", case.name);
        assert_eq!(
            request.authorization.as_deref(),
            Some(format!("Bearer {}", case.token).as_str()),
            "{}",
            case.name
        );
        assert_eq!(request.content_type.as_deref(), Some("application/json"), "{}", case.name);
        assert_eq!(request.body["channel_id"], case.channel_id, "{}", case.name);
        assert_eq!(request.body["content"], case.message, "{}", case.name);
    }
}

#[tokio::test]
async fn test_server_error_status_line() {
    let (base_url, _api) = spawn_mock_api(StatusCode::INTERNAL_SERVER_ERROR).await;

    let mut client = PushinatorClient::new("valid-token");
    client.set_base_url(base_url);

    let err = client.send_notification("channel-123", "hi").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to send notification: 500 Internal Server Error"
    );
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
}

/// Starts a server that answers one request with a hand-written status line.
async fn spawn_raw_status_server(status_line: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();

        // Read headers and the declared body before answering
        let mut request = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&request);
            if let Some(end) = text.find("\r\n\r\n") {
                let content_length = text[..end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if request.len() >= end + 4 + content_length {
                    break;
                }
            }
        }

        let response =
            format!("HTTP/1.1 {status_line}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn test_api_error_uses_server_reason_phrase() {
    let base_url = spawn_raw_status_server("400 Invalid Channel").await;

    let mut client = PushinatorClient::new("valid-token");
    client.set_base_url(base_url);

    let err = client.send_notification("channel-123", "hi").await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "failed to send notification: 400 Invalid Channel"
    );
    assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
}

#[tokio::test]
async fn test_set_base_url_redirects_requests() {
    let (first_url, first) = spawn_mock_api(StatusCode::OK).await;
    let (second_url, second) = spawn_mock_api(StatusCode::OK).await;

    let mut client = PushinatorClient::new("valid-token");
    client.set_base_url(&first_url);
    client.send_notification("a", "one").await.unwrap();

    client.set_base_url(&second_url);
    client.send_notification("b", "two").await.unwrap();

    assert_eq!(first.requests().len(), 1);
    assert_eq!(second.requests().len(), 1);
    assert_eq!(second.requests()[0].body["content"], "two");
}

#[tokio::test]
async fn test_base_url_prefix_is_kept() {
    let (base_url, api) = spawn_mock_api(StatusCode::OK).await;

    let mut client = PushinatorClient::new("valid-token");
    client.set_base_url(format!("{base_url}/api/v2"));
    client.send_notification("a", "b").await.unwrap();

    assert_eq!(api.requests()[0].path, "/api/v2/notifications/send");
}

#[tokio::test]
async fn test_custom_transport_client() {
    let (base_url, api) = spawn_mock_api(StatusCode::OK).await;

    let transport = ReqwestTransport::new(reqwest::Client::new());
    let mut client = PushinatorClient::with_transport("valid-token", Arc::new(transport));
    client.set_base_url(base_url);

    client.send_notification("a", "b").await.unwrap();
    assert_eq!(api.requests().len(), 1);
}

#[tokio::test]
async fn test_concurrent_sends_share_one_client() {
    let (base_url, api) = spawn_mock_api(StatusCode::OK).await;

    let mut client = PushinatorClient::new("valid-token");
    client.set_base_url(base_url);
    let client = Arc::new(client);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let client = Arc::clone(&client);
            let message = format!("msg-{i}");
            tokio::spawn(async move { client.send_notification("channel", &message).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }
    assert_eq!(api.requests().len(), 8);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut client = PushinatorClient::new("valid-token");
    client.set_base_url(format!("http://{addr}"));

    let err = client.send_notification("a", "b").await.unwrap_err();
    assert!(err.is_transport(), "expected transport error, got {err:?}");
    assert!(!err.to_string().starts_with("failed to send notification"));
}

#[test]
fn test_default_base_url() {
    let client = PushinatorClient::new("test-token");
    assert_eq!(client.base_url(), "https://api.pushinator.com/api/v2");
}
