use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use csquare_cli::client::{ApiClient, AuthEvent, Backend, ClubApi};
use csquare_cli::config::{MemoryTokenStore, SharedTokenStore, TokenStore};
use csquare_cli::error::ApiErrorKind;

#[derive(Debug, Clone)]
struct Seen {
    request_line: String,
    authorization: Option<String>,
    body: String,
}

/// Serve every connection with the same canned response and remember what
/// came in.
async fn serve(status: u16, body: &'static str) -> (String, Arc<Mutex<Vec<Seen>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = seen.clone();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else { break };
            let log = log.clone();
            tokio::spawn(async move {
                let request = read_request(&mut socket).await;
                log.lock().unwrap().push(request);

                let response = format!(
                    "HTTP/1.1 {} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (format!("http://{}/api", address), seen)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> Seen {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let read = socket.read(&mut chunk).await.unwrap();
        if read == 0 {
            break buffer.len();
        }
        buffer.extend_from_slice(&chunk[..read]);
        if let Some(pos) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buffer[..header_end]).to_string();
    let mut lines = head.lines();
    let request_line = lines.next().unwrap_or_default().to_string();
    let mut authorization = None;
    let mut content_length = 0;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            match name.trim().to_lowercase().as_str() {
                "authorization" => authorization = Some(value.trim().to_string()),
                "content-length" => content_length = value.trim().parse().unwrap_or(0),
                _ => {}
            }
        }
    }

    while buffer.len() < header_end + content_length {
        let read = socket.read(&mut chunk).await.unwrap();
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);
    }
    let body = String::from_utf8_lossy(&buffer[header_end..]).to_string();

    Seen {
        request_line,
        authorization,
        body,
    }
}

fn client(url: &str, token: Option<&str>) -> (ApiClient, SharedTokenStore) {
    let tokens: SharedTokenStore = match token {
        Some(token) => Arc::new(MemoryTokenStore::with_token(token)),
        None => Arc::new(MemoryTokenStore::new()),
    };
    let client = ApiClient::new(url, Duration::from_secs(5), tokens.clone()).unwrap();
    (client, tokens)
}

#[tokio::test]
async fn test_lists_are_unwrapped_from_data() {
    let (url, seen) = serve(
        200,
        r#"{"success":true,"data":[{"id":1,"type":"upcoming","date":"2025-04-02","title":"Rust Workshop"}]}"#,
    )
    .await;
    let (client, _) = client(&url, None);
    let api = ClubApi::new(client);

    let events = api.list_events().await.unwrap();

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "1");
    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].request_line, "GET /api/events HTTP/1.1");
    assert_eq!(seen[0].authorization, None);
}

#[tokio::test]
async fn test_stored_token_is_sent_as_bearer() {
    let (url, seen) = serve(200, r#"{"success":true}"#).await;
    let (client, _) = client(&url, Some("abc123"));

    client.delete("/events/7").await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].request_line, "DELETE /api/events/7 HTTP/1.1");
    assert_eq!(seen[0].authorization.as_deref(), Some("Bearer abc123"));
}

#[tokio::test]
async fn test_json_body_is_posted() {
    let (url, seen) = serve(201, r#"{"success":true}"#).await;
    let (client, _) = client(&url, Some("abc123"));

    client.post("/team", &json!({ "name": "Asha" })).await.unwrap();

    let seen = seen.lock().unwrap();
    let body: serde_json::Value = serde_json::from_str(&seen[0].body).unwrap();
    assert_eq!(body, json!({ "name": "Asha" }));
}

#[tokio::test]
async fn test_401_clears_token_and_broadcasts() {
    let (url, _) = serve(401, r#"{"message":"Token expired"}"#).await;
    let (client, tokens) = client(&url, Some("stale"));
    let mut events = client.subscribe();

    let error = client.get("/gallery").await.unwrap_err();

    assert_eq!(error.kind(), ApiErrorKind::Unauthorized);
    assert_eq!(error.message, "Token expired");
    assert_eq!(tokens.load(), None);
    assert_eq!(events.try_recv().unwrap(), AuthEvent::Unauthorized { status: 401 });
}

#[tokio::test]
async fn test_login_401_keeps_session() {
    let (url, _) = serve(401, r#"{"success":false,"error":"Invalid credentials"}"#).await;
    let (client, tokens) = client(&url, Some("still-good"));
    let mut events = client.subscribe();
    let api = ClubApi::new(client);

    let error = api.login("admin", "wrong").await.unwrap_err();

    assert_eq!(error.backend_error(), Some("Invalid credentials"));
    assert_eq!(tokens.load().as_deref(), Some("still-good"));
    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn test_non_json_error_body_is_kept() {
    let (url, _) = serve(502, "Bad Gateway").await;
    let (client, _) = client(&url, None);

    let error = client.get("/events").await.unwrap_err();

    assert_eq!(error.kind(), ApiErrorKind::Server);
    assert_eq!(error.message, "Request failed with status code 502");
    assert_eq!(error.data, Some(json!("Bad Gateway")));
}

#[tokio::test]
async fn test_unreachable_backend_is_a_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    let (client, _) = client(&format!("http://{}/api", address), None);

    let error = client.get("/team").await.unwrap_err();

    assert_eq!(error.kind(), ApiErrorKind::Network);
    assert_eq!(error.status, None);
}

#[tokio::test]
async fn test_silent_backend_hits_the_request_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            // keep the connection open without ever answering
            held.push(socket);
        }
    });

    let tokens: SharedTokenStore = Arc::new(MemoryTokenStore::new());
    let client = ApiClient::new(
        &format!("http://{}/api", address),
        Duration::from_millis(300),
        tokens,
    )
    .unwrap();

    let error = client.get("/events").await.unwrap_err();

    assert_eq!(error.kind(), ApiErrorKind::Timeout);
    assert_eq!(error.status, None);
}
