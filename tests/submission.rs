//! Real HTTP submissions against a local stub server.

use memodrop::{MemoError, MemoService, ReqwestTransport, Settings};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Accepts one connection, records the raw request and answers with `status`.
async fn stub_server(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;
        let response = format!(
            "HTTP/1.1 {status} Stub\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
        request
    });

    (format!("http://{addr}/"), handle)
}

/// Reads headers plus a `Content-Length` body.
async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 1024];

    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf).to_string();
        if let Some(head_end) = text.find("\r\n\r\n") {
            let body_len = text[..head_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + body_len {
                break;
            }
        }
    }

    String::from_utf8(buf).unwrap()
}

fn settings(server_url: &str) -> Settings {
    Settings {
        server_url: server_url.to_string(),
        access_token: "abc".to_string(),
        ..Settings::default()
    }
}

/// Direct connections only, so proxy variables in the environment cannot interfere.
fn service(timeout: Duration) -> MemoService {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .no_proxy()
        .build()
        .unwrap();
    MemoService::new(Arc::new(ReqwestTransport::from_client(client)))
}

#[tokio::test]
async fn created_memo_is_success() {
    let (url, server) = stub_server(200, r#"{"id":42,"content":"hello"}"#).await;

    let outcome = service(Duration::from_secs(5))
        .create_memo(&settings(&url), "hello")
        .await;

    assert_eq!(outcome, Ok(()));
    let request = server.await.unwrap();
    let lowered = request.to_ascii_lowercase();
    assert!(request.starts_with("POST /api/v1/memos HTTP/1.1\r\n"), "{request}");
    assert!(lowered.contains("authorization: bearer abc\r\n"), "{request}");
    assert!(lowered.contains("content-type: application/json\r\n"), "{request}");
    assert!(request.ends_with(r#"{"content":"hello"}"#), "{request}");
}

#[tokio::test]
async fn trailing_slashes_do_not_double_up() {
    let (url, server) = stub_server(201, "{}").await;

    let outcome = service(Duration::from_secs(5))
        .create_memo(&settings(&format!("  {url}//  ")), "x")
        .await;

    assert_eq!(outcome, Ok(()));
    assert!(server.await.unwrap().starts_with("POST /api/v1/memos HTTP/1.1"));
}

#[tokio::test]
async fn unauthorized_statuses() {
    for status in [401, 403] {
        let (url, _server) = stub_server(status, r#"{"message":"denied"}"#).await;

        let outcome = service(Duration::from_secs(5))
            .create_memo(&settings(&url), "x")
            .await;

        assert_eq!(outcome, Err(MemoError::Unauthorized), "status {status}");
    }
}

#[tokio::test]
async fn other_statuses_are_server_errors() {
    for status in [400, 404, 500, 503] {
        let (url, _server) = stub_server(status, "").await;

        let outcome = service(Duration::from_secs(5))
            .create_memo(&settings(&url), "x")
            .await;

        assert_eq!(outcome, Err(MemoError::Server(status)), "status {status}");
    }
}

#[tokio::test]
async fn unresponsive_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let _server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        read_request(&mut stream).await;
        tokio::time::sleep(Duration::from_secs(30)).await;
        drop(stream);
    });

    let outcome = service(Duration::from_millis(200))
        .create_memo(&settings(&format!("http://{addr}")), "x")
        .await;

    assert!(matches!(outcome, Err(MemoError::Network(_))), "{outcome:?}");
}

#[tokio::test]
async fn refused_connection_is_network_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };

    let outcome = service(Duration::from_secs(5))
        .create_memo(&settings(&format!("http://{addr}")), "x")
        .await;

    let Err(MemoError::Network(detail)) = &outcome else {
        panic!("expected a network error, got {outcome:?}");
    };
    assert!(!detail.is_empty());
}
