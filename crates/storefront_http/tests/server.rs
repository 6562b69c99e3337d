use storefront_core::{Database, Validator};
use storefront_http::{serve_on, AppState};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;

async fn raw_request(addr: std::net::SocketAddr, request: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn serves_sqlite_backed_api_until_shutdown() {
    let db = Database::open_in_memory().unwrap();
    let state = AppState::sqlite(db, Validator::default());
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let server = tokio::spawn(serve_on(listener, state, async move {
        let _ = stop_rx.await;
    }));

    let body = r#"{"name":"Ada","email":"ada@example.com","loyalty_pts":5}"#;
    let created = raw_request(
        addr,
        &format!(
            "POST /api/customers/ HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        ),
    )
    .await;
    assert!(created.starts_with("HTTP/1.1 201"));
    assert!(created.contains(r#""customer_id":1"#));
    assert!(created.to_ascii_lowercase().contains("x-request-id:"));

    let fetched = raw_request(
        addr,
        "GET /api/customers/1 HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;
    assert!(fetched.starts_with("HTTP/1.1 200"));
    assert!(fetched.contains(r#""email":"ada@example.com""#));

    stop_tx.send(()).unwrap();
    server.await.unwrap().unwrap();
}
