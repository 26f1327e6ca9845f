//! Integration tests for the relay agent

use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;
use tower::ServiceExt;

const ZPL: &str = "^XA\n^CI28\n^FO50,50^A0N,35,35^FDProd: Teste^FS\n^XZ\n";

async fn post_print(uri: &str, body: &str) -> (StatusCode, Value) {
    let response = label_agent::router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test(flavor = "multi_thread")]
async fn relays_body_unchanged() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let printer = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        socket.read_to_end(&mut received).await.unwrap();
        received
    });

    let uri = format!("/print?printerIp={}&printerPort={}", addr.ip(), addr.port());
    let (status, body) = post_print(&uri, ZPL).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "ZPL forwarded to printer");
    assert_eq!(printer.await.unwrap(), ZPL.as_bytes());
}

#[tokio::test]
async fn missing_printer_ip_is_rejected() {
    let (status, body) = post_print("/print", ZPL).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing printerIp query parameter");
}

#[tokio::test]
async fn empty_body_is_rejected() {
    let (status, body) = post_print("/print?printerIp=127.0.0.1", "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No ZPL data in request body");
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_printer_reports_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let uri = format!("/print?printerIp={}&printerPort={}", addr.ip(), addr.port());
    let (status, body) = post_print(&uri, ZPL).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body["error"].as_str().unwrap().contains("Connection"));
}

#[tokio::test]
async fn responses_carry_request_id() {
    let response = label_agent::router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/print")
                .body(Body::from(ZPL))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn cors_preflight_is_answered() {
    let response = label_agent::router()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/print")
                .header(header::ORIGIN, "http://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}
