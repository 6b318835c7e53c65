//! Integration tests for chartpdf-server crate.
//!
//! These tests drive the router in-process with `tower::ServiceExt::oneshot`.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chartpdf_common::test_utils::{create_temp_dir, init_test_logging, table_fixtures};
use chartpdf_config::Config;
use chartpdf_server::{create_router, AppState};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

const BOUNDARY: &str = "chartpdf-test-boundary";

enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n").as_bytes(),
                );
            }
            Part::File(name, file_name, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn generate_request(parts: &[Part<'_>]) -> Request<Body> {
    let body = multipart_body(parts);
    Request::builder()
        .method("POST")
        .uri("/generate")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(header::CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap()
}

async fn app_with(config: Config) -> Router {
    init_test_logging();
    create_router(AppState::new(config).await.unwrap())
}

async fn app() -> Router {
    app_with(Config::default()).await
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn sales_form<'a>(chart_type: &'a str) -> Vec<Part<'a>> {
    vec![
        Part::Text("email", "analyst@example.com"),
        Part::Text("chart_type", chart_type),
        Part::File("file", "sales.csv", table_fixtures::sales_csv().as_bytes()),
    ]
}

#[tokio::test]
async fn test_generate_returns_pdf_attachment() {
    let response = app().await.oneshot(generate_request(&sales_form("bar"))).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"chart.pdf\""
    );
    assert!(response.headers().contains_key("x-request-id"));

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(body.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn test_every_chart_type_succeeds() {
    let app = app().await;
    for tag in [
        "bar", "line", "area", "pie", "donut", "histogram", "scatter", "heatmap", "treemap",
        "dashboard",
    ] {
        let response = app.clone().oneshot(generate_request(&sales_form(tag))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "chart type {tag}");
    }
}

#[tokio::test]
async fn test_missing_fields_rejected() {
    let app = app().await;
    let cases: Vec<Vec<Part<'_>>> = vec![
        vec![
            Part::Text("chart_type", "bar"),
            Part::File("file", "sales.csv", b"a,b\n1,2\n"),
        ],
        vec![
            Part::Text("email", "analyst@example.com"),
            Part::File("file", "sales.csv", b"a,b\n1,2\n"),
        ],
        vec![
            Part::Text("email", "analyst@example.com"),
            Part::Text("chart_type", "bar"),
        ],
        vec![
            Part::Text("email", ""),
            Part::Text("chart_type", "bar"),
            Part::File("file", "sales.csv", b"a,b\n1,2\n"),
        ],
        vec![
            Part::Text("email", "analyst@example.com"),
            Part::Text("chart_type", "bar"),
            Part::File("file", "", b"a,b\n1,2\n"),
        ],
    ];

    for parts in cases {
        let response = app.clone().oneshot(generate_request(&parts)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["error"],
            "email, chart_type, file required"
        );
    }
}

#[tokio::test]
async fn test_non_multipart_body_is_missing_fields() {
    let request = Request::builder()
        .method("POST")
        .uri("/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();

    let response = app().await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "email, chart_type, file required");
}

#[tokio::test]
async fn test_unsupported_chart_type() {
    let response = app().await.oneshot(generate_request(&sales_form("radar"))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "Unsupported chart type");
}

#[tokio::test]
async fn test_single_column_upload_is_client_error() {
    let parts = [
        Part::Text("email", "analyst@example.com"),
        Part::Text("chart_type", "line"),
        Part::File("file", "one.csv", table_fixtures::single_column_csv().as_bytes()),
    ];
    let response = app().await.oneshot(generate_request(&parts)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error = json_body(response).await["error"].as_str().unwrap().to_string();
    assert!(error.contains("two columns"), "{error}");
}

#[tokio::test]
async fn test_oversized_upload_rejected() {
    let mut config = Config::default();
    config.server.max_upload_bytes = 1024;

    let big = vec![b'1'; 64 * 1024];
    let parts = [
        Part::Text("email", "analyst@example.com"),
        Part::Text("chart_type", "bar"),
        Part::File("file", "big.csv", &big),
    ];
    let response = app_with(config).await.oneshot(generate_request(&parts)).await.unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_artifacts_written_when_configured() {
    let root = create_temp_dir();
    let mut config = Config::default();
    config.storage.upload_dir = Some(root.path().join("uploads"));
    config.storage.output_dir = Some(root.path().join("output"));

    let response = app_with(config).await.oneshot(generate_request(&sales_form("pie"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let request_id = response.headers()["x-request-id"].to_str().unwrap().to_string();

    let output = root.path().join("output");
    assert!(output.join(format!("{request_id}.pdf")).is_file());
    assert!(output.join(format!("{request_id}.png")).is_file());
    assert!(root
        .path()
        .join("uploads")
        .join(format!("{request_id}_sales.csv"))
        .is_file());
}

#[tokio::test]
async fn test_client_uuid_request_id_honoured() {
    let root = create_temp_dir();
    let mut config = Config::default();
    config.storage.output_dir = Some(root.path().join("output"));

    let id = Uuid::new_v4();
    let mut request = generate_request(&sales_form("bar"));
    request
        .headers_mut()
        .insert("x-request-id", id.to_string().parse().unwrap());

    let response = app_with(config).await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-request-id"], id.to_string().as_str());
    assert!(root.path().join("output").join(format!("{id}.pdf")).is_file());
}

#[tokio::test]
async fn test_non_uuid_request_id_replaced() {
    let root = create_temp_dir();
    let mut config = Config::default();
    config.storage.output_dir = Some(root.path().join("output"));

    let mut request = generate_request(&sales_form("bar"));
    request
        .headers_mut()
        .insert("x-request-id", "not-a-uuid".parse().unwrap());

    let response = app_with(config).await.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let echoed = response.headers()["x-request-id"].to_str().unwrap().to_string();
    let id = Uuid::parse_str(&echoed).unwrap();
    assert!(root.path().join("output").join(format!("{id}.pdf")).is_file());
    assert!(root.path().join("output").join(format!("{id}.png")).is_file());
}

#[tokio::test]
async fn test_xlsx_upload_returns_pdf() {
    let parts = [
        Part::Text("email", "analyst@example.com"),
        Part::Text("chart_type", "line"),
        Part::File("file", "book.xlsx", table_fixtures::sales_xlsx()),
    ];
    let response = app().await.oneshot(generate_request(&parts)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(body.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn test_all_rows_incomplete_is_client_error() {
    let parts = [
        Part::Text("email", "analyst@example.com"),
        Part::Text("chart_type", "bar"),
        Part::File("file", "gaps.csv", table_fixtures::incomplete_csv().as_bytes()),
    ];
    let response = app().await.oneshot(generate_request(&parts)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "No complete rows to chart");
}

#[tokio::test]
async fn test_whitespace_email_accepted() {
    let parts = [
        Part::Text("email", " "),
        Part::Text("chart_type", "bar"),
        Part::File("file", "sales.csv", table_fixtures::sales_csv().as_bytes()),
    ];
    let response = app().await.oneshot(generate_request(&parts)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_endpoint() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app().await.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_chart_types_endpoint() {
    let request = Request::builder().uri("/chart-types").body(Body::empty()).unwrap();
    let response = app().await.oneshot(request).await.unwrap();

    let body = json_body(response).await;
    let tags: Vec<&str> = body.as_array().unwrap().iter().filter_map(Value::as_str).collect();
    assert_eq!(tags.len(), 10);
    assert!(tags.contains(&"dashboard"));
}
