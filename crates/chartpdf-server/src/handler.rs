//! HTTP handlers.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chartpdf_common::truncate_string;
use chartpdf_graphs::ChartKind;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Longest file name written to logs, in characters.
const MAX_LOGGED_NAME: usize = 64;

/// Header carrying the request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// An uploaded file part.
#[derive(Debug)]
pub struct Upload {
    /// Client-side file name.
    pub file_name: String,
    /// File contents.
    pub bytes: Bytes,
}

/// The `/generate` form.
#[derive(Debug)]
pub struct GenerateForm {
    /// Requester address; required but otherwise unused.
    pub email: String,
    /// Chart tag as sent.
    pub chart_type: String,
    /// The table to chart.
    pub file: Upload,
}

impl GenerateForm {
    /// Reads the form, rejecting it when any required field is missing or empty.
    pub async fn read(mut multipart: Multipart) -> ApiResult<Self> {
        let mut email = None;
        let mut chart_type = None;
        let mut file = None;

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "email" => email = Some(field.text().await?),
                "chart_type" => chart_type = Some(field.text().await?),
                "file" => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    file = Some(Upload { file_name, bytes });
                }
                other => debug!(field = other, "Ignoring unexpected form field"),
            }
        }

        let email = email.filter(|value| !value.is_empty());
        let chart_type = chart_type.filter(|value| !value.is_empty());
        let file = file.filter(|upload| !upload.file_name.is_empty());

        match (email, chart_type, file) {
            (Some(email), Some(chart_type), Some(file)) => Ok(Self {
                email,
                chart_type,
                file,
            }),
            _ => Err(ApiError::MissingFields),
        }
    }
}

/// `POST /generate`: upload a table, receive a chart PDF.
pub async fn generate(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Response> {
    let request_id = request_id(&headers);

    let multipart = multipart.map_err(|rejection| {
        debug!(%rejection, "Request body is not a multipart form");
        ApiError::MissingFields
    })?;
    let form = GenerateForm::read(multipart).await?;
    let kind: ChartKind = form.chart_type.parse()?;

    info!(
        %request_id,
        %kind,
        file = %truncate_string(&form.file.file_name, MAX_LOGGED_NAME),
        bytes = form.file.bytes.len(),
        "Generating chart"
    );

    if let Err(e) = state
        .store
        .save_upload(request_id, &form.file.file_name, &form.file.bytes)
        .await
    {
        warn!(%request_id, error = %e, "Failed to store upload");
    }

    let pipeline = state.pipeline.clone();
    let keep_png = state.store.keeps_outputs();
    let Upload { file_name, bytes } = form.file;
    let generated =
        tokio::task::spawn_blocking(move || pipeline.run(kind, &file_name, &bytes, keep_png)).await??;

    if let Err(e) = state
        .store
        .save_outputs(request_id, generated.png.as_deref(), &generated.pdf)
        .await
    {
        warn!(%request_id, error = %e, "Failed to store generated artifacts");
    }

    Ok(pdf_response(&state.config.pdf.download_name, generated.pdf))
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `ok` while the server answers.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Server start time.
    pub started_at: DateTime<Utc>,
    /// Seconds since start.
    pub uptime_seconds: i64,
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        started_at: state.started_at,
        uptime_seconds: (Utc::now() - state.started_at).num_seconds(),
    })
}

/// `GET /chart-types`: every accepted `chart_type` tag.
pub async fn chart_types() -> Json<Vec<&'static str>> {
    Json(ChartKind::ALL.iter().map(|kind| kind.tag()).collect())
}

fn pdf_response(download_name: &str, pdf: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{download_name}\""),
            ),
        ],
        pdf,
    )
        .into_response()
}

/// The `x-request-id` header, if it holds a UUID.
pub(crate) fn parse_request_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
}

/// Request id from the `x-request-id` header when it is a UUID, otherwise a fresh one.
fn request_id(headers: &HeaderMap) -> Uuid {
    parse_request_id(headers).unwrap_or_else(Uuid::new_v4)
}
