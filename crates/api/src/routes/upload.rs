//! File upload routes.

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tracing::{error, info};

use crate::AppState;
use docdrop_core::upload::{UploadCandidate, UploadError, UploadResponse, UploadService};

/// Request body cap for upload routes.
///
/// Well above the policy maximum so an oversized file reaches the
/// validator and gets its message instead of a framework 413.
const MAX_UPLOAD_BODY: usize = 32 * 1024 * 1024;

/// Creates the upload routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload_file))
        .route("/upload/status", get(upload_status))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY))
}

/// GET `/api/upload/status`
/// Liveness probe for the upload service; no storage dependency.
async fn upload_status() -> &'static str {
    "Upload service is running"
}

/// POST `/api/upload`
/// Accept a multipart form with a single `file` field and forward it to
/// the object store.
async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let multipart = match multipart {
        Ok(multipart) => multipart,
        Err(e) => return internal_error(&e.to_string()),
    };

    let candidate = match read_candidate(multipart).await {
        Ok(candidate) => candidate,
        Err(response) => return response,
    };

    let service = UploadService::new(state.storage.clone());
    let result = service.process_upload(candidate).await;

    if result.success {
        info!(
            file_id = result.file_id.as_deref().unwrap_or_default(),
            file_size = result.file_size,
            "File uploaded"
        );
        (StatusCode::OK, Json(result)).into_response()
    } else {
        info!(message = %result.message, "Upload rejected");
        (StatusCode::BAD_REQUEST, Json(result)).into_response()
    }
}

/// Decode the `file` field of a multipart request into an upload
/// candidate.
///
/// Returns `Ok(None)` when the request carries no `file` field. A
/// failure while reading the field's byte stream maps to a 400 with the
/// read-error message; any other decoding failure maps to a 500.
async fn read_candidate(mut multipart: Multipart) -> Result<Option<UploadCandidate>, Response> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return Ok(None),
            Err(e) => return Err(internal_error(&e.to_string())),
        };

        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(ToString::to_string);
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = match field.bytes().await {
            Ok(data) => data,
            Err(e) => {
                error!(error = %e, "Failed to read upload body");
                let result =
                    UploadResponse::failure(UploadError::stream_read(e.to_string()).to_string());
                return Err((StatusCode::BAD_REQUEST, Json(result)).into_response());
            }
        };

        return Ok(Some(UploadCandidate::new(file_name, content_type, data)));
    }
}

/// 500 response for failures outside the upload pipeline.
fn internal_error(cause: &str) -> Response {
    error!(error = %cause, "Failed to decode upload request");
    let result = UploadResponse::failure(format!("Internal server error: {cause}"));
    (StatusCode::INTERNAL_SERVER_ERROR, Json(result)).into_response()
}
