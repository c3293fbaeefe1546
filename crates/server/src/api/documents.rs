use axum::Json;
use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use uuid::Uuid;

use depot_core::Document;

use super::AppState;
use crate::error::ApiError;

/// `POST /upload` -- ingest one file from a multipart form.
///
/// Expects a single `file` field; the part's filename becomes the document's
/// display name. Responds `201 Created` with an empty body on success.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<StatusCode, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Malformed(format!("unreadable multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        // The name is stored verbatim as the client supplied it; a part
        // without a filename parameter stores an empty name.
        let filename = field.file_name().unwrap_or_default().to_owned();
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::Malformed(format!("unreadable file field: {e}")))?;

        state.service.ingest(&filename, data).await?;
        return Ok(StatusCode::CREATED);
    }

    Err(ApiError::Malformed("missing file field".to_owned()))
}

/// `GET /documents` -- list all uploaded documents as JSON.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Document>>, ApiError> {
    Ok(Json(state.service.list().await?))
}

/// `GET /dl/{id}` -- download a document's content by id.
///
/// The body is served as `application/octet-stream` with a
/// `Content-Disposition` attachment header carrying the original filename.
pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    // Ids are UUIDs by construction, so a segment that doesn't parse can
    // never have been issued: report it as not found, same as an unknown id.
    let Ok(id) = id.parse::<Uuid>() else {
        return Err(ApiError::NotFound);
    };

    let fetched = state.service.fetch(id).await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/octet-stream"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        content_disposition(&fetched.name),
    );
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(fetched.size));

    Ok((StatusCode::OK, headers, Body::from(fetched.data)).into_response())
}

/// Build a `Content-Disposition: attachment` header for an untrusted filename.
///
/// The filename is client-supplied text, so it must never reach the header
/// verbatim: quotes, backslashes, control bytes, and non-ASCII characters are
/// replaced with `_` in the quoted fallback, and names that needed any
/// replacement also get an RFC 5987 `filename*` parameter carrying the
/// percent-encoded original.
fn content_disposition(name: &str) -> HeaderValue {
    let fallback: String = name
        .chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_control() || !c.is_ascii() => '_',
            c => c,
        })
        .collect();

    let value = if fallback == name {
        format!("attachment; filename=\"{fallback}\"")
    } else {
        let encoded = utf8_percent_encode(name, NON_ALPHANUMERIC);
        format!("attachment; filename=\"{fallback}\"; filename*=UTF-8''{encoded}")
    };

    // The value is all printable ASCII by construction.
    HeaderValue::from_str(&value)
        .unwrap_or_else(|_| HeaderValue::from_static("attachment; filename=\"download\""))
}
