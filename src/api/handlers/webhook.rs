//! GitHub webhook endpoints: receiver and activity listing.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::http::header::CONTENT_TYPE;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;

use crate::api::dto::RecordListResponse;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, HookError};
use crate::views::render_listing;

/// Plain-text body returned by the receiver.
pub const ACKNOWLEDGEMENT: &str = "inserted to collection";

/// `POST /webhook/receiver` — Record a GitHub webhook delivery.
///
/// Bodies not declared as `application/json` are acknowledged without
/// being read, so the body size limit only applies to JSON deliveries. A
/// store failure is logged and still acknowledged, so GitHub does not mark
/// the delivery as failed.
///
/// # Errors
///
/// Returns [`HookError::PayloadTooLarge`] if a JSON body exceeds the
/// configured limit, [`HookError::InvalidPayload`] if it is not valid JSON
/// and [`HookError::UnsupportedEvent`] if it is not a push or pull request.
#[utoipa::path(
    post,
    path = "/webhook/receiver",
    tag = "Webhook",
    summary = "Receive a GitHub webhook",
    description = "Classifies a push, pull_request or merge payload, stores the normalized record and acknowledges with plain text.",
    request_body(content = serde_json::Value, content_type = "application/json"),
    responses(
        (status = 200, description = "Delivery acknowledged", body = String, content_type = "text/plain"),
        (status = 400, description = "Body is not valid JSON", body = ErrorResponse),
        (status = 413, description = "JSON body exceeds the size limit", body = ErrorResponse),
        (status = 422, description = "Payload is not a supported event", body = ErrorResponse),
    )
)]
#[tracing::instrument(
    name = "receive_webhook",
    skip_all,
    fields(
        github_event = header_str(request.headers(), "x-github-event").unwrap_or("none"),
        delivery = header_str(request.headers(), "x-github-delivery").unwrap_or("none"),
        content_length = header_str(request.headers(), "content-length").unwrap_or("unknown"),
    )
)]
pub async fn receive_webhook(
    State(state): State<AppState>,
    request: Request,
) -> Result<&'static str, HookError> {
    if !is_json_content(request.headers()) {
        tracing::debug!("content type is not application/json; skipping payload");
        return Ok(ACKNOWLEDGEMENT);
    }

    let body = Bytes::from_request(request, &state)
        .await
        .map_err(|rejection| match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => HookError::PayloadTooLarge(rejection.body_text()),
            _ => HookError::InvalidPayload(rejection.body_text()),
        })?;

    let payload: Value =
        serde_json::from_slice(&body).map_err(|e| HookError::InvalidPayload(e.to_string()))?;

    match state.webhook_service.ingest(&payload).await {
        Ok(_) => {}
        Err(HookError::Persistence(reason)) => {
            tracing::error!(%reason, "failed to insert record; acknowledging delivery anyway");
        }
        Err(err) => {
            tracing::warn!(error = %err, "rejected webhook payload");
            return Err(err);
        }
    }

    Ok(ACKNOWLEDGEMENT)
}

/// `GET /webhook/` — HTML activity feed.
///
/// # Errors
///
/// Returns [`HookError::Persistence`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/webhook/",
    tag = "Webhook",
    summary = "Activity feed",
    description = "Renders every stored record as a line of text, in storage order.",
    responses(
        (status = 200, description = "HTML listing", body = String, content_type = "text/html"),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
pub async fn list_events(State(state): State<AppState>) -> Result<impl IntoResponse, HookError> {
    let records = state.webhook_service.list_formatted().await?;
    Ok(Html(render_listing(&records)))
}

/// `GET /webhook/records` — The activity feed as JSON.
///
/// # Errors
///
/// Returns [`HookError::Persistence`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/webhook/records",
    tag = "Webhook",
    summary = "Activity feed (JSON)",
    description = "Returns every stored record as `{id, formatted_doc}` pairs, in storage order.",
    responses(
        (status = 200, description = "Record listing", body = RecordListResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse),
    )
)]
pub async fn list_records(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, HookError> {
    let records = state.webhook_service.list_formatted().await?;
    Ok(Json(RecordListResponse::from(records)))
}

/// Webhook routes, mounted at the root.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/webhook/receiver", post(receive_webhook))
        .route("/webhook/", get(list_events))
        .route("/webhook", get(list_events))
        .route("/webhook/records", get(list_records))
}

/// `true` when the request declares a JSON body. Media type parameters
/// such as `charset` are ignored.
fn is_json_content(headers: &HeaderMap) -> bool {
    header_str(headers, CONTENT_TYPE.as_str())
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn with_content_type(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn json_content_type_detection() {
        assert!(is_json_content(&with_content_type("application/json")));
        assert!(is_json_content(&with_content_type("Application/JSON; charset=utf-8")));
        assert!(!is_json_content(&with_content_type(
            "application/x-www-form-urlencoded"
        )));
        assert!(!is_json_content(&with_content_type("text/plain")));
        assert!(!is_json_content(&HeaderMap::new()));
    }
}
