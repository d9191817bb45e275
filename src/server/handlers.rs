//! Request handlers.

use super::AppState;
use crate::dispatcher::ContactPayload;
use crate::error::DispatchError;
use crate::models::ProviderResponse;
use crate::templates::{render_preview, Layout};
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

/// Success envelope for `POST /api/contact`.
#[derive(Debug, Serialize)]
pub struct ContactSuccess {
    pub success: bool,
    pub data: ProviderResponse,
}

/// Error body shared by all endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        let status = match self {
            DispatchError::MissingFields => StatusCode::BAD_REQUEST,
            DispatchError::UnreadableBody(_) | DispatchError::Delivery(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(ErrorBody::new(self.public_message()))).into_response()
    }
}

pub async fn healthz() -> &'static str {
    "ok"
}

/// `POST /api/contact`
///
/// The body is parsed as JSON whatever its `Content-Type`.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ContactSuccess>, DispatchError> {
    let value: serde_json::Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!("Error reading contact body: {}", e);
        DispatchError::UnreadableBody(e.to_string())
    })?;
    let payload = ContactPayload::from_json(&value);

    let data = state.dispatcher.dispatch(&payload).await?;
    Ok(Json(ContactSuccess {
        success: true,
        data,
    }))
}

/// `GET /api/emails/:template`
pub async fn preview_email(Path(template): Path<String>) -> Response {
    match render_preview(&template, &Layout::current()) {
        Some(email) => Html(email.html).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorBody::new("Unknown template")),
        )
            .into_response(),
    }
}
