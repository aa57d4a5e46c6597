use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use super::AppState;
use crate::core::extract;
use crate::utils::error::ConvertError;

// --- POST /convert ---

pub(crate) async fn handle_convert(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Response {
    let input = match resolve_input(body) {
        Ok(value) => value,
        Err(e) => return error_response(e),
    };

    match state.converter.convert(input) {
        Ok(result) => {
            tracing::info!("Converted {} rows into {}", result.rows.len(), result.file_name);
            Json(result).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Unwraps the request envelope. Workflow engines send either an object with
/// a `jsonInput` field (string-encoded or already structured), a raw JSON
/// string, or the bare document itself.
fn resolve_input(body: Value) -> Result<Value, ConvertError> {
    match body {
        Value::Object(mut map) => {
            if let Some(raw) = map.remove("jsonInput") {
                return match raw {
                    Value::String(text) => extract::decode_text(&text),
                    structured => Ok(structured),
                };
            }
            Ok(Value::Object(map))
        }
        Value::String(text) => extract::decode_text(&text),
        other => Ok(other),
    }
}

fn error_response(err: ConvertError) -> Response {
    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    if status.is_server_error() {
        tracing::error!("Conversion failed: {}", err);
    } else {
        tracing::debug!("Rejected request: {}", err);
    }

    (status, Json(json!({ "detail": err.to_string() }))).into_response()
}

// --- GET /health ---

pub(crate) async fn handle_health() -> Response {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
    .into_response()
}

// --- GET /info ---

pub(crate) async fn handle_info() -> Response {
    Json(json!({
        "name": "QIESI Toolkit API",
        "version": env!("CARGO_PKG_VERSION"),
        "routes": {
            "convert": "/convert",
            "health": "/health",
            "info": "/info",
        },
    }))
    .into_response()
}
