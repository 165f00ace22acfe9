use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::any::Any;
use tracing::error;

pub const EMPTY_TEXT_MESSAGE: &str = "O texto do e-mail não pode estar vazio.";
pub const INVALID_BODY_MESSAGE: &str = "Corpo da requisição inválido.";
pub const UNKNOWN_LEVEL_MESSAGE: &str =
    "Nível de risco desconhecido. Use Alta, Média ou Baixa.";
pub const INTERNAL_MESSAGE: &str = "Erro interno ao processar a análise.";

#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({ "error": true, "message": message });
        (status, Json(body)).into_response()
    }
}

/// Turns a handler panic into the JSON 500 envelope.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    error!(detail, "request handler panicked");
    ApiError::Internal(INTERNAL_MESSAGE.to_string()).into_response()
}
