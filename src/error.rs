//! Error types for the extraction service

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Result type alias for the extraction service
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the extraction service
#[derive(Error, Debug)]
pub enum Error {
    /// Request carried no `file` field
    #[error("No se envió un archivo")]
    MissingFile,

    /// PDF or image decoding failed
    #[error("Error procesando archivo: {reason}")]
    Decode { reason: String },

    /// OCR engine failed
    #[error("Error en OCR: {reason}")]
    Ocr { reason: String },

    /// Completion call failed (network, auth, quota)
    #[error("Error en Cohere: {reason}")]
    Completion { reason: String },

    /// Model reply was not parseable JSON; carries the unmodified reply
    #[error("JSON inválido devuelto por el modelo")]
    InvalidModelReply { raw: String },

    /// Required environment variable is absent
    #[error("Falta la variable de entorno {name}")]
    MissingEnv { name: String },
}

impl Error {
    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::MissingFile => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            // Display form only; raw model text never reaches the logs
            tracing::error!("request failed: {}", self);
        }

        let body = match &self {
            Error::InvalidModelReply { raw } => json!({ "error": self.to_string(), "raw": raw }),
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
