use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    /// Path parameter is not a 24-char hex ObjectId
    InvalidIdentifier(String),
    NotFound(String),
    /// Request body could not be decoded as JSON
    MalformedPayload(String),
    /// Connection, query or timeout failure in the document store
    StoreUnavailable(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidIdentifier(msg) => write!(f, "Invalid identifier: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::MalformedPayload(msg) => write!(f, "Malformed payload: {}", msg),
            AppError::StoreUnavailable(msg) => write!(f, "Store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::StoreUnavailable(e.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidIdentifier(_) | AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            AppError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "error": self.to_string()
        }))
    }
}
