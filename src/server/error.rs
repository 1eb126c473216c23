use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::core::reply::{ErrorReply, GENERIC_ERROR};
use crate::store::StoreError;

/// A failed store operation on its way back to the caller.
#[derive(Debug)]
pub struct ApiError {
    op: &'static str,
    error: StoreError,
}

impl ApiError {
    /// `map_err` adapter tagging the error with the operation it came from.
    pub fn during(op: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |error| Self { op, error }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.error {
            StoreError::Validation(message) => {
                log::debug!(op = self.op, reason = message.as_str(); "rejected request");
                (StatusCode::BAD_REQUEST, Json(ErrorReply { error: message })).into_response()
            }
            other => {
                log::error!(op = self.op, error:% = other; "store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorReply {
                        error: GENERIC_ERROR.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
