use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

/// Body of the 404 page for unknown categories and missing tasks.
pub const NOT_FOUND_BODY: &str = "error 404!";

/// Unified page error type.
///
/// Produces a plain-text response with the given status; details of
/// internal failures are only logged.
#[derive(Debug)]
pub struct AppErr {
    status: StatusCode,
    message: String,
}

impl AppErr {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: NOT_FOUND_BODY.to_string(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }

    /// Build a closure that logs a DB/IO error and returns `500 Internal Server Error`.
    pub fn from_db<E: fmt::Display>(context: &str) -> impl FnOnce(E) -> Self + '_ {
        move |e| {
            tracing::error!("{context}: {e}");
            Self::internal("internal server error")
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<dela_core::category::UnknownCategory> for AppErr {
    fn from(err: dela_core::category::UnknownCategory) -> Self {
        tracing::debug!("{err}");
        Self::not_found()
    }
}

impl IntoResponse for AppErr {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}
