//! Defines the app level error type and conversions to rendered HTML pages.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{html::error_view, internal_server_error::InternalServerError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// One or more required form fields were absent or blank.
    ///
    /// Holds the name of every missing field, in form order.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// One or more numeric form fields could not be parsed as a finite number.
    #[error("not a number: {}", .0.join(", "))]
    InvalidNumber(Vec<&'static str>),

    /// An unhandled/unexpected SQL error.
    ///
    /// This covers the database file being unreadable or unwritable, so the
    /// request cannot be completed.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// A notice could not be stored in the notice cookie.
    #[error("could not encode notice cookie: {0}")]
    NoticeCookie(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::MissingFields(_) | Error::InvalidNumber(_) => {
                let description = self.to_string();
                let body = error_view(
                    "Bad Request",
                    "400",
                    &description,
                    "Go back, fix the highlighted fields and submit the form again.",
                );

                (StatusCode::BAD_REQUEST, body).into_response()
            }
            Error::DatabaseLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}
