use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::domain::PoplookupError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Country list unavailable: {0}")]
    CountriesUnavailable(#[from] PoplookupError),

    #[error("Not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::CountriesUnavailable { .. } => {
                tracing::error!(error = %self, "page render failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
        };

        (status, self.to_string()).into_response()
    }
}
