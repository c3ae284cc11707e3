use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::{forms::FormErrors, templates::error_page};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Validation failed: {0}")]
    Validation(FormErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A failed insert/update/delete, already rolled back.
    #[error("{entity} {name} could not be {action}: {source}")]
    Write {
        entity: &'static str,
        name: String,
        action: &'static str,
        source: sea_orm::DbErr,
    },
}

impl AppError {
    /// Tags a store failure with what was being written. Other variants pass
    /// through unchanged.
    pub fn while_writing(self, entity: &'static str, name: &str, action: &'static str) -> Self {
        match self {
            Self::Database(source) => Self::Write {
                entity,
                name: name.to_string(),
                action,
                source,
            },
            other => other,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred.".to_string(),
                )
            }
            Self::Validation(errors) => (StatusCode::BAD_REQUEST, errors.to_string()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Write {
                entity,
                name,
                action,
                source,
            } => {
                tracing::error!("Failed to write {} {}: {}", entity, name, source);
                let message = if name.is_empty() {
                    format!("An error occurred. {} could not be {}.", entity, action)
                } else {
                    format!("An error occurred. {} {} could not be {}.", entity, name, action)
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Html(error_page(status, &message).into_string())).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
