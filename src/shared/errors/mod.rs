//! Error Types
//!
//! Domain-specific error types with proper HTTP status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Domain-level errors representing business rule violations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid rental period: return date {return_date} precedes rent date {rent_date}")]
    InvalidRentalPeriod {
        rent_date: NaiveDate,
        return_date: NaiveDate,
    },

    #[error("A rental holds at most {limit} equipment items")]
    EquipmentLimitExceeded { limit: usize },
}

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Data mapping error: {0}")]
    Mapping(String),
}

/// Errors raised while fetching currency rates
#[derive(Debug, Error)]
pub enum RateError {
    #[error("Rate service request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rate for {0} missing from response")]
    MissingRate(String),

    #[error("Invalid rate for {currency}: {reason}")]
    InvalidRate { currency: String, reason: String },
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{resource} with id '{id}' not found")]
    NotFound { resource: String, id: String },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Rate(#[from] RateError),
}

impl UseCaseError {
    /// Shorthand for a not-found error on a resource
    pub fn not_found(resource: &str, id: impl ToString) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Domain(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Rate(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Domain(DomainError::MissingField(_)) => "MISSING_FIELD",
            Self::Domain(DomainError::InvalidRentalPeriod { .. }) => "INVALID_RENTAL_PERIOD",
            Self::Domain(DomainError::EquipmentLimitExceeded { .. }) => "EQUIPMENT_LIMIT_EXCEEDED",
            Self::Repository(_) => "INTERNAL_ERROR",
            Self::Rate(_) => "RATE_SERVICE_ERROR",
        }
    }
}

/// API error response for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),
}

/// Error response body structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub timestamp: String,
}

/// Error detail structure
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level error for validation errors
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::UseCase(uc_error) = self;

        let details = if let UseCaseError::Validation(errors) = &uc_error {
            Some(
                errors
                    .iter()
                    .map(|e| {
                        let (field, message) = e.split_once(": ").unwrap_or(("", e.as_str()));
                        FieldError {
                            field: field.to_string(),
                            message: message.to_string(),
                        }
                    })
                    .collect(),
            )
        } else {
            None
        };

        // Database errors are logged, not echoed to the caller
        let message = if let UseCaseError::Repository(err) = &uc_error {
            tracing::error!(error = %err, "Repository failure");
            "An unexpected error occurred".to_string()
        } else {
            uc_error.to_string()
        };

        let body = ErrorResponse {
            error: ErrorDetail {
                code: uc_error.error_code().to_string(),
                message,
                details,
            },
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        (uc_error.status_code(), Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        ApiError::UseCase(UseCaseError::Validation(messages))
    }
}
