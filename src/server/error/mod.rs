//! Error types and result-triple mapping.
//!
//! This module provides the application's error hierarchy. `AppError` is the top-level
//! error type returned by every service operation. Business errors carry a caller-facing
//! message and map to an HTTP-style status code; infrastructure errors are logged and
//! reported with a generic message so storage details never leak to callers.

pub mod config;

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::server::error::config::ConfigError;

/// Top-level application error type.
///
/// Most infrastructure variants use `#[from]` for automatic error conversion. Business
/// variants are constructed explicitly by the services.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Reported as 500 with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Malformed or missing input: bad date ordering, non-positive counts, duplicate rooms.
    ///
    /// Results in 400 with the provided message.
    #[error("{0}")]
    Validation(String),

    /// Unknown reservation, room, branch, customer, room type or travel company.
    ///
    /// Results in 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Fewer conflict-free rooms than requested.
    ///
    /// Results in 409. Both counts are part of the response payload.
    #[error("Requested {requested} room(s) but only {available} available")]
    InsufficientAvailability { requested: usize, available: usize },

    /// Operation not legal for the current reservation or booking status.
    ///
    /// Results in 422 with the provided message.
    #[error("{0}")]
    InvalidState(String),

    /// A concurrent booking claimed the same rooms first.
    ///
    /// Absorbed by the booking services and retried or reported as
    /// `InsufficientAvailability`; results in 409 if it ever reaches a caller.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500. The provided message is logged but a generic message is returned.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Maps the error to an HTTP-style status code.
    ///
    /// # Returns
    /// - 400 - `Validation`
    /// - 404 - `NotFound`
    /// - 409 - `InsufficientAvailability`, `Conflict`
    /// - 422 - `InvalidState`
    /// - 500 - every infrastructure variant
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::InsufficientAvailability { .. } | Self::Conflict(_) => 409,
            Self::InvalidState(_) => 422,
            Self::ConfigErr(_) | Self::DbErr(_) | Self::SchedulerErr(_) | Self::InternalError(_) => {
                500
            }
        }
    }

    /// Returns `true` for errors caused by the caller rather than by the system.
    pub fn is_business(&self) -> bool {
        self.status_code() < 500
    }

    /// Caller-facing message.
    ///
    /// Business errors return their own message. Infrastructure errors are logged with full
    /// details and replaced by a generic message.
    pub fn message(&self) -> String {
        if self.is_business() {
            self.to_string()
        } else {
            tracing::error!("{}", self);
            "Internal server error".to_string()
        }
    }

    /// Reclassifies storage uniqueness violations raised while booking as `Conflict`.
    ///
    /// Every other error is passed through unchanged.
    pub fn classify_booking_error(self) -> Self {
        match self {
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => Self::Conflict(detail),
                _ => Self::DbErr(err),
            },
            other => other,
        }
    }
}
