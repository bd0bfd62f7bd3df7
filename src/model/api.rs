use serde::{Deserialize, Serialize};

use crate::server::error::AppError;

/// Result triple handed to whatever transport layer fronts the engine.
///
/// Every operation outcome, success or failure, can be turned into one of these with
/// [`ApiResponse::from_result`].
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Detail payload attached to availability failures.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct AvailabilityShortfallDto {
    pub requested: usize,
    pub available: usize,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            status_code: 200,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: 201,
            ..Self::ok(message, data)
        }
    }

    /// Builds a failure response from an application error.
    ///
    /// Infrastructure errors are logged by [`AppError::message`] and reported generically.
    pub fn from_error(err: &AppError) -> Self {
        Self {
            success: false,
            status_code: err.status_code(),
            message: err.message(),
            data: None,
        }
    }

    /// Builds a response from any operation result, using `message` on success.
    pub fn from_result(result: Result<T, AppError>, message: impl Into<String>) -> Self {
        match result {
            Ok(data) => Self::ok(message, data),
            Err(err) => Self::from_error(&err),
        }
    }
}

impl ApiResponse<AvailabilityShortfallDto> {
    /// Builds a failure response that keeps the requested/available counts as data.
    pub fn shortfall(err: &AppError) -> Self {
        let mut response = Self::from_error(err);
        if let AppError::InsufficientAvailability {
            requested,
            available,
        } = err
        {
            response.data = Some(AvailabilityShortfallDto {
                requested: *requested,
                available: *available,
            });
        }
        response
    }
}
