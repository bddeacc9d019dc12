//! AWS SDK integration: credentials, the per-credentials client cache and the IAM call seam.

pub(crate) mod client_cache;
pub mod credentials;
pub mod iam_client;

use aws_sdk_iam::config::http::HttpResponse;
use aws_sdk_iam::error::{ProvideErrorMetadata, SdkError};
use std::fmt;
use thiserror::Error;

/// Service name reported in decoded errors.
pub const SERVICE_NAME: &str = "AmazonIdentityManagement";

/// Which side of the exchange an error is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    Client,
    Service,
    Unknown,
}

impl ErrorType {
    /// 4xx is the caller's fault, 5xx the service's.
    pub fn from_status(status: Option<u16>) -> Self {
        match status {
            Some(400..=499) => Self::Client,
            Some(500..=599) => Self::Service,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Service => "Service",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error response returned by IAM.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{service_name} returned {error_code} (HTTP {status_code}): {message}")]
pub struct ServiceError {
    pub error_code: String,
    pub error_type: ErrorType,
    pub service_name: String,
    pub status_code: u16,
    pub message: String,
}

impl ServiceError {
    /// Extract the service error carried by an SDK failure.
    ///
    /// Returns `None` when the failure happened before IAM answered
    /// (construction, dispatch, timeout).
    pub fn from_sdk_error<E>(err: &SdkError<E, HttpResponse>) -> Option<Self>
    where
        E: ProvideErrorMetadata,
    {
        let service_err = err.as_service_error()?;
        let status = err.raw_response().map(|response| response.status().as_u16());

        Some(Self {
            error_code: service_err.code().unwrap_or("Unknown").to_string(),
            error_type: ErrorType::from_status(status),
            service_name: SERVICE_NAME.to_string(),
            status_code: status.unwrap_or_default(),
            message: service_err.message().unwrap_or_default().to_string(),
        })
    }
}
