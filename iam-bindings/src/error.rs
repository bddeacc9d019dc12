//! Crate-wide error type.

use crate::aws::ServiceError;
use crate::request::RequestError;
use aws_sdk_iam::config::http::HttpResponse;
use aws_sdk_iam::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IamBindingsError {
    /// Parameters could not be turned into a request.
    #[error("Invalid request parameters: {0}")]
    Request(#[from] RequestError),

    /// IAM answered with an error response.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The call never produced a service response (dispatch, timeout, I/O).
    #[error("AWS SDK error: {0}")]
    Sdk(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type IamBindingsResult<T> = Result<T, IamBindingsError>;

impl IamBindingsError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// The service error carried by this error, if the remote side produced one.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }
}

impl<E> From<SdkError<E, HttpResponse>> for IamBindingsError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    fn from(err: SdkError<E, HttpResponse>) -> Self {
        match ServiceError::from_sdk_error(&err) {
            Some(service_error) => Self::Service(service_error),
            None => Self::Sdk(DisplayErrorContext(&err).to_string()),
        }
    }
}
