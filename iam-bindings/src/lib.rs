//! This crate exposes AWS IAM role, role policy and instance profile operations
//! through plain key-value data:
//! - Request construction from dash-keyed parameter maps
//! - Conversion of IAM objects and service errors into dash-keyed mappings
//! - One cached SDK client per credentials value
//!

mod aws;
pub mod commands;
mod error;
pub mod ops;
pub mod request;
pub mod response;

// Re-exports for a small, focused public API
pub use aws::credentials::{Credentials, DEFAULT_REGION};
pub use aws::iam_client::{AwsIamClient, IamApi};
pub use aws::{ErrorType, ServiceError, SERVICE_NAME};
pub use commands::IamBindingsService;
pub use error::{IamBindingsError, IamBindingsResult};
pub use request::{
    build_request, build_request_with, setter_name, NestedBuilder, NestedBuilders, Params,
    RequestError, RequestTarget,
};
pub use response::{decode_exception, to_mapping, IamObject, Mapping};

