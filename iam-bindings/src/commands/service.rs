//! IAM Bindings Service Layer
//!
//! The service holds an [`IamApi`] implementation and exposes the role, role
//! policy and instance profile operations on top of it. Each operation builds a
//! request, issues it, and converts the result into plain mappings.

use crate::aws::client_cache::client_for;
use crate::aws::credentials::Credentials;
use crate::aws::iam_client::{AwsIamClient, IamApi};
use crate::error::IamBindingsResult;

/// Main service struct that holds the IAM call seam and provides the operations
pub struct IamBindingsService<A = AwsIamClient> {
    pub(crate) api: A,
}

impl IamBindingsService<AwsIamClient> {
    /// Create a service backed by the cached SDK client for `credentials`
    ///
    /// The first call for a given credentials value loads the AWS configuration;
    /// later calls reuse the same client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the credentials are inconsistent.
    pub async fn connect(credentials: &Credentials) -> IamBindingsResult<Self> {
        let client = client_for(credentials).await?;
        Ok(Self::with_api(AwsIamClient::new(client)))
    }
}

impl<A: IamApi> IamBindingsService<A> {
    pub fn with_api(api: A) -> Self {
        Self { api }
    }

    // Role operations are in roles.rs
    // Role policy operations are in role_policies.rs
    // Instance profile operations are in instance_profiles.rs
}
