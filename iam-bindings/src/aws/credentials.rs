//! Caller credentials and SDK configuration loading.

use crate::error::{IamBindingsError, IamBindingsResult};
use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use serde::Deserialize;
use std::fmt;

/// IAM is a global service; the SDK still needs a region to resolve its endpoint.
pub const DEFAULT_REGION: &str = "us-east-1";

const PROVIDER_NAME: &str = "iam-bindings";

/// Credentials supplied with every operation.
///
/// Leaving both keys unset means "use the ambient credential chain"
/// (environment, shared config files, IMDS). Values are hashable so they can
/// key the client cache.
#[derive(Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Credentials {
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub endpoint: Option<String>,
}

impl Credentials {
    pub fn ambient() -> Self {
        Self::default()
    }

    pub fn with_keys(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: Some(access_key.into()),
            secret_key: Some(secret_key.into()),
            endpoint: None,
        }
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Static key pair, if one was supplied. A lone access or secret key is rejected.
    pub(crate) fn static_keys(&self) -> IamBindingsResult<Option<(&str, &str)>> {
        match (self.access_key.as_deref(), self.secret_key.as_deref()) {
            (Some(access_key), Some(secret_key)) => Ok(Some((access_key, secret_key))),
            (None, None) => Ok(None),
            (Some(_), None) => {
                log::warn!("Rejecting credentials: access key supplied without a secret key");
                Err(IamBindingsError::config(
                    "an access key was supplied without a secret key",
                ))
            }
            (None, Some(_)) => {
                log::warn!("Rejecting credentials: secret key supplied without an access key");
                Err(IamBindingsError::config(
                    "a secret key was supplied without an access key",
                ))
            }
        }
    }

    /// Load an SDK configuration for these credentials.
    pub(crate) async fn load_sdk_config(&self) -> IamBindingsResult<SdkConfig> {
        let static_keys = self.static_keys()?;

        let region = RegionProviderChain::default_provider().or_else(Region::new(DEFAULT_REGION));
        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region);

        if let Some((access_key, secret_key)) = static_keys {
            loader = loader.credentials_provider(aws_sdk_iam::config::Credentials::new(
                access_key,
                secret_key,
                None,
                None,
                PROVIDER_NAME,
            ));
        }

        if let Some(endpoint) = &self.endpoint {
            loader = loader.endpoint_url(endpoint);
        }

        Ok(loader.load().await)
    }
}

// Secrets stay out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}
