//! Commands module - service layer for IAM role, role policy and instance profile operations

mod instance_profiles;
mod role_policies;
mod roles;
pub(crate) mod service;

#[cfg(test)]
pub(crate) mod fake;

pub use roles::{default_role_params, DEFAULT_ROLE_PATH, DEFAULT_TRUST_POLICY};
pub use service::IamBindingsService;
