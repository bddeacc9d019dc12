//! Conversion of IAM objects into plain key-value mappings.
//!
//! Only the variants of [`IamObject`] can be converted, each with a fixed field
//! list. Field names are emitted dash-separated (`role-name`), timestamps as
//! RFC 3339 strings, and URL-encoded policy documents are decoded.

use crate::aws::ServiceError;
use crate::request::mapping_key;
use aws_sdk_iam::operation::get_role_policy::GetRolePolicyOutput;
use aws_sdk_iam::primitives::{DateTime, DateTimeFormat};
use aws_sdk_iam::types::{InstanceProfile, Role};
use percent_encoding::percent_decode_str;
use serde_json::Value;

/// A converted object, keyed by dash-separated field names.
pub type Mapping = serde_json::Map<String, Value>;

/// The objects this crate knows how to convert.
#[derive(Debug, Clone, Copy)]
pub enum IamObject<'a> {
    Role(&'a Role),
    /// Result of fetching a role's inline policy.
    RolePolicy(&'a GetRolePolicyOutput),
    InstanceProfile(&'a InstanceProfile),
    ServiceError(&'a ServiceError),
}

impl IamObject<'_> {
    pub fn to_mapping(&self) -> Mapping {
        match self {
            Self::Role(role) => role_mapping(role),
            Self::RolePolicy(policy) => role_policy_mapping(policy),
            Self::InstanceProfile(profile) => instance_profile_mapping(profile),
            Self::ServiceError(err) => service_error_mapping(err),
        }
    }
}

impl<'a> From<&'a Role> for IamObject<'a> {
    fn from(role: &'a Role) -> Self {
        Self::Role(role)
    }
}

impl<'a> From<&'a GetRolePolicyOutput> for IamObject<'a> {
    fn from(policy: &'a GetRolePolicyOutput) -> Self {
        Self::RolePolicy(policy)
    }
}

impl<'a> From<&'a InstanceProfile> for IamObject<'a> {
    fn from(profile: &'a InstanceProfile) -> Self {
        Self::InstanceProfile(profile)
    }
}

impl<'a> From<&'a ServiceError> for IamObject<'a> {
    fn from(err: &'a ServiceError) -> Self {
        Self::ServiceError(err)
    }
}

/// Convert an optional object; an absent object converts to `None`.
pub fn to_mapping<'a, T>(object: Option<T>) -> Option<Mapping>
where
    T: Into<IamObject<'a>>,
{
    object.map(|object| object.into().to_mapping())
}

/// Turn a service error into its fixed five-key mapping.
pub fn decode_exception(err: &ServiceError) -> Mapping {
    IamObject::ServiceError(err).to_mapping()
}

struct Fields(Mapping);

impl Fields {
    fn new() -> Self {
        Self(Mapping::new())
    }

    fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.insert(mapping_key(name), value.into());
        self
    }

    fn finish(self) -> Mapping {
        self.0
    }
}

fn role_mapping(role: &Role) -> Mapping {
    Fields::new()
        .field("Path", role.path())
        .field("RoleName", role.role_name())
        .field("RoleId", role.role_id())
        .field("Arn", role.arn())
        .field("CreateDate", timestamp(role.create_date()))
        .field(
            "AssumeRolePolicyDocument",
            role.assume_role_policy_document().map(url_decode),
        )
        .field("Description", role.description())
        .field("MaxSessionDuration", role.max_session_duration())
        .finish()
}

fn role_policy_mapping(policy: &GetRolePolicyOutput) -> Mapping {
    Fields::new()
        .field("RoleName", policy.role_name())
        .field("PolicyName", policy.policy_name())
        .field("PolicyDocument", url_decode(policy.policy_document()))
        .finish()
}

fn instance_profile_mapping(profile: &InstanceProfile) -> Mapping {
    let roles: Vec<Value> = profile
        .roles()
        .iter()
        .map(|role| Value::Object(role_mapping(role)))
        .collect();

    Fields::new()
        .field("Path", profile.path())
        .field("InstanceProfileName", profile.instance_profile_name())
        .field("InstanceProfileId", profile.instance_profile_id())
        .field("Arn", profile.arn())
        .field("CreateDate", timestamp(profile.create_date()))
        .field("Roles", roles)
        .finish()
}

fn service_error_mapping(err: &ServiceError) -> Mapping {
    Fields::new()
        .field("ErrorCode", err.error_code.as_str())
        .field("ErrorType", err.error_type.as_str())
        .field("ServiceName", err.service_name.as_str())
        .field("StatusCode", err.status_code)
        .field("Message", err.message.as_str())
        .finish()
}

fn timestamp(date: &DateTime) -> Value {
    date.fmt(DateTimeFormat::DateTime)
        .map(Value::String)
        .unwrap_or(Value::Null)
}

// IAM returns policy documents URL-encoded.
fn url_decode(text: &str) -> String {
    percent_decode_str(text).decode_utf8_lossy().into_owned()
}
