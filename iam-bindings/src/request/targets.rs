//! Setter tables for the request types built from parameters.

use super::{coerce, RequestError, RequestTarget};
use aws_sdk_iam::operation::create_instance_profile::builders::CreateInstanceProfileInputBuilder;
use aws_sdk_iam::operation::create_instance_profile::CreateInstanceProfileInput;
use aws_sdk_iam::operation::create_role::builders::CreateRoleInputBuilder;
use aws_sdk_iam::operation::create_role::CreateRoleInput;
use aws_sdk_iam::operation::list_instance_profiles::builders::ListInstanceProfilesInputBuilder;
use aws_sdk_iam::operation::list_instance_profiles::ListInstanceProfilesInput;
use aws_sdk_iam::operation::list_roles::builders::ListRolesInputBuilder;
use aws_sdk_iam::operation::list_roles::ListRolesInput;
use aws_sdk_iam::operation::put_role_policy::builders::PutRolePolicyInputBuilder;
use aws_sdk_iam::operation::put_role_policy::PutRolePolicyInput;
use aws_sdk_iam::operation::update_assume_role_policy::builders::UpdateAssumeRolePolicyInputBuilder;
use aws_sdk_iam::operation::update_assume_role_policy::UpdateAssumeRolePolicyInput;
use aws_sdk_iam::operation::update_role::builders::UpdateRoleInputBuilder;
use aws_sdk_iam::operation::update_role::UpdateRoleInput;
use serde_json::Value;

/// Implements [`RequestTarget`] for an SDK input builder from a table of
/// `"SetterName" => set_method: coercion` entries.
macro_rules! request_target {
    ($builder:ty => $request:ty as $target:literal {
        $($setter:literal => $method:ident: $coerce:ident),* $(,)?
    }) => {
        impl RequestTarget for $builder {
            const TARGET: &'static str = $target;

            type Request = $request;

            fn set_field(self, setter: &str, value: Value) -> Result<Self, RequestError> {
                match setter {
                    $($setter => Ok(self.$method(Some(coerce::$coerce(Self::TARGET, setter, value)?))),)*
                    _ => Err(RequestError::UnknownField {
                        target: Self::TARGET,
                        field: setter.to_string(),
                    }),
                }
            }

            fn finish(self) -> Result<Self::Request, RequestError> {
                self.build().map_err(|e| RequestError::Build {
                    target: Self::TARGET,
                    message: e.to_string(),
                })
            }
        }
    };
}

request_target!(ListRolesInputBuilder => ListRolesInput as "ListRoles" {
    "PathPrefix" => set_path_prefix: string,
    "Marker" => set_marker: string,
    "MaxItems" => set_max_items: int,
});

request_target!(CreateRoleInputBuilder => CreateRoleInput as "CreateRole" {
    "Path" => set_path: string,
    "RoleName" => set_role_name: string,
    "AssumeRolePolicyDocument" => set_assume_role_policy_document: string,
    "Description" => set_description: string,
    "MaxSessionDuration" => set_max_session_duration: int,
    "PermissionsBoundary" => set_permissions_boundary: string,
});

request_target!(UpdateRoleInputBuilder => UpdateRoleInput as "UpdateRole" {
    "RoleName" => set_role_name: string,
    "Description" => set_description: string,
    "MaxSessionDuration" => set_max_session_duration: int,
});

request_target!(UpdateAssumeRolePolicyInputBuilder => UpdateAssumeRolePolicyInput as "UpdateAssumeRolePolicy" {
    "RoleName" => set_role_name: string,
    "PolicyDocument" => set_policy_document: string,
});

request_target!(PutRolePolicyInputBuilder => PutRolePolicyInput as "PutRolePolicy" {
    "RoleName" => set_role_name: string,
    "PolicyName" => set_policy_name: string,
    "PolicyDocument" => set_policy_document: string,
});

request_target!(ListInstanceProfilesInputBuilder => ListInstanceProfilesInput as "ListInstanceProfiles" {
    "PathPrefix" => set_path_prefix: string,
    "Marker" => set_marker: string,
    "MaxItems" => set_max_items: int,
});

request_target!(CreateInstanceProfileInputBuilder => CreateInstanceProfileInput as "CreateInstanceProfile" {
    "InstanceProfileName" => set_instance_profile_name: string,
    "Path" => set_path: string,
});
