//! In-memory [`IamApi`] used by the operation tests.
//!
//! Records every call as `Operation[:subject]`, stores policy documents
//! URL-encoded the way IAM returns them, and answers unknown entities with a
//! `NoSuchEntity` service error. `get_role`/`get_instance_profile` report
//! unknown names as absent instead.

use crate::aws::iam_client::IamApi;
use crate::aws::{ErrorType, ServiceError, SERVICE_NAME};
use crate::error::{IamBindingsError, IamBindingsResult};
use crate::request::Params;
use async_trait::async_trait;
use aws_sdk_iam::operation::create_instance_profile::CreateInstanceProfileInput;
use aws_sdk_iam::operation::create_role::CreateRoleInput;
use aws_sdk_iam::operation::get_role_policy::GetRolePolicyOutput;
use aws_sdk_iam::operation::list_instance_profiles::ListInstanceProfilesInput;
use aws_sdk_iam::operation::list_roles::ListRolesInput;
use aws_sdk_iam::operation::put_role_policy::PutRolePolicyInput;
use aws_sdk_iam::operation::update_assume_role_policy::UpdateAssumeRolePolicyInput;
use aws_sdk_iam::operation::update_role::UpdateRoleInput;
use aws_sdk_iam::primitives::DateTime;
use aws_sdk_iam::types::{InstanceProfile, Role};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde_json::Value;
use std::sync::Mutex;

pub(crate) fn params(value: Value) -> Params {
    value.as_object().cloned().expect("params must be an object")
}

struct FakeRole {
    name: String,
    path: String,
    trust_policy: Option<String>,
    description: Option<String>,
    max_session_duration: Option<i32>,
}

struct FakePolicy {
    role_name: String,
    policy_name: String,
    encoded_document: String,
}

struct FakeProfile {
    name: String,
    path: String,
    roles: Vec<String>,
}

#[derive(Default)]
struct State {
    roles: Vec<FakeRole>,
    policies: Vec<FakePolicy>,
    profiles: Vec<FakeProfile>,
    created_roles: Vec<CreateRoleInput>,
    calls: Vec<String>,
}

#[derive(Default)]
pub(crate) struct FakeIamApi {
    state: Mutex<State>,
}

fn no_such_entity(message: String) -> IamBindingsError {
    IamBindingsError::Service(ServiceError {
        error_code: "NoSuchEntity".to_string(),
        error_type: ErrorType::Client,
        service_name: SERVICE_NAME.to_string(),
        status_code: 404,
        message,
    })
}

fn encode(document: &str) -> String {
    utf8_percent_encode(document, NON_ALPHANUMERIC).to_string()
}

impl FakeRole {
    fn to_role(&self) -> Role {
        Role::builder()
            .path(&self.path)
            .role_name(&self.name)
            .role_id(format!("AROA{}", self.name.to_uppercase()))
            .arn(format!("arn:aws:iam::123456789012:role{}{}", self.path, self.name))
            .create_date(DateTime::from_secs(1_700_000_000))
            .set_assume_role_policy_document(self.trust_policy.as_deref().map(encode))
            .set_description(self.description.clone())
            .set_max_session_duration(self.max_session_duration)
            .build()
            .expect("fake role is complete")
    }
}

impl State {
    fn record(&mut self, call: impl Into<String>) {
        self.calls.push(call.into());
    }

    fn role(&self, name: &str) -> Option<&FakeRole> {
        self.roles.iter().find(|role| role.name == name)
    }

    fn role_mut(&mut self, name: &str) -> IamBindingsResult<&mut FakeRole> {
        self.roles
            .iter_mut()
            .find(|role| role.name == name)
            .ok_or_else(|| no_such_entity(format!("The role with name {name} cannot be found.")))
    }

    fn profile_mut(&mut self, name: &str) -> IamBindingsResult<&mut FakeProfile> {
        self.profiles
            .iter_mut()
            .find(|profile| profile.name == name)
            .ok_or_else(|| {
                no_such_entity(format!(
                    "Instance Profile {name} cannot be found."
                ))
            })
    }

    fn to_instance_profile(&self, profile: &FakeProfile) -> InstanceProfile {
        let roles = profile
            .roles
            .iter()
            .filter_map(|name| self.role(name))
            .map(FakeRole::to_role)
            .collect();

        InstanceProfile::builder()
            .path(&profile.path)
            .instance_profile_name(&profile.name)
            .instance_profile_id(format!("AIPA{}", profile.name.to_uppercase()))
            .arn(format!(
                "arn:aws:iam::123456789012:instance-profile{}{}",
                profile.path, profile.name
            ))
            .create_date(DateTime::from_secs(1_700_000_000))
            .set_roles(Some(roles))
            .build()
            .expect("fake instance profile is complete")
    }
}

impl FakeIamApi {
    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("fake state lock")
    }

    pub(crate) fn with_role(self, name: &str) -> Self {
        self.state().roles.push(FakeRole {
            name: name.to_string(),
            path: "/".to_string(),
            trust_policy: None,
            description: None,
            max_session_duration: None,
        });
        self
    }

    pub(crate) fn with_role_policy(self, role_name: &str, policy_name: &str, document: &str) -> Self {
        self.state().policies.push(FakePolicy {
            role_name: role_name.to_string(),
            policy_name: policy_name.to_string(),
            encoded_document: encode(document),
        });
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    pub(crate) fn created_roles(&self) -> Vec<CreateRoleInput> {
        self.state().created_roles.clone()
    }
}

#[async_trait]
impl IamApi for FakeIamApi {
    async fn list_roles(&self, input: ListRolesInput) -> IamBindingsResult<Vec<Role>> {
        let mut state = self.state();
        state.record("ListRoles");
        let prefix = input.path_prefix.unwrap_or_default();
        Ok(state
            .roles
            .iter()
            .filter(|role| role.path.starts_with(&prefix))
            .map(FakeRole::to_role)
            .collect())
    }

    async fn get_role(&self, role_name: &str) -> IamBindingsResult<Option<Role>> {
        let mut state = self.state();
        state.record(format!("GetRole:{role_name}"));
        Ok(state.role(role_name).map(FakeRole::to_role))
    }

    async fn create_role(&self, input: CreateRoleInput) -> IamBindingsResult<Option<Role>> {
        let mut state = self.state();
        let name = input.role_name.clone().unwrap_or_default();
        state.record(format!("CreateRole:{name}"));

        let role = FakeRole {
            name,
            path: input.path.clone().unwrap_or_else(|| "/".to_string()),
            trust_policy: input.assume_role_policy_document.clone(),
            description: input.description.clone(),
            max_session_duration: input.max_session_duration,
        };
        let created = role.to_role();
        state.roles.push(role);
        state.created_roles.push(input);
        Ok(Some(created))
    }

    async fn update_role(&self, input: UpdateRoleInput) -> IamBindingsResult<()> {
        let mut state = self.state();
        let name = input.role_name.unwrap_or_default();
        state.record(format!("UpdateRole:{name}"));
        let role = state.role_mut(&name)?;
        if input.description.is_some() {
            role.description = input.description;
        }
        if input.max_session_duration.is_some() {
            role.max_session_duration = input.max_session_duration;
        }
        Ok(())
    }

    async fn update_assume_role_policy(
        &self,
        input: UpdateAssumeRolePolicyInput,
    ) -> IamBindingsResult<()> {
        let mut state = self.state();
        let name = input.role_name.unwrap_or_default();
        state.record(format!("UpdateAssumeRolePolicy:{name}"));
        state.role_mut(&name)?.trust_policy = input.policy_document;
        Ok(())
    }

    async fn delete_role(&self, role_name: &str) -> IamBindingsResult<()> {
        let mut state = self.state();
        state.record(format!("DeleteRole:{role_name}"));
        state.role_mut(role_name)?;
        state.roles.retain(|role| role.name != role_name);
        Ok(())
    }

    async fn list_role_policies(&self, role_name: &str) -> IamBindingsResult<Vec<String>> {
        let mut state = self.state();
        state.record(format!("ListRolePolicies:{role_name}"));
        state.role_mut(role_name)?;
        Ok(state
            .policies
            .iter()
            .filter(|policy| policy.role_name == role_name)
            .map(|policy| policy.policy_name.clone())
            .collect())
    }

    async fn get_role_policy(
        &self,
        role_name: &str,
        policy_name: &str,
    ) -> IamBindingsResult<GetRolePolicyOutput> {
        let mut state = self.state();
        state.record(format!("GetRolePolicy:{role_name}/{policy_name}"));
        let policy = state
            .policies
            .iter()
            .find(|policy| policy.role_name == role_name && policy.policy_name == policy_name)
            .ok_or_else(|| {
                no_such_entity(format!(
                    "The role policy with name {policy_name} cannot be found."
                ))
            })?;

        Ok(GetRolePolicyOutput::builder()
            .role_name(&policy.role_name)
            .policy_name(&policy.policy_name)
            .policy_document(&policy.encoded_document)
            .build()
            .expect("fake role policy is complete"))
    }

    async fn put_role_policy(&self, input: PutRolePolicyInput) -> IamBindingsResult<()> {
        let mut state = self.state();
        let role_name = input.role_name.unwrap_or_default();
        let policy_name = input.policy_name.unwrap_or_default();
        state.record(format!("PutRolePolicy:{role_name}/{policy_name}"));
        state.role_mut(&role_name)?;

        let encoded_document = encode(input.policy_document.as_deref().unwrap_or_default());
        state
            .policies
            .retain(|p| !(p.role_name == role_name && p.policy_name == policy_name));
        state.policies.push(FakePolicy {
            role_name,
            policy_name,
            encoded_document,
        });
        Ok(())
    }

    async fn delete_role_policy(
        &self,
        role_name: &str,
        policy_name: &str,
    ) -> IamBindingsResult<()> {
        let mut state = self.state();
        state.record(format!("DeleteRolePolicy:{role_name}/{policy_name}"));
        state
            .policies
            .retain(|p| !(p.role_name == role_name && p.policy_name == policy_name));
        Ok(())
    }

    async fn list_instance_profiles(
        &self,
        input: ListInstanceProfilesInput,
    ) -> IamBindingsResult<Vec<InstanceProfile>> {
        let mut state = self.state();
        state.record("ListInstanceProfiles");
        let prefix = input.path_prefix.unwrap_or_default();
        Ok(state
            .profiles
            .iter()
            .filter(|profile| profile.path.starts_with(&prefix))
            .map(|profile| state.to_instance_profile(profile))
            .collect())
    }

    async fn list_instance_profiles_for_role(
        &self,
        role_name: &str,
    ) -> IamBindingsResult<Vec<InstanceProfile>> {
        let mut state = self.state();
        state.record(format!("ListInstanceProfilesForRole:{role_name}"));
        Ok(state
            .profiles
            .iter()
            .filter(|profile| profile.roles.iter().any(|r| r == role_name))
            .map(|profile| state.to_instance_profile(profile))
            .collect())
    }

    async fn get_instance_profile(
        &self,
        profile_name: &str,
    ) -> IamBindingsResult<Option<InstanceProfile>> {
        let mut state = self.state();
        state.record(format!("GetInstanceProfile:{profile_name}"));
        Ok(state
            .profiles
            .iter()
            .find(|profile| profile.name == profile_name)
            .map(|profile| state.to_instance_profile(profile)))
    }

    async fn create_instance_profile(
        &self,
        input: CreateInstanceProfileInput,
    ) -> IamBindingsResult<Option<InstanceProfile>> {
        let mut state = self.state();
        let name = input.instance_profile_name.unwrap_or_default();
        state.record(format!("CreateInstanceProfile:{name}"));

        let profile = FakeProfile {
            name,
            path: input.path.unwrap_or_else(|| "/".to_string()),
            roles: Vec::new(),
        };
        let created = state.to_instance_profile(&profile);
        state.profiles.push(profile);
        Ok(Some(created))
    }

    async fn delete_instance_profile(&self, profile_name: &str) -> IamBindingsResult<()> {
        let mut state = self.state();
        state.record(format!("DeleteInstanceProfile:{profile_name}"));
        state.profile_mut(profile_name)?;
        state.profiles.retain(|profile| profile.name != profile_name);
        Ok(())
    }

    async fn add_role_to_instance_profile(
        &self,
        profile_name: &str,
        role_name: &str,
    ) -> IamBindingsResult<()> {
        let mut state = self.state();
        state.record(format!("AddRoleToInstanceProfile:{profile_name}/{role_name}"));
        state.role_mut(role_name)?;
        state.profile_mut(profile_name)?.roles.push(role_name.to_string());
        Ok(())
    }

    async fn remove_role_from_instance_profile(
        &self,
        profile_name: &str,
        role_name: &str,
    ) -> IamBindingsResult<()> {
        let mut state = self.state();
        state.record(format!(
            "RemoveRoleFromInstanceProfile:{profile_name}/{role_name}"
        ));
        state
            .profile_mut(profile_name)?
            .roles
            .retain(|r| r != role_name);
        Ok(())
    }
}
