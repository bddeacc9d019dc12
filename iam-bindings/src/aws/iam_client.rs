//! AWS IAM client wrapper for role, role policy and instance profile operations
//!
//! [`IamApi`] is the seam between the operation layer and the SDK: one method per
//! IAM call, each issuing exactly one request.

use crate::error::IamBindingsResult;
use async_trait::async_trait;
use aws_sdk_iam::operation::create_instance_profile::CreateInstanceProfileInput;
use aws_sdk_iam::operation::create_role::CreateRoleInput;
use aws_sdk_iam::operation::get_role_policy::GetRolePolicyOutput;
use aws_sdk_iam::operation::list_instance_profiles::ListInstanceProfilesInput;
use aws_sdk_iam::operation::list_roles::ListRolesInput;
use aws_sdk_iam::operation::put_role_policy::PutRolePolicyInput;
use aws_sdk_iam::operation::update_assume_role_policy::UpdateAssumeRolePolicyInput;
use aws_sdk_iam::operation::update_role::UpdateRoleInput;
use aws_sdk_iam::types::{InstanceProfile, Role};
use aws_sdk_iam::Client as IamClient;

#[async_trait]
pub trait IamApi: Send + Sync {
    async fn list_roles(&self, input: ListRolesInput) -> IamBindingsResult<Vec<Role>>;

    async fn get_role(&self, role_name: &str) -> IamBindingsResult<Option<Role>>;

    async fn create_role(&self, input: CreateRoleInput) -> IamBindingsResult<Option<Role>>;

    async fn update_role(&self, input: UpdateRoleInput) -> IamBindingsResult<()>;

    async fn update_assume_role_policy(
        &self,
        input: UpdateAssumeRolePolicyInput,
    ) -> IamBindingsResult<()>;

    async fn delete_role(&self, role_name: &str) -> IamBindingsResult<()>;

    async fn list_role_policies(&self, role_name: &str) -> IamBindingsResult<Vec<String>>;

    async fn get_role_policy(
        &self,
        role_name: &str,
        policy_name: &str,
    ) -> IamBindingsResult<GetRolePolicyOutput>;

    async fn put_role_policy(&self, input: PutRolePolicyInput) -> IamBindingsResult<()>;

    async fn delete_role_policy(&self, role_name: &str, policy_name: &str)
        -> IamBindingsResult<()>;

    async fn list_instance_profiles(
        &self,
        input: ListInstanceProfilesInput,
    ) -> IamBindingsResult<Vec<InstanceProfile>>;

    async fn list_instance_profiles_for_role(
        &self,
        role_name: &str,
    ) -> IamBindingsResult<Vec<InstanceProfile>>;

    async fn get_instance_profile(
        &self,
        profile_name: &str,
    ) -> IamBindingsResult<Option<InstanceProfile>>;

    async fn create_instance_profile(
        &self,
        input: CreateInstanceProfileInput,
    ) -> IamBindingsResult<Option<InstanceProfile>>;

    async fn delete_instance_profile(&self, profile_name: &str) -> IamBindingsResult<()>;

    async fn add_role_to_instance_profile(
        &self,
        profile_name: &str,
        role_name: &str,
    ) -> IamBindingsResult<()>;

    async fn remove_role_from_instance_profile(
        &self,
        profile_name: &str,
        role_name: &str,
    ) -> IamBindingsResult<()>;
}

/// [`IamApi`] backed by the real SDK client.
pub struct AwsIamClient {
    client: IamClient,
}

impl AwsIamClient {
    pub fn new(client: IamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IamApi for AwsIamClient {
    async fn list_roles(&self, input: ListRolesInput) -> IamBindingsResult<Vec<Role>> {
        let response = self
            .client
            .list_roles()
            .set_path_prefix(input.path_prefix)
            .set_marker(input.marker)
            .set_max_items(input.max_items)
            .send()
            .await?;
        Ok(response.roles)
    }

    async fn get_role(&self, role_name: &str) -> IamBindingsResult<Option<Role>> {
        let response = self.client.get_role().role_name(role_name).send().await?;
        Ok(response.role)
    }

    async fn create_role(&self, input: CreateRoleInput) -> IamBindingsResult<Option<Role>> {
        let response = self
            .client
            .create_role()
            .set_path(input.path)
            .set_role_name(input.role_name)
            .set_assume_role_policy_document(input.assume_role_policy_document)
            .set_description(input.description)
            .set_max_session_duration(input.max_session_duration)
            .set_permissions_boundary(input.permissions_boundary)
            .set_tags(input.tags)
            .send()
            .await?;
        Ok(response.role)
    }

    async fn update_role(&self, input: UpdateRoleInput) -> IamBindingsResult<()> {
        self.client
            .update_role()
            .set_role_name(input.role_name)
            .set_description(input.description)
            .set_max_session_duration(input.max_session_duration)
            .send()
            .await?;
        Ok(())
    }

    async fn update_assume_role_policy(
        &self,
        input: UpdateAssumeRolePolicyInput,
    ) -> IamBindingsResult<()> {
        self.client
            .update_assume_role_policy()
            .set_role_name(input.role_name)
            .set_policy_document(input.policy_document)
            .send()
            .await?;
        Ok(())
    }

    async fn delete_role(&self, role_name: &str) -> IamBindingsResult<()> {
        self.client.delete_role().role_name(role_name).send().await?;
        Ok(())
    }

    async fn list_role_policies(&self, role_name: &str) -> IamBindingsResult<Vec<String>> {
        let response = self
            .client
            .list_role_policies()
            .role_name(role_name)
            .send()
            .await?;
        Ok(response.policy_names)
    }

    async fn get_role_policy(
        &self,
        role_name: &str,
        policy_name: &str,
    ) -> IamBindingsResult<GetRolePolicyOutput> {
        Ok(self
            .client
            .get_role_policy()
            .role_name(role_name)
            .policy_name(policy_name)
            .send()
            .await?)
    }

    async fn put_role_policy(&self, input: PutRolePolicyInput) -> IamBindingsResult<()> {
        self.client
            .put_role_policy()
            .set_role_name(input.role_name)
            .set_policy_name(input.policy_name)
            .set_policy_document(input.policy_document)
            .send()
            .await?;
        Ok(())
    }

    async fn delete_role_policy(
        &self,
        role_name: &str,
        policy_name: &str,
    ) -> IamBindingsResult<()> {
        self.client
            .delete_role_policy()
            .role_name(role_name)
            .policy_name(policy_name)
            .send()
            .await?;
        Ok(())
    }

    async fn list_instance_profiles(
        &self,
        input: ListInstanceProfilesInput,
    ) -> IamBindingsResult<Vec<InstanceProfile>> {
        let response = self
            .client
            .list_instance_profiles()
            .set_path_prefix(input.path_prefix)
            .set_marker(input.marker)
            .set_max_items(input.max_items)
            .send()
            .await?;
        Ok(response.instance_profiles)
    }

    async fn list_instance_profiles_for_role(
        &self,
        role_name: &str,
    ) -> IamBindingsResult<Vec<InstanceProfile>> {
        let response = self
            .client
            .list_instance_profiles_for_role()
            .role_name(role_name)
            .send()
            .await?;
        Ok(response.instance_profiles)
    }

    async fn get_instance_profile(
        &self,
        profile_name: &str,
    ) -> IamBindingsResult<Option<InstanceProfile>> {
        let response = self
            .client
            .get_instance_profile()
            .instance_profile_name(profile_name)
            .send()
            .await?;
        Ok(response.instance_profile)
    }

    async fn create_instance_profile(
        &self,
        input: CreateInstanceProfileInput,
    ) -> IamBindingsResult<Option<InstanceProfile>> {
        let response = self
            .client
            .create_instance_profile()
            .set_instance_profile_name(input.instance_profile_name)
            .set_path(input.path)
            .set_tags(input.tags)
            .send()
            .await?;
        Ok(response.instance_profile)
    }

    async fn delete_instance_profile(&self, profile_name: &str) -> IamBindingsResult<()> {
        self.client
            .delete_instance_profile()
            .instance_profile_name(profile_name)
            .send()
            .await?;
        Ok(())
    }

    async fn add_role_to_instance_profile(
        &self,
        profile_name: &str,
        role_name: &str,
    ) -> IamBindingsResult<()> {
        self.client
            .add_role_to_instance_profile()
            .instance_profile_name(profile_name)
            .role_name(role_name)
            .send()
            .await?;
        Ok(())
    }

    async fn remove_role_from_instance_profile(
        &self,
        profile_name: &str,
        role_name: &str,
    ) -> IamBindingsResult<()> {
        self.client
            .remove_role_from_instance_profile()
            .instance_profile_name(profile_name)
            .role_name(role_name)
            .send()
            .await?;
        Ok(())
    }
}
