//! Inline role policy operations

use crate::aws::iam_client::IamApi;
use crate::error::IamBindingsResult;
use crate::request::{build_request, Params};
use crate::response::{IamObject, Mapping};
use aws_sdk_iam::operation::put_role_policy::builders::PutRolePolicyInputBuilder;

impl<A: IamApi> super::service::IamBindingsService<A> {
    /// List the inline policy names of a role
    pub async fn list_role_policies(&self, role_name: &str) -> IamBindingsResult<Vec<String>> {
        self.api.list_role_policies(role_name).await
    }

    /// Fetch one inline policy; the document comes back URL-decoded
    pub async fn get_role_policy(
        &self,
        role_name: &str,
        policy_name: &str,
    ) -> IamBindingsResult<Mapping> {
        let policy = self.api.get_role_policy(role_name, policy_name).await?;
        Ok(IamObject::RolePolicy(&policy).to_mapping())
    }

    /// Fetch every inline policy of a role
    ///
    /// Lists the policy names, then fetches each document in turn: one call per
    /// policy, in listing order.
    pub async fn get_role_policies(&self, role_name: &str) -> IamBindingsResult<Vec<Mapping>> {
        let policy_names = self.api.list_role_policies(role_name).await?;
        log::debug!(
            "Fetching {} inline policies of role {role_name}",
            policy_names.len()
        );

        let mut policies = Vec::with_capacity(policy_names.len());
        for policy_name in &policy_names {
            policies.push(self.get_role_policy(role_name, policy_name).await?);
        }
        Ok(policies)
    }

    /// Put an inline policy; `params` carries `role-name`, `policy-name` and
    /// `policy-document`.
    pub async fn put_role_policy(&self, params: &Params) -> IamBindingsResult<()> {
        let input = build_request::<PutRolePolicyInputBuilder>(params)?;
        self.api.put_role_policy(input).await
    }

    pub async fn delete_role_policy(
        &self,
        role_name: &str,
        policy_name: &str,
    ) -> IamBindingsResult<()> {
        self.api.delete_role_policy(role_name, policy_name).await
    }
}
