//! Role operations

use crate::aws::iam_client::IamApi;
use crate::error::IamBindingsResult;
use crate::request::{build_request, Params};
use crate::response::{to_mapping, IamObject, Mapping};
use aws_sdk_iam::operation::create_role::builders::CreateRoleInputBuilder;
use aws_sdk_iam::operation::list_roles::builders::ListRolesInputBuilder;
use aws_sdk_iam::operation::update_assume_role_policy::builders::UpdateAssumeRolePolicyInputBuilder;
use aws_sdk_iam::operation::update_role::builders::UpdateRoleInputBuilder;
use serde_json::Value;

/// Path given to roles created without an explicit `path`.
pub const DEFAULT_ROLE_PATH: &str = "/";

/// Trust policy given to roles created without an explicit
/// `assume-role-policy-document`: EC2 instances may assume the role.
pub const DEFAULT_TRUST_POLICY: &str = r#"{"Version":"2012-10-17","Statement":[{"Effect":"Allow","Principal":{"Service":["ec2.amazonaws.com"]},"Action":["sts:AssumeRole"]}]}"#;

/// Defaults for create-role; caller parameters are merged over these.
pub fn default_role_params() -> Params {
    let mut params = Params::new();
    params.insert("path".to_string(), Value::from(DEFAULT_ROLE_PATH));
    params.insert(
        "assume-role-policy-document".to_string(),
        Value::from(DEFAULT_TRUST_POLICY),
    );
    params
}

impl<A: IamApi> super::service::IamBindingsService<A> {
    /// List roles; `params` may carry `path-prefix`, `marker` and `max-items`.
    pub async fn list_roles(&self, params: &Params) -> IamBindingsResult<Vec<Mapping>> {
        let input = build_request::<ListRolesInputBuilder>(params)?;
        let roles = self.api.list_roles(input).await?;
        Ok(roles.iter().map(|role| IamObject::Role(role).to_mapping()).collect())
    }

    pub async fn get_role(&self, role_name: &str) -> IamBindingsResult<Option<Mapping>> {
        log::debug!("Fetching role {role_name}");
        let role = self.api.get_role(role_name).await?;
        Ok(to_mapping(role.as_ref()))
    }

    /// Create a role. `role-name` is required by IAM; `path` and
    /// `assume-role-policy-document` fall back to [`default_role_params`].
    pub async fn create_role(&self, params: &Params) -> IamBindingsResult<Option<Mapping>> {
        let mut merged = default_role_params();
        merged.extend(params.clone());

        let input = build_request::<CreateRoleInputBuilder>(&merged)?;
        let role = self.api.create_role(input).await?;
        Ok(to_mapping(role.as_ref()))
    }

    pub async fn update_role(&self, params: &Params) -> IamBindingsResult<()> {
        let input = build_request::<UpdateRoleInputBuilder>(params)?;
        self.api.update_role(input).await
    }

    pub async fn update_assume_role_policy(&self, params: &Params) -> IamBindingsResult<()> {
        let input = build_request::<UpdateAssumeRolePolicyInputBuilder>(params)?;
        self.api.update_assume_role_policy(input).await
    }

    pub async fn delete_role(&self, role_name: &str) -> IamBindingsResult<()> {
        log::debug!("Deleting role {role_name}");
        self.api.delete_role(role_name).await
    }
}
