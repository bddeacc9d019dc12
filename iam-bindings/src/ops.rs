//! Credentials-first entry points.
//!
//! Each function resolves the cached client for `credentials` and runs the
//! matching [`IamBindingsService`] operation.

use crate::aws::credentials::Credentials;
use crate::commands::IamBindingsService;
use crate::error::IamBindingsResult;
use crate::request::Params;
use crate::response::Mapping;

pub async fn list_roles(
    credentials: &Credentials,
    params: &Params,
) -> IamBindingsResult<Vec<Mapping>> {
    IamBindingsService::connect(credentials)
        .await?
        .list_roles(params)
        .await
}

pub async fn get_role(
    credentials: &Credentials,
    role_name: &str,
) -> IamBindingsResult<Option<Mapping>> {
    IamBindingsService::connect(credentials)
        .await?
        .get_role(role_name)
        .await
}

pub async fn create_role(
    credentials: &Credentials,
    params: &Params,
) -> IamBindingsResult<Option<Mapping>> {
    IamBindingsService::connect(credentials)
        .await?
        .create_role(params)
        .await
}

pub async fn update_role(credentials: &Credentials, params: &Params) -> IamBindingsResult<()> {
    IamBindingsService::connect(credentials)
        .await?
        .update_role(params)
        .await
}

pub async fn update_assume_role_policy(
    credentials: &Credentials,
    params: &Params,
) -> IamBindingsResult<()> {
    IamBindingsService::connect(credentials)
        .await?
        .update_assume_role_policy(params)
        .await
}

pub async fn delete_role(credentials: &Credentials, role_name: &str) -> IamBindingsResult<()> {
    IamBindingsService::connect(credentials)
        .await?
        .delete_role(role_name)
        .await
}

pub async fn list_role_policies(
    credentials: &Credentials,
    role_name: &str,
) -> IamBindingsResult<Vec<String>> {
    IamBindingsService::connect(credentials)
        .await?
        .list_role_policies(role_name)
        .await
}

pub async fn get_role_policy(
    credentials: &Credentials,
    role_name: &str,
    policy_name: &str,
) -> IamBindingsResult<Mapping> {
    IamBindingsService::connect(credentials)
        .await?
        .get_role_policy(role_name, policy_name)
        .await
}

pub async fn get_role_policies(
    credentials: &Credentials,
    role_name: &str,
) -> IamBindingsResult<Vec<Mapping>> {
    IamBindingsService::connect(credentials)
        .await?
        .get_role_policies(role_name)
        .await
}

pub async fn put_role_policy(credentials: &Credentials, params: &Params) -> IamBindingsResult<()> {
    IamBindingsService::connect(credentials)
        .await?
        .put_role_policy(params)
        .await
}

pub async fn delete_role_policy(
    credentials: &Credentials,
    role_name: &str,
    policy_name: &str,
) -> IamBindingsResult<()> {
    IamBindingsService::connect(credentials)
        .await?
        .delete_role_policy(role_name, policy_name)
        .await
}

pub async fn list_instance_profiles(
    credentials: &Credentials,
    params: &Params,
) -> IamBindingsResult<Vec<Mapping>> {
    IamBindingsService::connect(credentials)
        .await?
        .list_instance_profiles(params)
        .await
}

pub async fn list_instance_profiles_for_role(
    credentials: &Credentials,
    role_name: &str,
) -> IamBindingsResult<Vec<Mapping>> {
    IamBindingsService::connect(credentials)
        .await?
        .list_instance_profiles_for_role(role_name)
        .await
}

pub async fn get_instance_profile(
    credentials: &Credentials,
    profile_name: &str,
) -> IamBindingsResult<Option<Mapping>> {
    IamBindingsService::connect(credentials)
        .await?
        .get_instance_profile(profile_name)
        .await
}

pub async fn create_instance_profile(
    credentials: &Credentials,
    params: &Params,
) -> IamBindingsResult<Option<Mapping>> {
    IamBindingsService::connect(credentials)
        .await?
        .create_instance_profile(params)
        .await
}

pub async fn delete_instance_profile(
    credentials: &Credentials,
    profile_name: &str,
) -> IamBindingsResult<()> {
    IamBindingsService::connect(credentials)
        .await?
        .delete_instance_profile(profile_name)
        .await
}

pub async fn add_role_to_instance_profile(
    credentials: &Credentials,
    profile_name: &str,
    role_name: &str,
) -> IamBindingsResult<()> {
    IamBindingsService::connect(credentials)
        .await?
        .add_role_to_instance_profile(profile_name, role_name)
        .await
}

pub async fn remove_role_from_instance_profile(
    credentials: &Credentials,
    profile_name: &str,
    role_name: &str,
) -> IamBindingsResult<()> {
    IamBindingsService::connect(credentials)
        .await?
        .remove_role_from_instance_profile(profile_name, role_name)
        .await
}
