//! Instance profile operations

use crate::aws::iam_client::IamApi;
use crate::error::IamBindingsResult;
use crate::request::{build_request, Params};
use crate::response::{to_mapping, IamObject, Mapping};
use aws_sdk_iam::operation::create_instance_profile::builders::CreateInstanceProfileInputBuilder;
use aws_sdk_iam::operation::list_instance_profiles::builders::ListInstanceProfilesInputBuilder;
use aws_sdk_iam::types::InstanceProfile;

fn profile_mappings(profiles: &[InstanceProfile]) -> Vec<Mapping> {
    profiles
        .iter()
        .map(|profile| IamObject::InstanceProfile(profile).to_mapping())
        .collect()
}

impl<A: IamApi> super::service::IamBindingsService<A> {
    pub async fn list_instance_profiles(&self, params: &Params) -> IamBindingsResult<Vec<Mapping>> {
        let input = build_request::<ListInstanceProfilesInputBuilder>(params)?;
        let profiles = self.api.list_instance_profiles(input).await?;
        Ok(profile_mappings(&profiles))
    }

    pub async fn list_instance_profiles_for_role(
        &self,
        role_name: &str,
    ) -> IamBindingsResult<Vec<Mapping>> {
        let profiles = self.api.list_instance_profiles_for_role(role_name).await?;
        Ok(profile_mappings(&profiles))
    }

    pub async fn get_instance_profile(
        &self,
        profile_name: &str,
    ) -> IamBindingsResult<Option<Mapping>> {
        let profile = self.api.get_instance_profile(profile_name).await?;
        Ok(to_mapping(profile.as_ref()))
    }

    pub async fn create_instance_profile(
        &self,
        params: &Params,
    ) -> IamBindingsResult<Option<Mapping>> {
        let input = build_request::<CreateInstanceProfileInputBuilder>(params)?;
        let profile = self.api.create_instance_profile(input).await?;
        Ok(to_mapping(profile.as_ref()))
    }

    pub async fn delete_instance_profile(&self, profile_name: &str) -> IamBindingsResult<()> {
        log::debug!("Deleting instance profile {profile_name}");
        self.api.delete_instance_profile(profile_name).await
    }

    pub async fn add_role_to_instance_profile(
        &self,
        profile_name: &str,
        role_name: &str,
    ) -> IamBindingsResult<()> {
        self.api
            .add_role_to_instance_profile(profile_name, role_name)
            .await
    }

    pub async fn remove_role_from_instance_profile(
        &self,
        profile_name: &str,
        role_name: &str,
    ) -> IamBindingsResult<()> {
        self.api
            .remove_role_from_instance_profile(profile_name, role_name)
            .await
    }
}
