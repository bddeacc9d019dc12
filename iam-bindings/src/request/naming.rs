//! Key translation between dash-separated parameter keys and SDK field names.

use convert_case::{Case, Casing};

/// `role-name` -> `RoleName`: split on dashes, capitalize each segment, concatenate.
pub fn setter_name(key: &str) -> String {
    key.from_case(Case::Kebab).to_case(Case::Pascal)
}

/// `RoleName` -> `role-name`
pub fn mapping_key(field: &str) -> String {
    field.from_case(Case::Pascal).to_case(Case::Kebab)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setter_name() {
        assert_eq!(setter_name("role-name"), "RoleName");
        assert_eq!(setter_name("path"), "Path");
        assert_eq!(setter_name("max-items"), "MaxItems");
        assert_eq!(
            setter_name("assume-role-policy-document"),
            "AssumeRolePolicyDocument"
        );
        assert_eq!(setter_name("instance-profile-name"), "InstanceProfileName");
    }

    #[test]
    fn test_setter_name_capitalizes_each_segment() {
        assert_eq!(setter_name("ROLE-NAME"), "RoleName");
    }

    #[test]
    fn test_mapping_key() {
        assert_eq!(mapping_key("RoleName"), "role-name");
        assert_eq!(mapping_key("Arn"), "arn");
        assert_eq!(mapping_key("CreateDate"), "create-date");
        assert_eq!(mapping_key("InstanceProfileId"), "instance-profile-id");
        assert_eq!(
            mapping_key("AssumeRolePolicyDocument"),
            "assume-role-policy-document"
        );
    }
}
