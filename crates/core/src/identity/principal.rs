//! Principal classification.
//!
//! [`Principal`] is the tagged form of the ARN resource segment. Only the
//! assumed-role variant carries a session name, and only an assumed role can
//! carry an SSO permission set, so those fields cannot drift out of step with
//! the principal type.

/// Reserved prefix IAM Identity Center puts on the roles it provisions.
pub const SSO_ROLE_PREFIX: &str = "AWSReservedSSO";

/// Principal type tag for an assumed-role session.
pub const ASSUMED_ROLE: &str = "assumed-role";

/// Principal type tag for an IAM user.
pub const USER: &str = "user";

/// Principal type tag for the account root user.
pub const ROOT: &str = "root";

/// The principal behind a caller ARN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    /// The account root user (`arn:aws:iam::<account>:root`).
    Root,

    /// An IAM user; `name` excludes any IAM path.
    User { name: String },

    /// A temporary session from `sts:AssumeRole` and friends.
    AssumedRole {
        role_name: String,
        session_name: String,
        /// Permission set name when the role was provisioned by AWS SSO.
        sso_permission_set: Option<String>,
    },

    /// Any other principal type (`federated-user`, `role`, ...), kept verbatim.
    Other {
        principal_type: String,
        name: String,
    },
}

impl Principal {
    /// Build an assumed-role principal, detecting SSO-provisioned roles.
    pub fn assumed_role(role_name: impl Into<String>, session_name: impl Into<String>) -> Self {
        let role_name = role_name.into();
        let sso_permission_set = sso_permission_set(&role_name);
        Principal::AssumedRole {
            role_name,
            session_name: session_name.into(),
            sso_permission_set,
        }
    }

    /// The principal type tag as it appears in the ARN.
    pub fn principal_type(&self) -> &str {
        match self {
            Principal::Root => ROOT,
            Principal::User { .. } => USER,
            Principal::AssumedRole { .. } => ASSUMED_ROLE,
            Principal::Other { principal_type, .. } => principal_type,
        }
    }

    /// The principal name: user name, role name, or the raw resource path.
    pub fn name(&self) -> &str {
        match self {
            Principal::Root => ROOT,
            Principal::User { name } => name,
            Principal::AssumedRole { role_name, .. } => role_name,
            Principal::Other { name, .. } => name,
        }
    }

    pub fn role_session_name(&self) -> Option<&str> {
        match self {
            Principal::AssumedRole { session_name, .. } => Some(session_name),
            _ => None,
        }
    }

    pub fn sso_permission_set(&self) -> Option<&str> {
        match self {
            Principal::AssumedRole {
                sso_permission_set, ..
            } => sso_permission_set.as_deref(),
            _ => None,
        }
    }
}

/// Extract the permission set from an SSO role name.
///
/// SSO role names look like `AWSReservedSSO_<PermissionSet>_<suffix>`, and the
/// permission set itself may contain underscores. Names with fewer than three
/// `_`-separated parts are left alone.
fn sso_permission_set(role_name: &str) -> Option<String> {
    if !role_name.starts_with(SSO_ROLE_PREFIX) {
        return None;
    }
    let parts: Vec<&str> = role_name.split('_').collect();
    if parts.len() < 3 {
        return None;
    }
    Some(parts[1..parts.len() - 1].join("_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sso_permission_set_simple() {
        let principal = Principal::assumed_role("AWSReservedSSO_SsoRole_abc123", "ben");
        assert_eq!(principal.sso_permission_set(), Some("SsoRole"));
    }

    #[test]
    fn test_sso_permission_set_with_underscores() {
        let principal =
            Principal::assumed_role("AWSReservedSSO_Admin_Read_Only_0123456789abcdef", "ben");
        assert_eq!(principal.sso_permission_set(), Some("Admin_Read_Only"));
    }

    #[test]
    fn test_sso_prefix_too_few_parts() {
        let principal = Principal::assumed_role("AWSReservedSSO_Broken", "ben");
        assert_eq!(principal.sso_permission_set(), None);
        assert_eq!(principal.name(), "AWSReservedSSO_Broken");
    }

    #[test]
    fn test_non_sso_role_has_no_permission_set() {
        let principal = Principal::assumed_role("Deploy_Role_Name", "ci");
        assert_eq!(principal.sso_permission_set(), None);
    }

    #[test]
    fn test_session_name_only_on_assumed_role() {
        assert_eq!(Principal::Root.role_session_name(), None);
        assert_eq!(
            Principal::User { name: "ben".into() }.role_session_name(),
            None
        );
        assert_eq!(
            Principal::assumed_role("ben", "my-session").role_session_name(),
            Some("my-session")
        );
    }

    #[test]
    fn test_principal_type_tags() {
        assert_eq!(Principal::Root.principal_type(), "root");
        assert_eq!(Principal::Root.name(), "root");
        let other = Principal::Other {
            principal_type: "federated-user".into(),
            name: "ben".into(),
        };
        assert_eq!(other.principal_type(), "federated-user");
        assert_eq!(other.name(), "ben");
    }
}
