//! The resolved identity record.

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::arn::parse_principal;
use super::principal::Principal;
use crate::errors::ArnError;

/// Raw `GetCallerIdentity` fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub account: String,
    pub arn: String,
    pub user_id: String,
}

/// Who the current credentials belong to.
///
/// Built once per invocation from the caller identity, the configured region
/// and (unless suppressed) the account aliases, then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Whoami {
    account: String,
    account_aliases: Vec<String>,
    arn: String,
    principal: Principal,
    user_id: String,
    region: String,
}

impl Whoami {
    /// Resolve a caller identity into a `Whoami` with no aliases yet.
    pub fn from_caller_identity(
        caller: CallerIdentity,
        region: impl Into<String>,
    ) -> Result<Self, ArnError> {
        let principal = parse_principal(&caller.arn)?;
        Ok(Self {
            account: caller.account,
            account_aliases: Vec::new(),
            arn: caller.arn,
            principal,
            user_id: caller.user_id,
            region: region.into(),
        })
    }

    /// Attach the account aliases, in the order they were listed.
    pub fn with_account_aliases(mut self, aliases: Vec<String>) -> Self {
        self.account_aliases = aliases;
        self
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn account_aliases(&self) -> &[String] {
        &self.account_aliases
    }

    pub fn arn(&self) -> &str {
        &self.arn
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn principal_type(&self) -> &str {
        self.principal.principal_type()
    }

    pub fn name(&self) -> &str {
        self.principal.name()
    }

    pub fn role_session_name(&self) -> Option<&str> {
        self.principal.role_session_name()
    }

    pub fn sso_permission_set(&self) -> Option<&str> {
        self.principal.sso_permission_set()
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn region(&self) -> &str {
        &self.region
    }
}

/// Flat JSON object; absent optional fields are written as `null`.
impl Serialize for Whoami {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Whoami", 9)?;
        state.serialize_field("Account", &self.account)?;
        state.serialize_field("AccountAliases", &self.account_aliases)?;
        state.serialize_field("Arn", &self.arn)?;
        state.serialize_field("Type", self.principal_type())?;
        state.serialize_field("Name", self.name())?;
        state.serialize_field("RoleSessionName", &self.role_session_name())?;
        state.serialize_field("UserId", &self.user_id)?;
        state.serialize_field("Region", &self.region)?;
        state.serialize_field("SSOPermissionSet", &self.sso_permission_set())?;
        state.end()
    }
}
