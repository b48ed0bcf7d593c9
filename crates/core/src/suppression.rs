//! Account alias suppression.
//!
//! `iam:ListAccountAliases` is a privileged call that some principals are not
//! allowed to make, and some operators would rather not see attempted. The
//! `AWS_WHOAMI_DISABLE_ACCOUNT_ALIAS` variable turns the lookup off either
//! everywhere or only for identities matching one of a comma-separated list
//! of values.

use tracing::debug;

use crate::identity::Whoami;

/// Environment variable controlling alias suppression.
pub const DISABLE_ACCOUNT_ALIAS_ENV: &str = "AWS_WHOAMI_DISABLE_ACCOUNT_ALIAS";

/// Whether, and for whom, to skip the account alias lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasSuppression {
    enabled: bool,
    match_values: Option<Vec<String>>,
}

impl AliasSuppression {
    /// Never suppress.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Suppress for every identity.
    pub fn always() -> Self {
        Self {
            enabled: true,
            match_values: None,
        }
    }

    /// Suppress only for identities matching one of `values`.
    pub fn matching<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: true,
            match_values: Some(values.into_iter().map(Into::into).collect()),
        }
    }

    /// Read [`DISABLE_ACCOUNT_ALIAS_ENV`] from the process environment.
    ///
    /// An unset or non-unicode variable counts as empty.
    pub fn from_env() -> Self {
        let value = std::env::var(DISABLE_ACCOUNT_ALIAS_ENV).unwrap_or_default();
        Self::parse(&value)
    }

    /// Parse an environment value.
    ///
    /// - `""`, `"0"`, `"false"` (any case): never suppress
    /// - `"1"`, `"true"` (any case): always suppress
    /// - anything else: comma-separated match values, kept verbatim
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "" | "0" | "false" => Self::disabled(),
            "1" | "true" => Self::always(),
            _ => Self::matching(value.split(',')),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn match_values(&self) -> Option<&[String]> {
        self.match_values.as_deref()
    }

    /// Decide whether the alias lookup should be skipped for `whoami`.
    ///
    /// A match value hits when the account number starts or ends with it, or
    /// when it equals the ARN, principal name, role session name or SSO
    /// permission set exactly.
    pub fn should_skip(&self, whoami: &Whoami) -> bool {
        if !self.enabled {
            return false;
        }
        let values = match self.match_values.as_deref() {
            None | Some([]) => return true,
            Some(values) => values,
        };

        let hit = values.iter().find(|value| matches_identity(value, whoami));
        if let Some(value) = hit {
            debug!(match_value = %value, "account alias lookup suppressed");
            return true;
        }
        false
    }
}

fn matches_identity(value: &str, whoami: &Whoami) -> bool {
    let account = whoami.account();
    account.starts_with(value)
        || account.ends_with(value)
        || whoami.arn() == value
        || whoami.name() == value
        || whoami.role_session_name() == Some(value)
        || whoami.sso_permission_set() == Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::CallerIdentity;

    fn whoami(arn: &str) -> Whoami {
        Whoami::from_caller_identity(
            CallerIdentity {
                account: "123456789012".into(),
                arn: arn.into(),
                user_id: "AROAJQABLZS4A3QDU576Q:my-session".into(),
            },
            "us-east-1",
        )
        .unwrap()
    }

    fn role_session() -> Whoami {
        whoami("arn:aws:sts::123456789012:assumed-role/ben/my-session")
    }

    fn sso_session() -> Whoami {
        whoami("arn:aws:sts::123456789012:assumed-role/AWSReservedSSO_SsoRole_abc123/ben")
    }

    // -------------------------------------------------------------------
    // parse
    // -------------------------------------------------------------------

    #[test]
    fn test_parse_disabled_values() {
        for value in ["", "0", "false", "FALSE", "False"] {
            assert_eq!(AliasSuppression::parse(value), AliasSuppression::disabled());
        }
    }

    #[test]
    fn test_parse_unconditional_values() {
        for value in ["1", "true", "TRUE", "True"] {
            assert_eq!(AliasSuppression::parse(value), AliasSuppression::always());
        }
    }

    #[test]
    fn test_parse_match_values() {
        let suppression = AliasSuppression::parse("4444,1234");
        assert!(suppression.is_enabled());
        assert_eq!(
            suppression.match_values(),
            Some(&["4444".to_string(), "1234".to_string()][..])
        );
    }

    #[test]
    fn test_parse_keeps_tokens_verbatim() {
        let suppression = AliasSuppression::parse("Prod, dev,");
        assert_eq!(
            suppression.match_values(),
            Some(&["Prod".to_string(), " dev".to_string(), String::new()][..])
        );
    }

    // -------------------------------------------------------------------
    // should_skip
    // -------------------------------------------------------------------

    #[test]
    fn test_disabled_never_skips() {
        let suppression = AliasSuppression {
            enabled: false,
            match_values: Some(vec!["123456789012".into()]),
        };
        assert!(!suppression.should_skip(&role_session()));
    }

    #[test]
    fn test_always_skips() {
        assert!(AliasSuppression::always().should_skip(&role_session()));
        assert!(AliasSuppression::matching(Vec::<String>::new()).should_skip(&role_session()));
    }

    #[test]
    fn test_account_prefix_and_suffix() {
        let whoami = role_session();
        assert!(AliasSuppression::matching(["4444", "1234"]).should_skip(&whoami));
        assert!(AliasSuppression::matching(["9012"]).should_skip(&whoami));
        assert!(!AliasSuppression::matching(["4444", "5678"]).should_skip(&whoami));
    }

    #[test]
    fn test_exact_identity_fields() {
        let whoami = role_session();
        for value in [
            "arn:aws:sts::123456789012:assumed-role/ben/my-session",
            "ben",
            "my-session",
        ] {
            assert!(
                AliasSuppression::matching([value]).should_skip(&whoami),
                "{value} should suppress"
            );
        }
        assert!(!AliasSuppression::matching(["be", "session"]).should_skip(&whoami));
    }

    #[test]
    fn test_sso_permission_set() {
        assert!(AliasSuppression::matching(["SsoRole"]).should_skip(&sso_session()));
        assert!(!AliasSuppression::matching(["SsoRole"]).should_skip(&role_session()));
    }

    #[test]
    fn test_non_session_principal_does_not_match_session() {
        let user = whoami("arn:aws:iam::123456789012:user/ben");
        assert!(!AliasSuppression::matching(["my-session"]).should_skip(&user));
        assert!(AliasSuppression::matching(["ben"]).should_skip(&user));
    }
}
