//! Invocation settings and AWS SDK configuration loading.
//!
//! Environment values are read once, up front, into [`Settings`]; nothing
//! downstream consults the process environment. The SDK config is loaded
//! through the standard `aws-config` provider chain.

use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_sdk_sts::error::DisplayErrorContext;
use tracing::{debug, info};

use crate::errors::ConfigError;
use crate::format::OutputFormat;
use crate::suppression::AliasSuppression;

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Everything one invocation needs besides the AWS clients.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Shared-config profile; `None` uses the default chain.
    pub profile: Option<String>,

    /// Text or JSON output.
    pub output: OutputFormat,

    /// Alias lookup suppression.
    pub suppression: AliasSuppression,
}

impl Settings {
    pub fn new(
        profile: Option<String>,
        output: OutputFormat,
        suppression: AliasSuppression,
    ) -> Self {
        Self {
            profile,
            output,
            suppression,
        }
    }

    /// Build settings with suppression taken from the environment.
    pub fn from_env(profile: Option<String>, output: OutputFormat) -> Self {
        Self::new(profile, output, AliasSuppression::from_env())
    }

    /// Force unconditional alias suppression when `force` is set, whatever
    /// the environment said.
    pub fn disable_account_alias(mut self, force: bool) -> Self {
        if force {
            self.suppression = AliasSuppression::always();
        }
        self
    }
}

// ---------------------------------------------------------------------------
// SDK config
// ---------------------------------------------------------------------------

/// Load the SDK config for `profile` and resolve its credentials once.
///
/// Resolving eagerly turns a bad profile or missing credentials into a
/// [`ConfigError`] before any service call is made. The resolved credentials
/// are pinned into the returned config so later clients reuse them.
pub async fn load_sdk_config(profile: Option<&str>) -> Result<SdkConfig, ConfigError> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(name) = profile {
        info!(profile = name, "using AWS profile");
        loader = loader.profile_name(name);
    }
    let config = loader.load().await;

    let provider = config
        .credentials_provider()
        .ok_or_else(|| ConfigError::NoCredentialsProvider {
            profile: profile.map(str::to_string),
        })?;
    let credentials =
        provider
            .provide_credentials()
            .await
            .map_err(|e| ConfigError::Credentials {
                profile: profile.map(str::to_string),
                detail: DisplayErrorContext(&e).to_string(),
            })?;
    debug!(region = %region_name(&config), "loaded AWS configuration");

    Ok(config
        .into_builder()
        .credentials_provider(SharedCredentialsProvider::new(credentials))
        .build())
}

/// The configured region, or an empty string when none is set.
pub fn region_name(config: &SdkConfig) -> String {
    config
        .region()
        .map(|region| region.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_config::Region;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.profile, None);
        assert_eq!(settings.output, OutputFormat::Text);
        assert!(!settings.suppression.is_enabled());
    }

    #[test]
    fn test_force_overrides_match_values() {
        let settings = Settings::new(
            Some("dev".into()),
            OutputFormat::Json,
            AliasSuppression::parse("123456789012"),
        )
        .disable_account_alias(true);
        assert_eq!(settings.suppression, AliasSuppression::always());
        assert_eq!(settings.profile.as_deref(), Some("dev"));
    }

    #[test]
    fn test_no_force_keeps_environment_value() {
        let suppression = AliasSuppression::parse("prod,dev");
        let settings = Settings::new(None, OutputFormat::Text, suppression.clone())
            .disable_account_alias(false);
        assert_eq!(settings.suppression, suppression);
    }

    #[test]
    fn test_region_name() {
        let config = SdkConfig::builder()
            .region(Region::new("ap-southeast-2"))
            .build();
        assert_eq!(region_name(&config), "ap-southeast-2");
        assert_eq!(region_name(&SdkConfig::builder().build()), "");
    }
}
