//! Error types for the aws-whoami core library.
//!
//! Each stage of an invocation has its own error type derived with
//! `thiserror`, and a top-level [`WhoamiError`] enum unifies them for callers
//! that want a single error type. Every variant here is fatal for the
//! invocation; the one non-fatal condition (access denied while listing
//! account aliases) never leaves the [`aliases`](crate::aliases) module.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Unified error type for the entire core library.
#[derive(Debug, Error)]
pub enum WhoamiError {
    #[error(transparent)]
    Arn(#[from] ArnError),

    #[error(transparent)]
    IdentityService(#[from] IdentityServiceError),

    #[error(transparent)]
    AliasService(#[from] AliasServiceError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Render(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// ARN errors
// ---------------------------------------------------------------------------

/// Errors from splitting a caller ARN into principal type, name and session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArnError {
    /// The resource segment lacks a `/` where one is required.
    #[error("arn {0} has an unknown format")]
    MalformedArn(String),
}

// ---------------------------------------------------------------------------
// Identity service errors
// ---------------------------------------------------------------------------

/// Errors from the primary caller-identity lookup.
#[derive(Debug, Error)]
pub enum IdentityServiceError {
    /// Transport, authentication or service failure, surfaced verbatim.
    #[error("{0}")]
    Request(String),

    /// The service answered but left out a required field.
    #[error("GetCallerIdentity response missing {0}")]
    MissingField(&'static str),
}

// ---------------------------------------------------------------------------
// Alias service errors
// ---------------------------------------------------------------------------

/// Fatal errors while paging through account aliases.
#[derive(Debug, Error)]
pub enum AliasServiceError {
    /// A page fetch failed for a reason other than access denial.
    #[error("{0}")]
    PageFailed(String),
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors from loading the AWS profile and credentials.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No usable credentials could be resolved for the selected profile.
    #[error("failed to load credentials{}: {detail}", profile_suffix(.profile))]
    Credentials {
        profile: Option<String>,
        detail: String,
    },

    /// The shared config has no credentials provider at all.
    #[error("no credentials provider configured{}", profile_suffix(.profile))]
    NoCredentialsProvider { profile: Option<String> },
}

fn profile_suffix(profile: &Option<String>) -> String {
    match profile {
        Some(name) => format!(" for profile '{}'", name),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = ArnError::MalformedArn("arn:aws:iam::123456789012:bogus".into());
        assert_eq!(
            err.to_string(),
            "arn arn:aws:iam::123456789012:bogus has an unknown format"
        );

        let err = IdentityServiceError::MissingField("Arn");
        assert_eq!(err.to_string(), "GetCallerIdentity response missing Arn");

        let err = ConfigError::Credentials {
            profile: Some("dev".into()),
            detail: "profile not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to load credentials for profile 'dev': profile not found"
        );

        let err = ConfigError::NoCredentialsProvider { profile: None };
        assert_eq!(err.to_string(), "no credentials provider configured");
    }

    #[test]
    fn test_whoami_error_from_subsystem() {
        let err: WhoamiError = ArnError::MalformedArn("x".into()).into();
        assert!(matches!(err, WhoamiError::Arn(_)));

        let err: WhoamiError = AliasServiceError::PageFailed("throttled".into()).into();
        assert!(matches!(err, WhoamiError::AliasService(_)));
        assert_eq!(err.to_string(), "throttled");
    }
}
