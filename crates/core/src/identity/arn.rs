//! Caller ARN parsing.
//!
//! Only the resource segment (everything after the last `:`) is inspected.
//! The rest of the ARN is trusted as returned by STS.

use tracing::debug;

use super::principal::{Principal, ASSUMED_ROLE, ROOT, USER};
use crate::errors::ArnError;

/// Split a caller ARN into a [`Principal`].
///
/// - `...:root` is the account root user.
/// - `...:user/<path>/<name>` keeps only the trailing user name.
/// - `...:assumed-role/<role>/<session>` yields role and session names.
/// - `...:<type>/<rest>` keeps `<rest>` verbatim for every other type.
///
/// Fails with [`ArnError::MalformedArn`] when a required `/` is missing.
pub fn parse_principal(arn: &str) -> Result<Principal, ArnError> {
    let resource = arn.rsplit(':').next().unwrap_or(arn);

    if resource == ROOT {
        return Ok(Principal::Root);
    }

    let (principal_type, resource_path) = resource
        .split_once('/')
        .ok_or_else(|| ArnError::MalformedArn(arn.to_string()))?;

    let principal = match principal_type {
        ASSUMED_ROLE => {
            let (role_name, session_name) = resource_path
                .split_once('/')
                .ok_or_else(|| ArnError::MalformedArn(arn.to_string()))?;
            Principal::assumed_role(role_name, session_name)
        }
        USER => Principal::User {
            name: resource_path
                .rsplit('/')
                .next()
                .unwrap_or(resource_path)
                .to_string(),
        },
        _ => Principal::Other {
            principal_type: principal_type.to_string(),
            name: resource_path.to_string(),
        },
    };

    debug!(
        arn,
        principal_type = principal.principal_type(),
        name = principal.name(),
        "parsed caller arn"
    );
    Ok(principal)
}
