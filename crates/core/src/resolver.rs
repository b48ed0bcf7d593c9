//! One invocation: caller identity, then optional alias lookup.

use tracing::{debug, info};

use crate::aliases::collect_aliases;
use crate::errors::WhoamiError;
use crate::identity::Whoami;
use crate::service::IdentityService;
use crate::suppression::AliasSuppression;

/// Resolve the current identity through `service`.
///
/// The alias lookup runs after the caller identity is known, and only when
/// `suppression` does not rule it out for that identity. Nothing is retried.
pub async fn resolve_whoami(
    service: &dyn IdentityService,
    region: &str,
    suppression: &AliasSuppression,
) -> Result<Whoami, WhoamiError> {
    let caller = service.caller_identity().await?;
    info!(account = %caller.account, arn = %caller.arn, "resolved caller identity");

    let whoami = Whoami::from_caller_identity(caller, region)?;

    if suppression.should_skip(&whoami) {
        debug!("skipping account alias lookup");
        return Ok(whoami);
    }

    let mut pages = service.account_alias_pages();
    let aliases = collect_aliases(pages.as_mut()).await?;
    debug!(count = aliases.len(), "collected account aliases");

    Ok(whoami.with_account_aliases(aliases))
}
