//! The identity service seam.
//!
//! [`IdentityService`] hides the two network calls behind plain data so the
//! resolver can be driven by the AWS SDK in production and by in-memory
//! fakes in tests.

use async_trait::async_trait;

use crate::aliases::AliasPages;
use crate::errors::IdentityServiceError;
use crate::identity::CallerIdentity;

#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Look up the account, ARN and user id of the current credentials.
    async fn caller_identity(&self) -> Result<CallerIdentity, IdentityServiceError>;

    /// Start a fresh listing of the account's aliases.
    fn account_alias_pages(&self) -> Box<dyn AliasPages + '_>;
}
