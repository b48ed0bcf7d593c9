//! Paginated account alias listing.
//!
//! The alias lookup is a courtesy: when the caller is not allowed to list
//! aliases, whatever was already collected is kept and the lookup ends
//! quietly. Any other page failure is fatal.

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AliasServiceError;

/// Error code IAM returns when the caller may not list account aliases.
pub const ACCESS_DENIED_CODE: &str = "AccessDenied";

/// Why a single alias page could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasPageError {
    /// The caller is not authorized to list aliases.
    AccessDenied(String),
    /// Anything else: transport, throttling, service fault.
    Failed(String),
}

impl AliasPageError {
    /// Classify a failure by its service error code.
    pub fn from_code(code: Option<&str>, message: impl Into<String>) -> Self {
        match code {
            Some(ACCESS_DENIED_CODE) => AliasPageError::AccessDenied(message.into()),
            _ => AliasPageError::Failed(message.into()),
        }
    }
}

/// A lazy sequence of alias pages.
///
/// Each call to
/// [`IdentityService::account_alias_pages`](crate::service::IdentityService::account_alias_pages)
/// starts a new sequence from the first page.
#[async_trait]
pub trait AliasPages: Send {
    /// Fetch the next page, or `None` once the listing is exhausted.
    async fn next_page(&mut self) -> Option<Result<Vec<String>, AliasPageError>>;
}

/// Drain `pages`, concatenating aliases in page order.
///
/// Stops early and keeps the partial list on [`AliasPageError::AccessDenied`];
/// any other page error is returned.
pub async fn collect_aliases(
    pages: &mut (dyn AliasPages + '_),
) -> Result<Vec<String>, AliasServiceError> {
    let mut aliases = Vec::new();
    while let Some(page) = pages.next_page().await {
        match page {
            Ok(mut page_aliases) => aliases.append(&mut page_aliases),
            Err(AliasPageError::AccessDenied(message)) => {
                debug!(%message, collected = aliases.len(), "not allowed to list account aliases");
                break;
            }
            Err(AliasPageError::Failed(message)) => {
                return Err(AliasServiceError::PageFailed(message));
            }
        }
    }
    Ok(aliases)
}
