//! aws-whoami core library.
//!
//! Resolves the AWS identity behind a set of credentials: parses the caller
//! ARN into a classified principal, decides whether the account alias lookup
//! should run, collects aliases page by page, and renders the result as
//! aligned text or JSON.

pub mod aliases;
pub mod aws;
pub mod config;
pub mod errors;
pub mod format;
pub mod identity;
pub mod resolver;
pub mod service;
pub mod suppression;

// Re-exports for convenience.
pub use config::Settings;
pub use errors::WhoamiError;
pub use format::OutputFormat;
pub use identity::{CallerIdentity, Principal, Whoami};
pub use resolver::resolve_whoami;
pub use service::IdentityService;
pub use suppression::AliasSuppression;

/// Version printed by `aws-whoami --version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
