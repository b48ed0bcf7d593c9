//! Identity resolution: turning a caller ARN into a classified principal.
//!
//! The ARN resource segment decides the principal type:
//! 1. `root` is the account root user
//! 2. `user/...` is an IAM user (path discarded)
//! 3. `assumed-role/<role>/<session>` is a role session, possibly SSO
//! 4. anything else is kept verbatim

pub mod arn;
pub mod principal;
pub mod whoami;

pub use arn::parse_principal;
pub use principal::Principal;
pub use whoami::{CallerIdentity, Whoami};
