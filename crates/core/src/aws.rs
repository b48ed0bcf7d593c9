//! AWS SDK backed [`IdentityService`].
//!
//! Caller identity comes from `sts:GetCallerIdentity`; aliases come from
//! `iam:ListAccountAliases`, fetched one marker-driven page at a time.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_iam::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_iam::Client as IamClient;
use aws_sdk_sts::Client as StsClient;
use tracing::debug;

use crate::aliases::{AliasPageError, AliasPages};
use crate::errors::IdentityServiceError;
use crate::identity::CallerIdentity;
use crate::service::IdentityService;

/// STS and IAM clients built from one SDK config.
pub struct AwsIdentityService {
    sts: StsClient,
    iam: IamClient,
}

impl AwsIdentityService {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            sts: StsClient::new(config),
            iam: IamClient::new(config),
        }
    }
}

#[async_trait]
impl IdentityService for AwsIdentityService {
    async fn caller_identity(&self) -> Result<CallerIdentity, IdentityServiceError> {
        let out = self
            .sts
            .get_caller_identity()
            .send()
            .await
            .map_err(|e| IdentityServiceError::Request(DisplayErrorContext(&e).to_string()))?;

        let account = out
            .account()
            .ok_or(IdentityServiceError::MissingField("Account"))?;
        let arn = out.arn().ok_or(IdentityServiceError::MissingField("Arn"))?;
        let user_id = out
            .user_id()
            .ok_or(IdentityServiceError::MissingField("UserId"))?;

        Ok(CallerIdentity {
            account: account.to_string(),
            arn: arn.to_string(),
            user_id: user_id.to_string(),
        })
    }

    fn account_alias_pages(&self) -> Box<dyn AliasPages + '_> {
        Box::new(IamAliasPages {
            iam: &self.iam,
            marker: None,
            exhausted: false,
        })
    }
}

/// Alias pages pulled lazily, following IAM's `Marker` / `IsTruncated`.
struct IamAliasPages<'a> {
    iam: &'a IamClient,
    marker: Option<String>,
    exhausted: bool,
}

#[async_trait]
impl<'a> AliasPages for IamAliasPages<'a> {
    async fn next_page(&mut self) -> Option<Result<Vec<String>, AliasPageError>> {
        if self.exhausted {
            return None;
        }

        let result = self
            .iam
            .list_account_aliases()
            .set_marker(self.marker.take())
            .send()
            .await;

        let output = match result {
            Ok(output) => output,
            Err(err) => {
                self.exhausted = true;
                let code = err.as_service_error().and_then(|e| e.code());
                return Some(Err(AliasPageError::from_code(
                    code,
                    DisplayErrorContext(&err).to_string(),
                )));
            }
        };

        self.marker = output.marker().map(str::to_string);
        self.exhausted = !output.is_truncated() || self.marker.is_none();
        debug!(
            count = output.account_aliases().len(),
            truncated = output.is_truncated(),
            "fetched account alias page"
        );
        Some(Ok(output.account_aliases().to_vec()))
    }
}
