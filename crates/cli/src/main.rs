//! aws-whoami command-line tool.
//!
//! Shows the account, principal and session behind the current AWS
//! credentials, like `aws sts get-caller-identity` with account aliases, IAM
//! path stripping and SSO permission sets folded in.

mod style;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use aws_whoami_core::aws::AwsIdentityService;
use aws_whoami_core::config::{load_sdk_config, region_name};
use aws_whoami_core::format::render;
use aws_whoami_core::{resolve_whoami, OutputFormat, Settings, VERSION};

/// Environment variable holding the tracing filter directive.
const LOG_ENV: &str = "AWS_WHOAMI_LOG";

// ---------------------------------------------------------------------------
// CLI argument definitions
// ---------------------------------------------------------------------------

/// Show the AWS identity behind the current credentials.
#[derive(Parser, Debug)]
#[command(
    name = "aws-whoami",
    disable_version_flag = true,
    about = "Show the AWS account, principal and session behind the current credentials",
    after_help = "Set AWS_WHOAMI_DISABLE_ACCOUNT_ALIAS=true to skip the account alias lookup, \
                  or to a comma-separated list of account numbers, ARNs, role names, role \
                  session names or SSO permission sets to skip it only for those identities."
)]
struct Cli {
    /// A config profile to use.
    #[arg(long)]
    profile: Option<String>,

    /// Output as JSON.
    #[arg(long)]
    json: bool,

    /// Skip the account alias lookup, whatever AWS_WHOAMI_DISABLE_ACCOUNT_ALIAS says.
    #[arg(long)]
    disable_account_alias: bool,

    /// Display the version.
    #[arg(long)]
    version: bool,
}

impl Cli {
    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> ExitCode {
    // Standard output carries the result; logs go to standard error.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    if cli.version {
        println!("{}", VERSION);
        return ExitCode::SUCCESS;
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", style::error(&format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::from_env(cli.profile.clone(), cli.output_format())
        .disable_account_alias(cli.disable_account_alias);

    let sdk_config = load_sdk_config(settings.profile.as_deref())
        .await
        .context("failed to load AWS configuration")?;

    let service = AwsIdentityService::new(&sdk_config);
    let whoami = resolve_whoami(&service, &region_name(&sdk_config), &settings.suppression)
        .await?;

    let rendered = render(&whoami, settings.output).context("failed to render output")?;
    println!("{}", rendered);

    Ok(())
}
