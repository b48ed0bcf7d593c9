//! Rendering a [`Whoami`] as aligned text or JSON.

use crate::errors::WhoamiError;
use crate::identity::principal::ROOT;
use crate::identity::Whoami;

/// Output mode selected on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Column-aligned `Label: value` lines.
    #[default]
    Text,
    /// A single line of JSON.
    Json,
}

/// Render `whoami` in the requested format, without a trailing newline.
pub fn render(whoami: &Whoami, format: OutputFormat) -> Result<String, WhoamiError> {
    match format {
        OutputFormat::Text => Ok(format_text(whoami)),
        OutputFormat::Json => Ok(serde_json::to_string(whoami)?),
    }
}

/// Render `whoami` as `Label: value` lines with the values aligned.
///
/// Account aliases follow the account line with an empty label. For SSO
/// sessions the permission set replaces the principal type line.
pub fn format_text(whoami: &Whoami) -> String {
    let mut records: Vec<(String, &str)> = Vec::with_capacity(7 + whoami.account_aliases().len());
    records.push(("Account: ".into(), whoami.account()));
    for alias in whoami.account_aliases() {
        records.push((String::new(), alias));
    }
    records.push(("Region: ".into(), whoami.region()));
    match whoami.sso_permission_set() {
        Some(permission_set) => records.push(("AWS SSO: ".into(), permission_set)),
        None => records.push(type_record(whoami)),
    }
    if let Some(session) = whoami.role_session_name() {
        records.push(("RoleSessionName: ".into(), session));
    }
    records.push(("UserId: ".into(), whoami.user_id()));
    records.push(("Arn: ".into(), whoami.arn()));

    let width = records.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    records
        .iter()
        .map(|(label, value)| format!("{label:<width$}{value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `Type: root` for the root user, otherwise `AssumedRole: <name>` style.
fn type_record(whoami: &Whoami) -> (String, &str) {
    let principal_type = whoami.principal_type();
    if principal_type == ROOT {
        return ("Type: ".into(), ROOT);
    }
    let mut label: String = principal_type.split('-').map(capitalize).collect();
    label.push_str(": ");
    (label, whoami.name())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
