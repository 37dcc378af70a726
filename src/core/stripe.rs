//! Stripe CLI integration.
//!
//! Detection, authentication checks, and webhook signing secret
//! provisioning, all through the [`CommandRunner`] seam. Exit status and
//! captured stdout are the only contract observed; nothing structured is
//! parsed out of the CLI beyond the `whsec_` token.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::core::exec::CommandRunner;
use crate::error::{Result, WebhookError};

/// Name of the external Stripe CLI binary.
pub const STRIPE_BIN: &str = "stripe";

/// Check whether the Stripe CLI is installed: `stripe --version` ran and
/// exited zero.
pub fn is_installed(runner: &dyn CommandRunner) -> bool {
    match runner.run(STRIPE_BIN, &["--version"]) {
        Ok(output) => output.status.success(),
        Err(e) => {
            debug!(error = %e, "stripe --version did not run");
            false
        }
    }
}

/// Check whether the Stripe CLI is authenticated: `stripe config --list`
/// exits zero once a login has stored credentials.
pub fn is_authenticated(runner: &dyn CommandRunner) -> bool {
    match runner.run(STRIPE_BIN, &["config", "--list"]) {
        Ok(output) => output.status.success(),
        Err(e) => {
            debug!(error = %e, "stripe config --list did not run");
            false
        }
    }
}

/// Mint a webhook signing secret via `stripe listen --print-secret`.
///
/// One attempt, no retry. The signing secret is extracted from captured
/// stdout.
pub fn mint_webhook_secret(runner: &dyn CommandRunner) -> Result<String> {
    let output = runner
        .run(STRIPE_BIN, &["listen", "--print-secret"])
        .map_err(|e| WebhookError::Listen(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(WebhookError::Listen(format!(
            "{}: {}",
            output.status,
            stderr.trim()
        ))
        .into());
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    extract_webhook_secret(&stdout)
}

/// Extract the first webhook signing secret from captured CLI output.
///
/// The pattern is `whsec_` followed by one or more ASCII alphanumerics.
/// Deliberately narrow: this parses one token out of free-form console
/// output and nothing more.
pub fn extract_webhook_secret(output: &str) -> Result<String> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let re = PATTERN.get_or_init(|| Regex::new(r"whsec_[a-zA-Z0-9]+").expect("valid literal pattern"));

    re.find(output)
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| WebhookError::SecretNotFound.into())
}
