//! Test fixtures: fake Stripe CLI scripts and sample env content.

use std::path::Path;

/// Webhook signing secret the fake CLI prints.
pub const FAKE_WEBHOOK_SECRET: &str = "whsec_integration123";

/// Fake Stripe CLI: installed, authenticated, webhook provisioning works.
pub const FAKE_STRIPE_AUTHED: &str = r#"#!/bin/sh
case "$1" in
  --version) echo "stripe version 1.21.8" ;;
  config) exit 0 ;;
  listen) echo "> Ready! Your webhook signing secret is whsec_integration123 (^C to quit)" ;;
  *) exit 0 ;;
esac
"#;

/// Fake Stripe CLI: installed but never authenticated.
pub const FAKE_STRIPE_UNAUTHED: &str = r#"#!/bin/sh
case "$1" in
  --version) echo "stripe version 1.21.8" ;;
  config) echo "not logged in" >&2; exit 1 ;;
  listen) echo "> Ready! Your webhook signing secret is whsec_integration123 (^C to quit)" ;;
  *) exit 0 ;;
esac
"#;

/// Fake Stripe CLI: first `config --list` fails, later ones succeed.
/// Simulates the operator running `stripe login` between checks. State
/// lives in a marker file next to the script.
pub const FAKE_STRIPE_AUTH_AFTER_LOGIN: &str = r#"#!/bin/sh
marker="${0%/*}/.authed"
case "$1" in
  --version) echo "stripe version 1.21.8" ;;
  config)
    if [ -f "$marker" ]; then exit 0; fi
    : > "$marker"
    exit 1 ;;
  listen) echo "> Ready! Your webhook signing secret is whsec_integration123 (^C to quit)" ;;
  *) exit 0 ;;
esac
"#;

/// Fake Stripe CLI: listen output carries no signing secret.
pub const FAKE_STRIPE_NO_SECRET: &str = r#"#!/bin/sh
case "$1" in
  --version) echo "stripe version 1.21.8" ;;
  config) exit 0 ;;
  listen) echo "> Ready! (^C to quit)" ;;
  *) exit 0 ;;
esac
"#;

/// Install a fake `stripe` executable into `dir`.
#[cfg(unix)]
pub fn install_fake_stripe(dir: &Path, script: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("stripe");
    std::fs::write(&path, script).expect("failed to write fake stripe");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("failed to chmod fake stripe");
}

/// Sample pre-existing .env content for merge tests.
pub const SAMPLE_ENV: &str = "EXISTING=keep\nSTRIPE_SECRET_KEY=sk_old";

/// Standard wizard answers: secret key, then database URL.
pub const STANDARD_ANSWERS: &str = "sk_test_x\npostgres://u:pw@host/db\n";
