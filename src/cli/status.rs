//! Status command - report on the bootstrapped environment.

use std::path::Path;

use serde::Serialize;

use crate::cli::output;
use crate::core::envfile::EnvFile;
use crate::core::stripe::STRIPE_BIN;
use crate::core::wizard::{ENV_FILE, MANAGED_KEYS};
use crate::error::Result;

/// Machine-readable status for `--json` output.
#[derive(Serialize)]
struct Status {
    env_file: String,
    env_file_exists: bool,
    present: Vec<String>,
    missing: Vec<String>,
    stripe_cli: Option<String>,
}

impl Status {
    fn collect() -> Result<Self> {
        let path = Path::new(ENV_FILE);
        let env = EnvFile::load(path)?;

        let (present, missing): (Vec<_>, Vec<_>) = MANAGED_KEYS
            .iter()
            .map(|k| k.to_string())
            .partition(|k| env.get(k).is_some());

        let stripe_cli = which::which(STRIPE_BIN)
            .ok()
            .map(|p| p.display().to_string());

        Ok(Self {
            env_file: ENV_FILE.to_string(),
            env_file_exists: path.exists(),
            present,
            missing,
            stripe_cli,
        })
    }
}

/// Show which managed keys are present in `.env` and whether the Stripe CLI
/// is on PATH.
pub fn execute(json: bool) -> Result<()> {
    let status = Status::collect()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    output::section("Bullpen Status");

    output::kv(
        ".env",
        if status.env_file_exists {
            "✓ found"
        } else {
            "✗ not found"
        },
    );

    for key in MANAGED_KEYS {
        let state = if status.present.iter().any(|k| k == key) {
            "✓ set"
        } else {
            "✗ missing"
        };
        output::kv(key, state);
    }

    output::kv(
        "stripe CLI",
        status
            .stripe_cli
            .as_deref()
            .map(|p| format!("✓ {}", p))
            .unwrap_or_else(|| "✗ not on PATH".to_string()),
    );

    output::blank();
    if !status.missing.is_empty() {
        output::hint(&format!(
            "run {} to collect the missing keys",
            output::cmd("bullpen setup")
        ));
    } else {
        output::dimmed("all managed keys are set");
    }

    Ok(())
}
