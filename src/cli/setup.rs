//! Setup command - run the bootstrap wizard.

use tracing::{debug, info};

use crate::cli::output;
use crate::core::envfile;
use crate::core::exec::SystemRunner;
use crate::core::prompt::TerminalPrompter;
use crate::core::wizard::{AbortReason, SetupOutcome, Wizard};
use crate::error::Result;

/// Run the interactive setup wizard in the current directory.
///
/// Abort paths print guidance and exit with status 1; hard errors propagate
/// to `main`.
pub fn execute(no_banner: bool) -> Result<()> {
    if !no_banner {
        crate::cli::banner::print_banner();
    }

    let runner = SystemRunner;
    let mut prompter = TerminalPrompter::new();
    let outcome = Wizard::new(&runner, &mut prompter).run()?;

    match outcome {
        SetupOutcome::Complete { env_path, .. } => {
            // .gitignore upkeep never fails the run
            match envfile::ensure_gitignored(std::path::Path::new(".")) {
                Ok(true) => info!("added .env to .gitignore"),
                Ok(false) => {}
                Err(e) => debug!(error = %e, "could not update .gitignore"),
            }

            output::blank();
            output::success(&format!(
                "setup complete: secrets written to {}",
                output::path(&env_path.display().to_string())
            ));
            output::hint("next: start your app and visit http://localhost:3000");
            Ok(())
        }
        SetupOutcome::Aborted(reason) => {
            output::blank();
            explain_abort(reason);
            std::process::exit(1);
        }
    }
}

/// Operator guidance for each abort path.
fn explain_abort(reason: AbortReason) {
    match reason {
        AbortReason::ToolMissing => {
            output::error("Stripe CLI is not installed. Please install it and try again.");
            output::list_item("1. Visit: https://docs.stripe.com/stripe-cli");
            output::list_item("2. Download and install the Stripe CLI for your operating system");
            output::list_item(&format!("3. After installation, run: {}", output::cmd("stripe login")));
            output::hint("after installation and authentication, run this setup again");
        }
        AbortReason::AuthDeclined => {
            output::error("setup aborted");
            output::hint(&format!(
                "authenticate with {} and run this setup again",
                output::cmd("stripe login")
            ));
        }
        AbortReason::AuthFailed => {
            output::error("failed to verify Stripe CLI authentication. Please try again.");
            output::hint(&format!("run {} and re-run setup", output::cmd("stripe login")));
        }
    }
}
