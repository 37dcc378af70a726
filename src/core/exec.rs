//! External command execution seam.

use std::io;
use std::process::{Command, Output};

/// Runs external commands on behalf of the wizard.
///
/// The wizard only observes exit status and captured stdout/stderr, so the
/// seam stays narrow and test doubles can script both.
pub trait CommandRunner {
    /// Run `program` with `args`, capturing output. Blocks until exit.
    fn run(&self, program: &str, args: &[&str]) -> io::Result<Output>;
}

/// Spawns real processes through `std::process::Command`.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<Output> {
        Command::new(program).args(args).output()
    }
}
