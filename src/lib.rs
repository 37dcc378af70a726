//! Bullpen - bootstrap wizard for local payments development.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── setup         # The interactive wizard command
//! │   ├── status        # Managed-key overview
//! │   ├── completions   # Shell completions
//! │   ├── banner        # ASCII art
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── wizard        # Setup pipeline state machine
//!     ├── stripe        # Stripe CLI detection, auth, webhook secret
//!     ├── exec          # CommandRunner seam over std::process
//!     ├── prompt        # Prompter seam over dialoguer/stdin
//!     ├── token         # Application secret generation
//!     ├── database      # Connection string normalization
//!     └── envfile       # Dotenv codec and merge
//! ```
//!
//! # Features
//!
//! - Detects the Stripe CLI and walks the operator through authentication
//! - Mints a webhook signing secret via `stripe listen`
//! - Generates a local application signing secret
//! - Normalizes database connection strings (password percent-encoding)
//! - Merges collected secrets into `.env` without clobbering existing keys

pub mod cli;
pub mod core;
pub mod error;
