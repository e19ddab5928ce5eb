//! Spotify Authorization Code credential management.
//!
//! This library builds the Spotify authorization URL, exchanges the
//! authorization code delivered to the redirect URI for an access and
//! refresh token, and refreshes expired access tokens. A small CLI drives
//! these steps from the terminal.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints of the local callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Transport, decoding and configuration errors
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Session and accounts-service transport
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use sporlauth::{config, cli};
//!
//! #[tokio::main]
//! async fn main() -> sporlauth::Res<()> {
//!     config::load_env().await?;
//!     cli::token("AQD...".to_string()).await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used for plumbing where the concrete error does not matter to the
/// caller, such as starting the callback server.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

// Console status lines go to stderr so stdout stays clean for the URL or
// token table a command prints.

/// Status line with a blue "o" marker.
///
/// ```
/// info!("Waiting for authorization in browser...");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Status line with a green "✓" marker.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red "!" line and exits the process with status 1.
///
/// Only for failures a command cannot recover from; code after the macro
/// never runs, so it can stand in any expression position.
///
/// ```
/// let session = match session_from_env() {
///     Ok(s) => s,
///     Err(e) => error!("Cannot set up session. Err: {}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Status line with a yellow "!" marker for recoverable problems.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
