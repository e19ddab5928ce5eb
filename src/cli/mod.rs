//! # CLI Module
//!
//! User-facing commands of sporlauth. Each command builds a
//! [`Session`](crate::spotify::session::Session) from the environment
//! (see [`crate::config`]), runs one step of the Authorization Code flow
//! and reports the outcome on the console.
//!
//! - [`authorize`] - print (and optionally open) the authorization URL
//! - [`login`] - full flow through the local callback server
//! - [`token`] - exchange an authorization code obtained elsewhere
//! - [`refresh`] - trade a refresh token for a new access token
//!
//! ```bash
//! sporlauth authorize --scope user-follow-read --open
//! sporlauth login --scope user-follow-read --scope playlist-modify-private
//! sporlauth token --code AQD...
//! sporlauth refresh --refresh-token AQB...
//! ```
//!
//! Tokens are printed, never written to disk.

mod authorize;
mod login;
mod token;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, error,
    error::Error,
    spotify::{request::Request, session::Session},
    success,
    types::{AuthorizeOptions, TokenOutcome},
    utils,
};

pub use authorize::authorize;
pub use login::login;
pub use token::refresh;
pub use token::token;

fn session_from_env() -> Result<Session, Error> {
    Ok(Session::new(
        config::spotify_client_id()?,
        config::spotify_client_secret()?,
        config::spotify_redirect_uri()?,
        Request::new(config::spotify_account_url()),
    ))
}

/// Scopes given on the command line win over `SPOTIFY_API_AUTH_SCOPE`.
fn authorize_options(scope: Vec<String>, show_dialog: bool, state: String) -> AuthorizeOptions {
    let scope = if scope.is_empty() {
        config::spotify_scope()
    } else {
        scope.iter().flat_map(|s| utils::parse_scopes(s)).collect()
    };

    AuthorizeOptions::default()
        .scope(scope)
        .show_dialog(show_dialog)
        .state(state)
}

fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

fn report(outcome: TokenOutcome) {
    match outcome {
        TokenOutcome::Granted(grant) => {
            success!("Access token granted.");
            println!("{}", Table::new(utils::token_table_rows(&grant)));
        }
        TokenOutcome::Rejected(rejection) => {
            let reason = rejection
                .error_description
                .or(rejection.error)
                .unwrap_or_else(|| rejection.body.to_string());
            error!(
                "Token request rejected (HTTP {}): {}",
                rejection.status, reason
            );
        }
    }
}
