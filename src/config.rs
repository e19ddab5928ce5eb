//! Configuration management for sporlauth.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file under `<data_local_dir>/sporlauth/`
//! 3. Defaults for the optional settings

use std::{env, path::PathBuf};

use crate::{error::Error, utils};

pub const DEFAULT_ACCOUNT_URL: &str = "https://accounts.spotify.com";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";

/// Loads environment variables from `sporlauth/.env` in the local data
/// directory.
///
/// A missing `.env` file is not an error: every setting can also come
/// straight from the environment.
/// Variables already present in the environment are never overridden.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/sporlauth/.env`
/// - macOS: `~/Library/Application Support/sporlauth/.env`
/// - Windows: `%LOCALAPPDATA%/sporlauth/.env`
pub async fn load_env() -> Result<(), Error> {
    let path = env_path();
    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| {
            Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;
    }
    Ok(())
}

pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("sporlauth/.env");
    path
}

/// Client ID from the Spotify developer dashboard
/// (`SPOTIFY_API_AUTH_CLIENT_ID`).
pub fn spotify_client_id() -> Result<String, Error> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Client secret from the Spotify developer dashboard
/// (`SPOTIFY_API_AUTH_CLIENT_SECRET`). Keep it out of logs.
pub fn spotify_client_secret() -> Result<String, Error> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

/// Callback URL registered with the application
/// (`SPOTIFY_API_REDIRECT_URI`), e.g. `http://127.0.0.1:8888/callback`.
pub fn spotify_redirect_uri() -> Result<String, Error> {
    required("SPOTIFY_API_REDIRECT_URI")
}

/// Default scopes to request (`SPOTIFY_API_AUTH_SCOPE`), space or comma
/// separated. Empty when unset.
pub fn spotify_scope() -> Vec<String> {
    env::var("SPOTIFY_API_AUTH_SCOPE")
        .map(|raw| utils::parse_scopes(&raw))
        .unwrap_or_default()
}

/// Base URL of the accounts service (`SPOTIFY_ACCOUNT_URL`). Hosts both the
/// authorize page and the token endpoint.
pub fn spotify_account_url() -> String {
    env::var("SPOTIFY_ACCOUNT_URL").unwrap_or_else(|_| DEFAULT_ACCOUNT_URL.to_string())
}

/// Bind address of the local callback server (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

fn required(name: &'static str) -> Result<String, Error> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::MissingVar(name)),
    }
}
