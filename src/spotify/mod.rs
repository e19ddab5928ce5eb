//! # Spotify Accounts Integration
//!
//! Authorization Code credential handling against the Spotify accounts
//! service.
//!
//! ```text
//! CLI / application
//!          ↓
//! Session (identity + token state)
//!          ↓
//! Transport (reqwest, JSON)
//!          ↓
//! accounts.spotify.com  (/authorize/, /api/token)
//! ```
//!
//! ## Modules
//!
//! - [`session`] - [`Session`](session::Session) builds the authorize URL,
//!   exchanges authorization codes and refreshes access tokens.
//! - [`request`] - the [`Transport`](request::Transport) seam and the
//!   `reqwest`-backed [`Request`](request::Request).
//!
//! ## Errors
//!
//! Token endpoint rejections (`invalid_grant`, revoked consent, ...) come
//! back as [`TokenOutcome::Rejected`](crate::types::TokenOutcome::Rejected).
//! Only transport and decoding faults surface as
//! [`Error`](crate::error::Error).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sporlauth::spotify::{request::Request, session::Session};
//! use sporlauth::types::AuthorizeOptions;
//!
//! let mut session = Session::new("id", "secret", "http://127.0.0.1:8888/callback", Request::default());
//! let url = session.authorize_url(&AuthorizeOptions::default().scope(["user-follow-read"]));
//! // ...user approves, redirect delivers `code`...
//! if session.request_token(&code).await?.is_granted() {
//!     println!("{}", session.access_token());
//! }
//! ```

pub mod request;
pub mod session;
