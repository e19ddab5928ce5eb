//! # API Module
//!
//! HTTP endpoints of the local callback server used during `sporlauth
//! login`.
//!
//! - [`callback`] - receives the authorization server's redirect and
//!   stores its `code`, `state` and `error` parameters in shared state.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use sporlauth::api::callback;
//!
//! let app = Router::new().route("/callback", get(callback));
//! ```

mod callback;

pub use callback::callback;
