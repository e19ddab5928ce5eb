use std::fmt;

use reqwest::Method;
use url::form_urlencoded;

use super::request::{Request, Transport};
use crate::{
    error::Error,
    types::{AuthorizeOptions, TokenOutcome},
    utils,
};

pub const AUTHORIZE_PATH: &str = "/authorize/";
pub const TOKEN_PATH: &str = "/api/token";

/// Client identity plus the token state of one authorization.
///
/// The token fields start empty and are only ever written together, from a
/// single granted token response. Rejected responses leave them untouched.
pub struct Session<T: Transport = Request> {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    access_token: String,
    refresh_token: String,
    expires: u64,
    transport: T,
}

impl<T: Transport> Session<T> {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        transport: T,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            access_token: String::new(),
            refresh_token: String::new(),
            expires: 0,
            transport,
        }
    }

    /// Builds a session around a refresh token issued to an earlier
    /// process. There is no access token until [`Session::refresh_token`]
    /// succeeds.
    pub fn resume(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        refresh_token: impl Into<String>,
        transport: T,
    ) -> Self {
        let mut session = Self::new(client_id, client_secret, redirect_uri, transport);
        session.refresh_token = refresh_token.into();
        session
    }

    /// URL to send the user to so they can grant access.
    ///
    /// Parameters are emitted in a fixed order: `client_id`,
    /// `redirect_uri`, `response_type`, `scope`, `show_dialog`, `state`.
    pub fn authorize_url(&self, options: &AuthorizeOptions) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", &options.scope.join(" "))
            .append_pair(
                "show_dialog",
                if options.show_dialog { "true" } else { "false" },
            )
            .append_pair("state", &options.state)
            .finish();

        format!(
            "{base}{path}?{query}",
            base = self.transport.account_url(),
            path = AUTHORIZE_PATH,
            query = query
        )
    }

    /// Exchanges an authorization code for an access and refresh token.
    ///
    /// The client credentials travel in the form body. On a granted
    /// response the access token, expiry and refresh token are stored.
    pub async fn request_token(&mut self, code: &str) -> Result<TokenOutcome, Error> {
        let parameters = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
            ("redirect_uri", self.redirect_uri.as_str()),
        ];

        let response = self
            .transport
            .account(Method::POST, TOKEN_PATH, &parameters, &[])
            .await?;

        let outcome = TokenOutcome::from_response(response);
        if let TokenOutcome::Granted(grant) = &outcome {
            self.access_token = grant.access_token.clone();
            self.expires = grant.expires_in;
            self.refresh_token = grant.refresh_token.clone().unwrap_or_default();
        }

        Ok(outcome)
    }

    /// Trades the stored refresh token for a new access token, authenticating
    /// with HTTP Basic client credentials.
    ///
    /// Only the access token and expiry are replaced. The stored refresh
    /// token is kept even when the response carries a new one; the returned
    /// grant still exposes it.
    pub async fn refresh_token(&mut self) -> Result<TokenOutcome, Error> {
        let authorization = utils::basic_auth_header(&self.client_id, &self.client_secret);

        let parameters = [
            ("grant_type", "refresh_token"),
            ("refresh_token", self.refresh_token.as_str()),
        ];
        let headers = [("Authorization", authorization.as_str())];

        let response = self
            .transport
            .account(Method::POST, TOKEN_PATH, &parameters, &headers)
            .await?;

        let outcome = TokenOutcome::from_response(response);
        if let TokenOutcome::Granted(grant) = &outcome {
            self.access_token = grant.access_token.clone();
            self.expires = grant.expires_in;
        }

        Ok(outcome)
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn stored_refresh_token(&self) -> &str {
        &self.refresh_token
    }

    /// `expires_in` seconds from the last granted token response.
    pub fn expires(&self) -> u64 {
        self.expires
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn set_client_id(&mut self, client_id: impl Into<String>) {
        self.client_id = client_id.into();
    }

    pub fn set_client_secret(&mut self, client_secret: impl Into<String>) {
        self.client_secret = client_secret.into();
    }

    pub fn set_redirect_uri(&mut self, redirect_uri: impl Into<String>) {
        self.redirect_uri = redirect_uri.into();
    }
}

impl<T: Transport> fmt::Debug for Session<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("redirect_uri", &self.redirect_uri)
            .field("access_token", &redact(&self.access_token))
            .field("refresh_token", &redact(&self.refresh_token))
            .field("expires", &self.expires)
            .field("account_url", &self.transport.account_url())
            .finish()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() { "" } else { "<redacted>" }
}
