use serde::{Deserialize, Serialize};
use serde_json::Value;
use tabled::Tabled;

/// Options recognised when building the authorization URL.
///
/// `AuthorizeOptions::default()` requests no scopes, does not force the
/// consent dialog and sends an empty `state`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizeOptions {
    /// Permission identifiers, sent space-joined in the given order.
    pub scope: Vec<String>,
    /// Force the user to approve the application again.
    pub show_dialog: bool,
    /// Opaque CSRF token echoed back on the redirect.
    pub state: String,
}

impl AuthorizeOptions {
    pub fn scope<I, S>(mut self, scope: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scope = scope.into_iter().map(Into::into).collect();
        self
    }

    pub fn show_dialog(mut self, show_dialog: bool) -> Self {
        self.show_dialog = show_dialog;
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }
}

/// What the account host answered: the HTTP status and the parsed JSON body
/// (`Value::Null` when the body was empty).
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGrant {
    pub access_token: String,
    pub expires_in: u64,
    pub refresh_token: Option<String>,
    pub scope: Option<String>,
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenRejection {
    pub status: u16,
    pub error: Option<String>,
    pub error_description: Option<String>,
    pub body: Value,
}

/// Result of one call to the token endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenOutcome {
    Granted(TokenGrant),
    Rejected(TokenRejection),
}

impl TokenOutcome {
    /// Classifies a token endpoint response. A response counts as granted
    /// exactly when its body carries a string `access_token`.
    pub fn from_response(response: Response) -> Self {
        let body = response.body;

        match body["access_token"].as_str() {
            Some(access_token) => TokenOutcome::Granted(TokenGrant {
                access_token: access_token.to_string(),
                expires_in: body["expires_in"].as_u64().unwrap_or_default(),
                refresh_token: body["refresh_token"].as_str().map(str::to_string),
                scope: body["scope"].as_str().map(str::to_string),
                token_type: body["token_type"].as_str().map(str::to_string),
            }),
            None => TokenOutcome::Rejected(TokenRejection {
                status: response.status,
                error: body["error"].as_str().map(str::to_string),
                error_description: body["error_description"].as_str().map(str::to_string),
                body,
            }),
        }
    }

    pub fn is_granted(&self) -> bool {
        matches!(self, TokenOutcome::Granted(_))
    }
}

/// Query parameters the authorization server appends to the redirect URI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Callback {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

#[derive(Tabled)]
pub struct TokenTableRow {
    pub field: String,
    pub value: String,
}
