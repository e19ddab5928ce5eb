use base64::{Engine, engine::general_purpose::STANDARD};
use rand::{Rng, distr::Alphanumeric};

use crate::types::{Callback, TokenGrant, TokenTableRow};

/// Random alphanumeric CSRF token for the `state` parameter.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// `Basic <base64(client_id:client_secret)>`
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let payload = STANDARD.encode(format!("{}:{}", client_id, client_secret));
    format!("Basic {}", payload)
}

/// Splits a scope list given as `"a b"`, `"a,b"` or any mix of the two.
pub fn parse_scopes(raw: &str) -> Vec<String> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn token_table_rows(grant: &TokenGrant) -> Vec<TokenTableRow> {
    let mut rows = vec![
        TokenTableRow {
            field: "access_token".to_string(),
            value: grant.access_token.clone(),
        },
        TokenTableRow {
            field: "expires_in".to_string(),
            value: grant.expires_in.to_string(),
        },
    ];

    if let Some(refresh_token) = &grant.refresh_token {
        rows.push(TokenTableRow {
            field: "refresh_token".to_string(),
            value: refresh_token.clone(),
        });
    }
    if let Some(scope) = &grant.scope {
        rows.push(TokenTableRow {
            field: "scope".to_string(),
            value: scope.clone(),
        });
    }

    rows
}

/// Extracts the authorization code, refusing denied redirects and
/// redirects whose `state` differs from the one sent.
pub fn check_callback(callback: &Callback, expected_state: &str) -> Result<String, String> {
    if let Some(error) = &callback.error {
        return Err(format!("Authorization denied: {}", error));
    }
    if callback.state.as_deref() != Some(expected_state) {
        return Err("State mismatch in authorization callback.".to_string());
    }
    callback
        .code
        .clone()
        .ok_or_else(|| "Authorization callback carried no code.".to_string())
}
