use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;

use crate::{config, error::Error, types::Response};

/// The HTTP collaborator a [`Session`](super::session::Session) talks
/// through.
///
/// Implementations issue exactly one request per call and hand back the
/// parsed body. Retries, timeouts and pooling belong here, not in the
/// session.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Base URL of the accounts service, without a trailing slash.
    fn account_url(&self) -> &str;

    /// Sends `method` to `account_url() + path`.
    ///
    /// For `POST` the `parameters` travel as an
    /// `application/x-www-form-urlencoded` body, otherwise as the query
    /// string.
    async fn account(
        &self,
        method: Method,
        path: &str,
        parameters: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> Result<Response, Error>;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct Request {
    client: Client,
    account_url: String,
}

impl Request {
    pub fn new(account_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            account_url: account_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn with_client(client: Client, account_url: impl Into<String>) -> Self {
        Self {
            client,
            account_url: account_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl Default for Request {
    fn default() -> Self {
        Self::new(config::DEFAULT_ACCOUNT_URL)
    }
}

#[async_trait]
impl Transport for Request {
    fn account_url(&self) -> &str {
        &self.account_url
    }

    async fn account(
        &self,
        method: Method,
        path: &str,
        parameters: &[(&str, &str)],
        headers: &[(&str, &str)],
    ) -> Result<Response, Error> {
        let url = format!("{}{}", self.account_url, path);

        let mut request = self.client.request(method.clone(), &url);
        request = if method == Method::POST {
            request.form(parameters)
        } else {
            request.query(parameters)
        };
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        // A malformed 2xx body is the server's answer, not a transport fault.
        let body = if text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str(&text) {
                Ok(body) => body,
                Err(_) if (200..300).contains(&status) => Value::String(text),
                Err(source) => return Err(Error::Decode { status, source }),
            }
        };

        Ok(Response { status, body })
    }
}
