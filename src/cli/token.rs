use super::{report, session_from_env, spinner};
use crate::{
    config, error,
    spotify::{request::Request, session::Session},
};

pub async fn token(code: String) {
    let mut session = match session_from_env() {
        Ok(s) => s,
        Err(e) => error!("Cannot set up session. Err: {}", e),
    };

    let pb = spinner("Exchanging authorization code...");
    let result = session.request_token(&code).await;
    pb.finish_and_clear();

    match result {
        Ok(outcome) => report(outcome),
        Err(e) => error!("Token exchange failed: {}", e),
    }
}

pub async fn refresh(refresh_token: String) {
    let session = config::spotify_client_id().and_then(|id| {
        Ok(Session::resume(
            id,
            config::spotify_client_secret()?,
            config::spotify_redirect_uri()?,
            refresh_token,
            Request::new(config::spotify_account_url()),
        ))
    });
    let mut session = match session {
        Ok(s) => s,
        Err(e) => error!("Cannot set up session. Err: {}", e),
    };

    let pb = spinner("Refreshing access token...");
    let result = session.refresh_token().await;
    pb.finish_and_clear();

    match result {
        Ok(outcome) => report(outcome),
        Err(e) => error!("Token refresh failed: {}", e),
    }
}
