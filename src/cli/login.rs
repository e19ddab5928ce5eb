use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use tokio::sync::Mutex;

use super::{authorize_options, report, session_from_env, spinner};
use crate::{
    config, error, info,
    server::{bind_callback_server, serve_callback},
    types::Callback,
    utils, warning,
};

/// Runs the whole Authorization Code flow from the terminal.
///
/// A random `state` is generated, the local callback server is started and
/// the authorization page is opened. Once the redirect arrives its `state`
/// must match before the code is exchanged.
pub async fn login(scope: Vec<String>, show_dialog: bool) {
    let mut session = match session_from_env() {
        Ok(s) => s,
        Err(e) => error!("Cannot set up session. Err: {}", e),
    };

    let state = utils::generate_state();
    let options = authorize_options(scope, show_dialog, state.clone());
    let auth_url = session.authorize_url(&options);

    let shared_state: Arc<Mutex<Option<Callback>>> = Arc::new(Mutex::new(None));
    let server_state = Arc::clone(&shared_state);
    let listener = match bind_callback_server(&config::server_addr()).await {
        Ok(l) => l,
        Err(e) => error!("Cannot start callback server. Err: {}", e),
    };
    tokio::spawn(async move {
        if let Err(e) = serve_callback(listener, server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    } else {
        info!("Waiting for authorization in browser...");
    }

    let callback = match wait_for_callback(shared_state, Duration::from_secs(60)).await {
        Some(c) => c,
        None => error!("Authorization timed out."),
    };

    let code = match utils::check_callback(&callback, &state) {
        Ok(code) => code,
        Err(reason) => error!("{}", reason),
    };

    let pb = spinner("Exchanging authorization code...");
    let result = session.request_token(&code).await;
    pb.finish_and_clear();

    match result {
        Ok(outcome) => report(outcome),
        Err(e) => error!("Token exchange failed: {}", e),
    }
}

/// Polls `shared_state` once a second until the callback handler has
/// stored the redirect parameters or `max_wait` has passed.
async fn wait_for_callback(
    shared_state: Arc<Mutex<Option<Callback>>>,
    max_wait: Duration,
) -> Option<Callback> {
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(callback) = lock.as_ref() {
            return Some(callback.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}
