use std::sync::Arc;

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{types::Callback, warning};

/// Records the redirect parameters for the waiting login flow.
///
/// The code exchange itself happens outside the handler, once the flow has
/// checked the returned `state`.
pub async fn callback(
    Query(params): Query<Callback>,
    Extension(shared_state): Extension<Arc<Mutex<Option<Callback>>>>,
) -> Html<&'static str> {
    let page = if let Some(error) = &params.error {
        warning!("Authorization was denied: {}", error);
        Html("<h4>Authorization denied.</h4>")
    } else if params.code.is_some() {
        Html("<h2>Authorization received.</h2><p>Close browser window.</p>")
    } else {
        Html("<h4>Missing authorization code.</h4>")
    };

    let mut lock = shared_state.lock().await;
    *lock = Some(params);

    page
}
