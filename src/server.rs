use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{Res, api, types::Callback};

/// Router serving `GET /callback`, wired to `state`.
pub fn callback_router(state: Arc<Mutex<Option<Callback>>>) -> Router {
    Router::new().route("/callback", get(api::callback).layer(Extension(state)))
}

/// Binds the callback listener up front so an address in use fails the
/// command instead of the background task.
pub async fn bind_callback_server(addr: &str) -> Res<TcpListener> {
    let addr = SocketAddr::from_str(addr)?;
    let listener = TcpListener::bind(&addr).await?;
    Ok(listener)
}

pub async fn serve_callback(listener: TcpListener, state: Arc<Mutex<Option<Callback>>>) -> Res<()> {
    axum::serve(listener, callback_router(state)).await?;
    Ok(())
}
