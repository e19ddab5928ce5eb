use super::{authorize_options, session_from_env};
use crate::{error, info, warning};

pub async fn authorize(scope: Vec<String>, show_dialog: bool, state: Option<String>, open: bool) {
    let session = match session_from_env() {
        Ok(s) => s,
        Err(e) => error!("Cannot set up session. Err: {}", e),
    };

    let options = authorize_options(scope, show_dialog, state.unwrap_or_default());
    let url = session.authorize_url(&options);

    if open {
        if webbrowser::open(&url).is_err() {
            warning!("Failed to open browser. Please navigate to the URL manually.");
        } else {
            info!("Opened authorization page in browser.");
        }
    }

    println!("{}", url);
}
