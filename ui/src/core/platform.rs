//! Platform glue for blocking notifications.

use tracing::warn;

/// Show a blocking alert. Used for failed saves, which are not rolled back.
pub fn alert(message: &str) {
    warn!(%message, "alerting user");
    show_alert(message);
}

#[cfg(target_arch = "wasm32")]
fn show_alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(err) = window.alert_with_message(message) {
                warn!(?err, "window.alert failed");
            }
        }
        None => warn!("window unavailable; alert dropped"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn show_alert(message: &str) {
    // The desktop webview still has `window.alert`; the message is passed as a JSON
    // string literal so quotes and newlines survive.
    let literal = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());
    let _ = dioxus::document::eval(&format!("alert({literal});"));
}
