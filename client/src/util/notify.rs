//! Blocking user notifications.
//!
//! Requires a browser environment; the SSR build drops the message.

/// Show a modal `window.alert` with `message`.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        log::info!("alert: {message}");
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
