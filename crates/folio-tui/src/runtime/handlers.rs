//! Effect handlers for the TUI runtime.
//!
//! Async handlers return the `UiEvent` that reports their outcome; the
//! runtime spawns them and forwards the result to the inbox.

use folio_core::contact::ContactMessage;
use folio_core::email::EmailClient;
use tracing::warn;

use crate::events::UiEvent;

pub async fn submit_contact(client: EmailClient, message: ContactMessage) -> UiEvent {
    let result = client.send_contact(&message).await;
    UiEvent::ContactSubmitted { result }
}

/// Opens `url` in the system browser. Failures are logged only.
pub fn open_url(url: &str) {
    if let Err(err) = open::that(url) {
        warn!(%url, %err, "Failed to open browser");
    }
}
