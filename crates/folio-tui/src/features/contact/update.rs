//! Contact reducer.
//!
//! Editing is synchronous. Sending is an effect; the outcome comes back as
//! `UiEvent::ContactSubmitted` and is reported with a toast. Only success
//! clears the form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio_core::contact::SubmitAttempt;
use folio_core::email::SubmitError;
use tracing::{error, info};

use crate::effects::UiEffect;
use crate::features::toast::{self, ToastKind};
use crate::state::AppState;

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";
const BUSY_MESSAGE: &str = "Your message is already on its way.";

pub fn submit(app: &mut AppState) -> Vec<UiEffect> {
    match app.contact.begin_submit() {
        SubmitAttempt::Send(message) => {
            info!(from = %message.email, "Submitting contact message");
            vec![UiEffect::SubmitContact { message }]
        }
        SubmitAttempt::Invalid(err) => {
            vec![toast::show(app, ToastKind::Error, err.to_string())]
        }
        SubmitAttempt::Busy => vec![toast::show(app, ToastKind::Info, BUSY_MESSAGE)],
    }
}

pub fn handle_submit_result(app: &mut AppState, result: Result<(), SubmitError>) -> Vec<UiEffect> {
    app.contact.finish_submit(&result);
    match result {
        Ok(()) => {
            info!("Contact message sent");
            vec![toast::show(app, ToastKind::Success, SENT_MESSAGE)]
        }
        Err(err) => {
            error!(%err, "Contact message failed");
            vec![toast::show(app, ToastKind::Error, FAILED_MESSAGE)]
        }
    }
}

pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('s') {
        return submit(app);
    }
    let form = &mut app.contact;
    match key.code {
        KeyCode::Up => form.focus_prev(),
        KeyCode::Down => form.focus_next(),
        KeyCode::Enter if form.focused.is_multiline() => form.insert_char('\n'),
        KeyCode::Enter => form.focus_next(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char(c) if !ctrl => form.insert_char(c),
        _ => {}
    }
    vec![]
}

pub fn handle_paste(app: &mut AppState, text: &str) {
    app.contact.insert_str(text);
}
