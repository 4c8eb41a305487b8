//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`: terminal input,
//! the per-frame size report, timer fires and async results.

use crossterm::event::Event;
use folio_core::email::SubmitError;
use folio_core::timer::TimerId;

use crate::common::TimerKind;

#[derive(Debug)]
pub enum UiEvent {
    /// Emitted first every loop iteration with the current terminal size.
    Frame { width: u16, height: u16 },

    /// Raw terminal input (keys, mouse, paste, resize).
    Terminal(Event),

    /// A scoped timer elapsed. Ignored unless `id` is still live.
    TimerFired { kind: TimerKind, id: TimerId },

    /// The contact form submission finished.
    ContactSubmitted { result: Result<(), SubmitError> },
}
