//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O, timers and task spawning only (no direct UI
//! mutations), which keeps the reducer pure.
//!
//! ## Timer Effects
//!
//! The reducer arms a timer by allocating an id in `Timers` and returning
//! `ScheduleTimer`; the runtime holds the matching `ScopedTimer`. Scheduling
//! the same kind again replaces (and so cancels) the previous handle.
//! `CancelTimer` drops it outright.

use std::time::Duration;

use folio_core::contact::ContactMessage;
use folio_core::timer::TimerId;

use crate::common::TimerKind;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Start a one-shot timer that reports back with `TimerFired`.
    ScheduleTimer {
        kind: TimerKind,
        id: TimerId,
        delay: Duration,
    },

    /// Cancel the pending timer of this kind, if any.
    CancelTimer { kind: TimerKind },

    /// Send the contact message through the email client.
    SubmitContact { message: ContactMessage },

    /// Open a URL in the system browser.
    OpenBrowser { url: String },
}
