//! Timer bookkeeping for the reducer.
//!
//! The reducer decides when a timer is armed or disarmed; the runtime owns
//! the actual [`ScopedTimer`](folio_core::timer::ScopedTimer) handles. Each
//! kind has at most one live id. A fire whose id is not the live one belongs
//! to a timer that was cancelled or replaced and must be ignored.

use std::time::Duration;

use folio_core::timer::{TimerId, TimerSeq};

use crate::effects::UiEffect;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    TypewriterStep,
    CursorBlink,
    CarouselAutoplay,
    ToastExpiry,
}

/// Live timer ids (stored in `AppState`, mutated only by the reducer).
#[derive(Debug, Default)]
pub struct Timers {
    seq: TimerSeq,
    typewriter_step: Option<TimerId>,
    cursor_blink: Option<TimerId>,
    carousel_autoplay: Option<TimerId>,
    toast_expiry: Option<TimerId>,
}

impl Timers {
    fn slot_mut(&mut self, kind: TimerKind) -> &mut Option<TimerId> {
        match kind {
            TimerKind::TypewriterStep => &mut self.typewriter_step,
            TimerKind::CursorBlink => &mut self.cursor_blink,
            TimerKind::CarouselAutoplay => &mut self.carousel_autoplay,
            TimerKind::ToastExpiry => &mut self.toast_expiry,
        }
    }

    pub fn active(&self, kind: TimerKind) -> Option<TimerId> {
        match kind {
            TimerKind::TypewriterStep => self.typewriter_step,
            TimerKind::CursorBlink => self.cursor_blink,
            TimerKind::CarouselAutoplay => self.carousel_autoplay,
            TimerKind::ToastExpiry => self.toast_expiry,
        }
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.active(kind).is_some()
    }

    pub fn is_any_armed(&self) -> bool {
        self.typewriter_step.is_some()
            || self.cursor_blink.is_some()
            || self.carousel_autoplay.is_some()
            || self.toast_expiry.is_some()
    }

    /// Allocates a fresh id for `kind`, superseding any previous one.
    pub fn arm(&mut self, kind: TimerKind) -> TimerId {
        let id = self.seq.next_id();
        *self.slot_mut(kind) = Some(id);
        id
    }

    /// Forgets the live id for `kind`. Returns whether one was armed.
    pub fn disarm(&mut self, kind: TimerKind) -> bool {
        self.slot_mut(kind).take().is_some()
    }

    /// Consumes a fire. Returns true only for the live id; the slot is
    /// cleared since one-shot timers fire once.
    pub fn fire_if_active(&mut self, kind: TimerKind, id: TimerId) -> bool {
        let slot = self.slot_mut(kind);
        let ok = *slot == Some(id);
        if ok {
            *slot = None;
        }
        ok
    }

    /// Arms `kind` and returns the effect that starts the matching timer.
    pub fn schedule(&mut self, kind: TimerKind, delay: Duration) -> UiEffect {
        let id = self.arm(kind);
        UiEffect::ScheduleTimer { kind, id, delay }
    }

    /// Disarms `kind` and returns the effect that drops its handle.
    pub fn cancel(&mut self, kind: TimerKind) -> UiEffect {
        self.disarm(kind);
        UiEffect::CancelTimer { kind }
    }
}
