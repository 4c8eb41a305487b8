//! Scoped one-shot timers.
//!
//! A [`ScopedTimer`] delivers one message to a channel after a delay. The
//! handle owns the timer: dropping it cancels the pending delivery, whichever
//! way the owning scope ends. Every scheduled timer carries a [`TimerId`] so
//! the receiver can tell a live fire from one that was already superseded.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::time::Instant;
use tokio_util::sync::{CancellationToken, DropGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

#[derive(Debug, Default)]
pub struct TimerSeq {
    next: u64,
}

impl TimerSeq {
    pub fn next_id(&mut self) -> TimerId {
        let id = TimerId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Handle to a pending one-shot timer. Cancels on drop.
#[derive(Debug)]
pub struct ScopedTimer {
    id: TimerId,
    token: CancellationToken,
    _guard: DropGuard,
}

impl ScopedTimer {
    /// Sends `msg` on `tx` once `delay` has elapsed, unless the returned
    /// handle is dropped first.
    ///
    /// The deadline is fixed when this is called, not when the spawned task
    /// first runs.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn once<T>(id: TimerId, delay: Duration, tx: UnboundedSender<T>, msg: T) -> Self
    where
        T: Send + 'static,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let deadline = Instant::now() + delay;

        tokio::spawn(async move {
            tokio::select! {
                biased;
                () = cancelled.cancelled() => {}
                () = tokio::time::sleep_until(deadline) => {
                    let _ = tx.send(msg);
                }
            }
        });

        Self {
            id,
            _guard: token.clone().drop_guard(),
            token,
        }
    }

    pub fn id(&self) -> TimerId {
        self.id
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Cancels explicitly. Equivalent to dropping the handle.
    pub fn cancel(self) {
        drop(self);
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;

    #[test]
    fn test_timer_seq_is_monotonic() {
        let mut seq = TimerSeq::default();
        assert_eq!(seq.next_id(), TimerId(0));
        assert_eq!(seq.next_id(), TimerId(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = ScopedTimer::once(TimerId(7), Duration::from_millis(100), tx, "tick");

        tokio::time::advance(Duration::from_millis(99)).await;
        assert!(rx.try_recv().is_err());

        assert_eq!(rx.recv().await, Some("tick"));
        assert_eq!(timer.id(), TimerId(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_delivery() {
        let (tx, mut rx) = mpsc::unbounded_channel::<&str>();
        let timer = ScopedTimer::once(TimerId(1), Duration::from_millis(100), tx, "tick");
        drop(timer);

        // The only sender lives in the cancelled task, so the channel closes
        // without delivering anything.
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_explicit_cancel() {
        let (tx, mut rx) = mpsc::unbounded_channel::<u8>();
        let timer = ScopedTimer::once(TimerId(2), Duration::from_secs(3), tx, 1);
        assert!(!timer.is_cancelled());
        timer.cancel();

        tokio::time::advance(Duration::from_secs(5)).await;
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_replacing_cancels_previous() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut slot = Some(ScopedTimer::once(
            TimerId(1),
            Duration::from_millis(50),
            tx.clone(),
            1,
        ));
        assert_eq!(slot.as_ref().map(ScopedTimer::id), Some(TimerId(1)));
        slot = Some(ScopedTimer::once(TimerId(2), Duration::from_millis(80), tx, 2));

        assert_eq!(rx.recv().await, Some(2));
        assert_eq!(slot.as_ref().map(ScopedTimer::id), Some(TimerId(2)));
        // The first timer was dropped on reassignment, the second has fired:
        // no senders remain.
        assert_eq!(rx.recv().await, None);
    }
}
