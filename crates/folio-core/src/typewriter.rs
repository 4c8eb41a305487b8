//! Typewriter role cycler.
//!
//! Types a role one character at a time, holds the finished role for a
//! pause, then starts over with the next role. The cursor blinks on its own
//! cadence, independent of typing progress.
//!
//! The state machine never reads a clock. The owner schedules a single
//! timer per instance: each call to [`Typewriter::tick`] applies one step and
//! returns the delay before the next one, so steps are strictly serialized.

use std::time::Duration;

use anyhow::{Result, bail};

/// Default cursor blink cadence.
pub const CURSOR_BLINK: Duration = Duration::from_millis(500);

/// Immutable input to a [`Typewriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingSequence {
    roles: Vec<String>,
    typing_speed: Duration,
    pause: Duration,
}

impl TypingSequence {
    /// Builds a sequence.
    ///
    /// # Errors
    /// Returns an error if `roles` is empty or either delay is zero.
    pub fn new(roles: Vec<String>, typing_speed: Duration, pause: Duration) -> Result<Self> {
        if roles.is_empty() {
            bail!("Typewriter needs at least one role");
        }
        if typing_speed.is_zero() {
            bail!("Typing speed must be greater than zero");
        }
        if pause.is_zero() {
            bail!("Pause must be greater than zero");
        }
        Ok(Self {
            roles,
            typing_speed,
            pause,
        })
    }

    pub fn typing_speed(&self) -> Duration {
        self.typing_speed
    }

    pub fn pause(&self) -> Duration {
        self.pause
    }

    /// Returns a copy of this sequence with a different typing speed.
    ///
    /// # Errors
    /// Returns an error if `typing_speed` is zero.
    pub fn with_typing_speed(&self, typing_speed: Duration) -> Result<Self> {
        Self::new(self.roles.clone(), typing_speed, self.pause)
    }
}

/// Typing progress for one mounted hero.
#[derive(Debug, Clone)]
pub struct Typewriter {
    sequence: TypingSequence,
    role_index: usize,
    /// Number of characters (not bytes) of the current role on screen.
    visible_len: usize,
    cursor_visible: bool,
}

impl Typewriter {
    pub fn new(sequence: TypingSequence) -> Self {
        Self {
            sequence,
            role_index: 0,
            visible_len: 0,
            cursor_visible: true,
        }
    }

    pub fn sequence(&self) -> &TypingSequence {
        &self.sequence
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn visible_len(&self) -> usize {
        self.visible_len
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn current_role(&self) -> &str {
        &self.sequence.roles[self.role_index]
    }

    fn current_len(&self) -> usize {
        self.current_role().chars().count()
    }

    /// True once the whole current role is on screen (the pause phase).
    pub fn is_complete(&self) -> bool {
        self.visible_len >= self.current_len()
    }

    /// Delay until the next [`tick`](Self::tick) is due.
    pub fn next_delay(&self) -> Duration {
        if self.is_complete() {
            self.sequence.pause
        } else {
            self.sequence.typing_speed
        }
    }

    /// Applies one step and returns the delay before the next one.
    ///
    /// While typing, one more character becomes visible. Once the pause that
    /// follows a complete role has elapsed, the text resets and the next role
    /// (wrapping) starts.
    pub fn tick(&mut self) -> Duration {
        if self.is_complete() {
            self.visible_len = 0;
            self.role_index = (self.role_index + 1) % self.sequence.roles.len();
        } else {
            self.visible_len += 1;
        }
        self.next_delay()
    }

    pub fn toggle_cursor(&mut self) {
        self.cursor_visible = !self.cursor_visible;
    }

    /// The typed prefix of the current role.
    pub fn display(&self) -> &str {
        let role = self.current_role();
        match role.char_indices().nth(self.visible_len) {
            Some((end, _)) => &role[..end],
            None => role,
        }
    }

    pub fn cursor_glyph(&self) -> char {
        if self.cursor_visible { '|' } else { ' ' }
    }

    /// Replaces the sequence and restarts from the first role.
    ///
    /// The caller must re-arm its timer; any tick scheduled for the old
    /// sequence is stale.
    pub fn reconfigure(&mut self, sequence: TypingSequence) {
        *self = Self::new(sequence);
    }
}
