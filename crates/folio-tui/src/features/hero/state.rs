use std::time::Duration;

use folio_core::typewriter::{Typewriter, TypingSequence};

/// Hero section state.
///
/// `sequence` persists across visits; the typewriter itself exists only
/// while the section is mounted and starts over on every mount.
#[derive(Debug)]
pub struct HeroState {
    pub(super) sequence: TypingSequence,
    pub(super) typewriter: Option<Typewriter>,
    pub(super) cursor_blink: Duration,
}

impl HeroState {
    pub fn new(sequence: TypingSequence, cursor_blink: Duration) -> Self {
        Self {
            sequence,
            typewriter: None,
            cursor_blink,
        }
    }

    pub fn sequence(&self) -> &TypingSequence {
        &self.sequence
    }

    pub fn typewriter(&self) -> Option<&Typewriter> {
        self.typewriter.as_ref()
    }
}
