//! Carousel autoplay controller.
//!
//! Tracks which window of slides is on screen, whether navigation in each
//! direction is available, and whether autoplay should currently be ticking.
//! Slides themselves stay with the caller; the controller only knows how
//! many there are.
//!
//! Autoplay has two switches: the persisted `autoplay_enabled` flag flipped
//! by the user, and a transient hover pause that never touches that flag.

use std::ops::Range;
use std::time::Duration;

/// Default autoplay interval.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(3000);

/// Behavior at the ends of the slide list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Clamp at the boundaries; the affordance at a boundary is inert.
    #[default]
    Finite,
    /// Wrap around with modulo arithmetic.
    Loop,
}

impl From<bool> for WrapMode {
    fn from(looping: bool) -> Self {
        if looping {
            WrapMode::Loop
        } else {
            WrapMode::Finite
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

/// Result of [`Carousel::toggle_autoplay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayChange {
    /// Autoplay is now on; schedule a full interval from now.
    Started,
    /// Autoplay is now off; cancel the pending interval.
    Stopped,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    active_index: usize,
    visible_count: usize,
    wrap: WrapMode,
    autoplay_enabled: bool,
    hover_paused: bool,
    interval: Duration,
}

impl Carousel {
    pub fn new(len: usize, wrap: WrapMode, autoplay_enabled: bool, interval: Duration) -> Self {
        Self {
            len,
            active_index: 0,
            visible_count: 1,
            wrap,
            autoplay_enabled,
            hover_paused: false,
            interval,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay_enabled
    }

    pub fn hover_paused(&self) -> bool {
        self.hover_paused
    }

    /// Whether the autoplay timer should be armed right now.
    pub fn autoplay_running(&self) -> bool {
        self.autoplay_enabled && !self.hover_paused && self.len > 1
    }

    /// Largest valid `active_index`.
    pub fn max_start_index(&self) -> usize {
        match self.wrap {
            WrapMode::Finite => self.len.saturating_sub(self.visible_count),
            WrapMode::Loop => self.len.saturating_sub(1),
        }
    }

    /// Whether navigating in `direction` would move. Inert affordances are
    /// rendered from this.
    pub fn can_advance(&self, direction: Direction) -> bool {
        if self.len <= 1 {
            return false;
        }
        match (self.wrap, direction) {
            (WrapMode::Loop, _) => true,
            (WrapMode::Finite, Direction::Backward) => self.active_index > 0,
            (WrapMode::Finite, Direction::Forward) => self.active_index < self.max_start_index(),
        }
    }

    /// Moves one slide in `direction`. Returns false (and changes nothing)
    /// when the move is unavailable.
    pub fn advance(&mut self, direction: Direction) -> bool {
        if !self.can_advance(direction) {
            return false;
        }
        let max = self.max_start_index();
        self.active_index = match direction {
            Direction::Forward if self.active_index >= max => 0,
            Direction::Forward => self.active_index + 1,
            Direction::Backward if self.active_index == 0 => max,
            Direction::Backward => self.active_index - 1,
        };
        true
    }

    /// Jumps so that `index` leads the window, clamped to the last valid
    /// start. Returns false when nothing moved.
    pub fn go_to(&mut self, index: usize) -> bool {
        if self.len <= 1 {
            return false;
        }
        let target = index.min(self.max_start_index());
        if target == self.active_index {
            return false;
        }
        self.active_index = target;
        true
    }

    /// One autoplay step. A no-op at the end of a finite carousel.
    pub fn autoplay_tick(&mut self) -> bool {
        self.autoplay_running() && self.advance(Direction::Forward)
    }

    /// Flips the persisted autoplay flag.
    pub fn toggle_autoplay(&mut self) -> AutoplayChange {
        self.autoplay_enabled = !self.autoplay_enabled;
        if self.autoplay_enabled {
            AutoplayChange::Started
        } else {
            AutoplayChange::Stopped
        }
    }

    /// Pointer entered the carousel. Returns true if a running autoplay
    /// timer must be cancelled.
    pub fn hover_enter(&mut self) -> bool {
        let was_running = self.autoplay_running();
        self.hover_paused = true;
        was_running
    }

    /// Pointer left the carousel. Returns true if autoplay must restart
    /// with a full interval.
    pub fn hover_exit(&mut self) -> bool {
        if !self.hover_paused {
            return false;
        }
        self.hover_paused = false;
        self.autoplay_running()
    }

    /// Sets how many slides share the screen. Clamps both the count and the
    /// active index; never panics.
    pub fn set_visible_count(&mut self, count: usize) {
        self.visible_count = count.clamp(1, self.len.max(1));
        self.active_index = self.active_index.min(self.max_start_index());
    }

    /// Indices of the slides on screen, in display order.
    pub fn visible_indices(&self) -> Vec<usize> {
        if self.len == 0 {
            return Vec::new();
        }
        match self.wrap {
            WrapMode::Finite => self.finite_window().collect(),
            WrapMode::Loop => (0..self.visible_count)
                .map(|offset| (self.active_index + offset) % self.len)
                .collect(),
        }
    }

    fn finite_window(&self) -> Range<usize> {
        let end = (self.active_index + self.visible_count).min(self.len);
        self.active_index..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finite(len: usize) -> Carousel {
        Carousel::new(len, WrapMode::Finite, true, AUTOPLAY_INTERVAL)
    }

    #[test]
    fn test_three_slides_clamp_at_both_ends() {
        let mut carousel = finite(3);

        assert!(!carousel.can_advance(Direction::Backward));
        assert!(!carousel.advance(Direction::Backward));
        assert_eq!(carousel.active_index(), 0);

        assert!(carousel.advance(Direction::Forward));
        assert!(carousel.advance(Direction::Forward));
        assert_eq!(carousel.active_index(), 2);

        assert!(!carousel.can_advance(Direction::Forward));
        assert!(!carousel.advance(Direction::Forward));
        assert_eq!(carousel.active_index(), 2);
    }

    #[test]
    fn test_reaches_last_after_n_minus_one_steps() {
        for len in 2..8 {
            let mut carousel = finite(len);
            for _ in 0..len - 1 {
                assert!(carousel.advance(Direction::Forward));
            }
            assert_eq!(carousel.active_index(), len - 1);
            assert!(!carousel.advance(Direction::Forward));
            assert_eq!(carousel.active_index(), len - 1);
        }
    }

    #[test]
    fn test_zero_or_one_slide_disables_navigation() {
        for len in [0, 1] {
            let mut carousel = Carousel::new(len, WrapMode::Loop, true, AUTOPLAY_INTERVAL);
            assert!(!carousel.can_advance(Direction::Forward));
            assert!(!carousel.can_advance(Direction::Backward));
            assert!(!carousel.advance(Direction::Forward));
            assert!(!carousel.autoplay_running());
            assert!(!carousel.autoplay_tick());
            assert_eq!(carousel.active_index(), 0);
        }
    }

    #[test]
    fn test_go_to_clamps_to_last_window() {
        let mut carousel = finite(5);
        carousel.set_visible_count(2);

        assert!(carousel.go_to(2));
        assert_eq!(carousel.visible_indices(), vec![2, 3]);
        assert!(!carousel.go_to(2));

        // The last slide can only be shown as the tail of the window.
        assert!(carousel.go_to(4));
        assert_eq!(carousel.active_index(), 3);
        assert!(!carousel.go_to(9));
        assert!(!carousel.can_advance(Direction::Forward));

        assert!(carousel.go_to(0));
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn test_go_to_in_loop_mode_and_tiny_carousels() {
        let mut carousel = Carousel::new(4, WrapMode::Loop, true, AUTOPLAY_INTERVAL);
        carousel.set_visible_count(3);
        assert!(carousel.go_to(3));
        assert_eq!(carousel.visible_indices(), vec![3, 0, 1]);

        for len in [0, 1] {
            let mut carousel = finite(len);
            assert!(!carousel.go_to(0));
            assert!(!carousel.go_to(1));
            assert_eq!(carousel.active_index(), 0);
        }
    }

    #[test]
    fn test_loop_wraps() {
        let mut carousel = Carousel::new(3, WrapMode::Loop, true, AUTOPLAY_INTERVAL);
        assert!(carousel.advance(Direction::Backward));
        assert_eq!(carousel.active_index(), 2);
        assert!(carousel.advance(Direction::Forward));
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn test_loop_window_wraps_around() {
        let mut carousel = Carousel::new(4, WrapMode::Loop, true, AUTOPLAY_INTERVAL);
        carousel.set_visible_count(3);
        carousel.advance(Direction::Backward);
        assert_eq!(carousel.visible_indices(), vec![3, 0, 1]);
    }

    #[test]
    fn test_toggle_autoplay() {
        let mut carousel = finite(3);
        assert!(carousel.autoplay_running());
        assert_eq!(carousel.toggle_autoplay(), AutoplayChange::Stopped);
        assert!(!carousel.autoplay_running());
        assert!(!carousel.autoplay_tick());
        assert_eq!(carousel.active_index(), 0);
        assert_eq!(carousel.toggle_autoplay(), AutoplayChange::Started);
        assert!(carousel.autoplay_tick());
        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn test_hover_pauses_without_touching_flag() {
        let mut carousel = finite(3);
        assert!(carousel.hover_enter());
        assert!(carousel.autoplay_enabled());
        assert!(!carousel.autoplay_running());
        assert!(!carousel.autoplay_tick());

        assert!(carousel.hover_exit());
        assert!(carousel.autoplay_running());
        // A second exit without an enter does nothing.
        assert!(!carousel.hover_exit());
    }

    #[test]
    fn test_hover_exit_with_autoplay_off_stays_idle() {
        let mut carousel = finite(3);
        carousel.toggle_autoplay();
        assert!(!carousel.hover_enter());
        assert!(!carousel.hover_exit());
    }

    #[test]
    fn test_autoplay_stops_moving_at_finite_end() {
        let mut carousel = finite(2);
        assert!(carousel.autoplay_tick());
        assert!(!carousel.autoplay_tick());
        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn test_visible_count_clamps_active_index() {
        let mut carousel = finite(5);
        for _ in 0..4 {
            carousel.advance(Direction::Forward);
        }
        assert_eq!(carousel.active_index(), 4);

        carousel.set_visible_count(3);
        assert_eq!(carousel.active_index(), 2);
        assert_eq!(carousel.visible_indices(), vec![2, 3, 4]);
        assert!(!carousel.can_advance(Direction::Forward));

        carousel.set_visible_count(1);
        assert_eq!(carousel.active_index(), 2);
        assert!(carousel.can_advance(Direction::Forward));
    }

    #[test]
    fn test_visible_count_larger_than_len() {
        let mut carousel = finite(2);
        carousel.advance(Direction::Forward);
        carousel.set_visible_count(10);
        assert_eq!(carousel.visible_count(), 2);
        assert_eq!(carousel.active_index(), 0);
        assert!(!carousel.can_advance(Direction::Forward));

        let mut empty = finite(0);
        empty.set_visible_count(3);
        assert_eq!(empty.visible_count(), 1);
        assert!(empty.visible_indices().is_empty());
    }
}
