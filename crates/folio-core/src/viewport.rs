//! Width breakpoints for responsive layouts.
//!
//! Terminal width is passed in explicitly; nothing here reads the terminal.

use serde::{Deserialize, Serialize};

/// One breakpoint: at `min_width` columns and above, show `visible` slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub min_width: u16,
    pub visible: usize,
}

impl Breakpoint {
    pub const fn new(min_width: u16, visible: usize) -> Self {
        Self { min_width, visible }
    }
}

/// Default breakpoints, in terminal columns.
pub fn default_breakpoints() -> Vec<Breakpoint> {
    vec![
        Breakpoint::new(0, 1),
        Breakpoint::new(90, 2),
        Breakpoint::new(140, 3),
    ]
}

/// Number of slides to show at `width`.
///
/// Picks the breakpoint with the largest `min_width` not exceeding `width`.
/// Falls back to one slide when no breakpoint matches.
pub fn visible_count_for(breakpoints: &[Breakpoint], width: u16) -> usize {
    breakpoints
        .iter()
        .filter(|bp| bp.min_width <= width)
        .max_by_key(|bp| bp.min_width)
        .map_or(1, |bp| bp.visible.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_breakpoints() {
        let bps = default_breakpoints();
        assert_eq!(visible_count_for(&bps, 40), 1);
        assert_eq!(visible_count_for(&bps, 89), 1);
        assert_eq!(visible_count_for(&bps, 90), 2);
        assert_eq!(visible_count_for(&bps, 139), 2);
        assert_eq!(visible_count_for(&bps, 200), 3);
    }

    #[test]
    fn test_unordered_and_missing_breakpoints() {
        let bps = vec![Breakpoint::new(100, 4), Breakpoint::new(50, 2)];
        assert_eq!(visible_count_for(&bps, 10), 1);
        assert_eq!(visible_count_for(&bps, 60), 2);
        assert_eq!(visible_count_for(&bps, 120), 4);
    }

    #[test]
    fn test_zero_visible_is_treated_as_one() {
        let bps = vec![Breakpoint::new(0, 0)];
        assert_eq!(visible_count_for(&bps, 80), 1);
    }
}
