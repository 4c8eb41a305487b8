pub mod text;
pub mod theme;
pub mod timers;

pub use timers::{TimerKind, Timers};
