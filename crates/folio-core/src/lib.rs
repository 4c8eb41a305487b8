//! Core domain logic for folio.
//!
//! Everything here is independent of the terminal: the typewriter and
//! carousel state machines are clock-free, the contact form only validates,
//! and the email client only talks HTTP. The TUI crate wires them to timers
//! and input.

pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod email;
pub mod logging;
pub mod timer;
pub mod typewriter;
pub mod viewport;
