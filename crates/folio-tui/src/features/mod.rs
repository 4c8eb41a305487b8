//! Feature slices for the TUI (state/update/render per slice).

pub mod about;
pub mod contact;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod skills;
pub mod socials;
pub mod toast;
