//! Hero section: greeting, name and the typewriter role line.

mod render;
mod state;
mod update;

pub use render::render_hero;
pub use state::HeroState;
pub use update::{change_speed, handle_key, mount, on_cursor_blink, on_typewriter_step, unmount};
