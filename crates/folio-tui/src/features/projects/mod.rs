//! Projects section: the autoplaying carousel of project cards.

mod render;
mod state;
mod update;

pub use render::render_projects;
pub use state::ProjectsState;
pub use update::{
    handle_key, handle_mouse, jump, mount, navigate, on_autoplay, open_link, resize, toggle_autoplay,
    unmount,
};
