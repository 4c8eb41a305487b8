//! Contact section: the message form.

mod render;
mod update;

pub use render::render_contact;
pub use update::{
    FAILED_MESSAGE, SENT_MESSAGE, handle_key, handle_paste, handle_submit_result, submit,
};
