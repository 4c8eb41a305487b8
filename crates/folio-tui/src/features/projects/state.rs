use std::cell::{Cell, RefCell};

use folio_core::carousel::Carousel;
use folio_core::config::CarouselConfig;
use folio_core::viewport::Breakpoint;
use ratatui::layout::Rect;

/// Projects section state.
#[derive(Debug)]
pub struct ProjectsState {
    pub carousel: Carousel,
    pub(super) pause_on_hover: bool,
    pub(super) breakpoints: Vec<Breakpoint>,
    /// Card strip area from the last render, used for hover detection.
    pub area: Cell<Rect>,
    /// Previous/next arrow areas from the last render.
    pub prev_area: Cell<Rect>,
    pub next_area: Cell<Rect>,
    /// Pagination dot areas from the last render, one per slide.
    pub dot_areas: RefCell<Vec<Rect>>,
}

impl ProjectsState {
    pub fn new(len: usize, config: &CarouselConfig) -> Self {
        Self {
            carousel: Carousel::new(len, config.wrap_mode(), config.autoplay, config.interval()),
            pause_on_hover: config.pause_on_hover,
            breakpoints: config.breakpoints.clone(),
            area: Cell::new(Rect::default()),
            prev_area: Cell::new(Rect::default()),
            next_area: Cell::new(Rect::default()),
            dot_areas: RefCell::new(Vec::new()),
        }
    }
}
