//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Async handlers and timers send `UiEvent`s to `inbox_tx`; the runtime
//! drains `inbox_rx` every iteration alongside terminal input.
//!
//! ## Timers
//!
//! The runtime holds one `ScopedTimer` per `TimerKind`. Scheduling a kind
//! again replaces (and so cancels) the old handle, and dropping the runtime
//! cancels everything still pending.

mod handlers;

use std::collections::HashMap;
use std::future::Future;
use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use folio_core::config::Config;
use folio_core::content::Portfolio;
use folio_core::email::{EmailClient, SubmitError};
use folio_core::timer::ScopedTimer;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

use crate::common::TimerKind;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Poll duration while a timer is pending or the user is interacting.
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when nothing is scheduled.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Terminal state is restored on drop or panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    inbox_tx: UnboundedSender<UiEvent>,
    inbox_rx: UnboundedReceiver<UiEvent>,
    timers: HashMap<TimerKind, ScopedTimer>,
    /// Email client, or why the contact form cannot send.
    email: Result<EmailClient, SubmitError>,
    last_terminal_event: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime.
    ///
    /// # Errors
    /// Returns an error if the state cannot be built or the terminal cannot
    /// be set up.
    pub fn new(
        config: Config,
        portfolio: Portfolio,
        email: Result<EmailClient, SubmitError>,
    ) -> Result<Self> {
        let state = AppState::new(config, portfolio)?;

        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            inbox_tx,
            inbox_rx,
            timers: HashMap::new(),
            email,
            last_terminal_event: Instant::now(),
        })
    }

    /// Runs the main event loop.
    ///
    /// # Errors
    /// Returns an error if terminal I/O fails.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;

        let effects = update::start(&mut self.state);
        self.execute_effects(effects);
        let result = self.event_loop();

        let _ = terminal::disable_input_features();
        self.timers.clear();
        info!("Portfolio viewer closed");
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            let mut events = self.collect_events()?;

            // Frame goes first so layout-dependent state is current.
            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                if matches!(&event, UiEvent::Terminal(_)) {
                    self.last_terminal_event = Instant::now();
                }
                if !matches!(&event, UiEvent::Frame { .. }) {
                    dirty = true;
                }
                self.dispatch_event(event);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let poll_duration = if !events.is_empty() {
            Duration::ZERO
        } else if self.state.timers.is_any_armed() || recent_terminal_activity {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn dispatch_event(&mut self, event: UiEvent) {
        let effects = update::update(&mut self.state, event);
        if !effects.is_empty() {
            self.execute_effects(effects);
        }
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async handler and sends its result event to the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::ScheduleTimer { kind, id, delay } => {
                let fired = UiEvent::TimerFired { kind, id };
                let timer = ScopedTimer::once(id, delay, self.inbox_tx.clone(), fired);
                if let Some(previous) = self.timers.insert(kind, timer) {
                    debug!(?kind, id = ?previous.id(), "Replaced pending timer");
                }
            }
            UiEffect::CancelTimer { kind } => {
                self.timers.remove(&kind);
            }
            UiEffect::SubmitContact { message } => match &self.email {
                Ok(client) => {
                    let client = client.clone();
                    self.spawn_effect(move || handlers::submit_contact(client, message));
                }
                Err(err) => {
                    let result = Err(err.clone());
                    self.dispatch_event(UiEvent::ContactSubmitted { result });
                }
            },
            UiEffect::OpenBrowser { url } => handlers::open_url(&url),
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        self.timers.clear();
        let _ = terminal::restore_terminal();
    }
}
