//! Per-session controller wiring host callbacks into the core.
use quickuse_core::{Host, RuntimeState, on_hotkey_pressed, on_tick};

use crate::config::{Button, ModConfig};

/// Owns the mod's settings and runtime state for one session.
///
/// The host guarantees callbacks run one at a time, so the controller is
/// mutated only from [`handle_tick`](Self::handle_tick) and
/// [`handle_button`](Self::handle_button).
pub struct Controller {
    config: ModConfig,
    state: RuntimeState,
}

impl Controller {
    pub fn new(config: ModConfig) -> Self {
        Self {
            config,
            state: RuntimeState::new(),
        }
    }

    pub fn config(&self) -> &ModConfig {
        &self.config
    }

    /// Replaces the hotkey binding (settings-UI integration point).
    pub fn set_hotkey(&mut self, hotkey: Button) {
        tracing::debug!(%hotkey, "hotkey rebound");
        self.config.hotkey = hotkey;
    }

    /// Read access for diagnostics; all mutation goes through the core.
    pub fn state(&self) -> &RuntimeState {
        &self.state
    }

    /// Forwards one simulation tick to the eating and horse watches.
    pub fn handle_tick<H: Host + ?Sized>(&mut self, host: &mut H) {
        on_tick(&mut self.state, host);
    }

    /// Forwards a button-press event, dispatching only when it matches
    /// the configured hotkey. Press debouncing stays host-side.
    pub fn handle_button<H: Host + ?Sized>(&mut self, host: &mut H, pressed: &Button) {
        if *pressed == self.config.hotkey {
            on_hotkey_pressed(&mut self.state, host);
        }
    }
}
