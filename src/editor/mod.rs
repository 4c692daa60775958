//! The pattern editor core.
//!
//! All of the state lives here; the grid widget only paints the
//! [`DisplayState`] this layer keeps, and the host transport only carries
//! envelopes produced here. Everything is synchronous: toggles, inbound
//! messages, and commits all run on the caller's thread.

mod pattern;

pub use pattern::Pattern;

use crate::host::{HostPort, HostToEditor};
use crate::shared::{DisplayState, LedState, STEPS_PER_PATTERN, Voice};

/// One editor instance, bound to at most one host document field.
pub struct PatternEditor {
    pattern: Pattern,
    field_id: Option<String>,
    display: DisplayState,
}

impl Default for PatternEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternEditor {
    /// A fresh editor: all-zero grid, no field binding, dark display.
    /// No external effects; announcing readiness is a separate step.
    pub fn new() -> Self {
        Self {
            pattern: Pattern::new(),
            field_id: None,
            display: DisplayState::default(),
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn field_id(&self) -> Option<&str> {
        self.field_id.as_deref()
    }

    /// Tell the host this editor can accept a value.
    pub fn announce_ready(&self, port: &impl HostPort) {
        port.announce_ready();
    }

    /// Flip one cell. The matching display LED flips in lockstep so a
    /// single click never forces a full repaint of the grid.
    pub fn toggle_cell(&mut self, voice: Voice, step: usize) {
        debug_assert!(step < STEPS_PER_PATTERN, "step {step} out of range");
        self.pattern.toggle(voice, step);
        let led = &mut self.display.rows[voice.index()][step];
        *led = led.toggled();
    }

    /// Reset the grid to all-zero and repaint everything. The field
    /// binding is untouched.
    pub fn clear(&mut self) {
        self.pattern.clear();
        self.rebuild_display();
    }

    /// The retained display state. Reading it any number of times yields
    /// the same rows and never touches the pattern.
    pub fn display_state(&self) -> &DisplayState {
        &self.display
    }

    /// Serialize the grid and hand it to the host, keyed by the bound
    /// field. Without a binding this sends nothing; the value only goes to
    /// the diagnostic log.
    pub fn commit(&self, port: &impl HostPort) {
        let value = self.pattern.serialize();
        match &self.field_id {
            Some(field_id) => port.commit_value(field_id, &value),
            None => log::debug!("drumgrid: commit with no field id: {value}"),
        }
    }

    /// Surface the current pattern for inspection. Audio preview is not
    /// part of this editor; playback is a separate engine.
    pub fn preview(&self) {
        log::info!("drumgrid: preview pattern: {}", self.pattern.serialize());
    }

    /// Replace the grid from a serialized value. A malformed value changes
    /// nothing; the old grid stays.
    pub fn receive_external_value(&mut self, raw: &str) {
        match Pattern::parse(raw) {
            Ok(pattern) => {
                self.pattern = pattern;
                self.rebuild_display();
            }
            Err(e) => log::warn!("drumgrid: ignoring malformed pattern value: {e}"),
        }
    }

    /// Bind (or rebind) the host document field this editor commits to.
    pub fn receive_field_id(&mut self, id: impl Into<String>) {
        self.field_id = Some(id.into());
    }

    /// Route one inbound host envelope. The id and value parts are
    /// independent; either, both, or neither may be present, and repeats
    /// are harmless.
    pub fn handle_message(&mut self, msg: &HostToEditor) {
        let HostToEditor::EditorProtocol { id, value } = msg;
        if let Some(id) = id {
            self.receive_field_id(id.clone());
        }
        if let Some(value) = value {
            self.receive_external_value(value);
        }
    }

    fn rebuild_display(&mut self) {
        for voice in Voice::ALL {
            for step in 0..STEPS_PER_PATTERN {
                self.display.rows[voice.index()][step] = if self.pattern.is_active(voice, step) {
                    LedState::On
                } else {
                    LedState::Off
                };
            }
        }
    }
}
