//! drumgrid - a 3-voice, 16-step drum pattern editor for embedding
//!
//! The pieces, from the inside out:
//! - `editor`: the pattern grid, its JSON wire format, and the editor
//!   state machine (toggle / clear / commit / external updates)
//! - `host`: the message protocol and port to the embedding document host
//! - `playback`: fixed-tempo pattern playback over a tone primitive,
//!   with drum kit presets and step-boundary cancellation
//! - `audio`: a cpal-backed implementation of the tone primitive
//! - `tui`: a ratatui widget that paints the editor's display state

pub mod audio;
pub mod editor;
pub mod host;
pub mod playback;
pub mod shared;
pub mod tui;

// Re-export commonly used types
pub use audio::{AudioHandle, ToneSender, start_audio};
pub use editor::{Pattern, PatternEditor};
pub use host::{ChannelHost, EditorToHost, HostPort, HostToEditor};
pub use playback::{DrumKit, PlaybackHandle, ToneSpec, TonePlayer, play_drum_sound};
pub use shared::{DisplayState, LedState, NUM_VOICES, STEPS_PER_PATTERN, Voice};
