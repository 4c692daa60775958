use std::time::Duration;

use crate::shared::Voice;

/// How one voice sounds: a plain tone at a fixed frequency and length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSpec {
    pub frequency_hz: f32,
    pub duration_ms: u32,
}

impl ToneSpec {
    pub const fn new(frequency_hz: f32, duration_ms: u32) -> Self {
        Self { frequency_hz, duration_ms }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms as u64)
    }
}

/// Voice-to-tone configuration, passed explicitly into playback calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrumKit {
    pub hihat: ToneSpec,
    pub snare: ToneSpec,
    pub kick: ToneSpec,
}

impl Default for DrumKit {
    fn default() -> Self {
        Self {
            hihat: ToneSpec::new(10_000.0, 50),
            snare: ToneSpec::new(200.0, 100),
            kick: ToneSpec::new(60.0, 150),
        }
    }
}

impl DrumKit {
    pub fn spec(&self, voice: Voice) -> ToneSpec {
        match voice {
            Voice::Hihat => self.hihat,
            Voice::Snare => self.snare,
            Voice::Kick => self.kick,
        }
    }

    pub fn set_voice(&mut self, voice: Voice, spec: ToneSpec) {
        match voice {
            Voice::Hihat => self.hihat = spec,
            Voice::Snare => self.snare = spec,
            Voice::Kick => self.kick = spec,
        }
    }

    /// 808-flavored preset.
    pub fn tr808() -> Self {
        Self {
            hihat: ToneSpec::new(12_000.0, 40),
            snare: ToneSpec::new(180.0, 150),
            kick: ToneSpec::new(50.0, 200),
        }
    }

    /// 909-flavored preset.
    pub fn tr909() -> Self {
        Self {
            hihat: ToneSpec::new(11_000.0, 45),
            snare: ToneSpec::new(220.0, 120),
            kick: ToneSpec::new(65.0, 180),
        }
    }

    /// Acoustic-ish preset.
    pub fn acoustic() -> Self {
        Self {
            hihat: ToneSpec::new(9_000.0, 55),
            snare: ToneSpec::new(250.0, 110),
            kick: ToneSpec::new(80.0, 160),
        }
    }
}
