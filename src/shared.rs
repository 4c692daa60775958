// The rendering model mirrors the split the rest of the crate follows:
// the editor owns the pattern and a DisplayState, and whatever embeds the
// widget just paints that DisplayState every frame. The UI layer never
// re-derives anything from the pattern itself.

pub const NUM_VOICES: usize = 3;
pub const STEPS_PER_PATTERN: usize = 16;

// steps are shown in 4 groups of 4; purely visual, indexing stays 0..15
pub const STEPS_PER_GROUP: usize = 4;
pub const NUM_GROUPS: usize = STEPS_PER_PATTERN / STEPS_PER_GROUP;

/// One of the three drum voices, in fixed display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Voice {
    Hihat,
    Snare,
    Kick,
}

impl Voice {
    /// Display order: hihat on top, kick at the bottom.
    pub const ALL: [Voice; NUM_VOICES] = [Voice::Hihat, Voice::Snare, Voice::Kick];

    /// Row index into display state and grid layouts.
    pub fn index(self) -> usize {
        match self {
            Voice::Hihat => 0,
            Voice::Snare => 1,
            Voice::Kick => 2,
        }
    }

    /// Key used in the serialized pattern.
    pub fn key(self) -> &'static str {
        match self {
            Voice::Hihat => "hihat",
            Voice::Snare => "snare",
            Voice::Kick => "kick",
        }
    }

    /// Human label for row headers.
    pub fn label(self) -> &'static str {
        match self {
            Voice::Hihat => "Hi-Hat",
            Voice::Snare => "Snare",
            Voice::Kick => "Kick",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LedState {
    #[default]
    Off,
    On,
}

impl LedState {
    pub fn toggled(self) -> Self {
        match self {
            LedState::Off => LedState::On,
            LedState::On => LedState::Off,
        }
    }
}

/// What the grid widget draws: one LED row per voice, top to bottom in
/// `Voice::ALL` order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisplayState {
    pub rows: [[LedState; STEPS_PER_PATTERN]; NUM_VOICES],
}

impl DisplayState {
    pub fn led(&self, voice: Voice, step: usize) -> LedState {
        self.rows[voice.index()][step]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn voice_order_is_hihat_snare_kick() {
        assert_eq!(Voice::ALL[0], Voice::Hihat);
        assert_eq!(Voice::ALL[1], Voice::Snare);
        assert_eq!(Voice::ALL[2], Voice::Kick);
        for (i, v) in Voice::ALL.iter().enumerate() {
            assert_eq!(v.index(), i);
        }
    }

    #[test]
    fn display_state_starts_dark() {
        let ds = DisplayState::default();
        for voice in Voice::ALL {
            for step in 0..STEPS_PER_PATTERN {
                assert_eq!(ds.led(voice, step), LedState::Off);
            }
        }
    }
}
