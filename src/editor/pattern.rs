// the document value exchanged with the host; serde does json

use serde::{Deserialize, Serialize};

use crate::shared::{STEPS_PER_PATTERN, Voice};

/// A 3-voice, 16-step drum grid. Cells are 0 (silent) or 1 (hit).
///
/// This struct is the wire format: the serialized form is a JSON object
/// keyed by voice name, each holding an array of exactly 16 cells. The
/// fixed-size arrays make the 16-cell invariant unrepresentable to break;
/// the {0,1} cell invariant is checked in `parse` because malformed host
/// input may carry other numbers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub hihat: [u8; STEPS_PER_PATTERN],
    pub snare: [u8; STEPS_PER_PATTERN],
    pub kick: [u8; STEPS_PER_PATTERN],
}

impl Default for Pattern {
    fn default() -> Self {
        Self {
            hihat: [0; STEPS_PER_PATTERN],
            snare: [0; STEPS_PER_PATTERN],
            kick: [0; STEPS_PER_PATTERN],
        }
    }
}

impl Pattern {
    /// All-zero grid.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn voice(&self, voice: Voice) -> &[u8; STEPS_PER_PATTERN] {
        match voice {
            Voice::Hihat => &self.hihat,
            Voice::Snare => &self.snare,
            Voice::Kick => &self.kick,
        }
    }

    pub fn voice_mut(&mut self, voice: Voice) -> &mut [u8; STEPS_PER_PATTERN] {
        match voice {
            Voice::Hihat => &mut self.hihat,
            Voice::Snare => &mut self.snare,
            Voice::Kick => &mut self.kick,
        }
    }

    pub fn cell(&self, voice: Voice, step: usize) -> u8 {
        self.voice(voice)[step]
    }

    pub fn is_active(&self, voice: Voice, step: usize) -> bool {
        self.cell(voice, step) == 1
    }

    /// Flip one cell between 0 and 1. `step` out of range is a caller bug.
    pub fn toggle(&mut self, voice: Voice, step: usize) {
        debug_assert!(step < STEPS_PER_PATTERN, "step {step} out of range");
        let cell = &mut self.voice_mut(voice)[step];
        *cell = if *cell == 0 { 1 } else { 0 };
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Voices with a hit at `step`, in fixed hihat, snare, kick order.
    pub fn voices_at(&self, step: usize) -> impl Iterator<Item = Voice> + '_ {
        Voice::ALL.into_iter().filter(move |&v| self.is_active(v, step))
    }

    /// Canonical serialized form, suitable for a `set-field-value` commit.
    pub fn serialize(&self) -> String {
        // a Pattern has no map keys or non-finite floats, so this can't fail
        serde_json::to_string(self).expect("pattern serialization")
    }

    /// Parse a serialized pattern. Rejects anything that is not the
    /// 3-voices / 16-cells shape with every cell in {0,1}; never returns
    /// a partially-applied grid.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let pattern: Self = serde_json::from_str(raw)?;
        for voice in Voice::ALL {
            for (step, &cell) in pattern.voice(voice).iter().enumerate() {
                if cell > 1 {
                    anyhow::bail!(
                        "cell {}[{step}] is {cell}, expected 0 or 1",
                        voice.key()
                    );
                }
            }
        }
        Ok(pattern)
    }

    /// Parse a flat text grid: 48 cells, rows in hihat, snare, kick order,
    /// whitespace ignored. `'0'` and `'.'` are silent, anything else is a
    /// hit; missing trailing cells stay silent.
    pub fn from_flat_str(text: &str) -> Self {
        let mut pattern = Self::default();
        let mut cells = text.chars().filter(|c| !c.is_whitespace());
        for voice in Voice::ALL {
            for step in 0..STEPS_PER_PATTERN {
                match cells.next() {
                    Some(c) if c != '0' && c != '.' => pattern.voice_mut(voice)[step] = 1,
                    Some(_) => {}
                    None => return pattern,
                }
            }
        }
        pattern
    }
}
