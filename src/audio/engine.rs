use std::time::Duration;

use super::ToneCommand;

const MAX_VOICES: usize = 8; // hard cap so we won't malloc in the audio callback

#[derive(Clone, Copy, Debug)]
struct BeepVoice {
    phase: f32,
    phase_inc: f32,
    amp: f32,
    remaining: u32, // samples left before the voice is cut
    alive: bool,
}

pub struct Engine {
    sample_rate: f32,
    voices: [BeepVoice; MAX_VOICES],
}

impl Engine {
    pub fn new(sample_rate: u32) -> Self {
        let empty = BeepVoice {
            phase: 0.0,
            phase_inc: 0.0,
            amp: 0.0,
            remaining: 0,
            alive: false,
        };

        Self {
            sample_rate: sample_rate as f32,
            voices: [empty; MAX_VOICES],
        }
    }

    pub fn handle_cmd(&mut self, cmd: ToneCommand) {
        match cmd {
            ToneCommand::Tone {
                frequency_hz,
                duration,
            } => self.trigger(frequency_hz, duration),
        }
    }

    fn trigger(&mut self, freq: f32, duration: Duration) {
        // steal slot 0 when the pool is full
        let slot = self.voices.iter().position(|v| !v.alive).unwrap_or(0);

        // radians per sample
        let phase_inc = (std::f32::consts::TAU * freq) / self.sample_rate;
        let remaining = (duration.as_secs_f32() * self.sample_rate) as u32;

        self.voices[slot] = BeepVoice {
            phase: 0.0,
            phase_inc,
            amp: 0.25,
            remaining: remaining.max(1),
            alive: true,
        };
    }

    pub fn next_sample(&mut self) -> f32 {
        let mut out = 0.0f32;
        for v in &mut self.voices {
            if !v.alive {
                continue;
            }
            out += v.amp * v.phase.sin();
            v.phase += v.phase_inc;
            if v.phase > std::f32::consts::TAU {
                v.phase -= std::f32::consts::TAU;
            }
            v.amp *= 0.9995;
            v.remaining -= 1;
            if v.remaining == 0 || v.amp < 0.0005 {
                v.alive = false;
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_until_triggered() {
        let mut engine = Engine::new(48_000);
        for _ in 0..64 {
            assert_eq!(engine.next_sample(), 0.0);
        }
    }

    #[test]
    fn trigger_produces_sound() {
        let mut engine = Engine::new(48_000);
        engine.handle_cmd(ToneCommand::Tone {
            frequency_hz: 440.0,
            duration: Duration::from_millis(50),
        });
        let heard = (0..32).any(|_| engine.next_sample().abs() > 0.0);
        assert!(heard);
    }

    #[test]
    fn voice_is_cut_after_its_duration() {
        let mut engine = Engine::new(1_000);
        engine.handle_cmd(ToneCommand::Tone {
            frequency_hz: 250.0,
            duration: Duration::from_millis(10),
        });
        // 10 ms at 1 kHz is 10 samples
        for _ in 0..10 {
            engine.next_sample();
        }
        for _ in 0..16 {
            assert_eq!(engine.next_sample(), 0.0);
        }
    }

    #[test]
    fn full_pool_steals_a_slot_instead_of_panicking() {
        let mut engine = Engine::new(48_000);
        for i in 0..(MAX_VOICES + 4) {
            engine.handle_cmd(ToneCommand::Tone {
                frequency_hz: 100.0 + i as f32,
                duration: Duration::from_millis(100),
            });
        }
        engine.next_sample();
    }
}
