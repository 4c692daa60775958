//! Fixed-tempo pattern playback.
//!
//! One worker thread walks the 16-step grid, four steps to a beat, and
//! fires the tone primitive for every active cell. Stopping goes through a
//! bounded channel polled before each step and at the top of each loop
//! pass: a stop lands at the next step boundary, never mid-tone.

mod kit;

pub use kit::{DrumKit, ToneSpec};

use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, Sender, TryRecvError, bounded};

use crate::editor::Pattern;
use crate::shared::{STEPS_PER_PATTERN, Voice};

/// The single audio primitive playback drives. Implementations must return
/// promptly; the scheduler sleeps, the player must not.
pub trait TonePlayer {
    fn play_tone(&self, frequency_hz: f32, duration: Duration);
}

/// Handle to a running playback worker. Dropping it stops playback at the
/// next step boundary.
pub struct PlaybackHandle {
    stop_tx: Sender<()>,
    worker: thread::JoinHandle<()>,
}

impl PlaybackHandle {
    /// Request a stop. Takes effect at the next step boundary.
    pub fn stop(&self) {
        let _ = self.stop_tx.try_send(());
    }

    pub fn is_finished(&self) -> bool {
        self.worker.is_finished()
    }

    /// Block until the worker exits.
    pub fn wait(self) {
        let _ = self.worker.join();
    }
}

/// Duration of one step: a 16th note, so four steps span one beat.
pub fn step_duration(bpm: f32) -> Duration {
    Duration::from_secs_f32(60.0 / bpm.max(1.0) / 4.0)
}

/// Play `pattern` at `bpm`, once or looped, with `kit` deciding how each
/// voice sounds.
pub fn start<P>(pattern: Pattern, bpm: f32, looped: bool, kit: DrumKit, player: P) -> PlaybackHandle
where
    P: TonePlayer + Send + 'static,
{
    let (stop_tx, stop_rx) = bounded(1);
    let step = step_duration(bpm);
    let worker = thread::spawn(move || run(pattern, step, looped, kit, player, stop_rx));
    PlaybackHandle { stop_tx, worker }
}

/// One voice, one tone, no scheduling. Used for audition buttons.
pub fn play_drum_sound<P: TonePlayer>(voice: Voice, kit: &DrumKit, player: &P) {
    let spec = kit.spec(voice);
    player.play_tone(spec.frequency_hz, spec.duration());
}

fn run<P: TonePlayer>(
    pattern: Pattern,
    step_dur: Duration,
    looped: bool,
    kit: DrumKit,
    player: P,
    stop_rx: Receiver<()>,
) {
    'pattern: loop {
        for step in 0..STEPS_PER_PATTERN {
            if stop_requested(&stop_rx) {
                break 'pattern;
            }
            for voice in pattern.voices_at(step) {
                let spec = kit.spec(voice);
                player.play_tone(spec.frequency_hz, spec.duration());
            }
            thread::sleep(step_dur);
        }
        if !looped || stop_requested(&stop_rx) {
            break;
        }
    }
}

fn stop_requested(rx: &Receiver<()>) -> bool {
    match rx.try_recv() {
        Ok(()) => true,
        // handle dropped: treat as stop
        Err(TryRecvError::Disconnected) => true,
        Err(TryRecvError::Empty) => false,
    }
}
