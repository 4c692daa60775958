use anyhow::Context;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use crossbeam_channel::{Receiver, Sender};

use std::time::Duration;

use crate::playback::TonePlayer;

mod engine;

use engine::Engine;

/// Commands into the audio callback. The callback can't block or allocate,
/// so tones are described up front and synthesized in the callback.
#[derive(Clone, Copy, Debug)]
pub enum ToneCommand {
    Tone {
        frequency_hz: f32,
        duration: Duration,
    },
}

pub struct AudioHandle {
    tx: Sender<ToneCommand>,
    _output_stream: cpal::Stream,
}

impl AudioHandle {
    pub fn send(&self, cmd: ToneCommand) {
        let _ = self.tx.try_send(cmd);
    }

    /// A clonable, `Send` player for playback workers. The stream itself
    /// stays with this handle; only the command sender crosses threads.
    pub fn tone_sender(&self) -> ToneSender {
        ToneSender { tx: self.tx.clone() }
    }
}

impl TonePlayer for AudioHandle {
    fn play_tone(&self, frequency_hz: f32, duration: Duration) {
        self.send(ToneCommand::Tone { frequency_hz, duration });
    }
}

#[derive(Clone)]
pub struct ToneSender {
    tx: Sender<ToneCommand>,
}

impl TonePlayer for ToneSender {
    fn play_tone(&self, frequency_hz: f32, duration: Duration) {
        let _ = self.tx.try_send(ToneCommand::Tone { frequency_hz, duration });
    }
}

pub fn start_audio() -> anyhow::Result<AudioHandle> {
    let (tx, rx) = crossbeam_channel::bounded::<ToneCommand>(256);

    let host = cpal::default_host();
    let device = host.default_output_device().context("no default output device")?;
    let config = device.default_output_config().context("no default output config")?;

    let channels = config.channels() as usize;

    match config.sample_format() {
        cpal::SampleFormat::F32 => {
            let output_stream = build_output_stream_f32(&device, &config.into(), rx, channels)?;
            output_stream.play().context("failed to play output stream")?;

            Ok(AudioHandle {
                tx,
                _output_stream: output_stream,
            })
        }
        _ => anyhow::bail!("unsupported sample format (only f32 supported for now)"),
    }
}

fn build_output_stream_f32(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    rx: Receiver<ToneCommand>,
    channels: usize,
) -> anyhow::Result<cpal::Stream> {
    let mut engine = Engine::new(config.sample_rate);

    let err_fn = |err| log::error!("drumgrid: audio output stream error: {err}");

    let stream = device.build_output_stream(
        config,
        move |data: &mut [f32], _info| {
            while let Ok(cmd) = rx.try_recv() {
                engine.handle_cmd(cmd);
            }

            // mono synthesis, copied across all output channels
            for frame in data.chunks_mut(channels) {
                let sample = engine.next_sample();
                for ch in frame.iter_mut() {
                    *ch = sample;
                }
            }
        },
        err_fn,
        None,
    )?;

    Ok(stream)
}
