//! Track playback through the default cpal output device.
//!
//! `cpal::Stream` must stay on the thread that built it, so a dedicated
//! worker thread owns the stream and receives commands over a channel.
//! Start requests resolve from that thread once the stream is playing.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, FromSample, Sample, SizedSample, Stream, StreamConfig};

use crate::audio::backend::{PlaybackBackend, PlaybackCallback};
use crate::audio::track::Track;
use crate::error::PlaybackError;

enum Command {
    Play(PlaybackCallback),
    Pause,
}

pub struct CpalPlayback {
    track_path: PathBuf,
    commands: Option<Sender<Command>>,
}

impl CpalPlayback {
    pub fn new(track_path: PathBuf) -> Self {
        Self {
            track_path,
            commands: None,
        }
    }

    fn sender(&mut self) -> Option<&Sender<Command>> {
        if self.commands.is_none() {
            let (tx, rx) = mpsc::channel();
            let path = self.track_path.clone();
            let spawned = std::thread::Builder::new()
                .name("audio-output".to_string())
                .spawn(move || worker_loop(path, rx));
            match spawned {
                Ok(_) => self.commands = Some(tx),
                Err(err) => tracing::error!(%err, "Failed to spawn audio worker"),
            }
        }
        self.commands.as_ref()
    }
}

impl PlaybackBackend for CpalPlayback {
    fn start(&mut self, done: PlaybackCallback) {
        let Some(sender) = self.sender() else {
            done(Err(PlaybackError::WorkerGone));
            return;
        };
        if let Err(mpsc::SendError(Command::Play(done))) = sender.send(Command::Play(done)) {
            self.commands = None;
            done(Err(PlaybackError::WorkerGone));
        }
    }

    fn pause(&mut self) {
        if let Some(sender) = &self.commands {
            let _ = sender.send(Command::Pause);
        }
    }
}

fn worker_loop(path: PathBuf, commands: Receiver<Command>) {
    let mut stream: Option<Stream> = None;

    while let Ok(command) = commands.recv() {
        match command {
            Command::Play(done) => {
                let result = match stream.as_ref() {
                    Some(active) => resume(active),
                    None => open_stream(&path).and_then(|built| {
                        resume(&built)?;
                        stream = Some(built);
                        Ok(())
                    }),
                };
                if let Err(err) = &result {
                    tracing::warn!(%err, "Playback did not start");
                }
                done(result);
            }
            Command::Pause => {
                if let Some(active) = stream.as_ref() {
                    if let Err(err) = active.pause() {
                        tracing::warn!(%err, "Failed to pause audio stream");
                    }
                }
            }
        }
    }

    tracing::debug!("Audio worker stopped");
}

fn resume(stream: &Stream) -> Result<(), PlaybackError> {
    stream.play().map_err(|err| PlaybackError::Stream {
        message: err.to_string(),
    })
}

fn open_stream(path: &std::path::Path) -> Result<Stream, PlaybackError> {
    let track = Track::load(path)?;
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or(PlaybackError::NoOutputDevice)?;
    let supported = device
        .default_output_config()
        .map_err(|err| PlaybackError::Stream {
            message: format!("Failed to get audio config: {err}"),
        })?;
    let config = supported.config();
    tracing::debug!(
        channels = config.channels,
        sample_rate = config.sample_rate.0,
        format = ?supported.sample_format(),
        "Audio device configured"
    );

    match supported.sample_format() {
        cpal::SampleFormat::I16 => make_stream::<i16>(&device, &config, track),
        cpal::SampleFormat::I32 => make_stream::<i32>(&device, &config, track),
        cpal::SampleFormat::U16 => make_stream::<u16>(&device, &config, track),
        cpal::SampleFormat::F32 => make_stream::<f32>(&device, &config, track),
        cpal::SampleFormat::F64 => make_stream::<f64>(&device, &config, track),
        other => Err(PlaybackError::Stream {
            message: format!("Unsupported sample format {other:?}"),
        }),
    }
}

fn make_stream<T>(
    device: &Device,
    config: &StreamConfig,
    track: Track,
) -> Result<Stream, PlaybackError>
where
    T: SizedSample + FromSample<f32>,
{
    let channels = usize::from(config.channels.max(1));
    let step = f64::from(track.sample_rate()) / f64::from(config.sample_rate.0.max(1));
    // Fractional track frame, so device and track sample rates can differ.
    let mut position = 0.0_f64;

    device
        .build_output_stream(
            config,
            move |output: &mut [T], _: &cpal::OutputCallbackInfo| {
                position = fill(output, channels, &track, position, step);
            },
            |err| tracing::error!(%err, "Audio stream error"),
            None,
        )
        .map_err(|err| PlaybackError::Stream {
            message: err.to_string(),
        })
}

/// Write interleaved frames of `track` into `output` starting at track
/// frame `position`, advancing by `step` per output frame and looping at
/// the end. Returns the position after the last written frame.
fn fill<T>(output: &mut [T], channels: usize, track: &Track, mut position: f64, step: f64) -> f64
where
    T: Sample + FromSample<f32>,
{
    let frames = track.frames() as f64;
    for frame in output.chunks_mut(channels) {
        let source_frame = position as usize;
        for (channel, slot) in frame.iter_mut().enumerate() {
            *slot = <T as Sample>::from_sample(track.sample(source_frame, channel));
        }
        position += step;
        if position >= frames {
            position -= frames;
        }
    }
    position
}
