use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use hound::{SampleFormat, WavReader};

use crate::error::PlaybackError;

/// A decoded WAV track: interleaved samples normalized to `[-1.0, 1.0]`.
#[derive(Debug, Clone)]
pub struct Track {
    samples: Arc<Vec<f32>>,
    channels: u16,
    sample_rate: u32,
}

impl Track {
    pub fn load(path: &Path) -> Result<Self, PlaybackError> {
        let reader = WavReader::open(path).map_err(|source| PlaybackError::TrackLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let track = Self::decode(reader).map_err(|source| PlaybackError::TrackLoad {
            path: path.to_path_buf(),
            source,
        })?;
        if track.frames() == 0 {
            return Err(PlaybackError::EmptyTrack {
                path: path.to_path_buf(),
            });
        }
        tracing::debug!(
            path = %path.display(),
            channels = track.channels,
            sample_rate = track.sample_rate,
            seconds = track.duration().as_secs_f32(),
            "Audio track decoded"
        );
        Ok(track)
    }

    /// Decode every sample of `reader`.
    pub fn decode<R: Read>(reader: WavReader<R>) -> Result<Self, hound::Error> {
        let spec = reader.spec();
        let samples = match spec.sample_format {
            SampleFormat::Float => reader.into_samples::<f32>().collect::<Result<Vec<_>, _>>()?,
            SampleFormat::Int => {
                let scale = 1.0 / (1_i64 << (spec.bits_per_sample.saturating_sub(1))) as f32;
                reader
                    .into_samples::<i32>()
                    .map(|sample| sample.map(|value| value as f32 * scale))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };
        Ok(Self {
            samples: Arc::new(samples),
            channels: spec.channels.max(1),
            sample_rate: spec.sample_rate,
        })
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of sample frames (one sample per channel).
    pub fn frames(&self) -> usize {
        self.samples.len() / usize::from(self.channels)
    }

    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.frames() as f64 / f64::from(self.sample_rate))
    }

    /// Sample of `frame` for an output `channel`. Output channels beyond the
    /// track's channel count reuse the last track channel; frames past the
    /// end wrap around so the track loops.
    pub fn sample(&self, frame: usize, channel: usize) -> f32 {
        let frames = self.frames();
        if frames == 0 {
            return 0.0;
        }
        let channels = usize::from(self.channels);
        let frame = frame % frames;
        let channel = channel.min(channels - 1);
        self.samples[frame * channels + channel]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{WavSpec, WavWriter};

    fn write_wav(path: &Path, spec: WavSpec, samples: &[i16]) {
        let mut writer = WavWriter::create(path, spec).expect("create wav");
        for sample in samples {
            writer.write_sample(*sample).expect("write sample");
        }
        writer.finalize().expect("finalize wav");
    }

    fn stereo_16() -> WavSpec {
        WavSpec {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        }
    }

    #[test]
    fn decodes_integer_pcm_to_unit_range() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("song.wav");
        write_wav(&path, stereo_16(), &[16384, -16384, 0, 32767]);

        let track = Track::load(&path).expect("track loads");
        assert_eq!(track.channels(), 2);
        assert_eq!(track.frames(), 2);
        assert!((track.sample(0, 0) - 0.5).abs() < 1e-4);
        assert!((track.sample(0, 1) + 0.5).abs() < 1e-4);
        assert!(track.sample(1, 1) > 0.99);
    }

    #[test]
    fn sample_wraps_and_reuses_last_channel() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("mono.wav");
        let spec = WavSpec {
            channels: 1,
            ..stereo_16()
        };
        write_wav(&path, spec, &[100, 200, 300]);

        let track = Track::load(&path).expect("track loads");
        assert_eq!(track.sample(3, 0), track.sample(0, 0));
        assert_eq!(track.sample(1, 5), track.sample(1, 0));
    }

    #[test]
    fn empty_track_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("silence.wav");
        write_wav(&path, stereo_16(), &[]);

        assert!(matches!(
            Track::load(&path),
            Err(PlaybackError::EmptyTrack { .. })
        ));
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let result = Track::load(&dir.path().join("nope.wav"));
        assert!(matches!(result, Err(PlaybackError::TrackLoad { .. })));
    }
}
