//! WAV container import/export for frame buffers.
//!
//! Moves samples between a container and memory, nothing more: no
//! resampling, no channel mixing. Reads accept 16-bit integer and 32-bit
//! float layouts; writes always produce 16-bit integer PCM through the
//! same clamp-and-scale quantization as the transport path.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Seek, Write};
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::debug;
use thiserror::Error;

use crate::audio::frame::FrameBuffer;
use crate::audio::pcm::{self, InvalidSampleError, DECODE_SCALE};

/// A WAV container could not be read or written.
#[derive(Debug, Error)]
pub enum WavError {
    /// Only 16-bit integer and 32-bit float layouts are readable.
    #[error("unsupported wav layout: {bits}-bit {format:?} samples")]
    UnsupportedLayout { bits: u16, format: SampleFormat },

    /// The container's sample count does not fill whole frames.
    #[error("wav data holds {samples} sample(s), not whole {channels}-channel frames")]
    PartialFrame { samples: u32, channels: u16 },

    /// The wav header stores the channel count in 16 bits.
    #[error("channel count {0} does not fit a wav header")]
    UnsupportedChannelCount(u32),

    /// Input channel buffers disagree on frame count.
    #[error("channel buffers have unequal frame counts")]
    RaggedChannels,

    #[error(transparent)]
    Sample(#[from] InvalidSampleError),

    #[error("wav container error: {0}")]
    Container(#[from] hound::Error),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

/// Reads a wav stream into per-channel unit-range buffers.
///
/// 16-bit integer samples are scaled by `1 /` [`DECODE_SCALE`]; 32-bit
/// float samples pass through unchanged.
pub fn read_wav<R: Read>(reader: R) -> Result<FrameBuffer, WavError> {
    let mut wav = WavReader::new(reader)?;
    let spec = wav.spec();
    if spec.channels == 0 {
        return Err(WavError::UnsupportedChannelCount(0));
    }
    if wav.len() % spec.channels as u32 != 0 {
        return Err(WavError::PartialFrame {
            samples: wav.len(),
            channels: spec.channels,
        });
    }

    let num_channels = spec.channels as usize;
    let frame_count = (wav.len() / spec.channels as u32) as usize;
    let mut channels: Vec<Vec<f32>> = (0..num_channels)
        .map(|_| Vec::with_capacity(frame_count))
        .collect();

    match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Int, 16) => {
            for (i, sample) in wav.samples::<i16>().enumerate() {
                channels[i % num_channels].push(sample? as f32 / DECODE_SCALE);
            }
        }
        (SampleFormat::Float, 32) => {
            for (i, sample) in wav.samples::<f32>().enumerate() {
                channels[i % num_channels].push(sample?);
            }
        }
        (format, bits) => return Err(WavError::UnsupportedLayout { bits, format }),
    }

    Ok(FrameBuffer::new(channels, spec.sample_rate))
}

/// Writes frames as 16-bit integer PCM.
///
/// # Errors
///
/// [`WavError::RaggedChannels`] when the channel buffers disagree on frame
/// count, [`WavError::Sample`] when a sample is non-finite, and container
/// or i/o failures from the underlying writer.
pub fn write_wav<W: Write + Seek>(writer: W, frames: &FrameBuffer) -> Result<(), WavError> {
    let channel_count = frames.channel_count();
    if channel_count == 0 {
        return Err(WavError::UnsupportedChannelCount(0));
    }
    let channels = u16::try_from(channel_count)
        .map_err(|_| WavError::UnsupportedChannelCount(channel_count))?;
    let frame_count = frames.frame_count();
    if frames.channels.iter().any(|c| c.len() != frame_count) {
        return Err(WavError::RaggedChannels);
    }

    let spec = WavSpec {
        channels,
        sample_rate: frames.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut wav = WavWriter::new(writer, spec)?;
    for i in 0..frame_count {
        for channel in &frames.channels {
            wav.write_sample(pcm::quantize_sample(i, channel[i])?)?;
        }
    }
    wav.finalize()?;
    Ok(())
}

/// Reads a wav file from disk.
pub fn read_wav_file<P: AsRef<Path>>(path: P) -> Result<FrameBuffer, WavError> {
    let path = path.as_ref();
    let frames = read_wav(BufReader::new(File::open(path)?))?;
    debug!(
        "read {} ({} ch, {} frames, {} Hz)",
        path.display(),
        frames.channel_count(),
        frames.frame_count(),
        frames.sample_rate
    );
    Ok(frames)
}

/// Writes a wav file to disk.
pub fn write_wav_file<P: AsRef<Path>>(path: P, frames: &FrameBuffer) -> Result<(), WavError> {
    let path = path.as_ref();
    write_wav(BufWriter::new(File::create(path)?), frames)?;
    debug!(
        "wrote {} ({} ch, {} frames, {} Hz)",
        path.display(),
        frames.channel_count(),
        frames.frame_count(),
        frames.sample_rate
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Builds a minimal PCM wav byte stream: RIFF header, fmt chunk, data.
    fn raw_wav(channels: u16, sample_rate: u32, samples: &[i16]) -> Vec<u8> {
        let data_len = (samples.len() * 2) as u32;
        let mut bytes = Vec::with_capacity(44 + data_len as usize);
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
        bytes.extend_from_slice(b"WAVE");
        bytes.extend_from_slice(b"fmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM format tag
        bytes.extend_from_slice(&channels.to_le_bytes());
        bytes.extend_from_slice(&sample_rate.to_le_bytes());
        bytes.extend_from_slice(&(sample_rate * channels as u32 * 2).to_le_bytes());
        bytes.extend_from_slice(&(channels * 2).to_le_bytes());
        bytes.extend_from_slice(&16u16.to_le_bytes());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&data_len.to_le_bytes());
        for sample in samples {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_read_pcm16_deinterleaves_and_scales() {
        let bytes = raw_wav(2, 16000, &[0, 100, 32767, -32768]);
        let frames = read_wav(Cursor::new(bytes)).unwrap();

        assert_eq!(frames.sample_rate, 16000);
        assert_eq!(frames.channel_count(), 2);
        assert_eq!(frames.channel(0), Some(&[0.0, 32767.0 / 32768.0][..]));
        assert_eq!(frames.channel(1), Some(&[100.0 / 32768.0, -1.0][..]));
    }

    #[test]
    fn test_read_rejects_partial_final_frame() {
        let bytes = raw_wav(2, 16000, &[1, 2, 3]);
        let err = read_wav(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(
            err,
            WavError::PartialFrame {
                samples: 3,
                channels: 2
            }
        ));
    }

    #[test]
    fn test_read_float32_passes_through() {
        let spec = WavSpec {
            channels: 1,
            sample_rate: 48000,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        };
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = WavWriter::new(&mut cursor, spec).unwrap();
        for sample in [0.5f32, -0.25, 1.0] {
            writer.write_sample(sample).unwrap();
        }
        writer.finalize().unwrap();
        cursor.set_position(0);

        let frames = read_wav(cursor).unwrap();
        assert_eq!(frames.sample_rate, 48000);
        assert_eq!(frames.channel(0), Some(&[0.5, -0.25, 1.0][..]));
    }

    #[test]
    fn test_read_rejects_unsupported_layout() {
        let spec = WavSpec {
            channels: 1,
            sample_rate: 8000,
            bits_per_sample: 8,
            sample_format: SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = WavWriter::new(&mut cursor, spec).unwrap();
        writer.write_sample(0i8).unwrap();
        writer.finalize().unwrap();
        cursor.set_position(0);

        let err = read_wav(cursor).unwrap_err();
        assert!(matches!(
            err,
            WavError::UnsupportedLayout {
                bits: 8,
                format: SampleFormat::Int
            }
        ));
    }

    #[test]
    fn test_write_then_read_preserves_exact_values() {
        // Values of the form k/32768 with |k| <= 16384 survive the
        // quantize/dequantize pair exactly.
        let frames = FrameBuffer::new(
            vec![vec![0.0, 0.5, -0.5], vec![0.25, 100.0 / 32768.0, -0.125]],
            22050,
        );
        let mut cursor = Cursor::new(Vec::new());
        write_wav(&mut cursor, &frames).unwrap();
        cursor.set_position(0);

        let back = read_wav(cursor).unwrap();
        assert_eq!(back.sample_rate, 22050);
        assert_eq!(back.channel(0), Some(&[0.0, 0.5, -0.5][..]));
        assert_eq!(
            back.channel(1),
            Some(&[0.25, 100.0 / 32768.0, -0.125][..])
        );
    }

    #[test]
    fn test_write_rejects_ragged_channels() {
        let frames = FrameBuffer::new(vec![vec![0.0; 2], vec![0.0; 3]], 16000);
        let err = write_wav(Cursor::new(Vec::new()), &frames).unwrap_err();
        assert!(matches!(err, WavError::RaggedChannels));
    }

    #[test]
    fn test_write_rejects_zero_channels() {
        let frames = FrameBuffer::new(vec![], 16000);
        let err = write_wav(Cursor::new(Vec::new()), &frames).unwrap_err();
        assert!(matches!(err, WavError::UnsupportedChannelCount(0)));
    }

    #[test]
    fn test_write_rejects_non_finite_sample() {
        let frames = FrameBuffer::new(vec![vec![0.0, f32::NAN]], 16000);
        let err = write_wav(Cursor::new(Vec::new()), &frames).unwrap_err();
        match err {
            WavError::Sample(inner) => assert_eq!(inner.index, 1),
            other => panic!("expected sample error, got {other:?}"),
        }
    }

    #[test]
    fn test_file_helpers_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("tone.wav");

        let frames = FrameBuffer::new(vec![vec![0.0, 0.25, -0.25, 0.5]], 16000);
        write_wav_file(&path, &frames).unwrap();

        let back = read_wav_file(&path).unwrap();
        assert_eq!(back, frames);
    }

    #[test]
    fn test_read_file_missing_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = read_wav_file(dir.path().join("absent.wav")).unwrap_err();
        assert!(matches!(err, WavError::Io(_)));
    }
}
