//! De-interleaved audio on its way to a playback sink.

/// Per-channel float samples plus the rate needed to play them.
///
/// One `Vec<f32>` per channel, all holding the same number of frames.
/// Code that assembles a buffer by hand keeps that alignment itself; the
/// WAV writer rejects ragged channels rather than padding them.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    /// One unit-range sample buffer per channel, frame-aligned.
    pub channels: Vec<Vec<f32>>,
    /// Playback rate in frames per second.
    pub sample_rate: u32,
}

impl FrameBuffer {
    /// Wraps per-channel buffers with their playback rate.
    pub fn new(channels: Vec<Vec<f32>>, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
        }
    }

    /// Number of channels.
    pub fn channel_count(&self) -> u32 {
        self.channels.len() as u32
    }

    /// Number of frames (samples per channel).
    pub fn frame_count(&self) -> usize {
        self.channels.first().map(Vec::len).unwrap_or(0)
    }

    /// One channel's samples, or `None` when the index is out of range.
    pub fn channel(&self, index: u32) -> Option<&[f32]> {
        self.channels.get(index as usize).map(Vec::as_slice)
    }

    /// Playback duration in milliseconds.
    pub fn duration_ms(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frame_count() as f32 / self.sample_rate as f32 * 1000.0
    }

    /// True when the buffer holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_and_channel_counts() {
        let frames = FrameBuffer::new(vec![vec![0.0; 320], vec![0.0; 320]], 16000);
        assert_eq!(frames.channel_count(), 2);
        assert_eq!(frames.frame_count(), 320);
        assert!(!frames.is_empty());
    }

    #[test]
    fn test_duration_one_second_at_16khz() {
        let frames = FrameBuffer::new(vec![vec![0.0; 16000]], 16000);
        assert_eq!(frames.duration_ms(), 1000.0);
    }

    #[test]
    fn test_empty_buffer() {
        let frames = FrameBuffer::new(vec![], 16000);
        assert_eq!(frames.channel_count(), 0);
        assert_eq!(frames.frame_count(), 0);
        assert!(frames.is_empty());
        assert_eq!(frames.duration_ms(), 0.0);
    }

    #[test]
    fn test_channel_accessor() {
        let frames = FrameBuffer::new(vec![vec![0.5, -0.5], vec![0.25, -0.25]], 8000);
        assert_eq!(frames.channel(1), Some(&[0.25, -0.25][..]));
        assert_eq!(frames.channel(2), None);
    }
}
