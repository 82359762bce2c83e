//! Utility functions for loading payloads and formatting output.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use voicewire_core::AudioPayload;

/// Load a payload record from a JSON file on disk.
pub fn load_payload(path: &Path) -> Result<AudioPayload> {
    let json =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    AudioPayload::from_json(&json)
        .with_context(|| format!("{} is not a payload record", path.display()))
}

/// Format a byte count as a human-readable size.
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.0} KB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}

/// Format a millisecond duration, switching to seconds past one second.
pub fn format_duration_ms(ms: f32) -> String {
    if ms >= 1000.0 {
        format!("{:.2} s", ms / 1000.0)
    } else {
        format!("{ms:.1} ms")
    }
}
