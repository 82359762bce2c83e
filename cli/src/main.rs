//! Voicewire CLI - pack, unpack, and inspect PCM voice payloads.
//!
//! This binary stands in for the capture/playback/messaging layers around
//! `voicewire-core`: it drives the capture path (WAV file to payload JSON)
//! and the playback path (payload JSON to WAV file) end to end.
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `pack` | WAV file -> transport payload JSON |
//! | `unpack` | Transport payload JSON -> WAV file |
//! | `info` | Inspect a payload without writing audio |

mod commands;

use commands::{format_duration_ms, format_size, load_payload};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use voicewire_core::{read_wav_file, write_wav_file, AudioPayload, BYTES_PER_SAMPLE};

/// Voicewire CLI - PCM voice payload packer
#[derive(Parser)]
#[command(name = "voicewire")]
#[command(about = "Pack and unpack PCM voice payloads", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack one channel of a WAV file into a transport payload
    Pack {
        /// Input WAV file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output payload path (prints to stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Channel to take from multi-channel input (selected, never mixed)
        #[arg(long, value_name = "N", default_value_t = 0)]
        channel: u32,
    },
    /// Unpack a transport payload into a WAV file
    Unpack {
        /// Payload JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output WAV path
        #[arg(short, long, value_name = "FILE", default_value = "out.wav")]
        out: PathBuf,

        /// Channel count the payload bytes are interleaved across
        #[arg(long, value_name = "N", default_value_t = 1)]
        channels: u32,
    },
    /// Inspect a transport payload
    Info {
        /// Payload JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Channel count used to derive frame count and duration
        #[arg(long, value_name = "N", default_value_t = 1)]
        channels: u32,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    run_command(cli)
}

fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Pack {
            input,
            out,
            channel,
        } => handle_pack_command(&input, out.as_deref(), channel),
        Commands::Unpack {
            input,
            out,
            channels,
        } => handle_unpack_command(&input, &out, channels),
        Commands::Info { input, channels } => handle_info_command(&input, channels),
    }
}

/// Capture path: read a WAV file, select one channel, emit the payload.
fn handle_pack_command(input: &Path, out: Option<&Path>, channel: u32) -> Result<()> {
    let frames =
        read_wav_file(input).with_context(|| format!("Failed to read {}", input.display()))?;

    let samples = match frames.channel(channel) {
        Some(samples) => samples,
        None => bail!(
            "Channel {} out of range: {} has {} channel(s)",
            channel,
            input.display(),
            frames.channel_count()
        ),
    };
    if frames.channel_count() > 1 {
        log::info!(
            "selecting channel {} of {}, the rest are dropped",
            channel,
            frames.channel_count()
        );
    }

    let payload = AudioPayload::from_mono(samples, frames.sample_rate)
        .with_context(|| format!("Failed to pack {}", input.display()))?;
    let json = serde_json::to_string_pretty(&payload)?;

    match out {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "{} {} -> {} ({} samples, {})",
                "Packed".green().bold(),
                input.display(),
                path.display(),
                samples.len(),
                format_duration_ms(frames.duration_ms()),
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Playback path: open a payload and write it back out as a WAV file.
fn handle_unpack_command(input: &Path, out: &Path, channels: u32) -> Result<()> {
    let payload = load_payload(input)?;
    let frames = payload
        .to_frames(channels)
        .with_context(|| format!("Failed to unpack {}", input.display()))?;

    write_wav_file(out, &frames)
        .with_context(|| format!("Failed to write {}", out.display()))?;
    println!(
        "{} {} -> {} ({} frames x {} channel(s) at {} Hz, {})",
        "Unpacked".green().bold(),
        input.display(),
        out.display(),
        frames.frame_count(),
        frames.channel_count(),
        frames.sample_rate,
        format_duration_ms(frames.duration_ms()),
    );
    Ok(())
}

/// Inspect a payload: declared format, decoded size, derived frame layout.
fn handle_info_command(input: &Path, channels: u32) -> Result<()> {
    let payload = load_payload(input)?;
    let bytes = payload
        .decode_data()
        .context("Payload data is not valid transport text")?;
    let format = payload
        .pcm_format()
        .context("Payload format tag is unusable")?;
    let frames = payload
        .to_frames(channels)
        .with_context(|| format!("Payload does not interleave across {channels} channel(s)"))?;

    println!("{}", "Payload".bold().cyan());
    println!("{}", "=".repeat(60));
    println!("  {:<10} {}", "format:".cyan(), payload.mime_type);
    println!("  {:<10} {} Hz", "rate:".cyan(), format.sample_rate);
    println!(
        "  {:<10} {} encoded, {} decoded",
        "size:".cyan(),
        format_size(payload.data.len()),
        format_size(bytes.len()),
    );
    println!(
        "  {:<10} {}",
        "samples:".cyan(),
        bytes.len() / BYTES_PER_SAMPLE
    );
    println!(
        "  {:<10} {} x {} channel(s)",
        "frames:".cyan(),
        frames.frame_count(),
        frames.channel_count(),
    );
    println!(
        "  {:<10} {}",
        "duration:".cyan(),
        format_duration_ms(frames.duration_ms())
    );
    Ok(())
}
