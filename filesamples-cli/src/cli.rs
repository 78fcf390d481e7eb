// filesamples-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Args, Parser, Subcommand};
use filesamples_core::MediaClass;
use filesamples_core::config::{DEFAULT_DATA_DIR, DEFAULT_SITE_ROOT};
use filesamples_core::external::DEFAULT_FFPROBE;
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "filesamples: media metadata for the file samples site",
    long_about = "Scans the site's video and audio directories with ffprobe and writes \
                  the JSON data files used by the page templates."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// ffprobe executable to run.
    /// Can also be set via the FILESAMPLES_FFPROBE environment variable.
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        env = "FILESAMPLES_FFPROBE",
        default_value = DEFAULT_FFPROBE
    )]
    pub ffprobe: PathBuf,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write log output to this file
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Probes every video and audio file and writes the JSON data files
    Collect(CollectArgs),
    /// Probes a single file and prints its record
    Probe(ProbeArgs),
}

#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Site root; relative paths in the records are computed against it
    #[arg(long, value_name = "DIR", default_value = DEFAULT_SITE_ROOT)]
    pub site_root: PathBuf,

    /// Directory receiving video.json and audio.json
    #[arg(long, value_name = "DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Optional: video directory (defaults to SITE_ROOT/files/video)
    #[arg(long, value_name = "DIR")]
    pub video_dir: Option<PathBuf>,

    /// Optional: audio directory (defaults to SITE_ROOT/files/audio)
    #[arg(long, value_name = "DIR")]
    pub audio_dir: Option<PathBuf>,

    /// Optional: video output file (defaults to DATA_DIR/video.json)
    #[arg(long, value_name = "FILE")]
    pub video_output: Option<PathBuf>,

    /// Optional: audio output file (defaults to DATA_DIR/audio.json)
    #[arg(long, value_name = "FILE")]
    pub audio_output: Option<PathBuf>,

    /// Keep videos that fail probing, using their file size (dropped by default)
    #[arg(long)]
    pub video_fallback: bool,

    /// Only collect one media class (video or audio)
    #[arg(long, value_name = "CLASS")]
    pub only: Option<MediaClass>,
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Media file to probe
    #[arg(required = true, value_name = "FILE")]
    pub file: PathBuf,

    /// Media class whose stream fields are reported (video or audio)
    #[arg(long, value_name = "CLASS", default_value = "video")]
    pub class: MediaClass,

    /// Site root used for the record's relative path
    #[arg(long, value_name = "DIR", default_value = DEFAULT_SITE_ROOT)]
    pub site_root: PathBuf,
}
