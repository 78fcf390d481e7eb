//! Implementation of the 'probe' subcommand.
//!
//! Runs ffprobe on a single file and prints the record the collector would
//! write for it. Probe failures are reported as errors instead of falling back.

use crate::cli::ProbeArgs;
use crate::error::{CliErrorContext, CliResult};

use filesamples_core::{FfprobeProber, MediaRecord, Prober};

use std::path::PathBuf;

/// Runs the probe command and returns the pretty-printed record.
pub fn run_probe(args: &ProbeArgs, ffprobe: PathBuf) -> CliResult<String> {
    let prober = FfprobeProber::new(ffprobe);
    let output = prober
        .probe(&args.file)
        .cli_with_context(|| format!("Failed to probe '{}'", args.file.display()))?;

    let record = MediaRecord::from_probe(&args.file, &args.site_root, args.class, &output);
    Ok(serde_json::to_string_pretty(&record)?)
}
