//! FFprobe integration for media metadata extraction.
//!
//! This module runs ffprobe once per file, asking only for the container and
//! stream entries the site needs, and parses the JSON it prints.

use crate::error::{CoreError, CoreResult, command_start_error, probe_failed_error};
use crate::media::ProbeOutput;

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Default executable name, resolved through `PATH`.
pub const DEFAULT_FFPROBE: &str = "ffprobe";

/// Format-level entries requested from ffprobe.
pub const FORMAT_ENTRIES: &str = "format=duration,format_name,size";

/// Stream-level entries requested from ffprobe.
pub const STREAM_ENTRIES: &str = "stream=codec_name,codec_type,width,height,sample_rate,channels";

/// Something that can describe a media file.
///
/// The collector only depends on this trait, so tests can substitute canned
/// results for the external process.
pub trait Prober {
    /// Probes a single file. The path is not checked for existence first.
    fn probe(&self, input_path: &Path) -> CoreResult<ProbeOutput>;
}

impl<P: Prober + ?Sized> Prober for &P {
    fn probe(&self, input_path: &Path) -> CoreResult<ProbeOutput> {
        (**self).probe(input_path)
    }
}

/// Production prober that shells out to ffprobe.
#[derive(Debug, Clone)]
pub struct FfprobeProber {
    program: PathBuf,
}

impl Default for FfprobeProber {
    fn default() -> Self {
        Self::new(DEFAULT_FFPROBE)
    }
}

impl FfprobeProber {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The executable this prober runs.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments passed to ffprobe for one input file.
    pub fn probe_args(input_path: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = [
            "-v",
            "error",
            "-show_entries",
            FORMAT_ENTRIES,
            "-show_entries",
            STREAM_ENTRIES,
            "-of",
            "json",
        ]
        .iter()
        .map(OsString::from)
        .collect();
        args.push(input_path.as_os_str().to_os_string());
        args
    }

    /// First line of `ffprobe -version`.
    pub fn version(&self) -> CoreResult<String> {
        super::check_dependency(&self.program)
    }
}

impl Prober for FfprobeProber {
    fn probe(&self, input_path: &Path) -> CoreResult<ProbeOutput> {
        let mut cmd = Command::new(&self.program);
        cmd.args(Self::probe_args(input_path))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        super::log_command(&cmd);

        let child = cmd
            .spawn()
            .map_err(|e| command_start_error(self.program.display().to_string(), e))?;

        // Drains stdout and stderr together until the process exits.
        let output = child
            .wait_with_output()
            .map_err(|e| command_start_error(self.program.display().to_string(), e))?;

        if !output.status.success() {
            log::debug!(
                "ffprobe exited with {} for {}",
                output.status,
                input_path.display()
            );
            return Err(probe_failed_error(output.status, &output.stderr));
        }

        serde_json::from_slice(&output.stdout).map_err(CoreError::ProbeParse)
    }
}
