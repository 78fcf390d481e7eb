//! Configuration structures and constants for the filesamples-core library.
//!
//! Paths are passed explicitly through [`PipelineConfig`] and
//! [`CollectorConfig`] rather than derived from process-wide constants. The
//! defaults reproduce the site layout: media under `<site_root>/files/<class>`
//! and data files under `<data_dir>/<class>.json`.

mod builder;

use std::path::{Component, Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::external::DEFAULT_FFPROBE;
use crate::media::MediaClass;

pub use builder::PipelineConfigBuilder;

// Default constants

/// Default site root, relative to the working directory.
pub const DEFAULT_SITE_ROOT: &str = "website";

/// Directory under the site root holding one sub-directory per media class.
pub const MEDIA_FILES_DIR: &str = "files";

/// Default directory for the generated JSON data files.
pub const DEFAULT_DATA_DIR: &str = "scripts";

/// What the collector does with a file whose probe failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Log the failure and leave the file out of the output.
    Drop,
    /// Fall back to the raw file size, then to a path-only record.
    SizeOnly,
}

impl FallbackPolicy {
    /// Video files are dropped on failure; audio files fall back to their size.
    #[must_use]
    pub fn default_for(class: MediaClass) -> Self {
        match class {
            MediaClass::Video => FallbackPolicy::Drop,
            MediaClass::Audio => FallbackPolicy::SizeOnly,
        }
    }
}

/// Settings for one collector phase (one media class).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    pub media_class: MediaClass,

    /// Directory scanned (non-recursively) for media files
    pub input_dir: PathBuf,

    /// JSON document overwritten with the collected records
    pub output_file: PathBuf,

    /// Prefix stripped from file paths to build the site-relative `path` field
    pub site_root: PathBuf,

    pub fallback: FallbackPolicy,
}

impl CollectorConfig {
    /// Default layout for `class` under the given site root and data directory.
    pub fn for_site(class: MediaClass, site_root: &Path, data_dir: &Path) -> Self {
        Self {
            media_class: class,
            input_dir: default_input_dir(site_root, class),
            output_file: default_output_file(data_dir, class),
            site_root: site_root.to_path_buf(),
            fallback: FallbackPolicy::default_for(class),
        }
    }
}

/// `<site_root>/files/<class>`
#[must_use]
pub fn default_input_dir(site_root: &Path, class: MediaClass) -> PathBuf {
    site_root.join(MEDIA_FILES_DIR).join(class.codec_type())
}

/// `<data_dir>/<class>.json`
#[must_use]
pub fn default_output_file(data_dir: &Path, class: MediaClass) -> PathBuf {
    data_dir.join(format!("{}.json", class.codec_type()))
}

/// Configuration of a full pipeline run (video phase, then audio phase).
///
/// # Examples
///
/// ```rust
/// use filesamples_core::config::{FallbackPolicy, PipelineConfigBuilder};
/// use std::path::PathBuf;
///
/// let config = PipelineConfigBuilder::new()
///     .site_root(PathBuf::from("website"))
///     .data_dir(PathBuf::from("scripts"))
///     .video_fallback(FallbackPolicy::SizeOnly)
///     .build();
/// config.validate().unwrap();
/// assert_eq!(config.audio.output_file, PathBuf::from("scripts/audio.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub site_root: PathBuf,
    pub video: CollectorConfig,
    pub audio: CollectorConfig,

    /// ffprobe executable
    pub ffprobe: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfigBuilder::new().build()
    }
}

impl PipelineConfig {
    /// The phase configuration for a media class.
    #[must_use]
    pub fn collector(&self, class: MediaClass) -> &CollectorConfig {
        match class {
            MediaClass::Video => &self.video,
            MediaClass::Audio => &self.audio,
        }
    }

    /// Checks that the phase configurations are consistent.
    pub fn validate(&self) -> CoreResult<()> {
        for class in MediaClass::ALL {
            let collector = self.collector(class);
            if collector.media_class != class {
                return Err(CoreError::Config(format!(
                    "{class} phase is configured for {} files",
                    collector.media_class
                )));
            }
            if collector.output_file.as_os_str().is_empty() {
                return Err(CoreError::Config(format!(
                    "{class} output file must not be empty"
                )));
            }
        }
        if without_cur_dir(&self.video.output_file) == without_cur_dir(&self.audio.output_file) {
            return Err(CoreError::Config(format!(
                "video and audio records would overwrite the same file '{}'",
                self.video.output_file.display()
            )));
        }
        if self.ffprobe.as_os_str().is_empty() {
            return Err(CoreError::Config("ffprobe path must not be empty".to_string()));
        }
        Ok(())
    }
}

/// Drops `.` components so that `scripts/a.json` and `./scripts/a.json` compare equal.
fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

pub(crate) fn default_ffprobe() -> PathBuf {
    PathBuf::from(DEFAULT_FFPROBE)
}
