// ============================================================================
// filesamples-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for PipelineConfig
//
// Every path has a default derived from the site root and the data directory;
// explicit overrides win over the derived defaults regardless of the order in
// which the setters are called.

// ---- Standard library imports ----
use std::path::PathBuf;

// ---- Internal crate imports ----
use super::{
    CollectorConfig, DEFAULT_DATA_DIR, DEFAULT_SITE_ROOT, FallbackPolicy, PipelineConfig,
    default_ffprobe, default_input_dir, default_output_file,
};
use crate::media::MediaClass;

/// Builder for creating PipelineConfig instances.
///
/// # Examples
///
/// ```rust
/// use filesamples_core::config::PipelineConfigBuilder;
/// use std::path::PathBuf;
///
/// let config = PipelineConfigBuilder::new()
///     .site_root(PathBuf::from("/srv/website"))
///     .audio_dir(PathBuf::from("/mnt/recordings"))
///     .ffprobe(PathBuf::from("/opt/ffmpeg/bin/ffprobe"))
///     .build();
///
/// assert_eq!(config.video.input_dir, PathBuf::from("/srv/website/files/video"));
/// assert_eq!(config.audio.input_dir, PathBuf::from("/mnt/recordings"));
/// ```
#[derive(Debug, Clone)]
pub struct PipelineConfigBuilder {
    site_root: PathBuf,
    data_dir: PathBuf,
    video_dir: Option<PathBuf>,
    audio_dir: Option<PathBuf>,
    video_output: Option<PathBuf>,
    audio_output: Option<PathBuf>,
    video_fallback: FallbackPolicy,
    audio_fallback: FallbackPolicy,
    ffprobe: PathBuf,
}

impl Default for PipelineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineConfigBuilder {
    /// Creates a new builder with the default site layout.
    pub fn new() -> Self {
        Self {
            site_root: PathBuf::from(DEFAULT_SITE_ROOT),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            video_dir: None,
            audio_dir: None,
            video_output: None,
            audio_output: None,
            video_fallback: FallbackPolicy::default_for(MediaClass::Video),
            audio_fallback: FallbackPolicy::default_for(MediaClass::Audio),
            ffprobe: default_ffprobe(),
        }
    }

    /// Sets the site root used for relative paths and default input directories.
    pub fn site_root(mut self, site_root: PathBuf) -> Self {
        self.site_root = site_root;
        self
    }

    /// Sets the directory receiving `video.json` and `audio.json`.
    pub fn data_dir(mut self, data_dir: PathBuf) -> Self {
        self.data_dir = data_dir;
        self
    }

    /// Overrides the scanned video directory.
    pub fn video_dir(mut self, dir: PathBuf) -> Self {
        self.video_dir = Some(dir);
        self
    }

    /// Overrides the scanned audio directory.
    pub fn audio_dir(mut self, dir: PathBuf) -> Self {
        self.audio_dir = Some(dir);
        self
    }

    pub fn video_output(mut self, file: PathBuf) -> Self {
        self.video_output = Some(file);
        self
    }

    pub fn audio_output(mut self, file: PathBuf) -> Self {
        self.audio_output = Some(file);
        self
    }

    pub fn video_fallback(mut self, policy: FallbackPolicy) -> Self {
        self.video_fallback = policy;
        self
    }

    pub fn audio_fallback(mut self, policy: FallbackPolicy) -> Self {
        self.audio_fallback = policy;
        self
    }

    /// Sets the ffprobe executable (a bare name is resolved through `PATH`).
    pub fn ffprobe(mut self, ffprobe: PathBuf) -> Self {
        self.ffprobe = ffprobe;
        self
    }

    /// Builds the PipelineConfig. Call [`PipelineConfig::validate`] before use.
    pub fn build(self) -> PipelineConfig {
        let video = CollectorConfig {
            media_class: MediaClass::Video,
            input_dir: self
                .video_dir
                .unwrap_or_else(|| default_input_dir(&self.site_root, MediaClass::Video)),
            output_file: self
                .video_output
                .unwrap_or_else(|| default_output_file(&self.data_dir, MediaClass::Video)),
            site_root: self.site_root.clone(),
            fallback: self.video_fallback,
        };
        let audio = CollectorConfig {
            media_class: MediaClass::Audio,
            input_dir: self
                .audio_dir
                .unwrap_or_else(|| default_input_dir(&self.site_root, MediaClass::Audio)),
            output_file: self
                .audio_output
                .unwrap_or_else(|| default_output_file(&self.data_dir, MediaClass::Audio)),
            site_root: self.site_root.clone(),
            fallback: self.audio_fallback,
        };

        PipelineConfig {
            site_root: self.site_root,
            video,
            audio,
            ffprobe: self.ffprobe,
        }
    }
}
