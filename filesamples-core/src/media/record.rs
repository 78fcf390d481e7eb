//! The normalized per-file metadata record written to the site's data files.
//!
//! JSON keys follow the contract of the page templates (`ext`, `path`,
//! `sizeFormat`, `video_codec`, ...). Absent values serialize as `null`.

use std::path::Path;

use serde::Serialize;

use super::{MediaClass, ProbeOutput};
use crate::utils::{extension_for, format_size, identifier_for, site_relative_path, title_for};

/// Metadata for one discovered media file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaRecord {
    pub title: String,
    pub filename: String,
    #[serde(rename = "ext")]
    pub extension: String,
    #[serde(rename = "path")]
    pub relative_path: String,
    pub format: Option<String>,
    #[serde(rename = "duration")]
    pub duration_secs: Option<f64>,
    #[serde(rename = "size")]
    pub size_bytes: Option<u64>,
    #[serde(rename = "sizeFormat")]
    pub size_human: Option<String>,
    #[serde(flatten)]
    pub details: MediaDetails,
}

/// Class-specific stream fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MediaDetails {
    Video(VideoDetails),
    Audio(AudioDetails),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VideoDetails {
    pub video_codec: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AudioDetails {
    pub audio_codec: Option<String>,
    pub sample_rate: Option<u32>,
    pub channels: Option<u32>,
}

impl MediaDetails {
    /// Details with every field absent.
    #[must_use]
    pub fn empty(class: MediaClass) -> Self {
        match class {
            MediaClass::Video => MediaDetails::Video(VideoDetails::default()),
            MediaClass::Audio => MediaDetails::Audio(AudioDetails::default()),
        }
    }

    /// Reads the class fields from the first stream of the matching type.
    #[must_use]
    pub fn from_probe(class: MediaClass, probe: &ProbeOutput) -> Self {
        let Some(stream) = probe.first_stream(class) else {
            return Self::empty(class);
        };
        match class {
            MediaClass::Video => MediaDetails::Video(VideoDetails {
                video_codec: stream.codec_name.clone(),
                width: stream.width,
                height: stream.height,
            }),
            MediaClass::Audio => MediaDetails::Audio(AudioDetails {
                audio_codec: stream.codec_name.clone(),
                sample_rate: stream.sample_rate_hz(),
                channels: stream.channels,
            }),
        }
    }
}

impl MediaRecord {
    /// A record carrying only the path-derived fields. Every metadata field is absent.
    #[must_use]
    pub fn identity(path: &Path, site_root: &Path, class: MediaClass) -> Self {
        Self {
            title: title_for(path),
            filename: identifier_for(path),
            extension: extension_for(path),
            relative_path: site_relative_path(path, site_root),
            format: None,
            duration_secs: None,
            size_bytes: None,
            size_human: None,
            details: MediaDetails::empty(class),
        }
    }

    /// A record built from a successful probe.
    #[must_use]
    pub fn from_probe(path: &Path, site_root: &Path, class: MediaClass, probe: &ProbeOutput) -> Self {
        let size = probe.size_bytes();
        Self {
            format: probe.format_name().map(str::to_string),
            duration_secs: probe.duration_secs(),
            size_bytes: Some(size),
            size_human: Some(format_size(size)),
            details: MediaDetails::from_probe(class, probe),
            ..Self::identity(path, site_root, class)
        }
    }

    /// A record carrying only the raw file-system size.
    #[must_use]
    pub fn size_only(path: &Path, site_root: &Path, class: MediaClass, size: u64) -> Self {
        Self {
            size_bytes: Some(size),
            size_human: Some(format_size(size)),
            ..Self::identity(path, site_root, class)
        }
    }
}
