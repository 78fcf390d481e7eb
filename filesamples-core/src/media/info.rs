use serde::{Deserialize, Serialize};

use super::MediaClass;

/// Parsed output of a single ffprobe invocation.
///
/// Only the entries requested with `-show_entries` are modelled. ffprobe prints
/// `duration`, `size` and `sample_rate` as strings, so they stay textual here and
/// are converted when a [`MediaRecord`](super::MediaRecord) is built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProbeOutput {
    #[serde(default)]
    pub format: Option<FormatInfo>,

    #[serde(default)]
    pub streams: Vec<StreamInfo>,
}

/// Container-level properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormatInfo {
    pub format_name: Option<String>,
    pub duration: Option<String>,
    pub size: Option<String>,
}

/// Elementary stream properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamInfo {
    pub codec_name: Option<String>,
    pub codec_type: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub sample_rate: Option<String>,
    pub channels: Option<u32>,
}

impl ProbeOutput {
    /// Byte size from the format block. Missing or unparseable sizes count as 0.
    #[must_use]
    pub fn size_bytes(&self) -> u64 {
        self.format
            .as_ref()
            .and_then(|f| f.size.as_deref())
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(0)
    }

    /// Duration in seconds, if ffprobe reported a parseable one.
    #[must_use]
    pub fn duration_secs(&self) -> Option<f64> {
        self.format
            .as_ref()
            .and_then(|f| f.duration.as_deref())
            .and_then(|d| d.trim().parse::<f64>().ok())
            .filter(|d| d.is_finite())
    }

    #[must_use]
    pub fn format_name(&self) -> Option<&str> {
        self.format.as_ref().and_then(|f| f.format_name.as_deref())
    }

    /// First stream whose `codec_type` matches the class.
    #[must_use]
    pub fn first_stream(&self, class: MediaClass) -> Option<&StreamInfo> {
        self.streams
            .iter()
            .find(|s| s.codec_type.as_deref() == Some(class.codec_type()))
    }
}

impl StreamInfo {
    /// Sample rate in Hz.
    #[must_use]
    pub fn sample_rate_hz(&self) -> Option<u32> {
        self.sample_rate
            .as_deref()
            .and_then(|r| r.trim().parse::<u32>().ok())
    }
}
