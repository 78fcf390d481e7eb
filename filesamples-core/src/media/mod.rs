//! Media classes, probe output structures and normalized metadata records.
//!
//! The collector works on one [`MediaClass`] at a time. The class decides which
//! `codec_type` is looked up in the probe output and which class-specific fields
//! end up in a [`MediaRecord`].

pub mod info;
pub mod record;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// Re-export commonly used types
pub use info::{FormatInfo, ProbeOutput, StreamInfo};
pub use record::{AudioDetails, MediaDetails, MediaRecord, VideoDetails};

/// The two kinds of media the site publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaClass {
    Video,
    Audio,
}

impl MediaClass {
    /// Both classes in the order the pipeline processes them.
    pub const ALL: [MediaClass; 2] = [MediaClass::Video, MediaClass::Audio];

    /// The ffprobe `codec_type` of the stream this class reads its fields from.
    #[must_use]
    pub fn codec_type(self) -> &'static str {
        match self {
            MediaClass::Video => "video",
            MediaClass::Audio => "audio",
        }
    }
}

impl fmt::Display for MediaClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.codec_type())
    }
}

impl FromStr for MediaClass {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "video" => Ok(MediaClass::Video),
            "audio" => Ok(MediaClass::Audio),
            other => Err(CoreError::Config(format!(
                "Unknown media class '{other}' (expected 'video' or 'audio')"
            ))),
        }
    }
}
