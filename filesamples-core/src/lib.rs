//! Core library for collecting media metadata for the file samples site.
//!
//! This crate scans the site's video and audio directories, describes every
//! file with ffprobe, and writes one JSON document per media class for the
//! page templates to consume.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use filesamples_core::{Collector, FfprobeProber, run_pipeline};
//! use filesamples_core::config::PipelineConfigBuilder;
//! use std::path::PathBuf;
//!
//! let config = PipelineConfigBuilder::new()
//!     .site_root(PathBuf::from("website"))
//!     .data_dir(PathBuf::from("scripts"))
//!     .build();
//! config.validate().unwrap();
//!
//! let collector = Collector::new(FfprobeProber::new(&config.ffprobe));
//! let report = run_pipeline(&config, &collector).unwrap();
//! for phase in &report.phases {
//!     println!("{}: {} record(s)", phase.media_class, phase.recorded());
//! }
//! ```

pub mod collector;
pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod media;
pub mod pipeline;
pub mod utils;

// Re-exports for public API
pub use collector::{Collection, Collector, PhaseSummary, persist_records};
pub use config::{CollectorConfig, FallbackPolicy, PipelineConfig, PipelineConfigBuilder};
pub use discovery::find_media_files;
pub use error::{CoreError, CoreResult};
pub use external::{
    FfprobeProber, FileMetadataProvider, Prober, StdFsMetadataProvider, check_dependency,
};
pub use media::{MediaClass, MediaRecord, ProbeOutput};
pub use pipeline::{PipelineReport, run_phases, run_pipeline};
pub use utils::format_size;
