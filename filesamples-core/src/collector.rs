// ============================================================================
// filesamples-core/src/collector.rs
// ============================================================================
//
// COLLECTOR: Per-Class Metadata Collection and Persistence
//
// The collector walks one media directory, probes each file in turn, builds a
// MediaRecord per file and writes the resulting list as a JSON document.
//
// FAILURE HANDLING:
// A failed probe is logged and handed to the class's FallbackPolicy:
// - Drop: the file is left out of the output
// - SizeOnly: tier 1 reads the raw file size; if that read fails too, tier 2
//   keeps a record with only the path-derived fields
// Path-derived fields never depend on probing.

// ---- Internal crate imports ----
use crate::config::{CollectorConfig, FallbackPolicy};
use crate::discovery::find_media_files;
use crate::error::{CoreError, CoreResult};
use crate::external::{FileMetadataProvider, Prober, StdFsMetadataProvider};
use crate::media::{MediaClass, MediaRecord};
use crate::utils::file_name_lossy;

// ---- Standard library imports ----
use std::fs;
use std::path::{Path, PathBuf};

/// Counters describing one collector phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseSummary {
    pub media_class: MediaClass,
    pub output_file: PathBuf,
    /// Files found in the input directory
    pub discovered: usize,
    /// Records built from a successful probe
    pub probed: usize,
    /// Records built from the raw file size after a failed probe
    pub size_fallbacks: usize,
    /// Records carrying only path-derived fields
    pub path_only_fallbacks: usize,
    /// Files left out after a failed probe
    pub dropped: usize,
    /// Whether the JSON document was written
    pub persisted: bool,
}

impl PhaseSummary {
    fn new(config: &CollectorConfig) -> Self {
        Self {
            media_class: config.media_class,
            output_file: config.output_file.clone(),
            discovered: 0,
            probed: 0,
            size_fallbacks: 0,
            path_only_fallbacks: 0,
            dropped: 0,
            persisted: false,
        }
    }

    /// Number of records in the output list.
    #[must_use]
    pub fn recorded(&self) -> usize {
        self.probed + self.size_fallbacks + self.path_only_fallbacks
    }

    /// Number of files whose probe failed.
    #[must_use]
    pub fn probe_failures(&self) -> usize {
        self.size_fallbacks + self.path_only_fallbacks + self.dropped
    }
}

/// The ordered records of one phase together with its counters.
#[derive(Debug, Clone)]
pub struct Collection {
    pub records: Vec<MediaRecord>,
    pub summary: PhaseSummary,
}

/// Drives a [`Prober`] over a media directory.
#[derive(Debug, Clone)]
pub struct Collector<P, M = StdFsMetadataProvider> {
    prober: P,
    metadata: M,
}

impl<P: Prober> Collector<P, StdFsMetadataProvider> {
    /// Creates a collector reading fallback sizes from the file system.
    pub fn new(prober: P) -> Self {
        Self::with_metadata_provider(prober, StdFsMetadataProvider)
    }
}

impl<P: Prober, M: FileMetadataProvider> Collector<P, M> {
    pub fn with_metadata_provider(prober: P, metadata: M) -> Self {
        Self { prober, metadata }
    }

    /// Builds the records for every file of the configured directory.
    ///
    /// Only a failure to list the directory is returned as an error; per-file
    /// failures are logged and resolved by the fallback policy.
    pub fn collect(&self, config: &CollectorConfig) -> CoreResult<Collection> {
        let files = find_media_files(&config.input_dir)?;
        let mut summary = PhaseSummary::new(config);
        summary.discovered = files.len();

        log::info!(
            "Found {} {} file(s) in {}",
            files.len(),
            config.media_class,
            config.input_dir.display()
        );

        let mut records = Vec::with_capacity(files.len());
        for path in &files {
            if let Some(record) = self.describe(path, config, &mut summary) {
                records.push(record);
            }
        }

        Ok(Collection { records, summary })
    }

    /// Probes one file and applies the fallback policy on failure.
    fn describe(
        &self,
        path: &Path,
        config: &CollectorConfig,
        summary: &mut PhaseSummary,
    ) -> Option<MediaRecord> {
        let class = config.media_class;

        match self.prober.probe(path) {
            Ok(probe) => {
                log::debug!("Probed {}", path.display());
                summary.probed += 1;
                Some(MediaRecord::from_probe(path, &config.site_root, class, &probe))
            }
            Err(err) => {
                log::error!("Error reading {} : {}", file_name_lossy(path), err);
                match config.fallback {
                    FallbackPolicy::Drop => {
                        log::warn!("Leaving {} out of the {} list", file_name_lossy(path), class);
                        summary.dropped += 1;
                        None
                    }
                    FallbackPolicy::SizeOnly => Some(self.fallback_record(path, config, summary)),
                }
            }
        }
    }

    /// Tier 1: raw file size. Tier 2: path-derived fields only.
    fn fallback_record(
        &self,
        path: &Path,
        config: &CollectorConfig,
        summary: &mut PhaseSummary,
    ) -> MediaRecord {
        let class = config.media_class;

        let size = self
            .metadata
            .get_size(path)
            .map_err(|source| CoreError::FallbackRead {
                path: path.to_path_buf(),
                source,
            });

        match size {
            Ok(size) => {
                log::warn!(
                    "Using file size only for {} ({} bytes)",
                    file_name_lossy(path),
                    size
                );
                summary.size_fallbacks += 1;
                MediaRecord::size_only(path, &config.site_root, class, size)
            }
            Err(err) => {
                log::error!("Error reading file stats for {} : {}", file_name_lossy(path), err);
                summary.path_only_fallbacks += 1;
                MediaRecord::identity(path, &config.site_root, class)
            }
        }
    }

    /// Collects and persists one phase.
    ///
    /// A persist failure is logged and reported through
    /// [`PhaseSummary::persisted`]; it is never returned as an error.
    pub fn run(&self, config: &CollectorConfig) -> CoreResult<PhaseSummary> {
        let Collection {
            records,
            mut summary,
        } = self.collect(config)?;

        match persist_records(&records, &config.output_file) {
            Ok(()) => {
                summary.persisted = true;
                log::info!(
                    "Saved {} {} record(s) to {}",
                    records.len(),
                    config.media_class,
                    config.output_file.display()
                );
            }
            Err(err) => log::error!("Failed to save {} records: {}", config.media_class, err),
        }

        Ok(summary)
    }
}

/// Writes records as a two-space indented JSON array, replacing the file.
pub fn persist_records(records: &[MediaRecord], output_file: &Path) -> CoreResult<()> {
    let persist_error = |reason: String| CoreError::Persist {
        path: output_file.to_path_buf(),
        reason,
    };

    let mut json = serde_json::to_string_pretty(records).map_err(|e| persist_error(e.to_string()))?;
    json.push('\n');

    if let Some(parent) = output_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| persist_error(e.to_string()))?;
    }
    fs::write(output_file, json).map_err(|e| persist_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ProbeOutput;
    use std::io;

    struct FailingProber;

    impl Prober for FailingProber {
        fn probe(&self, _input_path: &Path) -> CoreResult<ProbeOutput> {
            Err(CoreError::ProbeFailed {
                status: Some(1),
                stderr: "Invalid data found when processing input".to_string(),
            })
        }
    }

    struct UnreadableSizes;

    impl FileMetadataProvider for UnreadableSizes {
        fn get_size(&self, _path: &Path) -> io::Result<u64> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    fn config(dir: &Path, class: MediaClass, fallback: FallbackPolicy) -> CollectorConfig {
        CollectorConfig {
            media_class: class,
            input_dir: dir.to_path_buf(),
            output_file: dir.join("out.json"),
            site_root: dir.to_path_buf(),
            fallback,
        }
    }

    #[test]
    fn test_tier_two_when_size_read_fails() {
        let dir = tempfile::tempdir().unwrap();
        let media = dir.path().join("media");
        fs::create_dir(&media).unwrap();
        fs::write(media.join("bad.wav"), b"RIFF").unwrap();

        let collector = Collector::with_metadata_provider(FailingProber, UnreadableSizes);
        let collection = collector
            .collect(&config(&media, MediaClass::Audio, FallbackPolicy::SizeOnly))
            .unwrap();

        assert_eq!(collection.records.len(), 1);
        let record = &collection.records[0];
        assert_eq!(record.filename, "bad");
        assert!(record.size_bytes.is_none());
        assert!(record.size_human.is_none());
        assert_eq!(collection.summary.path_only_fallbacks, 1);
        assert_eq!(collection.summary.probe_failures(), 1);
    }

    #[test]
    fn test_drop_policy_omits_record() {
        let dir = tempfile::tempdir().unwrap();
        let media = dir.path().join("media");
        fs::create_dir(&media).unwrap();
        fs::write(media.join("broken.mp4"), b"not a video").unwrap();

        let collector = Collector::new(FailingProber);
        let collection = collector
            .collect(&config(&media, MediaClass::Video, FallbackPolicy::Drop))
            .unwrap();

        assert!(collection.records.is_empty());
        assert_eq!(collection.summary.discovered, 1);
        assert_eq!(collection.summary.dropped, 1);
        assert_eq!(collection.summary.recorded(), 0);
    }

    #[test]
    fn test_persist_creates_parent_and_ends_with_newline() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested").join("audio.json");

        persist_records(&[], &output).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "[]\n");
    }

    #[test]
    fn test_persist_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in place of the output file cannot be overwritten.
        let output = dir.path().join("video.json");
        fs::create_dir(&output).unwrap();

        let err = persist_records(&[], &output).unwrap_err();
        assert!(matches!(err, CoreError::Persist { .. }), "got {err:?}");
    }
}
