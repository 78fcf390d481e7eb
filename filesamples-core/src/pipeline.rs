//! Runs the collector for every media class, one after the other.
//!
//! Video is collected before audio. A phase whose JSON document could not be
//! written does not stop the next phase; a directory that cannot be listed
//! aborts the run.

use crate::collector::{Collector, PhaseSummary};
use crate::config::PipelineConfig;
use crate::error::CoreResult;
use crate::external::{FileMetadataProvider, Prober};
use crate::media::MediaClass;

/// Outcome of a full run, one summary per phase in processing order.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub phases: Vec<PhaseSummary>,
}

impl PipelineReport {
    #[must_use]
    pub fn phase(&self, class: MediaClass) -> Option<&PhaseSummary> {
        self.phases.iter().find(|p| p.media_class == class)
    }

    /// True when every phase wrote its document.
    #[must_use]
    pub fn all_persisted(&self) -> bool {
        self.phases.iter().all(|p| p.persisted)
    }

    #[must_use]
    pub fn probe_failures(&self) -> usize {
        self.phases.iter().map(PhaseSummary::probe_failures).sum()
    }
}

/// Runs the given phases in order.
pub fn run_phases<P, M>(
    config: &PipelineConfig,
    collector: &Collector<P, M>,
    classes: &[MediaClass],
) -> CoreResult<PipelineReport>
where
    P: Prober,
    M: FileMetadataProvider,
{
    config.validate()?;

    let mut phases = Vec::with_capacity(classes.len());
    for &class in classes {
        log::info!("Collecting {} metadata", class);
        let summary = collector.run(config.collector(class))?;
        log::info!(
            "{}: {} of {} file(s) recorded ({} probe failure(s), {} dropped)",
            class,
            summary.recorded(),
            summary.discovered,
            summary.probe_failures(),
            summary.dropped
        );
        phases.push(summary);
    }

    Ok(PipelineReport { phases })
}

/// Runs the video phase, then the audio phase.
///
/// # Examples
///
/// ```rust,no_run
/// use filesamples_core::{Collector, FfprobeProber, PipelineConfig, run_pipeline};
///
/// let config = PipelineConfig::default();
/// let collector = Collector::new(FfprobeProber::new(&config.ffprobe));
/// let report = run_pipeline(&config, &collector).unwrap();
/// println!("{} probe failure(s)", report.probe_failures());
/// ```
pub fn run_pipeline<P, M>(config: &PipelineConfig, collector: &Collector<P, M>) -> CoreResult<PipelineReport>
where
    P: Prober,
    M: FileMetadataProvider,
{
    run_phases(config, collector, &MediaClass::ALL)
}
