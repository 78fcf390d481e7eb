//! Implementation of the 'collect' subcommand.
//!
//! Builds the pipeline configuration from the command line, checks that ffprobe
//! can be started, and runs the video and audio phases.

use crate::cli::CollectArgs;
use crate::error::CliResult;

use filesamples_core::config::{FallbackPolicy, PipelineConfig, PipelineConfigBuilder};
use filesamples_core::{Collector, FfprobeProber, MediaClass, PipelineReport, run_phases};

use std::path::PathBuf;
use std::time::Instant;

use log::{info, warn};

/// Creates the pipeline configuration from CLI arguments.
pub fn create_pipeline_config(args: &CollectArgs, ffprobe: PathBuf) -> PipelineConfig {
    let mut builder = PipelineConfigBuilder::new()
        .site_root(args.site_root.clone())
        .data_dir(args.data_dir.clone())
        .ffprobe(ffprobe);

    if let Some(dir) = &args.video_dir {
        builder = builder.video_dir(dir.clone());
    }
    if let Some(dir) = &args.audio_dir {
        builder = builder.audio_dir(dir.clone());
    }
    if let Some(file) = &args.video_output {
        builder = builder.video_output(file.clone());
    }
    if let Some(file) = &args.audio_output {
        builder = builder.audio_output(file.clone());
    }
    if args.video_fallback {
        builder = builder.video_fallback(FallbackPolicy::SizeOnly);
    }

    builder.build()
}

/// Runs the collect command.
pub fn run_collect(args: CollectArgs, ffprobe: PathBuf) -> CliResult<PipelineReport> {
    let start_time = Instant::now();

    let config = create_pipeline_config(&args, ffprobe);
    config.validate()?;

    let prober = FfprobeProber::new(&config.ffprobe);
    let version = prober.version()?;
    info!("ffprobe {} ({})", version, config.ffprobe.display());

    let classes: Vec<MediaClass> = match args.only {
        Some(class) => vec![class],
        None => MediaClass::ALL.to_vec(),
    };

    let collector = Collector::new(prober);
    let report = run_phases(&config, &collector, &classes)?;

    for phase in &report.phases {
        if phase.persisted {
            info!(
                "{} metadata saved to: {}",
                phase.media_class,
                phase.output_file.display()
            );
        } else {
            warn!(
                "{} metadata was not saved to {}",
                phase.media_class,
                phase.output_file.display()
            );
        }
    }

    if report.probe_failures() > 0 {
        warn!(
            "{} file(s) could not be probed; see the errors above",
            report.probe_failures()
        );
    }
    info!(
        "Collection finished in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(report)
}
