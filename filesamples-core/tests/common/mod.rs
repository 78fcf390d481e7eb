// filesamples-core/tests/common/mod.rs
//
// Shared helpers for the integration tests: a scripted prober keyed by file
// name and small file-system helpers.

#![allow(dead_code)]

use filesamples_core::media::{FormatInfo, StreamInfo};
use filesamples_core::{CoreError, CoreResult, ProbeOutput, Prober};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// What the mock prober answers for a given file name.
#[derive(Clone)]
pub enum MockOutcome {
    Success(ProbeOutput),
    ExitFailure(String),
    BadOutput,
}

/// Prober returning canned results and recording every call.
#[derive(Default)]
pub struct MockProber {
    outcomes: HashMap<String, MockOutcome>,
    calls: RefCell<Vec<PathBuf>>,
}

impl MockProber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect(mut self, file_name: &str, outcome: MockOutcome) -> Self {
        self.outcomes.insert(file_name.to_string(), outcome);
        self
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }
}

impl Prober for MockProber {
    fn probe(&self, input_path: &Path) -> CoreResult<ProbeOutput> {
        self.calls.borrow_mut().push(input_path.to_path_buf());
        let name = input_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match self.outcomes.get(&name) {
            Some(MockOutcome::Success(output)) => Ok(output.clone()),
            Some(MockOutcome::ExitFailure(stderr)) => Err(CoreError::ProbeFailed {
                status: Some(1),
                stderr: stderr.clone(),
            }),
            Some(MockOutcome::BadOutput) => {
                let err = serde_json::from_str::<ProbeOutput>("not json").unwrap_err();
                Err(CoreError::ProbeParse(err))
            }
            None => panic!("MockProber: no expectation for {}", input_path.display()),
        }
    }
}

pub fn video_probe(codec: &str, width: u32, height: u32, duration: &str, size: &str) -> ProbeOutput {
    ProbeOutput {
        format: Some(FormatInfo {
            format_name: Some("mov,mp4,m4a,3gp,3g2,mj2".to_string()),
            duration: Some(duration.to_string()),
            size: Some(size.to_string()),
        }),
        streams: vec![
            StreamInfo {
                codec_name: Some("aac".to_string()),
                codec_type: Some("audio".to_string()),
                sample_rate: Some("44100".to_string()),
                channels: Some(2),
                ..Default::default()
            },
            StreamInfo {
                codec_name: Some(codec.to_string()),
                codec_type: Some("video".to_string()),
                width: Some(width),
                height: Some(height),
                ..Default::default()
            },
        ],
    }
}

pub fn audio_probe(codec: &str, sample_rate: &str, channels: u32, size: &str) -> ProbeOutput {
    ProbeOutput {
        format: Some(FormatInfo {
            format_name: Some("wav".to_string()),
            duration: Some("2.000000".to_string()),
            size: Some(size.to_string()),
        }),
        streams: vec![StreamInfo {
            codec_name: Some(codec.to_string()),
            codec_type: Some("audio".to_string()),
            sample_rate: Some(sample_rate.to_string()),
            channels: Some(channels),
            ..Default::default()
        }],
    }
}

/// Creates a file with `len` zero bytes.
pub fn create_file(dir: &Path, name: &str, len: usize) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, vec![0u8; len]).expect("Failed to create test file");
    path
}

pub fn read_json(path: &Path) -> serde_json::Value {
    let text = fs::read_to_string(path).expect("Failed to read output file");
    serde_json::from_str(&text).expect("Output is not valid JSON")
}
