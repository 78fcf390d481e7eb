// ============================================================================
// filesamples-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with ffprobe and the File System
//
// This module encapsulates interactions with the ffprobe command-line tool and
// file system metadata access. Both sit behind traits (Prober,
// FileMetadataProvider) so the collector can be driven with canned results in
// tests.

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

// ============================================================================
// SUBMODULES
// ============================================================================

/// Contains the prober trait and the ffprobe-backed implementation
pub mod ffprobe_executor;

pub use ffprobe_executor::{DEFAULT_FFPROBE, FfprobeProber, Prober};

// ============================================================================
// DEPENDENCY CHECKING
// ============================================================================

/// Checks that an external command is available and returns its version line.
///
/// The command is run with a single `-version` argument.
///
/// # Returns
///
/// * `Ok(String)` - The first line the command printed (may be empty)
/// * `Err(CoreError::DependencyNotFound)` - If the command is not found or
///   `-version` exits unsuccessfully
/// * `Err(CoreError::CommandStart)` - If the command exists but fails to start
pub fn check_dependency(program: &Path) -> CoreResult<String> {
    let name = program.display().to_string();

    let result = Command::new(program)
        .arg("-version")
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output();

    match result {
        Ok(output) if !output.status.success() => {
            log::warn!(
                "Dependency '{}' is not usable: -version exited with {}",
                name,
                output.status
            );
            Err(CoreError::DependencyNotFound(format!(
                "{name} (-version exited with {})",
                output.status
            )))
        }
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let first_line = stdout.lines().next().unwrap_or_default().trim().to_string();
            log::debug!("Found dependency {}: {}", name, first_line);
            Ok(first_line)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{}' not found.", name);
            Err(CoreError::DependencyNotFound(name))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{}': {}", name, e);
            Err(CoreError::CommandStart(name, e))
        }
    }
}

/// Logs the command line about to be executed.
pub(crate) fn log_command(cmd: &Command) {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<_> = cmd.get_args().map(|arg| arg.to_string_lossy()).collect();
    log::debug!("Executing command: {} {}", program, args.join(" "));
}

// ============================================================================
// FILE METADATA ACCESS
// ============================================================================

/// Trait for abstracting file metadata access.
///
/// Used by the size-only fallback, which must not parse file contents.
///
/// # Examples
///
/// ```rust
/// use filesamples_core::external::FileMetadataProvider;
/// use std::path::Path;
///
/// struct FixedSize;
///
/// impl FileMetadataProvider for FixedSize {
///     fn get_size(&self, _path: &Path) -> std::io::Result<u64> {
///         Ok(1_000_000)
///     }
/// }
///
/// assert_eq!(FixedSize.get_size(Path::new("/fake/path")).unwrap(), 1_000_000);
/// ```
pub trait FileMetadataProvider {
    /// Gets the size of the file at the given path in bytes.
    fn get_size(&self, path: &Path) -> io::Result<u64>;
}

impl<M: FileMetadataProvider + ?Sized> FileMetadataProvider for &M {
    fn get_size(&self, path: &Path) -> io::Result<u64> {
        (**self).get_size(path)
    }
}

/// Standard implementation of FileMetadataProvider using `std::fs::metadata`.
#[derive(Debug, Clone, Default)]
pub struct StdFsMetadataProvider;

impl FileMetadataProvider for StdFsMetadataProvider {
    fn get_size(&self, path: &Path) -> io::Result<u64> {
        Ok(std::fs::metadata(path)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dependency_not_found() {
        let err = check_dependency(Path::new("/definitely/not/here/ffprobe")).unwrap_err();
        assert!(matches!(err, CoreError::DependencyNotFound(_)), "got {err:?}");
    }

    #[cfg(unix)]
    #[test]
    fn test_check_dependency_requires_successful_exit() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let failing = dir.path().join("broken-ffprobe");
        std::fs::write(&failing, "#!/bin/sh\nexit 1\n").unwrap();
        std::fs::set_permissions(&failing, std::fs::Permissions::from_mode(0o755)).unwrap();

        let err = check_dependency(&failing).unwrap_err();
        match err {
            CoreError::DependencyNotFound(msg) => assert!(msg.contains("broken-ffprobe"), "{msg}"),
            other => panic!("Unexpected error type: {other:?}"),
        }

        let working = dir.path().join("ffprobe");
        std::fs::write(&working, "#!/bin/sh\necho 'ffprobe version 6.1'\n").unwrap();
        std::fs::set_permissions(&working, std::fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(check_dependency(&working).unwrap(), "ffprobe version 6.1");
    }

    #[test]
    fn test_std_fs_metadata_provider() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("bad.wav");
        std::fs::write(&file, vec![0u8; 500]).unwrap();

        let provider = StdFsMetadataProvider;
        assert_eq!(provider.get_size(&file).unwrap(), 500);
        assert!(provider.get_size(&dir.path().join("missing.wav")).is_err());
    }
}
