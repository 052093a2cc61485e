// ============================================================================
// mp4fetch-core/src/error.rs
// ============================================================================
//
// ERROR HANDLING: Error taxonomy for mp4fetch
//
// Every failure that can end a run is a variant of `CoreError`. The
// orchestration layer converts whichever variant it receives into the single
// failure record printed on stdout, so the Display text of each variant is
// user-facing.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced by mp4fetch-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Fewer than four positional arguments were supplied.
    #[error("{0}")]
    Usage(String),

    /// The downloader exited non-zero, or left a missing/undersized file.
    #[error("yt-dlp failed or produced invalid file. See logs above.")]
    DownloadFailed,

    #[error("Failed to start {0}: {1}")]
    CommandStart(String, #[source] io::Error),

    #[error("{0} exited with {1}: {2}")]
    CommandFailed(String, ExitStatus, String),

    #[error("Failed to parse ffprobe output: {0}")]
    ProbeParse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Result type for mp4fetch-core operations.
pub type CoreResult<T> = Result<T, CoreError>;

pub(crate) fn command_start_error(cmd: impl Into<String>, err: io::Error) -> CoreError {
    CoreError::CommandStart(cmd.into(), err)
}

pub(crate) fn command_failed_error(
    cmd: impl Into<String>,
    status: ExitStatus,
    stderr: impl Into<String>,
) -> CoreError {
    CoreError::CommandFailed(cmd.into(), status, stderr.into())
}
