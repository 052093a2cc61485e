// ============================================================================
// mp4fetch-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Interactions with yt-dlp and ffprobe
//
// Both external programs sit behind a trait so the orchestration in
// `crate::fetch` can be driven by real processes in production and by
// in-process fakes in tests.
//
// KEY COMPONENTS:
// - Downloader / YtDlpDownloader: runs yt-dlp and captures its output
// - ResolutionProber / FfprobeProber: asks ffprobe for the video height
// - ProcessOutput: captured result of a finished process

use std::process::Output;

/// Contains the yt-dlp command line and its executor
pub mod ytdlp_executor;

/// Contains the ffprobe height query and its executor
pub mod ffprobe_executor;

pub use ffprobe_executor::{FfprobeProber, ResolutionProber, parse_height};
pub use ytdlp_executor::{DownloadCommand, Downloader, YtDlpDownloader};

/// Captured result of a finished external process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Whether the process exited with status zero
    pub success: bool,
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    /// Everything written to stdout, decoded lossily
    pub stdout: String,
    /// Everything written to stderr, decoded lossily
    pub stderr: String,
}

impl ProcessOutput {
    /// Output of a process that exited zero.
    pub fn succeeded(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            success: true,
            code: Some(0),
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Output of a process that exited with `code`.
    pub fn exited(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            success: code == 0,
            code: Some(code),
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}

impl From<Output> for ProcessOutput {
    fn from(output: Output) -> Self {
        Self {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exited_zero_counts_as_success() {
        assert!(ProcessOutput::exited(0, "", "").success);
        assert!(!ProcessOutput::exited(2, "", "boom").success);
    }

    #[cfg(unix)]
    #[test]
    fn converts_from_std_output() {
        use std::os::unix::process::ExitStatusExt;
        use std::process::ExitStatus;

        let output = Output {
            status: ExitStatus::from_raw(1 << 8),
            stdout: b"out".to_vec(),
            stderr: vec![0xff, b'x'],
        };
        let captured = ProcessOutput::from(output);
        assert!(!captured.success);
        assert_eq!(captured.code, Some(1));
        assert_eq!(captured.stdout, "out");
        assert_eq!(captured.stderr, "\u{fffd}x");
    }
}
