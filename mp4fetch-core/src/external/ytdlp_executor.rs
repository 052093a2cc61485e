// ============================================================================
// mp4fetch-core/src/external/ytdlp_executor.rs
// ============================================================================
//
// YT-DLP EXECUTOR: Download command construction and execution
//
// KEY COMPONENTS:
// - DownloadCommand: the yt-dlp command line for one progressive MP4 download
// - Downloader: trait for anything that can run a DownloadCommand
// - YtDlpDownloader: runs yt-dlp as a blocking child process

use super::ProcessOutput;
use crate::error::{CoreResult, command_start_error};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

// --- Command Construction ---

/// The yt-dlp invocation for a single URL.
///
/// Arguments are rendered as `-f <selector> -o <output> [--cookies <jar>] <url>`.
/// The cookie pair, when present, always lands right before the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadCommand {
    program: PathBuf,
    format_selector: String,
    output_path: PathBuf,
    cookies: Option<PathBuf>,
    url: String,
}

impl DownloadCommand {
    pub fn new(
        program: impl Into<PathBuf>,
        format_selector: impl Into<String>,
        output_path: impl Into<PathBuf>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            format_selector: format_selector.into(),
            output_path: output_path.into(),
            cookies: None,
            url: url.into(),
        }
    }

    /// Attaches a cookie jar via `--cookies`.
    pub fn with_cookies(mut self, cookies: impl Into<PathBuf>) -> Self {
        self.cookies = Some(cookies.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn cookies(&self) -> Option<&Path> {
        self.cookies.as_deref()
    }

    /// Arguments passed to the program, in order.
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-f".into(),
            self.format_selector.as_str().into(),
            "-o".into(),
            self.output_path.as_os_str().to_owned(),
        ];
        if let Some(cookies) = &self.cookies {
            args.push("--cookies".into());
            args.push(cookies.as_os_str().to_owned());
        }
        args.push(self.url.as_str().into());
        args
    }

    /// Space-joined command line for the diagnostic log.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_os_str().to_owned())
            .chain(self.args())
            .map(|part| part.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// --- Download Execution Abstraction ---

/// Trait representing something that can run a yt-dlp download.
pub trait Downloader {
    /// Runs the command to completion and returns its captured output.
    ///
    /// Only a failure to start the process is an error; a non-zero exit is
    /// reported through [`ProcessOutput::success`].
    fn download(&self, cmd: &DownloadCommand) -> CoreResult<ProcessOutput>;
}

/// Runs yt-dlp as a blocking child process with stdout and stderr captured.
///
/// No timeout is applied; a supervising process is expected to enforce one.
#[derive(Debug, Clone, Default)]
pub struct YtDlpDownloader;

impl Downloader for YtDlpDownloader {
    fn download(&self, cmd: &DownloadCommand) -> CoreResult<ProcessOutput> {
        let output = Command::new(cmd.program())
            .args(cmd.args())
            .stdin(Stdio::null())
            .output()
            .map_err(|e| command_start_error(cmd.program().display().to_string(), e))?;
        Ok(output.into())
    }
}
