// mp4fetch-core/tests/common/mod.rs
//
// In-process stand-ins for yt-dlp and ffprobe shared by the integration tests.

#![allow(dead_code)]

use mp4fetch_core::external::{DownloadCommand, Downloader, ProcessOutput, ResolutionProber};
use mp4fetch_core::{CoreError, CoreResult};
use std::cell::{Cell, RefCell};
use std::fs;
use std::io;
use std::path::Path;

/// Plays the part of yt-dlp: optionally writes `bytes` bytes to the `-o`
/// path, then "exits" with `exit_code`.
pub struct FakeDownloader {
    pub bytes: Option<usize>,
    pub exit_code: i32,
    pub calls: RefCell<Vec<DownloadCommand>>,
}

impl FakeDownloader {
    pub fn writing(bytes: usize) -> Self {
        Self {
            bytes: Some(bytes),
            exit_code: 0,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(exit_code: i32) -> Self {
        Self {
            bytes: None,
            exit_code,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Writes a partial file and then exits non-zero.
    pub fn partial_then_failing(bytes: usize, exit_code: i32) -> Self {
        Self {
            bytes: Some(bytes),
            exit_code,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl Downloader for FakeDownloader {
    fn download(&self, cmd: &DownloadCommand) -> CoreResult<ProcessOutput> {
        self.calls.borrow_mut().push(cmd.clone());
        if let Some(bytes) = self.bytes {
            fs::write(cmd.output_path(), vec![0u8; bytes])?;
        }
        Ok(ProcessOutput::exited(
            self.exit_code,
            "[download] Destination: fake",
            if self.exit_code == 0 { "" } else { "ERROR: fake failure" },
        ))
    }
}

/// A yt-dlp that cannot be started at all.
pub struct MissingDownloader;

impl Downloader for MissingDownloader {
    fn download(&self, cmd: &DownloadCommand) -> CoreResult<ProcessOutput> {
        Err(CoreError::CommandStart(
            cmd.program().display().to_string(),
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        ))
    }
}

/// Plays the part of ffprobe.
pub struct FakeProber {
    pub height: Option<u32>,
    pub calls: Cell<usize>,
}

impl FakeProber {
    pub fn height(height: u32) -> Self {
        Self {
            height: Some(height),
            calls: Cell::new(0),
        }
    }

    pub fn broken() -> Self {
        Self {
            height: None,
            calls: Cell::new(0),
        }
    }
}

impl ResolutionProber for FakeProber {
    fn probe_height(&self, _input_path: &Path) -> CoreResult<u32> {
        self.calls.set(self.calls.get() + 1);
        self.height
            .ok_or_else(|| CoreError::ProbeParse("invalid height 'N/A'".to_string()))
    }
}
