// ============================================================================
// mp4fetch-core/src/fetch.rs
// ============================================================================
//
// FETCH ORCHESTRATION: One run from arguments to result record
//
// Stages run strictly in order:
//
//   Start -> Downloading -> Validating -> Probing -> Reported
//
// Validation fails the run when yt-dlp exited non-zero, or the output file is
// missing or smaller than the configured minimum. Probing never fails the run.
// Every failure path removes whatever partial file is left at the output path
// before the failure record is produced.

use crate::config::FetchConfig;
use crate::download::{download_progressive_mp4, remove_if_exists};
use crate::error::{CoreError, CoreResult};
use crate::external::{Downloader, ResolutionProber};
use crate::probe::probe_resolution;
use crate::report::FetchReport;
use crate::resolution::Resolution;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Usage line reported when positional arguments are missing.
pub const USAGE: &str = "Usage: mp4fetch <url> <start_time> <end_time> <output_path>";

/// The error reported when fewer than four positional arguments are given.
pub fn usage_error() -> CoreError {
    CoreError::Usage(USAGE.to_string())
}

/// Parameters of a single run.
///
/// `start_time` and `end_time` are part of the calling convention only.
/// Trimming happens in the caller; this crate never interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    pub start_time: String,
    pub end_time: String,
    pub output_path: PathBuf,
}

impl FetchRequest {
    pub fn new(
        url: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            url: url.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            output_path: output_path.into(),
        }
    }

}

/// Stages of a run, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    Start,
    Downloading,
    Validating,
    Probing,
    Reported,
}

fn enter(stage: FetchStage) {
    log::debug!("Stage: {stage:?}");
}

/// Runs download, validation and probing for `request`.
///
/// Never returns an error: every failure is folded into
/// [`FetchReport::Failure`] after the partial output file is removed.
pub fn run_fetch<D, P>(
    downloader: &D,
    prober: &P,
    config: &FetchConfig,
    request: &FetchRequest,
) -> FetchReport
where
    D: Downloader + ?Sized,
    P: ResolutionProber + ?Sized,
{
    enter(FetchStage::Start);
    let report = match fetch(downloader, prober, config, request) {
        Ok(resolution) => {
            log::info!(
                "Downloaded {} ({})",
                request.output_path.display(),
                resolution
            );
            FetchReport::success(resolution, request.output_path.clone())
        }
        Err(err) => {
            log::error!("Fetch failed: {err}");
            cleanup_partial_output(&request.output_path);
            FetchReport::from(err)
        }
    };
    enter(FetchStage::Reported);
    report
}

fn fetch<D, P>(
    downloader: &D,
    prober: &P,
    config: &FetchConfig,
    request: &FetchRequest,
) -> CoreResult<Resolution>
where
    D: Downloader + ?Sized,
    P: ResolutionProber + ?Sized,
{
    config.validate()?;
    log::debug!(
        "Ignoring trim window {}..{}; trimming is done by the caller",
        request.start_time,
        request.end_time
    );

    ensure_parent_dir(&request.output_path)?;

    enter(FetchStage::Downloading);
    let exited_ok =
        download_progressive_mp4(downloader, config, &request.url, &request.output_path)?;

    enter(FetchStage::Validating);
    let size = validate_download(exited_ok, &request.output_path, config.min_output_bytes)?;
    log::debug!("Output file is {size} bytes");

    enter(FetchStage::Probing);
    Ok(probe_resolution(prober, &request.output_path))
}

/// Creates the directory that will hold `output_path`.
///
/// A bare file name has no directory component and needs nothing created.
fn ensure_parent_dir(output_path: &Path) -> io::Result<()> {
    match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Checks the three conditions of a good download and returns the file size.
///
/// Fails with [`CoreError::DownloadFailed`] if yt-dlp exited non-zero, or
/// `output_path` cannot be inspected or is not a regular file, or it is smaller
/// than `min_bytes`.
pub fn validate_download(exited_ok: bool, output_path: &Path, min_bytes: u64) -> CoreResult<u64> {
    if !exited_ok {
        return Err(CoreError::DownloadFailed);
    }

    let metadata = match fs::metadata(output_path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::error!("yt-dlp reported success but {} is missing", output_path.display());
            return Err(CoreError::DownloadFailed);
        }
        Err(e) => {
            log::error!("Cannot inspect {}: {}", output_path.display(), e);
            return Err(CoreError::DownloadFailed);
        }
    };

    if !metadata.is_file() || metadata.len() < min_bytes {
        log::error!(
            "{} is {} bytes, below the {} byte minimum",
            output_path.display(),
            metadata.len(),
            min_bytes
        );
        return Err(CoreError::DownloadFailed);
    }
    Ok(metadata.len())
}

fn cleanup_partial_output(output_path: &Path) {
    match remove_if_exists(output_path) {
        Ok(true) => log::info!("Removed partial file {}", output_path.display()),
        Ok(false) => {}
        Err(e) => log::warn!(
            "Could not remove partial file {}: {}",
            output_path.display(),
            e
        ),
    }
}
