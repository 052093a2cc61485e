//! Configuration structures and constants for the mp4fetch-core library.
//!
//! This module locates the external tools, the optional cookie jar and holds
//! the download parameters shared by every run.

mod builder;

use crate::error::{CoreError, CoreResult};
use std::env;
use std::path::{Path, PathBuf};

pub use builder::FetchConfigBuilder;

// Default constants

/// yt-dlp format expression selecting a progressive MP4.
/// H.264 (`avc1`) MP4 first, then any MP4, then anything yt-dlp can hand over as MP4.
pub const DEFAULT_FORMAT_SELECTOR: &str = "best[ext=mp4][vcodec^=avc1]/best[ext=mp4]/mp4";

/// Files smaller than this many bytes are treated as failed downloads.
pub const MIN_OUTPUT_BYTES: u64 = 1000;

/// First-line header of a Netscape-format cookie jar.
pub const NETSCAPE_COOKIE_HEADER: &str = "# Netscape HTTP Cookie File";

/// Name of the cookie jar looked up next to the executable.
pub const COOKIES_FILE_NAME: &str = "cookies.txt";

/// Default media probe executable, resolved via `PATH`.
pub const DEFAULT_PROBE_PATH: &str = "ffprobe";

/// Main configuration structure for a fetch run.
///
/// Created by the consumer of the library (e.g. mp4fetch-cli) and passed to
/// [`crate::fetch::run_fetch`]. Every field has a default, see
/// [`FetchConfig::default`].
///
/// # Examples
///
/// ```rust
/// use mp4fetch_core::config::FetchConfigBuilder;
///
/// let config = FetchConfigBuilder::new()
///     .downloader_path("/opt/bin/yt-dlp")
///     .probe_path("/opt/bin/ffprobe")
///     .no_cookies()
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// yt-dlp executable (a bare name is looked up on `PATH`)
    pub downloader_path: PathBuf,

    /// ffprobe executable (a bare name is looked up on `PATH`)
    pub probe_path: PathBuf,

    /// Optional cookie jar handed to yt-dlp when it passes the header check
    pub cookies_path: Option<PathBuf>,

    /// yt-dlp `-f` expression
    pub format_selector: String,

    /// Minimum size in bytes of a successful download
    pub min_output_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            downloader_path: default_downloader_path(),
            probe_path: PathBuf::from(DEFAULT_PROBE_PATH),
            cookies_path: default_cookies_path(),
            format_selector: DEFAULT_FORMAT_SELECTOR.to_string(),
            min_output_bytes: MIN_OUTPUT_BYTES,
        }
    }
}

impl FetchConfig {
    /// Checks that the configuration can drive a run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.downloader_path.as_os_str().is_empty() {
            return Err(CoreError::Config("downloader path is empty".to_string()));
        }
        if self.probe_path.as_os_str().is_empty() {
            return Err(CoreError::Config("probe path is empty".to_string()));
        }
        if self.format_selector.trim().is_empty() {
            return Err(CoreError::Config("format selector is empty".to_string()));
        }
        Ok(())
    }
}

/// Directory holding the running executable, if it can be determined.
fn executable_dir() -> Option<PathBuf> {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Resolves the yt-dlp executable.
///
/// Windows builds ship a vendored `yt-dlp.exe` one level above the directory
/// of the executable; everywhere else `yt-dlp` comes from `PATH`.
pub fn default_downloader_path() -> PathBuf {
    if cfg!(windows) {
        if let Some(dir) = executable_dir() {
            return dir.join("..").join("yt-dlp.exe");
        }
    }
    PathBuf::from("yt-dlp")
}

/// `cookies.txt` next to the running executable.
pub fn default_cookies_path() -> Option<PathBuf> {
    executable_dir().map(|dir| dir.join(COOKIES_FILE_NAME))
}
