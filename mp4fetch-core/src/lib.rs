//! Core library for downloading a progressive MP4 with yt-dlp and reporting
//! its resolution with ffprobe.
//!
//! A run deletes any stale output, downloads with yt-dlp, checks the file
//! exists and is not truncated, probes the first video stream's height and
//! produces a single [`FetchReport`].
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use mp4fetch_core::{FetchConfig, FetchRequest, run_fetch};
//! use mp4fetch_core::external::{FfprobeProber, YtDlpDownloader};
//!
//! let config = FetchConfig::default();
//! let request = FetchRequest::new(
//!     "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
//!     "00:00:00",
//!     "00:00:30",
//!     "/tmp/videos/clip.mp4",
//! );
//! let prober = FfprobeProber::new(&config.probe_path);
//!
//! let report = run_fetch(&YtDlpDownloader, &prober, &config, &request);
//! println!("{}", report.to_json_line().unwrap());
//! std::process::exit(report.exit_code());
//! ```

pub mod config;
pub mod cookies;
pub mod download;
pub mod error;
pub mod external;
pub mod fetch;
pub mod probe;
pub mod report;
pub mod resolution;

// Re-exports for public API
pub use config::{FetchConfig, FetchConfigBuilder};
pub use cookies::{CookieFile, inspect_cookie_file};
pub use download::download_progressive_mp4;
pub use error::{CoreError, CoreResult};
pub use fetch::{FetchRequest, FetchStage, USAGE, run_fetch, usage_error, validate_download};
pub use probe::probe_resolution;
pub use report::FetchReport;
pub use resolution::Resolution;
