// ============================================================================
// mp4fetch-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for FetchConfig
//
// Fluent construction of FetchConfig. Anything not set keeps the value from
// FetchConfig::default().

use std::path::PathBuf;

use super::FetchConfig;

/// Builder for creating FetchConfig instances.
///
/// # Examples
///
/// ```rust
/// use mp4fetch_core::config::FetchConfigBuilder;
///
/// let config = FetchConfigBuilder::new()
///     .cookies_path("/etc/mp4fetch/cookies.txt")
///     .min_output_bytes(4096)
///     .build();
/// assert_eq!(config.min_output_bytes, 4096);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FetchConfigBuilder {
    config: FetchConfig,
}

impl FetchConfigBuilder {
    /// Creates a new builder seeded with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the yt-dlp executable.
    pub fn downloader_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.downloader_path = path.into();
        self
    }

    /// Sets the ffprobe executable.
    pub fn probe_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.probe_path = path.into();
        self
    }

    /// Sets the cookie jar consulted before each download.
    pub fn cookies_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.cookies_path = Some(path.into());
        self
    }

    /// Disables the cookie jar lookup entirely.
    pub fn no_cookies(mut self) -> Self {
        self.config.cookies_path = None;
        self
    }

    /// Sets the yt-dlp `-f` expression.
    pub fn format_selector(mut self, selector: impl Into<String>) -> Self {
        self.config.format_selector = selector.into();
        self
    }

    /// Sets the minimum size of a successful download.
    pub fn min_output_bytes(mut self, bytes: u64) -> Self {
        self.config.min_output_bytes = bytes;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> FetchConfig {
        self.config
    }
}
