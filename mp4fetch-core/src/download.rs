//! The download step: one yt-dlp run producing a progressive MP4.

use crate::config::FetchConfig;
use crate::cookies::{CookieFile, inspect_cookie_file};
use crate::error::CoreResult;
use crate::external::{DownloadCommand, Downloader};
use std::fs;
use std::io;
use std::path::Path;

/// Downloads `url` to `output_path` with the configured yt-dlp.
///
/// Any file already at `output_path` is deleted first. The cookie jar is
/// attached only when [`inspect_cookie_file`] accepts it. yt-dlp's captured
/// stdout and stderr are written to the log.
///
/// Returns whether yt-dlp exited zero. That says nothing about the file
/// itself; callers must still check it exists and has a sane size.
pub fn download_progressive_mp4<D>(
    downloader: &D,
    config: &FetchConfig,
    url: &str,
    output_path: &Path,
) -> CoreResult<bool>
where
    D: Downloader + ?Sized,
{
    if remove_if_exists(output_path)? {
        log::debug!("Removed existing file at {}", output_path.display());
    }

    let cmd = build_download_command(config, url, output_path);
    log::info!("Running command: {}", cmd.display());

    let output = downloader.download(&cmd)?;
    log::info!("yt-dlp stdout: {}", output.stdout);
    log::info!("yt-dlp stderr: {}", output.stderr);

    if !output.success {
        match output.code {
            Some(code) => log::error!("yt-dlp exited with code {code}"),
            None => log::error!("yt-dlp was terminated by a signal"),
        }
    }
    Ok(output.success)
}

/// Builds the yt-dlp command line, consulting the cookie jar on the way.
pub fn build_download_command(config: &FetchConfig, url: &str, output_path: &Path) -> DownloadCommand {
    let cmd = DownloadCommand::new(
        &config.downloader_path,
        &config.format_selector,
        output_path,
        url,
    );

    match config.cookies_path.as_deref().map(inspect_cookie_file) {
        Some(CookieFile::Valid(jar)) => cmd.with_cookies(jar),
        _ => cmd,
    }
}

/// Deletes `path` if something is there. Returns whether a file was removed.
pub(crate) fn remove_if_exists(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}
