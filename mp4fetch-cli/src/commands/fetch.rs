// mp4fetch-cli/src/commands/fetch.rs
//
// Turns parsed arguments into a FetchConfig and FetchRequest and runs the
// download with the real yt-dlp and ffprobe executors.

use crate::cli::Cli;
use mp4fetch_core::external::{FfprobeProber, YtDlpDownloader};
use mp4fetch_core::{FetchConfig, FetchConfigBuilder, FetchReport, FetchRequest, run_fetch};

/// Layers the command-line/environment overrides over the defaults.
pub fn build_config(cli: &Cli) -> FetchConfig {
    let mut builder = FetchConfigBuilder::new();
    if let Some(path) = &cli.ytdlp {
        builder = builder.downloader_path(path);
    }
    if let Some(path) = &cli.ffprobe {
        builder = builder.probe_path(path);
    }
    if let Some(path) = &cli.cookies {
        builder = builder.cookies_path(path);
    }
    builder.build()
}

pub fn build_request(cli: &Cli) -> FetchRequest {
    if !cli.ignored.is_empty() {
        log::debug!("Ignoring extra arguments: {:?}", cli.ignored);
    }
    FetchRequest::new(&cli.url, &cli.start_time, &cli.end_time, &cli.output_path)
}

/// Runs the fetch described by `cli`.
pub fn run_fetch_command(cli: &Cli) -> FetchReport {
    let config = build_config(cli);
    let request = build_request(cli);
    log::debug!("Configuration: {:?}", config);

    let prober = FfprobeProber::new(&config.probe_path);
    run_fetch(&YtDlpDownloader, &prober, &config, &request)
}
