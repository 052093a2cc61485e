// mp4fetch-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use std::path::PathBuf;

// --- CLI Argument Definition ---

// Positionals take values starting with `-` (negative offsets, file names like
// `-clip.mp4`). Known flags are still recognized before the surplus list.
#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "mp4fetch: download the best progressive MP4 for a URL",
    long_about = "Downloads a single progressive MP4 (video and audio in one file) with yt-dlp, \
                  checks the result and reports its resolution via ffprobe. Prints exactly one \
                  JSON result line on stdout; diagnostics go to stderr."
)]
pub struct Cli {
    /// Source video URL
    #[arg(value_name = "URL", allow_hyphen_values = true)]
    pub url: String,

    /// Trim start. Accepted for compatibility; trimming is left to the caller.
    #[arg(value_name = "START_TIME", allow_hyphen_values = true)]
    pub start_time: String,

    /// Trim end. Accepted for compatibility; trimming is left to the caller.
    #[arg(value_name = "END_TIME", allow_hyphen_values = true)]
    pub end_time: String,

    /// Where the downloaded MP4 is written (parent directories are created)
    #[arg(value_name = "OUTPUT_PATH", allow_hyphen_values = true)]
    pub output_path: PathBuf,

    /// Surplus positional arguments are ignored
    #[arg(value_name = "IGNORED", hide = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,

    // --- Tool Locations ---
    /// Optional: yt-dlp executable (defaults to the vendored yt-dlp.exe on
    /// Windows, `yt-dlp` on PATH elsewhere)
    #[arg(long = "ytdlp", value_name = "PATH", env = "MP4FETCH_YTDLP")]
    pub ytdlp: Option<PathBuf>,

    /// Optional: ffprobe executable (defaults to `ffprobe` on PATH)
    #[arg(long, value_name = "PATH", env = "MP4FETCH_FFPROBE")]
    pub ffprobe: Option<PathBuf>,

    /// Optional: Netscape cookie jar (defaults to cookies.txt next to the executable)
    #[arg(long, value_name = "PATH", env = "MP4FETCH_COOKIES")]
    pub cookies: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
