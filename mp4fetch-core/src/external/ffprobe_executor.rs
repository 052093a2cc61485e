//! FFprobe integration for reading the height of the first video stream.
//!
//! The query asks ffprobe for exactly one value, `stream=height` of `v:0`,
//! printed as bare CSV so stdout is a single integer.

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Arguments placed before the input path.
const HEIGHT_QUERY_ARGS: [&str; 8] = [
    "-v",
    "quiet",
    "-select_streams",
    "v:0",
    "-show_entries",
    "stream=height",
    "-of",
    "csv=s=x:p=0",
];

/// Trait representing something that can report the video height of a file.
pub trait ResolutionProber {
    /// Returns the pixel height of the first video stream in `input_path`.
    fn probe_height(&self, input_path: &Path) -> CoreResult<u32>;
}

/// Runs the ffprobe executable with the height query.
#[derive(Debug, Clone)]
pub struct FfprobeProber {
    program: PathBuf,
}

impl FfprobeProber {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for FfprobeProber {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PROBE_PATH)
    }
}

impl ResolutionProber for FfprobeProber {
    fn probe_height(&self, input_path: &Path) -> CoreResult<u32> {
        let cmd_name = self.program.display().to_string();
        log::debug!("Running {} for video height on: {}", cmd_name, input_path.display());

        let output = Command::new(&self.program)
            .args(HEIGHT_QUERY_ARGS)
            .arg(input_path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| command_start_error(cmd_name.clone(), e))?;

        if !output.status.success() {
            return Err(command_failed_error(
                cmd_name,
                output.status,
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }

        parse_height(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parses ffprobe's height output, tolerating surrounding whitespace.
pub fn parse_height(stdout: &str) -> CoreResult<u32> {
    let trimmed = stdout.trim();
    trimmed
        .parse::<u32>()
        .map_err(|e| CoreError::ProbeParse(format!("invalid height '{trimmed}': {e}")))
}
