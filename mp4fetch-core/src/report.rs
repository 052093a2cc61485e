//! The one-line result record printed on stdout.
//!
//! Exactly one record is produced per run:
//!
//! ```text
//! {"success": true, "resolution": "720p", "output_path": "/videos/clip.mp4"}
//! {"success": false, "error": "yt-dlp failed or produced invalid file. See logs above."}
//! ```
//!
//! Keys are separated by `", "` and values by `": "`, and non-ASCII text is
//! written as `\uXXXX` escapes, so the line matches what the existing callers
//! already parse.

use crate::error::CoreError;
use crate::resolution::Resolution;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::Formatter;
use std::io;
use std::path::PathBuf;

/// Outcome of a fetch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchReport {
    Success {
        resolution: Resolution,
        output_path: PathBuf,
    },
    Failure {
        error: String,
    },
}

impl FetchReport {
    pub fn success(resolution: Resolution, output_path: impl Into<PathBuf>) -> Self {
        FetchReport::Success {
            resolution,
            output_path: output_path.into(),
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        FetchReport::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchReport::Success { .. })
    }

    /// Process exit status for this outcome: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() { 0 } else { 1 }
    }

    /// Renders the record as a single JSON line without a trailing newline.
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
        self.serialize(&mut ser)?;
        // serde_json only ever writes valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl From<CoreError> for FetchReport {
    fn from(err: CoreError) -> Self {
        FetchReport::failure(err.to_string())
    }
}

impl Serialize for FetchReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FetchReport::Success {
                resolution,
                output_path,
            } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("success", &true)?;
                map.serialize_entry("resolution", resolution)?;
                map.serialize_entry("output_path", &output_path.to_string_lossy())?;
                map.end()
            }
            FetchReport::Failure { error } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("success", &false)?;
                map.serialize_entry("error", error)?;
                map.end()
            }
        }
    }
}

/// Compact JSON with `", "` / `": "` separators and ASCII-only strings.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units).iter() {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}
