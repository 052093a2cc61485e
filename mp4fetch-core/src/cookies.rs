//! Cookie jar inspection.
//!
//! yt-dlp only gets `--cookies` when the jar exists and looks like a
//! Netscape-format cookie file. Anything else is skipped with a warning.

use crate::config::NETSCAPE_COOKIE_HEADER;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Result of looking at the configured cookie jar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieFile {
    /// No file at the configured location.
    Missing,
    /// Present and starts with the Netscape header.
    Valid(PathBuf),
    /// Present but unreadable or not in Netscape format.
    Invalid(PathBuf),
}

impl CookieFile {
    /// Path to hand to yt-dlp, if any.
    pub fn usable_path(&self) -> Option<&Path> {
        match self {
            CookieFile::Valid(path) => Some(path),
            CookieFile::Missing | CookieFile::Invalid(_) => None,
        }
    }
}

/// Inspects the cookie jar at `path`.
///
/// Only the first line is read. Bytes that are not valid UTF-8 are replaced
/// rather than rejected, and surrounding whitespace is trimmed before the
/// header comparison.
pub fn inspect_cookie_file(path: &Path) -> CookieFile {
    if !path.exists() {
        return CookieFile::Missing;
    }

    match read_first_line(path) {
        Ok(line) if line.trim().starts_with(NETSCAPE_COOKIE_HEADER) => {
            log::debug!("Using cookie file {}", path.display());
            CookieFile::Valid(path.to_path_buf())
        }
        Ok(_) => {
            log::warn!(
                "{} exists but is not a valid Netscape format file, ignoring.",
                path.display()
            );
            CookieFile::Invalid(path.to_path_buf())
        }
        Err(err) => {
            log::warn!("Could not read cookie file {}: {}, ignoring.", path.display(), err);
            CookieFile::Invalid(path.to_path_buf())
        }
    }
}

fn read_first_line(path: &Path) -> std::io::Result<String> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_reported_as_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cookies.txt");
        assert_eq!(inspect_cookie_file(&path), CookieFile::Missing);
    }

    #[test]
    fn netscape_header_is_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cookies.txt");
        fs::write(
            &path,
            "# Netscape HTTP Cookie File\n.youtube.com\tTRUE\t/\tTRUE\t0\tPREF\tf6=8\n",
        )
        .unwrap();

        let cookies = inspect_cookie_file(&path);
        assert_eq!(cookies, CookieFile::Valid(path.clone()));
        assert_eq!(cookies.usable_path(), Some(path.as_path()));
    }

    #[test]
    fn header_with_crlf_and_padding_is_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cookies.txt");
        fs::write(&path, "  # Netscape HTTP Cookie File\r\n").unwrap();
        assert!(matches!(inspect_cookie_file(&path), CookieFile::Valid(_)));
    }

    #[test]
    fn other_header_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cookies.txt");
        fs::write(&path, "{\"cookies\": []}\n").unwrap();

        let cookies = inspect_cookie_file(&path);
        assert_eq!(cookies, CookieFile::Invalid(path));
        assert_eq!(cookies.usable_path(), None);
    }

    #[test]
    fn header_on_second_line_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cookies.txt");
        fs::write(&path, "\n# Netscape HTTP Cookie File\n").unwrap();
        assert!(matches!(inspect_cookie_file(&path), CookieFile::Invalid(_)));
    }

    #[test]
    fn invalid_utf8_does_not_abort_the_check() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cookies.txt");
        let mut bytes = b"# Netscape HTTP Cookie File \xff\xfe".to_vec();
        bytes.push(b'\n');
        fs::write(&path, bytes).unwrap();
        assert!(matches!(inspect_cookie_file(&path), CookieFile::Valid(_)));
    }

    #[test]
    fn empty_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cookies.txt");
        fs::write(&path, "").unwrap();
        assert!(matches!(inspect_cookie_file(&path), CookieFile::Invalid(_)));
    }
}
