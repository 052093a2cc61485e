//! Resolution tiers reported for a downloaded file.

use serde::{Serialize, Serializer};
use std::fmt;

/// Resolution label derived from the pixel height of the first video stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Height of 1080 or more.
    P1080,
    /// Height in `720..1080`.
    P720,
    /// Height in `480..720`.
    P480,
    /// Anything below 480, labelled with the height itself.
    Other(u32),
    /// The probe failed or its output could not be parsed.
    Unknown,
}

impl Resolution {
    /// Classifies a pixel height into its tier.
    ///
    /// ```rust
    /// use mp4fetch_core::Resolution;
    ///
    /// assert_eq!(Resolution::from_height(2160).to_string(), "1080p");
    /// assert_eq!(Resolution::from_height(360).to_string(), "360p");
    /// ```
    pub fn from_height(height: u32) -> Self {
        match height {
            h if h >= 1080 => Resolution::P1080,
            h if h >= 720 => Resolution::P720,
            h if h >= 480 => Resolution::P480,
            h => Resolution::Other(h),
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::P1080 => f.write_str("1080p"),
            Resolution::P720 => f.write_str("720p"),
            Resolution::P480 => f.write_str("480p"),
            Resolution::Other(height) => write!(f, "{height}p"),
            Resolution::Unknown => f.write_str("unknown"),
        }
    }
}

impl Serialize for Resolution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_inclusive_lower_bounds() {
        let cases = [
            (1080, "1080p"),
            (1079, "720p"),
            (720, "720p"),
            (719, "480p"),
            (480, "480p"),
            (479, "479p"),
            (0, "0p"),
        ];
        for (height, label) in cases {
            assert_eq!(Resolution::from_height(height).to_string(), label, "height {height}");
        }
    }

    #[test]
    fn anything_taller_than_1080_is_1080p() {
        assert_eq!(Resolution::from_height(4320), Resolution::P1080);
    }

    #[test]
    fn serializes_as_its_label() {
        assert_eq!(serde_json::to_string(&Resolution::P720).unwrap(), "\"720p\"");
        assert_eq!(serde_json::to_string(&Resolution::Unknown).unwrap(), "\"unknown\"");
    }
}
