//! The resolution-probe step.
//!
//! Resolution is reporting-only metadata, so a failed probe never fails the
//! run. It degrades to [`Resolution::Unknown`].

use crate::external::ResolutionProber;
use crate::resolution::Resolution;
use std::path::Path;

/// Probes `input_path` and classifies the height of its first video stream.
pub fn probe_resolution<P>(prober: &P, input_path: &Path) -> Resolution
where
    P: ResolutionProber + ?Sized,
{
    match prober.probe_height(input_path) {
        Ok(height) => {
            let resolution = Resolution::from_height(height);
            log::debug!("Video height {height} classified as {resolution}");
            resolution
        }
        Err(err) => {
            log::warn!("Could not determine resolution of {}: {}", input_path.display(), err);
            Resolution::Unknown
        }
    }
}
