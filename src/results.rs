use std::path::PathBuf;
use std::time::Duration;

use crate::error::ProbeError;

/// The output of a completed find.
///
/// `skipped` is opt-in: disabled by default so unreadable entries vanish
/// silently, which is the normal contract for a recursive search. Enable it
/// on the builder with `.collect_skipped(true)`.
pub struct Matches {
    /// Paths of matching regular files, in the order the walk produced them.
    pub paths: Vec<PathBuf>,

    /// Entries the walk could not read (permission denied, dangling links).
    /// Only populated if `.collect_skipped(true)` was set on the builder.
    /// Use [`ProbeError::path`] to present the affected location.
    pub skipped: Vec<ProbeError>,

    /// Walk statistics.
    pub stats: WalkStats,
}

/// Tallies for a completed walk.
pub struct WalkStats {
    /// Total number of files encountered (matched or not).
    pub files: usize,

    /// Total number of directories encountered.
    pub dirs: usize,

    /// Wall-clock time from walk start to completion.
    pub duration: Duration,
}

impl WalkStats {
    pub(crate) fn compute(files: usize, dirs: usize, duration: Duration) -> Self {
        Self {
            files,
            dirs,
            duration,
        }
    }
}
