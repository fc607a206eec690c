use std::path::{Path, PathBuf};
use std::time::Instant;

use globset::{Glob, GlobMatcher};
use ignore::WalkBuilder;
use tracing::{debug, trace};

use crate::error::ProbeError;
use crate::results::{Matches, WalkStats};

// ---------------------------------------------------------------------------
// Finder
// ---------------------------------------------------------------------------

/// Configures and executes a recursive glob search.
///
/// Created via [`Finder::new`]. Configure with chained builder methods, then
/// call [`run()`](Finder::run) to execute. For the common case of "all
/// matching paths under a directory", prefer the [`find()`](crate::find)
/// convenience function.
///
/// # Example
///
/// ```rust,no_run
/// use fsprobe::Finder;
///
/// let matches = Finder::new("/var/log", "*.log")
///     .max_depth(2)
///     .collect_skipped(true)
///     .run()
///     .unwrap();
///
/// for err in &matches.skipped {
///     eprintln!("skipped: {:?}", err.path());
/// }
/// ```
pub struct Finder {
    root: PathBuf,
    pattern: String,
    max_depth: Option<usize>,
    follow_links: bool,
    collect_skipped: bool,
}

impl Finder {
    /// A finder rooted at `directory`, matching base names against the shell
    /// glob `pattern` (`*`, `?`, `[...]`; case-sensitive).
    pub fn new(directory: impl AsRef<Path>, pattern: impl Into<String>) -> Self {
        Self {
            root: directory.as_ref().to_path_buf(),
            pattern: pattern.into(),
            max_depth: None,
            follow_links: false,
            collect_skipped: false,
        }
    }

    // ── Options ───────────────────────────────────────────────────────────

    /// Maximum traversal depth. `0` means the root only, `1` means one
    /// level of children, and so on. Unlimited by default.
    pub fn max_depth(mut self, d: usize) -> Self {
        self.max_depth = Some(d);
        self
    }

    /// Follow symbolic links during the walk. Disabled by default.
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.follow_links = yes;
        self
    }

    /// Collect unreadable entries into [`Matches::skipped`].
    ///
    /// Disabled by default. When enabled, skip-on-error events (permission
    /// denied, symlink loops) are recorded rather than silently dropped.
    pub fn collect_skipped(mut self, yes: bool) -> Self {
        self.collect_skipped = yes;
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Walk the tree and return every matching regular file.
    ///
    /// The walk is depth-first and stable per run. A missing root is not an
    /// error: it yields an empty result, like any unreadable subtree.
    ///
    /// # Errors
    ///
    /// [`ProbeError::InvalidPattern`] if the glob does not compile. Traversal
    /// problems never fail the run.
    pub fn run(self) -> Result<Matches, ProbeError> {
        let matcher = compile_pattern(&self.pattern)?;

        debug!(root = %self.root.display(), pattern = %self.pattern, "starting recursive find");

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .standard_filters(false)
            .ignore(false)
            .parents(false)
            .hidden(false)
            .follow_links(self.follow_links)
            .same_file_system(false);

        if let Some(depth) = self.max_depth {
            builder.max_depth(Some(depth));
        }

        let start = Instant::now();

        let mut paths = Vec::new();
        let mut skipped = Vec::new();
        let mut files = 0usize;
        let mut dirs = 0usize;

        for res in builder.build() {
            let entry = match res {
                Ok(e) => e,
                Err(e) => {
                    let err = map_walk_error(e);
                    trace!(path = ?err.path(), "skipping unreadable entry");
                    if self.collect_skipped {
                        skipped.push(err);
                    }
                    continue;
                }
            };

            let ft = match entry.file_type() {
                Some(ft) => ft,
                None => continue,
            };

            // Count and classify
            if ft.is_dir() {
                dirs += 1;
            } else if ft.is_file() {
                files += 1;
            }

            // Skip the root itself
            if entry.depth() == 0 {
                continue;
            }

            // Only regular files participate in matching
            if !ft.is_file() {
                continue;
            }

            if matcher.is_match(entry.file_name()) {
                paths.push(entry.into_path());
            }
        }

        Ok(Matches {
            paths,
            skipped,
            stats: WalkStats::compute(files, dirs, start.elapsed()),
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn compile_pattern(pattern: &str) -> Result<GlobMatcher, ProbeError> {
    Glob::new(pattern)
        .map(|g| g.compile_matcher())
        .map_err(|e| ProbeError::InvalidPattern(e.to_string()))
}

// ---------------------------------------------------------------------------
// Map ignore::Error to ProbeError
// ---------------------------------------------------------------------------

fn map_walk_error(e: ignore::Error) -> ProbeError {
    match e {
        ignore::Error::WithPath { path, err } => match *err {
            ignore::Error::Io(io_err) => ProbeError::from_io(path, io_err),
            _ => ProbeError::Walk(format!("{}", err)),
        },
        ignore::Error::Loop { child, .. } => ProbeError::SymlinkLoop(child),
        ignore::Error::Io(io_err) => ProbeError::from_io(PathBuf::new(), io_err),
        other => ProbeError::Walk(other.to_string()),
    }
}
