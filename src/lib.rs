//! # fsprobe
//!
//! Small file-metadata toolkit: path escaping, file handles, recursive glob search.
//!
//! fsprobe is a thin, synchronous convenience layer over the platform's
//! filesystem primitives. It owns three things: a shell-safe path escaper
//! ([`escape`]), a path-wrapping value object ([`FileHandle`]) with derived
//! accessors and filesystem queries, and a recursive glob finder ([`find`],
//! [`Finder`]). It does **not** own output formatting, caching, or any
//! concurrency; callers that want those build them on top.
//!
//! # Quick Start
//!
//! ```rust
//! use fsprobe::FileHandle;
//!
//! let handle = FileHandle::new("/music/album/track 01.flac");
//! assert_eq!(handle.directory(), "/music/album");
//! assert_eq!(handle.extension(), ".flac");
//! assert_eq!(handle.escaped_name(), "\"/music/album/track\\ 01.flac\"");
//!
//! // Type predicates never fail; a missing path answers false everywhere.
//! assert!(!handle.exists());
//! assert!(!handle.is_directory());
//!
//! // A missing root is not an error; the finder just comes back empty.
//! let matches = fsprobe::find("/no/such/directory", "*.flac").unwrap();
//! assert!(matches.is_empty());
//! ```
//!
//! # Reading file content
//!
//! Content queries open the file per call and release it before returning,
//! so a handle never pins a file descriptor:
//!
//! ```rust,no_run
//! use fsprobe::{FileHandle, LineEnding};
//!
//! let handle = FileHandle::new("notes.txt");
//! let lines = handle.read_lines()?;          // terminators retained
//! let count = handle.line_count()?;
//! assert_eq!(lines.len(), count);
//!
//! if handle.line_ending()? == Some(LineEnding::Windows) {
//!     println!("CRLF file");
//! }
//! # Ok::<(), fsprobe::ProbeError>(())
//! ```
//!
//! # Searching with options
//!
//! The [`Finder`] builder exposes the traversal knobs the one-shot [`find`]
//! leaves at their defaults:
//!
//! ```rust,no_run
//! let matches = fsprobe::Finder::new("/var/log", "*.log")
//!     .max_depth(2)
//!     .collect_skipped(true)
//!     .run()
//!     .unwrap();
//!
//! println!("{} matches, {} entries skipped", matches.paths.len(), matches.skipped.len());
//! ```

#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

mod error;
mod escape;
mod finder;
mod handle;
mod line_ending;
mod results;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use error::ProbeError;
pub use escape::escape;
pub use finder::Finder;
pub use handle::FileHandle;
pub use line_ending::LineEnding;
pub use results::{Matches, WalkStats};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Recursively search `directory` for regular files whose base name matches
/// the shell glob `pattern` (`*`, `?`, `[...]`; case-sensitive).
///
/// Returns the matching paths in walk order. A missing `directory` yields an
/// empty vector, and unreadable subtrees are silently skipped; the only
/// error is a pattern that does not compile. For traversal options or skip
/// diagnostics, use the [`Finder`] builder.
///
/// # Example
///
/// ```rust
/// let matches = fsprobe::find("/no/such/directory", "*.txt").unwrap();
/// assert!(matches.is_empty());
/// ```
pub fn find(directory: impl AsRef<Path>, pattern: &str) -> Result<Vec<PathBuf>, ProbeError> {
    Ok(Finder::new(directory, pattern).run()?.paths)
}
