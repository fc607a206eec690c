use std::fs;
use std::io::{BufRead, BufReader};
use std::path::{Path, MAIN_SEPARATOR};

use tracing::trace;

use crate::error::ProbeError;
use crate::escape::escape;
use crate::line_ending::LineEnding;

/// A value object wrapping one path string.
///
/// Construction stores the path verbatim and derives the directory component
/// once; it performs no filesystem access and cannot fail. The handle holds
/// no open resources; queries that read the file open and close it within
/// the call.
///
/// Type predicates ([`exists`](Self::exists), [`is_directory`](Self::is_directory),
/// ...) never fail: a nonexistent path simply answers `false`. Each call asks
/// the filesystem again; answers may change between calls if the entry does.
///
/// # Example
///
/// ```rust
/// use fsprobe::FileHandle;
///
/// let handle = FileHandle::new("/music/artist/album/track 01.flac");
/// assert_eq!(handle.directory(), "/music/artist/album");
/// assert_eq!(handle.file_name_only(), "track 01.flac");
/// assert_eq!(handle.extension(), ".flac");
/// assert_eq!(handle.depth(), 2);
/// assert!(handle.is_absolute());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    /// The constructor argument, never mutated.
    full_name: String,

    /// Everything before the last separator, derived at construction.
    directory: String,
}

impl FileHandle {
    /// Wrap a path string, absolute or relative.
    pub fn new(path: impl Into<String>) -> Self {
        let full_name = path.into();
        let directory = match full_name.rfind(MAIN_SEPARATOR) {
            Some(idx) => full_name[..idx].to_string(),
            None => String::new(),
        };
        Self {
            full_name,
            directory,
        }
    }

    fn as_path(&self) -> &Path {
        Path::new(&self.full_name)
    }

    // ── Pure accessors ────────────────────────────────────────────────────

    /// The original path string, exactly as passed to the constructor.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// The path quoted and escaped for shell usage. See [`escape`].
    pub fn escaped_name(&self) -> String {
        escape(&self.full_name)
    }

    /// All path segments except the last; empty if the path has no separator.
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// The final path segment (base name).
    pub fn file_name_only(&self) -> &str {
        self.full_name
            .rsplit(MAIN_SEPARATOR)
            .next()
            .unwrap_or(&self.full_name)
    }

    /// The substring after the final `.`, prefixed with `.`; empty if the
    /// path contains no dot.
    ///
    /// Operates on the whole path, not just the base name: a dotted directory
    /// component (`a.b/file`) yields an extension. Preserved existing behavior.
    pub fn extension(&self) -> String {
        match self.full_name.rfind('.') {
            Some(idx) => format!(".{}", &self.full_name[idx + 1..]),
            None => String::new(),
        }
    }

    /// How many levels deep the file sits: the number of path segments
    /// strictly between the leading segment and the trailing file name.
    /// Absolute and relative forms of the same path agree; a bare file name
    /// is at depth 0.
    pub fn depth(&self) -> usize {
        self.full_name
            .split(MAIN_SEPARATOR)
            .filter(|seg| !seg.is_empty())
            .count()
            .saturating_sub(2)
    }

    /// Whether the path is rooted per platform convention. Pure path check,
    /// no filesystem access.
    pub fn is_absolute(&self) -> bool {
        self.as_path().is_absolute()
    }

    // ── Filesystem type predicates ────────────────────────────────────────

    /// `true` if a regular file exists at the path (follows symlinks).
    #[inline]
    pub fn exists(&self) -> bool {
        self.as_path().is_file()
    }

    /// `true` if the path names a directory.
    #[inline]
    pub fn is_directory(&self) -> bool {
        self.as_path().is_dir()
    }

    /// `true` if the path names a regular file.
    #[inline]
    pub fn is_regular_file(&self) -> bool {
        self.as_path().is_file()
    }

    /// `true` if the path itself is a symbolic link (the link is not followed).
    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.as_path().is_symlink()
    }

    /// `true` if the path is a mount point.
    ///
    /// A symlink is never a mount point. Otherwise the entry is one when it
    /// and its parent live on different devices, or share the same inode
    /// (a filesystem root).
    #[cfg(unix)]
    pub fn is_mount_point(&self) -> bool {
        use std::os::unix::fs::MetadataExt;

        let meta = match fs::symlink_metadata(self.as_path()) {
            Ok(m) => m,
            Err(_) => return false,
        };
        if meta.file_type().is_symlink() {
            return false;
        }
        let parent = match fs::metadata(self.as_path().join("..")) {
            Ok(m) => m,
            Err(_) => return false,
        };
        meta.dev() != parent.dev() || meta.ino() == parent.ino()
    }

    /// `true` if the path is a mount point. Without Unix device metadata only
    /// a parentless root qualifies.
    #[cfg(not(unix))]
    pub fn is_mount_point(&self) -> bool {
        self.as_path().parent().is_none()
    }

    // ── File content queries ──────────────────────────────────────────────

    /// Read the file as UTF-8 text and return its lines, each retaining its
    /// terminator (except possibly the last).
    ///
    /// The file is opened and closed within the call. Open and read failures
    /// are classified ([`ProbeError::NotFound`], [`ProbeError::PermissionDenied`])
    /// and propagated.
    pub fn read_lines(&self) -> Result<Vec<String>, ProbeError> {
        trace!(path = %self.full_name, "reading lines");

        let file = fs::File::open(self.as_path())
            .map_err(|e| ProbeError::from_io(self.as_path(), e))?;
        let mut reader = BufReader::new(file);
        let mut lines = Vec::new();

        loop {
            let mut line = String::new();
            let read = reader
                .read_line(&mut line)
                .map_err(|e| ProbeError::from_io(self.as_path(), e))?;
            if read == 0 {
                break;
            }
            lines.push(line);
        }

        Ok(lines)
    }

    /// How many lines the file contains. Re-reads the file on every call.
    pub fn line_count(&self) -> Result<usize, ProbeError> {
        Ok(self.read_lines()?.len())
    }

    /// Detect the file's line-terminator convention from its first line.
    ///
    /// `Ok(None)` for an empty file or a first line with no recognized
    /// terminator. Only the first line is read.
    pub fn line_ending(&self) -> Result<Option<LineEnding>, ProbeError> {
        Ok(LineEnding::of_line(&self.first_line()?))
    }

    /// `true` if the first line ends with `\r\n`.
    pub fn has_windows_line_endings(&self) -> Result<bool, ProbeError> {
        Ok(self.line_ending()? == Some(LineEnding::Windows))
    }

    /// `true` if the first line ends with `\n` but not `\r\n`.
    pub fn has_unix_line_endings(&self) -> Result<bool, ProbeError> {
        Ok(self.line_ending()? == Some(LineEnding::Unix))
    }

    /// `true` if the first line ends with a lone `\r` (classic Mac).
    pub fn has_mac_line_endings(&self) -> Result<bool, ProbeError> {
        Ok(self.line_ending()? == Some(LineEnding::Mac))
    }

    /// Byte size of the file as reported by the filesystem.
    pub fn size(&self) -> Result<u64, ProbeError> {
        let meta = fs::metadata(self.as_path())
            .map_err(|e| ProbeError::from_io(self.as_path(), e))?;
        Ok(meta.len())
    }

    /// Read only the first line, terminator included if present.
    fn first_line(&self) -> Result<String, ProbeError> {
        let file = fs::File::open(self.as_path())
            .map_err(|e| ProbeError::from_io(self.as_path(), e))?;
        let mut reader = BufReader::new(file);
        let mut line = String::new();
        reader
            .read_line(&mut line)
            .map_err(|e| ProbeError::from_io(self.as_path(), e))?;
        Ok(line)
    }
}
