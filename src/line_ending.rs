/// The line-terminator convention of a text file.
///
/// Detected from the first line only; see
/// [`FileHandle::line_ending`](crate::FileHandle::line_ending). Files are not
/// required to be internally consistent; the first line decides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// `\n`
    Unix,

    /// `\r\n`
    Windows,

    /// A lone `\r` (classic Mac OS).
    Mac,
}

impl LineEnding {
    /// Classify a line by its trailing terminator.
    ///
    /// `\r\n` is checked before `\n`, so the variants are mutually exclusive.
    /// Returns `None` for a line with no recognized terminator (including the
    /// empty string).
    pub fn of_line(line: &str) -> Option<Self> {
        if line.ends_with("\r\n") {
            Some(Self::Windows)
        } else if line.ends_with('\n') {
            Some(Self::Unix)
        } else if line.ends_with('\r') {
            Some(Self::Mac)
        } else {
            None
        }
    }

    /// The terminator character sequence itself.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unix => "\n",
            Self::Windows => "\r\n",
            Self::Mac => "\r",
        }
    }
}
