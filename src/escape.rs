/// Characters that must be backslash-prefixed inside the quoted output.
const SPECIAL: [char; 9] = ['\\', '"', '[', ']', '(', ')', ' ', '$', '`'];

/// Escape a path for safe interpolation into a shell command line.
///
/// Wraps the input in double quotes and prepends a backslash to every
/// backslash, double quote, square bracket, parenthesis, space, dollar sign,
/// and backtick. No other transformation is applied.
///
/// The function is total: any input, including the empty string, yields a
/// valid shell-quoted token.
///
/// # Example
///
/// ```rust
/// assert_eq!(fsprobe::escape("track 01 (live).flac"),
///            "\"track\\ 01\\ \\(live\\).flac\"");
/// assert_eq!(fsprobe::escape("plain.txt"), "\"plain.txt\"");
/// assert_eq!(fsprobe::escape(""), "\"\"");
/// ```
pub fn escape(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 2);
    out.push('"');
    for ch in path.chars() {
        if SPECIAL.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}
