//! Line splitting for pasted verification text.

/// Split on `\r\n`, `\n` or `\r`, keeping a final empty segment.
///
/// Unlike `str::lines`, a trailing terminator produces a trailing empty line:
/// `"a\nb\n"` splits into `["a", "b", ""]`, and `""` into `[""]`. The
/// normalizer's "drop the last two lines" step and the matcher's line
/// indexing both depend on this.
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&text[start..]);
    lines
}
