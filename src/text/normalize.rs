//! Best-effort normalization of pasted verification info.
//!
//! Users paste signatures in several shapes: one token per line, tokens
//! separated by spaces, or a quoted JSON string array copied from a web page.
//! The output is always one token per line (package name first, then one
//! digest per line), terminated by a newline. The format sniffing is
//! heuristic; its quirks are part of the contract.

use crate::text::lines::split_lines;
use tracing::trace;

/// Remove at most one `"` from each end.
fn strip_outer_quote(s: &str) -> &str {
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}

/// Apply `f` to every line and terminate each result with a newline.
fn map_lines<F>(text: &str, f: F) -> String
where
    F: Fn(&str) -> String,
{
    split_lines(text)
        .into_iter()
        .map(|line| {
            let mut out = f(line);
            out.push('\n');
            out
        })
        .collect()
}

/// Normalize arbitrary pasted text into canonical verification info text.
///
/// Never fails. Malformed input yields malformed output, which the matcher
/// rejects when it needs a line that is not there.
pub fn normalize(raw: &str) -> String {
    let unquoted = strip_outer_quote(raw.trim());
    let trimmed_text = map_lines(unquoted, |line| line.trim().to_string());

    if trimmed_text.contains('"') {
        trace!("normalizing verification info as a quoted string array");
        // The last two lines are the closing bracket and the empty line after it.
        let lines = split_lines(&trimmed_text);
        let keep = lines.len().saturating_sub(2);
        lines[..keep]
            .iter()
            .map(|line| {
                let split = line.trim().replace(' ', "\n");
                let mut out = strip_outer_quote(&split).to_string();
                out.push('\n');
                out
            })
            .collect()
    } else if trimmed_text.contains(' ') {
        trace!("normalizing verification info as space separated tokens");
        map_lines(&trimmed_text, |line| line.trim().replace(' ', "\n"))
    } else {
        trimmed_text
    }
}
