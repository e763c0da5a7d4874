//! Multi-line command-argument reassembly.
//!
//! The template emits multi-argument commands across several source
//! lines (`\resumeSubheading` followed by two brace-pair lines). When
//! the opening line holds fewer matched pairs than the command's arity,
//! subsequent non-blank lines are space-joined until the unescaped brace
//! counts balance at or above the arity, with a runaway guard.

use crate::text::{brace_counts, braced_args};

/// Hard cap on appended lines while hunting for balanced braces.
pub const MAX_APPENDED_LINES: usize = 10;

/// Reassemble a command starting at `lines[start]` until it holds at
/// least `min_args` balanced brace groups, then extract those groups.
///
/// Returns the arguments and the number of input lines consumed, or
/// `None` when the guard trips or input runs out: recovery of that one
/// command is abandoned, nothing else.
pub fn reassemble_command(
    lines: &[&str],
    start: usize,
    min_args: usize,
) -> Option<(Vec<String>, usize)> {
    let mut buf = lines[start].trim().to_string();
    let mut next = start + 1;
    let mut appended = 0;

    loop {
        let (open, close) = brace_counts(&buf);
        if open == close && open >= min_args {
            let args = braced_args(&buf, min_args)?;
            return Some((args, next - start));
        }
        if appended >= MAX_APPENDED_LINES {
            return None;
        }
        while next < lines.len() && lines[next].trim().is_empty() {
            next += 1;
        }
        if next >= lines.len() {
            return None;
        }
        buf.push(' ');
        buf.push_str(lines[next].trim());
        next += 1;
        appended += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_command() {
        let lines = vec!["\\resumeItem{Built thing}"];
        let (args, used) = reassemble_command(&lines, 0, 1).unwrap();
        assert_eq!(args, vec!["Built thing"]);
        assert_eq!(used, 1);
    }

    #[test]
    fn test_four_args_across_three_lines() {
        let lines = vec![
            "    \\resumeSubheading",
            "      {Acme Corp}{Jan. 2020 -- Present}",
            "      {Engineer}{Mumbai}",
            "      \\resumeItemListStart",
        ];
        let (args, used) = reassemble_command(&lines, 0, 4).unwrap();
        assert_eq!(args, vec!["Acme Corp", "Jan. 2020 -- Present", "Engineer", "Mumbai"]);
        assert_eq!(used, 3);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let lines = vec!["\\resumeSubheading", "", "{a}{b}", "{c}{d}"];
        let (args, used) = reassemble_command(&lines, 0, 4).unwrap();
        assert_eq!(args, vec!["a", "b", "c", "d"]);
        assert_eq!(used, 4);
    }

    #[test]
    fn test_runaway_guard() {
        let mut lines = vec!["\\resumeSubheading {unclosed"];
        for _ in 0..15 {
            lines.push("noise");
        }
        assert!(reassemble_command(&lines, 0, 4).is_none());
    }

    #[test]
    fn test_input_exhausted() {
        let lines = vec!["\\resumeSubheading", "{a}{b}"];
        assert!(reassemble_command(&lines, 0, 4).is_none());
    }
}
