//! Shared text normalization: LaTeX escaping, date token formatting and
//! brace/command matching. Used by both the generator and the parsers.

/// Month display table, indexed by month-1. Matches the generator template
/// exactly; the recoverer's month recognition is prefix-based and accepts
/// these as well as bare three-letter abbreviations.
pub const MONTHS: [&str; 12] = [
    "Jan.", "Feb.", "Mar.", "Apr.", "May", "June", "July", "Aug.", "Sep.", "Oct.", "Nov.", "Dec.",
];

/// Escape raw user text for insertion into the LaTeX template.
///
/// Single pass, so backslashes introduced by one replacement are never
/// re-escaped by a later one. Input is assumed to be raw text: escaping
/// generator output double-escapes, which is a documented limitation.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

/// Inverse of [`escape_markup`]: recover raw text from escaped markup.
///
/// Unrecognized command sequences are left untouched; the parsers only
/// call this on text the generator (or a compatible template) escaped.
pub fn unescape_markup(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] != '\\' {
            out.push(chars[i]);
            i += 1;
            continue;
        }
        let rest: String = chars[i + 1..].iter().collect();
        if rest.starts_with("textbackslash{}") {
            out.push('\\');
            i += 1 + "textbackslash{}".len();
        } else if rest.starts_with("textasciitilde{}") {
            out.push('~');
            i += 1 + "textasciitilde{}".len();
        } else if rest.starts_with("textasciicircum{}") {
            out.push('^');
            i += 1 + "textasciicircum{}".len();
        } else if matches!(
            chars.get(i + 1),
            Some('&' | '%' | '$' | '#' | '_' | '{' | '}')
        ) {
            out.push(chars[i + 1]);
            i += 2;
        } else {
            out.push('\\');
            i += 1;
        }
    }
    out
}

/// Format a date token for display.
///
/// Tokens with any alphabetic character ("Present", "Jan 2020") pass
/// through unchanged; `YYYY-MM` becomes "{Month} {YYYY}" via [`MONTHS`];
/// anything else (bare year, empty) passes through.
pub fn format_date(token: &str) -> String {
    if token.chars().any(|c| c.is_ascii_alphabetic()) {
        return token.to_string();
    }
    if let Some((year, month)) = token.split_once('-') {
        if year.len() == 4 && year.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(m) = month.parse::<usize>() {
                if (1..=12).contains(&m) {
                    return format!("{} {}", MONTHS[m - 1], year);
                }
            }
        }
    }
    token.to_string()
}

pub fn format_date_range(start: &str, end: &str) -> String {
    format!("{} -- {}", format_date(start), format_date(end))
}

/// Count unescaped `{` and `}` in a string. Escaped braces (`\{`, `\}`)
/// do not count; a double backslash does not escape a following brace.
pub fn brace_counts(s: &str) -> (usize, usize) {
    let mut open = 0;
    let mut close = 0;
    let mut escaped = false;
    for c in s.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => open += 1,
            '}' => close += 1,
            _ => {}
        }
    }
    (open, close)
}

/// Extract the first `n` top-level brace-delimited argument groups from a
/// string, nesting-aware and skipping escaped braces. Returns `None` if
/// fewer than `n` complete groups are present.
pub fn braced_args(s: &str, n: usize) -> Option<Vec<String>> {
    let mut args = Vec::with_capacity(n);
    let mut depth = 0usize;
    let mut current = String::new();
    let mut escaped = false;
    for c in s.chars() {
        if escaped {
            if depth > 0 {
                current.push('\\');
                current.push(c);
            }
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '{' => {
                if depth > 0 {
                    current.push(c);
                }
                depth += 1;
            }
            '}' => {
                if depth == 0 {
                    return None; // unbalanced
                }
                depth -= 1;
                if depth == 0 {
                    args.push(std::mem::take(&mut current));
                    if args.len() == n {
                        return Some(args);
                    }
                } else {
                    current.push(c);
                }
            }
            _ => {
                if depth > 0 {
                    current.push(c);
                }
            }
        }
    }
    None
}

/// Remove inline formatting commands from a heading argument, keeping
/// their content: `\textbf{X}` -> `X`, `$|$` -> `|`, bare size/shape
/// tokens dropped. Escaped specials (`\&` etc.) are preserved for a
/// later [`unescape_markup`] pass.
pub fn strip_inline_markup(s: &str) -> String {
    const WRAPPERS: &[&str] = &["textbf", "textit", "emph", "underline"];
    const TOKENS: &[&str] = &["small", "scshape", "Huge", "Large", "large"];

    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut drop_depths: Vec<usize> = Vec::new();
    let mut depth = 0usize;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '\\' {
            // Escaped single character: keep verbatim.
            if i + 1 < chars.len() && !chars[i + 1].is_ascii_alphabetic() {
                out.push('\\');
                out.push(chars[i + 1]);
                i += 2;
                continue;
            }
            let start = i + 1;
            let mut j = start;
            while j < chars.len() && chars[j].is_ascii_alphabetic() {
                j += 1;
            }
            let word: String = chars[start..j].iter().collect();
            if WRAPPERS.contains(&word.as_str()) && chars.get(j) == Some(&'{') {
                depth += 1;
                drop_depths.push(depth);
                i = j + 1;
                continue;
            }
            if TOKENS.contains(&word.as_str()) {
                i = j;
                if chars.get(i) == Some(&' ') {
                    i += 1;
                }
                continue;
            }
            out.push('\\');
            out.push_str(&word);
            i = j;
            continue;
        }
        if c == '{' {
            depth += 1;
            out.push(c);
            i += 1;
            continue;
        }
        if c == '}' {
            if drop_depths.last() == Some(&depth) {
                drop_depths.pop();
            } else {
                out.push(c);
            }
            depth = depth.saturating_sub(1);
            i += 1;
            continue;
        }
        if c == '$' && chars.get(i + 1) == Some(&'|') && chars.get(i + 2) == Some(&'$') {
            out.push('|');
            i += 3;
            continue;
        }
        out.push(c);
        i += 1;
    }
    out.trim().to_string()
}

/// Strip markup and unescape in one step: the standard way to read a
/// heading argument back into raw field text.
pub fn clean_argument(s: &str) -> String {
    unescape_markup(&strip_inline_markup(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_specials() {
        assert_eq!(escape_markup("R&D 100% $5 #1"), "R\\&D 100\\% \\$5 \\#1");
        assert_eq!(escape_markup("a_b{c}"), "a\\_b\\{c\\}");
    }

    #[test]
    fn test_escape_backslash_not_reescaped() {
        // The backslash introduced for '&' must not itself get escaped.
        let escaped = escape_markup("\\&");
        assert_eq!(escaped, "\\textbackslash{}\\&");
    }

    #[test]
    fn test_escape_tilde_caret() {
        assert_eq!(escape_markup("~^"), "\\textasciitilde{}\\textasciicircum{}");
    }

    #[test]
    fn test_unescape_roundtrip() {
        for raw in ["R&D 100%", "a_b{c}", "\\&", "plain", "~x^y"] {
            assert_eq!(unescape_markup(&escape_markup(raw)), raw);
        }
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2021-01"), "Jan. 2021");
        assert_eq!(format_date("2023-06"), "June 2023");
        assert_eq!(format_date("Present"), "Present");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("2021"), "2021");
        assert_eq!(format_date("Jan 2020"), "Jan 2020");
    }

    #[test]
    fn test_format_date_range() {
        assert_eq!(format_date_range("2020-01", "Present"), "Jan. 2020 -- Present");
    }

    #[test]
    fn test_brace_counts_skip_escaped() {
        assert_eq!(brace_counts("{a}{b}"), (2, 2));
        assert_eq!(brace_counts("\\{a\\}"), (0, 0));
        assert_eq!(brace_counts("{a\\{b}"), (1, 1));
    }

    #[test]
    fn test_braced_args_flat() {
        let args = braced_args("\\cmd {a}{b} {c}{d}", 4).unwrap();
        assert_eq!(args, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_braced_args_nested() {
        let args = braced_args("\\x {\\textbf{Name} $|$ \\emph{Tech}}{Jan. 2021}", 2).unwrap();
        assert_eq!(args[0], "\\textbf{Name} $|$ \\emph{Tech}");
        assert_eq!(args[1], "Jan. 2021");
    }

    #[test]
    fn test_braced_args_insufficient() {
        assert!(braced_args("{a}{b}", 3).is_none());
        assert!(braced_args("{a", 1).is_none());
    }

    #[test]
    fn test_strip_inline_markup() {
        assert_eq!(
            strip_inline_markup("\\textbf{Name} $|$ \\emph{Tech}"),
            "Name | Tech"
        );
        assert_eq!(strip_inline_markup("\\Huge \\scshape Jane Doe"), "Jane Doe");
        assert_eq!(strip_inline_markup("\\textbf{R\\&D}"), "R\\&D");
    }

    #[test]
    fn test_clean_argument() {
        assert_eq!(clean_argument("\\textbf{R\\&D \\#1}"), "R&D #1");
    }
}
