//! Header extraction from LaTeX source.
//!
//! Dedicated `\name{}`/`\phone{}`/`\email{}` commands win when present;
//! otherwise the generator's own centered header block is read back.

use crate::model::{Header, Link};
use crate::text::{braced_args, clean_argument};
use regex::Regex;
use std::sync::LazyLock;

static NAME_CMD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\name\{([^}]*)\}").expect("invalid name pattern"));
static PHONE_CMD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\phone\{([^}]*)\}").expect("invalid phone pattern"));
static EMAIL_CMD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\email\{([^}]*)\}").expect("invalid email pattern"));
static HUGE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\\textbf\{\\Huge\s*\\scshape\s*([^}]*)\}").expect("invalid heading name pattern")
});
static MAILTO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\href\{mailto:([^}]*)\}").expect("invalid mailto pattern"));

pub fn parse_header(source: &str) -> Header {
    let mut header = Header::default();

    if let Some(c) = NAME_CMD_RE.captures(source) {
        header.name = clean_argument(&c[1]);
    } else if let Some(c) = HUGE_NAME_RE.captures(source) {
        header.name = clean_argument(&c[1]);
    }

    if let Some(c) = PHONE_CMD_RE.captures(source) {
        header.phone = clean_argument(&c[1]);
    }

    if let Some(c) = EMAIL_CMD_RE.captures(source) {
        header.email = clean_argument(&c[1]);
    } else if let Some(c) = MAILTO_RE.captures(source) {
        header.email = c[1].to_string();
    }

    scan_center_block(source, &mut header);
    header.links = collect_links(source);
    header
}

/// Read the `\small` lines of the centered header block: the contact
/// line carries `$|$` separators (phone first), a bare one is the
/// optional location line.
fn scan_center_block(source: &str, header: &mut Header) {
    let Some(start) = source.find("\\begin{center}") else {
        return;
    };
    let block = match source[start..].find("\\end{center}") {
        Some(end) => &source[start..start + end],
        None => &source[start..],
    };

    for line in block.lines().map(str::trim) {
        let Some(rest) = line.strip_prefix("\\small ") else {
            continue;
        };
        if let Some((before, _)) = rest.split_once("$|$") {
            if header.phone.is_empty() {
                header.phone = clean_argument(before.trim());
            }
        } else if header.location.is_none() {
            let loc_part = rest.split("\\\\").next().unwrap_or("").trim();
            let loc = clean_argument(loc_part);
            if !loc.is_empty() {
                header.location = Some(loc);
            }
        }
    }
}

/// Collect every `\href{url}{label}` in source order, duplicates kept.
/// Mailto links count too; the caller decides what to do with them.
fn collect_links(source: &str) -> Vec<Link> {
    let mut links = Vec::new();
    let mut idx = 0;
    while let Some(pos) = source[idx..].find("\\href{") {
        let abs = idx + pos;
        if let Some(args) = braced_args(&source[abs + 5..], 2) {
            links.push(Link {
                label: clean_argument(&args[1]),
                url: args[0].clone(),
            });
        }
        idx = abs + 6;
    }
    links
}
