//! Header recovery from flattened text.
//!
//! Name and location come from positional heuristics on the first two
//! lines; email, phone and links come from whole-text pattern scans, so
//! they survive arbitrary reflowing.

use super::RecoverOptions;
use crate::model::{Header, Link};
use crate::vocab::{EMAIL_RE, GITHUB_RE, LINKEDIN_RE, PHONE_RE, RELOCATION_KEYWORDS, URL_RE};

const LINKEDIN_PLACEHOLDER: &str = "https://linkedin.com/in/yourprofile";
const GITHUB_PLACEHOLDER: &str = "https://github.com/yourusername";
const PORTFOLIO_PLACEHOLDER: &str = "https://yourportfolio.com";

pub fn extract_header(text: &str, lines: &[&str], opts: &RecoverOptions) -> Header {
    let mut header = Header::default();

    if let Some(first) = lines.first() {
        if is_name_line(first) {
            header.name = first.to_string();
        }
    }
    if let Some(second) = lines.get(1) {
        if is_location_line(second, opts) {
            header.location = Some(second.to_string());
        }
    }

    if let Some(m) = EMAIL_RE.find(text) {
        header.email = m.as_str().to_string();
    }
    header.phone = find_phone(text).unwrap_or_default();
    header.links = collect_links(text);
    header
}

/// A plausible name: short, and free of digits and contact punctuation.
fn is_name_line(line: &str) -> bool {
    let len = line.chars().count();
    (3..=50).contains(&len)
        && !line
            .chars()
            .any(|c| c.is_ascii_digit() || matches!(c, '@' | '(' | ')' | '+'))
}

/// A plausible location line: modest length, no email, does not start
/// like a phone number, and carries either a comma or a known
/// place/relocation keyword.
fn is_location_line(line: &str, opts: &RecoverOptions) -> bool {
    let len = line.chars().count();
    if !(3..=100).contains(&len) || line.contains('@') {
        return false;
    }
    if line.starts_with(|c: char| c.is_ascii_digit() || c == '+') {
        return false;
    }
    let lower = line.to_lowercase();
    line.contains(',')
        || RELOCATION_KEYWORDS.iter().any(|k| lower.contains(k))
        || opts.cities.iter().any(|c| lower.contains(&c.to_lowercase()))
}

/// First phone-shaped run holding at least ten digits. The digit
/// minimum keeps year ranges from matching.
fn find_phone(text: &str) -> Option<String> {
    PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .find(|s| s.chars().filter(|c| c.is_ascii_digit()).count() >= 10)
}

fn collect_links(text: &str) -> Vec<Link> {
    let mut links = Vec::new();

    if text.contains("LinkedIn") {
        let url = LINKEDIN_RE
            .captures(text)
            .map(|c| format!("https://linkedin.com/in/{}", &c[1]))
            .unwrap_or_else(|| LINKEDIN_PLACEHOLDER.to_string());
        links.push(Link {
            label: "LinkedIn".to_string(),
            url,
        });
    }
    if text.contains("GitHub") {
        let url = GITHUB_RE
            .captures(text)
            .map(|c| format!("https://github.com/{}", &c[1]))
            .unwrap_or_else(|| GITHUB_PLACEHOLDER.to_string());
        links.push(Link {
            label: "GitHub".to_string(),
            url,
        });
    }
    if text.contains("Portfolio Website") {
        links.push(Link {
            label: "Portfolio Website".to_string(),
            url: PORTFOLIO_PLACEHOLDER.to_string(),
        });
    }

    for m in URL_RE.find_iter(text) {
        let url = m.as_str().trim_end_matches([')', '.', ',', ';']);
        let lower = url.to_lowercase();
        if lower.contains("linkedin.com") || lower.contains("github.com") {
            continue;
        }
        links.push(Link {
            label: host_label(url),
            url: url.to_string(),
        });
    }

    links
}

fn host_label(url: &str) -> String {
    let rest = url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .trim_start_matches("www.");
    rest.split('/').next().unwrap_or(rest).to_string()
}
