//! Fixed vocabulary tables and shared regexes for the heuristic parsers.
//!
//! Every allow-list the heuristics depend on lives here as a named
//! constant so it can be tested and extended independently of the
//! control flow that consumes it.

use crate::model::SectionKind;
use regex::Regex;
use std::sync::LazyLock;

/// Default place-name allow-list: recognizes location fields at the end
/// of company/institution lines and suppresses misclassifying a bare
/// city name as body text. Sample-data-specific, hence configurable via
/// `RecoverOptions`.
pub const DEFAULT_CITIES: &[&str] = &[
    "Mumbai",
    "Pune",
    "Delhi",
    "Bangalore",
    "Hyderabad",
    "Chennai",
    "Kolkata",
    "Remote",
];

/// Bullet glyphs that start a new bullet line in flattened PDF text.
pub const BULLET_GLYPHS: &[char] = &['\u{2022}', '\u{25E6}', '\u{25AA}', '\u{2023}'];

/// Keywords that mark a header line as a location/relocation note.
pub const RELOCATION_KEYWORDS: &[&str] = &["remote", "relocate", "relocation", "open to"];

/// Words that identify an issuing-institution line under a custom entry.
pub const INSTITUTION_KEYWORDS: &[&str] =
    &["university", "institute", "college", "academy", "ministry"];

/// Words that, together with a 4-digit year, mark an award-style title.
pub const AWARD_KEYWORDS: &[&str] =
    &["finalist", "winner", "prize", "medal", "award", "hackathon"];

/// LaTeX command prefixes the body walker ignores as preamble or
/// structural noise. Checked after the commands it does parse.
pub const IGNORABLE_COMMAND_PREFIXES: &[&str] = &[
    "%",
    "\\documentclass",
    "\\usepackage",
    "\\input",
    "\\pagestyle",
    "\\fancyhf",
    "\\fancyfoot",
    "\\renewcommand",
    "\\newcommand",
    "\\addtolength",
    "\\urlstyle",
    "\\raggedbottom",
    "\\raggedright",
    "\\setlength",
    "\\titleformat",
    "\\pdfgentounicode",
    "\\vspace",
    "\\begin",
    "\\end",
    "\\item",
    "\\small",
    "\\resumeSubHeadingListStart",
    "\\resumeSubHeadingListEnd",
    "\\resumeItemListStart",
    "\\resumeItemListEnd",
];

/// A section-header marker: a shape the segmenter matches whole lines
/// against, and the kind/title the matching section receives.
#[derive(Debug)]
pub struct SectionMarker {
    pub kind: SectionKind,
    pub title: &'static str,
    pub pattern: Regex,
}

fn marker(kind: SectionKind, title: &'static str, pattern: &str) -> SectionMarker {
    SectionMarker {
        kind,
        title,
        pattern: Regex::new(pattern).expect("invalid section marker pattern"),
    }
}

/// Fixed section-header keyword table. Matching is case-insensitive and
/// whole-line.
pub static SECTION_MARKERS: LazyLock<Vec<SectionMarker>> = LazyLock::new(|| {
    vec![
        marker(SectionKind::Experience, "Experience", r"(?i)^Experience$"),
        marker(SectionKind::Education, "Education", r"(?i)^Education$"),
        marker(
            SectionKind::Skills,
            "Technical Skills",
            r"(?i)^(Technical\s*)?Skills?$",
        ),
        marker(SectionKind::Projects, "Projects", r"(?i)^Projects?$"),
        marker(SectionKind::Custom, "Awards", r"(?i)^Awards?$"),
        marker(
            SectionKind::Custom,
            "Certifications",
            r"(?i)^Certifications?$",
        ),
    ]
});

/// Match a whole line against the section-header table.
pub fn match_section_header(line: &str) -> Option<&'static SectionMarker> {
    SECTION_MARKERS
        .iter()
        .find(|m| m.pattern.is_match(line.trim()))
}

/// Classify a section title (e.g. from `\section{...}`) by the same table.
pub fn classify_section_title(title: &str) -> Option<&'static SectionMarker> {
    match_section_header(title)
}

/// A human month-year token: abbreviated or full month name, optional
/// period, then a 4-digit year.
pub static MONTH_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b((?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*)\.?\s+(\d{4})",
    )
    .expect("invalid month-year pattern")
});

/// Month-year anchored at the end of a line, used for title/date stripping.
pub static TRAILING_MONTH_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(.*?)[\s,|]*((?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*)\.?\s+(\d{4})$",
    )
    .expect("invalid trailing month-year pattern")
});

/// Role + date-range line: optional role text, a month-year, an en-dash
/// or hyphen, then the end token (month-year or "Present").
pub static ROLE_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(.*?)\s*((?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*)\.?\s+(\d{4})\s*[\u{2013}\u{2014}-]+\s*(.+)$",
    )
    .expect("invalid role-date pattern")
});

pub static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9][A-Za-z0-9._%+-]*@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
        .expect("invalid email pattern")
});

/// Loose phone shape: optional `+`, then 10+ digits, allowing common
/// punctuation between digit runs.
pub static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\+?\d[\d\s().-]{8,}\d").expect("invalid phone pattern")
});

pub static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://[^\s|]+").expect("invalid url pattern"));

pub static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)linkedin\.com/in/([A-Za-z0-9-]+)").expect("invalid linkedin pattern")
});

pub static GITHUB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)github\.com/([A-Za-z0-9-]+)").expect("invalid github pattern")
});

/// Does a token read as a date rather than a location? Accepts month-year
/// tokens, `YYYY-MM`, bare 4-digit years and en-dash/`--` ranges.
pub fn looks_like_date(token: &str) -> bool {
    let t = token.trim();
    if t.is_empty() {
        return false;
    }
    if MONTH_YEAR_RE.is_match(t) || t.contains("--") || t.contains('\u{2013}') {
        return true;
    }
    if t.len() == 4 && t.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    if let Some((y, m)) = t.split_once('-') {
        return y.len() == 4
            && y.chars().all(|c| c.is_ascii_digit())
            && m.chars().all(|c| c.is_ascii_digit());
    }
    t.eq_ignore_ascii_case("present")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_markers_case_insensitive() {
        assert_eq!(
            match_section_header("EXPERIENCE").unwrap().kind,
            SectionKind::Experience
        );
        assert_eq!(
            match_section_header("technical skills").unwrap().title,
            "Technical Skills"
        );
        assert_eq!(match_section_header("Skills").unwrap().title, "Technical Skills");
        assert_eq!(match_section_header("Award").unwrap().title, "Awards");
        assert!(match_section_header("My Experience Overview").is_none());
    }

    #[test]
    fn test_month_year_matching() {
        assert!(MONTH_YEAR_RE.is_match("Jan 2020"));
        assert!(MONTH_YEAR_RE.is_match("June 2023"));
        assert!(MONTH_YEAR_RE.is_match("Sep. 2019"));
        assert!(!MONTH_YEAR_RE.is_match("January"));
    }

    #[test]
    fn test_role_date_line() {
        let caps = ROLE_DATE_RE.captures("Engineer Jan 2020 \u{2013} Present").unwrap();
        assert_eq!(caps.get(1).unwrap().as_str(), "Engineer");
        assert_eq!(caps.get(2).unwrap().as_str(), "Jan");
        assert_eq!(caps.get(3).unwrap().as_str(), "2020");
        assert_eq!(caps.get(4).unwrap().as_str(), "Present");
    }

    #[test]
    fn test_looks_like_date() {
        assert!(looks_like_date("Jan 2020"));
        assert!(looks_like_date("2021-06"));
        assert!(looks_like_date("2021"));
        assert!(looks_like_date("Jan. 2020 -- Present"));
        assert!(!looks_like_date("Mumbai"));
        assert!(!looks_like_date(""));
    }

    #[test]
    fn test_phone_and_email_shapes() {
        assert!(PHONE_RE.is_match("+918483900303"));
        assert!(PHONE_RE.is_match("(555) 123-4567 x"));
        assert!(EMAIL_RE.is_match("contact me at a.b+c@example.co.uk please"));
    }
}
