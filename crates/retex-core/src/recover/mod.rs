//! PDF-text structural recoverer: best-effort reconstruction of a
//! document from plain extracted text. The input has lost all markup;
//! section boundaries, entry boundaries and field roles are re-inferred
//! from keyword anchors, shape-matching and the place-name allow-list.
//!
//! Any line that matches no pattern at any stage is silently dropped.
//! The primary correctness target is text flattened from this crate's
//! own generated output; arbitrary third-party resumes recover
//! partially or not at all.

pub mod custom;
pub mod education;
pub mod experience;
pub mod header;
pub mod projects;
pub mod sections;
pub mod skills;

use crate::model::{derive_section_id, ResumeDocument, Section, SectionEntries, SectionKind};
use crate::vocab::{BULLET_GLYPHS, DEFAULT_CITIES};

/// Tunable tables for the recoverer. The place-name list is
/// sample-data-specific, so callers can swap it without touching the
/// control flow.
#[derive(Debug, Clone)]
pub struct RecoverOptions {
    /// Place names recognized at the end of company/institution lines.
    pub cities: Vec<String>,
}

impl Default for RecoverOptions {
    fn default() -> Self {
        RecoverOptions {
            cities: DEFAULT_CITIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Recover a partial document from flattened plain text.
pub fn recover(text: &str, opts: &RecoverOptions) -> ResumeDocument {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut doc = ResumeDocument::default();
    if lines.is_empty() {
        return doc;
    }

    doc.header = header::extract_header(text, &lines, opts);

    let mut taken_ids = Vec::new();
    for span in sections::segment(&lines) {
        let body = &lines[span.body_start..span.body_end];
        let entries = match span.marker.kind {
            SectionKind::Experience => {
                SectionEntries::Experience(experience::parse_entries(body, opts))
            }
            SectionKind::Education => {
                SectionEntries::Education(education::parse_entries(body, opts))
            }
            SectionKind::Skills => SectionEntries::Skills(skills::parse_entries(body)),
            SectionKind::Projects => SectionEntries::Projects(projects::parse_entries(body)),
            SectionKind::Custom => SectionEntries::Custom(custom::parse_entries(body, opts)),
        };
        if entries.is_empty() {
            continue;
        }
        doc.sections.push(Section {
            id: derive_section_id(span.marker.title, &mut taken_ids),
            title: span.marker.title.to_string(),
            entries,
        });
    }

    doc
}

pub(crate) fn is_bullet(line: &str) -> bool {
    line.chars()
        .next()
        .map(|c| BULLET_GLYPHS.contains(&c))
        .unwrap_or(false)
}

pub(crate) fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(|c| BULLET_GLYPHS.contains(&c)).trim()
}

/// Split a line ending in an allow-listed place name into
/// (prefix, city). Trailing separators before the city are dropped.
/// The prefix may be empty (a bare city name on its own line).
pub(crate) fn split_trailing_city<'a>(
    line: &str,
    cities: &'a [String],
) -> Option<(String, &'a str)> {
    let trimmed = line.trim();
    for city in cities {
        if let Some(start) = suffix_match_start(trimmed, city) {
            let prefix = trimmed[..start]
                .trim_end_matches([',', '|', '-', '\u{2013}'])
                .trim()
                .to_string();
            return Some((prefix, city.as_str()));
        }
    }
    None
}

/// Byte offset where `city` begins when `line` ends with it
/// case-insensitively, or `None`. Compared character by character from
/// the end, so the offset is a char boundary of `line` even when case
/// folding changes a character's byte length.
fn suffix_match_start(line: &str, city: &str) -> Option<usize> {
    let mut start = line.len();
    let mut line_chars = line.char_indices().rev();
    for city_char in city.chars().rev() {
        let (i, line_char) = line_chars.next()?;
        if !line_char.to_lowercase().eq(city_char.to_lowercase()) {
            return None;
        }
        start = i;
    }
    Some(start)
}

/// Glyph-delimited bullet collection shared by the entry recoverers.
///
/// A glyph line starts a new bullet; glyph-less lines continue the
/// current bullet (space-joined) unless `is_new_entry` says they open
/// the next entry; anything else ends collection. Advances `i` past the
/// consumed lines.
pub(crate) fn collect_bullets(
    lines: &[&str],
    i: &mut usize,
    is_new_entry: &dyn Fn(&str) -> bool,
) -> Vec<String> {
    let mut bullets = Vec::new();
    let mut current = String::new();

    while *i < lines.len() {
        let line = lines[*i];
        if is_bullet(line) {
            if !current.is_empty() {
                bullets.push(std::mem::take(&mut current));
            }
            current = strip_bullet(line).to_string();
            *i += 1;
        } else if !current.is_empty() {
            if is_new_entry(line) {
                break;
            }
            current.push(' ');
            current.push_str(line.trim());
            *i += 1;
        } else {
            break;
        }
    }

    if !current.is_empty() {
        bullets.push(current);
    }
    bullets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_bullet_and_strip() {
        assert!(is_bullet("\u{2022} Built thing"));
        assert!(!is_bullet("Built thing"));
        assert_eq!(strip_bullet("\u{2022} Built thing"), "Built thing");
    }

    #[test]
    fn test_split_trailing_city() {
        let cities: Vec<String> = DEFAULT_CITIES.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            split_trailing_city("Acme Corp Mumbai", &cities),
            Some(("Acme Corp".to_string(), "Mumbai"))
        );
        assert_eq!(
            split_trailing_city("Acme Corp, Pune", &cities),
            Some(("Acme Corp".to_string(), "Pune"))
        );
        // No space between title and city, as flattening often produces.
        assert_eq!(
            split_trailing_city("Hackathon FinalistDelhi", &cities),
            Some(("Hackathon Finalist".to_string(), "Delhi"))
        );
        assert_eq!(split_trailing_city("Remote", &cities).unwrap().0, "");
        assert!(split_trailing_city("Acme Corp", &cities).is_none());
    }

    #[test]
    fn test_split_trailing_city_multibyte_case_fold() {
        // Configured city whose case folding changes byte length must
        // still split on a char boundary.
        let cities = vec!["Neu\u{1e9e}".to_string()];
        assert_eq!(
            split_trailing_city("Caf\u{e9} NEU\u{df}", &cities),
            Some(("Caf\u{e9}".to_string(), "Neu\u{1e9e}"))
        );
        assert!(split_trailing_city("Caf\u{e9}", &cities).is_none());
    }

    #[test]
    fn test_collect_bullets_joins_continuations() {
        let lines = vec![
            "\u{2022} Built a long",
            "thing over two lines",
            "\u{2022} Shipped it",
        ];
        let mut i = 0;
        let bullets = collect_bullets(&lines, &mut i, &|_| false);
        assert_eq!(bullets, vec!["Built a long thing over two lines", "Shipped it"]);
        assert_eq!(i, 3);
    }

    #[test]
    fn test_collect_bullets_stops_at_new_entry() {
        let lines = vec!["\u{2022} Did work", "Next Corp Mumbai"];
        let mut i = 0;
        let bullets = collect_bullets(&lines, &mut i, &|l| l.ends_with("Mumbai"));
        assert_eq!(bullets, vec!["Did work"]);
        assert_eq!(i, 1);
    }

    #[test]
    fn test_recover_empty_input() {
        let doc = recover("   \n  \n", &RecoverOptions::default());
        assert!(doc.is_empty());
    }
}
