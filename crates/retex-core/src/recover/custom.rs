//! Custom (awards/certifications) entry recovery.
//!
//! Titles are picked by a candidate test, then peeled in stages: a
//! trailing month-year becomes the end date, a " by " clause becomes
//! the subtitle, a pipe tail or trailing city becomes the location. A
//! following institution-looking line is consumed as the subtitle when
//! none was found inline.

use super::{collect_bullets, is_bullet, split_trailing_city, RecoverOptions};
use crate::model::{new_entry_id, CustomEntry};
use crate::vocab::{looks_like_date, AWARD_KEYWORDS, INSTITUTION_KEYWORDS, TRAILING_MONTH_YEAR_RE};
use regex::Regex;
use std::sync::LazyLock;

static BY_CLAUSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(.*?)\s+by\s+(.+)$").expect("invalid by-clause pattern"));

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("invalid year pattern"));

const CANDIDATE_MIN_LEN: usize = 16;
const MIN_TITLE_LEN: usize = 3;

pub fn parse_entries(lines: &[&str], opts: &RecoverOptions) -> Vec<CustomEntry> {
    let mut entries = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        if is_bullet(line) || !is_candidate_title(line) {
            i += 1;
            continue;
        }

        let mut title = line.trim().to_string();
        let mut end_date = String::new();
        let mut subtitle: Option<String> = None;
        let mut location: Option<String> = None;

        if let Some((rest, date)) = strip_trailing_date(&title) {
            title = rest;
            end_date = date;
        }
        if let Some((rest, issuer)) = strip_by_clause(&title) {
            title = rest;
            subtitle = Some(issuer);
        }
        if let Some((rest, tail)) = title.rsplit_once('|') {
            let tail = tail.trim().to_string();
            let rest = rest.trim().to_string();
            if looks_like_date(&tail) {
                if end_date.is_empty() {
                    end_date = tail;
                }
            } else if !tail.is_empty() {
                location = Some(tail);
            }
            title = rest;
        } else if let Some((prefix, city)) = split_trailing_city(&title, &opts.cities) {
            if !prefix.is_empty() {
                location = Some(city.to_string());
                title = prefix;
            }
        }
        i += 1;

        if subtitle.is_none() {
            if let Some(next) = lines.get(i) {
                if !is_bullet(next) && is_institution_line(next) {
                    subtitle = Some(next.trim().to_string());
                    i += 1;
                }
            }
        }

        let cities = &opts.cities;
        let bullets = collect_bullets(lines, &mut i, &|l: &str| is_entry_opener(l, cities));

        if title.chars().count() >= MIN_TITLE_LEN {
            entries.push(CustomEntry {
                id: new_entry_id(),
                title,
                subtitle,
                location,
                start_date: String::new(),
                end_date,
                bullets,
            });
        }
    }

    entries
}

/// A line plausibly opening an entry: long enough to be a full title,
/// or carrying a trailing date, a pipe, or a year plus an award word.
fn is_candidate_title(line: &str) -> bool {
    line.chars().count() >= CANDIDATE_MIN_LEN
        || TRAILING_MONTH_YEAR_RE.is_match(line)
        || line.contains('|')
        || has_year_and_award_word(line)
}

fn has_year_and_award_word(line: &str) -> bool {
    if !YEAR_RE.is_match(line) {
        return false;
    }
    let lower = line.to_lowercase();
    AWARD_KEYWORDS.iter().any(|k| lower.contains(k))
}

fn strip_trailing_date(s: &str) -> Option<(String, String)> {
    let c = TRAILING_MONTH_YEAR_RE.captures(s)?;
    Some((c[1].trim().to_string(), format!("{} {}", &c[2], &c[3])))
}

fn strip_by_clause(s: &str) -> Option<(String, String)> {
    let c = BY_CLAUSE_RE.captures(s)?;
    Some((c[1].trim().to_string(), format!("by {}", c[2].trim())))
}

fn is_institution_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.starts_with("by ") || INSTITUTION_KEYWORDS.iter().any(|k| lower.contains(k))
}

fn is_entry_opener(line: &str, cities: &[String]) -> bool {
    TRAILING_MONTH_YEAR_RE.is_match(line)
        || line.to_lowercase().starts_with("by ")
        || split_trailing_city(line, cities).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_with_date_and_issuer() {
        let lines = vec!["Best Paper Award by ACM India Jan 2022"];
        let entries = parse_entries(&lines, &RecoverOptions::default());
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.title, "Best Paper Award");
        assert_eq!(e.subtitle.as_deref(), Some("by ACM India"));
        assert_eq!(e.end_date, "Jan 2022");
        assert!(e.location.is_none());
    }

    #[test]
    fn test_pipe_tail_location() {
        let lines = vec!["Smart City Hackathon Winner | Hyderabad"];
        let entries = parse_entries(&lines, &RecoverOptions::default());
        assert_eq!(entries[0].title, "Smart City Hackathon Winner");
        assert_eq!(entries[0].location.as_deref(), Some("Hyderabad"));
    }

    #[test]
    fn test_pipe_tail_date_when_no_trailing_date() {
        let lines = vec!["AWS Certified Solutions Architect | 2023"];
        let entries = parse_entries(&lines, &RecoverOptions::default());
        assert_eq!(entries[0].title, "AWS Certified Solutions Architect");
        assert_eq!(entries[0].end_date, "2023");
    }

    #[test]
    fn test_following_institution_line_becomes_subtitle() {
        let lines = vec![
            "National Mathematics Olympiad Finalist",
            "Ministry of Education",
            "\u{2022} Ranked in top 50 nationally",
        ];
        let entries = parse_entries(&lines, &RecoverOptions::default());
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.subtitle.as_deref(), Some("Ministry of Education"));
        assert_eq!(e.bullets, vec!["Ranked in top 50 nationally"]);
    }

    #[test]
    fn test_trailing_city_without_pipe() {
        let lines = vec!["Hackathon Finalist 2021 edition Delhi"];
        let entries = parse_entries(&lines, &RecoverOptions::default());
        assert_eq!(entries[0].title, "Hackathon Finalist 2021 edition");
        assert_eq!(entries[0].location.as_deref(), Some("Delhi"));
    }

    #[test]
    fn test_short_award_with_year_is_candidate() {
        let lines = vec!["Gold Medal 2019"];
        let entries = parse_entries(&lines, &RecoverOptions::default());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Gold Medal 2019");
    }

    #[test]
    fn test_bare_date_line_dropped() {
        assert!(parse_entries(&["Jan 2021"], &RecoverOptions::default()).is_empty());
    }

    #[test]
    fn test_noise_ignored() {
        assert!(parse_entries(&["--", "short", "ok then"], &RecoverOptions::default()).is_empty());
    }
}
