//! Experience entry recovery.
//!
//! An entry opens on a company line (trailing allow-listed city with a
//! non-empty prefix) directly followed by a role/date-range line. Lines
//! matching neither shape are dropped.

use super::{collect_bullets, is_bullet, split_trailing_city, RecoverOptions};
use crate::model::{new_entry_id, ExperienceEntry};
use crate::vocab::{MONTH_YEAR_RE, ROLE_DATE_RE};

pub fn parse_entries(lines: &[&str], opts: &RecoverOptions) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        if is_bullet(line) {
            i += 1;
            continue;
        }
        if let Some((company, location)) = company_location(line, &opts.cities) {
            if let Some(next) = lines.get(i + 1) {
                if let Some((role, start_date, end_date)) = role_and_dates(next) {
                    i += 2;
                    let cities = &opts.cities;
                    let bullets = collect_bullets(lines, &mut i, &|l: &str| {
                        split_trailing_city(l, cities).is_some()
                    });
                    entries.push(ExperienceEntry {
                        id: new_entry_id(),
                        company,
                        role,
                        location,
                        start_date,
                        end_date,
                        bullets,
                    });
                    continue;
                }
            }
        }
        i += 1;
    }

    entries
}

pub(crate) fn company_location(line: &str, cities: &[String]) -> Option<(String, String)> {
    let (prefix, city) = split_trailing_city(line, cities)?;
    if prefix.is_empty() {
        return None;
    }
    Some((prefix, city.to_string()))
}

/// Match "Role Mon YYYY - End" where End is "Present" or another
/// month-year. Rejecting other end tokens keeps stray dashes in role
/// text from producing a bogus entry.
pub(crate) fn role_and_dates(line: &str) -> Option<(String, String, String)> {
    let caps = ROLE_DATE_RE.captures(line)?;
    let role = caps[1].trim().trim_end_matches(',').trim().to_string();
    let start_date = format!("{} {}", &caps[2], &caps[3]);
    let end_part = caps[4].trim();
    let end_date = if end_part.eq_ignore_ascii_case("present") {
        "Present".to_string()
    } else if let Some(c) = MONTH_YEAR_RE.captures(end_part) {
        format!("{} {}", &c[1], &c[2])
    } else {
        return None;
    };
    Some((role, start_date, end_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_from_company_role_bullets() {
        let lines = vec![
            "Acme Corp Mumbai",
            "Engineer Jan 2020 \u{2013} Present",
            "\u{2022} Built thing",
            "\u{2022} Shipped other thing",
        ];
        let entries = parse_entries(&lines, &RecoverOptions::default());
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.company, "Acme Corp");
        assert_eq!(e.location, "Mumbai");
        assert_eq!(e.role, "Engineer");
        assert_eq!(e.start_date, "Jan 2020");
        assert_eq!(e.end_date, "Present");
        assert_eq!(e.bullets, vec!["Built thing", "Shipped other thing"]);
    }

    #[test]
    fn test_bullets_end_at_next_company_line() {
        let lines = vec![
            "Acme Corp Mumbai",
            "Engineer Jan 2020 \u{2013} Dec 2021",
            "\u{2022} Built thing",
            "Beta Ltd Pune",
            "Analyst Mar 2018 \u{2013} Dec 2019",
            "\u{2022} Analyzed",
        ];
        let entries = parse_entries(&lines, &RecoverOptions::default());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].bullets, vec!["Built thing"]);
        assert_eq!(entries[1].company, "Beta Ltd");
        assert_eq!(entries[1].end_date, "Dec 2019");
    }

    #[test]
    fn test_role_line_without_valid_end_is_rejected() {
        assert!(role_and_dates("Engineer Jan 2020 - whenever").is_none());
        assert!(role_and_dates("Just a sentence").is_none());
    }

    #[test]
    fn test_company_needs_nonempty_prefix() {
        let cities = RecoverOptions::default().cities;
        assert!(company_location("Remote", &cities).is_none());
        assert!(company_location("Acme Corp Remote", &cities).is_some());
    }

    #[test]
    fn test_noise_lines_produce_nothing() {
        let lines = vec!["--", "{", "}", "random text"];
        assert!(parse_entries(&lines, &RecoverOptions::default()).is_empty());
    }
}
