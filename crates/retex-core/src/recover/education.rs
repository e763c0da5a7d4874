//! Education entry recovery.
//!
//! Shape mirrors experience minus the date requirement: an institution
//! line (trailing city) followed by a degree line, then optional detail
//! bullets. Dates rarely survive flattening in a recoverable position,
//! so they stay empty.

use super::{collect_bullets, is_bullet, split_trailing_city, RecoverOptions};
use crate::model::{new_entry_id, EducationEntry};
use crate::recover::experience::company_location;
use crate::vocab::match_section_header;

pub fn parse_entries(lines: &[&str], opts: &RecoverOptions) -> Vec<EducationEntry> {
    let mut entries = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        if is_bullet(line) {
            i += 1;
            continue;
        }
        if let Some((institution, location)) = company_location(line, &opts.cities) {
            if let Some(next) = lines.get(i + 1) {
                if !is_bullet(next) {
                    let degree = next.trim().to_string();
                    i += 2;
                    let cities = &opts.cities;
                    let details = collect_bullets(lines, &mut i, &|l: &str| {
                        match_section_header(l).is_some()
                            || split_trailing_city(l, cities).is_some()
                    });
                    entries.push(EducationEntry {
                        id: new_entry_id(),
                        institution,
                        degree,
                        location,
                        start_date: String::new(),
                        end_date: String::new(),
                        details,
                    });
                    continue;
                }
            }
        }
        i += 1;
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_institution_degree_details() {
        let lines = vec![
            "Indian Institute of Technology Delhi",
            "B.Tech in Computer Science",
            "\u{2022} GPA: 9.1/10",
        ];
        let entries = parse_entries(&lines, &RecoverOptions::default());
        assert_eq!(entries.len(), 1);
        let e = &entries[0];
        assert_eq!(e.institution, "Indian Institute of Technology");
        assert_eq!(e.location, "Delhi");
        assert_eq!(e.degree, "B.Tech in Computer Science");
        assert_eq!(e.details, vec!["GPA: 9.1/10"]);
        assert!(e.start_date.is_empty());
    }

    #[test]
    fn test_two_institutions() {
        let lines = vec![
            "State University Pune",
            "M.Sc. Mathematics",
            "City College Mumbai",
            "B.Sc. Mathematics",
        ];
        let entries = parse_entries(&lines, &RecoverOptions::default());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].institution, "State University");
        assert_eq!(entries[1].degree, "B.Sc. Mathematics");
    }

    #[test]
    fn test_institution_without_degree_line_is_skipped() {
        let lines = vec!["Lone University Chennai"];
        assert!(parse_entries(&lines, &RecoverOptions::default()).is_empty());
    }
}
