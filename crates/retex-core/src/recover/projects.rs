//! Project entry recovery.
//!
//! Any non-bullet line longer than five characters opens a project.
//! A pipe or spaced dash splits name from the technology list; bullet
//! collection stops at the next line that reads like a project title.

use super::{collect_bullets, is_bullet};
use crate::model::{new_entry_id, ProjectEntry};
use crate::vocab::TRAILING_MONTH_YEAR_RE;

const MIN_TITLE_LEN: usize = 6;

pub fn parse_entries(lines: &[&str]) -> Vec<ProjectEntry> {
    let mut entries = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        if is_bullet(line) || line.chars().count() < MIN_TITLE_LEN {
            i += 1;
            continue;
        }
        let (name, technologies) = split_title(line);
        i += 1;
        let bullets = collect_bullets(lines, &mut i, &is_new_title);
        entries.push(ProjectEntry {
            id: new_entry_id(),
            name,
            technologies,
            start_date: String::new(),
            end_date: String::new(),
            bullets,
        });
    }

    entries
}

fn split_title(line: &str) -> (String, String) {
    if let Some((name, tech)) = line.split_once('|') {
        (tidy(name), tech.trim().to_string())
    } else if let Some((name, tech)) = line.split_once(" - ") {
        (tidy(name), tech.trim().to_string())
    } else if let Some((name, tech)) = line.split_once(" \u{2013} ") {
        (tidy(name), tech.trim().to_string())
    } else {
        (line.trim().to_string(), String::new())
    }
}

fn tidy(name: &str) -> String {
    name.trim().trim_end_matches(['-', '\u{2013}']).trim().to_string()
}

fn is_new_title(line: &str) -> bool {
    line.contains('|') || TRAILING_MONTH_YEAR_RE.is_match(line)
}
