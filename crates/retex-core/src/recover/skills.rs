//! Skills recovery: one entry per colon line, first colon splits
//! category from the comma-separated list.

use crate::model::{new_entry_id, SkillsEntry};

pub fn parse_entries(lines: &[&str]) -> Vec<SkillsEntry> {
    lines
        .iter()
        .filter_map(|line| {
            let (category, rest) = line.split_once(':')?;
            let category = category.trim();
            let skills: Vec<String> = rest
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if category.is_empty() || skills.is_empty() {
                return None;
            }
            Some(SkillsEntry {
                id: new_entry_id(),
                category: category.to_string(),
                skills,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colon_lines_become_entries() {
        let lines = vec![
            "Languages: Rust, Python, SQL",
            "not a skills line",
            "Tools: Docker,  , Git",
        ];
        let entries = parse_entries(&lines);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].category, "Languages");
        assert_eq!(entries[0].skills, vec!["Rust", "Python", "SQL"]);
        assert_eq!(entries[1].skills, vec!["Docker", "Git"]);
    }

    #[test]
    fn test_empty_category_or_list_ignored() {
        assert!(parse_entries(&[": Rust"]).is_empty());
        assert!(parse_entries(&["Languages:  , "]).is_empty());
    }

    #[test]
    fn test_split_at_first_colon_only() {
        let entries = parse_entries(&["Note: see https://x.dev, docs"]);
        assert_eq!(entries[0].category, "Note");
        assert_eq!(entries[0].skills, vec!["see https", "//x.dev", "docs"]);
    }
}
