//! LaTeX parser: best-effort recovery of a partial document from `.tex`
//! source. Never fails on malformed input; unrecognized content is
//! skipped and absent fields stay at their defaults.

pub mod commands;
pub mod header;

use crate::model::{
    derive_section_id, new_entry_id, CustomEntry, EducationEntry, ExperienceEntry, ProjectEntry,
    ResumeDocument, Section, SectionEntries, SkillsEntry,
};
use crate::text::{braced_args, clean_argument};
use crate::vocab::{self, IGNORABLE_COMMAND_PREFIXES};
use commands::reassemble_command;

/// Parse LaTeX source into a partial document.
pub fn parse_latex(source: &str) -> ResumeDocument {
    ResumeDocument {
        header: header::parse_header(source),
        sections: parse_body(source),
    }
}

/// Walk the document body line by line, starting sections at `\section`
/// commands and reassembling the heading/bullet commands inside them.
fn parse_body(source: &str) -> Vec<Section> {
    let lines: Vec<&str> = source.lines().collect();
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<Section> = None;
    let mut taken_ids: Vec<String> = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        if line.is_empty() {
            i += 1;
            continue;
        }

        if let Some(title) = section_title(line) {
            flush(&mut sections, current.take());
            current = Some(new_section(&title, &mut taken_ids));
            i += 1;
            continue;
        }

        let Some(section) = current.as_mut() else {
            i += 1;
            continue;
        };

        // List delimiters before their prefixes \resumeSubheading/\resumeItem.
        if line.starts_with("\\resumeSubHeadingListStart")
            || line.starts_with("\\resumeSubHeadingListEnd")
            || line.starts_with("\\resumeItemListStart")
            || line.starts_with("\\resumeItemListEnd")
        {
            i += 1;
            continue;
        }

        if line.starts_with("\\resumeSubheading") {
            match reassemble_command(&lines, i, 4) {
                Some((args, used)) => {
                    push_subheading(section, &args);
                    i += used;
                }
                None => i += 1,
            }
            continue;
        }

        if line.starts_with("\\resumeProjectHeading") {
            match reassemble_command(&lines, i, 2) {
                Some((args, used)) => {
                    push_project_heading(section, &args);
                    i += used;
                }
                None => i += 1,
            }
            continue;
        }

        if line.starts_with("\\resumeItem") {
            match reassemble_command(&lines, i, 1) {
                Some((args, used)) => {
                    push_bullet(section, clean_argument(&args[0]));
                    i += used;
                }
                None => i += 1,
            }
            continue;
        }

        if matches!(section.entries, SectionEntries::Skills(_)) && line.starts_with("\\textbf{") {
            push_skills_line(section, line);
            i += 1;
            continue;
        }

        // Preamble/comment/structural noise.
        if IGNORABLE_COMMAND_PREFIXES.iter().any(|p| line.starts_with(p)) {
            i += 1;
            continue;
        }

        i += 1;
    }

    flush(&mut sections, current.take());
    sections
}

fn flush(sections: &mut Vec<Section>, section: Option<Section>) {
    if let Some(s) = section {
        if !s.entries.is_empty() {
            sections.push(s);
        }
    }
}

fn section_title(line: &str) -> Option<String> {
    let rest = line.strip_prefix("\\section")?;
    if !rest.starts_with('{') {
        return None;
    }
    let args = braced_args(rest, 1)?;
    Some(clean_argument(&args[0]))
}

fn new_section(title: &str, taken_ids: &mut Vec<String>) -> Section {
    use crate::model::SectionKind::*;
    let kind = vocab::classify_section_title(title)
        .map(|m| m.kind)
        .unwrap_or(Custom);
    let entries = match kind {
        Experience => SectionEntries::Experience(vec![]),
        Education => SectionEntries::Education(vec![]),
        Projects => SectionEntries::Projects(vec![]),
        Skills => SectionEntries::Skills(vec![]),
        Custom => SectionEntries::Custom(vec![]),
    };
    Section {
        id: derive_section_id(title, taken_ids),
        title: title.to_string(),
        entries,
    }
}

/// Split a rendered date-range slot back into (start, end).
fn split_date_range(s: &str) -> (String, String) {
    let s = s.trim();
    if let Some((a, b)) = s.split_once("--") {
        return (a.trim().to_string(), b.trim().to_string());
    }
    if let Some((a, b)) = s.split_once('\u{2013}') {
        return (a.trim().to_string(), b.trim().to_string());
    }
    if s.is_empty() {
        return (String::new(), String::new());
    }
    if s.eq_ignore_ascii_case("present") {
        return (String::new(), "Present".to_string());
    }
    (s.to_string(), String::new())
}

/// Map a 4-argument `\resumeSubheading` back into an entry, by the
/// section kind's slot convention.
fn push_subheading(section: &mut Section, args: &[String]) {
    let a: Vec<String> = args.iter().map(|s| clean_argument(s)).collect();
    match &mut section.entries {
        SectionEntries::Experience(entries) => {
            let (start, end) = split_date_range(&a[1]);
            entries.push(ExperienceEntry {
                id: new_entry_id(),
                company: a[0].clone(),
                role: a[2].clone(),
                location: a[3].clone(),
                start_date: start,
                end_date: end,
                bullets: vec![],
            });
        }
        SectionEntries::Education(entries) => {
            let (start, end) = split_date_range(&a[1]);
            entries.push(EducationEntry {
                id: new_entry_id(),
                institution: a[0].clone(),
                degree: a[2].clone(),
                location: a[3].clone(),
                start_date: start,
                end_date: end,
                details: vec![],
            });
        }
        SectionEntries::Custom(entries) => {
            // Fixed slot convention: {title}{location-or-date}{subtitle}{}.
            let mut entry = CustomEntry {
                id: new_entry_id(),
                title: a[0].clone(),
                ..CustomEntry::default()
            };
            let right = a[1].trim();
            if vocab::looks_like_date(right) {
                if right.contains("--") || right.contains('\u{2013}') {
                    let (start, end) = split_date_range(right);
                    entry.start_date = start;
                    entry.end_date = end;
                } else {
                    entry.end_date = right.to_string();
                }
            } else if !right.is_empty() {
                entry.location = Some(right.to_string());
            }
            if !a[2].is_empty() {
                entry.subtitle = Some(a[2].clone());
            }
            entries.push(entry);
        }
        SectionEntries::Projects(_) | SectionEntries::Skills(_) => {}
    }
}

fn push_project_heading(section: &mut Section, args: &[String]) {
    let SectionEntries::Projects(entries) = &mut section.entries else {
        return;
    };
    let title = clean_argument(&args[0]);
    let (name, technologies) = match title.split_once('|') {
        Some((n, t)) => (n.trim().to_string(), t.trim().to_string()),
        None => (title, String::new()),
    };
    let (start, end) = split_date_range(&clean_argument(&args[1]));
    entries.push(ProjectEntry {
        id: new_entry_id(),
        name,
        technologies,
        start_date: start,
        end_date: end,
        bullets: vec![],
    });
}

fn push_bullet(section: &mut Section, bullet: String) {
    if bullet.is_empty() {
        return;
    }
    match &mut section.entries {
        SectionEntries::Experience(entries) => {
            if let Some(e) = entries.last_mut() {
                e.bullets.push(bullet);
            }
        }
        SectionEntries::Education(entries) => {
            if let Some(e) = entries.last_mut() {
                e.details.push(bullet);
            }
        }
        SectionEntries::Projects(entries) => {
            if let Some(e) = entries.last_mut() {
                e.bullets.push(bullet);
            }
        }
        SectionEntries::Custom(entries) => {
            if let Some(e) = entries.last_mut() {
                e.bullets.push(bullet);
            }
        }
        SectionEntries::Skills(_) => {}
    }
}

/// Skills lines render as `\textbf{Category}{: a, b, c}`.
fn push_skills_line(section: &mut Section, line: &str) {
    let SectionEntries::Skills(entries) = &mut section.entries else {
        return;
    };
    let Some(rest) = line.strip_prefix("\\textbf") else {
        return;
    };
    let Some(args) = braced_args(rest, 2) else {
        return;
    };
    let category = clean_argument(&args[0]);
    let skills: Vec<String> = clean_argument(&args[1])
        .trim_start_matches(':')
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if !category.is_empty() && !skills.is_empty() {
        entries.push(SkillsEntry {
            id: new_entry_id(),
            category,
            skills,
        });
    }
}
