//! LaTeX generator: deterministic, total function from a document to one
//! fixed template. Always emits well-formed output, for any valid
//! document, including empty sections and entries without bullets (the
//! bullet-list block is omitted entirely rather than emitted empty).

use crate::model::{
    CustomEntry, EducationEntry, ExperienceEntry, Header, ProjectEntry, ResumeDocument, Section,
    SectionEntries, SkillsEntry,
};
use crate::text::{escape_markup, format_date, format_date_range};

const PREAMBLE: &str = r"\documentclass[letterpaper,11pt]{article}

\usepackage{latexsym}
\usepackage[empty]{fullpage}
\usepackage{titlesec}
\usepackage{marvosym}
\usepackage[usenames,dvipsnames]{color}
\usepackage{verbatim}
\usepackage{enumitem}
\usepackage[hidelinks]{hyperref}
\usepackage{fancyhdr}
\usepackage[english]{babel}
\usepackage{tabularx}
\input{glyphtounicode}

\pagestyle{fancy}
\fancyhf{} % clear all header and footer fields
\fancyfoot{}
\renewcommand{\headrulewidth}{0pt}
\renewcommand{\footrulewidth}{0pt}

% Adjust margins
\addtolength{\oddsidemargin}{-0.5in}
\addtolength{\evensidemargin}{-0.5in}
\addtolength{\textwidth}{1in}
\addtolength{\topmargin}{-.5in}
\addtolength{\textheight}{1.0in}

\urlstyle{same}

\raggedbottom
\raggedright
\setlength{\tabcolsep}{0in}

% Sections formatting
\titleformat{\section}{
  \vspace{-4pt}\scshape\raggedright\large
}{}{0em}{}[\color{black}\titlerule \vspace{-5pt}]

% Ensure that generated pdf is machine readable/ATS parsable
\pdfgentounicode=1

%-------------------------
% Custom commands
\newcommand{\resumeItem}[1]{
  \item\small{
    {#1 \vspace{-2pt}}
  }
}

\newcommand{\resumeSubheading}[4]{
  \vspace{-2pt}\item
    \begin{tabular*}{0.97\textwidth}[t]{l@{\extracolsep{\fill}}r}
      \textbf{#1} & #2 \\
      \textit{\small#3} & \textit{\small #4} \\
    \end{tabular*}\vspace{-7pt}
}

\newcommand{\resumeProjectHeading}[2]{
    \item
    \begin{tabular*}{0.97\textwidth}{l@{\extracolsep{\fill}}r}
      \small#1 & #2 \\
    \end{tabular*}\vspace{-7pt}
}

\newcommand{\resumeSubItem}[1]{\resumeItem{#1}\vspace{-4pt}}

\renewcommand\labelitemii{$\vcenter{\hbox{\tiny$\bullet$}}$}

\newcommand{\resumeSubHeadingListStart}{\begin{itemize}[leftmargin=0.15in, label={}]}
\newcommand{\resumeSubHeadingListEnd}{\end{itemize}}
\newcommand{\resumeItemListStart}{\begin{itemize}}
\newcommand{\resumeItemListEnd}{\end{itemize}\vspace{-5pt}}

%-------------------------------------------

";

/// Render a document into LaTeX source. No failure path.
pub fn generate(doc: &ResumeDocument) -> String {
    let mut out = String::with_capacity(4096);
    out.push_str(PREAMBLE);
    out.push_str("\\begin{document}\n\n");
    push_header(&mut out, &doc.header);
    for section in &doc.sections {
        out.push('\n');
        push_section(&mut out, section);
        out.push('\n');
    }
    out.push_str("\n\\end{document}\n");
    out
}

fn push_header(out: &mut String, header: &Header) {
    out.push_str("%----------HEADING----------\n\\begin{center}\n");
    out.push_str(&format!(
        "    \\textbf{{\\Huge \\scshape {}}} \\\\ \\vspace{{1pt}}\n",
        escape_markup(&header.name)
    ));
    if let Some(location) = header.location.as_deref().filter(|l| !l.is_empty()) {
        out.push_str(&format!(
            "    \\small {} \\\\ \\vspace{{1pt}}\n",
            escape_markup(location)
        ));
    }
    out.push_str(&format!(
        "    \\small {} $|$ \\href{{mailto:{}}}{{\\underline{{{}}}}}",
        escape_markup(&header.phone),
        header.email,
        escape_markup(&header.email)
    ));
    for link in &header.links {
        let url = if link.url.starts_with("http") {
            link.url.clone()
        } else {
            format!("https://{}", link.url)
        };
        out.push_str(&format!(
            " $|$\n    \\href{{{}}}{{\\underline{{{}}}}}",
            url,
            escape_markup(&link.label)
        ));
    }
    out.push_str("\n\\end{center}\n");
}

fn push_section(out: &mut String, section: &Section) {
    out.push_str(&format!(
        "%-----------{}-----------\n\\section{{{}}}\n",
        section.title.to_uppercase(),
        escape_markup(&section.title)
    ));

    match &section.entries {
        SectionEntries::Experience(entries) => {
            out.push_str("  \\resumeSubHeadingListStart\n");
            for e in entries {
                push_experience(out, e);
            }
            out.push_str("  \\resumeSubHeadingListEnd\n");
        }
        SectionEntries::Education(entries) => {
            out.push_str("  \\resumeSubHeadingListStart\n");
            for e in entries {
                push_education(out, e);
            }
            out.push_str("  \\resumeSubHeadingListEnd\n");
        }
        SectionEntries::Projects(entries) => {
            out.push_str("    \\resumeSubHeadingListStart\n");
            for e in entries {
                push_project(out, e);
            }
            out.push_str("    \\resumeSubHeadingListEnd\n");
        }
        SectionEntries::Skills(entries) => {
            push_skills(out, entries);
        }
        SectionEntries::Custom(entries) => {
            out.push_str("  \\resumeSubHeadingListStart\n");
            for e in entries {
                push_custom(out, e);
            }
            out.push_str("  \\resumeSubHeadingListEnd\n");
        }
    }
}

fn push_bullets(out: &mut String, bullets: &[String], indent: &str) {
    let kept: Vec<&String> = bullets.iter().filter(|b| !b.trim().is_empty()).collect();
    if kept.is_empty() {
        return;
    }
    out.push_str(&format!("{indent}\\resumeItemListStart\n"));
    for b in kept {
        out.push_str(&format!("{indent}  \\resumeItem{{{}}}\n", escape_markup(b)));
    }
    out.push_str(&format!("{indent}\\resumeItemListEnd\n"));
}

fn push_experience(out: &mut String, e: &ExperienceEntry) {
    out.push_str(&format!(
        "    \\resumeSubheading\n      {{{}}}{{{}}}\n      {{{}}}{{{}}}\n",
        escape_markup(&e.company),
        format_date_range(&e.start_date, &e.end_date),
        escape_markup(&e.role),
        escape_markup(&e.location)
    ));
    push_bullets(out, &e.bullets, "      ");
}

fn push_education(out: &mut String, e: &EducationEntry) {
    out.push_str(&format!(
        "    \\resumeSubheading\n      {{{}}}{{{}}}\n      {{{}}}{{{}}}\n",
        escape_markup(&e.institution),
        format_date_range(&e.start_date, &e.end_date),
        escape_markup(&e.degree),
        escape_markup(&e.location)
    ));
    push_bullets(out, &e.details, "      ");
}

fn push_project(out: &mut String, e: &ProjectEntry) {
    let title = if e.technologies.is_empty() {
        format!("\\textbf{{{}}}", escape_markup(&e.name))
    } else {
        format!(
            "\\textbf{{{}}} $|$ \\emph{{{}}}",
            escape_markup(&e.name),
            escape_markup(&e.technologies)
        )
    };
    // Date range only when both ends are known.
    let date_range = if !e.start_date.is_empty() && !e.end_date.is_empty() {
        format_date_range(&e.start_date, &e.end_date)
    } else {
        String::new()
    };
    out.push_str(&format!(
        "      \\resumeProjectHeading\n          {{{title}}}{{{date_range}}}\n"
    ));
    push_bullets(out, &e.bullets, "          ");
}

fn push_skills(out: &mut String, entries: &[SkillsEntry]) {
    out.push_str(" \\begin{itemize}[leftmargin=0.15in, label={}]\n    \\small{\\item{\n");
    let lines: Vec<String> = entries
        .iter()
        .map(|e| {
            format!(
                "     \\textbf{{{}}}{{: {}}}",
                escape_markup(&e.category),
                e.skills
                    .iter()
                    .map(|s| escape_markup(s))
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
        .collect();
    out.push_str(&lines.join(" \\\\\n"));
    out.push_str("\n    }}\n \\end{itemize}\n");
}

/// Custom entries reuse the experience heading macro; the slot mapping is
/// a fixed convention the parsers rely on: title in the primary slot,
/// subtitle in the secondary slot, location-or-single-date in the
/// right-hand date slot, fourth slot empty.
fn push_custom(out: &mut String, e: &CustomEntry) {
    let display_date = if !e.start_date.is_empty() && !e.end_date.is_empty() {
        format_date_range(&e.start_date, &e.end_date)
    } else if !e.end_date.is_empty() {
        format_date(&e.end_date)
    } else if !e.start_date.is_empty() {
        format_date(&e.start_date)
    } else {
        String::new()
    };
    let right = e
        .location
        .as_deref()
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .unwrap_or(display_date);
    let subtitle = e.subtitle.as_deref().unwrap_or("");
    out.push_str(&format!(
        "    \\resumeSubheading\n      {{{}}}{{{}}}\n      {{{}}}{{}}\n",
        escape_markup(&e.title),
        escape_markup(&right),
        escape_markup(subtitle)
    ));
    push_bullets(out, &e.bullets, "      ");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Link;

    fn minimal_doc() -> ResumeDocument {
        ResumeDocument {
            header: Header {
                name: "Jane Doe".into(),
                phone: "+15551234567".into(),
                email: "jane@example.com".into(),
                location: None,
                links: vec![Link {
                    label: "GitHub".into(),
                    url: "github.com/janedoe".into(),
                }],
            },
            sections: vec![],
        }
    }

    #[test]
    fn test_generates_well_formed_document() {
        let tex = generate(&minimal_doc());
        assert!(tex.starts_with("\\documentclass"));
        assert!(tex.contains("\\begin{document}"));
        assert!(tex.trim_end().ends_with("\\end{document}"));
        assert!(tex.contains("\\textbf{\\Huge \\scshape Jane Doe}"));
        assert!(tex.contains("\\href{https://github.com/janedoe}{\\underline{GitHub}}"));
    }

    #[test]
    fn test_skills_section_line() {
        let mut doc = minimal_doc();
        doc.sections.push(Section {
            id: "skills".into(),
            title: "Technical Skills".into(),
            entries: SectionEntries::Skills(vec![SkillsEntry {
                id: "s1".into(),
                category: "Languages".into(),
                skills: vec!["Go".into(), "Rust".into()],
            }]),
        });
        let tex = generate(&doc);
        assert!(tex.contains("\\textbf{Languages}{: Go, Rust}"));
    }

    #[test]
    fn test_experience_entry_heading_and_bullets() {
        let mut doc = minimal_doc();
        doc.sections.push(Section {
            id: "experience".into(),
            title: "Experience".into(),
            entries: SectionEntries::Experience(vec![ExperienceEntry {
                id: "e1".into(),
                company: "Acme Corp".into(),
                role: "Engineer".into(),
                location: "Mumbai".into(),
                start_date: "2020-01".into(),
                end_date: "Present".into(),
                bullets: vec!["Built thing".into()],
            }]),
        });
        let tex = generate(&doc);
        assert!(tex.contains("{Acme Corp}{Jan. 2020 -- Present}"));
        assert!(tex.contains("{Engineer}{Mumbai}"));
        assert!(tex.contains("\\resumeItem{Built thing}"));
    }

    #[test]
    fn test_entry_without_bullets_omits_item_list() {
        let mut doc = minimal_doc();
        doc.sections.push(Section {
            id: "certifications".into(),
            title: "Certifications".into(),
            entries: SectionEntries::Custom(vec![CustomEntry {
                id: "c1".into(),
                title: "X Certification".into(),
                subtitle: Some("by Y University".into()),
                location: None,
                start_date: String::new(),
                end_date: "2021-06".into(),
                bullets: vec![],
            }]),
        });
        let tex = generate(&doc);
        assert!(tex.contains("{X Certification}{June 2021}"));
        assert!(tex.contains("{by Y University}{}"));
        assert!(!tex.contains("\\resumeItemListStart"));
    }

    #[test]
    fn test_project_without_dates_has_empty_date_slot() {
        let mut doc = minimal_doc();
        doc.sections.push(Section {
            id: "projects".into(),
            title: "Projects".into(),
            entries: SectionEntries::Projects(vec![ProjectEntry {
                id: "p1".into(),
                name: "retex".into(),
                technologies: "Rust".into(),
                start_date: "2021-01".into(),
                end_date: String::new(),
                bullets: vec![],
            }]),
        });
        let tex = generate(&doc);
        assert!(tex.contains("{\\textbf{retex} $|$ \\emph{Rust}}{}"));
    }

    #[test]
    fn test_free_text_is_escaped() {
        let mut doc = minimal_doc();
        doc.header.name = "Jane & Co".into();
        let tex = generate(&doc);
        assert!(tex.contains("Jane \\& Co"));
    }
}
