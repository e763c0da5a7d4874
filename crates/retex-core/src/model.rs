use serde::{Deserialize, Serialize};
use std::fmt;

/// A labelled hyperlink in the resume header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Resume header: contact block rendered above all sections.
///
/// Empty string means unknown/absent. The model keeps whatever the user
/// typed (or an import recovered) verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Experience,
    Education,
    Projects,
    Skills,
    Custom,
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionKind::Experience => write!(f, "experience"),
            SectionKind::Education => write!(f, "education"),
            SectionKind::Projects => write!(f, "projects"),
            SectionKind::Skills => write!(f, "skills"),
            SectionKind::Custom => write!(f, "custom"),
        }
    }
}

/// Dates are strings throughout: `YYYY-MM`, an already human-formatted
/// month/year, the sentinel `"Present"`, or `""` for unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub id: String,
    pub company: String,
    pub role: String,
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: String,
    pub institution: String,
    pub degree: String,
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub technologies: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsEntry {
    pub id: String,
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Catch-all entry for awards, certifications and similar one-off items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomEntry {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// Section entries as a closed tagged union indexed by the section type.
///
/// The "every entry matches the section type" invariant is structural:
/// an experience section cannot hold education entries by construction,
/// and every consumer matches exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "entries", rename_all = "lowercase")]
pub enum SectionEntries {
    Experience(Vec<ExperienceEntry>),
    Education(Vec<EducationEntry>),
    Projects(Vec<ProjectEntry>),
    Skills(Vec<SkillsEntry>),
    Custom(Vec<CustomEntry>),
}

impl SectionEntries {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionEntries::Experience(_) => SectionKind::Experience,
            SectionEntries::Education(_) => SectionKind::Education,
            SectionEntries::Projects(_) => SectionKind::Projects,
            SectionEntries::Skills(_) => SectionKind::Skills,
            SectionEntries::Custom(_) => SectionKind::Custom,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SectionEntries::Experience(v) => v.len(),
            SectionEntries::Education(v) => v.len(),
            SectionEntries::Projects(v) => v.len(),
            SectionEntries::Skills(v) => v.len(),
            SectionEntries::Custom(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Unique, stable within a document. Derived from the title on import.
    pub id: String,
    pub title: String,
    #[serde(flatten)]
    pub entries: SectionEntries,
}

impl Section {
    pub fn kind(&self) -> SectionKind {
        self.entries.kind()
    }
}

/// Root aggregate. Replaced wholesale on import, never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDocument {
    #[serde(default)]
    pub header: Header,
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl ResumeDocument {
    /// True when an import produced nothing at all: no header field and
    /// no sections. Callers use this to distinguish "import did nothing"
    /// from a genuinely sparse document.
    pub fn is_empty(&self) -> bool {
        self.header.name.is_empty()
            && self.header.phone.is_empty()
            && self.header.email.is_empty()
            && self.header.location.is_none()
            && self.header.links.is_empty()
            && self.sections.is_empty()
    }
}

/// Fresh unique identifier for a recovered or newly created entry.
/// Never reused or derived from content.
pub fn new_entry_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Derive a stable section id from its title, unique among `taken`.
/// Repeated titles get a numeric suffix ("awards", "awards-2", ...).
pub fn derive_section_id(title: &str, taken: &mut Vec<String>) -> String {
    let mut base = String::with_capacity(title.len());
    let mut prev_dash = true;
    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            base.push(c);
            prev_dash = false;
        } else if !prev_dash {
            base.push('-');
            prev_dash = true;
        }
    }
    let base = base.trim_matches('-').to_string();
    let mut id = if base.is_empty() {
        "section".to_string()
    } else {
        base
    };
    let stem = id.clone();
    let mut n = 1;
    while taken.contains(&id) {
        n += 1;
        id = format!("{stem}-{n}");
    }
    taken.push(id.clone());
    id
}

/// Merge an imported partial document over an existing one, field by
/// field, with imported data taking precedence where present.
pub fn merge_imported(existing: &ResumeDocument, imported: &ResumeDocument) -> ResumeDocument {
    let pick = |new: &str, old: &str| {
        if new.is_empty() {
            old.to_string()
        } else {
            new.to_string()
        }
    };

    ResumeDocument {
        header: Header {
            name: pick(&imported.header.name, &existing.header.name),
            phone: pick(&imported.header.phone, &existing.header.phone),
            email: pick(&imported.header.email, &existing.header.email),
            location: imported
                .header
                .location
                .clone()
                .or_else(|| existing.header.location.clone()),
            links: if imported.header.links.is_empty() {
                existing.header.links.clone()
            } else {
                imported.header.links.clone()
            },
        },
        sections: if imported.sections.is_empty() {
            existing.sections.clone()
        } else {
            imported.sections.clone()
        },
    }
}
