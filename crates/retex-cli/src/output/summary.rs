use retex_core::model::ResumeDocument;

/// Human-readable overview of a recovered document: header fields that
/// were found, then per-section entry counts.
pub fn print(doc: &ResumeDocument) {
    if !doc.header.name.is_empty() {
        println!("Name:     {}", doc.header.name);
    }
    if !doc.header.email.is_empty() {
        println!("Email:    {}", doc.header.email);
    }
    if !doc.header.phone.is_empty() {
        println!("Phone:    {}", doc.header.phone);
    }
    if let Some(ref location) = doc.header.location {
        println!("Location: {location}");
    }
    for link in &doc.header.links {
        println!("Link:     {} ({})", link.label, link.url);
    }

    if doc.sections.is_empty() {
        println!("\nNo sections recovered");
        return;
    }

    println!();
    let max_title = doc
        .sections
        .iter()
        .map(|s| s.title.len())
        .max()
        .unwrap_or(10);
    for section in &doc.sections {
        let n = section.entries.len();
        println!(
            "  {:<width$}  {:>3} {} ({})",
            section.title,
            n,
            if n == 1 { "entry" } else { "entries" },
            section.kind(),
            width = max_title
        );
    }
}
