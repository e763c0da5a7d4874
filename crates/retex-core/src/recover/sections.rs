//! Section segmentation over the non-blank line list.
//!
//! A section header is a whole line matching one of the marker patterns.
//! Each section's body runs from the line after its header to the next
//! header (or end of input). Text before the first header belongs to no
//! section and is only visible to the header extractor.

use crate::vocab::{match_section_header, SectionMarker};

#[derive(Debug, Clone, Copy)]
pub struct SectionSpan {
    pub marker: &'static SectionMarker,
    pub header_line: usize,
    pub body_start: usize,
    pub body_end: usize,
}

/// Locate every section header and derive the body spans between them,
/// in input order.
pub fn segment(lines: &[&str]) -> Vec<SectionSpan> {
    let hits: Vec<(usize, &'static SectionMarker)> = lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| match_section_header(line).map(|m| (i, m)))
        .collect();

    hits.iter()
        .enumerate()
        .map(|(n, &(header_line, marker))| SectionSpan {
            marker,
            header_line,
            body_start: header_line + 1,
            body_end: hits.get(n + 1).map(|&(next, _)| next).unwrap_or(lines.len()),
        })
        .collect()
}
