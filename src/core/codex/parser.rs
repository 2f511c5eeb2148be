//! Section parsing for retrieved class/subclass documents.
//!
//! Documents in the content tree are loosely structured markdown: ability
//! blocks under `###` headings in most files, `##` in older ones, level
//! information embedded in the heading text in several phrasings. The
//! parser is total: any input produces a (possibly empty) section list and
//! nothing ever panics or errors.
//!
//! Splitting prefers the deeper `###` boundaries; when that yields at most
//! one chunk the whole text is re-split at `##` instead. A document mixing
//! both depths therefore splits at `###` and any `##` headings remain
//! inside chunk content.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{Origin, Section};

/// Level-3 heading boundaries.
static H3_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^###\s").expect("Invalid h3 boundary regex"));

/// Level-2 heading boundaries. `##` followed by whitespace, so `###` lines
/// never match.
static H2_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^##\s").expect("Invalid h2 boundary regex"));

/// Level phrasings recognized in headings, tried in order; the first
/// integer captured wins.
static LEVEL_PHRASES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\bniveau\s+(\d+)",
        r"(?i)\bniv\.?\s*(\d+)",
        r"(?i)\bau\s+niveau\s+(\d+)",
        r"(?i)\blevel\s+(\d+)",
        r"(?i)\blvl\.?\s*(\d+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid level phrase regex"))
    .collect()
});

/// Title used for a leading chunk that carries no heading of its own.
pub const GENERAL_TITLE: &str = "Général";

/// Splits raw document text into leveled, titled, origin-tagged sections.
pub struct SectionParser;

impl SectionParser {
    /// Parse a retrieved document into sections. Total over any input.
    pub fn parse(raw: &str, origin: Origin) -> Vec<Section> {
        if raw.trim().is_empty() {
            return Vec::new();
        }
        let mut chunks = Self::split_chunks(raw, &H3_BOUNDARY);
        if chunks.len() <= 1 {
            chunks = Self::split_chunks(raw, &H2_BOUNDARY);
        }
        chunks
            .iter()
            .filter_map(|chunk| Self::parse_chunk(chunk, origin))
            .collect()
    }

    /// Split at boundaries immediately preceding a heading marker. Text
    /// before the first heading becomes its own chunk.
    fn split_chunks<'a>(text: &'a str, boundary: &Regex) -> Vec<&'a str> {
        let mut starts: Vec<usize> = boundary.find_iter(text).map(|m| m.start()).collect();
        if starts.is_empty() {
            return vec![text];
        }
        let mut chunks = Vec::with_capacity(starts.len() + 1);
        if starts[0] > 0 {
            chunks.push(&text[..starts[0]]);
        }
        starts.push(text.len());
        for pair in starts.windows(2) {
            chunks.push(&text[pair[0]..pair[1]]);
        }
        chunks
    }

    /// Parse one chunk into a section, or `None` when it carries nothing.
    fn parse_chunk(chunk: &str, origin: Origin) -> Option<Section> {
        let trimmed = chunk.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut lines = trimmed.lines();
        let first = lines.next().unwrap_or("");

        if !first.trim_start().starts_with('#') {
            // Headingless leading chunk: one general section.
            return Section::new(0, GENERAL_TITLE, trimmed, origin);
        }

        let title = first
            .trim_start()
            .trim_start_matches('#')
            .trim()
            .trim_end_matches(':')
            .trim_end();
        let level = Self::extract_level(first);
        let content = lines.collect::<Vec<_>>().join("\n");

        Section::new(level, title, content, origin)
    }

    /// First integer captured by any recognized level phrasing; 0 if none.
    fn extract_level(heading: &str) -> u32 {
        for phrase in LEVEL_PHRASES.iter() {
            if let Some(captures) = phrase.captures(heading) {
                if let Ok(level) = captures[1].parse() {
                    return level;
                }
            }
        }
        0
    }
}
