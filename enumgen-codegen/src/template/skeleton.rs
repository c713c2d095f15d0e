//! Skeleton parsing.
//!
//! A skeleton is Java source with section markers. It is either one of the
//! built-in skeletons or a previously generated file being regenerated in
//! place, in which case everything outside the markers is kept verbatim.

use super::{RenderError, Section, SectionSchema};

/// Built-in skeleton for plain valued enums
pub const PLAIN_SKELETON: &str = include_str!("../../skeletons/enum.java");

/// Built-in skeleton for error-domain enums
pub const ERROR_DOMAIN_SKELETON: &str = include_str!("../../skeletons/error_domain_enum.java");

const LICENSE_DIRECTIVE: &str = "__LICENSE__";
const PACKAGE_PREFIX: &str = "package ";

/// A piece of a parsed skeleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, including markers of unknown sections
    Text(String),
    /// A known section; its previous body is discarded
    Slot(Section),
    /// The `package ...;` line
    Package,
    /// The `__LICENSE__` line
    License,
}

/// A skeleton split into literal text and section slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Skeleton {
    segments: Vec<Segment>,
}

impl Skeleton {
    /// Parse `src`, recognising only the sections `schema` knows.
    pub fn parse(src: &str, schema: &SectionSchema) -> Result<Self, RenderError> {
        let mut builder = SegmentBuilder::new();
        let mut rest = src;
        let mut consumed = 0;

        while let Some((start, section)) = next_marker(rest, schema) {
            builder.text(&rest[..start]);

            let open = section.open_marker();
            let close = section.close_marker();
            let body_start = start + open.len();
            let Some(body_len) = rest[body_start..].find(&close) else {
                let line = src[..consumed + start].matches('\n').count() + 1;
                return Err(RenderError::Unterminated { section, line });
            };

            builder.slot(section);
            let next = body_start + body_len + close.len();
            consumed += next;
            rest = &rest[next..];
        }
        builder.text(rest);

        Ok(Self {
            segments: builder.segments,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Check whether the skeleton has at least one placeholder for `section`.
    pub fn has_slot(&self, section: Section) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Slot(found) if *found == section))
    }

    /// Number of placeholders for `section`.
    pub fn slot_count(&self, section: Section) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Slot(found) if *found == section))
            .count()
    }
}

/// Find the next opening marker of a section in `schema`.
fn next_marker(text: &str, schema: &SectionSchema) -> Option<(usize, Section)> {
    let mut offset = 0;
    while let Some(pos) = text[offset..].find("/*<") {
        let start = offset + pos;
        let after = &text[start + 3..];
        if let Some(end) = after.find(">*/") {
            let section = Section::from_key(&after[..end]).filter(|s| schema.contains(*s));
            if let Some(section) = section {
                return Some((start, section));
            }
        }
        offset = start + 3;
    }
    None
}

struct SegmentBuilder {
    segments: Vec<Segment>,
    at_line_start: bool,
    seen_package: bool,
    seen_license: bool,
}

impl SegmentBuilder {
    fn new() -> Self {
        Self {
            segments: Vec::new(),
            at_line_start: true,
            seen_package: false,
            seen_license: false,
        }
    }

    fn text(&mut self, text: &str) {
        for piece in text.split_inclusive('\n') {
            let line = piece.trim_end_matches(['\n', '\r']);

            if self.at_line_start && !self.seen_license && line == LICENSE_DIRECTIVE {
                self.seen_license = true;
                self.segments.push(Segment::License);
            } else if self.at_line_start
                && !self.seen_package
                && line.starts_with(PACKAGE_PREFIX)
                && line.trim_end().ends_with(';')
            {
                self.seen_package = true;
                self.segments.push(Segment::Package);
            } else {
                self.push_text(piece);
            }

            self.at_line_start = piece.ends_with('\n');
        }
    }

    fn slot(&mut self, section: Section) {
        self.segments.push(Segment::Slot(section));
        self.at_line_start = false;
    }

    fn push_text(&mut self, text: &str) {
        match self.segments.last_mut() {
            Some(Segment::Text(existing)) => existing.push_str(text),
            _ => self.segments.push(Segment::Text(text.to_string())),
        }
    }
}
