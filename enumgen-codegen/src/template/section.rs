//! Named template sections and the per-variant section schemas.

use std::fmt;

use enumgen_spec::Variant;
use Requirement::{Mandatory, Optional};

/// A replaceable region of a skeleton, written `/*<key>*/.../*</key>*/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Imports,
    Javadoc,
    Annotations,
    Name,
    Values,
    Bind,
    Constants,
    Members,
    Methods,
    /// Reverse lookup body (`find(long)`), owned by the generator
    Lookup,
}

impl Section {
    pub const ALL: [Section; 10] = [
        Section::Imports,
        Section::Javadoc,
        Section::Annotations,
        Section::Name,
        Section::Values,
        Section::Bind,
        Section::Constants,
        Section::Members,
        Section::Methods,
        Section::Lookup,
    ];

    /// Marker key as written in skeletons.
    pub fn key(&self) -> &'static str {
        match self {
            Section::Imports => "imports",
            Section::Javadoc => "javadoc",
            Section::Annotations => "annotations",
            Section::Name => "name",
            Section::Values => "values",
            Section::Bind => "bind",
            Section::Constants => "constants",
            Section::Members => "members",
            Section::Methods => "methods",
            Section::Lookup => "lookup",
        }
    }

    pub fn from_key(key: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn open_marker(&self) -> String {
        format!("/*<{}>*/", self.key())
    }

    pub fn close_marker(&self) -> String {
        format!("/*</{}>*/", self.key())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Whether a render may proceed without a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Must be in the context and have a placeholder in the skeleton
    Mandatory,
    /// Renders empty when absent
    Optional,
}

/// The sections a skeleton variant understands.
#[derive(Debug, Clone, Copy)]
pub struct SectionSchema {
    name: &'static str,
    sections: &'static [(Section, Requirement)],
}

static PLAIN: SectionSchema = SectionSchema {
    name: "plain",
    sections: &[
        (Section::Imports, Optional),
        (Section::Javadoc, Optional),
        (Section::Annotations, Optional),
        (Section::Name, Mandatory),
        (Section::Values, Mandatory),
        (Section::Bind, Optional),
        (Section::Constants, Optional),
        (Section::Methods, Optional),
        (Section::Lookup, Mandatory),
    ],
};

static ERROR_DOMAIN: SectionSchema = SectionSchema {
    name: "error-domain",
    sections: &[
        (Section::Imports, Optional),
        (Section::Javadoc, Optional),
        (Section::Annotations, Optional),
        (Section::Name, Mandatory),
        (Section::Values, Mandatory),
        (Section::Bind, Optional),
        (Section::Constants, Mandatory),
        (Section::Members, Optional),
        (Section::Methods, Optional),
        (Section::Lookup, Mandatory),
    ],
};

impl SectionSchema {
    /// Schema for a generator variant.
    pub fn for_variant(variant: Variant) -> &'static SectionSchema {
        match variant {
            Variant::Plain => &PLAIN,
            Variant::ErrorDomain => &ERROR_DOMAIN,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn contains(&self, section: Section) -> bool {
        self.requirement(section).is_some()
    }

    pub fn requirement(&self, section: Section) -> Option<Requirement> {
        self.sections
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, r)| *r)
    }

    /// Sections that must be resolved for a render to succeed.
    pub fn mandatory(&self) -> impl Iterator<Item = Section> + '_ {
        self.sections
            .iter()
            .filter(|(_, r)| *r == Requirement::Mandatory)
            .map(|(s, _)| *s)
    }

    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.sections.iter().map(|(s, _)| *s)
    }
}
