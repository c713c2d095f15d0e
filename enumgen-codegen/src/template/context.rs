use std::collections::BTreeMap;

use super::Section;

/// Values substituted into a skeleton.
///
/// Keyed by [`Section`], so insertion order never affects the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    sections: BTreeMap<Section, String>,
    package: String,
    license: Option<String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a section, returning the previous value.
    pub fn insert(&mut self, section: Section, value: impl Into<String>) -> Option<String> {
        self.sections.insert(section, value.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, section: Section, value: impl Into<String>) -> Self {
        self.insert(section, value);
        self
    }

    pub fn get(&self, section: Section) -> Option<&str> {
        self.sections.get(&section).map(String::as_str)
    }

    pub fn contains(&self, section: Section) -> bool {
        self.sections.contains_key(&section)
    }

    pub fn remove(&mut self, section: Section) -> Option<String> {
        self.sections.remove(&section)
    }

    /// Sections with a value, in a fixed order.
    pub fn sections(&self) -> impl Iterator<Item = Section> + '_ {
        self.sections.keys().copied()
    }

    /// Package written over the skeleton's `package` line; empty drops it.
    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn set_package(&mut self, package: impl Into<String>) {
        self.package = package.into();
    }

    /// Text replacing the `__LICENSE__` line.
    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }

    pub fn set_license(&mut self, license: Option<String>) {
        self.license = license;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces() {
        let mut ctx = RenderContext::new();
        assert_eq!(ctx.insert(Section::Name, "Old"), None);
        assert_eq!(ctx.insert(Section::Name, "New"), Some("Old".to_string()));
        assert_eq!(ctx.get(Section::Name), Some("New"));
    }

    #[test]
    fn test_insertion_order_irrelevant() {
        let a = RenderContext::new()
            .with(Section::Values, "v")
            .with(Section::Name, "n");
        let b = RenderContext::new()
            .with(Section::Name, "n")
            .with(Section::Values, "v");
        assert_eq!(a, b);
        assert_eq!(
            a.sections().collect::<Vec<_>>(),
            vec![Section::Name, Section::Values]
        );
    }
}
