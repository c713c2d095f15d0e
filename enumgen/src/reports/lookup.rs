//! Lookup command report data structures.

use serde::Serialize;

use super::output::{Output, Report};

/// Which generated accessor the lookup mirrors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LookupPolicy {
    /// `valueOf(long)`, which throws on a miss
    ValueOf,
    /// `NSErrorWrap.getErrorCode()`, which returns `null` on a miss
    ErrorCode,
}

/// Report data from resolving one value.
#[derive(Debug, Serialize)]
pub struct LookupReport {
    /// Fully qualified enum name.
    pub enum_name: String,
    pub policy: LookupPolicy,
    pub value: i64,
    /// Resolved lookup strategy.
    pub lookup: &'static str,
    /// Matching constant; `None` only under the error-code policy.
    pub constant: Option<String>,
    /// Error domain, for error-code lookups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
}

impl Report for LookupReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.constant {
            Some(name) => out.preformatted(&format!("{}.{}", self.enum_name, name)),
            None => out.preformatted("null"),
        }
        if let Some(domain) = &self.domain {
            out.key_value("domain", domain);
        }
    }
}
