//! Lookup operation - resolves a value like the generated enum does.

use enumgen_spec::EnumSpec;
use eyre::{Result, bail};

use crate::reports::{LookupPolicy, LookupReport};

/// Execute the lookup operation.
///
/// With `error_code` the miss is reported as an absent constant, as
/// `NSErrorWrap.getErrorCode()` returns `null`. Otherwise a miss is an
/// error carrying the `valueOf` message.
pub fn lookup(spec: &EnumSpec, value: i64, error_code: bool) -> Result<LookupReport> {
    let (policy, constant, domain) = if error_code {
        let Some(wrap) = spec.wrap_error(value) else {
            bail!(
                "'{}' is a {} enum and has no error codes",
                spec.name(),
                spec.variant().as_str()
            );
        };
        (
            LookupPolicy::ErrorCode,
            wrap.error_code(),
            Some(wrap.domain().to_string()),
        )
    } else {
        (LookupPolicy::ValueOf, Some(spec.value_of(value)?), None)
    };

    Ok(LookupReport {
        enum_name: spec.qualified_name(),
        policy,
        value,
        lookup: spec.resolved_lookup().as_str(),
        constant: constant.map(|c| c.name.clone()),
        domain,
    })
}
