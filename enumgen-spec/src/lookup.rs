//! Reverse value to constant lookup.
//!
//! Mirrors what the generated `valueOf` and `getErrorCode` do, so lints,
//! tests and the `lookup` command agree with the emitted code.

use std::collections::HashMap;

use thiserror::Error;

use crate::{Constant, EnumSpec, LookupStrategy, Variant};

/// Hard failure of a strict lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No constant with value {value} found in {enum_name}")]
pub struct LookupFailure {
    pub value: i64,
    /// Fully qualified enum name
    pub enum_name: String,
}

/// A value to constant index.
///
/// Implementations must return the first declared constant when several
/// share a value.
pub trait ValueIndex {
    fn strategy(&self) -> LookupStrategy;

    /// Position of the matching constant in declaration order
    fn find(&self, value: i64) -> Option<usize>;
}

/// Scans constants in declaration order
#[derive(Debug, Clone, Copy)]
pub struct LinearScan<'a> {
    constants: &'a [Constant],
}

impl<'a> LinearScan<'a> {
    pub fn new(constants: &'a [Constant]) -> Self {
        Self { constants }
    }
}

impl ValueIndex for LinearScan<'_> {
    fn strategy(&self) -> LookupStrategy {
        LookupStrategy::Linear
    }

    fn find(&self, value: i64) -> Option<usize> {
        self.constants.iter().position(|c| c.value == value)
    }
}

/// Hash map built once, first declaration wins
#[derive(Debug, Clone, Default)]
pub struct HashIndex {
    by_value: HashMap<i64, usize>,
}

impl HashIndex {
    pub fn new(constants: &[Constant]) -> Self {
        let mut by_value = HashMap::with_capacity(constants.len());
        for (i, constant) in constants.iter().enumerate() {
            by_value.entry(constant.value).or_insert(i);
        }
        Self { by_value }
    }
}

impl ValueIndex for HashIndex {
    fn strategy(&self) -> LookupStrategy {
        LookupStrategy::Indexed
    }

    fn find(&self, value: i64) -> Option<usize> {
        self.by_value.get(&value).copied()
    }
}

/// A constant that can never be returned by a lookup because an earlier
/// constant has the same value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shadowed<'a> {
    pub constant: &'a Constant,
    pub first: &'a Constant,
}

/// A native error code wrapped the way the generated `NSErrorWrap` does
#[derive(Debug, Clone, Copy)]
pub struct ErrorWrap<'a> {
    spec: &'a EnumSpec,
    code: i64,
}

impl<'a> ErrorWrap<'a> {
    /// Raw error code
    pub fn code(&self) -> i64 {
        self.code
    }

    /// Error domain the wrapper reports
    pub fn domain(&self) -> &'a str {
        self.spec.error_domain_class_name().unwrap_or_default()
    }

    /// Matching constant, `None` for codes the enum does not know
    pub fn error_code(&self) -> Option<&'a Constant> {
        self.spec.find(self.code)
    }
}

impl EnumSpec {
    /// Build the index for the resolved lookup strategy.
    pub fn value_index(&self) -> Box<dyn ValueIndex + '_> {
        match self.resolved_lookup() {
            LookupStrategy::Indexed => Box::new(HashIndex::new(&self.constants)),
            _ => Box::new(LinearScan::new(&self.constants)),
        }
    }

    /// The lookup primitive: first constant declared with `value`.
    pub fn find(&self, value: i64) -> Option<&Constant> {
        self.value_index()
            .find(value)
            .and_then(|i| self.constants.get(i))
    }

    /// Strict lookup, as the generated `valueOf(long)`.
    pub fn value_of(&self, value: i64) -> Result<&Constant, LookupFailure> {
        self.find(value).ok_or_else(|| LookupFailure {
            value,
            enum_name: self.qualified_name(),
        })
    }

    /// Wrap an error code; `None` unless this is an error-domain enum.
    pub fn wrap_error(&self, code: i64) -> Option<ErrorWrap<'_>> {
        match self.variant {
            Variant::ErrorDomain => Some(ErrorWrap { spec: self, code }),
            Variant::Plain => None,
        }
    }

    /// Constants hidden behind an earlier constant with the same value.
    pub fn shadowed(&self) -> Vec<Shadowed<'_>> {
        let mut first_by_value: HashMap<i64, &Constant> = HashMap::new();
        let mut shadowed = Vec::new();
        for constant in &self.constants {
            match first_by_value.get(&constant.value) {
                Some(first) => shadowed.push(Shadowed { constant, first }),
                None => {
                    first_by_value.insert(constant.value, constant);
                }
            }
        }
        shadowed
    }
}
