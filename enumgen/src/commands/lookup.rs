use std::path::PathBuf;

use clap::Args;
use enumgen_spec::{Overrides, RawValue};
use eyre::Result;

use super::{fail, open_spec};
use crate::{ops, reports};

#[derive(Args)]
pub struct LookupCommand {
    /// Path to the enum spec
    pub spec: PathBuf,

    /// Value to resolve (decimal, 0x, 0o or 0b notation)
    #[arg(allow_hyphen_values = true, value_parser = parse_value)]
    pub value: i64,

    /// Resolve as `NSErrorWrap.getErrorCode()` (absent on a miss) instead
    /// of `valueOf` (fails on a miss)
    #[arg(long)]
    pub error_code: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl LookupCommand {
    pub fn run(&self, verbose: u8) -> Result<()> {
        let spec = open_spec(&self.spec, &Overrides::default(), verbose).into_spec();

        let report = match ops::lookup(&spec, self.value, self.error_code) {
            Ok(report) => report,
            Err(e) => fail(spec.name(), format!("{:#}", e)),
        };

        reports::print(&report, self.json)
    }
}

fn parse_value(s: &str) -> Result<i64, String> {
    RawValue::Text(s.to_string())
        .to_i64()
        .map_err(|_| format!("'{}' is not a 64-bit integer", s))
}
