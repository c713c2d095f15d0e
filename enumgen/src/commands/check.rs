use std::path::PathBuf;

use clap::Args;
use enumgen_spec::Overrides;
use eyre::Result;

use super::{fail, open_spec};
use crate::{ops, reports};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the enum spec
    pub spec: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    pub fn run(&self, verbose: u8) -> Result<()> {
        let file = open_spec(&self.spec, &Overrides::default(), verbose);
        let report = match ops::check(&file) {
            Ok(report) => report,
            Err(e) => fail(file.spec().name(), format!("{:#}", e)),
        };

        reports::print(&report, self.json)?;

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
