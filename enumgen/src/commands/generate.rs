use std::path::PathBuf;

use clap::Args;
use enumgen_codegen::{BindingRegistry, GenerateOptions};
use enumgen_core::LicenseHeader;
use enumgen_spec::Overrides;
use eyre::Result;

use super::{LookupArg, fail, open_spec};
use crate::{ops, reports};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the enum spec
    pub spec: PathBuf,

    /// Java source file to write
    pub output: PathBuf,

    /// Render and print the result without writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Ignore an existing output file instead of merging into it
    #[arg(long)]
    pub fresh: bool,

    /// File whose text replaces the skeleton's license line
    #[arg(long, env = "ENUMGEN_LICENSE")]
    pub license: Option<PathBuf>,

    /// Override the spec's package
    #[arg(long)]
    pub package: Option<String>,

    /// Override the spec's lookup strategy
    #[arg(long, value_enum)]
    pub lookup: Option<LookupArg>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateCommand {
    pub fn run(&self, verbose: u8) -> Result<()> {
        let overrides = Overrides {
            package: self.package.clone(),
            lookup: self.lookup.map(Into::into),
        };
        let spec = open_spec(&self.spec, &overrides, verbose).into_spec();
        let enum_name = spec.name().to_string();

        let license = match &self.license {
            Some(path) => match LicenseHeader::from_file(path) {
                Ok(license) => Some(license),
                Err(e) => fail(&enum_name, format!("{:#}", e)),
            },
            None => None,
        };

        let options = GenerateOptions {
            license,
            fresh: self.fresh,
            dry_run: self.dry_run,
        };

        let mut registry = BindingRegistry::new();
        let report = match ops::generate(spec, &self.output, options, &mut registry) {
            Ok(report) => report,
            Err(e) => fail(&enum_name, format!("{:#}", e)),
        };

        reports::print(&report, self.json)
    }
}
