mod check;
mod completions;
mod generate;
mod lookup;

use std::{fmt::Display, path::Path};

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use completions::CompletionsCommand;
use enumgen_spec::{LookupStrategy, Overrides, SpecFile};
use eyre::Result;
use generate::GenerateCommand;
use lookup::LookupCommand;

/// Print the single-line failure diagnostic and exit.
pub(crate) fn fail(enum_name: &str, reason: impl Display) -> ! {
    eprintln!("error: {}: {}", enum_name, reason);
    std::process::exit(1);
}

/// Name used in failure lines: the spec's `name`, else the file stem.
pub(crate) fn enum_label(path: &Path) -> String {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|content| enumgen_spec::peek_name(&content))
        .or_else(|| {
            path.file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| path.display().to_string())
}

/// Open and validate a spec, exiting on failure.
///
/// The source-annotated report is only printed with `-v`; the failure line
/// is always last.
pub(crate) fn open_spec(path: &Path, overrides: &Overrides, verbose: u8) -> SpecFile {
    tracing::debug!(path = %path.display(), ?overrides, "loading spec");
    match SpecFile::open_with(path, overrides) {
        Ok(file) => file,
        Err(e) => {
            let reason = e.to_string();
            if verbose > 0 {
                eprintln!("{:?}", miette::Report::new(*e));
            }
            fail(&enum_label(path), reason)
        }
    }
}

/// Lookup strategy as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum LookupArg {
    Auto,
    Linear,
    Indexed,
}

impl From<LookupArg> for LookupStrategy {
    fn from(arg: LookupArg) -> Self {
        match arg {
            LookupArg::Auto => LookupStrategy::Auto,
            LookupArg::Linear => LookupStrategy::Linear,
            LookupArg::Indexed => LookupStrategy::Indexed,
        }
    }
}

#[derive(Parser)]
#[command(name = "enumgen")]
#[command(version)]
#[command(about = "Generate RoboVM Java enum bindings from TOML specs")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(self.verbose),
            Commands::Check(cmd) => cmd.run(self.verbose),
            Commands::Lookup(cmd) => cmd.run(self.verbose),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Java enum from a spec
    Generate(GenerateCommand),

    /// Validate and lint a spec without generating code
    Check(CheckCommand),

    /// Resolve a value the way the generated enum would
    Lookup(LookupCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
