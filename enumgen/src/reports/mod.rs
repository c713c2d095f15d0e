//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target or print
//! them as JSON.

mod check;
mod generate;
mod lookup;
mod output;

pub use check::CheckReport;
use eyre::Result;
pub use generate::{GenerateReport, GenerationResult};
pub use lookup::{LookupPolicy, LookupReport};
pub use output::{Report, TerminalOutput};
use serde::Serialize;

/// Print a report to the terminal, or as pretty JSON on stdout.
pub fn print<R: Report + Serialize>(report: &R, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        report.render(&mut TerminalOutput::new());
    }
    Ok(())
}
