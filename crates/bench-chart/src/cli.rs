// File: crates/bench-chart/src/cli.rs
// Summary: Positional command-line arguments and the explicit millions flag.

use std::convert::Infallible;
use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use tracing::debug;

use crate::error::UsageError;
use crate::renderer::RenderRequest;

pub const USAGE: &str =
    "Usage: bench-chart <input_csv> <no_runs> <output_file (.png)> <in_millions (0/1)>";

/// Length of a valid argument vector, program name included.
pub const ARGC: usize = 5;

#[derive(Debug, Parser)]
#[command(name = "bench-chart", disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Benchmark CSV with Implementation, Pixels and Average columns.
    #[arg(allow_hyphen_values = true)]
    pub input_csv: String,

    /// Run count, shown verbatim in the Y axis label.
    #[arg(allow_hyphen_values = true)]
    pub no_runs: String,

    /// Output image; the extension selects the format.
    #[arg(allow_hyphen_values = true)]
    pub output_file: String,

    /// "0" keeps raw pixel counts on the X axis, anything else shows millions.
    #[arg(allow_hyphen_values = true, action = ArgAction::Set, value_parser = parse_millions_flag)]
    pub in_millions: bool,
}

/// Only the literal `"0"` turns millions off.
pub fn parse_millions_flag(raw: &str) -> Result<bool, Infallible> {
    Ok(raw != "0")
}

impl Args {
    /// Parse a full argument vector (program name first). Anything other than
    /// exactly four arguments after the program name is a usage error.
    pub fn try_from_argv<I, T>(argv: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        if argv.len() != ARGC {
            debug!(argc = argv.len(), "wrong argument count");
            return Err(UsageError);
        }
        Self::try_parse_from(argv).map_err(|e| {
            debug!(error = %e, "argument parsing failed");
            UsageError
        })
    }

    pub fn into_request(self) -> RenderRequest {
        RenderRequest {
            input: PathBuf::from(self.input_csv),
            run_count: self.no_runs,
            output: PathBuf::from(self.output_file),
            scale_x_in_millions: self.in_millions,
        }
    }
}
