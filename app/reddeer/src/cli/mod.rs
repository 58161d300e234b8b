//! Command-line interface for inspecting suite run configurations.

mod commands;
mod schema;

use clap::Parser;
pub use commands::{Cli, Commands, PlanRow, format_plan_table};
pub use schema::{generate_schema, generate_schema_json};

use crate::core::Result;

/// Parses the process arguments and runs the selected command.
///
/// # Errors
///
/// Returns an error if the command fails. Argument errors exit the process
/// through clap.
pub fn run() -> Result<()> { Cli::parse().execute() }
