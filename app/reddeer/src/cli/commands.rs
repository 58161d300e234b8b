//! CLI command definitions using Clap.

use std::io;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};
use colored::Colorize;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::schema;
use crate::core::Result;
use crate::core::constants::APP_VERSION;
use crate::core::constants::config::CONFIG_ENV;
use crate::suite::{RunConfiguration, SuiteConfiguration};

/// RedDeer CLI - inspect run configurations of a RedDeer suite.
#[derive(Parser, Debug)]
#[command(name = "reddeer")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Show the run configurations a suite would be replicated for.
    ///
    /// Loads configurations the same way the suite runner does: from the
    /// given file or directory, or the default configuration when no source
    /// is set.
    #[command(after_long_help = r#"Examples:
  reddeer plan                          # Default configuration
  reddeer plan --config configs/        # Every .json/.jsonc file in configs/
  REDDEER_CONFIG=jre8.jsonc reddeer plan --json"#)]
    Plan {
        /// Configuration file or directory.
        #[arg(long, short, env = CONFIG_ENV, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Output in JSON format instead of table format.
        #[arg(long, short = 'j')]
        json: bool,
    },

    /// Output the JSON Schema of a run configuration file.
    ///
    /// Can be redirected to a file for use with editors that support JSON
    /// Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Usage:
    ///   eval "$(reddeer completions --shell zsh)"
    ///   reddeer completions --shell fish > ~/.config/fish/completions/reddeer.fish
    #[command(verbatim_doc_comment)]
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

/// One row of the plan table.
#[derive(Debug, Tabled, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRow {
    #[tabled(rename = "Configuration")]
    pub id: String,
    #[tabled(rename = "Requirements")]
    pub requirements: String,
    #[tabled(rename = "Include")]
    pub include: String,
    #[tabled(rename = "Exclude")]
    pub exclude: String,
}

impl From<&RunConfiguration> for PlanRow {
    fn from(configuration: &RunConfiguration) -> Self {
        let or_all = |patterns: &[String], empty: &str| {
            if patterns.is_empty() { empty.to_string() } else { patterns.join(", ") }
        };
        Self {
            id: configuration.id.clone(),
            requirements: or_all(&configuration.requirements.keys().cloned().collect::<Vec<_>>(), "-"),
            include: or_all(&configuration.filters.include, "all"),
            exclude: or_all(&configuration.filters.exclude, "-"),
        }
    }
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<()> {
        match &self.command {
            Commands::Plan { config, json } => Self::execute_plan(config.as_deref(), *json)?,

            Commands::Schema => {
                println!("{}", schema::generate_schema_json());
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
            }
        }

        Ok(())
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "reddeer", &mut io::stdout());
    }

    fn execute_plan(config: Option<&Path>, json: bool) -> Result<()> {
        let suite = match config {
            Some(path) => SuiteConfiguration::load(path)?,
            None => SuiteConfiguration::default_configuration(),
        };
        let rows: Vec<PlanRow> = suite.configurations().iter().map(PlanRow::from).collect();

        if json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        let source = suite.source().map_or_else(|| "built-in default".to_string(), |path| path.display().to_string());
        println!("{} {}", "Run configurations from".bold(), source);
        println!("{}", format_plan_table(&rows));
        Ok(())
    }
}

/// Renders plan rows as a table.
#[must_use]
pub fn format_plan_table(rows: &[PlanRow]) -> String { Table::new(rows).with(Style::rounded()).to_string() }
