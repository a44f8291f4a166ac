//! Command-line parsing.
//!
//! Arguments resolve to exactly one [`Selection`]; everything else about a
//! run (data source, output format) lives on [`Cli`].

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::state::Selection;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "olympic-tally",
    version,
    about = "Medal and participation aggregates over Olympic Games results"
)]
pub struct Cli {
    /// Results table (.csv, .json or .parquet).
    #[arg(
        long,
        global = true,
        env = "OLYMPIC_TALLY_DATA",
        default_value = "Olympics_data.csv"
    )]
    pub data: PathBuf,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    /// Chart description for a renderer.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Editions, hosts, sports, events, nations and athletes.
    Overview,
    /// Medal counts per gender.
    Gender,
    /// Sports participation for one team.
    Team {
        /// Team name exactly as in the table, e.g. "United States".
        team: String,
    },
    /// Medal distribution for one athlete.
    Athlete {
        /// Athlete name exactly as in the table.
        name: String,
    },
    /// Entries per team for one year.
    Year {
        /// Defaults to the first year in the table.
        year: Option<i32>,
    },
    /// List the teams, athletes and year range available for selection.
    Choices,
}

impl Command {
    /// The selection this command asks for; `None` for commands that do not
    /// run a query. `default_year` fills in a missing year.
    pub fn selection(&self, default_year: Option<i32>) -> Option<Selection> {
        match self {
            Command::Overview => Some(Selection::Overview),
            Command::Gender => Some(Selection::GenderTally),
            Command::Team { team } => Some(Selection::TeamParticipation { team: team.clone() }),
            Command::Athlete { name } => Some(Selection::AthleteDistribution {
                athlete: name.clone(),
            }),
            Command::Year { year } => year
                .or(default_year)
                .map(|year| Selection::TeamYearCounts { year }),
            Command::Choices => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "olympic-tally",
            "team",
            "France",
            "--format",
            "json",
            "--data",
            "results.parquet",
        ]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.data, PathBuf::from("results.parquet"));
        assert_eq!(
            cli.command.selection(None),
            Some(Selection::TeamParticipation { team: "France".into() })
        );
    }

    #[test]
    fn year_falls_back_to_default() {
        let cli = Cli::parse_from(["olympic-tally", "--data", "x.csv", "year"]);
        assert_eq!(
            cli.command.selection(Some(1896)),
            Some(Selection::TeamYearCounts { year: 1896 })
        );
        assert_eq!(cli.command.selection(None), None);
    }

    #[test]
    fn choices_is_not_a_query() {
        let cli = Cli::parse_from(["olympic-tally", "--data", "x.csv", "choices"]);
        assert_eq!(cli.command.selection(Some(2000)), None);
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
