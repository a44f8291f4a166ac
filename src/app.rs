//! Top-level orchestration for the `olympic-tally` binary.
//!
//! Load the table once, resolve the selection against what the table
//! offers, run the query, shape the result and print it.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::{Cli, Command, OutputFormat};
use crate::data::loader::load_file;
use crate::data::model::Dataset;
use crate::query;
use crate::state::{SelectionChoices, YearRange};
use crate::view::{shape, text};

/// Entry point for the binary once arguments are parsed.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    let dataset = load_file(&cli.data)
        .with_context(|| format!("loading {}", cli.data.display()))?;
    execute(&dataset, &cli.command, cli.format, out)
}

/// Answer one command over an already loaded dataset.
pub fn execute(
    dataset: &Dataset,
    command: &Command,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    let choices = SelectionChoices::from_dataset(dataset);

    if let Command::Choices = command {
        return write_choices(&choices, format, out);
    }

    let default_year = choices.years.map(|y| y.default_year());
    let selection = command
        .selection(default_year)
        .context("the dataset has no years to choose from")?;
    choices
        .validate(&selection)
        .context("invalid selection")?;

    let aggregate = query::run(dataset, &selection)
        .with_context(|| format!("running {} query", selection.mode()))?;
    let chart = shape::shape(&aggregate);

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &chart).context("writing JSON")?;
            writeln!(out)?;
        }
        OutputFormat::Text => write!(out, "{}", text::render(&chart))?,
    }
    Ok(())
}

#[derive(Serialize)]
struct ChoicesView<'a> {
    teams: &'a [String],
    athletes: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    year_min: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    year_max: Option<i32>,
}

fn write_choices(
    choices: &SelectionChoices,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let view = ChoicesView {
                teams: &choices.teams,
                athletes: &choices.athletes,
                year_min: choices.years.map(|y| y.min),
                year_max: choices.years.map(|y| y.max),
            };
            serde_json::to_writer_pretty(&mut *out, &view).context("writing JSON")?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            match choices.years {
                Some(YearRange { min, max }) => writeln!(out, "Years: {min}..={max}")?,
                None => writeln!(out, "Years: none")?,
            }
            writeln!(out, "Teams ({}):", choices.teams.len())?;
            for team in &choices.teams {
                writeln!(out, "  {team}")?;
            }
            writeln!(out, "Athletes ({}):", choices.athletes.len())?;
            for athlete in &choices.athletes {
                writeln!(out, "  {athlete}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{dataset, row};

    fn sample() -> Dataset {
        dataset(vec![
            row(1896, "A", "M", "Greece", "Athletics", "Gold"),
            row(1900, "B", "F", "France", "Tennis", "No_Medal"),
        ])
    }

    fn output(command: Command, format: OutputFormat) -> Result<String> {
        let mut buf = Vec::new();
        execute(&sample(), &command, format, &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    #[test]
    fn year_defaults_to_first_year() {
        let text = output(Command::Year { year: None }, OutputFormat::Text).unwrap();
        assert!(text.starts_with("Medal Counts by Team in 1896"));
        assert!(text.contains("Greece"));
    }

    #[test]
    fn out_of_range_year_is_rejected_before_querying() {
        let err = output(Command::Year { year: Some(2020) }, OutputFormat::Text).unwrap_err();
        assert!(format!("{err:#}").contains("outside the dataset range 1896..=1900"));
    }

    #[test]
    fn json_output_is_a_chart() {
        let json = output(Command::Gender, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "stacked_bar");
        assert_eq!(value["series"][0]["name"], "Gold");
    }

    #[test]
    fn choices_list_teams_and_years() {
        let text = output(Command::Choices, OutputFormat::Text).unwrap();
        assert!(text.contains("Years: 1896..=1900"));
        assert!(text.contains("Teams (2):"));
    }
}
