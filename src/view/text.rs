use std::fmt;

use super::shape::{Chart, ChartKind};

/// Render a chart as aligned plain text for the terminal.
pub fn render(chart: &Chart) -> String {
    chart.to_string()
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;

        if self.is_empty() {
            return writeln!(f, "(no data)");
        }

        let width = self
            .series
            .iter()
            .flat_map(|s| s.points.iter())
            .map(|p| p.label.chars().count())
            .max()
            .unwrap_or(0);

        let show_series_names = matches!(self.kind, ChartKind::StackedBar);
        for series in &self.series {
            if show_series_names {
                writeln!(f, "[{}]", series.name)?;
            }
            for p in &series.points {
                writeln!(f, "  {:<width$}  {:>8}", p.label, p.value)?;
            }
        }

        if !self.annotations.is_empty() {
            writeln!(f, "Totals")?;
            for a in &self.annotations {
                writeln!(f, "  {:<width$}  {:>8}", a.label, a.value)?;
            }
        }
        Ok(())
    }
}
