use serde::Serialize;

use crate::color::{medal_color, ColorMap};
use crate::query::{
    Aggregate, AthleteMedalTally, GenderMedalTally, OverviewStats, TeamSportTally,
    TeamYearMedalTally,
};

// ---------------------------------------------------------------------------
// Chart description handed to a renderer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// Plain headline numbers, no axes.
    Metrics,
    StackedBar,
    Bar,
    Pie,
    Choropleth,
}

/// How a choropleth renderer should resolve point labels to regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationMode {
    /// Labels are country names; names without a region render as missing.
    CountryNames,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Point {
    pub label: String,
    pub value: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub points: Vec<Point>,
}

/// A total drawn next to a category, e.g. all medals won by one sex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend_title: Option<String>,
    pub series: Vec<Series>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_mode: Option<LocationMode>,
}

impl Chart {
    fn new(kind: ChartKind, title: impl Into<String>) -> Self {
        Chart {
            kind,
            title: title.into(),
            x_label: None,
            y_label: None,
            legend_title: None,
            series: Vec::new(),
            annotations: Vec::new(),
            location_mode: None,
        }
    }

    fn axes(mut self, x: &str, y: &str) -> Self {
        self.x_label = Some(x.to_string());
        self.y_label = Some(y.to_string());
        self
    }

    /// True when there is nothing to draw; renderers show an empty chart.
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.points.is_empty())
    }
}

fn point(label: impl Into<String>, value: usize) -> Point {
    Point {
        label: label.into(),
        value,
        color: None,
    }
}

// ---------------------------------------------------------------------------
// Aggregate → Chart
// ---------------------------------------------------------------------------

/// Package an aggregate for rendering. Ordering always comes from the
/// aggregate; nothing is re-sorted here.
pub fn shape(aggregate: &Aggregate) -> Chart {
    match aggregate {
        Aggregate::Overview(stats) => overview_chart(stats),
        Aggregate::GenderMedals(tally) => gender_chart(tally),
        Aggregate::TeamSports(tally) => team_sports_chart(tally),
        Aggregate::AthleteMedals(tally) => athlete_chart(tally),
        Aggregate::TeamYearMedals(tally) => team_year_chart(tally),
    }
}

fn overview_chart(stats: &OverviewStats) -> Chart {
    let mut chart = Chart::new(ChartKind::Metrics, "Overall Analysis");
    chart.series.push(Series {
        name: "Overall Analysis".to_string(),
        color: None,
        points: vec![
            point("Editions", stats.editions),
            point("Hosts", stats.hosts),
            point("Sports", stats.sports),
            point("Events", stats.events),
            point("Nations", stats.nations),
            point("Athletes", stats.athletes),
        ],
    });
    chart
}

/// One stacked series per medal, in the order medals first appear in the
/// tally; x is the sex label.
fn gender_chart(tally: &GenderMedalTally) -> Chart {
    let mut chart = Chart::new(ChartKind::StackedBar, "Count of Medals per Gender")
        .axes("Gender", "Medal Count");
    chart.legend_title = Some("Medal Type".to_string());

    for ((sex, medal), count) in &tally.counts {
        let name = medal.as_str();
        let idx = match chart.series.iter().position(|s| s.name == name) {
            Some(idx) => idx,
            None => {
                chart.series.push(Series {
                    name: name.to_string(),
                    color: medal_color(medal),
                    points: Vec::new(),
                });
                chart.series.len() - 1
            }
        };
        chart.series[idx].points.push(point(sex.as_str(), *count));
    }

    chart.annotations = tally
        .totals
        .iter()
        .map(|(sex, total)| Annotation {
            label: sex.as_str().to_string(),
            value: *total,
        })
        .collect();
    chart
}

fn team_sports_chart(tally: &TeamSportTally) -> Chart {
    let mut chart = Chart::new(
        ChartKind::Bar,
        format!("Sports Participation for {}", tally.team),
    )
    .axes("Sport", "Number of Participations");
    chart.series.push(Series {
        name: tally.team.clone(),
        color: None,
        points: tally
            .sports
            .iter()
            .map(|(sport, n)| point(sport.as_str(), *n))
            .collect(),
    });
    chart
}

fn athlete_chart(tally: &AthleteMedalTally) -> Chart {
    let mut chart = Chart::new(
        ChartKind::Pie,
        format!("Medal Distribution for {} ({})", tally.athlete, tally.team),
    );
    chart.legend_title = Some("Medal Type".to_string());

    let colors = ColorMap::new(tally.medals.iter().map(|(m, _)| m.as_str()));
    chart.series.push(Series {
        name: tally.athlete.clone(),
        color: None,
        points: tally
            .medals
            .iter()
            .map(|(medal, n)| Point {
                label: medal.as_str().to_string(),
                value: *n,
                color: colors.color_for(medal.as_str()),
            })
            .collect(),
    });
    chart
}

fn team_year_chart(tally: &TeamYearMedalTally) -> Chart {
    let mut chart = Chart::new(
        ChartKind::Choropleth,
        format!("Medal Counts by Team in {}", tally.year),
    );
    chart.legend_title = Some("Medal".to_string());
    chart.location_mode = Some(LocationMode::CountryNames);
    chart.series.push(Series {
        name: tally.year.to_string(),
        color: None,
        points: tally
            .teams
            .iter()
            .map(|(team, n)| point(team.as_str(), *n))
            .collect(),
    });
    chart
}
