//! Query engine: the aggregations behind every view.
//!
//! Each operation is a pure function of the dataset and its parameters. They
//! all filter with plain iterator adaptors and then fold through
//! [`count_by`], so a query is always one bounded scan of the table.

use std::collections::BTreeMap;

use crate::data::group::{count_by, distinct_count};
use crate::data::model::{Dataset, Medal, Sex};
use crate::error::QueryError;
use crate::state::Selection;

/// Medal label the team-by-year view excludes.
///
/// The source table spells it `No_Medal`, so this comparison never matches
/// and every row of the year is counted. Kept as observed.
///
/// Empty medal cells load as `Medal::Other("")` and are counted as well. A
/// null-skipping count over the `Medal` column would leave them out.
pub const TEAM_YEAR_EXCLUDED_MEDAL: &str = "No_medal";

// ---------------------------------------------------------------------------
// Aggregates
// ---------------------------------------------------------------------------

/// Headline counts for the whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewStats {
    /// Distinct years minus the placeholder year the table carries.
    pub editions: usize,
    pub hosts: usize,
    pub sports: usize,
    pub events: usize,
    pub athletes: usize,
    pub nations: usize,
}

/// Medal counts per (sex, medal), with medal-less entries excluded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenderMedalTally {
    /// Ordered by sex label, then medal label.
    pub counts: BTreeMap<(Sex, Medal), usize>,
    /// Sum of `counts` per sex.
    pub totals: BTreeMap<Sex, usize>,
}

impl GenderMedalTally {
    pub fn total(&self) -> usize {
        self.totals.values().sum()
    }
}

/// Entries per sport for one team, most frequent first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TeamSportTally {
    pub team: String,
    pub sports: Vec<(String, usize)>,
}

/// Medal outcomes for one athlete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AthleteMedalTally {
    pub athlete: String,
    /// Team of the athlete's first record; an athlete is assumed to compete
    /// for a single team.
    pub team: String,
    /// Most frequent outcome first; includes `No_Medal` entries.
    pub medals: Vec<(Medal, usize)>,
}

/// Entries per team for one year, ordered by team name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TeamYearMedalTally {
    pub year: i32,
    pub teams: BTreeMap<String, usize>,
}

/// Result of dispatching a [`Selection`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aggregate {
    Overview(OverviewStats),
    GenderMedals(GenderMedalTally),
    TeamSports(TeamSportTally),
    AthleteMedals(AthleteMedalTally),
    TeamYearMedals(TeamYearMedalTally),
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Route a selection to its operation.
pub fn run(dataset: &Dataset, selection: &Selection) -> Result<Aggregate, QueryError> {
    log::debug!(
        "running {} query over {} records",
        selection.mode(),
        dataset.len()
    );
    let aggregate = match selection {
        Selection::Overview => Aggregate::Overview(overview(dataset)),
        Selection::GenderTally => Aggregate::GenderMedals(gender_medal_tally(dataset)),
        Selection::TeamParticipation { team } => {
            Aggregate::TeamSports(team_sport_participation(dataset, team))
        }
        Selection::AthleteDistribution { athlete } => {
            Aggregate::AthleteMedals(athlete_medal_distribution(dataset, athlete)?)
        }
        Selection::TeamYearCounts { year } => {
            Aggregate::TeamYearMedals(team_year_medal_counts(dataset, *year))
        }
    };
    Ok(aggregate)
}

pub fn overview(dataset: &Dataset) -> OverviewStats {
    let records = dataset.records();
    OverviewStats {
        editions: distinct_count(records, |r| r.year).saturating_sub(1),
        hosts: distinct_count(records, |r| r.city.as_str()),
        sports: distinct_count(records, |r| r.sport.as_str()),
        events: distinct_count(records, |r| r.event.as_str()),
        athletes: distinct_count(records, |r| r.name.as_str()),
        nations: distinct_count(records, |r| r.noc.as_str()),
    }
}

pub fn gender_medal_tally(dataset: &Dataset) -> GenderMedalTally {
    let medalled = dataset.records().iter().filter(|r| r.medal != Medal::NoMedal);
    let counts = count_by(medalled, |r| (&r.sex, &r.medal))
        .map_keys(|(sex, medal)| (sex.clone(), medal.clone()))
        .into_sorted();

    let totals = counts
        .iter()
        .fold(BTreeMap::<Sex, usize>::new(), |mut totals, ((sex, _), n)| {
            *totals.entry(sex.clone()).or_insert(0) += *n;
            totals
        });

    let tally = GenderMedalTally { counts, totals };
    log::debug!(
        "gender tally: {} medals in {} (sex, medal) groups",
        tally.total(),
        tally.counts.len()
    );
    tally
}

pub fn team_sport_participation(dataset: &Dataset, team: &str) -> TeamSportTally {
    let entries = dataset.records().iter().filter(|r| r.team == team);
    let sports = count_by(entries, |r| r.sport.as_str())
        .into_descending()
        .into_iter()
        .map(|(sport, n)| (sport.to_string(), n))
        .collect::<Vec<_>>();

    log::debug!("team '{team}': {} sports", sports.len());
    TeamSportTally {
        team: team.to_string(),
        sports,
    }
}

pub fn athlete_medal_distribution(
    dataset: &Dataset,
    athlete: &str,
) -> Result<AthleteMedalTally, QueryError> {
    let mut entries = dataset.records().iter().filter(|r| r.name == athlete).peekable();
    let team = entries
        .peek()
        .map(|first| first.team.clone())
        .ok_or_else(|| QueryError::NoSuchAthlete(athlete.to_string()))?;

    let medals = count_by(entries, |r| &r.medal)
        .into_descending()
        .into_iter()
        .map(|(medal, n)| (medal.clone(), n))
        .collect();

    Ok(AthleteMedalTally {
        athlete: athlete.to_string(),
        team,
        medals,
    })
}

pub fn team_year_medal_counts(dataset: &Dataset, year: i32) -> TeamYearMedalTally {
    let entries = dataset
        .records()
        .iter()
        .filter(|r| r.medal.as_str() != TEAM_YEAR_EXCLUDED_MEDAL)
        .filter(|r| r.year == year);
    let teams = count_by(entries, |r| r.team.as_str())
        .map_keys(str::to_string)
        .into_sorted();

    log::debug!("year {year}: {} teams", teams.len());
    TeamYearMedalTally { year, teams }
}
