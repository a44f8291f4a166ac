use crate::data::group::count_by;
use crate::data::model::Dataset;
use crate::error::SelectionError;

// ---------------------------------------------------------------------------
// Selection – what the user asked for
// ---------------------------------------------------------------------------

/// One resolved request from the input layer, carrying exactly the
/// parameters its view needs. Passed by reference into every query; the
/// core never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Overview,
    GenderTally,
    TeamParticipation { team: String },
    AthleteDistribution { athlete: String },
    TeamYearCounts { year: i32 },
}

impl Selection {
    /// Short name of the view, used in logs.
    pub fn mode(&self) -> &'static str {
        match self {
            Selection::Overview => "overview",
            Selection::GenderTally => "gender",
            Selection::TeamParticipation { .. } => "team",
            Selection::AthleteDistribution { .. } => "athlete",
            Selection::TeamYearCounts { .. } => "year",
        }
    }
}

// ---------------------------------------------------------------------------
// Choices – what the input layer may offer
// ---------------------------------------------------------------------------

/// Inclusive range of years present in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    /// Year preselected before the user moves the slider.
    pub fn default_year(&self) -> i32 {
        self.min
    }
}

/// Valid parameter values for each view, derived from the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChoices {
    /// Distinct teams in first-seen order.
    pub teams: Vec<String>,
    /// Distinct athlete names in first-seen order.
    pub athletes: Vec<String>,
    /// `None` only for an empty dataset.
    pub years: Option<YearRange>,
}

impl SelectionChoices {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let owned = |(key, _): (&str, usize)| key.to_string();
        Self {
            teams: count_by(dataset.records(), |r| r.team.as_str())
                .into_encounter_order()
                .into_iter()
                .map(owned)
                .collect(),
            athletes: count_by(dataset.records(), |r| r.name.as_str())
                .into_encounter_order()
                .into_iter()
                .map(owned)
                .collect(),
            years: dataset
                .year_bounds()
                .map(|(min, max)| YearRange { min, max }),
        }
    }

    /// Reject selections the query engine should never see.
    pub fn validate(&self, selection: &Selection) -> Result<(), SelectionError> {
        match selection {
            Selection::Overview | Selection::GenderTally => Ok(()),
            Selection::TeamParticipation { team } => {
                if self.teams.iter().any(|t| t == team) {
                    Ok(())
                } else {
                    Err(SelectionError::UnknownTeam(team.clone()))
                }
            }
            Selection::AthleteDistribution { athlete } => {
                if self.athletes.iter().any(|a| a == athlete) {
                    Ok(())
                } else {
                    Err(SelectionError::UnknownAthlete(athlete.clone()))
                }
            }
            Selection::TeamYearCounts { year } => {
                let range = self.years.ok_or(SelectionError::NoYears)?;
                if range.contains(*year) {
                    Ok(())
                } else {
                    Err(SelectionError::YearOutOfRange {
                        year: *year,
                        min: range.min,
                        max: range.max,
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{dataset, row};

    fn sample() -> Dataset {
        dataset(vec![
            row(1900, "Ann", "F", "France", "Tennis", "Gold"),
            row(1896, "Bob", "M", "Greece", "Athletics", "No_Medal"),
            row(1904, "Ann", "F", "France", "Golf", "Silver"),
            row(1900, "Cid", "M", "Spain", "Polo", "Bronze"),
        ])
    }

    #[test]
    fn choices_keep_first_seen_order() {
        let choices = SelectionChoices::from_dataset(&sample());
        assert_eq!(choices.teams, vec!["France", "Greece", "Spain"]);
        assert_eq!(choices.athletes, vec!["Ann", "Bob", "Cid"]);
        assert_eq!(choices.years, Some(YearRange { min: 1896, max: 1904 }));
        assert_eq!(choices.years.map(|y| y.default_year()), Some(1896));
    }

    #[test]
    fn year_range_is_inclusive() {
        let choices = SelectionChoices::from_dataset(&sample());
        assert!(choices.validate(&Selection::TeamYearCounts { year: 1896 }).is_ok());
        assert!(choices.validate(&Selection::TeamYearCounts { year: 1904 }).is_ok());
        assert_eq!(
            choices.validate(&Selection::TeamYearCounts { year: 1908 }),
            Err(SelectionError::YearOutOfRange {
                year: 1908,
                min: 1896,
                max: 1904
            })
        );
    }

    #[test]
    fn unknown_team_and_athlete_are_rejected() {
        let choices = SelectionChoices::from_dataset(&sample());
        assert_eq!(
            choices.validate(&Selection::TeamParticipation { team: "Italy".into() }),
            Err(SelectionError::UnknownTeam("Italy".into()))
        );
        assert_eq!(
            choices.validate(&Selection::AthleteDistribution { athlete: "Zed".into() }),
            Err(SelectionError::UnknownAthlete("Zed".into()))
        );
        assert!(choices
            .validate(&Selection::AthleteDistribution { athlete: "Cid".into() })
            .is_ok());
    }

    #[test]
    fn empty_dataset_has_no_year_choices() {
        let choices = SelectionChoices::from_dataset(&Dataset::default());
        assert!(choices.teams.is_empty());
        assert_eq!(
            choices.validate(&Selection::TeamYearCounts { year: 2000 }),
            Err(SelectionError::NoYears)
        );
        assert!(choices.validate(&Selection::Overview).is_ok());
    }
}
