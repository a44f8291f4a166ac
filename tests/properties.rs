use olympic_tally::query::{self, TEAM_YEAR_EXCLUDED_MEDAL};
use olympic_tally::{Dataset, Medal, Record, Selection, Sex};
use quickcheck_macros::quickcheck;

const SEXES: [&str; 3] = ["M", "F", "X"];
const MEDALS: [&str; 6] = ["Gold", "Silver", "Bronze", "No_Medal", "No_medal", ""];
const TEAMS: [&str; 3] = ["France", "Kenya", "Japan"];
const SPORTS: [&str; 4] = ["Athletics", "Rowing", "Judo", "Fencing"];

/// Build a dataset from small random indices into fixed label pools.
fn dataset(rows: &[(u8, u8, u8, u8, u8)]) -> Dataset {
    let records = rows
        .iter()
        .map(|&(year, sex, team, sport, medal)| {
            let sport = SPORTS[sport as usize % SPORTS.len()];
            Record {
                year: 1896 + 4 * (year % 8) as i32,
                city: format!("City {}", year % 8),
                sport: sport.to_string(),
                event: format!("{sport} Event"),
                name: format!("Athlete {}", year % 5),
                noc: team.to_string(),
                sex: Sex::parse(SEXES[sex as usize % SEXES.len()]),
                team: TEAMS[team as usize % TEAMS.len()].to_string(),
                medal: Medal::parse(MEDALS[medal as usize % MEDALS.len()]),
            }
        })
        .collect();
    Dataset::from_records(records)
}

#[quickcheck]
fn gender_tally_counts_every_medalled_row(rows: Vec<(u8, u8, u8, u8, u8)>) -> bool {
    let ds = dataset(&rows);
    let tally = query::gender_medal_tally(&ds);
    let medalled = ds
        .records()
        .iter()
        .filter(|r| r.medal != Medal::NoMedal)
        .count();
    tally.counts.values().sum::<usize>() == medalled && tally.total() == medalled
}

#[quickcheck]
fn team_sports_are_sorted_and_cover_the_team(rows: Vec<(u8, u8, u8, u8, u8)>, team: u8) -> bool {
    let ds = dataset(&rows);
    let team = TEAMS[team as usize % TEAMS.len()];
    let tally = query::team_sport_participation(&ds, team);
    let sorted = tally.sports.windows(2).all(|w| w[0].1 >= w[1].1);
    let total: usize = tally.sports.iter().map(|(_, n)| n).sum();
    sorted && total == ds.records().iter().filter(|r| r.team == team).count()
}

#[quickcheck]
fn team_year_only_drops_the_lowercase_label(rows: Vec<(u8, u8, u8, u8, u8)>, year: u8) -> bool {
    let ds = dataset(&rows);
    let year = 1896 + 4 * (year % 8) as i32;
    let tally = query::team_year_medal_counts(&ds, year);
    let expected = ds
        .records()
        .iter()
        .filter(|r| r.year == year && r.medal.as_str() != TEAM_YEAR_EXCLUDED_MEDAL)
        .count();
    tally.teams.values().sum::<usize>() == expected
}

#[quickcheck]
fn queries_are_idempotent(rows: Vec<(u8, u8, u8, u8, u8)>, pick: u8) -> bool {
    let ds = dataset(&rows);
    let selection = match pick % 5 {
        0 => Selection::Overview,
        1 => Selection::GenderTally,
        2 => Selection::TeamParticipation {
            team: TEAMS[pick as usize % TEAMS.len()].to_string(),
        },
        3 => Selection::AthleteDistribution {
            athlete: format!("Athlete {}", pick % 5),
        },
        _ => Selection::TeamYearCounts {
            year: 1896 + 4 * (pick % 8) as i32,
        },
    };
    query::run(&ds, &selection) == query::run(&ds, &selection)
}
