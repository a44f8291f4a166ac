use std::cmp::Ordering;
use std::fmt;

// ---------------------------------------------------------------------------
// Sex – a single cell in the `Sex` column
// ---------------------------------------------------------------------------

/// Athlete sex as recorded in the results table.
///
/// Values outside `{M, F}` are kept verbatim in [`Sex::Other`] so that loading
/// never rejects a row because of an unexpected label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
    Other(String),
}

impl Sex {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "M" => Sex::Male,
            "F" => Sex::Female,
            other => Sex::Other(other.to_string()),
        }
    }

    /// The label exactly as it appears in the source table.
    pub fn as_str(&self) -> &str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
            Sex::Other(s) => s,
        }
    }
}

// -- Ordered by label so grouped output matches a sorted group-by. A raw
// label that spells a named variant sorts right after it, keeping `Ord`
// consistent with `Eq`. --

impl PartialOrd for Sex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sex {
    fn cmp(&self, other: &Self) -> Ordering {
        let is_raw = |s: &Sex| matches!(s, Sex::Other(_));
        self.as_str()
            .cmp(other.as_str())
            .then_with(|| is_raw(self).cmp(&is_raw(other)))
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Medal – a single cell in the `Medal` column
// ---------------------------------------------------------------------------

/// Medal outcome of one athlete-event entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
    /// Participated without placing; stored as `No_Medal` in the source.
    NoMedal,
    /// Any label outside the nominal domain, kept verbatim.
    Other(String),
}

impl Medal {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Gold" => Medal::Gold,
            "Silver" => Medal::Silver,
            "Bronze" => Medal::Bronze,
            "No_Medal" => Medal::NoMedal,
            other => Medal::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
            Medal::NoMedal => "No_Medal",
            Medal::Other(s) => s,
        }
    }
}

impl PartialOrd for Medal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Medal {
    fn cmp(&self, other: &Self) -> Ordering {
        let is_raw = |m: &Medal| matches!(m, Medal::Other(_));
        self.as_str()
            .cmp(other.as_str())
            .then_with(|| is_raw(self).cmp(&is_raw(other)))
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the results table
// ---------------------------------------------------------------------------

/// One athlete-event-medal entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub year: i32,
    pub city: String,
    pub sport: String,
    pub event: String,
    /// Athlete name.
    pub name: String,
    /// National Olympic Committee code.
    pub noc: String,
    pub sex: Sex,
    pub team: String,
    pub medal: Medal,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table. Immutable once built: there is no API that hands
/// out mutable access to the records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> Self {
        Dataset { records }
    }

    /// All records in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Smallest and largest `Year` present, or `None` for an empty table.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        self.records.iter().map(|r| r.year).fold(None, |acc, y| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medal_labels_round_trip_and_keep_unknowns() {
        for label in ["Gold", "Silver", "Bronze", "No_Medal"] {
            assert_eq!(Medal::parse(label).as_str(), label);
        }
        assert_eq!(Medal::parse("No_medal"), Medal::Other("No_medal".into()));
        assert_eq!(Medal::parse(""), Medal::Other(String::new()));
    }

    #[test]
    fn sex_orders_by_label() {
        let mut sexes = vec![Sex::Male, Sex::Other("X".into()), Sex::Female];
        sexes.sort();
        assert_eq!(sexes, vec![Sex::Female, Sex::Male, Sex::Other("X".into())]);
    }

    #[test]
    fn medals_order_like_sorted_labels() {
        let mut medals = vec![Medal::Silver, Medal::NoMedal, Medal::Gold, Medal::Bronze];
        medals.sort();
        assert_eq!(
            medals,
            vec![Medal::Bronze, Medal::Gold, Medal::NoMedal, Medal::Silver]
        );
    }

    #[test]
    fn raw_label_spelling_a_variant_is_a_distinct_key() {
        use std::collections::BTreeMap;

        let raw = Medal::Other("Gold".into());
        assert_eq!(raw.cmp(&Medal::Gold), Ordering::Greater);
        assert_eq!(Medal::Gold.cmp(&raw), Ordering::Less);
        assert_eq!(raw.cmp(&Medal::Other("Gold".into())), Ordering::Equal);
        assert_eq!(Sex::Other("M".into()).cmp(&Sex::Male), Ordering::Greater);

        let mut counts = BTreeMap::new();
        *counts.entry(Medal::Gold).or_insert(0) += 2;
        *counts.entry(raw.clone()).or_insert(0) += 1;
        assert_eq!(counts.get(&Medal::Gold), Some(&2));
        assert_eq!(counts.get(&raw), Some(&1));
        assert_eq!(counts.keys().collect::<Vec<_>>(), vec![&Medal::Gold, &raw]);
    }

    #[test]
    fn year_bounds_of_empty_dataset_is_none() {
        assert_eq!(Dataset::default().year_bounds(), None);
    }
}
