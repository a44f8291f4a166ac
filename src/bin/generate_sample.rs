use std::path::PathBuf;
use std::sync::Arc;

use arrow::array::{ArrayRef, Int32Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

const GAMES: [(i32, &str); 13] = [
    (1896, "Athina"),
    (1900, "Paris"),
    (1904, "St. Louis"),
    // Intercalated Games: present in the table, not an official edition.
    (1906, "Athina"),
    (1908, "London"),
    (1912, "Stockholm"),
    (1920, "Antwerpen"),
    (1924, "Paris"),
    (1928, "Amsterdam"),
    (1936, "Berlin"),
    (1948, "London"),
    (2012, "London"),
    (2016, "Rio de Janeiro"),
];

const TEAMS: [(&str, &str); 12] = [
    ("United States", "USA"),
    ("Great Britain", "GBR"),
    ("France", "FRA"),
    ("Germany", "GER"),
    ("Italy", "ITA"),
    ("Sweden", "SWE"),
    ("Hungary", "HUN"),
    ("Australia", "AUS"),
    ("Japan", "JPN"),
    ("Kenya", "KEN"),
    ("Brazil", "BRA"),
    ("China", "CHN"),
];

const SPORTS: [(&str, &[&str]); 6] = [
    ("Athletics", &["100 metres", "Marathon", "Long Jump"]),
    ("Swimming", &["100 metres Freestyle", "200 metres Breaststroke"]),
    ("Gymnastics", &["Individual All-Around"]),
    ("Fencing", &["Foil, Individual"]),
    ("Rowing", &["Single Sculls"]),
    ("Wrestling", &["Freestyle, Lightweight"]),
];

const FIRST_NAMES: [&str; 10] = [
    "Alex", "Maria", "Jonas", "Aiko", "Pierre", "Grace", "Luca", "Ingrid", "Kip", "Ana",
];
const LAST_NAMES: [&str; 10] = [
    "Smith", "Rossi", "Nagy", "Tanaka", "Dubois", "Keino", "Silva", "Berg", "Wang", "Muller",
];

/// One output row, column names as in the published table.
#[derive(Debug, Clone, Serialize)]
struct Row {
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Sport")]
    sport: String,
    #[serde(rename = "Event")]
    event: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "NOC")]
    noc: String,
    #[serde(rename = "Sex")]
    sex: String,
    #[serde(rename = "Team")]
    team: String,
    #[serde(rename = "Medal")]
    medal: String,
}

struct Athlete {
    name: String,
    sex: &'static str,
    team: usize,
    sport: usize,
    debut: usize,
    editions: usize,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

fn medal_for(rng: &mut SimpleRng) -> &'static str {
    let roll = rng.next_f64();
    if roll < 0.05 {
        "Gold"
    } else if roll < 0.10 {
        "Silver"
    } else if roll < 0.15 {
        "Bronze"
    } else {
        "No_Medal"
    }
}

fn main() {
    let out_dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| ".".to_string()));
    let mut rng = SimpleRng::new(42);

    let athletes: Vec<Athlete> = (0..FIRST_NAMES.len() * LAST_NAMES.len())
        .map(|i| {
            let first = FIRST_NAMES[i % FIRST_NAMES.len()];
            let last = LAST_NAMES[i / FIRST_NAMES.len()];
            Athlete {
                name: format!("{first} {last}"),
                sex: if i % 2 == 0 { "M" } else { "F" },
                team: rng.below(TEAMS.len()),
                sport: rng.below(SPORTS.len()),
                debut: rng.below(GAMES.len()),
                editions: 1 + rng.below(3),
            }
        })
        .collect();

    let mut rows: Vec<Row> = Vec::new();
    for (g, &(year, city)) in GAMES.iter().enumerate() {
        for athlete in &athletes {
            if g < athlete.debut || g >= athlete.debut + athlete.editions {
                continue;
            }
            let (sport, events) = SPORTS[athlete.sport];
            let division = if athlete.sex == "M" { "Men's" } else { "Women's" };
            let entered = 1 + rng.below(events.len());
            for event in events.iter().take(entered) {
                let (team, noc) = TEAMS[athlete.team];
                rows.push(Row {
                    year,
                    city: city.to_string(),
                    sport: sport.to_string(),
                    event: format!("{sport} {division} {event}"),
                    name: athlete.name.clone(),
                    noc: noc.to_string(),
                    sex: athlete.sex.to_string(),
                    team: team.to_string(),
                    medal: medal_for(&mut rng).to_string(),
                });
            }
        }
    }

    std::fs::create_dir_all(&out_dir).expect("Failed to create output directory");

    // Write CSV
    let csv_path = out_dir.join("olympics_sample.csv");
    let mut writer = csv::Writer::from_path(&csv_path).expect("Failed to create CSV file");
    for row in &rows {
        writer.serialize(row).expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV file");

    // Build Arrow arrays
    let text_column = |f: fn(&Row) -> &str| -> ArrayRef {
        Arc::new(StringArray::from(rows.iter().map(f).collect::<Vec<_>>()))
    };
    let year_array = Int32Array::from(rows.iter().map(|r| r.year).collect::<Vec<_>>());

    let mut fields = vec![Field::new("Year", DataType::Int32, false)];
    for name in ["City", "Sport", "Event", "Name", "NOC", "Sex", "Team", "Medal"] {
        fields.push(Field::new(name, DataType::Utf8, false));
    }
    let schema = Arc::new(Schema::new(fields));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(year_array) as ArrayRef,
            text_column(|r| r.city.as_str()),
            text_column(|r| r.sport.as_str()),
            text_column(|r| r.event.as_str()),
            text_column(|r| r.name.as_str()),
            text_column(|r| r.noc.as_str()),
            text_column(|r| r.sex.as_str()),
            text_column(|r| r.team.as_str()),
            text_column(|r| r.medal.as_str()),
        ],
    )
    .expect("Failed to create RecordBatch");

    // Write Parquet
    let parquet_path = out_dir.join("olympics_sample.parquet");
    let file = std::fs::File::create(&parquet_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!(
        "Wrote {} rows for {} athletes to {} and {}",
        rows.len(),
        athletes.len(),
        csv_path.display(),
        parquet_path.display()
    );
}
