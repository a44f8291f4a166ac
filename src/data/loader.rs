use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Array, AsArray};
use arrow::datatypes::{DataType, Int32Type, Int64Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::model::{Dataset, Medal, Record, Sex};
use crate::error::LoadError;

/// Columns every source must provide, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "Year", "City", "Sport", "Event", "Name", "NOC", "Sex", "Team", "Medal",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a results table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row naming the required columns (extra columns ignored)
/// * `.json`    – `[{ "Year": 1896, "City": "Athina", ... }, ...]`
/// * `.parquet` – string columns plus an integer `Year` column
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(LoadError::UnsupportedFormat(other.to_string())),
    };

    if dataset.is_empty() {
        log::warn!("{} contains no records", path.display());
    } else {
        log::info!("Loaded {} records from {}", dataset.len(), path.display());
    }
    Ok(dataset)
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_columns<'a>(present: impl IntoIterator<Item = &'a str>) -> Result<(), LoadError> {
    let present: Vec<&str> = present.into_iter().collect();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !present.contains(*col))
        .map(|col| col.to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(LoadError::MissingColumns(missing))
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// One CSV row as written by `df.to_csv(index=False)`. Extra columns are
/// ignored; empty cells become `None`.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "City")]
    city: Option<String>,
    #[serde(rename = "Sport")]
    sport: Option<String>,
    #[serde(rename = "Event")]
    event: Option<String>,
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "NOC")]
    noc: Option<String>,
    #[serde(rename = "Sex")]
    sex: Option<String>,
    #[serde(rename = "Team")]
    team: Option<String>,
    #[serde(rename = "Medal")]
    medal: Option<String>,
}

fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(open(path)?);

    let headers = reader.headers()?.clone();
    ensure_columns(headers.iter())?;

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result?;
        let year = parse_year(&row.year, row_no)?;
        records.push(Record {
            year,
            city: row.city.unwrap_or_default(),
            sport: row.sport.unwrap_or_default(),
            event: row.event.unwrap_or_default(),
            name: row.name.unwrap_or_default(),
            noc: row.noc.unwrap_or_default(),
            sex: Sex::parse(row.sex.as_deref().unwrap_or("")),
            team: row.team.unwrap_or_default(),
            medal: Medal::parse(row.medal.as_deref().unwrap_or("")),
        });
    }

    Ok(Dataset::from_records(records))
}

/// Accept `1896` and the float rendering `1896.0` some exporters produce.
fn parse_year(raw: &str, row: usize) -> Result<i32, LoadError> {
    let trimmed = raw.trim();
    let invalid = || LoadError::InvalidValue {
        row,
        column: "Year",
        value: raw.to_string(),
    };
    if let Ok(year) = trimmed.parse::<i32>() {
        return Ok(year);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f >= i32::MIN as f64 && f <= i32::MAX as f64 => {
            Ok(f as i32)
        }
        _ => Err(invalid()),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, `df.to_json(orient='records')`):
///
/// ```json
/// [
///   {
///     "Year": 1896, "City": "Athina", "Sport": "Athletics",
///     "Event": "Athletics Men's 100 metres", "Name": "Thomas Burke",
///     "NOC": "USA", "Sex": "M", "Team": "United States", "Medal": "Gold"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Dataset, LoadError> {
    let root: JsonValue = serde_json::from_reader(std::io::BufReader::new(open(path)?))?;

    let rows = root.as_array().ok_or_else(|| LoadError::Malformed {
        row: 0,
        message: "expected top-level JSON array".to_string(),
    })?;

    let mut records = Vec::with_capacity(rows.len());

    for (i, rec) in rows.iter().enumerate() {
        let obj = rec.as_object().ok_or_else(|| LoadError::Malformed {
            row: i,
            message: "not a JSON object".to_string(),
        })?;
        ensure_columns(obj.keys().map(String::as_str))?;

        let text = |col: &str| json_to_text(obj.get(col));
        records.push(Record {
            year: json_to_year(obj.get("Year"), i)?,
            city: text("City"),
            sport: text("Sport"),
            event: text("Event"),
            name: text("Name"),
            noc: text("NOC"),
            sex: Sex::parse(&text("Sex")),
            team: text("Team"),
            medal: Medal::parse(&text("Medal")),
        });
    }

    Ok(Dataset::from_records(records))
}

fn json_to_text(val: Option<&JsonValue>) -> String {
    match val {
        None | Some(JsonValue::Null) => String::new(),
        Some(JsonValue::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn json_to_year(val: Option<&JsonValue>, row: usize) -> Result<i32, LoadError> {
    match val {
        Some(JsonValue::Number(n)) => parse_year(&n.to_string(), row),
        Some(JsonValue::String(s)) => parse_year(s, row),
        other => Err(LoadError::InvalidValue {
            row,
            column: "Year",
            value: other.map(JsonValue::to_string).unwrap_or_default(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file holding the results table.
///
/// Expected schema:
/// - `Year`: Int32 or Int64
/// - every other required column: Utf8 or LargeUtf8
/// - any other columns are ignored
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Dataset, LoadError> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(open(path)?)?;
    ensure_columns(builder.schema().fields().iter().map(|f| f.name().as_str()))?;
    let reader = builder.build()?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result?;
        let schema = batch.schema();

        let mut columns: HashMap<&str, &Arc<dyn Array>> = HashMap::new();
        for name in REQUIRED_COLUMNS {
            let idx = schema
                .index_of(name)
                .map_err(|_| LoadError::MissingColumns(vec![name.to_string()]))?;
            columns.insert(name, batch.column(idx));
        }
        let base = records.len();
        let text = |name: &str, row: usize| extract_text(columns[name], name, row, base + row);

        let mut batch_records = Vec::with_capacity(batch.num_rows());
        for row in 0..batch.num_rows() {
            batch_records.push(Record {
                year: extract_year(columns["Year"], row, base + row)?,
                city: text("City", row)?,
                sport: text("Sport", row)?,
                event: text("Event", row)?,
                name: text("Name", row)?,
                noc: text("NOC", row)?,
                sex: Sex::parse(&text("Sex", row)?),
                team: text("Team", row)?,
                medal: Medal::parse(&text("Medal", row)?),
            });
        }
        records.extend(batch_records);
    }

    Ok(Dataset::from_records(records))
}

// -- Parquet / Arrow helpers --

/// Read a string cell; nulls become empty strings.
fn extract_text(
    col: &Arc<dyn Array>,
    name: &str,
    row: usize,
    global_row: usize,
) -> Result<String, LoadError> {
    if col.is_null(row) {
        return Ok(String::new());
    }
    match col.data_type() {
        DataType::Utf8 => Ok(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => Err(LoadError::Malformed {
            row: global_row,
            message: format!("column '{name}' has type {other:?}, expected a string column"),
        }),
    }
}

/// Read the `Year` cell at `row`; `global_row` is only used in errors.
fn extract_year(col: &Arc<dyn Array>, row: usize, global_row: usize) -> Result<i32, LoadError> {
    let invalid = |value: String| LoadError::InvalidValue {
        row: global_row,
        column: "Year",
        value,
    };
    if col.is_null(row) {
        return Err(invalid("null".to_string()));
    }
    match col.data_type() {
        DataType::Int32 => Ok(col.as_primitive::<Int32Type>().value(row)),
        DataType::Int64 => {
            let v = col.as_primitive::<Int64Type>().value(row);
            i32::try_from(v).map_err(|_| invalid(v.to_string()))
        }
        DataType::Utf8 => parse_year(col.as_string::<i32>().value(row), global_row),
        other => Err(invalid(format!("<{other:?}>"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_accepts_integer_and_integral_float_text() {
        assert_eq!(parse_year("1896", 0).unwrap(), 1896);
        assert_eq!(parse_year(" 2016.0 ", 0).unwrap(), 2016);
    }

    #[test]
    fn year_rejects_non_integers() {
        for bad in ["", "abc", "1900.5"] {
            let err = parse_year(bad, 7).unwrap_err();
            assert!(
                matches!(err, LoadError::InvalidValue { row: 7, column: "Year", .. }),
                "{bad:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn missing_columns_are_all_reported() {
        let err = ensure_columns(["Year", "City", "Sport", "Event", "Name", "NOC", "Sex"]).unwrap_err();
        match err {
            LoadError::MissingColumns(cols) => assert_eq!(cols, vec!["Team", "Medal"]),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn unknown_extension_is_rejected_before_io() {
        let err = load_file(Path::new("results.xlsx")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat(ext) if ext == "xlsx"));
    }

    #[test]
    fn json_text_cells_tolerate_nulls_and_numbers() {
        assert_eq!(json_to_text(None), "");
        assert_eq!(json_to_text(Some(&JsonValue::Null)), "");
        assert_eq!(json_to_text(Some(&serde_json::json!(42))), "42");
        assert_eq!(json_to_text(Some(&serde_json::json!("Gold"))), "Gold");
    }
}
