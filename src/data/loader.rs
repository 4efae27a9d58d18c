use std::convert::Infallible;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::datatypes::{DataType, Float32Type, Float64Type, Int32Type, Int64Type};
use arrow::error::ArrowError;
use arrow::util::display::array_value_to_string;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::errors::ParquetError;
use parquet::file::reader::ChunkReader;
use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{columns, CellValue, Dataset, FlightNumber, LaunchRecord, Outcome};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Anything that prevents the dataset from loading. All of these are fatal at
/// startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to open {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV")]
    Csv(#[from] csv::Error),
    #[error("malformed JSON")]
    Json(#[from] serde_json::Error),
    #[error("expected a top-level JSON array of row objects")]
    JsonShape,
    #[error("malformed Parquet file")]
    Parquet(#[from] ParquetError),
    #[error("malformed Arrow record batch")]
    Arrow(#[from] ArrowError),
    #[error("unsupported data format: .{0}")]
    UnsupportedFormat(String),
    #[error("required column '{0}' is missing")]
    MissingColumn(&'static str),
    #[error("row {row}: invalid '{column}' value {value}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("dataset contains no rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Data source
// ---------------------------------------------------------------------------

/// Where the launch table lives: a local file or an HTTP(S) URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl DataSource {
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.starts_with("http://") || s.starts_with("https://") {
            DataSource::Url(s.to_string())
        } else {
            DataSource::File(PathBuf::from(s))
        }
    }
}

impl FromStr for DataSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DataSource::parse(s))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{url}"),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Csv,
    Json,
    Parquet,
}

impl Format {
    /// Pick the format from the name's extension. No extension means CSV.
    fn from_name(name: &str) -> Result<Self, LoadError> {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("csv")
            .to_ascii_lowercase();

        match ext.as_str() {
            "csv" => Ok(Format::Csv),
            "json" => Ok(Format::Json),
            "parquet" | "pq" => Ok(Format::Parquet),
            other => Err(LoadError::UnsupportedFormat(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the launch dataset from a file or URL.
///
/// Supported formats (by extension):
/// * `.csv`     – header row plus one launch per line (default)
/// * `.json`    – `[{ "Launch Site": ..., "class": 1, ... }, ...]`
/// * `.parquet` – flat scalar columns
pub fn load(source: &DataSource) -> Result<Dataset, LoadError> {
    let dataset = match source {
        DataSource::File(path) => load_file(path)?,
        DataSource::Url(url) => load_url(url)?,
    };

    log::info!(
        "Loaded {} launches from {source}: {} sites, payload {}..={} kg",
        dataset.len(),
        dataset.launch_sites().len(),
        dataset.min_payload(),
        dataset.max_payload()
    );
    match dataset.flight_column() {
        Some(col) => log::info!("Flight numbers read from column '{col}'"),
        None => log::warn!(
            "No flight-number column found (tried {:?}); the strip chart will be unavailable",
            columns::FLIGHT_NUMBER_CANDIDATES
        ),
    }

    Ok(dataset)
}

pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let format = Format::from_name(&path.to_string_lossy())?;
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let table = match format {
        Format::Csv => read_csv(file)?,
        Format::Json => read_json(file)?,
        Format::Parquet => read_parquet(file)?,
    };
    build_dataset(table)
}

fn load_url(url: &str) -> Result<Dataset, LoadError> {
    let format = Format::from_name(url_path(url))?;

    let fetch = |source: reqwest::Error| LoadError::Fetch {
        url: url.to_string(),
        source,
    };
    log::debug!("Fetching {url}");
    let body = reqwest::blocking::get(url)
        .and_then(|resp| resp.error_for_status())
        .map_err(fetch)?
        .bytes()
        .map_err(fetch)?;

    let table = match format {
        Format::Csv => read_csv(body.as_ref())?,
        Format::Json => read_json(body.as_ref())?,
        Format::Parquet => read_parquet(body)?,
    };
    build_dataset(table)
}

/// Path component of a URL, without scheme, host, query or fragment. Empty
/// when the URL names only a host.
fn url_path(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let rest = rest
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or(rest);
    rest.find('/').map_or("", |i| &rest[i..])
}

// ---------------------------------------------------------------------------
// Column resolution
// ---------------------------------------------------------------------------

/// Header positions of the columns a [`LaunchRecord`] is built from,
/// resolved once per load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    launch_site: usize,
    payload: usize,
    outcome: usize,
    booster: usize,
    /// Position and matched name of the first flight-number candidate present.
    flight: Option<(usize, &'static str)>,
}

impl ColumnLayout {
    pub fn resolve(headers: &[String]) -> Result<Self, LoadError> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(LoadError::MissingColumn(name))
        };
        let flight = columns::FLIGHT_NUMBER_CANDIDATES
            .iter()
            .find_map(|&name| headers.iter().position(|h| h == name).map(|i| (i, name)));

        Ok(ColumnLayout {
            launch_site: find(columns::LAUNCH_SITE)?,
            payload: find(columns::PAYLOAD_MASS)?,
            outcome: find(columns::OUTCOME_CLASS)?,
            booster: find(columns::BOOSTER_CATEGORY)?,
            flight,
        })
    }

    pub fn flight_column(&self) -> Option<&'static str> {
        self.flight.map(|(_, name)| name)
    }

    fn record(&self, row: usize, cells: &[CellValue]) -> Result<LaunchRecord, LoadError> {
        let cell = |idx: usize| cells.get(idx).filter(|c| !c.is_null());
        let invalid = |column: &'static str, idx: usize| LoadError::InvalidValue {
            row,
            column,
            value: cells
                .get(idx)
                .map(|c| format!("'{c}'"))
                .unwrap_or_else(|| "<missing>".to_string()),
        };

        let launch_site = cell(self.launch_site)
            .and_then(parse_category)
            .ok_or_else(|| invalid(columns::LAUNCH_SITE, self.launch_site))?;
        let payload_mass_kg = cell(self.payload)
            .and_then(CellValue::as_f64)
            .filter(|kg| kg.is_finite() && *kg >= 0.0)
            .ok_or_else(|| invalid(columns::PAYLOAD_MASS, self.payload))?;
        let outcome = cell(self.outcome)
            .and_then(parse_outcome)
            .ok_or_else(|| invalid(columns::OUTCOME_CLASS, self.outcome))?;
        let booster_version_category = cell(self.booster)
            .and_then(parse_category)
            .ok_or_else(|| invalid(columns::BOOSTER_CATEGORY, self.booster))?;
        let flight_number = match self.flight {
            Some((idx, name)) => Some(
                cell(idx)
                    .and_then(FlightNumber::from_cell)
                    .ok_or_else(|| invalid(name, idx))?,
            ),
            None => None,
        };

        Ok(LaunchRecord {
            flight_number,
            launch_site,
            payload_mass_kg,
            outcome,
            booster_version_category,
        })
    }
}

fn parse_category(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        CellValue::Null => None,
        other => Some(other.to_string()),
    }
}

fn parse_outcome(cell: &CellValue) -> Option<Outcome> {
    match cell {
        CellValue::Bool(true) => Some(Outcome::Success),
        CellValue::Bool(false) => Some(Outcome::Failure),
        other => other.as_i64().and_then(Outcome::from_class),
    }
}

// ---------------------------------------------------------------------------
// Format-independent table
// ---------------------------------------------------------------------------

/// Raw header + cells, before any column is interpreted.
#[derive(Debug, Default)]
struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

fn build_dataset(table: Table) -> Result<Dataset, LoadError> {
    let layout = ColumnLayout::resolve(&table.headers)?;
    let records = table
        .rows
        .iter()
        .enumerate()
        .map(|(row, cells)| layout.record(row, cells))
        .collect::<Result<Vec<_>, _>>()?;

    Dataset::new(records, layout.flight_column().map(str::to_string))
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// Categorical columns kept as their exact text instead of type-guessed.
const TEXT_COLUMNS: [&str; 2] = [columns::LAUNCH_SITE, columns::BOOSTER_CATEGORY];

/// Header row with column names, one launch per record. Cell types are
/// guessed the way Pandas would, except in [`TEXT_COLUMNS`].
fn read_csv<R: Read>(reader: R) -> Result<Table, LoadError> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let is_text: Vec<bool> = headers
        .iter()
        .map(|h| TEXT_COLUMNS.contains(&h.as_str()))
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(
            record
                .iter()
                .enumerate()
                .map(|(i, s)| {
                    if is_text.get(i).copied().unwrap_or(false) {
                        text_cell(s)
                    } else {
                        guess_cell_type(s)
                    }
                })
                .collect(),
        );
    }

    Ok(Table { headers, rows })
}

/// Missing-value markers, matched case-insensitively before any parsing.
fn is_null_token(s: &str) -> bool {
    s.is_empty()
        || ["nan", "null", "none"]
            .iter()
            .any(|t| s.eq_ignore_ascii_case(t))
}

fn text_cell(s: &str) -> CellValue {
    let s = s.trim();
    if is_null_token(s) {
        CellValue::Null
    } else {
        CellValue::String(s.to_string())
    }
}

fn guess_cell_type(s: &str) -> CellValue {
    let s = s.trim();
    if is_null_token(s) {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    match s.to_ascii_lowercase().as_str() {
        "true" => CellValue::Bool(true),
        "false" => CellValue::Bool(false),
        _ => CellValue::String(s.to_string()),
    }
}

// ---------------------------------------------------------------------------
// JSON reader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`.
fn read_json<R: Read>(reader: R) -> Result<Table, LoadError> {
    let root: JsonValue = serde_json::from_reader(reader)?;
    let records = root.as_array().ok_or(LoadError::JsonShape)?;

    let mut headers: Vec<String> = Vec::new();
    for rec in records {
        let obj = rec.as_object().ok_or(LoadError::JsonShape)?;
        for key in obj.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let rows = records
        .iter()
        .filter_map(JsonValue::as_object)
        .map(|obj| {
            headers
                .iter()
                .map(|h| obj.get(h).map(json_to_cell).unwrap_or(CellValue::Null))
                .collect()
        })
        .collect();

    Ok(Table { headers, rows })
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet reader
// ---------------------------------------------------------------------------

fn read_parquet<R: ChunkReader + 'static>(reader: R) -> Result<Table, LoadError> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(reader)?;
    let headers: Vec<String> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect();
    let reader = builder.build()?;

    let mut rows = Vec::new();
    for batch in reader {
        let batch = batch?;
        for row in 0..batch.num_rows() {
            rows.push(batch.columns().iter().map(|col| arrow_cell(col, row)).collect());
        }
    }

    Ok(Table { headers, rows })
}

/// Extract a single scalar from an Arrow column at a given row.
fn arrow_cell(col: &ArrayRef, row: usize) -> CellValue {
    if col.is_null(row) {
        return CellValue::Null;
    }
    match col.data_type() {
        DataType::Utf8 => CellValue::String(col.as_string::<i32>().value(row).to_string()),
        DataType::LargeUtf8 => CellValue::String(col.as_string::<i64>().value(row).to_string()),
        DataType::Int32 => CellValue::Integer(col.as_primitive::<Int32Type>().value(row) as i64),
        DataType::Int64 => CellValue::Integer(col.as_primitive::<Int64Type>().value(row)),
        DataType::Float32 => CellValue::Float(col.as_primitive::<Float32Type>().value(row) as f64),
        DataType::Float64 => CellValue::Float(col.as_primitive::<Float64Type>().value(row)),
        DataType::Boolean => CellValue::Bool(col.as_boolean().value(row)),
        _ => array_value_to_string(col, row)
            .map(CellValue::String)
            .unwrap_or(CellValue::Null),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use arrow::array::{Float64Array, Int64Array, StringArray};
    use arrow::datatypes::{Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;

    use super::*;

    const HEADER: &str = ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category";

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_csv_with_canonical_columns() {
        let csv = format!(
            "{HEADER}\n\
             0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0\n\
             1,2,CCAFS LC-40,0,525.0,F9 v1.0  B0005,v1.0\n\
             2,6,VAFB SLC-4E,1,9600.0,F9 FT B1029.1,FT\n"
        );
        let file = write_temp(".csv", &csv);

        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.min_payload(), 0.0);
        assert_eq!(ds.max_payload(), 9600.0);
        assert_eq!(ds.launch_sites(), ["CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(ds.flight_column(), Some("Flight Number"));

        let last = &ds.records()[2];
        assert_eq!(last.flight_number, Some(FlightNumber::Number(6)));
        assert_eq!(last.outcome, Outcome::Success);
        assert_eq!(last.booster_version_category, "FT");
    }

    #[test]
    fn flight_number_falls_back_to_alternate_header() {
        let csv = "flight_number,Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                   7,KSC LC-39A,1,2490,FT\n";
        let file = write_temp(".csv", csv);

        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.flight_column(), Some("flight_number"));
        assert_eq!(ds.records()[0].flight_number, Some(FlightNumber::Number(7)));
    }

    #[test]
    fn missing_flight_column_still_loads() {
        let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n\
                   KSC LC-39A,1,2490,FT\n";
        let file = write_temp(".csv", csv);

        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.flight_column(), None);
        assert_eq!(ds.records()[0].flight_number, None);
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let csv = "Flight Number,class,Payload Mass (kg),Booster Version Category\n1,1,100,FT\n";
        let file = write_temp(".csv", csv);

        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("Launch Site")));
    }

    #[test]
    fn invalid_class_reports_row_and_column() {
        let csv = format!("{HEADER}\n0,1,CCAFS LC-40,2,0.0,F9,v1.0\n");
        let file = write_temp(".csv", &csv);

        match load_file(file.path()).unwrap_err() {
            LoadError::InvalidValue { row, column, .. } => {
                assert_eq!(row, 0);
                assert_eq!(column, "class");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn negative_payload_is_rejected() {
        let csv = format!("{HEADER}\n0,1,CCAFS LC-40,1,-5,F9,v1.0\n");
        let file = write_temp(".csv", &csv);

        assert!(matches!(
            load_file(file.path()),
            Err(LoadError::InvalidValue { column: "Payload Mass (kg)", .. })
        ));
    }

    #[test]
    fn null_marker_in_launch_site_is_rejected() {
        let csv = format!("{HEADER}\n0,1,NaN,1,100,F9,FT\n");
        let file = write_temp(".csv", &csv);

        match load_file(file.path()).unwrap_err() {
            LoadError::InvalidValue { column, value, .. } => {
                assert_eq!(column, "Launch Site");
                assert_eq!(value, "'<null>'");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn numeric_looking_categories_keep_their_text() {
        let csv = format!(
            "{HEADER}\n\
             0,1,KSC LC-39A,0,200,F9 v1.1,1.10\n\
             1,2,2,1,300,F9 v1.1,007\n"
        );
        let file = write_temp(".csv", &csv);

        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.records()[0].booster_version_category, "1.10");
        assert_eq!(ds.records()[1].booster_version_category, "007");
        assert_eq!(ds.launch_sites(), ["KSC LC-39A", "2"]);
    }

    #[test]
    fn null_markers_are_recognised_before_numbers() {
        for token in ["", "  ", "nan", "NaN", "NULL", "None"] {
            assert_eq!(guess_cell_type(token), CellValue::Null, "{token:?}");
            assert_eq!(text_cell(token), CellValue::Null, "{token:?}");
        }
        assert_eq!(guess_cell_type("1.10"), CellValue::Float(1.1));
        assert_eq!(text_cell(" 1.10 "), CellValue::String("1.10".into()));
        assert_eq!(guess_cell_type("inf"), CellValue::Float(f64::INFINITY));
    }

    #[test]
    fn header_only_csv_is_empty() {
        let file = write_temp(".csv", &format!("{HEADER}\n"));
        assert!(matches!(load_file(file.path()), Err(LoadError::Empty)));
    }

    #[test]
    fn loads_records_oriented_json() {
        let json = r#"[
            {"Flight Number": 1, "Launch Site": "CCAFS LC-40", "class": 0,
             "Payload Mass (kg)": 0.0, "Booster Version Category": "v1.0"},
            {"Flight Number": 2, "Launch Site": "KSC LC-39A", "class": true,
             "Payload Mass (kg)": 2490, "Booster Version Category": "FT"}
        ]"#;
        let file = write_temp(".json", json);

        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[1].outcome, Outcome::Success);
        assert_eq!(ds.max_payload(), 2490.0);
    }

    #[test]
    fn json_object_root_is_rejected() {
        let file = write_temp(".json", r#"{"Launch Site": "A"}"#);
        assert!(matches!(load_file(file.path()), Err(LoadError::JsonShape)));
    }

    #[test]
    fn loads_parquet_scalar_columns() {
        let schema = Arc::new(Schema::new(vec![
            Field::new("Flight Number", DataType::Int64, false),
            Field::new("Launch Site", DataType::Utf8, false),
            Field::new("class", DataType::Int64, false),
            Field::new("Payload Mass (kg)", DataType::Float64, false),
            Field::new("Booster Version Category", DataType::Utf8, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(Int64Array::from(vec![1, 2])),
                Arc::new(StringArray::from(vec!["CCAFS LC-40", "VAFB SLC-4E"])),
                Arc::new(Int64Array::from(vec![0, 1])),
                Arc::new(Float64Array::from(vec![500.0, 9600.0])),
                Arc::new(StringArray::from(vec!["v1.0", "FT"])),
            ],
        )
        .unwrap();

        let file = tempfile::Builder::new().suffix(".parquet").tempfile().unwrap();
        let mut writer = ArrowWriter::try_new(file.reopen().unwrap(), schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(file.path()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.launch_sites(), ["CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(ds.records()[1].outcome, Outcome::Success);
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let file = write_temp(".xlsx", "");
        assert!(matches!(
            load_file(file.path()),
            Err(LoadError::UnsupportedFormat(ext)) if ext == "xlsx"
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_file(Path::new("/nonexistent/launches.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn source_parsing_distinguishes_urls_from_paths() {
        assert_eq!(
            DataSource::parse("https://example.com/launches.csv"),
            DataSource::Url("https://example.com/launches.csv".into())
        );
        assert_eq!(
            DataSource::parse("data/launches.csv"),
            DataSource::File(PathBuf::from("data/launches.csv"))
        );
    }

    #[test]
    fn url_format_comes_from_the_path_only() {
        assert_eq!(url_path("https://example.com"), "");
        assert_eq!(url_path("https://example.com/"), "/");
        assert_eq!(url_path("https://host/data/x.parquet?raw=1#top"), "/data/x.parquet");
        assert_eq!(url_path("http://example.com?file=a.json"), "");

        assert_eq!(Format::from_name(url_path("https://example.com")).unwrap(), Format::Csv);
        assert_eq!(Format::from_name(url_path("https://example.com/")).unwrap(), Format::Csv);
        assert_eq!(
            Format::from_name(url_path("https://host/data/x.parquet?raw=1")).unwrap(),
            Format::Parquet
        );
    }

    #[test]
    fn format_ignores_missing_extension() {
        assert_eq!(Format::from_name("https://host/dataset").unwrap(), Format::Csv);
        assert_eq!(Format::from_name("a/b/launches.PQ").unwrap(), Format::Parquet);
    }
}
