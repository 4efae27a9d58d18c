use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use super::loader::LoadError;

/// Column headers of the launch table.
pub mod columns {
    pub const LAUNCH_SITE: &str = "Launch Site";
    pub const PAYLOAD_MASS: &str = "Payload Mass (kg)";
    pub const OUTCOME_CLASS: &str = "class";
    pub const BOOSTER_CATEGORY: &str = "Booster Version Category";
    pub const FLIGHT_NUMBER: &str = "Flight Number";

    /// Tried in order; the first header present wins.
    pub const FLIGHT_NUMBER_CANDIDATES: [&str; 5] = [
        FLIGHT_NUMBER,
        "FlightNumber",
        "flight_number",
        "Flight_Number",
        "flight",
    ];
}

// ---------------------------------------------------------------------------
// CellValue – a single cell of the source table
// ---------------------------------------------------------------------------

/// A dynamically-typed table cell mirroring common Pandas dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Integer view; floats are accepted only when they carry no fraction.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CellValue::Integer(i) => Some(*i),
            CellValue::Float(v) if v.is_finite() && v.fract() == 0.0 => Some(*v as i64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Launch attributes
// ---------------------------------------------------------------------------

/// Mission outcome, stored as the dataset's `class` column (0 / 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// The numeric class value plotted on the scatter chart's y axis.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Flight identifier. Usually an integer, but some exports carry text ids.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FlightNumber {
    Number(i64),
    Label(String),
}

impl FlightNumber {
    /// Interpret a cell as a flight number; `None` for null cells.
    pub fn from_cell(cell: &CellValue) -> Option<Self> {
        if let Some(n) = cell.as_i64() {
            return Some(FlightNumber::Number(n));
        }
        match cell {
            CellValue::Null => None,
            CellValue::String(s) if s.trim().is_empty() => None,
            other => Some(FlightNumber::Label(other.to_string())),
        }
    }
}

impl fmt::Display for FlightNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightNumber::Number(n) => write!(f, "{n}"),
            FlightNumber::Label(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// `None` only when the dataset has no flight-number column at all.
    pub flight_number: Option<FlightNumber>,
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed summaries.
///
/// Built once at startup and never mutated afterwards; filtered views borrow
/// from it.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
    /// Distinct launch sites in order of first appearance.
    launch_sites: Vec<String>,
    /// Distinct booster categories, sorted.
    booster_categories: Vec<String>,
    /// Header the flight numbers were read from, if any candidate matched.
    flight_column: Option<String>,
}

impl Dataset {
    /// Compute payload bounds and the distinct site list from the records.
    pub fn new(records: Vec<LaunchRecord>, flight_column: Option<String>) -> Result<Self, LoadError> {
        if records.is_empty() {
            return Err(LoadError::Empty);
        }

        let (min_payload, max_payload) = records.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), r| (lo.min(r.payload_mass_kg), hi.max(r.payload_mass_kg)),
        );

        let mut launch_sites: Vec<String> = Vec::new();
        for r in &records {
            if !launch_sites.contains(&r.launch_site) {
                launch_sites.push(r.launch_site.clone());
            }
        }

        let booster_categories: Vec<String> = records
            .iter()
            .map(|r| r.booster_version_category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        Ok(Dataset {
            records,
            min_payload,
            max_payload,
            launch_sites,
            booster_categories,
            flight_column,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    pub fn launch_sites(&self) -> &[String] {
        &self.launch_sites
    }

    pub fn booster_categories(&self) -> &[String] {
        &self.booster_categories
    }

    pub fn flight_column(&self) -> Option<&str> {
        self.flight_column.as_deref()
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::record;

    #[test]
    fn summaries_are_computed_once_at_construction() {
        let ds = Dataset::new(
            vec![
                record(1, "CCAFS LC-40", 500.0, 1, "v1.0"),
                record(2, "VAFB SLC-4E", 9600.0, 0, "FT"),
                record(3, "CCAFS LC-40", 0.0, 1, "B4"),
            ],
            Some("Flight Number".into()),
        )
        .unwrap();

        assert_eq!(ds.min_payload(), 0.0);
        assert_eq!(ds.max_payload(), 9600.0);
        assert_eq!(ds.launch_sites(), ["CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(ds.booster_categories(), ["B4", "FT", "v1.0"]);
        assert!(ds
            .records()
            .iter()
            .all(|r| (ds.min_payload()..=ds.max_payload()).contains(&r.payload_mass_kg)));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(matches!(Dataset::new(Vec::new(), None), Err(LoadError::Empty)));
    }

    #[test]
    fn outcome_maps_only_binary_classes() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::Success.class(), 1);
    }

    #[test]
    fn flight_number_accepts_integers_and_text() {
        assert_eq!(
            FlightNumber::from_cell(&CellValue::Float(12.0)),
            Some(FlightNumber::Number(12))
        );
        assert_eq!(
            FlightNumber::from_cell(&CellValue::String("F-7".into())),
            Some(FlightNumber::Label("F-7".into()))
        );
        assert_eq!(FlightNumber::from_cell(&CellValue::Null), None);
    }
}
