use std::fmt;

use serde::Serialize;

use super::model::{Dataset, LaunchRecord};

// ---------------------------------------------------------------------------
// Control values
// ---------------------------------------------------------------------------

/// Site selector value: every site, or exactly one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Wire value of the wildcard option in the site selector.
    pub const ALL_VALUE: &'static str = "ALL";

    pub fn parse(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn site(&self) -> Option<&str> {
        match self {
            SiteSelection::All => None,
            SiteSelection::Site(s) => Some(s),
        }
    }

    /// Human label for the selector; the wildcard reads "All Sites".
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(s) => s,
        }
    }

    fn admits(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(s) => record.launch_site == *s,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str(Self::ALL_VALUE),
            SiteSelection::Site(s) => f.write_str(s),
        }
    }
}

impl From<SiteSelection> for String {
    fn from(sel: SiteSelection) -> Self {
        sel.to_string()
    }
}

/// Closed payload interval `[low, high]` in kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    /// Fixed display domain of the range control, independent of the data.
    pub const SLIDER_MIN: f64 = 0.0;
    pub const SLIDER_MAX: f64 = 10_000.0;
    pub const SLIDER_STEP: f64 = 1_000.0;
    pub const SLIDER_MARKS: [f64; 5] = [0.0, 2_500.0, 5_000.0, 7_500.0, 10_000.0];

    /// Endpoints are swapped if given in the wrong order so `low <= high`.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            PayloadRange { low: a, high: b }
        } else {
            PayloadRange { low: b, high: a }
        }
    }

    /// The range control's initial value: the dataset's actual payload bounds.
    pub fn initial(dataset: &Dataset) -> Self {
        PayloadRange::new(dataset.min_payload(), dataset.max_payload())
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Inclusive on both ends.
    pub fn contains(&self, kg: f64) -> bool {
        self.low <= kg && kg <= self.high
    }
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Records launched from the selected site, in dataset order.
///
/// The wildcard returns every record. A site that is not in the dataset
/// simply matches nothing.
pub fn filter_by_site<'a>(dataset: &'a Dataset, selection: &SiteSelection) -> Vec<&'a LaunchRecord> {
    dataset
        .records()
        .iter()
        .filter(|r| selection.admits(r))
        .collect()
}

/// Records whose payload lies within `range`, order preserved.
pub fn filter_by_payload<'a>(records: &[&'a LaunchRecord], range: &PayloadRange) -> Vec<&'a LaunchRecord> {
    records
        .iter()
        .copied()
        .filter(|r| range.contains(r.payload_mass_kg))
        .collect()
}
