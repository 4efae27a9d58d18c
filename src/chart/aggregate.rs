use std::collections::BTreeMap;

use thiserror::Error;

use crate::data::filter::{PayloadRange, SiteSelection};
use crate::data::model::{columns, FlightNumber, LaunchRecord};

/// The flight-number column could not be resolved at load time, so the strip
/// chart has nothing to put on its x axis. Other charts are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no flight-number column in the dataset (tried {})", .tried.join(", "))]
pub struct MissingColumnError {
    pub tried: &'static [&'static str],
}

impl Default for MissingColumnError {
    fn default() -> Self {
        MissingColumnError {
            tried: &columns::FLIGHT_NUMBER_CANDIDATES,
        }
    }
}

// ---------------------------------------------------------------------------
// Pie
// ---------------------------------------------------------------------------

/// Input for the success pie chart. The two shapes are different results, not
/// two renderings of one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieAggregate {
    /// Successful launches per site, sorted by site. Sites without a success
    /// are absent.
    SuccessesBySite(Vec<(String, usize)>),
    /// Success and failure counts for one site.
    SiteOutcome {
        site: String,
        success: usize,
        failure: usize,
    },
}

impl PieAggregate {
    pub fn title(&self) -> String {
        match self {
            PieAggregate::SuccessesBySite(_) => "Total Successful Launches by Site".to_string(),
            PieAggregate::SiteOutcome { site, .. } => format!("Success vs Failure for {site}"),
        }
    }
}

/// `records` must already be filtered to `selection`.
pub fn pie_aggregate(records: &[&LaunchRecord], selection: &SiteSelection) -> PieAggregate {
    match selection {
        SiteSelection::All => {
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for r in records.iter().filter(|r| r.outcome.is_success()) {
                *counts.entry(r.launch_site.as_str()).or_default() += 1;
            }
            PieAggregate::SuccessesBySite(
                counts
                    .into_iter()
                    .map(|(site, n)| (site.to_string(), n))
                    .collect(),
            )
        }
        SiteSelection::Site(site) => {
            let success = records.iter().filter(|r| r.outcome.is_success()).count();
            PieAggregate::SiteOutcome {
                site: site.clone(),
                success,
                failure: records.len() - success,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Scatter
// ---------------------------------------------------------------------------

/// Payload vs outcome rows, passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterAggregate<'a> {
    pub selection: SiteSelection,
    pub range: PayloadRange,
    pub rows: Vec<&'a LaunchRecord>,
}

impl ScatterAggregate<'_> {
    pub fn title(&self) -> String {
        format!(
            "Correlation between Payload and Success for {}",
            self.selection.label()
        )
    }
}

/// `records` must already be filtered by payload range and, unless the
/// selection is the wildcard, by site.
pub fn scatter_aggregate<'a>(
    records: &[&'a LaunchRecord],
    selection: &SiteSelection,
    range: &PayloadRange,
) -> ScatterAggregate<'a> {
    ScatterAggregate {
        selection: selection.clone(),
        range: *range,
        rows: records.to_vec(),
    }
}

// ---------------------------------------------------------------------------
// Strip
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct StripRow {
    pub flight_number: FlightNumber,
    pub launch_site: String,
    /// "Success" or "Failure".
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StripAggregate {
    Rows {
        selection: SiteSelection,
        rows: Vec<StripRow>,
    },
    /// Nothing matched; rendered as a single placeholder point.
    NoData,
}

impl StripAggregate {
    pub fn title(&self) -> String {
        match self {
            StripAggregate::Rows { selection, .. } => {
                format!("Flight Number vs Launch Site ({})", selection.label())
            }
            StripAggregate::NoData => "No data available".to_string(),
        }
    }
}

/// `records` must already be filtered to `selection`.
pub fn strip_aggregate(
    records: &[&LaunchRecord],
    selection: &SiteSelection,
) -> Result<StripAggregate, MissingColumnError> {
    if records.is_empty() {
        return Ok(StripAggregate::NoData);
    }

    let rows = records
        .iter()
        .map(|r| -> Result<StripRow, MissingColumnError> {
            let flight_number = r.flight_number.clone().ok_or_else(MissingColumnError::default)?;
            Ok(StripRow {
                flight_number,
                launch_site: r.launch_site.clone(),
                label: r.outcome.label(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(StripAggregate::Rows {
        selection: selection.clone(),
        rows,
    })
}
