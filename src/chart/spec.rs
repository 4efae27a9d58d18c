use serde::Serialize;

use super::aggregate::{PieAggregate, ScatterAggregate, StripAggregate};
use crate::color::{ColorMap, Rgb};
use crate::data::model::{columns, FlightNumber};

// ---------------------------------------------------------------------------
// ChartSpec – what the rendering surface receives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Scatter,
    Strip,
}

/// A plotted value: numeric, or a category placed on a categorical axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Datum {
    Number(f64),
    Text(String),
}

impl From<&FlightNumber> for Datum {
    fn from(n: &FlightNumber) -> Self {
        match n {
            FlightNumber::Number(n) => Datum::Number(*n as f64),
            FlightNumber::Label(s) => Datum::Text(s.clone()),
        }
    }
}

/// Column bound to an axis, and the title shown for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub field: String,
    pub title: String,
    /// Extent the axis must at least cover, if fixed by a control.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<[f64; 2]>,
}

impl Axis {
    fn new(field: &str, title: &str) -> Self {
        Axis {
            field: field.to_string(),
            title: title.to_string(),
            domain: None,
        }
    }

    fn with_domain(mut self, low: f64, high: f64) -> Self {
        self.domain = Some([low, high]);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub name: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: Datum,
    pub y: Datum,
    /// Colour category; `None` for uncoloured points.
    pub group: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum ChartData {
    Pie {
        names: String,
        values: String,
        slices: Vec<Slice>,
    },
    Points {
        x: Axis,
        y: Axis,
        points: Vec<Point>,
    },
}

/// Which column drives colour, its legend title, and the colour of each
/// category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorEncoding {
    pub field: String,
    pub title: String,
    pub map: ColorMap,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub marker_size: f32,
    pub axis_title_font_size: Option<f32>,
    pub show_legend: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            width: None,
            height: None,
            marker_size: 6.0,
            axis_title_font_size: None,
            show_legend: true,
        }
    }
}

impl Layout {
    /// Wide footprint so many flights stay readable.
    pub fn large() -> Self {
        Layout {
            width: Some(1200.0),
            height: Some(400.0),
            marker_size: 8.0,
            axis_title_font_size: Some(20.0),
            show_legend: true,
        }
    }
}

/// Renderer-agnostic description of one chart. Built fresh on every
/// recomputation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub data: ChartData,
    pub color: Option<ColorEncoding>,
    pub layout: Layout,
}

impl ChartSpec {
    /// Number of marks (slices or points) the chart draws.
    pub fn len(&self) -> usize {
        match &self.data {
            ChartData::Pie { slices, .. } => slices.len(),
            ChartData::Points { points, .. } => points.len(),
        }
    }

    /// True when nothing would be drawn: no points, or a pie whose slices
    /// all count zero.
    pub fn is_empty(&self) -> bool {
        match &self.data {
            ChartData::Pie { slices, .. } => slices.iter().all(|s| s.value == 0),
            ChartData::Points { .. } => self.len() == 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

const OUTCOME_AXIS_TITLE: &str = "Launch Outcome (0=Failure, 1=Success)";
const OUTCOME_LABEL_FIELD: &str = "Class_Label";

pub fn pie_spec(agg: &PieAggregate) -> ChartSpec {
    let (names, values, slices): (&str, &str, Vec<Slice>) = match agg {
        PieAggregate::SuccessesBySite(counts) => (
            columns::LAUNCH_SITE,
            "count",
            counts
                .iter()
                .map(|(site, n)| Slice {
                    name: site.clone(),
                    value: *n,
                })
                .collect(),
        ),
        PieAggregate::SiteOutcome {
            success, failure, ..
        } => (
            "Outcome",
            "Count",
            vec![
                Slice {
                    name: "Success".into(),
                    value: *success,
                },
                Slice {
                    name: "Failure".into(),
                    value: *failure,
                },
            ],
        ),
    };

    let map = ColorMap::new(slices.iter().map(|s| s.name.clone()));
    ChartSpec {
        kind: ChartKind::Pie,
        title: agg.title(),
        data: ChartData::Pie {
            names: names.to_string(),
            values: values.to_string(),
            slices,
        },
        color: Some(ColorEncoding {
            field: names.to_string(),
            title: names.to_string(),
            map,
        }),
        layout: Layout::default(),
    }
}

/// `boosters` is the palette key set; pass the dataset-wide categories so a
/// booster keeps its colour whatever the filters drop.
pub fn scatter_spec(agg: &ScatterAggregate<'_>, boosters: &[String]) -> ChartSpec {
    let points: Vec<Point> = agg
        .rows
        .iter()
        .map(|r| Point {
            x: Datum::Number(r.payload_mass_kg),
            y: Datum::Number(f64::from(r.outcome.class())),
            group: Some(r.booster_version_category.clone()),
        })
        .collect();

    ChartSpec {
        kind: ChartKind::Scatter,
        title: agg.title(),
        data: ChartData::Points {
            x: Axis::new(columns::PAYLOAD_MASS, columns::PAYLOAD_MASS)
                .with_domain(agg.range.low(), agg.range.high()),
            y: Axis::new(columns::OUTCOME_CLASS, OUTCOME_AXIS_TITLE),
            points,
        },
        color: Some(ColorEncoding {
            field: columns::BOOSTER_CATEGORY.to_string(),
            title: columns::BOOSTER_CATEGORY.to_string(),
            map: ColorMap::new(boosters.iter().map(String::as_str)),
        }),
        layout: Layout::default(),
    }
}

pub fn strip_spec(agg: &StripAggregate) -> ChartSpec {
    let rows = match agg {
        StripAggregate::Rows { rows, .. } => rows,
        StripAggregate::NoData => return no_data_spec(agg.title()),
    };

    let points = rows
        .iter()
        .map(|r| Point {
            x: Datum::from(&r.flight_number),
            y: Datum::Text(r.launch_site.clone()),
            group: Some(r.label.to_string()),
        })
        .collect();

    ChartSpec {
        kind: ChartKind::Strip,
        title: agg.title(),
        data: ChartData::Points {
            x: Axis::new(columns::FLIGHT_NUMBER, "Flight Number"),
            y: Axis::new(columns::LAUNCH_SITE, "Launch Site"),
            points,
        },
        color: Some(ColorEncoding {
            field: OUTCOME_LABEL_FIELD.to_string(),
            title: "Mission Outcome".to_string(),
            map: ColorMap::fixed(&[("Success", Rgb::ORANGE), ("Failure", Rgb::BLUE)]),
        }),
        layout: Layout::large(),
    }
}

/// Single placeholder point at (0, "No Data").
fn no_data_spec(title: String) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Scatter,
        title,
        data: ChartData::Points {
            x: Axis::new("x", ""),
            y: Axis::new("y", ""),
            points: vec![Point {
                x: Datum::Number(0.0),
                y: Datum::Text("No Data".to_string()),
                group: None,
            }],
        },
        color: None,
        layout: Layout::default(),
    }
}
