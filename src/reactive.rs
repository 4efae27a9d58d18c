use crate::chart::aggregate::{
    pie_aggregate, scatter_aggregate, strip_aggregate, MissingColumnError,
};
use crate::chart::spec::{pie_spec, scatter_spec, strip_spec, ChartSpec};
use crate::data::filter::{filter_by_payload, filter_by_site, PayloadRange, SiteSelection};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Controls
// ---------------------------------------------------------------------------

/// Current values of the two input controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl Controls {
    /// Every site, payload range spanning the data.
    pub fn initial(dataset: &Dataset) -> Self {
        Controls {
            site: SiteSelection::All,
            payload: PayloadRange::initial(dataset),
        }
    }
}

/// An input control whose change triggers reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Site,
    Payload,
}

// ---------------------------------------------------------------------------
// Reactions
// ---------------------------------------------------------------------------

/// Chart output of a reaction. Only the strip chart can fail.
pub type ChartResult = Result<ChartSpec, MissingColumnError>;

/// One chart output and the controls it listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reaction {
    SuccessPie,
    PayloadScatter,
    FlightStrip,
}

impl Reaction {
    pub const ALL: [Reaction; 3] = [
        Reaction::SuccessPie,
        Reaction::PayloadScatter,
        Reaction::FlightStrip,
    ];

    /// Controls this reaction is subscribed to.
    pub fn inputs(self) -> &'static [Control] {
        match self {
            Reaction::SuccessPie => &[Control::Site],
            Reaction::PayloadScatter => &[Control::Site, Control::Payload],
            Reaction::FlightStrip => &[Control::Site],
        }
    }

    /// Reactions to re-run when `control` changes.
    pub fn subscribers(control: Control) -> impl Iterator<Item = Reaction> {
        Self::ALL
            .into_iter()
            .filter(move |r| r.inputs().contains(&control))
    }

    /// Stable identifier of the chart region this reaction fills.
    pub fn output_id(self) -> &'static str {
        match self {
            Reaction::SuccessPie => "success-pie-chart",
            Reaction::PayloadScatter => "success-payload-scatter-chart",
            Reaction::FlightStrip => "flight-launch-site-chart",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Reaction::SuccessPie => 0,
            Reaction::PayloadScatter => 1,
            Reaction::FlightStrip => 2,
        }
    }

    /// Recompute this reaction's chart from the dataset and control values.
    pub fn run(self, dataset: &Dataset, controls: &Controls) -> ChartResult {
        match self {
            Reaction::SuccessPie => Ok(success_pie(dataset, &controls.site)),
            Reaction::PayloadScatter => Ok(payload_scatter(dataset, &controls.site, &controls.payload)),
            Reaction::FlightStrip => flight_strip(dataset, &controls.site),
        }
    }
}

pub fn success_pie(dataset: &Dataset, site: &SiteSelection) -> ChartSpec {
    let records = filter_by_site(dataset, site);
    pie_spec(&pie_aggregate(&records, site))
}

pub fn payload_scatter(dataset: &Dataset, site: &SiteSelection, range: &PayloadRange) -> ChartSpec {
    let records = filter_by_payload(&filter_by_site(dataset, site), range);
    scatter_spec(
        &scatter_aggregate(&records, site, range),
        dataset.booster_categories(),
    )
}

pub fn flight_strip(dataset: &Dataset, site: &SiteSelection) -> ChartResult {
    let records = filter_by_site(dataset, site);
    strip_aggregate(&records, site).map(|agg| strip_spec(&agg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::spec::{ChartData, ChartKind, Datum};
    use crate::data::fixtures::{launch_dataset, record};

    #[test]
    fn payload_changes_only_reach_the_scatter_chart() {
        let subs: Vec<Reaction> = Reaction::subscribers(Control::Payload).collect();
        assert_eq!(subs, [Reaction::PayloadScatter]);
    }

    #[test]
    fn site_changes_reach_every_chart() {
        let subs: Vec<Reaction> = Reaction::subscribers(Control::Site).collect();
        assert_eq!(subs, Reaction::ALL);
    }

    #[test]
    fn reactions_are_referentially_transparent() {
        let ds = launch_dataset();
        let controls = Controls {
            site: SiteSelection::parse("CCAFS LC-40"),
            payload: PayloadRange::new(0.0, 5000.0),
        };
        for reaction in Reaction::ALL {
            assert_eq!(reaction.run(&ds, &controls), reaction.run(&ds, &controls));
        }
    }

    #[test]
    fn scatter_applies_both_filters() {
        let ds = launch_dataset();
        let spec = payload_scatter(
            &ds,
            &SiteSelection::parse("CCAFS LC-40"),
            &PayloadRange::new(100.0, 4000.0),
        );

        match spec.data {
            ChartData::Points { points, .. } => {
                let xs: Vec<Datum> = points.into_iter().map(|p| p.x).collect();
                assert_eq!(xs, [Datum::Number(525.0), Datum::Number(3170.0)]);
            }
            other => panic!("unexpected data {other:?}"),
        }
    }

    #[test]
    fn pie_and_strip_ignore_the_payload_range() {
        let ds = launch_dataset();
        let narrow = Controls {
            site: SiteSelection::All,
            payload: PayloadRange::new(0.0, 1.0),
        };
        let wide = Controls::initial(&ds);

        assert_eq!(
            Reaction::SuccessPie.run(&ds, &narrow),
            Reaction::SuccessPie.run(&ds, &wide)
        );
        assert_eq!(
            Reaction::FlightStrip.run(&ds, &narrow),
            Reaction::FlightStrip.run(&ds, &wide)
        );
    }

    #[test]
    fn strip_for_unknown_site_is_the_placeholder() {
        let ds = launch_dataset();
        let spec = flight_strip(&ds, &SiteSelection::parse("Boca Chica")).unwrap();
        assert_eq!(spec.kind, ChartKind::Scatter);
        assert_eq!(spec.title, "No data available");
    }

    #[test]
    fn missing_flight_column_only_breaks_the_strip_chart() {
        let mut r = record(1, "A", 100.0, 1, "FT");
        r.flight_number = None;
        let ds = Dataset::new(vec![r], None).unwrap();
        let controls = Controls::initial(&ds);

        assert!(Reaction::SuccessPie.run(&ds, &controls).is_ok());
        assert!(Reaction::PayloadScatter.run(&ds, &controls).is_ok());
        assert!(Reaction::FlightStrip.run(&ds, &controls).is_err());
    }
}
