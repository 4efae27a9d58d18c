use crate::data::filter::{PayloadRange, SiteSelection};
use crate::data::model::Dataset;
use crate::reactive::{ChartResult, Control, Controls, Reaction};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Holds the dataset loaded at startup, the current control values and the
/// latest output of every reaction. Control setters re-run exactly the
/// reactions subscribed to that control.
pub struct AppState {
    dataset: Dataset,
    controls: Controls,
    outputs: [ChartResult; 3],
}

impl AppState {
    /// Ingest the dataset and compute every chart for the initial controls.
    pub fn new(dataset: Dataset, controls: Controls) -> Self {
        let outputs = Reaction::ALL.map(|r| r.run(&dataset, &controls));
        Self {
            dataset,
            controls,
            outputs,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    /// Latest chart produced by `reaction`.
    pub fn output(&self, reaction: Reaction) -> &ChartResult {
        &self.outputs[reaction.index()]
    }

    /// Site selector changed.
    pub fn set_site(&mut self, site: SiteSelection) {
        if self.controls.site == site {
            return;
        }
        self.controls.site = site;
        self.notify(Control::Site);
    }

    /// Payload range control changed.
    pub fn set_payload_range(&mut self, range: PayloadRange) {
        if self.controls.payload == range {
            return;
        }
        self.controls.payload = range;
        self.notify(Control::Payload);
    }

    fn notify(&mut self, control: Control) {
        for reaction in Reaction::subscribers(control) {
            log::debug!(
                "{control:?} changed, recomputing {} (site={}, payload={}..={})",
                reaction.output_id(),
                self.controls.site,
                self.controls.payload.low(),
                self.controls.payload.high()
            );
            self.outputs[reaction.index()] = reaction.run(&self.dataset, &self.controls);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::spec::ChartData;
    use crate::data::fixtures::launch_dataset;
    use crate::data::loader::load_file;

    fn state() -> AppState {
        let ds = launch_dataset();
        let controls = Controls::initial(&ds);
        AppState::new(ds, controls)
    }

    fn title(state: &AppState, reaction: Reaction) -> String {
        state.output(reaction).as_ref().unwrap().title.clone()
    }

    #[test]
    fn initial_outputs_cover_all_sites() {
        let s = state();
        assert_eq!(title(&s, Reaction::SuccessPie), "Total Successful Launches by Site");
        assert_eq!(
            title(&s, Reaction::PayloadScatter),
            "Correlation between Payload and Success for All Sites"
        );
        assert_eq!(
            title(&s, Reaction::FlightStrip),
            "Flight Number vs Launch Site (All Sites)"
        );
    }

    #[test]
    fn site_change_recomputes_every_chart() {
        let mut s = state();
        s.set_site(SiteSelection::parse("KSC LC-39A"));

        assert_eq!(title(&s, Reaction::SuccessPie), "Success vs Failure for KSC LC-39A");
        assert_eq!(
            title(&s, Reaction::PayloadScatter),
            "Correlation between Payload and Success for KSC LC-39A"
        );
        assert_eq!(
            title(&s, Reaction::FlightStrip),
            "Flight Number vs Launch Site (KSC LC-39A)"
        );
    }

    #[test]
    fn payload_change_leaves_pie_and_strip_untouched() {
        let mut s = state();
        let pie = s.output(Reaction::SuccessPie).clone();
        let strip = s.output(Reaction::FlightStrip).clone();

        s.set_payload_range(PayloadRange::new(2000.0, 2000.0));

        assert_eq!(s.output(Reaction::SuccessPie), &pie);
        assert_eq!(s.output(Reaction::FlightStrip), &strip);
        assert!(s.output(Reaction::PayloadScatter).as_ref().unwrap().is_empty());
    }

    #[test]
    fn strip_resolves_alternate_flight_column_end_to_end() {
        use std::io::Write;

        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(
            file,
            "FlightNumber,Launch Site,class,Payload Mass (kg),Booster Version Category\n\
             11,KSC LC-39A,1,2490,FT\n\
             12,KSC LC-39A,0,5300,FT\n"
        )
        .unwrap();

        let ds = load_file(file.path()).unwrap();
        let controls = Controls::initial(&ds);
        let s = AppState::new(ds, controls);

        let spec = s.output(Reaction::FlightStrip).as_ref().unwrap();
        match &spec.data {
            ChartData::Points { points, .. } => assert_eq!(points.len(), 2),
            other => panic!("unexpected data {other:?}"),
        }
    }
}
