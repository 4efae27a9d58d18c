use std::path::PathBuf;

use clap::Parser;

use crate::data::filter::{PayloadRange, SiteSelection};
use crate::data::loader::DataSource;
use crate::data::model::Dataset;
use crate::reactive::Controls;

/// Public launch table the dashboard reads by default.
pub const DEFAULT_DATA_URL: &str = "https://cf-courses-data.s3.us.cloud-object-storage.appdomain.cloud/IBM-DS0321EN-SkillsNetwork/datasets/spacex_launch_dash.csv";

#[derive(Parser, Debug)]
#[command(name = "launch-dash")]
#[command(about = "Interactive dashboard for SpaceX launch records")]
#[command(version)]
pub struct Config {
    /// Launch table to load: a .csv/.json/.parquet file or an http(s) URL
    #[arg(long, env = "SPACEX_DASH_DATA", default_value = DEFAULT_DATA_URL)]
    pub data: DataSource,

    /// Initial launch site ("ALL" for every site)
    #[arg(long, default_value = SiteSelection::ALL_VALUE)]
    pub site: String,

    /// Initial lower payload bound in kg (defaults to the dataset minimum)
    #[arg(long, value_name = "KG")]
    pub payload_min: Option<f64>,

    /// Initial upper payload bound in kg (defaults to the dataset maximum)
    #[arg(long, value_name = "KG")]
    pub payload_max: Option<f64>,

    /// Write the three chart specs as JSON to PATH ("-" for stdout) and exit
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,
}

impl Config {
    /// Control values to start from, falling back to the dataset's payload
    /// bounds for anything not given on the command line.
    pub fn initial_controls(&self, dataset: &Dataset) -> Controls {
        let site = SiteSelection::parse(&self.site);
        if let Some(name) = site.site() {
            if !dataset.launch_sites().iter().any(|s| s == name) {
                log::warn!("Site '{name}' does not occur in the dataset; charts will be empty");
            }
        }

        let mut controls = Controls::initial(dataset);
        controls.payload = PayloadRange::new(
            self.payload_min.unwrap_or(controls.payload.low()),
            self.payload_max.unwrap_or(controls.payload.high()),
        );
        controls.site = site;
        controls
    }
}
