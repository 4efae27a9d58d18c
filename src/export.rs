use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::chart::spec::ChartSpec;
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::data::model::Dataset;
use crate::reactive::{Controls, Reaction};

/// The three chart outputs for one set of control values.
#[derive(Debug, Serialize)]
pub struct ChartBundle {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
    pub charts: Vec<ExportedChart>,
}

#[derive(Debug, Serialize)]
pub struct ExportedChart {
    pub id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<ChartSpec>,
    /// Set instead of `spec` when the chart could not be built.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn chart_bundle(dataset: &Dataset, controls: &Controls) -> ChartBundle {
    let charts = Reaction::ALL
        .into_iter()
        .map(|reaction| match reaction.run(dataset, controls) {
            Ok(spec) => ExportedChart {
                id: reaction.output_id(),
                spec: Some(spec),
                error: None,
            },
            Err(e) => {
                log::warn!("{} unavailable: {e}", reaction.output_id());
                ExportedChart {
                    id: reaction.output_id(),
                    spec: None,
                    error: Some(e.to_string()),
                }
            }
        })
        .collect();

    ChartBundle {
        site: controls.site.clone(),
        payload_range: controls.payload,
        charts,
    }
}

/// Write the bundle as pretty JSON to `path`, or to stdout for `-`.
pub fn write_bundle(bundle: &ChartBundle, path: &Path) -> Result<()> {
    if path == Path::new("-") {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, bundle).context("writing chart specs to stdout")?;
        writeln!(out)?;
        return Ok(());
    }

    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, bundle)
        .with_context(|| format!("writing chart specs to {}", path.display()))?;
    out.flush()?;
    log::info!("Wrote {} chart specs to {}", bundle.charts.len(), path.display());
    Ok(())
}
