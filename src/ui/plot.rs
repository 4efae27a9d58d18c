use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{
    GridMark, Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Polygon, Text,
};

use crate::chart::spec::{Axis, ChartData, ChartKind, ChartSpec, Datum, Point, Slice};
use crate::color::Rgb;
use crate::reactive::ChartResult;

const DEFAULT_HEIGHT: f32 = 320.0;
const PIE_SEGMENTS: usize = 128;

// ---------------------------------------------------------------------------
// Chart region
// ---------------------------------------------------------------------------

/// Render one chart region: the spec, or why it is unavailable.
pub fn chart(ui: &mut Ui, id: &str, result: &ChartResult) {
    match result {
        Ok(spec) => chart_spec(ui, id, spec),
        Err(e) => {
            ui.vertical_centered(|ui: &mut Ui| {
                ui.colored_label(Color32::RED, format!("Chart unavailable: {e}"));
            });
        }
    }
}

pub fn chart_spec(ui: &mut Ui, id: &str, spec: &ChartSpec) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&spec.title);
        if spec.is_empty() {
            ui.label(RichText::new("No launches match the current filters").weak());
        }
    });

    match &spec.data {
        ChartData::Pie { slices, .. } => pie_chart(ui, id, spec, slices),
        ChartData::Points { x, y, points } => point_chart(ui, id, spec, x, y, points),
    }
}

// ---------------------------------------------------------------------------
// Pie
// ---------------------------------------------------------------------------

/// Slices start at twelve o'clock and run clockwise.
fn pie_chart(ui: &mut Ui, id: &str, spec: &ChartSpec, slices: &[Slice]) {
    let total: usize = slices.iter().map(|s| s.value).sum();
    let color_of = |name: &str| {
        spec.color
            .as_ref()
            .map(|c| c.map.color_for(name))
            .unwrap_or(Rgb::GRAY)
    };

    Plot::new(id)
        .legend(Legend::default())
        .height(DEFAULT_HEIGHT)
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-1.3)
        .include_x(1.3)
        .include_y(-1.1)
        .include_y(1.1)
        .show(ui, |plot_ui| {
            if total == 0 {
                return;
            }
            let mut start = FRAC_PI_2;
            for slice in slices.iter().filter(|s| s.value > 0) {
                let frac = slice.value as f64 / total as f64;
                let sweep = frac * TAU;
                let steps = ((frac * PIE_SEGMENTS as f64).ceil() as usize).max(2);

                let mut pts = vec![[0.0, 0.0]];
                pts.extend((0..=steps).map(|i| {
                    let a = start - sweep * i as f64 / steps as f64;
                    [a.cos(), a.sin()]
                }));

                let color: Color32 = color_of(&slice.name).into();
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(pts))
                        .name(&slice.name)
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );

                let mid = start - sweep / 2.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                    RichText::new(format!("{:.1}%", frac * 100.0)).color(Color32::WHITE),
                ));

                start -= sweep;
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter / strip
// ---------------------------------------------------------------------------

/// Text values placed on an axis at 0, 1, 2, … in order of first appearance.
#[derive(Debug, Default)]
struct Categories(Vec<String>);

impl Categories {
    fn collect<'a>(data: impl Iterator<Item = &'a Datum>) -> Self {
        let mut labels: Vec<String> = Vec::new();
        for d in data {
            if let Datum::Text(s) = d {
                if !labels.contains(s) {
                    labels.push(s.clone());
                }
            }
        }
        Categories(labels)
    }

    fn position(&self, d: &Datum) -> f64 {
        match d {
            Datum::Number(v) => *v,
            Datum::Text(s) => self.0.iter().position(|l| l == s).unwrap_or(0) as f64,
        }
    }

    fn label(&self, value: f64) -> String {
        if value.fract() != 0.0 || value < 0.0 {
            return String::new();
        }
        self.0.get(value as usize).cloned().unwrap_or_default()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Small deterministic offset so stacked strip points stay distinguishable.
fn jitter(i: usize) -> f64 {
    ((i * 7919) % 21) as f64 / 20.0 * 0.3 - 0.15
}

fn axis_title(axis: &Axis, size: Option<f32>) -> RichText {
    let text = RichText::new(&axis.title);
    match size {
        Some(s) => text.size(s),
        None => text,
    }
}

fn point_chart(ui: &mut Ui, id: &str, spec: &ChartSpec, x: &Axis, y: &Axis, points: &[Point]) {
    let layout = &spec.layout;
    let x_cats = Categories::collect(points.iter().map(|p| &p.x));
    let y_cats = Categories::collect(points.iter().map(|p| &p.y));
    let jittered = spec.kind == ChartKind::Strip;

    let position = |i: usize, p: &Point| {
        let mut yv = y_cats.position(&p.y);
        if jittered {
            yv += jitter(i);
        }
        [x_cats.position(&p.x), yv]
    };

    // One series per legend entry, then whatever is left uncoloured.
    let mut series: Vec<(String, Color32, Vec<[f64; 2]>)> = Vec::new();
    if let Some(color) = &spec.color {
        for (label, rgb) in color.map.legend_entries() {
            let pts: Vec<[f64; 2]> = points
                .iter()
                .enumerate()
                .filter(|(_, p)| p.group.as_deref() == Some(label.as_str()))
                .map(|(i, p)| position(i, p))
                .collect();
            series.push((label.clone(), (*rgb).into(), pts));
        }
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(RichText::new(&color.title).small());
        });
    }
    let rest: Vec<[f64; 2]> = points
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            p.group
                .as_deref()
                .and_then(|g| spec.color.as_ref().map(|c| c.map.legend_entries().iter().any(|(l, _)| l == g)))
                != Some(true)
        })
        .map(|(i, p)| position(i, p))
        .collect();

    let mut plot = Plot::new(id)
        .x_axis_label(axis_title(x, layout.axis_title_font_size))
        .y_axis_label(axis_title(y, layout.axis_title_font_size))
        .height(layout.height.unwrap_or(DEFAULT_HEIGHT))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true);
    if layout.show_legend {
        plot = plot.legend(Legend::default());
    }
    if let Some([lo, hi]) = x.domain {
        plot = plot.include_x(lo).include_x(hi);
    }
    if let Some([lo, hi]) = y.domain {
        plot = plot.include_y(lo).include_y(hi);
    }
    if let Some(w) = layout.width {
        plot = plot.width(w.min(ui.available_width()));
    }
    if !y_cats.is_empty() {
        let labels = Categories(y_cats.0.clone());
        plot = plot
            .y_axis_formatter(move |mark: GridMark, _range| labels.label(mark.value))
            .y_grid_spacer(egui_plot::uniform_grid_spacer(|_| [1.0, 5.0, 10.0]));
    }
    if !x_cats.is_empty() {
        let labels = Categories(x_cats.0.clone());
        plot = plot
            .x_axis_formatter(move |mark: GridMark, _range| labels.label(mark.value))
            .x_grid_spacer(egui_plot::uniform_grid_spacer(|_| [1.0, 5.0, 10.0]));
    }

    let radius = layout.marker_size / 2.0;
    plot.show(ui, |plot_ui| {
        for (label, color, pts) in series {
            if pts.is_empty() {
                continue;
            }
            plot_ui.points(
                Points::new(PlotPoints::from(pts))
                    .name(label)
                    .color(color)
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(radius),
            );
        }
        if !rest.is_empty() {
            plot_ui.points(
                Points::new(PlotPoints::from(rest))
                    .color(Color32::from(Rgb::GRAY))
                    .shape(MarkerShape::Circle)
                    .filled(true)
                    .radius(radius),
            );
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_positioned_in_order_of_appearance() {
        let data = [
            Datum::Text("VAFB SLC-4E".into()),
            Datum::Text("KSC LC-39A".into()),
            Datum::Text("VAFB SLC-4E".into()),
        ];
        let cats = Categories::collect(data.iter());

        assert_eq!(cats.position(&data[1]), 1.0);
        assert_eq!(cats.position(&data[2]), 0.0);
        assert_eq!(cats.label(1.0), "KSC LC-39A");
        assert_eq!(cats.label(0.5), "");
        assert_eq!(cats.label(7.0), "");
    }

    #[test]
    fn numbers_keep_their_value() {
        let cats = Categories::default();
        assert_eq!(cats.position(&Datum::Number(42.0)), 42.0);
    }

    #[test]
    fn jitter_stays_within_band() {
        assert!((0..500).map(jitter).all(|j| (-0.15..=0.15).contains(&j)));
    }
}
