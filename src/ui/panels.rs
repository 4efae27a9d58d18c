use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::{PayloadRange, SiteSelection};
use crate::state::AppState;

const TITLE_COLOR: Color32 = Color32::from_rgb(0x50, 0x3D, 0x36);
const TICK_ROW_HEIGHT: f32 = 14.0;

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// Dashboard title and a one-line dataset summary.
pub fn header(ui: &mut Ui, state: &AppState) {
    let ds = state.dataset();
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new("SpaceX Launch Records Dashboard")
                .size(40.0)
                .color(TITLE_COLOR),
        );
        ui.label(format!(
            "{} launches from {} sites, payload {:.0}–{:.0} kg",
            ds.len(),
            ds.launch_sites().len(),
            ds.min_payload(),
            ds.max_payload()
        ));
    });
}

// ---------------------------------------------------------------------------
// Controls
// ---------------------------------------------------------------------------

/// Launch-site dropdown: "All Sites" followed by every distinct site.
pub fn site_selector(ui: &mut Ui, state: &mut AppState) {
    let current = state.controls().site.clone();
    let mut selected = current.clone();

    egui::ComboBox::from_id_salt("site-dropdown")
        .selected_text(current.label())
        .width(ui.available_width().min(480.0))
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut selected, SiteSelection::All, SiteSelection::All.label());
            for site in state.dataset().launch_sites() {
                ui.selectable_value(&mut selected, SiteSelection::Site(site.clone()), site);
            }
        });

    if selected != current {
        log::info!("Site selection changed to {selected}");
        state.set_site(selected);
    }
}

/// Dual-ended payload control, drawn as a low and a high slider over the
/// fixed display domain.
pub fn payload_slider(ui: &mut Ui, state: &mut AppState) {
    let range = state.controls().payload;
    let (mut low, mut high) = (range.low(), range.high());
    let domain = PayloadRange::SLIDER_MIN..=PayloadRange::SLIDER_MAX;

    ui.label("Payload range (Kg):");
    let low_changed = ui
        .add(
            egui::Slider::new(&mut low, domain.clone())
                .step_by(PayloadRange::SLIDER_STEP)
                .text("from"),
        )
        .changed();
    let high_response = ui.add(
        egui::Slider::new(&mut high, domain)
            .step_by(PayloadRange::SLIDER_STEP)
            .text("to"),
    );
    let high_changed = high_response.changed();

    let left = high_response.rect.left();
    let width = ui.spacing().slider_width;
    let handle_radius = ui.spacing().interact_size.y / 2.5;
    let (ticks, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), TICK_ROW_HEIGHT),
        egui::Sense::hover(),
    );
    let color = ui.visuals().weak_text_color();
    for mark in PayloadRange::SLIDER_MARKS {
        ui.painter().text(
            egui::pos2(tick_x(mark, left, width, handle_radius), ticks.top()),
            egui::Align2::CENTER_TOP,
            format!("{mark:.0}"),
            egui::FontId::proportional(11.0),
            color,
        );
    }

    if low_changed || high_changed {
        state.set_payload_range(PayloadRange::new(low, high));
    }
}

/// Horizontal position of `value` along a slider starting at `left`. egui
/// insets the handle's travel by its radius at both ends.
fn tick_x(value: f64, left: f32, width: f32, handle_radius: f32) -> f32 {
    let span = PayloadRange::SLIDER_MAX - PayloadRange::SLIDER_MIN;
    let t = ((value - PayloadRange::SLIDER_MIN) / span).clamp(0.0, 1.0) as f32;
    left + handle_radius + t * (width - 2.0 * handle_radius)
}
