use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::reactive::Reaction;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
}

impl LaunchDashApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            panels::header(ui, &self.state);
        });

        // ---- Central panel: controls and the three charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    panels::site_selector(ui, &mut self.state);
                    ui.add_space(12.0);

                    let pie = Reaction::SuccessPie;
                    plot::chart(ui, pie.output_id(), self.state.output(pie));
                    ui.add_space(12.0);

                    panels::payload_slider(ui, &mut self.state);
                    ui.add_space(12.0);

                    let scatter = Reaction::PayloadScatter;
                    plot::chart(ui, scatter.output_id(), self.state.output(scatter));
                    ui.add_space(12.0);

                    ui.vertical_centered(|ui: &mut Ui| {
                        ui.heading(RichText::new("Flight Number vs Launch Site").strong());
                    });
                    let strip = Reaction::FlightStrip;
                    plot::chart(ui, strip.output_id(), self.state.output(strip));
                });
        });
    }
}
