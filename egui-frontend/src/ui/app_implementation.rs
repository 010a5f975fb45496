use chrono::Datelike;
use eframe::egui;
use log::info;

use crate::ui::app_state::{ExpenseTimelineApp, LAST_PAGE_KEY};
use crate::ui::components::expense_chart::ChartInteraction;
use crate::ui::components::month_carousel::{show_panels, Header};
use crate::ui::components::theme::CURRENT_THEME;

impl eframe::App for ExpenseTimelineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.last_detail.is_some() {
            self.render_detail_bar(ctx);
        }

        self.sync_charts();

        let frame = egui::Frame::none().fill(CURRENT_THEME.layout.background);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let offset = self.carousel.offset_state();
            if let Some(index) = self.header.render(ui, &offset, &self.labels) {
                self.carousel.jump_to(index, &mut self.last_page);
            }

            if self.charts.is_empty() {
                ui.centered_and_justified(|ui| {
                    let text = egui::RichText::new("📭 No months to show")
                        .color(CURRENT_THEME.typography.secondary);
                    ui.label(text);
                });
                return;
            }

            let offset = self.carousel.offset_state();
            let response = show_panels(
                ui,
                &offset,
                &mut self.charts,
                &mut self.carousel,
                self.config.carousel.transition_secs,
            );
            if let Some(interaction) = response.active {
                self.apply_interaction(interaction, response.panel_width);
            }
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, LAST_PAGE_KEY, &self.last_page.page);
    }
}

impl ExpenseTimelineApp {
    /// Route what the active chart reported to the carousel and the host
    pub fn apply_interaction(&mut self, interaction: ChartInteraction, panel_width: f32) {
        if let Some((origin, current)) = interaction.pan {
            self.carousel.pan_to(origin.x, current.x);
        }
        if interaction.pan_finished {
            self.carousel.finish_pan(panel_width, &mut self.last_page);
        }
        if let Some(request) = interaction.open_detail {
            info!("🔎 Opening detail for {} day {}", request.month_id, request.day);
            self.last_detail = Some(request);
        }
    }

    /// Bottom strip naming the last day opened from the chart
    fn render_detail_bar(&mut self, ctx: &egui::Context) {
        let Some(request) = self.last_detail else {
            return;
        };

        egui::TopBottomPanel::bottom("detail_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let label = request
                    .month_id
                    .first_day()
                    .ok()
                    .and_then(|first| first.with_day(request.day))
                    .map(|date| date.format("%A %d %B %Y").to_string())
                    .unwrap_or_else(|| format!("{} day {}", request.month_id, request.day));
                let text = egui::RichText::new(format!("🧾 {}", label))
                    .color(CURRENT_THEME.typography.primary);
                ui.label(text);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✖").clicked() {
                        self.last_detail = None;
                    }
                });
            });
        });
    }
}
