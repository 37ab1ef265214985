// src/gui/components/search_bar.rs
//
// Title, the three search inputs and the Scrape button.

use eframe::egui;

use crate::config::consts::{MAX_PAGES, MIN_PAGES};
use crate::gui::{actions, app::App, TITLE};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.add_space(4.0);
    ui.heading(TITLE);
    ui.label("Scrapes Indeed and shows required skills for various roles");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        let scrape = &mut app.state.options.scrape;
        ui.label("Job Title");
        ui.add(egui::TextEdit::singleline(&mut scrape.query).desired_width(220.0));

        ui.label("Location");
        ui.add(egui::TextEdit::singleline(&mut scrape.location).desired_width(160.0));
    });

    ui.horizontal(|ui| {
        ui.add(
            egui::Slider::new(&mut app.state.options.scrape.pages, MIN_PAGES..=MAX_PAGES)
                .text("Number of pages to scrape"),
        );

        let label = egui::RichText::new("Scrape Jobs").strong();
        if ui.add(egui::Button::new(label)).clicked() {
            logf!("UI: Scrape clicked");
            actions::scrape(app);
        }
    });
    ui.add_space(4.0);
}
