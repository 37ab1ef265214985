// src/gui/components/data_table.rs
//
// Draws the results table. Purely a view over app.records.
// Cells are single-line; hover a cell for its full text.

use eframe::egui::{self, Color32, RichText};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::NOT_MENTIONED;
use crate::core::text::ellipsize;
use crate::data::JobRecord;
use crate::gui::app::App;

// title, company, location, description, skills
const WIDTHS: [f32; 5] = [220.0, 160.0, 160.0, 380.0, 200.0];
const DESCRIPTION_COL: usize = 3;
const SKILLS_COL: usize = 4;
const MAX_CELL_CHARS: usize = 160;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.records.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.weak("No jobs yet. Enter a job title and location, then Scrape Jobs.");
        });
        return;
    }

    let row_height = app.state.gui.row_height;
    let records = &app.records;

    egui::ScrollArea::horizontal()
        .id_salt("results_hscroll")
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt("results_table");
            for w in WIDTHS {
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(40.0));
            }

            table
                .header(24.0, |mut header| {
                    for h in JobRecord::headers() {
                        header.col(|ui| {
                            ui.strong(*h);
                        });
                    }
                })
                .body(|body| {
                    body.rows(row_height, records.len(), |mut row| {
                        let Some(rec) = records.get(row.index()) else { return };
                        for (ci, cell) in rec.cells().into_iter().enumerate() {
                            row.col(|ui| {
                                let shown = ellipsize(cell, MAX_CELL_CHARS);
                                let mut rt = RichText::new(shown);
                                if ci == SKILLS_COL && cell == NOT_MENTIONED {
                                    rt = rt.color(Color32::GRAY).italics();
                                }
                                let resp = ui.add(egui::Label::new(rt).truncate());
                                if ci == DESCRIPTION_COL && !cell.is_empty() {
                                    resp.on_hover_text(cell);
                                }
                            });
                        }
                    });
                });
        });
}
