use eframe::egui::{RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Results (central panel)
// ---------------------------------------------------------------------------

/// Render analysis results in the central panel.
pub fn results_panel(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a dataset to begin  (File → Open…)");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            if let Some(report) = &state.prefix_report {
                prefix_section(ui, state, report);
            }
            if let Some(report) = &state.range_report {
                if state.prefix_report.is_some() {
                    ui.add_space(12.0);
                    ui.separator();
                }
                range_section(ui, report);
            }
            if state.prefix_report.is_none() && state.range_report.is_none() {
                ui.label("Enter a diagnosis code or a code range on the left.");
            }
        });
}

// ---------------------------------------------------------------------------
// Prefix analysis section
// ---------------------------------------------------------------------------

fn prefix_section(ui: &mut Ui, state: &AppState, report: &crate::data::matcher::PrefixReport) {
    ui.heading("Analysis Results");
    ui.label(format!("Total records in dataset: {}", report.total_records));
    ui.label(format!(
        "Diagnoses starting with '{}': {}",
        report.query, report.starts_with_count
    ));
    ui.label(format!(
        "Exact matches for '{}': {}",
        report.query, report.exact_count
    ));

    if !report.matching_groups.is_empty() {
        ui.add_space(8.0);
        ui.strong("Matching diagnoses");
        ui.push_id("matching_groups", |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(80.0))
                .column(Column::remainder())
                .column(Column::auto().at_least(50.0))
                .column(Column::auto().at_least(60.0))
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("Code");
                    });
                    header.col(|ui| {
                        ui.strong("Description");
                    });
                    header.col(|ui| {
                        ui.strong("Count");
                    });
                    header.col(|ui| {
                        ui.strong("% of total");
                    });
                })
                .body(|mut body| {
                    for group in &report.matching_groups {
                        body.row(18.0, |mut row| {
                            row.col(|ui| {
                                ui.label(&group.code);
                            });
                            row.col(|ui| {
                                ui.label(&group.description);
                            });
                            row.col(|ui| {
                                ui.label(group.count.to_string());
                            });
                            row.col(|ui| {
                                ui.label(format!("{:.2}%", group.percentage));
                            });
                        });
                    }
                });
        });
    }

    if !state.top_codes.is_empty() {
        ui.add_space(8.0);
        ui.strong("Top 10 most frequent diagnoses");
        ui.push_id("top_codes", |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(80.0))
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("Code");
                    });
                    header.col(|ui| {
                        ui.strong("Count");
                    });
                })
                .body(|mut body| {
                    for entry in &state.top_codes {
                        body.row(18.0, |mut row| {
                            row.col(|ui| {
                                ui.label(&entry.code);
                            });
                            row.col(|ui| {
                                ui.label(entry.count.to_string());
                            });
                        });
                    }
                });
        });
    }
}

// ---------------------------------------------------------------------------
// Range analysis section
// ---------------------------------------------------------------------------

fn range_section(ui: &mut Ui, report: &crate::data::classify::RangeReport) {
    ui.heading("Range Classification");
    ui.label(format!("Code range: {} – {}", report.low, report.high));

    let category = report.category.map_or("unclassified", |c| c.name);
    ui.label(RichText::new(format!("Category: {category}")).strong());

    ui.label(format!(
        "Matching records: {} of {}",
        report.matches.len(),
        report.total_records
    ));

    if !report.matches.is_empty() {
        ui.add_space(8.0);
        ui.push_id("range_matches", |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(80.0))
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("Code");
                    });
                    header.col(|ui| {
                        ui.strong("Description");
                    });
                })
                .body(|mut body| {
                    for rec in &report.matches {
                        body.row(18.0, |mut row| {
                            row.col(|ui| {
                                ui.label(&rec.code);
                            });
                            row.col(|ui| {
                                ui.label(&rec.description);
                            });
                        });
                    }
                });
        });
    }
}
