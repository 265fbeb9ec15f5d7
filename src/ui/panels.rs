use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – query inputs
// ---------------------------------------------------------------------------

/// Render the left query panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Diagnosis Code Analyzer");
    ui.separator();

    match &state.dataset {
        Some(ds) => {
            ui.label(format!("{} ({} records)", ds.file_name, ds.len()));
        }
        None => {
            ui.label("No dataset loaded.");
            if ui.button("Open file…").clicked() {
                open_file_dialog(state);
            }
            return;
        }
    }

    ui.add_space(8.0);

    // ---- Prefix query ----
    ui.strong("Code analysis");
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Code:");
        let edit = egui::TextEdit::singleline(&mut state.code_query)
            .hint_text("e.g. 8A68.Z")
            .desired_width(120.0);
        let response = ui.add(edit);
        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Analyze").clicked() || submitted {
            state.analyze_prefix();
        }
    });

    ui.add_space(8.0);
    ui.separator();

    // ---- Range query ----
    ui.strong("Range classification");
    ui.horizontal(|ui: &mut Ui| {
        ui.label("From:");
        ui.add(
            egui::TextEdit::singleline(&mut state.range_low)
                .hint_text("1A00")
                .desired_width(70.0),
        );
        ui.label("to:");
        ui.add(
            egui::TextEdit::singleline(&mut state.range_high)
                .hint_text("1H0Z")
                .desired_width(70.0),
        );
    });
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Classify").clicked() {
            state.analyze_range();
        }
        let can_export = state
            .range_report
            .as_ref()
            .is_some_and(|r| !r.matches.is_empty());
        if ui
            .add_enabled(can_export, egui::Button::new("Export CSV…"))
            .clicked()
        {
            save_csv_dialog(state);
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!("{} records loaded", ds.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                Color32::DARK_GREEN
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open diagnosis dataset")
        .add_filter("Supported files", &["xlsx", "csv", "txt"])
        .add_filter("Excel", &["xlsx"])
        .add_filter("CSV", &["csv"])
        .add_filter("Text", &["txt"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!("Loaded {} records from {}", dataset.len(), path.display());
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

fn save_csv_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export matching records")
        .add_filter("CSV", &["csv"])
        .set_file_name("filtered_diagnoses.csv")
        .save_file();

    if let Some(path) = file {
        state.export_range_csv(&path);
    }
}
