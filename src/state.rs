use std::path::Path;

use crate::data::classify::{self, RangeReport};
use crate::data::export;
use crate::data::matcher::{self, CodeCount, PrefixReport};
use crate::data::model::Dataset;
use crate::error::AnalyzeError;

/// How many entries the frequency table shows.
pub const TOP_N: usize = 10;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until the user opens a file).
    pub dataset: Option<Dataset>,

    /// Code (or code prefix) input text.
    pub code_query: String,

    /// Range query input texts.
    pub range_low: String,
    pub range_high: String,

    /// Last prefix analysis, if any.
    pub prefix_report: Option<PrefixReport>,

    /// Top-10 frequency table for the loaded dataset.
    pub top_codes: Vec<CodeCount>,

    /// Last range analysis, if any.
    pub range_report: Option<RangeReport>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded dataset and drop any stale results.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.prefix_report = None;
        self.range_report = None;
        self.top_codes = Vec::new();
        self.status_message = None;
        self.dataset = Some(dataset);
    }

    /// Run the prefix analysis for the current query text.
    ///
    /// Each click is an independent, stateless pass over the loaded dataset;
    /// results replace whatever the previous click produced.
    pub fn analyze_prefix(&mut self) {
        let result = self.try_analyze_prefix();
        self.report_outcome(result);
    }

    fn try_analyze_prefix(&mut self) -> Result<(), AnalyzeError> {
        let dataset = self
            .dataset
            .as_ref()
            .ok_or(AnalyzeError::EmptyInput("Please upload a file first"))?;

        let query = self.code_query.trim().to_uppercase();
        if query.is_empty() {
            return Err(AnalyzeError::EmptyInput("Please enter a diagnosis code"));
        }

        self.prefix_report = Some(matcher::count_by_prefix(&dataset.records, &query));
        self.top_codes = matcher::top_n(&dataset.records, TOP_N);
        Ok(())
    }

    /// Run the range classification for the current low/high texts.
    pub fn analyze_range(&mut self) {
        let result = self.try_analyze_range();
        self.report_outcome(result);
    }

    fn try_analyze_range(&mut self) -> Result<(), AnalyzeError> {
        let dataset = self
            .dataset
            .as_ref()
            .ok_or(AnalyzeError::EmptyInput("Please upload a file first"))?;

        let low = self.range_low.trim().to_uppercase();
        let high = self.range_high.trim().to_uppercase();
        if low.is_empty() || high.is_empty() {
            return Err(AnalyzeError::EmptyInput(
                "Please enter both range bounds (low and high code)",
            ));
        }

        self.range_report = Some(classify::analyze_range(&dataset.records, &low, &high));
        Ok(())
    }

    /// Write the current range matches to a CSV file.
    pub fn export_range_csv(&mut self, path: &Path) {
        let result = self.try_export_range_csv(path);
        match result {
            Ok(n) => {
                log::info!("Exported {n} records to {}", path.display());
                self.status_message = Some(format!("Exported {n} records"));
            }
            Err(e) => {
                log::error!("Export failed: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    fn try_export_range_csv(&self, path: &Path) -> Result<usize, AnalyzeError> {
        let report = self
            .range_report
            .as_ref()
            .ok_or(AnalyzeError::EmptyInput("Run a range analysis first"))?;

        let file = std::fs::File::create(path)
            .map_err(|e| AnalyzeError::format(&path.display().to_string(), e))?;
        export::write_csv(&report.matches, file)?;
        Ok(report.matches.len())
    }

    fn report_outcome(&mut self, result: Result<(), AnalyzeError>) {
        match result {
            Ok(()) => self.status_message = None,
            Err(e) => {
                log::warn!("Analysis rejected: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(Dataset::from_raw_lines(
            "dump.txt",
            ["1A00-Cholera", "1A00-Cholera", "BA00-Hypertension"],
        ));
        state
    }

    #[test]
    fn analyze_without_file_sets_error_status() {
        let mut state = AppState::default();
        state.code_query = "1A00".into();
        state.analyze_prefix();
        assert!(state.prefix_report.is_none());
        assert!(state.status_message.as_deref().unwrap().contains("upload a file"));
    }

    #[test]
    fn analyze_with_empty_query_sets_error_status() {
        let mut state = loaded_state();
        state.code_query = "   ".into();
        state.analyze_prefix();
        assert!(state.prefix_report.is_none());
        assert!(state.status_message.as_deref().unwrap().contains("diagnosis code"));
    }

    #[test]
    fn query_is_trimmed_and_uppercased_before_matching() {
        let mut state = loaded_state();
        state.code_query = "  1a  ".into();
        state.analyze_prefix();
        let report = state.prefix_report.unwrap();
        assert_eq!(report.query, "1A");
        assert_eq!(report.starts_with_count, 2);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn range_analysis_requires_both_bounds() {
        let mut state = loaded_state();
        state.range_low = "1A00".into();
        state.analyze_range();
        assert!(state.range_report.is_none());
        assert!(state.status_message.is_some());
    }

    #[test]
    fn range_analysis_classifies_and_filters() {
        let mut state = loaded_state();
        state.range_low = "1a00".into();
        state.range_high = "1h0z".into();
        state.analyze_range();
        let report = state.range_report.unwrap();
        assert_eq!(report.category.unwrap().name, "Certain infectious or parasitic diseases");
        assert_eq!(report.matches.len(), 2);
    }
}
