use std::io::{self, Write};

use crate::data::classify::RangeReport;
use crate::data::matcher::{CodeCount, PrefixReport};

// ---------------------------------------------------------------------------
// Render abstraction
// ---------------------------------------------------------------------------

/// Where analysis results go.  The matching and classification code only
/// produces report structs; each surface (terminal, desktop shell) decides
/// how to show them.
pub trait ResultsView {
    fn prefix_report(&mut self, file_name: &str, report: &PrefixReport) -> io::Result<()>;
    fn top_codes(&mut self, top: &[CodeCount]) -> io::Result<()>;
    fn range_report(&mut self, file_name: &str, report: &RangeReport) -> io::Result<()>;
}

// ---------------------------------------------------------------------------
// Plain-text view
// ---------------------------------------------------------------------------

/// Console renderer, used by the CLI binary.
pub struct TextView<W: Write> {
    out: W,
}

impl<W: Write> TextView<W> {
    pub fn new(out: W) -> Self {
        TextView { out }
    }
}

impl<W: Write> ResultsView for TextView<W> {
    fn prefix_report(&mut self, file_name: &str, report: &PrefixReport) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out, "=== Analysis Results ===")?;
        writeln!(out, "File: {file_name}")?;
        writeln!(out, "Diagnosis code: {}", report.query)?;
        writeln!(out, "Total records in dataset: {}", report.total_records)?;
        writeln!(out)?;
        writeln!(
            out,
            "Count of diagnoses starting with '{}': {}",
            report.query, report.starts_with_count
        )?;
        writeln!(
            out,
            "Exact matches for '{}': {}",
            report.query, report.exact_count
        )?;

        if !report.matching_groups.is_empty() {
            writeln!(out)?;
            writeln!(out, "Matching diagnoses found:")?;
            for group in &report.matching_groups {
                writeln!(out)?;
                writeln!(out, "{}: {}", group.code, group.description)?;
                writeln!(out, "  Count: {}", group.count)?;
                writeln!(out, "  Percentage of total: {:.2}%", group.percentage)?;
            }
        }
        Ok(())
    }

    fn top_codes(&mut self, top: &[CodeCount]) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out)?;
        writeln!(out, "Top {} most frequent diagnoses in dataset:", top.len())?;
        for entry in top {
            writeln!(out, "  {:<12} {}", entry.code, entry.count)?;
        }
        Ok(())
    }

    fn range_report(&mut self, file_name: &str, report: &RangeReport) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out, "=== Range Analysis ===")?;
        writeln!(out, "File: {file_name}")?;
        writeln!(out, "Code range: {} – {}", report.low, report.high)?;
        writeln!(
            out,
            "Category: {}",
            report.category.map_or("unclassified", |c| c.name)
        )?;
        writeln!(
            out,
            "Matching records: {} of {}",
            report.matches.len(),
            report.total_records
        )?;
        for rec in &report.matches {
            writeln!(out, "  {}", rec.raw)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::matcher::count_by_prefix;
    use crate::data::model::Record;

    #[test]
    fn text_view_echoes_counts_and_groups() {
        let records: Vec<Record> = ["A10-foo", "A10-foo", "A20-bar"]
            .iter()
            .map(|r| Record::parse(r))
            .collect();
        let report = count_by_prefix(&records, "A1");

        let mut buf = Vec::new();
        TextView::new(&mut buf)
            .prefix_report("dump.txt", &report)
            .unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Count of diagnoses starting with 'A1': 2"));
        assert!(text.contains("Exact matches for 'A1': 0"));
        assert!(text.contains("A10: foo"));
        assert!(text.contains("Percentage of total: 66.67%"));
    }
}
