use super::model::Record;

// ---------------------------------------------------------------------------
// Category table
// ---------------------------------------------------------------------------

/// A named clinical category covering a lexicographic code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryRange {
    pub name: &'static str,
    pub low: &'static str,
    pub high: &'static str,
}

/// ICD-11 chapter ranges.  Read-only constant; the ranges do not overlap by
/// construction of the classification, which is not re-checked at runtime.
pub const CATEGORY_RANGES: [CategoryRange; 28] = [
    CategoryRange { name: "Certain infectious or parasitic diseases", low: "1A00", high: "1H0Z" },
    CategoryRange { name: "Neoplasms", low: "2A00", high: "2F9Z" },
    CategoryRange { name: "Diseases of the blood or blood-forming organs", low: "3A00", high: "3C0Z" },
    CategoryRange { name: "Diseases of the immune system", low: "4A00", high: "4B4Z" },
    CategoryRange { name: "Endocrine, nutritional or metabolic diseases", low: "5A00", high: "5D46" },
    CategoryRange { name: "Mental, behavioural or neurodevelopmental disorders", low: "6A00", high: "6E8Z" },
    CategoryRange { name: "Sleep-wake disorders", low: "7A00", high: "7B2Z" },
    CategoryRange { name: "Diseases of the nervous system", low: "8A00", high: "8E7Z" },
    CategoryRange { name: "Diseases of the visual system", low: "9A00", high: "9E1Z" },
    CategoryRange { name: "Diseases of the ear or mastoid process", low: "AA00", high: "AC0Z" },
    CategoryRange { name: "Diseases of the circulatory system", low: "BA00", high: "BE2Z" },
    CategoryRange { name: "Diseases of the respiratory system", low: "CA00", high: "CB7Z" },
    CategoryRange { name: "Diseases of the digestive system", low: "DA00", high: "DE2Z" },
    CategoryRange { name: "Diseases of the skin", low: "EA00", high: "EM0Z" },
    CategoryRange { name: "Diseases of the musculoskeletal system or connective tissue", low: "FA00", high: "FC0Z" },
    CategoryRange { name: "Diseases of the genitourinary system", low: "GA00", high: "GC8Z" },
    CategoryRange { name: "Conditions related to sexual health", low: "HA00", high: "HA8Z" },
    CategoryRange { name: "Pregnancy, childbirth or the puerperium", low: "JA00", high: "JB6Z" },
    CategoryRange { name: "Certain conditions originating in the perinatal period", low: "KA00", high: "KD5Z" },
    CategoryRange { name: "Developmental anomalies", low: "LA00", high: "LD9Z" },
    CategoryRange { name: "Symptoms, signs or clinical findings, not elsewhere classified", low: "MA00", high: "MH2Y" },
    CategoryRange { name: "Injury, poisoning or certain other consequences of external causes", low: "NA00", high: "NF2Z" },
    CategoryRange { name: "External causes of morbidity or mortality", low: "PA00", high: "PL2Z" },
    CategoryRange { name: "Factors influencing health status or contact with health services", low: "QA00", high: "QF4Z" },
    CategoryRange { name: "Codes for special purposes", low: "RA00", high: "RA26" },
    CategoryRange { name: "Supplementary Chapter Traditional Medicine Conditions", low: "SA00", high: "SJ3Z" },
    CategoryRange { name: "Supplementary section for functioning assessment", low: "VA00", high: "VC50" },
    CategoryRange { name: "Extension Codes", low: "XA0060", high: "XY9U" },
];

// ---------------------------------------------------------------------------
// Range classification and filtering
// ---------------------------------------------------------------------------

/// Find the first category whose bounds contain `[low_code, high_code]`.
///
/// Comparison is plain lexicographic string ordering, not numeric and not
/// aware of code structure.  `None` means unclassified.
pub fn classify_range(low_code: &str, high_code: &str) -> Option<&'static CategoryRange> {
    CATEGORY_RANGES
        .iter()
        .find(|cat| cat.low <= low_code && high_code <= cat.high)
}

/// All records whose code lies in `[low_code, high_code]` inclusive.
///
/// Uses the same lexicographic ordering as [`classify_range`].  Known
/// limitation: string ordering mishandles variable-length codes (a
/// 6-character extension code sorts between unrelated 4-character bounds),
/// which matches the behaviour of the original tool.
pub fn filter_by_range<'a>(
    records: &'a [Record],
    low_code: &str,
    high_code: &str,
) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|rec| low_code <= rec.code.as_str() && rec.code.as_str() <= high_code)
        .collect()
}

// ---------------------------------------------------------------------------
// Range analysis result
// ---------------------------------------------------------------------------

/// Classification plus matching rows for one low/high query.
#[derive(Debug, Clone)]
pub struct RangeReport {
    /// The bounds as matched (already trimmed and upper-cased).
    pub low: String,
    pub high: String,
    /// `None` renders as "unclassified".
    pub category: Option<&'static CategoryRange>,
    /// Records inside the range, in file order.
    pub matches: Vec<Record>,
    pub total_records: usize,
}

/// Classify the bounds and collect the matching records in one pass.
pub fn analyze_range(records: &[Record], low_code: &str, high_code: &str) -> RangeReport {
    RangeReport {
        low: low_code.to_string(),
        high: high_code.to_string(),
        category: classify_range(low_code, high_code),
        matches: filter_by_range(records, low_code, high_code)
            .into_iter()
            .cloned()
            .collect(),
        total_records: records.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    #[test]
    fn infectious_chapter_is_classified() {
        let cat = classify_range("1A00", "1H0Z").unwrap();
        assert_eq!(cat.name, "Certain infectious or parasitic diseases");
    }

    #[test]
    fn subrange_within_a_chapter_is_classified() {
        let cat = classify_range("BA00", "BA21").unwrap();
        assert_eq!(cat.name, "Diseases of the circulatory system");
    }

    #[test]
    fn out_of_table_range_is_unclassified() {
        assert!(classify_range("ZZ00", "ZZ99").is_none());
    }

    #[test]
    fn range_straddling_two_chapters_is_unclassified() {
        assert!(classify_range("1A00", "2A00").is_none());
    }

    #[test]
    fn filter_by_range_is_inclusive_of_both_bounds() {
        let records: Vec<Record> = ["1A00-Cholera", "1A40-Shigellosis", "1H0Z-Unspecified", "2A00-Glioma"]
            .iter()
            .map(|r| Record::parse(r))
            .collect();

        let matched = filter_by_range(&records, "1A00", "1H0Z");
        let codes: Vec<&str> = matched.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["1A00", "1A40", "1H0Z"]);
    }

    #[test]
    fn filter_by_range_is_purely_lexicographic() {
        // A 6-character code sorts inside the 4-character bounds.
        let records = [Record::parse("1A00AB-Extension style")];
        let matched = filter_by_range(&records, "1A00", "1H0Z");
        assert_eq!(matched.len(), 1);
    }
}
