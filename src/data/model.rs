use serde::Serialize;

// ---------------------------------------------------------------------------
// Record – one diagnosis row
// ---------------------------------------------------------------------------

/// A single diagnosis entry (one row of the source table).
///
/// Serializes with the original column names, so a `csv::Writer` produces the
/// `diagnosis,code,description` header used by the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Original cell text, e.g. `8A68.Z-Thyrotoxicosis, unspecified`.
    #[serde(rename = "diagnosis")]
    pub raw: String,
    /// Code part: everything before the first hyphen, trimmed and upper-cased.
    pub code: String,
    /// Description part: everything after the first hyphen, verbatim.
    /// Empty when the raw string contains no hyphen.
    pub description: String,
}

impl Record {
    /// Split a raw diagnosis string on the FIRST hyphen only.
    ///
    /// Later hyphens belong to the description and are preserved:
    /// `"BA00-Hypertension - essential"` → code `BA00`,
    /// description `Hypertension - essential`.
    pub fn parse(raw: &str) -> Self {
        let (code, description) = match raw.split_once('-') {
            Some((code, rest)) => (code, rest),
            None => (raw, ""),
        };
        Record {
            raw: raw.to_string(),
            code: code.trim().to_uppercase(),
            description: description.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded file
// ---------------------------------------------------------------------------

/// The full parsed dataset. Loaded once per analysis request, immutable after.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All records, in file order.
    pub records: Vec<Record>,
    /// Name of the file the records came from (for display only).
    pub file_name: String,
}

impl Dataset {
    /// Parse each raw diagnosis string into a [`Record`].
    pub fn from_raw_lines<I, S>(file_name: &str, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Dataset {
            records: lines.into_iter().map(|l| Record::parse(l.as_ref())).collect(),
            file_name: file_name.to_string(),
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_hyphen_only() {
        let r = Record::parse("BA00-Hypertension - essential");
        assert_eq!(r.code, "BA00");
        assert_eq!(r.description, "Hypertension - essential");
        assert_eq!(r.raw, "BA00-Hypertension - essential");
    }

    #[test]
    fn no_hyphen_gives_empty_description() {
        let r = Record::parse("8A68.Z");
        assert_eq!(r.code, "8A68.Z");
        assert_eq!(r.description, "");
    }

    #[test]
    fn code_is_trimmed_and_uppercased() {
        let r = Record::parse("  8a68.z -Thyrotoxicosis");
        assert_eq!(r.code, "8A68.Z");
        assert_eq!(r.description, "Thyrotoxicosis");
    }

    #[test]
    fn resplitting_a_code_is_idempotent() {
        let first = Record::parse("1A00-Cholera");
        let again = Record::parse(&first.code);
        assert_eq!(again.code, first.code);
        assert_eq!(again.description, "");
    }
}
