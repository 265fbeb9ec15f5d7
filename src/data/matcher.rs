use std::collections::HashMap;

use super::model::Record;

// ---------------------------------------------------------------------------
// Prefix analysis
// ---------------------------------------------------------------------------

/// One distinct `(code, description)` pair matching the query, with the count
/// of its code across the whole dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupCount {
    pub code: String,
    pub description: String,
    /// How many records carry this code.
    pub count: usize,
    /// `count` as a percentage of the dataset, rounded to 2 decimals.
    pub percentage: f64,
}

/// Result of a prefix query over a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixReport {
    /// The query as it was matched (already trimmed and upper-cased).
    pub query: String,
    pub total_records: usize,
    /// Records whose code starts with the query.
    pub starts_with_count: usize,
    /// Records whose code equals the query exactly.
    pub exact_count: usize,
    /// Distinct matching `(code, description)` pairs, first-encounter order.
    pub matching_groups: Vec<GroupCount>,
}

/// Count records whose code starts with `query`.
///
/// The caller trims and upper-cases the query; an empty query is a prefix of
/// every code and therefore matches the whole dataset.
pub fn count_by_prefix(records: &[Record], query: &str) -> PrefixReport {
    let total_records = records.len();
    let counts = code_counts(records);

    let mut starts_with_count = 0;
    let mut exact_count = 0;
    let mut matching_groups: Vec<GroupCount> = Vec::new();

    for rec in records {
        if !rec.code.starts_with(query) {
            continue;
        }
        starts_with_count += 1;
        if rec.code == query {
            exact_count += 1;
        }

        let already_seen = matching_groups
            .iter()
            .any(|g| g.code == rec.code && g.description == rec.description);
        if !already_seen {
            let count = counts
                .iter()
                .find(|(code, _)| *code == rec.code)
                .map_or(0, |(_, n)| *n);
            matching_groups.push(GroupCount {
                code: rec.code.clone(),
                description: rec.description.clone(),
                count,
                percentage: percentage(count, total_records),
            });
        }
    }

    PrefixReport {
        query: query.to_string(),
        total_records,
        starts_with_count,
        exact_count,
        matching_groups,
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = count as f64 / total as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Frequency table
// ---------------------------------------------------------------------------

/// A distinct code and how often it appears.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeCount {
    pub code: String,
    pub count: usize,
}

/// The `n` most frequent distinct codes, count descending.
///
/// Ties keep first-encounter order: the sort is stable over a list built in
/// dataset order.
pub fn top_n(records: &[Record], n: usize) -> Vec<CodeCount> {
    let mut counts = code_counts(records);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(n)
        .map(|(code, count)| CodeCount { code, count })
        .collect()
}

/// Per-code counts in first-encounter order.
fn code_counts(records: &[Record]) -> Vec<(String, usize)> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for rec in records {
        match index.get(rec.code.as_str()) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(rec.code.as_str(), order.len());
                order.push((rec.code.clone(), 1));
            }
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn records(raws: &[&str]) -> Vec<Record> {
        raws.iter().map(|r| Record::parse(r)).collect()
    }

    #[test]
    fn prefix_query_counts_and_groups() {
        let recs = records(&["A10-foo", "A10-foo", "A20-bar"]);
        let report = count_by_prefix(&recs, "A1");

        assert_eq!(report.total_records, 3);
        assert_eq!(report.starts_with_count, 2);
        assert_eq!(report.exact_count, 0);
        assert_eq!(report.matching_groups.len(), 1);

        let g = &report.matching_groups[0];
        assert_eq!(g.code, "A10");
        assert_eq!(g.description, "foo");
        assert_eq!(g.count, 2);
        assert_eq!(g.percentage, 66.67);
    }

    #[test]
    fn exact_matches_are_a_subset_of_prefix_matches() {
        let recs = records(&["A10-foo", "A10-foo", "A1-short", "A20-bar"]);
        let report = count_by_prefix(&recs, "A1");
        assert_eq!(report.exact_count, 1);
        assert!(report.starts_with_count >= report.exact_count);
    }

    #[test]
    fn empty_query_matches_every_record() {
        let recs = records(&["A10-foo", "B20-bar", "C30-baz"]);
        let report = count_by_prefix(&recs, "");
        assert_eq!(report.starts_with_count, report.total_records);
        assert_eq!(report.matching_groups.len(), 3);
    }

    #[test]
    fn same_code_different_description_groups_separately() {
        let recs = records(&["A10-foo", "A10-bar"]);
        let report = count_by_prefix(&recs, "A10");
        assert_eq!(report.matching_groups.len(), 2);
        // Both groups count the code, not the pair.
        assert_eq!(report.matching_groups[0].count, 2);
        assert_eq!(report.matching_groups[1].count, 2);
    }

    #[test]
    fn top_n_sorts_by_count_descending_with_stable_ties() {
        let recs = records(&[
            "B20-b", "A10-a", "A10-a", "C30-c", "B20-b", "A10-a", "C30-c",
        ]);
        let top = top_n(&recs, 10);
        let pairs: Vec<(&str, usize)> =
            top.iter().map(|c| (c.code.as_str(), c.count)).collect();
        // B20 and C30 tie at 2; B20 was seen first.
        assert_eq!(pairs, vec![("A10", 3), ("B20", 2), ("C30", 2)]);
        assert!(top.windows(2).all(|w| w[0].count >= w[1].count));
    }

    #[test]
    fn top_n_truncates_to_n() {
        let recs = records(&["A-1", "B-2", "C-3", "D-4"]);
        assert_eq!(top_n(&recs, 2).len(), 2);
    }
}
