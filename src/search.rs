//! Last-name substring search over sorted results.

use crate::model::RaceResult;

/// Filter results whose last name contains the term, case-insensitively.
///
/// The empty term is an explicit fast path returning every result; the
/// outcome would be the same either way (an empty needle matches anything),
/// but "no term means no filtering" is a contract here, not an accident.
/// Only the last name is matched, never the first.
pub fn filter<'a>(results: &'a [RaceResult], term: &str) -> Vec<&'a RaceResult> {
    if term.is_empty() {
        return results.iter().collect();
    }

    let needle = term.to_lowercase();
    results.iter().filter(|result| result.last_name.to_lowercase().contains(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::RaceTime;

    fn result(first_name: &str, last_name: &str) -> RaceResult {
        RaceResult {
            first_name: first_name.into(),
            last_name: last_name.into(),
            gender: "F".into(),
            division: "PRO".into(),
            nationality: "SUI".into(),
            total_time: RaceTime::from_hms(8, 45, 0),
            splits: Vec::new(),
        }
    }

    fn field() -> Vec<RaceResult> {
        vec![
            result("Daniela", "Ryf"),
            result("Anne", "Haug"),
            result("Laura", "Philipp"),
            result("Taylor", "Knibb"),
        ]
    }

    #[test]
    fn empty_term_returns_everything_in_order() {
        let results = field();
        let filtered = filter(&results, "");
        assert_eq!(filtered.len(), results.len());
        for (kept, original) in filtered.iter().zip(&results) {
            assert_eq!(*kept, original);
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let results = field();
        let lower = filter(&results, "ryf");
        let upper = filter(&results, "RYF");
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 1);
        assert_eq!(lower[0].last_name, "Ryf");
    }

    #[test]
    fn matches_substrings_of_the_last_name() {
        let results = field();
        let filtered = filter(&results, "au");
        let names: Vec<&str> = filtered.iter().map(|r| r.last_name.as_str()).collect();
        assert_eq!(names, vec!["Haug"]);
    }

    #[test]
    fn first_name_is_never_matched() {
        let results = field();
        // "Taylor" appears only as a first name.
        assert!(filter(&results, "taylor").is_empty());
    }

    #[test]
    fn no_match_yields_empty_subsequence() {
        let results = field();
        assert!(filter(&results, "zz-no-match").is_empty());
    }

    #[test]
    fn preserves_relative_order_of_matches() {
        let mut results = field();
        results.push(result("Lotte", "Wilms-Haug"));
        let filtered = filter(&results, "haug");
        let names: Vec<&str> = filtered.iter().map(|r| r.last_name.as_str()).collect();
        assert_eq!(names, vec!["Haug", "Wilms-Haug"]);
    }
}
