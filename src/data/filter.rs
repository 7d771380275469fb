//! Substring filtering over the row store.
//!
//! The filter itself is a pure function; the trailing-edge debounce that
//! decides *when* it runs belongs to the customers panel, not to this module.

use super::Record;

/// Return the indices of every record whose `search_text` contains `query`
/// as a contiguous substring, in store order.
///
/// Matching is case-sensitive with no normalization or tokenization. An
/// empty query is the identity: every index, in order.
pub fn filter_indices(rows: &[Record], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..rows.len()).collect();
    }

    rows.iter()
        .enumerate()
        .filter(|(_, record)| record.search_text.contains(query))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<Record> {
        vec![
            Record::new(1, "Customer 1", "email1@user.com", 24),
            Record::new(2, "Customer 2", "email2@user.com", 28),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let rows = sample_rows();
        assert_eq!(filter_indices(&rows, ""), vec![0, 1]);
    }

    #[test]
    fn test_matches_on_email() {
        let rows = sample_rows();
        assert_eq!(filter_indices(&rows, "email2"), vec![1]);
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let rows = sample_rows();
        assert_eq!(filter_indices(&rows, "customer"), Vec::<usize>::new());
        assert_eq!(filter_indices(&rows, "Customer"), vec![0, 1]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let rows = sample_rows();
        assert!(filter_indices(&rows, "zzz").is_empty());
    }

    #[test]
    fn test_result_indices_are_sound_and_ordered() {
        let rows: Vec<Record> = (1..=50)
            .map(|i| Record::new(i, format!("Customer {}", i % 3), format!("email{}@user.com", i), 20))
            .collect();
        let query = "Customer 1";
        let hits = filter_indices(&rows, query);

        // Every returned index matches, in strictly increasing order.
        for pair in hits.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for &i in &hits {
            assert!(rows[i].search_text.contains(query));
        }
        // Every excluded index does not match.
        for (i, record) in rows.iter().enumerate() {
            if !hits.contains(&i) {
                assert!(!record.search_text.contains(query));
            }
        }
    }

    #[test]
    fn test_matches_across_field_delimiter() {
        // search_text is "2|Customer 2|...", so a query spanning the
        // delimiter matches too.
        let rows = sample_rows();
        assert_eq!(filter_indices(&rows, "2|Customer"), vec![1]);
    }
}
