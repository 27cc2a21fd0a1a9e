//! Ordering and truncation of grouped rows.

use std::cmp::Ordering;

use super::row::StatRow;

/// Most frequent first.
pub fn compare_by_occurrences(a: &StatRow, b: &StatRow) -> Ordering {
    b.occurrences().cmp(&a.occurrences())
}

/// Sort rows by occurrence count, descending.
///
/// The sort is stable: rows with equal counts keep the order they came in,
/// which for an aggregation pass is the order their key was first seen.
pub fn rank_by_occurrences(rows: &mut [StatRow]) {
    rows.sort_by(compare_by_occurrences);
}

/// Rank rows and keep at most `cap` of them. Shorter inputs are returned whole.
pub fn top_ranked(mut rows: Vec<StatRow>, cap: usize) -> Vec<StatRow> {
    rank_by_occurrences(&mut rows);
    rows.truncate(cap);
    rows
}

/// Check if a slice is already sorted according to a comparison function
pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    items
        .windows(2)
        .all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}
