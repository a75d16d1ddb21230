//! Some helper functions

use std::ops::Range;

/// Split a slice into maximal runs of consecutive items considered equivalent.
///
/// The returned ranges are contiguous, cover the whole slice and are never empty.
/// Items are only compared with their direct predecessor.
///
/// ```
/// # use quienny::tools::runs_by;
/// let slice = vec![1, 1, 2, 3, 3, 3];
/// let runs = runs_by(&slice, |a, b| a == b);
/// assert_eq!(runs, vec![0..2, 2..3, 3..6]);
/// ```
pub fn runs_by<T, F: Fn(&T, &T) -> bool>(slice: &[T], same: F) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start = 0;
    for idx in 1..slice.len() {
        if !same(&slice[idx - 1], &slice[idx]) {
            runs.push(start..idx);
            start = idx;
        }
    }
    if start < slice.len() {
        runs.push(start..slice.len());
    }
    runs
}

/// Write the truth table of all assignments of `width` variables, one per line, in increasing order.
///
/// If `skip_all_ones` is set, the last line (all variables set to 1) is omitted: the prime implicants
/// of the result are then all monomials with a single significant 0, a useful stress test.
///
/// Panics if `width` is 64 or more.
///
/// ```
/// # use quienny::tools::minterm_table;
/// assert_eq!(minterm_table(2, false), "00\n01\n10\n11\n");
/// assert_eq!(minterm_table(2, true), "00\n01\n10\n");
/// ```
pub fn minterm_table(width: usize, skip_all_ones: bool) -> String {
    assert!(width < 64, "too many variables for a truth table");
    let mut end = 1u64 << width;
    if skip_all_ones {
        end -= 1;
    }
    let mut table = String::with_capacity(end as usize * (width + 1));
    for w in 0..end {
        for i in 0..width {
            let bit = w & (1 << (width - i - 1)) != 0;
            table.push(if bit { '1' } else { '0' });
        }
        table.push('\n');
    }
    table
}

#[cfg(test)]
mod tests {
    use crate::tools::*;

    #[test]
    fn test_runs() {
        check_runs(vec![]);
        check_runs(vec![2]);
        check_runs(vec![123, 32]);
        check_runs(vec![4, 4, 4, 5, 7, 7]);
        check_runs(vec![1, 1, 1, 1]);
    }

    fn check_runs(v: Vec<usize>) {
        let runs = runs_by(&v, |a, b| a == b);
        let mut next = 0;
        for r in &runs {
            assert_eq!(r.start, next);
            assert!(!r.is_empty());
            v[r.clone()].iter().for_each(|a| assert_eq!(*a, v[r.start]));
            next = r.end;
        }
        assert_eq!(next, v.len());
        for w in runs.windows(2) {
            assert_ne!(v[w[0].start], v[w[1].start]);
        }
    }

    #[test]
    fn test_table() {
        assert_eq!(minterm_table(0, false), "\n");
        assert_eq!(minterm_table(0, true), "");
        assert_eq!(minterm_table(3, false).lines().count(), 8);
        assert_eq!(minterm_table(3, true).lines().last(), Some("110"));
    }
}
