//! Monotone searches over index ranges.
//!
//! The predicates here measure text, so the number of calls and the length
//! of what each call measures both matter.

/// Largest `n` in `lo..=hi` for which `pred(n)` holds, assuming `pred` is
/// true up to some point and false after it. Returns `lo` when nothing
/// above it qualifies.
pub(crate) fn last_satisfying(mut lo: usize, mut hi: usize, pred: impl Fn(usize) -> bool) -> usize {
    while lo < hi {
        let mid = lo + (hi - lo).div_ceil(2);
        if pred(mid) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

/// Same result as [`last_satisfying`], but tries `lo + 1`, `lo + 3`,
/// `lo + 7`, ... before bisecting the last window. Never looks further
/// than about twice the answer's distance from `lo`, so the cost tracks
/// the answer rather than the size of the range.
pub(crate) fn gallop_last_satisfying(lo: usize, hi: usize, pred: impl Fn(usize) -> bool) -> usize {
    let mut good = lo;
    let mut step = 1usize;

    while good < hi {
        let candidate = good.saturating_add(step).min(hi);
        if !pred(candidate) {
            return last_satisfying(good, candidate - 1, &pred);
        }
        good = candidate;
        step = step.saturating_mul(2);
    }
    good
}

/// Smallest `n` in `lo..=hi` for which `pred(n)` holds, assuming `pred` is
/// false up to some point and true after it. `pred(hi)` is taken as true.
pub(crate) fn first_satisfying(mut lo: usize, mut hi: usize, pred: impl Fn(usize) -> bool) -> usize {
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if pred(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_last_satisfying() {
        assert_eq!(last_satisfying(0, 10, |n| n <= 7), 7);
        assert_eq!(last_satisfying(0, 10, |n| n <= 10), 10);
        assert_eq!(last_satisfying(0, 10, |_| false), 0);
        assert_eq!(last_satisfying(3, 3, |_| true), 3);
    }

    #[test]
    fn test_gallop_matches_bisection() {
        for hi in 0..40 {
            for answer in 0..=hi {
                let pred = |n: usize| n <= answer;
                assert_eq!(gallop_last_satisfying(0, hi, pred), answer, "hi={hi}");
                assert_eq!(gallop_last_satisfying(0, hi, pred), last_satisfying(0, hi, pred));
            }
        }
        assert_eq!(gallop_last_satisfying(5, 5, |_| false), 5);
    }

    #[test]
    fn test_gallop_stays_near_the_answer() {
        let furthest = Cell::new(0);
        let found = gallop_last_satisfying(0, 1_000_000, |n| {
            furthest.set(furthest.get().max(n));
            n <= 10
        });

        assert_eq!(found, 10);
        assert!(furthest.get() <= 21, "looked as far as {}", furthest.get());
    }

    #[test]
    fn test_first_satisfying() {
        assert_eq!(first_satisfying(0, 10, |n| n >= 4), 4);
        assert_eq!(first_satisfying(0, 10, |_| true), 0);
        assert_eq!(first_satisfying(0, 10, |n| n == 10), 10);
        assert_eq!(first_satisfying(6, 6, |_| false), 6);
    }
}
