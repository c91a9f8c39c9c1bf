//! Descending merge sort.
//!
//! Written out as an explicit divide-and-conquer so the tie-break is part
//! of the contract: when two keys compare equal the element from the left
//! half is emitted first. That decides which task comes first when two
//! tasks have the same urgency.

/// Sort `items` by `key`, highest first.
///
/// Splits at `len / 2`, sorts each half recursively and merges, taking the
/// left element whenever `key(left) >= key(right)`. Keys that do not compare
/// (NaN) lose to the right side. O(n log n) comparisons, O(n) extra space
/// per merge level.
pub fn rank_descending<T, K, F>(items: Vec<T>, key: F) -> Vec<T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    sort(items, &key)
}

fn sort<T, K, F>(mut items: Vec<T>, key: &F) -> Vec<T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = sort(items, key);
    let right = sort(right, key);
    merge(left, right, key)
}

fn merge<T, K, F>(left: Vec<T>, right: Vec<T>, key: &F) -> Vec<T>
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => key(l) >= key(r),
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    // One side is exhausted; the other is already in order.
    merged.extend(left);
    merged.extend(right);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_and_single() {
        let empty: Vec<i32> = rank_descending(Vec::new(), |x| *x);
        assert!(empty.is_empty());
        assert_eq!(rank_descending(vec![7], |x| *x), vec![7]);
    }

    #[test]
    fn sorts_descending() {
        let ranked = rank_descending(vec![3, 9, 1, 4, 1, 5, 9, 2, 6], |x| *x);
        assert_eq!(ranked, vec![9, 9, 6, 5, 4, 3, 2, 1, 1]);
    }

    #[test]
    fn ties_keep_left_element_first() {
        let items = vec![("a", 1.0), ("b", 5.0), ("c", 1.0), ("d", 5.0)];
        let ranked = rank_descending(items, |(_, k)| *k);
        let names: Vec<_> = ranked.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn negative_keys_rank_last() {
        let ranked = rank_descending(vec![-1.0, 20.0, -1.0, 0.0], |x: &f64| *x);
        assert_eq!(ranked, vec![20.0, 0.0, -1.0, -1.0]);
    }

    #[test]
    fn key_is_a_projection() {
        let words = vec!["kiwi", "banana", "fig", "cherry"];
        let ranked = rank_descending(words, |w| w.len());
        assert_eq!(ranked, vec!["banana", "cherry", "kiwi", "fig"]);
    }

    proptest! {
        #[test]
        fn matches_stable_descending_sort(items in prop::collection::vec((0i32..20, any::<u16>()), 0..64)) {
            let mut expected = items.clone();
            expected.sort_by(|a, b| b.0.cmp(&a.0));
            let ranked = rank_descending(items, |(k, _)| *k);
            prop_assert_eq!(ranked, expected);
        }

        #[test]
        fn idempotent_on_ranked_input(items in prop::collection::vec(any::<i64>(), 0..64)) {
            let once = rank_descending(items, |x| *x);
            let twice = rank_descending(once.clone(), |x| *x);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn reversed_distinct_keys_restore_order(set in prop::collection::btree_set(any::<i32>(), 0..64)) {
            let descending: Vec<i32> = set.into_iter().rev().collect();
            let mut reversed = descending.clone();
            reversed.reverse();
            prop_assert_eq!(rank_descending(reversed, |x| *x), descending);
        }
    }
}
