//! Selection sort
//!
//! In-place, O(n²) comparisons, at most n-1 swaps, O(1) extra memory.

/// Sort `items` in place using a strict "less than" predicate
///
/// For every position `i`, the inner scan keeps the leftmost minimum of
/// `i..n` because a candidate only replaces the current minimum when it is
/// strictly smaller. Equal keys are therefore never swapped past each other
/// within a single selection step, though the outer swaps can still reorder
/// equal elements that are not adjacent.
pub fn selection_sort_by<T, F>(items: &mut [T], mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = items.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        let mut imin = i;
        for j in i + 1..len {
            if less(&items[j], &items[imin]) {
                imin = j;
            }
        }
        if imin != i {
            items.swap(i, imin);
        }
    }
}

/// Selection sort by a key extracted from each element, ascending
pub fn selection_sort_by_key<T, K, F>(items: &mut [T], mut key: F)
where
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    selection_sort_by(items, |a, b| key(a) < key(b));
}
