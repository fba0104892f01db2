//! Stable merge sort driven only by a strict "less" predicate.
//!
//! The predicate is never asked to be a total order. Incomparable values
//! (NaN keys, inconsistent closures) yield some permutation of the input
//! instead of a panic, and equal elements keep their input order.

// Runs at or below this length are insertion-sorted.
const SMALL_RUN: usize = 12;

pub(crate) fn stable_sort<T, F>(items: Vec<T>, less: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    if items.len() <= SMALL_RUN {
        return insertion_sort(items, less);
    }
    let mut left = items;
    let right = left.split_off(left.len() / 2);
    merge(stable_sort(left, less), stable_sort(right, less), less)
}

fn insertion_sort<T, F>(mut items: Vec<T>, less: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && less(&items[j], &items[j - 1]) {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
    items
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, less: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            // Ties go left so equal elements stay in input order.
            (Some(l), Some(r)) => less(r, l),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        out.extend(if take_right { right.next() } else { left.next() });
    }
    out
}
