use tracing::{debug, trace};

use crate::{SortBy, Sortable};

/// Ranges shorter than this are finished with insertion sort.
const INSERTION_THRESHOLD: usize = 12;

/// Sorts `data` in place.
///
/// Runs in O(n log n) time in the worst case and uses O(log n) stack.
/// The sort is not stable.
pub fn sort<S: Sortable + ?Sized>(data: &mut S) {
    let n = data.len();
    if n < 2 {
        return;
    }

    let max_depth = depth_limit(n);
    trace!(len = n, max_depth, "introsort");

    quicksort(data, 0, n, max_depth);
}

/// Sorts a slice using `less` as the ordering.
pub fn sort_by<T, F>(data: &mut [T], less: F)
where
    F: Fn(&T, &T) -> bool,
{
    sort(&mut SortBy::new(data, less));
}

/// Sorts a slice by the key extracted with `key`.
pub fn sort_by_key<T, K, F>(data: &mut [T], key: F)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    sort_by(data, |a, b| key(a) < key(b));
}

pub fn is_sorted<S: Sortable + ?Sized>(data: &S) -> bool {
    (1..data.len()).all(|i| !data.less(i, i - 1))
}

/// Twice the number of halvings needed to reduce `n` to one, i.e. `2 * ceil(log2(n))`.
fn depth_limit(n: usize) -> usize {
    debug_assert!(n >= 2);
    2 * (usize::BITS - (n - 1).leading_zeros()) as usize
}

fn quicksort<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize, max_depth: usize) {
    if b - a < INSERTION_THRESHOLD {
        insertion_sort(data, a, b);
        return;
    }

    if max_depth == 0 {
        debug!(len = b - a, "depth budget exhausted, falling back to heapsort");
        heapsort(data, a, b);
        return;
    }

    let pivot = partition(data, a, b);
    quicksort(data, a, pivot, max_depth - 1);
    quicksort(data, pivot + 1, b, max_depth - 1);
}

/// Partitions `[lo, hi)` around a median-of-three pivot and returns the pivot's
/// final position. Nothing before it is greater than the pivot and nothing
/// after it is less; equal elements may end up on either side.
fn partition<S: Sortable + ?Sized>(data: &mut S, lo: usize, hi: usize) -> usize {
    debug_assert!(hi - lo >= INSERTION_THRESHOLD);
    debug_assert!(hi <= data.len());

    // order lo <= mid <= hi - 1
    let mid = lo + (hi - lo) / 2;
    if data.less(hi - 1, lo) {
        data.swap(hi - 1, lo);
    }
    if data.less(mid, lo) {
        data.swap(mid, lo);
    }
    if data.less(hi - 1, mid) {
        data.swap(hi - 1, mid);
    }

    let pivot = hi - 2;
    data.swap(mid, pivot);

    // lo and the pivot act as sentinels; the bounds only matter when the
    // comparator is inconsistent
    let mut i = lo;
    let mut j = pivot;
    loop {
        i += 1;
        while i < pivot && data.less(i, pivot) {
            i += 1;
        }

        j -= 1;
        while j > lo && data.less(pivot, j) {
            j -= 1;
        }

        if i >= j {
            break;
        }
        data.swap(i, j);
    }
    data.swap(i, pivot);

    i
}

fn insertion_sort<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize) {
    for i in a + 1..b {
        let mut j = i;
        while j > a && data.less(j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

fn heapsort<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize) {
    let n = b - a;
    for i in (0..=n / 2).rev() {
        sift_down(data, i, n, a);
    }
    for i in (1..n).rev() {
        data.swap(a, a + i);
        sift_down(data, 0, i, a);
    }
}

/// Restores the max-heap property below `root` for a heap of `heap_size`
/// elements stored from `offset`.
fn sift_down<S: Sortable + ?Sized>(data: &mut S, mut root: usize, heap_size: usize, offset: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= heap_size {
            return;
        }
        if child + 1 < heap_size && data.less(offset + child, offset + child + 1) {
            child += 1;
        }

        if !data.less(offset + root, offset + child) {
            return;
        }
        data.swap(offset + root, offset + child);
        root = child;
    }
}
