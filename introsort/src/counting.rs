use std::cell::Cell;

use crate::Sortable;

/// Work done by a sort, as seen through [`Counting`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortStats {
    pub comparisons: u64,
    pub swaps: u64,
}

/// Wraps a [`Sortable`] and counts every comparison and swap made on it.
#[derive(Debug)]
pub struct Counting<S> {
    inner: S,
    comparisons: Cell<u64>,
    swaps: u64,
}

impl<S: Sortable> Counting<S> {
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            comparisons: Cell::new(0),
            swaps: 0,
        }
    }

    pub fn stats(&self) -> SortStats {
        SortStats {
            comparisons: self.comparisons.get(),
            swaps: self.swaps,
        }
    }

    pub const fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sortable> Sortable for Counting<S> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.comparisons.set(self.comparisons.get() + 1);
        self.inner.less(i, j)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.swaps += 1;
        self.inner.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_operations() {
        let mut counted = Counting::new(vec![2, 1]);

        assert!(counted.less(1, 0));
        assert!(!counted.less(0, 1));
        counted.swap(0, 1);

        assert_eq!(
            counted.stats(),
            SortStats {
                comparisons: 2,
                swaps: 1
            }
        );
        assert_eq!(counted.into_inner(), vec![1, 2]);
    }
}
