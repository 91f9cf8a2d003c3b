/// A collection that can be sorted in place by position.
///
/// Implementors expose a fixed number of elements addressed by `0..len()`,
/// an ordering between two positions, and an exchange of two positions.
/// Nothing else about the element type is needed.
pub trait Sortable {
    /// Number of elements. Must not change while a sort is running.
    fn len(&self) -> usize;

    /// Whether the element at `i` must come before the element at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Ord> Sortable for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }
}

impl<T: Ord> Sortable for Vec<T> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }
}

impl<S: Sortable + ?Sized> Sortable for &mut S {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        (**self).less(i, j)
    }

    fn swap(&mut self, i: usize, j: usize) {
        (**self).swap(i, j);
    }
}

/// Orders a slice with a caller supplied `less` closure.
pub struct SortBy<'a, T, F> {
    data: &'a mut [T],
    less: F,
}

impl<'a, T, F> SortBy<'a, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub const fn new(data: &'a mut [T], less: F) -> Self {
        Self { data, less }
    }
}

impl<T, F> Sortable for SortBy<'_, T, F>
where
    F: Fn(&T, &T) -> bool,
{
    fn len(&self) -> usize {
        self.data.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        (self.less)(&self.data[i], &self.data[j])
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
    }
}

/// Inverts the ordering of the wrapped collection.
#[derive(Debug)]
pub struct Reverse<S>(pub S);

impl<S: Sortable> Sortable for Reverse<S> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.0.less(j, i)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }
}
