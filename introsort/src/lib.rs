//! In-place introsort over any collection that can compare and swap by position.
//!
//! ```
//! let mut v = vec![5, 3, 4, 1, 2];
//! introsort::sort(&mut v);
//! assert_eq!(v, [1, 2, 3, 4, 5]);
//! ```
//!
//! Collections that aren't plain slices of `Ord` values implement [`Sortable`]:
//!
//! ```
//! use introsort::Sortable;
//!
//! struct Columns {
//!     keys: Vec<u32>,
//!     labels: Vec<&'static str>,
//! }
//!
//! impl Sortable for Columns {
//!     fn len(&self) -> usize {
//!         self.keys.len()
//!     }
//!
//!     fn less(&self, i: usize, j: usize) -> bool {
//!         self.keys[i] < self.keys[j]
//!     }
//!
//!     fn swap(&mut self, i: usize, j: usize) {
//!         self.keys.swap(i, j);
//!         self.labels.swap(i, j);
//!     }
//! }
//!
//! let mut cols = Columns { keys: vec![2, 0, 1], labels: vec!["c", "a", "b"] };
//! introsort::sort(&mut cols);
//! assert_eq!(cols.labels, ["a", "b", "c"]);
//! ```

#![deny(clippy::all)]
#![deny(unused_must_use)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub use counting::{Counting, SortStats};
pub use introsort::{is_sorted, sort, sort_by, sort_by_key};
pub use sortable::{Reverse, SortBy, Sortable};

mod counting;
mod introsort;
mod sortable;
