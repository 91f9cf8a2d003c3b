use std::fmt::Display;

use introsort::Sortable;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.age)
    }
}

/// Orders people youngest first
pub struct ByAge<'a>(pub &'a mut [Person]);

impl Sortable for ByAge<'_> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.0[i].age < self.0[j].age
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }
}

/// Orders people by name
pub struct ByName<'a>(pub &'a mut [Person]);

impl Sortable for ByName<'_> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.0[i].name < self.0[j].name
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }
}
