use std::fmt::Debug;

/// Predicate deciding whether a number passes the pipeline
pub trait NumberFilter: Debug {
    fn keep(&self, number: i64) -> bool;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvenFilter;

impl NumberFilter for EvenFilter {
    fn keep(&self, number: i64) -> bool {
        // `%` keeps the dividend's sign, so negative evens give 0 as well
        number % 2 == 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OddFilter;

impl NumberFilter for OddFilter {
    fn keep(&self, number: i64) -> bool {
        number % 2 != 0
    }
}

/// Keeps numbers strictly above a threshold fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreaterThanFilter {
    threshold: i64,
}

impl GreaterThanFilter {
    pub fn new(threshold: i64) -> Self {
        Self { threshold }
    }
}

impl NumberFilter for GreaterThanFilter {
    fn keep(&self, number: i64) -> bool {
        number > self.threshold
    }
}
