use crate::cost::Evaluation;
use crate::{Assignment, Matrix};

/// Best embedding found by a solver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Minimal total excess found
    pub cost: usize,
    /// Delta matrix of the retained assignment (target-sized)
    pub delta: Matrix,
    /// Retained assignment: pattern vertex -> target vertex
    pub assignment: Assignment,
    /// Number of assignments scored while searching
    pub evaluated: u64,
}

/// Running minimum over evaluated assignments.
///
/// Holds nothing until the first candidate is offered. A candidate replaces the
/// held one only when its cost is strictly lower, so among equal-cost
/// assignments the first one offered is kept.
#[derive(Debug, Default)]
pub struct BestResult {
    best: Option<Solution>,
    evaluated: u64,
}

impl BestResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current minimal cost, if anything has been evaluated
    pub fn cost(&self) -> Option<usize> {
        self.best.as_ref().map(|b| b.cost)
    }

    pub fn evaluated(&self) -> u64 {
        self.evaluated
    }

    /// Whether a candidate of this cost would replace the held one
    pub fn improves(&self, cost: usize) -> bool {
        self.cost().map_or(true, |best| cost < best)
    }

    /// Count one evaluated candidate of the given cost. The delta and assignment
    /// are only built when the candidate is retained.
    ///
    /// Returns true when the candidate became the new best.
    pub fn offer<F>(&mut self, cost: usize, build: F) -> bool
    where
        F: FnOnce() -> (Evaluation, Assignment),
    {
        self.evaluated += 1;
        if !self.improves(cost) {
            return false;
        }

        let (evaluation, assignment) = build();
        debug_assert_eq!(evaluation.cost, cost);
        self.best = Some(Solution {
            cost: evaluation.cost,
            delta: evaluation.delta,
            assignment,
            evaluated: 0,
        });
        true
    }

    /// Fold in the result of another search, keeping the strictly better one
    pub fn absorb(&mut self, other: Solution) {
        self.evaluated += other.evaluated;
        if self.improves(other.cost) {
            self.best = Some(other);
        }
    }

    /// Finish the search. None if no candidate was ever offered.
    pub fn into_solution(self) -> Option<Solution> {
        let evaluated = self.evaluated;
        self.best.map(|best| Solution { evaluated, ..best })
    }
}
