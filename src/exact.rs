use crate::cost::{evaluate_ordered, excess_cost};
use crate::mapping::{for_each_permutation, identity};
use crate::solution::BestResult;
use crate::utils::{factorial, num_partial_permutations};
use crate::{Error, Matrix, Result, Solution};
use tracing::debug;

/// How the exact solver walks the space of injective assignments
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Enumeration {
    /// Every permutation of the target vertices; the first n1 entries form the
    /// assignment. Visits each assignment (n2 - n1)! times.
    Permutations,
    /// Stop the recursion after n1 choices, visiting each assignment once
    #[default]
    PartialPermutations,
}

impl Enumeration {
    /// Number of candidates the solver will score for these sizes
    pub fn candidates(self, n1: usize, n2: usize) -> usize {
        match self {
            Enumeration::Permutations => factorial(n2),
            Enumeration::PartialPermutations => num_partial_permutations(n2, n1),
        }
    }
}

pub(crate) fn check_sizes(pattern: &Matrix, target: &Matrix) -> Result<()> {
    if pattern.size() > target.size() {
        return Err(Error::PatternTooLarge {
            pattern: pattern.size(),
            target: target.size(),
        });
    }
    Ok(())
}

/// Find the globally cheapest embedding of `pattern` into `target`
pub fn solve_exact(pattern: &Matrix, target: &Matrix) -> Result<Solution> {
    solve_exact_with(pattern, target, Enumeration::default())
}

/// Exhaustive search over injective assignments using the given enumeration
pub fn solve_exact_with(
    pattern: &Matrix,
    target: &Matrix,
    enumeration: Enumeration,
) -> Result<Solution> {
    check_sizes(pattern, target)?;

    let n1 = pattern.size();
    let n2 = target.size();
    let depth = match enumeration {
        Enumeration::Permutations => n2,
        Enumeration::PartialPermutations => n1,
    };
    debug!(
        n1,
        n2,
        ?enumeration,
        candidates = enumeration.candidates(n1, n2),
        "starting exact search"
    );

    let order = identity(n1);
    let mut slots = identity(n2);
    let mut best = BestResult::new();

    for_each_permutation(&mut slots, depth, &mut |perm: &[usize]| {
        let assigned = &perm[..n1];
        let cost = excess_cost(pattern, target, &order, assigned);
        best.offer(cost, || {
            (
                evaluate_ordered(pattern, target, &order, assigned),
                assigned.to_vec(),
            )
        });
    });

    // the recursion visits at least once even for empty graphs
    best.into_solution().ok_or(Error::NoCandidate("exact"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::evaluate;

    fn m(rows: Vec<Vec<usize>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_finds_zero_cost_embedding() {
        let g = m(vec![vec![0, 1], vec![1, 0]]);
        let h = m(vec![vec![0, 2, 0], vec![2, 0, 0], vec![0, 0, 0]]);
        let solution = solve_exact(&g, &h).unwrap();
        assert_eq!(solution.cost, 0);
        assert_eq!(solution.assignment, vec![0, 1]);
        assert_eq!(solution.delta, Matrix::new(3));
    }

    #[test]
    fn test_identity_is_only_candidate_for_equal_sizes() {
        let g = m(vec![vec![0, 5], vec![0, 0]]);
        let h = m(vec![vec![0, 1], vec![0, 0]]);
        let solution = solve_exact(&g, &h).unwrap();
        // the swapped assignment maps the 5 onto H[1][0] = 0, costing more
        assert_eq!(solution.cost, 4);
        assert_eq!(solution.delta, m(vec![vec![0, 4], vec![0, 0]]));
    }

    #[test]
    fn test_enumerations_agree() {
        let g = m(vec![vec![0, 3, 1], vec![2, 0, 4], vec![0, 1, 0]]);
        let h = m(vec![
            vec![0, 1, 0, 2],
            vec![3, 0, 1, 0],
            vec![0, 2, 0, 1],
            vec![1, 0, 4, 0],
        ]);
        let full = solve_exact_with(&g, &h, Enumeration::Permutations).unwrap();
        let partial = solve_exact_with(&g, &h, Enumeration::PartialPermutations).unwrap();
        assert_eq!(full.cost, partial.cost);
        assert_eq!(full.evaluated, 24);
        assert_eq!(partial.evaluated, 24); // P(4, 3) = 4! here
        assert_eq!(evaluate(&g, &h, &partial.assignment).cost, partial.cost);
    }

    #[test]
    fn test_rejects_oversized_pattern() {
        let err = solve_exact(&Matrix::new(3), &Matrix::new(2)).unwrap_err();
        assert!(matches!(
            err,
            Error::PatternTooLarge {
                pattern: 3,
                target: 2
            }
        ));
    }

    #[test]
    fn test_empty_pattern() {
        let solution = solve_exact(&Matrix::new(0), &Matrix::new(3)).unwrap();
        assert_eq!(solution.cost, 0);
        assert_eq!(solution.evaluated, 1);
        assert!(solution.assignment.is_empty());
    }
}
