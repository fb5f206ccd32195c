//! Stride-window approximation.
//!
//! Instead of every injective assignment, only placements that put the pattern
//! vertices on an evenly spaced run of target vertices are scored: pattern
//! position `k` goes to target vertex `offset + k * (stride + 1)`. Each window is
//! tried with the pattern in its base order and in mirrored order. This is
//! O((n2 - n1)^2) placements per sweep instead of n2! permutations, and since
//! every window is an injective assignment the result is never below the exact
//! optimum.

use crate::cost::{evaluate_ordered, excess_cost};
use crate::exact::check_sizes;
use crate::mapping::{identity, is_permutation, mirrored};
use crate::solution::BestResult;
use crate::{Assignment, Error, Matrix, Result, Solution};
use itertools::Itertools;
use tracing::debug;

/// Evenly spaced run of target vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Target vertex receiving pattern position 0
    pub offset: usize,
    /// Number of target vertices skipped between consecutive positions
    pub stride: usize,
}

impl Window {
    /// Target vertex of pattern position `k`
    #[inline]
    pub fn slot(&self, k: usize) -> usize {
        self.offset + k * (self.stride + 1)
    }

    pub fn fill(&self, slots: &mut [usize]) {
        for (k, slot) in slots.iter_mut().enumerate() {
            *slot = self.slot(k);
        }
    }
}

/// Largest stride for which an n1-vertex window still fits in n2 vertices
pub fn max_stride(n1: usize, n2: usize) -> usize {
    if n1 <= 1 || n2 < n1 {
        return 0;
    }
    (n2 - n1) / (n1 - 1)
}

/// All windows, by increasing stride and then increasing offset
pub fn windows(n1: usize, n2: usize) -> impl Iterator<Item = Window> {
    (0..=max_stride(n1, n2)).flat_map(move |stride| {
        let last_offset = if n1 == 0 {
            0
        } else {
            // position n1 - 1 must land on a vertex < n2
            n2.saturating_sub(1).saturating_sub((n1 - 1) * (stride + 1))
        };
        (0..=last_offset).map(move |offset| Window { offset, stride })
    })
}

/// Build pattern vertex -> target vertex from a pattern order and its window slots
fn assignment_from(order: &[usize], slots: &[usize]) -> Assignment {
    let mut assignment = vec![0; order.len()];
    for (&vertex, &slot) in order.iter().zip(slots) {
        assignment[vertex] = slot;
    }
    assignment
}

/// Score every window with the pattern read in `order`
fn sweep(pattern: &Matrix, target: &Matrix, order: &[usize], best: &mut BestResult) {
    let mut slots = vec![0; order.len()];

    for window in windows(order.len(), target.size()) {
        window.fill(&mut slots);
        let cost = excess_cost(pattern, target, order, &slots);
        best.offer(cost, || {
            (
                evaluate_ordered(pattern, target, order, &slots),
                assignment_from(order, &slots),
            )
        });
    }
}

/// Cheapest stride-window embedding of `pattern` into `target`.
///
/// `base_perm` reorders the pattern vertices for the forward sweep (identity
/// when absent); the mirrored sweep always reads the pattern back to front.
pub fn solve_approx(
    pattern: &Matrix,
    target: &Matrix,
    base_perm: Option<&[usize]>,
) -> Result<Solution> {
    check_sizes(pattern, target)?;

    let n1 = pattern.size();
    let forward = match base_perm {
        Some(perm) if !is_permutation(perm, n1) => {
            return Err(Error::InvalidPermutation(format!(
                "{:?} is not a permutation of 0..{}",
                perm, n1
            )));
        }
        Some(perm) => perm.to_vec(),
        None => identity(n1),
    };

    let mut best = BestResult::new();
    sweep(pattern, target, &forward, &mut best);
    sweep(pattern, target, &mirrored(n1), &mut best);

    best.into_solution().ok_or(Error::NoCandidate("approximate"))
}

/// Run [`solve_approx`] once per ordering of the first `perm_coeff` pattern
/// vertices (the rest keep their place) and keep the cheapest result.
///
/// Orderings are tried lexicographically starting from the identity, so with
/// ties the identity result wins. `perm_coeff` of 0 or 1 is a single plain run.
pub fn solve_approx_permuted(
    pattern: &Matrix,
    target: &Matrix,
    perm_coeff: usize,
) -> Result<Solution> {
    let n1 = pattern.size();
    let head = perm_coeff.min(n1);
    if head <= 1 {
        return solve_approx(pattern, target, None);
    }

    let mut best = BestResult::new();
    for prefix in (0..head).permutations(head) {
        let base: Vec<usize> = prefix.into_iter().chain(head..n1).collect();
        best.absorb(solve_approx(pattern, target, Some(&base))?);
    }
    debug!(
        n1,
        n2 = target.size(),
        perm_coeff,
        cost = ?best.cost(),
        evaluated = best.evaluated(),
        "permuted approximation finished"
    );

    best.into_solution().ok_or(Error::NoCandidate("approximate"))
}
