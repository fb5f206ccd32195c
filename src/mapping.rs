/// Visit every arrangement of `slots` produced by the choose/swap/explore/backtrack
/// recursion, stopping at `depth`.
///
/// With `depth == slots.len()` every full permutation is visited. With a smaller
/// depth the visitor sees each distinct ordered selection of `depth` elements once,
/// held in the first `depth` entries of the slice. The slice is restored to its
/// original order when the call returns.
pub fn for_each_permutation<F>(slots: &mut [usize], depth: usize, visit: &mut F)
where
    F: FnMut(&[usize]),
{
    debug_assert!(depth <= slots.len());
    backtrack(0, depth, slots, visit);
}

fn backtrack<F>(idx: usize, depth: usize, slots: &mut [usize], visit: &mut F)
where
    F: FnMut(&[usize]),
{
    if idx == depth {
        visit(slots);
        return;
    }

    for i in idx..slots.len() {
        slots.swap(idx, i); // Choose
        backtrack(idx + 1, depth, slots, visit); // Explore
        slots.swap(idx, i); // Backtrack
    }
}

/// 0, 1, ..., n-1
pub fn identity(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// n-1, ..., 1, 0
pub fn mirrored(n: usize) -> Vec<usize> {
    (0..n).rev().collect()
}

/// Check that `perm` contains each of 0..n exactly once
pub fn is_permutation(perm: &[usize], n: usize) -> bool {
    perm.len() == n && crate::cost::is_injective(perm, n)
}
