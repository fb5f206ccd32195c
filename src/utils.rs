/// n! saturating at usize::MAX
pub fn factorial(n: usize) -> usize {
    (2..=n).fold(1usize, |acc, i| acc.saturating_mul(i))
}

/// Number of ordered selections of k out of n elements, P(n, k) = n! / (n - k)!,
/// without overflow
pub fn num_partial_permutations(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    let mut result = 1usize;
    for i in 0..k {
        result = result.saturating_mul(n - i);
    }

    result
}
