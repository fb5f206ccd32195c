use crate::parser::Instance;
use crate::Matrix;
use rand::Rng;

/// Build an n×n matrix with independent weights uniform in [0, max_weight]
pub fn random_matrix<R: Rng>(n: usize, max_weight: usize, rng: &mut R) -> Matrix {
    let mut matrix = Matrix::new(n);
    for i in 0..n {
        for j in 0..n {
            matrix[(i, j)] = rng.gen_range(0..=max_weight);
        }
    }
    matrix
}

/// Random pattern/target pair, optionally without self-loops
pub fn random_instance<R: Rng>(
    n1: usize,
    n2: usize,
    max_weight: usize,
    zero_diagonal: bool,
    rng: &mut R,
) -> Instance {
    let mut pattern = random_matrix(n1, max_weight, rng);
    let mut target = random_matrix(n2, max_weight, rng);
    if zero_diagonal {
        pattern.zero_diagonal();
        target.zero_diagonal();
    }
    Instance { pattern, target }
}
