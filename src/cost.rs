use crate::Matrix;

/// Cost and delta matrix of a single evaluated assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Total excess of pattern weights over mapped target weights
    pub cost: usize,
    /// Target-sized matrix holding the excess at each mapped position
    pub delta: Matrix,
}

/// Check that every slot is inside the target and no slot is used twice
pub fn is_injective(slots: &[usize], n2: usize) -> bool {
    let mut used = vec![false; n2];
    slots.iter().all(|&s| s < n2 && !std::mem::replace(&mut used[s], true))
}

/// Calculate the excess cost of placing pattern vertex `order[k]` at target
/// vertex `slots[k]` for every position k, without building the delta matrix
pub fn excess_cost(pattern: &Matrix, target: &Matrix, order: &[usize], slots: &[usize]) -> usize {
    debug_assert_eq!(order.len(), slots.len());
    debug_assert!(is_injective(slots, target.size()));

    let mut cost = 0;
    for (k, &row) in order.iter().enumerate() {
        let x = slots[k];
        for (l, &col) in order.iter().enumerate() {
            let y = slots[l];
            cost += pattern[(row, col)].saturating_sub(target[(x, y)]);
        }
    }
    cost
}

/// Same placement as [`excess_cost`], also recording where the excess occurs
pub fn evaluate_ordered(
    pattern: &Matrix,
    target: &Matrix,
    order: &[usize],
    slots: &[usize],
) -> Evaluation {
    debug_assert_eq!(order.len(), slots.len());
    debug_assert!(is_injective(slots, target.size()));

    let mut delta = Matrix::new(target.size());
    let mut cost = 0;

    for (k, &row) in order.iter().enumerate() {
        let x = slots[k];
        for (l, &col) in order.iter().enumerate() {
            let y = slots[l];
            let needed = pattern[(row, col)].saturating_sub(target[(x, y)]);
            if needed > 0 {
                delta[(x, y)] = needed;
                cost += needed;
            }
        }
    }

    Evaluation { cost, delta }
}

/// Evaluate an assignment given as pattern vertex -> target vertex
pub fn evaluate(pattern: &Matrix, target: &Matrix, assignment: &[usize]) -> Evaluation {
    let order: Vec<usize> = (0..assignment.len()).collect();
    evaluate_ordered(pattern, target, &order, assignment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: Vec<Vec<usize>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_single_excess() {
        let g = m(vec![vec![0, 5], vec![0, 0]]);
        let h = m(vec![vec![0, 1], vec![0, 0]]);
        let eval = evaluate(&g, &h, &[0, 1]);
        assert_eq!(eval.cost, 4);
        assert_eq!(eval.delta, m(vec![vec![0, 4], vec![0, 0]]));
    }

    #[test]
    fn test_delta_lands_on_mapped_positions() {
        let g = m(vec![vec![0, 3], vec![1, 0]]);
        let h = Matrix::new(3);
        let eval = evaluate(&g, &h, &[2, 0]);
        assert_eq!(eval.cost, 4);
        assert_eq!(eval.delta.get(2, 0), 3);
        assert_eq!(eval.delta.get(0, 2), 1);
        assert_eq!(eval.delta.total(), eval.cost);
    }

    #[test]
    fn test_stronger_target_costs_nothing() {
        let g = m(vec![vec![0, 2], vec![2, 0]]);
        let h = m(vec![vec![0, 9, 9], vec![9, 0, 9], vec![9, 9, 0]]);
        let eval = evaluate(&g, &h, &[1, 2]);
        assert_eq!(eval.cost, 0);
        assert_eq!(eval.delta, Matrix::new(3));
    }

    #[test]
    fn test_ordered_reads_pattern_through_order() {
        let g = m(vec![vec![0, 7], vec![0, 0]]);
        let h = Matrix::new(2);
        // position 0 holds pattern vertex 1, placed at target 0
        let eval = evaluate_ordered(&g, &h, &[1, 0], &[0, 1]);
        assert_eq!(eval.cost, 7);
        assert_eq!(eval.delta.get(1, 0), 7);
        assert_eq!(excess_cost(&g, &h, &[1, 0], &[0, 1]), 7);
    }

    #[test]
    fn test_injectivity_check() {
        assert!(is_injective(&[0, 2, 1], 3));
        assert!(!is_injective(&[0, 0], 3));
        assert!(!is_injective(&[0, 3], 3));
        assert!(is_injective(&[], 0));
    }
}
