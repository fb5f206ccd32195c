use std::ops::{Index, IndexMut};

/// Square weighted adjacency matrix, stored row-major in one buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    /// Number of vertices
    n: usize,
    /// Row-major weights: data[i * n + j] = weight of edge i -> j
    data: Vec<usize>,
}

impl Matrix {
    /// Allocate an n×n matrix filled with zeros
    pub fn new(n: usize) -> Self {
        Matrix {
            n,
            data: vec![0; n * n],
        }
    }

    /// Build a matrix from explicit rows, rejecting ragged or non-square input
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Result<Self> {
        let n = rows.len();
        if let Some((row, found)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != n)
            .map(|(i, r)| (i, r.len()))
        {
            return Err(Error::NotSquare {
                size: n,
                row,
                found,
            });
        }

        Ok(Matrix {
            n,
            data: rows.into_iter().flatten().collect(),
        })
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> usize {
        self[(i, j)]
    }

    pub fn set(&mut self, i: usize, j: usize, weight: usize) {
        self[(i, j)] = weight;
    }

    /// Reset every entry to zero, keeping the allocation
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Remove self-loops
    pub fn zero_diagonal(&mut self) {
        for i in 0..self.n {
            self[(i, i)] = 0;
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[usize]> + '_ {
        // chunks(0) panics, so an empty matrix yields no rows
        self.data.chunks(self.n.max(1)).take(self.n)
    }

    /// Sum of all entries
    pub fn total(&self) -> usize {
        self.data.iter().sum()
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.n && j < self.n, "matrix index out of bounds");
        i * self.n + j
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = usize;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &usize {
        &self.data[self.offset(i, j)]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut usize {
        let offset = self.offset(i, j);
        &mut self.data[offset]
    }
}

/// Injective map from pattern vertices to target vertices:
/// assignment[pattern_vertex] = target_vertex
pub type Assignment = Vec<usize>;

// Module declarations
pub mod approx;
pub mod cost;
pub mod error;
pub mod exact;
pub mod experiment;
pub mod generate;
pub mod logging;
pub mod mapping;
pub mod output;
pub mod parser;
pub mod solution;
pub mod stats;
pub mod utils;

pub use error::{Error, Result};
pub use solution::Solution;
