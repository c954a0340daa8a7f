//! Small dense linear solves.

use nalgebra::{DMatrix, DVector};
use thiserror::Error;

/// Largest available pivot below this magnitude means the system is singular.
pub const PIVOT_TOLERANCE: f64 = 1e-12;

/// No usable pivot was found while eliminating `column`.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("Singular system: best pivot in column {column} is {pivot:e}")]
pub struct SingularSystem {
    pub column: usize,
    pub pivot: f64,
}

/// Solve `a · x = b` for square `a` by Gaussian elimination with partial
/// pivoting and back substitution.
///
/// Inputs are copied; the caller's buffers are left untouched.
pub fn solve_dense(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>, SingularSystem> {
    let n = a.nrows();
    debug_assert_eq!(a.ncols(), n, "solve_dense needs a square matrix");
    debug_assert_eq!(b.len(), n, "right-hand side length must match");

    let mut m = a.clone();
    let mut rhs = b.clone();

    for col in 0..n {
        // Partial pivoting: largest magnitude at or below the diagonal.
        let mut pivot_row = col;
        let mut pivot = m[(col, col)].abs();
        for row in (col + 1)..n {
            let v = m[(row, col)].abs();
            if v > pivot {
                pivot = v;
                pivot_row = row;
            }
        }
        if pivot < PIVOT_TOLERANCE {
            return Err(SingularSystem { column: col, pivot });
        }
        if pivot_row != col {
            m.swap_rows(col, pivot_row);
            rhs.swap_rows(col, pivot_row);
        }

        for row in (col + 1)..n {
            let factor = m[(row, col)] / m[(col, col)];
            if factor == 0.0 {
                continue;
            }
            for j in col..n {
                m[(row, j)] -= factor * m[(col, j)];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    let mut x = DVector::zeros(n);
    for i in (0..n).rev() {
        let mut sum = rhs[i];
        for j in (i + 1)..n {
            sum -= m[(i, j)] * x[j];
        }
        x[i] = sum / m[(i, i)];
    }

    Ok(x)
}
