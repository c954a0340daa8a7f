//! Lawson–Hanson active-set non-negative least squares.
//!
//! Minimises ‖A·x − b‖² subject to x ≥ 0. Sized for the small dense systems
//! built from a chemical catalog (tens of columns), so the normal equations
//! are formed once up front and each passive-set sub-problem is solved with
//! [`solve_dense`].

use crate::linear::solve_dense;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

/// NNLS configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NnlsConfig {
    /// Hard cap on passive-set additions.
    pub max_outer_iterations: usize,
    /// Hard cap on feasibility steps per outer iteration.
    pub max_inner_iterations: usize,
    /// Gradients at or below this are treated as non-improving.
    pub gradient_tolerance: f64,
    /// Passive components at or below this count as zero.
    pub positivity_tolerance: f64,
}

impl Default for NnlsConfig {
    fn default() -> Self {
        Self {
            max_outer_iterations: 500,
            max_inner_iterations: 500,
            gradient_tolerance: 1e-10,
            positivity_tolerance: 1e-10,
        }
    }
}

/// Why the outer loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NnlsTermination {
    /// No column outside the passive set has a positive gradient.
    Optimal,
    /// `max_outer_iterations` reached; `x` is the best estimate so far.
    IterationLimit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NnlsResult {
    /// Non-negative solution, one entry per column of A.
    pub x: DVector<f64>,
    pub outer_iterations: usize,
    pub termination: NnlsTermination,
}

impl NnlsResult {
    pub fn converged(&self) -> bool {
        self.termination == NnlsTermination::Optimal
    }
}

/// Solve min ‖A·x − b‖² with x ≥ 0.
///
/// Ties in the entering-column choice go to the lowest column index. Passive
/// indices are kept in ascending order, so results are reproducible.
/// A column whose entry makes the restricted system singular is dropped and
/// never re-enters, even after the passive set it clashed with has shrunk.
/// For exactly dependent columns nothing is lost; otherwise the result can be
/// slightly suboptimal. Exhausting either iteration bound is not an error.
pub fn nnls(a: &DMatrix<f64>, b: &DVector<f64>, config: &NnlsConfig) -> NnlsResult {
    let n = a.ncols();
    debug_assert_eq!(a.nrows(), b.len(), "A rows must match b");

    let gram = a.transpose() * a;
    let atb = a.transpose() * b;

    let mut x = DVector::zeros(n);
    let mut passive: Vec<usize> = Vec::with_capacity(n);
    let mut in_passive = vec![false; n];
    // Columns whose entry made the restricted system singular.
    let mut rejected = vec![false; n];

    let mut termination = NnlsTermination::IterationLimit;
    let mut outer_iterations = 0;

    for outer in 0..config.max_outer_iterations {
        outer_iterations = outer + 1;

        // w = Aᵗb − AᵗA·x
        let w = &atb - &gram * &x;

        let mut entering = None;
        let mut best = config.gradient_tolerance;
        for (j, &wj) in w.iter().enumerate() {
            if !in_passive[j] && !rejected[j] && wj > best {
                best = wj;
                entering = Some(j);
            }
        }
        let Some(t) = entering else {
            termination = NnlsTermination::Optimal;
            outer_iterations = outer;
            break;
        };

        let pos = passive.partition_point(|&j| j < t);
        passive.insert(pos, t);
        in_passive[t] = true;
        trace!(outer, column = t, gradient = best, "column enters passive set");

        for inner in 0..config.max_inner_iterations {
            if passive.is_empty() {
                break;
            }

            let k = passive.len();
            let sub_gram = DMatrix::from_fn(k, k, |r, c| gram[(passive[r], passive[c])]);
            let sub_atb = DVector::from_fn(k, |r, _| atb[passive[r]]);

            let s = match solve_dense(&sub_gram, &sub_atb) {
                Ok(s) => s,
                Err(singular) => {
                    trace!(outer, inner, column = t, %singular, "restricted solve singular");
                    passive.retain(|&j| j != t);
                    in_passive[t] = false;
                    rejected[t] = true;
                    x[t] = 0.0;
                    break;
                }
            };

            if s.iter().all(|&v| v > config.positivity_tolerance) {
                for (r, &j) in passive.iter().enumerate() {
                    x[j] = s[r];
                }
                break;
            }

            // Largest step toward s that keeps the passive set feasible.
            let mut alpha: f64 = 1.0;
            for (r, &j) in passive.iter().enumerate() {
                if s[r] <= config.positivity_tolerance {
                    let denom = x[j] - s[r];
                    if denom > 0.0 {
                        alpha = alpha.min(x[j] / denom);
                    }
                }
            }
            let alpha = alpha.clamp(0.0, 1.0);

            for (r, &j) in passive.iter().enumerate() {
                x[j] += alpha * (s[r] - x[j]);
            }

            passive.retain(|&j| {
                if x[j] < config.positivity_tolerance {
                    x[j] = 0.0;
                    in_passive[j] = false;
                    false
                } else {
                    true
                }
            });
            trace!(outer, inner, alpha, passive = passive.len(), "feasibility step");
        }
    }

    if termination == NnlsTermination::IterationLimit {
        warn!(
            max_outer_iterations = config.max_outer_iterations,
            "NNLS stopped at iteration bound, returning best estimate"
        );
    }

    for v in x.iter_mut() {
        if *v < 0.0 {
            *v = 0.0;
        }
    }

    NnlsResult {
        x,
        outer_iterations,
        termination,
    }
}
