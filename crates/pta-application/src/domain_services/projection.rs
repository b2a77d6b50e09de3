//! 2-D projection of the embedding space
//!
//! Exact t-SNE, implemented natively over ndarray. Batches are hundreds
//! of records, not millions, so the exact O(N^2) formulation applies and
//! keeps the degenerate small-batch cases (N = 1, N = 2) well defined.
//!
//! # Algorithm
//!
//! 1. Squared Euclidean distances between all row pairs.
//! 2. Per-row conditional probabilities with the precision found by
//!    bisection so each row's entropy matches `ln(perplexity)`.
//! 3. Symmetrized, floored joint probabilities.
//! 4. Momentum gradient descent on the Student-t low-dimensional
//!    affinities, with early exaggeration.
//!
//! The layout is initialized from a seeded RNG, so one process reproduces
//! the same layout for the same input; across runs callers may only rely
//! on relative grouping, never absolute coordinates.

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pta_domain::error::{Error, Result};

/// Gradient descent steps
const MAX_ITERATIONS: usize = 500;
/// Steps with exaggerated attractive forces
const EXAGGERATION_ITERATIONS: usize = 100;
/// Early exaggeration factor
const EARLY_EXAGGERATION: f64 = 12.0;
/// Gradient descent learning rate
const LEARNING_RATE: f64 = 200.0;
/// Momentum before the switch point
const INITIAL_MOMENTUM: f64 = 0.5;
/// Momentum after the switch point
const FINAL_MOMENTUM: f64 = 0.8;
/// Iteration at which momentum switches
const MOMENTUM_SWITCH_ITERATION: usize = 250;
/// Bisection steps when solving each row's precision
const BISECTION_STEPS: usize = 50;
/// Acceptable entropy gap when solving precisions
const ENTROPY_TOLERANCE: f64 = 1e-5;
/// Floor keeping joint probabilities away from zero
const P_FLOOR: f64 = 1e-12;
/// Scale of the random initial layout
const INIT_SCALE: f64 = 1e-4;

/// Project the `N x D` embedding matrix to one (x, y) pair per row.
///
/// The locality parameter is clamped to `min(perplexity, N - 1)` so small
/// batches succeed: N = 2 runs at perplexity 1, and a single record maps
/// to the origin.
pub fn project_2d(matrix: &Array2<f64>, perplexity: f64, seed: u64) -> Result<Vec<(f64, f64)>> {
    let n = matrix.nrows();
    if n == 0 {
        return Ok(Vec::new());
    }
    if !(perplexity > 0.0) {
        return Err(Error::projection(format!(
            "perplexity must be positive, got {perplexity}"
        )));
    }
    if n == 1 {
        return Ok(vec![(0.0, 0.0)]);
    }

    let effective_perplexity = perplexity.min((n - 1) as f64);
    let distances = squared_distances(matrix);
    let joint = joint_probabilities(&distances, effective_perplexity);

    let mut layout = initial_layout(n, seed);
    descend(&joint, &mut layout);

    Ok(layout
        .rows()
        .into_iter()
        .map(|row| (row[0], row[1]))
        .collect())
}

/// Pairwise squared Euclidean distances between matrix rows.
fn squared_distances(matrix: &Array2<f64>) -> Array2<f64> {
    let n = matrix.nrows();
    let mut distances = Array2::zeros((n, n));
    for i in 0..n {
        for j in (i + 1)..n {
            let d2: f64 = matrix
                .row(i)
                .iter()
                .zip(matrix.row(j).iter())
                .map(|(a, b)| (a - b) * (a - b))
                .sum();
            distances[[i, j]] = d2;
            distances[[j, i]] = d2;
        }
    }
    distances
}

/// Symmetrized joint probabilities whose per-row entropy matches the
/// requested perplexity.
fn joint_probabilities(distances: &Array2<f64>, perplexity: f64) -> Array2<f64> {
    let n = distances.nrows();
    let target_entropy = perplexity.ln();

    let mut conditional = Array2::zeros((n, n));
    for i in 0..n {
        let beta = solve_precision(distances, i, target_entropy);
        write_conditional_row(distances, i, beta, &mut conditional);
    }

    let mut joint = Array2::zeros((n, n));
    let norm = 2.0 * n as f64;
    for i in 0..n {
        for j in 0..n {
            if i != j {
                joint[[i, j]] = ((conditional[[i, j]] + conditional[[j, i]]) / norm).max(P_FLOOR);
            }
        }
    }
    joint
}

/// Bisect the Gaussian precision for row `i` until the conditional
/// distribution's entropy matches `target_entropy`.
///
/// Rows whose entropy cannot move (all neighbors equidistant) simply run
/// out the bisection steps and land on a uniform row, which is the
/// sensible assignment for them anyway.
fn solve_precision(distances: &Array2<f64>, i: usize, target_entropy: f64) -> f64 {
    let mut beta = 1.0f64;
    let mut beta_min = f64::NEG_INFINITY;
    let mut beta_max = f64::INFINITY;

    for _ in 0..BISECTION_STEPS {
        let (sum_p, sum_dp) = row_sums(distances, i, beta);
        if sum_p <= f64::MIN_POSITIVE || !sum_p.is_finite() {
            // Kernel collapsed; widen it.
            beta_max = beta;
            beta = if beta_min.is_finite() {
                (beta + beta_min) / 2.0
            } else {
                beta / 2.0
            };
            continue;
        }

        let entropy = sum_p.ln() + beta * sum_dp / sum_p;
        let gap = entropy - target_entropy;
        if gap.abs() < ENTROPY_TOLERANCE {
            break;
        }
        if gap > 0.0 {
            beta_min = beta;
            beta = if beta_max.is_finite() {
                (beta + beta_max) / 2.0
            } else {
                beta * 2.0
            };
        } else {
            beta_max = beta;
            beta = if beta_min.is_finite() {
                (beta + beta_min) / 2.0
            } else {
                beta / 2.0
            };
        }
    }
    beta
}

/// Unnormalized kernel mass and distance-weighted mass for row `i`.
fn row_sums(distances: &Array2<f64>, i: usize, beta: f64) -> (f64, f64) {
    let n = distances.nrows();
    let mut sum_p = 0.0;
    let mut sum_dp = 0.0;
    for j in 0..n {
        if j == i {
            continue;
        }
        let p = (-distances[[i, j]] * beta).exp();
        sum_p += p;
        sum_dp += distances[[i, j]] * p;
    }
    (sum_p, sum_dp)
}

/// Fill row `i` of the conditional matrix at the solved precision.
fn write_conditional_row(
    distances: &Array2<f64>,
    i: usize,
    beta: f64,
    conditional: &mut Array2<f64>,
) {
    let n = distances.nrows();
    let (sum_p, _) = row_sums(distances, i, beta);

    if sum_p <= f64::MIN_POSITIVE || !sum_p.is_finite() {
        // Degenerate row: spread mass uniformly over the neighbors.
        let uniform = 1.0 / (n - 1) as f64;
        for j in 0..n {
            if j != i {
                conditional[[i, j]] = uniform;
            }
        }
        return;
    }

    for j in 0..n {
        if j != i {
            conditional[[i, j]] = (-distances[[i, j]] * beta).exp() / sum_p;
        }
    }
}

/// Seeded uniform initial layout, deterministic per (n, seed).
fn initial_layout(n: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut layout = Array2::zeros((n, 2));
    for mut row in layout.rows_mut() {
        row[0] = rng.random_range(-INIT_SCALE..INIT_SCALE);
        row[1] = rng.random_range(-INIT_SCALE..INIT_SCALE);
    }
    layout
}

/// Momentum gradient descent with early exaggeration.
fn descend(joint: &Array2<f64>, layout: &mut Array2<f64>) {
    let n = layout.nrows();
    let mut velocity = Array2::<f64>::zeros((n, 2));
    let mut affinity = Array2::<f64>::zeros((n, n));

    for iteration in 0..MAX_ITERATIONS {
        let exaggeration = if iteration < EXAGGERATION_ITERATIONS {
            EARLY_EXAGGERATION
        } else {
            1.0
        };
        let momentum = if iteration < MOMENTUM_SWITCH_ITERATION {
            INITIAL_MOMENTUM
        } else {
            FINAL_MOMENTUM
        };

        // Student-t affinities in the low-dimensional space.
        let mut sum_affinity = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = layout[[i, 0]] - layout[[j, 0]];
                let dy = layout[[i, 1]] - layout[[j, 1]];
                let a = 1.0 / (1.0 + dx * dx + dy * dy);
                affinity[[i, j]] = a;
                affinity[[j, i]] = a;
                sum_affinity += 2.0 * a;
            }
        }
        let sum_affinity = sum_affinity.max(P_FLOOR);

        for i in 0..n {
            let mut grad_x = 0.0;
            let mut grad_y = 0.0;
            for j in 0..n {
                if j == i {
                    continue;
                }
                let q = (affinity[[i, j]] / sum_affinity).max(P_FLOOR);
                let force = (exaggeration * joint[[i, j]] - q) * affinity[[i, j]];
                grad_x += force * (layout[[i, 0]] - layout[[j, 0]]);
                grad_y += force * (layout[[i, 1]] - layout[[j, 1]]);
            }
            velocity[[i, 0]] = momentum * velocity[[i, 0]] - LEARNING_RATE * 4.0 * grad_x;
            velocity[[i, 1]] = momentum * velocity[[i, 1]] - LEARNING_RATE * 4.0 * grad_y;
        }

        for i in 0..n {
            layout[[i, 0]] += velocity[[i, 0]];
            layout[[i, 1]] += velocity[[i, 1]];
        }

        // Keep the layout centered.
        let mean_x = layout.column(0).mean().unwrap_or(0.0);
        let mean_y = layout.column(1).mean().unwrap_or(0.0);
        for i in 0..n {
            layout[[i, 0]] -= mean_x;
            layout[[i, 1]] -= mean_y;
        }
    }
}
