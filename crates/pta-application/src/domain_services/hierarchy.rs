//! Hierarchical fallback clustering
//!
//! Ward-linkage agglomerative clustering into a fixed number of groups.
//! Used when the density sweep finds no usable structure: it always
//! succeeds, assigns every record to a group, and never emits the noise
//! label.
//!
//! # Algorithm
//!
//! Classic bottom-up merging with Lance-Williams updates on squared
//! Euclidean distances:
//!
//! 1. Start with one singleton cluster per record.
//! 2. Repeatedly merge the pair with the smallest Ward distance until the
//!    requested group count remains.
//! 3. Number the surviving clusters 0..k-1 ordered by their smallest
//!    member index, so the output is fully deterministic.
//!
//! The merge loop is the naive O(N^3) one; fallback batches are the
//! small, degenerate ones.

use ndarray::Array2;

/// An active cluster during agglomeration.
struct ClusterNode {
    /// Record indices belonging to this cluster
    members: Vec<usize>,
}

/// Cluster `matrix` rows into exactly `min(k, N)` groups (at least 1).
///
/// Returns one label per row, in row order. `k >= N` degenerates to one
/// singleton cluster per record.
pub fn ward_cluster(matrix: &Array2<f64>, k: usize) -> Vec<i32> {
    let n = matrix.nrows();
    if n == 0 {
        return Vec::new();
    }
    let target = k.clamp(1, n);

    // Ward distances between singletons reduce to squared Euclidean.
    let mut dist = vec![vec![0.0f64; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d2 = squared_euclidean(matrix, i, j);
            dist[i][j] = d2;
            dist[j][i] = d2;
        }
    }

    let mut nodes: Vec<Option<ClusterNode>> = (0..n)
        .map(|i| Some(ClusterNode { members: vec![i] }))
        .collect();
    let mut active = n;

    while active > target {
        let (a, b) = closest_pair(&nodes, &dist);
        merge(&mut nodes, &mut dist, a, b);
        active -= 1;
    }

    // Deterministic numbering: clusters ordered by smallest member index.
    let mut survivors: Vec<&ClusterNode> = nodes.iter().flatten().collect();
    survivors.sort_by_key(|node| node.members[0]);

    let mut labels = vec![0i32; n];
    for (label, node) in survivors.iter().enumerate() {
        for &member in &node.members {
            labels[member] = label as i32;
        }
    }
    labels
}

/// Find the active pair with the smallest Ward distance.
///
/// Ties resolve to the lexicographically first (i, j) pair, keeping merge
/// order independent of anything but the input matrix.
fn closest_pair(nodes: &[Option<ClusterNode>], dist: &[Vec<f64>]) -> (usize, usize) {
    let n = nodes.len();
    let mut best = (0, 0);
    let mut best_dist = f64::INFINITY;
    for i in 0..n {
        if nodes[i].is_none() {
            continue;
        }
        for j in (i + 1)..n {
            if nodes[j].is_none() {
                continue;
            }
            if dist[i][j] < best_dist {
                best_dist = dist[i][j];
                best = (i, j);
            }
        }
    }
    best
}

/// Merge cluster `b` into cluster `a`, updating Ward distances via the
/// Lance-Williams recurrence on squared Euclidean distances:
///
/// ```text
/// d2(m, a+b) = ((n_a + n_m) d2(m, a) + (n_b + n_m) d2(m, b) - n_m d2(a, b))
///              / (n_a + n_b + n_m)
/// ```
fn merge(nodes: &mut [Option<ClusterNode>], dist: &mut [Vec<f64>], a: usize, b: usize) {
    let size_a = nodes[a].as_ref().map_or(0, |c| c.members.len()) as f64;
    let size_b = nodes[b].as_ref().map_or(0, |c| c.members.len()) as f64;
    let d_ab = dist[a][b];

    for m in 0..nodes.len() {
        if m == a || m == b {
            continue;
        }
        let Some(node_m) = nodes[m].as_ref() else {
            continue;
        };
        let size_m = node_m.members.len() as f64;
        let updated = ((size_a + size_m) * dist[m][a] + (size_b + size_m) * dist[m][b]
            - size_m * d_ab)
            / (size_a + size_b + size_m);
        dist[m][a] = updated;
        dist[a][m] = updated;
    }

    let absorbed = nodes[b].take();
    if let (Some(node_a), Some(node_b)) = (nodes[a].as_mut(), absorbed) {
        node_a.members.extend(node_b.members);
        node_a.members.sort_unstable();
    }
}

fn squared_euclidean(matrix: &Array2<f64>, i: usize, j: usize) -> f64 {
    let row_i = matrix.row(i);
    let row_j = matrix.row(j);
    row_i
        .iter()
        .zip(row_j.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}
