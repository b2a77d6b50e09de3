//! Embedding matrix construction and standardization
//!
//! Converts a batch of embedding value objects into the dense `N x D`
//! matrix consumed by cluster selection and projection, and optionally
//! standardizes each dimension across the batch.

use ndarray::Array2;

use pta_domain::error::{Error, Result};
use pta_domain::value_objects::Embedding;

/// Minimum column standard deviation treated as non-constant
const STD_EPSILON: f64 = 1e-12;

/// Build the `N x D` embedding matrix from per-record embeddings.
///
/// Row `i` is record `i`'s vector; every row must share one
/// dimensionality (fixed by the embedding model).
pub fn embeddings_to_matrix(embeddings: &[Embedding]) -> Result<Array2<f64>> {
    let rows = embeddings.len();
    let dims = embeddings.first().map(|e| e.vector.len()).unwrap_or(0);

    let mut matrix = Array2::zeros((rows, dims));
    for (i, embedding) in embeddings.iter().enumerate() {
        if embedding.vector.len() != dims {
            return Err(Error::embedding(format!(
                "Inconsistent embedding dimensions: row 0 has {}, row {} has {}",
                dims,
                i,
                embedding.vector.len()
            )));
        }
        for (j, &value) in embedding.vector.iter().enumerate() {
            matrix[[i, j]] = f64::from(value);
        }
    }

    Ok(matrix)
}

/// Standardize each column to zero mean and unit variance across the batch.
///
/// Uses the population variance, matching the convention of batch feature
/// scalers. Requires at least two rows to be meaningful and is a no-op
/// below that. Constant columns are centered but left unscaled.
pub fn standardize_columns(matrix: &mut Array2<f64>) {
    if matrix.nrows() < 2 {
        return;
    }

    for mut column in matrix.columns_mut() {
        let mean = column.mean().unwrap_or(0.0);
        let std = column.std(0.0);
        if std > STD_EPSILON {
            column.mapv_inplace(|v| (v - mean) / std);
        } else {
            column.mapv_inplace(|v| v - mean);
        }
    }
}
