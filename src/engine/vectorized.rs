// ============================================================================
// Vectorized Division Strategy
// Chunked batch processing for throughput on long sequences
// ============================================================================

use crate::interfaces::DivisionStrategy;
use crate::numeric::{DivisionByZeroError, FormulaResult};

/// Number of pairs processed per chunk in the batch path
const LANES: usize = 4;

/// Vectorized division
///
/// Single-pair semantics are identical to [`PlainDivision`]
/// (bit-identical quotients, same error values); the batch path
/// processes aligned chunks of four in a tight loop the compiler can
/// auto-vectorize, falling back to per-pair checks whenever a chunk
/// contains a zero divisor.
///
/// [`PlainDivision`]: crate::engine::PlainDivision
pub struct VectorizedDivision {
    operation: String,
}

impl VectorizedDivision {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
        }
    }
}

impl DivisionStrategy for VectorizedDivision {
    fn divide(&self, dividend: f64, divisor: f64) -> FormulaResult<f64> {
        if divisor == 0.0 {
            return Err(DivisionByZeroError::new()
                .with_operation(&self.operation)
                .with_dividend(dividend)
                .into());
        }
        Ok(dividend / divisor)
    }

    fn divide_batch(&self, dividends: &[f64], divisors: &[f64]) -> Vec<FormulaResult<f64>> {
        debug_assert_eq!(
            dividends.len(),
            divisors.len(),
            "batch slices must have equal lengths"
        );
        let mut results = Vec::with_capacity(dividends.len());

        let chunk_pairs = dividends
            .chunks_exact(LANES)
            .zip(divisors.chunks_exact(LANES));

        for (chunk_a, chunk_b) in chunk_pairs {
            if chunk_b.iter().all(|&b| b != 0.0) {
                // Fast path: no zero divisor in this chunk
                let mut lane = [0.0f64; LANES];
                for i in 0..LANES {
                    lane[i] = chunk_a[i] / chunk_b[i];
                }
                results.extend(lane.into_iter().map(Ok));
            } else {
                for i in 0..LANES {
                    results.push(self.divide(chunk_a[i], chunk_b[i]));
                }
            }
        }

        // Handle remainder with per-pair code
        let processed = dividends.len() - dividends.len() % LANES;
        for (&a, &b) in dividends[processed..].iter().zip(&divisors[processed..]) {
            results.push(self.divide(a, b));
        }

        results
    }

    fn name(&self) -> &'static str {
        "vectorized"
    }
}
