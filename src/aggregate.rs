use crate::errors::AggregateError;

/// Element-wise arithmetic mean of equal-length trial sequences.
pub fn average_results(sequences: &[Vec<f64>]) -> Result<Vec<f64>, AggregateError> {
    let first = sequences.first().ok_or(AggregateError::Empty)?;

    let mut sums = vec![0.0; first.len()];
    for sequence in sequences {
        if sequence.len() != first.len() {
            return Err(AggregateError::LengthMismatch {
                expected: first.len(),
                found: sequence.len(),
            });
        }
        for (sum, value) in sums.iter_mut().zip(sequence) {
            *sum += value;
        }
    }

    let n = sequences.len() as f64;
    Ok(sums.into_iter().map(|sum| sum / n).collect())
}
