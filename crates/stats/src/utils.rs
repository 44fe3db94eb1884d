//! Small comparison and selection utilities.

use crate::error::StatsError;

/// Fraction of positions where `truth` and `pred` are equal.
///
/// # Errors
///
/// [`StatsError::ShapeMismatch`] if the lengths differ,
/// [`StatsError::EmptyData`] if both are empty.
pub fn accuracy<T: PartialEq>(truth: &[T], pred: &[T]) -> Result<f64, StatsError> {
    if truth.len() != pred.len() {
        return Err(StatsError::ShapeMismatch {
            left: truth.len(),
            right: pred.len(),
        });
    }
    if truth.is_empty() {
        return Err(StatsError::EmptyData);
    }
    let hits = truth.iter().zip(pred).filter(|(a, b)| a == b).count();
    Ok(hits as f64 / truth.len() as f64)
}

/// Indices of the column names that contain `pattern` as a substring.
pub fn filter_columns<S: AsRef<str>>(columns: &[S], pattern: &str) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .filter(|(_, name)| name.as_ref().contains(pattern))
        .map(|(i, _)| i)
        .collect()
}
