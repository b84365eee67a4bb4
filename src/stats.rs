//! Letter statistics used to score candidate texts.
//!
//! Both functions expect `text` to hold alphabet symbols only.

use crate::alphabet::{self, SIZE};
use crate::error::CrackError;
use crate::frequency::FrequencyTable;

/// Probability that two distinct positions of `text` hold the same letter:
/// `sum f(f - 1) / (N (N - 1))`.
pub fn index_of_coincidence(text: &[u8]) -> Result<f64, CrackError> {
    let n = text.len();
    if n < 2 {
        return Err(CrackError::DegenerateSubsequence { length: n });
    }
    debug_assert!(alphabet::validate(text).is_ok());

    let coincidences: usize = alphabet::counts(text)
        .iter()
        .map(|&f| f * f.saturating_sub(1))
        .sum();
    Ok(coincidences as f64 / (n * (n - 1)) as f64)
}

/// Chi-squared distance between the letter counts of `text` and the counts
/// `table` predicts for a text of the same length. Lower is a better fit.
pub fn chi_squared(text: &[u8], table: &FrequencyTable) -> Result<f64, CrackError> {
    let n = text.len();
    if n == 0 {
        return Err(CrackError::DegenerateSubsequence { length: n });
    }
    debug_assert!(alphabet::validate(text).is_ok());

    let counts = alphabet::counts(text);
    let n = n as f64;
    Ok((0..SIZE)
        .map(|i| {
            let expected = n * table.get(i);
            let diff = counts[i] as f64 - expected;
            diff * diff / expected
        })
        .sum())
}
