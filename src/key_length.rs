use crate::alphabet;
use crate::error::CrackError;
use crate::stats::index_of_coincidence;
use log::debug;
use rayon::prelude::*;

/// Split `text` into `len` interleaved subsequences: subsequence `j` holds
/// the letters at positions `j`, `j + len`, `j + 2 len`, ...
pub fn split(text: &[u8], len: usize) -> Vec<Vec<u8>> {
    let mut pieces: Vec<Vec<u8>> = (0..len)
        .map(|_| Vec::with_capacity(text.len() / len + 1))
        .collect();
    for (i, &b) in text.iter().enumerate() {
        pieces[i % len].push(b);
    }
    pieces
}

/// Picks the trial key length whose subsequences look most monoalphabetic,
/// measured by their average index of coincidence.
pub struct KeyLengthEstimator<'a> {
    ciphertext: &'a [u8],
    max_key_length: usize,
}

impl<'a> KeyLengthEstimator<'a> {
    /// shortest key length ever tried
    pub const MIN_KEY_LENGTH: usize = 2;

    /// Trial lengths are `MIN_KEY_LENGTH..max_key_length`.
    pub fn new(ciphertext: &'a [u8], max_key_length: usize) -> KeyLengthEstimator<'a> {
        KeyLengthEstimator {
            ciphertext,
            max_key_length,
        }
    }

    /// Shortest ciphertext giving every subsequence of the smallest trial
    /// length at least two letters.
    pub fn min_ciphertext_len() -> usize {
        2 * Self::MIN_KEY_LENGTH
    }

    fn check(&self) -> Result<(), CrackError> {
        if self.max_key_length <= Self::MIN_KEY_LENGTH {
            return Err(CrackError::InvalidConfig {
                reason: format!(
                    "maximum key length {} leaves no length to try",
                    self.max_key_length
                ),
            });
        }
        alphabet::validate(self.ciphertext)?;
        if self.ciphertext.len() < Self::min_ciphertext_len() {
            return Err(CrackError::TooShort {
                length: self.ciphertext.len(),
                minimum: Self::min_ciphertext_len(),
            });
        }
        Ok(())
    }

    /// Average index of coincidence for each trial length, in increasing
    /// length order. Lengths that would leave a subsequence with fewer than
    /// two letters are skipped.
    pub fn scores(&self) -> Result<Vec<(usize, f64)>, CrackError> {
        self.check()?;

        let n = self.ciphertext.len();
        // longer lengths leave a subsequence with fewer than two letters
        let end = self.max_key_length.min(n / 2 + 1);
        if end < self.max_key_length {
            debug!(
                "skip key lengths {}..{}: {} letters is too short",
                end, self.max_key_length, n
            );
        }

        (Self::MIN_KEY_LENGTH..end)
            .into_par_iter()
            .map(|len| -> Result<(usize, f64), CrackError> {
                let pieces = split(self.ciphertext, len);
                let sum = pieces
                    .iter()
                    .map(|piece| index_of_coincidence(piece))
                    .sum::<Result<f64, _>>()?;
                Ok((len, sum / len as f64))
            })
            .collect()
    }

    /// Return the length with the highest average index of coincidence.
    /// Ties keep the shorter length.
    pub fn estimate(&self) -> Result<usize, CrackError> {
        let scores = self.scores()?;

        let mut best = scores[0];
        for &(len, ic) in &scores {
            debug!("key length {}: average IC {:.5}", len, ic);
            if ic > best.1 {
                best = (len, ic);
            }
        }
        debug!("estimated key length {}", best.0);
        Ok(best.0)
    }
}
