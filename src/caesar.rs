use crate::alphabet::{self, SIZE};
use crate::error::CrackError;
use crate::frequency::FrequencyTable;
use crate::stats::chi_squared;
use log::{debug, trace};

/// Shift every letter back by `shift` positions, wrapping within the alphabet.
///
/// `text` must hold `A..=Z` only, see `alphabet::validate`.
pub fn decrypt(text: &[u8], shift: usize) -> Vec<u8> {
    encrypt(text, SIZE - shift % SIZE)
}

/// Shift every letter forward by `shift` positions, wrapping within the alphabet.
///
/// `text` must hold `A..=Z` only.
pub fn encrypt(text: &[u8], shift: usize) -> Vec<u8> {
    text.iter()
        .map(|&b| alphabet::letter(alphabet::index(b) + shift % SIZE))
        .collect()
}

/// Recovers the shift of a single-alphabet ciphertext by frequency matching.
#[derive(Debug, Clone)]
pub struct CaesarBreaker<'a> {
    frequencies: &'a FrequencyTable,
}

impl<'a> CaesarBreaker<'a> {
    pub fn new(frequencies: &'a FrequencyTable) -> CaesarBreaker<'a> {
        CaesarBreaker { frequencies }
    }

    /// chi-squared score of `subsequence` decrypted with each shift 0..26
    pub fn scores(&self, subsequence: &[u8]) -> Result<Vec<f64>, CrackError> {
        (0..SIZE)
            .map(|shift| chi_squared(&decrypt(subsequence, shift), self.frequencies))
            .collect()
    }

    /// Return the shift with the lowest score and that score.
    /// Ties keep the smaller shift.
    pub fn break_shift(&self, subsequence: &[u8]) -> Result<(usize, f64), CrackError> {
        let scores = self.scores(subsequence)?;
        let (shift, score) = lowest(&scores);
        debug!("shift {} (chi-squared {:.3})", shift, score);
        Ok((shift, score))
    }

    /// key letter whose position is the recovered shift
    pub fn key_letter(&self, subsequence: &[u8]) -> Result<u8, CrackError> {
        let (shift, _) = self.break_shift(subsequence)?;
        Ok(alphabet::letter(shift))
    }
}

// first index achieving a new minimum, scanning upwards
fn lowest(scores: &[f64]) -> (usize, f64) {
    let mut best = (0, scores[0]);
    for (shift, &score) in scores.iter().enumerate().skip(1) {
        trace!("shift {:2}: chi-squared {:.3}", shift, score);
        if score < best.1 {
            best = (shift, score);
        }
    }
    best
}
