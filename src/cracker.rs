use crate::alphabet;
use crate::caesar::CaesarBreaker;
use crate::error::CrackError;
use crate::frequency::FrequencyTable;
use crate::key::Key;
use crate::key_length::{split, KeyLengthEstimator};
use log::debug;
use rayon::prelude::*;

/// Tunable parameters of the attack
#[derive(Debug, Clone, PartialEq)]
pub struct CrackerConfig {
    /// exclusive upper bound of the trial key lengths
    pub max_key_length: usize,
    /// letter frequencies of the plaintext language
    pub frequencies: FrequencyTable,
}

impl CrackerConfig {
    pub const DEFAULT_MAX_KEY_LENGTH: usize = 8;

    pub fn with_max_key_length(mut self, max_key_length: usize) -> Self {
        self.max_key_length = max_key_length;
        self
    }

    pub fn with_frequencies(mut self, frequencies: FrequencyTable) -> Self {
        self.frequencies = frequencies;
        self
    }
}

impl Default for CrackerConfig {
    fn default() -> Self {
        CrackerConfig {
            max_key_length: Self::DEFAULT_MAX_KEY_LENGTH,
            frequencies: FrequencyTable::english(),
        }
    }
}

/// Ciphertext-only attack on the Vigenere cipher
#[derive(Debug, Clone, Default)]
pub struct VigenereCracker {
    config: CrackerConfig,
}

impl VigenereCracker {
    pub fn new(config: CrackerConfig) -> VigenereCracker {
        VigenereCracker { config }
    }

    pub fn config(&self) -> &CrackerConfig {
        &self.config
    }

    /// Estimate the key length, then recover each key letter from its
    /// subsequence.
    pub fn crack(&self, ciphertext: &[u8]) -> Result<Key, CrackError> {
        let len = KeyLengthEstimator::new(ciphertext, self.config.max_key_length).estimate()?;
        self.crack_with_length(ciphertext, len)
    }

    /// Recover a key of the given length.
    pub fn crack_with_length(&self, ciphertext: &[u8], len: usize) -> Result<Key, CrackError> {
        if len == 0 {
            return Err(CrackError::InvalidConfig {
                reason: "key length must be positive".into(),
            });
        }
        alphabet::validate(ciphertext)?;
        if ciphertext.len() < len {
            return Err(CrackError::TooShort {
                length: ciphertext.len(),
                minimum: len,
            });
        }

        let breaker = CaesarBreaker::new(&self.config.frequencies);
        let letters = split(ciphertext, len)
            .par_iter()
            .enumerate()
            .map(|(offset, piece)| -> Result<u8, CrackError> {
                let letter = breaker.key_letter(piece)?;
                debug!("offset {}: key letter {}", offset, letter as char);
                Ok(letter)
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Key::new(letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = CrackerConfig::default();
        assert_eq!(8, config.max_key_length);
        assert_eq!(FrequencyTable::english(), config.frequencies);

        let config = config
            .with_max_key_length(12)
            .with_frequencies(FrequencyTable::uniform());
        assert_eq!(12, config.max_key_length);
        assert_eq!(FrequencyTable::uniform(), config.frequencies);
    }

    #[test]
    fn synthetic_language() {
        // plaintext language made of E only, so each column is a run of one letter
        let mut values = [0.0001; 26];
        values[4] = 1.0 - 0.0001 * 25.0;
        let cracker = VigenereCracker::new(
            CrackerConfig::default().with_frequencies(FrequencyTable::new(values).unwrap()),
        );
        let key: Key = "DOG".parse().unwrap();
        let cipher = key.encrypt(&[b'E'; 30]).unwrap();
        assert_eq!(key, cracker.crack_with_length(&cipher, 3).unwrap());
    }

    #[test]
    fn forced_length_errors() {
        let cracker = VigenereCracker::default();
        assert!(cracker.crack_with_length(b"ABC", 0).is_err());
        assert!(cracker.crack_with_length(b"ABC", 4).is_err());
        assert!(cracker.crack_with_length(b"AB-C", 2).is_err());
        assert_eq!(3, cracker.crack_with_length(b"ABC", 3).unwrap().len());
    }

    #[test]
    fn too_short_to_crack() {
        let cracker = VigenereCracker::default();
        let texts: [&[u8]; 3] = [b"", b"A", b"ABC"];
        for text in &texts {
            match cracker.crack(text) {
                Err(CrackError::TooShort { minimum: 4, .. }) => {}
                other => panic!("unexpected {:?}", other),
            }
        }
    }
}
