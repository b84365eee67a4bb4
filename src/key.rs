use crate::alphabet::{self, SIZE};
use crate::error::CrackError;
use std::fmt;
use std::str::FromStr;

/// Vigenere key: a non-empty sequence of letters, each letter giving the
/// shift of the positions congruent to its offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    letters: Vec<u8>,
}

impl Key {
    pub fn new(letters: Vec<u8>) -> Result<Key, CrackError> {
        if letters.is_empty() {
            return Err(CrackError::InvalidKey {
                reason: "key is empty".into(),
            });
        }
        alphabet::validate(&letters).map_err(|e| CrackError::InvalidKey {
            reason: e.to_string(),
        })?;
        Ok(Key { letters })
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    fn shift(&self, i: usize) -> usize {
        alphabet::index(self.letters[i % self.letters.len()])
    }

    /// Add the key shift of each position, cycling through the key.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, CrackError> {
        alphabet::validate(plaintext)?;
        Ok(plaintext
            .iter()
            .enumerate()
            .map(|(i, &b)| alphabet::letter(alphabet::index(b) + self.shift(i)))
            .collect())
    }

    /// Subtract the key shift of each position, cycling through the key.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, CrackError> {
        alphabet::validate(ciphertext)?;
        Ok(ciphertext
            .iter()
            .enumerate()
            .map(|(i, &b)| alphabet::letter(alphabet::index(b) + SIZE - self.shift(i)))
            .collect())
    }
}

impl FromStr for Key {
    type Err = CrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::new(s.trim().to_ascii_uppercase().into_bytes())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // letters are ASCII, checked in new
        write!(f, "{}", String::from_utf8_lossy(&self.letters))
    }
}

#[cfg(test)]
mod tests {
    use super::Key;
    use crate::error::CrackError;

    #[test]
    fn encrypt_known_vector() {
        let key: Key = "LEMON".parse().unwrap();
        assert_eq!(Ok(b"LXFOPVEFRNHR".to_vec()), key.encrypt(b"ATTACKATDAWN"));
        assert_eq!(Ok(b"ATTACKATDAWN".to_vec()), key.decrypt(b"LXFOPVEFRNHR"));
    }

    #[test]
    fn decrypt_inverts_encrypt() {
        let plain = b"THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";
        for k in &["A", "Z", "KEY", "abc", "VIGENERE", "QWERTYUIOPASDFGHJKLZXCVBNMQWERTYUIOPLKJ"] {
            let key: Key = k.parse().unwrap();
            let cipher = key.encrypt(plain).unwrap();
            assert_eq!(plain.to_vec(), key.decrypt(&cipher).unwrap());
        }
    }

    #[test]
    fn key_a_is_identity() {
        let key: Key = "AAA".parse().unwrap();
        assert_eq!(b"HELLO".to_vec(), key.decrypt(b"HELLO").unwrap());
    }

    #[test]
    fn rejects_foreign_symbols() {
        let key: Key = "KEY".parse().unwrap();
        assert_eq!(
            Err(CrackError::InvalidSymbol {
                symbol: '1',
                position: 0
            }),
            key.encrypt(b"1")
        );
        assert!(key.encrypt(b"hello").is_err());
        assert!(key.decrypt(b"AB@").is_err());
    }

    #[test]
    fn parse_and_display() {
        let key: Key = " secret\n".parse().unwrap();
        assert_eq!("SECRET", key.to_string());
        assert_eq!(6, key.len());
        assert!("".parse::<Key>().is_err());
        assert!("KEY1".parse::<Key>().is_err());
        assert!(Key::new(vec![]).is_err());
    }
}
