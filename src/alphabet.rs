use crate::error::CrackError;

pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const SIZE: usize = 26;

/// position of an uppercase letter in the alphabet; `symbol` must be in `A..=Z`
#[inline]
pub fn index(symbol: u8) -> usize {
    debug_assert!(is_symbol(symbol), "not an alphabet symbol: {:?}", symbol as char);
    (symbol - b'A') as usize
}

/// letter at position `i` (taken mod 26)
#[inline]
pub fn letter(i: usize) -> u8 {
    ALPHABET[i % SIZE]
}

pub fn is_symbol(b: u8) -> bool {
    b.is_ascii_uppercase()
}

/// Check that every byte of `text` is an alphabet symbol.
pub fn validate(text: &[u8]) -> Result<(), CrackError> {
    match text.iter().position(|&b| !is_symbol(b)) {
        Some(position) => Err(CrackError::InvalidSymbol {
            symbol: text[position] as char,
            position,
        }),
        None => Ok(()),
    }
}

/// Count occurrences of each letter, index-aligned with the alphabet.
pub fn counts(text: &[u8]) -> [usize; SIZE] {
    let mut counts = [0; SIZE];
    for &b in text {
        counts[index(b)] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_letter() {
        assert_eq!(0, index(b'A'));
        assert_eq!(25, index(b'Z'));
        assert_eq!(b'C', letter(2));
        assert_eq!(b'B', letter(27));
    }

    #[test]
    fn validate_rejects_foreign_symbols() {
        assert!(validate(b"HELLOWORLD").is_ok());
        match validate(b"HELLO WORLD") {
            Err(CrackError::InvalidSymbol { symbol, position }) => {
                assert_eq!(' ', symbol);
                assert_eq!(5, position);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(validate(b"lower").is_err());
    }

    #[test]
    fn counts_letters() {
        let c = counts(b"ABBZZZ");
        assert_eq!(1, c[0]);
        assert_eq!(2, c[1]);
        assert_eq!(3, c[25]);
        assert_eq!(6, c.iter().sum::<usize>());
    }
}
