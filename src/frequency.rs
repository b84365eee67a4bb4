use crate::alphabet::SIZE;
use crate::error::CrackError;
use std::str::FromStr;

/// Relative letter frequencies of English text, A to Z.
pub const ENGLISH_FREQUENCIES: [f64; SIZE] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12702, 0.02228, 0.02015, 0.06094, 0.06966, 0.00153,
    0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056,
    0.02758, 0.00978, 0.02360, 0.00150, 0.01974, 0.00074,
];

// accepted distance of the table sum from 1.0
const SUM_TOLERANCE: f64 = 0.05;

const ENGLISH: FrequencyTable = FrequencyTable {
    values: ENGLISH_FREQUENCIES,
};

/// Expected relative frequency of each letter in the plaintext language
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    values: [f64; SIZE],
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::english()
    }
}

impl FrequencyTable {
    pub fn new(values: [f64; SIZE]) -> Result<FrequencyTable, CrackError> {
        if let Some(i) = values.iter().position(|v| !v.is_finite() || *v <= 0.0) {
            return Err(CrackError::InvalidFrequencyTable {
                reason: format!("entry {} is {}, must be positive", i, values[i]),
            });
        }
        let sum: f64 = values.iter().sum();
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(CrackError::InvalidFrequencyTable {
                reason: format!("entries sum to {}", sum),
            });
        }
        Ok(FrequencyTable { values })
    }

    pub fn english() -> FrequencyTable {
        ENGLISH
    }

    /// every letter equally likely
    pub fn uniform() -> FrequencyTable {
        FrequencyTable {
            values: [1.0 / SIZE as f64; SIZE],
        }
    }

    #[inline]
    pub fn get(&self, i: usize) -> f64 {
        self.values[i]
    }

    pub fn values(&self) -> &[f64; SIZE] {
        &self.values
    }
}

/// Parse 26 whitespace separated numbers. Lines starting with `#` are ignored.
impl FromStr for FrequencyTable {
    type Err = CrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let numbers = s
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .flat_map(str::split_whitespace)
            .map(|word| {
                word.parse::<f64>()
                    .map_err(|e| CrackError::InvalidFrequencyTable {
                        reason: format!("{:?}: {}", word, e),
                    })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        if numbers.len() != SIZE {
            return Err(CrackError::InvalidFrequencyTable {
                reason: format!("expected {} entries, found {}", SIZE, numbers.len()),
            });
        }
        let mut values = [0.0; SIZE];
        values.copy_from_slice(&numbers);
        FrequencyTable::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_sums_to_one() {
        let sum: f64 = FrequencyTable::english().values().iter().sum();
        assert!((sum - 1.0).abs() < 1e-3);
        assert_eq!(0.12702, FrequencyTable::default().get(4));
    }

    #[test]
    fn rejects_bad_tables() {
        let mut values = ENGLISH_FREQUENCIES;
        values[25] = 0.0;
        assert!(FrequencyTable::new(values).is_err());
        assert!(FrequencyTable::new([0.5; SIZE]).is_err());
        assert!(FrequencyTable::new([1.0 / 26.0; SIZE]).is_ok());
    }

    #[test]
    fn parse() {
        let text = format!("# uniform\n{}\n", vec!["0.0384615"; SIZE].join(" "));
        let table: FrequencyTable = text.parse().unwrap();
        assert!((table.get(0) - 0.0384615).abs() < 1e-12);

        assert!("0.5 0.5".parse::<FrequencyTable>().is_err());
        assert!(vec!["x"; SIZE].join(" ").parse::<FrequencyTable>().is_err());
    }
}
