use failure::Fail;

#[derive(Debug, Fail, PartialEq)]
pub enum CrackError {
    #[fail(display = "invalid symbol {:?} at position {}", symbol, position)]
    InvalidSymbol { symbol: char, position: usize },

    #[fail(
        display = "ciphertext is too short: {} letters, need at least {}",
        length, minimum
    )]
    TooShort { length: usize, minimum: usize },

    #[fail(display = "subsequence of {} letters is too short to score", length)]
    DegenerateSubsequence { length: usize },

    #[fail(display = "invalid frequency table: {}", reason)]
    InvalidFrequencyTable { reason: String },

    #[fail(display = "invalid configuration: {}", reason)]
    InvalidConfig { reason: String },

    #[fail(display = "invalid key: {}", reason)]
    InvalidKey { reason: String },
}
