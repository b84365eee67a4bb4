extern crate structopt;

use structopt::StructOpt;

pub use crate::caesar::CaesarBreaker;
pub use crate::cracker::{CrackerConfig, VigenereCracker};
pub use crate::data::Data;
pub use crate::error::CrackError;
pub use crate::frequency::FrequencyTable;
pub use crate::key::Key;
pub use crate::key_length::KeyLengthEstimator;

mod cracker;
mod data;
mod error;
mod key;

pub mod alphabet;
pub mod caesar;
pub mod file;
pub mod frequency;
pub mod key_length;
pub mod stats;

#[derive(StructOpt, Debug)]
#[structopt(name = "vigcrack")]
pub struct Arguments {
    /// File containing the ciphertext (read from stdin if omitted)
    #[structopt(short = "c")]
    pub cipher_file: Option<String>,

    /// Exclusive upper bound of the key lengths to try
    #[structopt(short = "m", default_value = "8")]
    pub max_key_length: usize,

    /// Key length to use instead of estimating it
    #[structopt(short = "l")]
    pub key_length: Option<usize>,

    /// Known key, only decipher
    #[structopt(short = "k")]
    pub key: Option<Key>,

    /// File with the 26 expected letter frequencies of the plaintext language
    #[structopt(short = "f")]
    pub frequency_file: Option<String>,

    /// File to write the deciphered text
    #[structopt(short = "d")]
    pub deciphered_file: Option<String>,

    /// Print the average index of coincidence of every trial key length
    #[structopt(short = "s")]
    pub scores: bool,
}

impl Arguments {
    pub fn config(&self, data: &Data) -> CrackerConfig {
        CrackerConfig::default()
            .with_max_key_length(self.max_key_length)
            .with_frequencies(data.frequencies.clone())
    }
}
