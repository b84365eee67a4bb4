use crate::file::*;
use crate::frequency::FrequencyTable;
use crate::Arguments;
use failure::{format_err, Error};
use log::debug;

/// Inputs of one run, loaded and normalized from the command line arguments
#[derive(Debug, Clone)]
pub struct Data {
    pub ciphertext: Vec<u8>,
    pub frequencies: FrequencyTable,
}

/// Keep the ASCII letters of `raw`, uppercased.
pub fn normalize(raw: &[u8]) -> Vec<u8> {
    raw.iter()
        .filter(|b| b.is_ascii_alphabetic())
        .map(u8::to_ascii_uppercase)
        .collect()
}

impl Data {
    pub fn new(args: &Arguments) -> Result<Data, Error> {
        let ciphertext = Self::load_cipher(args)?;
        let frequencies = Self::load_frequencies(args)?;
        Ok(Data {
            ciphertext,
            frequencies,
        })
    }

    /// load ciphertext from the file or stdin, letters only
    fn load_cipher(args: &Arguments) -> Result<Vec<u8>, Error> {
        let raw = match &args.cipher_file {
            Some(filename) => read_raw_file(filename)?,
            None => read_stdin()?,
        };
        let ciphertext = normalize(&raw);
        debug!(
            "normalized ciphertext: {} of {} bytes kept",
            ciphertext.len(),
            raw.len()
        );

        if ciphertext.is_empty() {
            return Err(format_err!("ciphertext contains no letters"));
        }
        Ok(ciphertext)
    }

    fn load_frequencies(args: &Arguments) -> Result<FrequencyTable, Error> {
        match &args.frequency_file {
            Some(filename) => {
                let table = read_text_file(filename)?.parse::<FrequencyTable>()?;
                debug!("loaded frequency table {}", filename);
                Ok(table)
            }
            None => Ok(FrequencyTable::english()),
        }
    }
}
