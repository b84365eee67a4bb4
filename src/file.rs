use failure::Error;
use log::debug;
use std::fs::{self, File};
use std::io::{self, Read};

pub fn read_raw_file(filename: &str) -> Result<Vec<u8>, Error> {
    let bytes = fs::read(filename)?;
    debug!("loaded {}, size {}", filename, bytes.len());
    Ok(bytes)
}

pub fn read_stdin() -> Result<Vec<u8>, Error> {
    let mut bytes = Vec::new();
    io::stdin().read_to_end(&mut bytes)?;
    debug!("loaded stdin, size {}", bytes.len());
    Ok(bytes)
}

pub fn read_text_file(filename: &str) -> Result<String, Error> {
    Ok(fs::read_to_string(filename)?)
}

pub fn open_output(filename: &str) -> Result<File, Error> {
    Ok(File::create(filename)?)
}
