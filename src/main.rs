use chrono::Local;
use failure::Error;
use log::debug;
use structopt::StructOpt;
use vigcrack::{file, Arguments, Data, Key, KeyLengthEstimator, VigenereCracker};

use std::io::prelude::*;
use std::process;

fn now() -> String {
    Local::now().format("%T").to_string()
}

fn find_key(args: &Arguments, data: &Data) -> Result<Key, Error> {
    let cracker = VigenereCracker::new(args.config(data));
    println!(
        "[{}] Attack on {} letters of ciphertext",
        now(),
        data.ciphertext.len()
    );

    if args.scores {
        let estimator =
            KeyLengthEstimator::new(&data.ciphertext, cracker.config().max_key_length);
        for (len, ic) in estimator.scores()? {
            println!("{:3}  {:.5}", len, ic);
        }
    }

    let key = match args.key_length {
        Some(len) => {
            println!("[{}] Using key length {}", now(), len);
            cracker.crack_with_length(&data.ciphertext, len)?
        }
        None => cracker.crack(&data.ciphertext)?,
    };
    Ok(key)
}

fn decipher(args: &Arguments, data: &Data, key: &Key) -> Result<(), Error> {
    debug!("deciphering");
    let plaintext = key.decrypt(&data.ciphertext)?;
    debug!("deciphered: {} bytes", plaintext.len());

    match &args.deciphered_file {
        Some(filename) => {
            let mut output = file::open_output(filename)?;
            output.write_all(&plaintext)?;
            output.write_all(b"\n")?;
            println!("Wrote deciphered text.");
        }
        None => println!("Message: {}", String::from_utf8_lossy(&plaintext)),
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Arguments = Arguments::from_args();

    let data = Data::new(&args).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(1);
    });

    let key = match &args.key {
        Some(key) => key.clone(),
        None => match find_key(&args, &data) {
            Ok(key) => {
                println!("[{}] Key: {}", now(), key);
                key
            }
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        },
    };

    decipher(&args, &data, &key).unwrap_or_else(|e| {
        eprintln!("decipher error: {}", e);
        process::exit(1);
    });
}
