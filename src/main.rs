//! `trsa [MESSAGE] [P Q]`
//!
//! Encrypts and decrypts one message with keys derived from the given
//! primes, or the built-in sample primes and message.

use std::process::ExitCode;

use trsa::api::Error as CoreError;
use trsa::session::{self, SessionError};

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(SessionError::Rsa(err @ CoreError::MessageTooLarge { .. })) => {
            eprintln!("error: {}", err);
            eprintln!("the encoded message must have fewer decimal digits than the modulus");
            ExitCode::FAILURE
        },
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}

fn try_main() -> session::Result<()> {
    let (config, plaintext) = session::parse_args(std::env::args().skip(1))?;
    let report = session::run(&config, &plaintext)?;

    println!("Plaintext:   {}", report.plaintext);
    println!("Encoded:     {}", report.message);
    println!(
        "Public key:  (e = {}, n = {})",
        report.public_key.exponent(),
        report.public_key.modulus()
    );
    println!(
        "Private key: (d = {}, n = {})",
        report.private_key.exponent(),
        report.private_key.modulus()
    );
    println!("Ciphertext:  {}", report.ciphertext);
    println!("Decrypted:   {}", report.recovered);
    println!(
        "Strategy:    {} / {}, bound {}",
        report.strategy.0, report.strategy.1, report.bound
    );

    Ok(())
}
