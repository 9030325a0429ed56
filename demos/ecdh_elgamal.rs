//! ECDH key agreement followed by ElGamal encryption of one message.
//!
//! Usage: `cargo run --example ecdh_elgamal --features serde [scenario.toml]`
//!
//! Without an argument the textbook scenario on toy-p17 is used.

use std::{env, fs, process};

use toycurve::params::TOY_P17;
use toycurve::pke::{run_exchange, ExchangeInput, ExchangeTranscript};

fn load_input() -> Result<ExchangeInput, Box<dyn std::error::Error>> {
    match env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)?;
            Ok(toml::from_str(&text)?)
        }
        None => Ok(ExchangeInput::from_constants(&TOY_P17, 3, 5, 5)),
    }
}

fn print_transcript(transcript: &ExchangeTranscript) {
    println!("Curve: {}", transcript.curve);
    println!("Generator G = {}", transcript.generator);

    let points: Vec<String> = transcript.curve_points.iter().map(|p| p.to_string()).collect();
    println!("Points on the curve ({}):", points.len());
    println!("{}", points.join(" "));

    println!("dA·G = {}", transcript.public_a);
    println!("dB·G = {}", transcript.public_b);
    println!("Shared secret computed by A: {}", transcript.shared_a);
    println!("Shared secret computed by B: {}", transcript.shared_b);

    println!(
        "M = {}, h = {}",
        transcript.encoding.bound, transcript.encoding.slots
    );
    println!("Qm = {}", transcript.encoded_message);
    println!("Ciphertext = {}", transcript.ciphertext);
}

fn main() {
    let input = match load_input() {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Invalid scenario: {}", e);
            process::exit(2);
        }
    };

    match run_exchange(&input) {
        Ok(transcript) => print_transcript(&transcript),
        Err(e) => {
            eprintln!("Exchange failed: {}", e);
            process::exit(1);
        }
    }
}
