//! Big-space birthday attack CLI
//!
//! Usage: trunchash_bigspace [options]
//!
//! Options:
//!   -b, --bit-length <N>    Truncated hash width in bits (default: 40)
//!   -a, --attempts <N>      Attempt budget (default: 1200000)
//!   -l, --input-length <N>  Length of random input strings (default: 10)
//!   --help, -h              Show help
//!
//! Example: trunchash_bigspace -b 24 -a 100000

use std::env;
use std::time::Instant;
use trunchash_attack::AttackConfig;
use trunchash_attack::app::bigspace;
use trunchash_attack::constants::{
    DEFAULT_BIT_LENGTH, DEFAULT_INPUT_LENGTH, DEFAULT_MAX_ATTEMPTS,
};

struct Args {
    bit_length: u32,
    attempts: u64,
    input_length: usize,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!(
        "  -b, --bit-length <N>    Truncated hash width in bits (default: {})",
        DEFAULT_BIT_LENGTH
    );
    eprintln!(
        "  -a, --attempts <N>      Attempt budget (default: {})",
        DEFAULT_MAX_ATTEMPTS
    );
    eprintln!(
        "  -l, --input-length <N>  Length of random input strings (default: {})",
        DEFAULT_INPUT_LENGTH
    );
    eprintln!("  --help, -h              Show this help message");
}

fn take_value<T: std::str::FromStr>(args: &[String], i: &mut usize, name: &str) -> Result<T, String> {
    *i += 1;
    let raw = args
        .get(*i)
        .ok_or_else(|| format!("{} requires a value", name))?;
    raw.parse()
        .map_err(|_| format!("Invalid value for {}: {}", name, raw))
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut bit_length = DEFAULT_BIT_LENGTH;
    let mut attempts = DEFAULT_MAX_ATTEMPTS;
    let mut input_length = DEFAULT_INPUT_LENGTH;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-b" | "--bit-length" => bit_length = take_value(&args, &mut i, "--bit-length")?,
            "-a" | "--attempts" => attempts = take_value(&args, &mut i, "--attempts")?,
            "-l" | "--input-length" => input_length = take_value(&args, &mut i, "--input-length")?,
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(Args {
        bit_length,
        attempts,
        input_length,
    })
}

fn main() {
    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    let config = match AttackConfig::new(args.bit_length, args.attempts, args.input_length) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Attempting a birthday attack on a {}-bit hash...",
        config.bit_length()
    );
    println!(
        "Using {} attempts with random strings of length {}.",
        config.max_attempts(),
        config.input_length()
    );

    let start = Instant::now();
    let mut rng = rand::thread_rng();
    let outcome = bigspace::search(&config, &mut rng);
    let elapsed = start.elapsed();

    match outcome {
        Some(collision) => {
            println!("Collision found!");
            println!("String 1: {}", collision.first);
            println!("String 2: {}", collision.second);
            println!("Hash: {}", collision.digest.to_hex());
        }
        None => {
            println!("No collision found within the attempt limit.");
        }
    }

    println!("Search completed in {:.2} seconds.", elapsed.as_secs_f64());
}
