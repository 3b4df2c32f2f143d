//! Small-space birthday attack CLI
//!
//! Usage: trunchash_smallspace [options]
//!
//! Options:
//!   -b, --bit-length <N>  Truncated hash width in bits (default: 40, multiple of 4)
//!   -a, --attempts <N>    Attempt budget (default: 1200000)
//!   --help, -h            Show help
//!
//! Example: trunchash_smallspace -b 24

use std::env;
use std::time::Instant;
use trunchash_attack::app::smallspace;
use trunchash_attack::constants::{
    DEFAULT_BIT_LENGTH, DEFAULT_INPUT_LENGTH, DEFAULT_MAX_ATTEMPTS,
};
use trunchash_attack::{AttackConfig, DomainElement};

struct Args {
    bit_length: u32,
    attempts: u64,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [options]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!(
        "  -b, --bit-length <N>  Truncated hash width in bits (default: {}, multiple of 4)",
        DEFAULT_BIT_LENGTH
    );
    eprintln!(
        "  -a, --attempts <N>    Attempt budget (default: {})",
        DEFAULT_MAX_ATTEMPTS
    );
    eprintln!("  --help, -h            Show this help message");
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

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-b" | "--bit-length" => bit_length = take_value(&args, &mut i, "--bit-length")?,
            "-a" | "--attempts" => attempts = take_value(&args, &mut i, "--attempts")?,
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

    // input_length is unused by the small-space strategy; the default
    // keeps the configuration valid.
    let config = match AttackConfig::new(args.bit_length, args.attempts, DEFAULT_INPUT_LENGTH) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = config.require_nibble_aligned() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!(
        "Attempting a small-space birthday attack on a {}-bit hash...",
        config.bit_length()
    );
    println!("Using at most {} self-map steps.", config.max_attempts());

    let mut rng = rand::thread_rng();
    let initial = DomainElement::random(config.bit_length(), &mut rng);
    println!("Initial element: {}", initial.to_hex());

    let start = Instant::now();
    let outcome = smallspace::search_from(&initial, &config);
    let elapsed = start.elapsed();

    match outcome {
        Ok(Some(collision)) => {
            println!(
                "Pointers met after {} of {} steps.",
                collision.meeting_steps,
                config.max_attempts()
            );
            println!("Collision found!");
            println!("Element 1: {}", collision.left.to_hex());
            println!("Element 2: {}", collision.right.to_hex());
            println!("Hash: {}", collision.image.to_hex());
        }
        Ok(None) => {
            println!("No collision found within the attempt limit.");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    println!("Search completed in {:.2} seconds.", elapsed.as_secs_f64());
}
