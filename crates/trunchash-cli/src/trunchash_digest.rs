//! SHA-256 digest CLI
//!
//! Usage: trunchash_digest <string>
//!
//! Prints the full 64-digit hex digest of the argument string.

use std::env;
use trunchash_attack::sha256;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!(
            "Usage: {} <string>",
            args.first().map(String::as_str).unwrap_or("trunchash_digest")
        );
        std::process::exit(1);
    }

    let digest = sha256(args[1].as_bytes());
    println!("The SHA-256 digest of '{}' is:", args[1]);
    println!("{}", hex::encode(digest));
}
