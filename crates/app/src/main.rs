//! huffpress CLI: the byte-stream collaborator around the core coder.
//!
//! Reads a whole input file (or generates sample data), runs `compress` or
//! `expand`, writes the whole output file, and prints a small stats
//! summary. All coding logic lives in `huffpress-core`; this binary only
//! does argument handling and file I/O.

mod config;
mod input_gen;

use std::fs;

use config::{Config, Mode};
use huffpress_core::freq::FrequencyTable;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("huffpress: {message}");
            eprintln!("huffpress: try --help");
            std::process::exit(2);
        }
    };

    if let Err(error) = run(&config) {
        eprintln!("huffpress: {error}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match config.mode {
        Mode::Compress => {
            let input = match &config.input_file {
                Some(path) => fs::read(path)?,
                None => {
                    println!(
                        "no input file; generating {} sample bytes (seed {})",
                        config.sample_bytes, config.seed
                    );
                    input_gen::generate_sample_data(config.seed, config.sample_bytes)
                }
            };

            let artifact = huffpress_core::compress(&input)?;
            fs::write(&config.output_file, &artifact)?;

            if config.print_stats {
                print_compress_stats(&input, &artifact);
            }
        }
        Mode::Expand => {
            // config parsing guarantees an input path in expand mode
            let path = config.input_file.as_ref().expect("expand mode has --in");
            let artifact = fs::read(path)?;

            let output = huffpress_core::expand(&artifact)?;
            fs::write(&config.output_file, &output)?;

            if config.print_stats {
                print_expand_stats(&artifact, &output);
            }
        }
    }

    println!("wrote {}", config.output_file.display());
    Ok(())
}

fn print_compress_stats(input: &[u8], artifact: &[u8]) {
    let freqs = FrequencyTable::from_bytes(input);
    let ratio = artifact.len() as f64 / input.len() as f64;

    println!("=== Compression ===");
    println!("Input:            {} bytes", input.len());
    println!("Artifact:         {} bytes", artifact.len());
    println!("Distinct symbols: {}", freqs.distinct_symbols());
    println!("Ratio:            {:.3} ({:.1}% saved)", ratio, (1.0 - ratio) * 100.0);
}

fn print_expand_stats(artifact: &[u8], output: &[u8]) {
    println!("=== Expansion ===");
    println!("Artifact: {} bytes", artifact.len());
    println!("Output:   {} bytes", output.len());
}
