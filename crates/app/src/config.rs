//! Configuration for the huffpress command-line tool.
//!
//! Parses command-line arguments by hand and fills in sensible defaults.
//! With no input file in compress mode, the tool generates a deterministic
//! sample file from a seed, so a bare `huffpress --compress` always has
//! something interesting to chew on.

use std::path::PathBuf;

/// Which direction the coder runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Expand,
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Compress or expand
    pub mode: Mode,

    /// Input file path (None = generate sample data, compress mode only)
    pub input_file: Option<PathBuf>,

    /// Output file path
    pub output_file: PathBuf,

    /// Seed for sample-data generation
    pub seed: u64,

    /// Size of generated sample data in bytes
    pub sample_bytes: usize,

    /// Whether to print the stats summary
    pub print_stats: bool,
}

impl Config {
    /// Parse configuration from command-line arguments.
    ///
    /// A mode flag is required. Expand mode also requires `--in`, since
    /// there is no sensible artifact to invent.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut mode: Option<Mode> = None;
        let mut input_file: Option<PathBuf> = None;
        let mut output_file: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut sample_bytes: Option<usize> = None;
        let mut print_stats = true;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--compress" => {
                    mode = Some(Mode::Compress);
                }
                "--expand" => {
                    mode = Some(Mode::Expand);
                }
                "--in" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--in requires a path".to_string());
                    }
                    input_file = Some(PathBuf::from(&args[i]));
                }
                "--out" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--out requires a path".to_string());
                    }
                    output_file = Some(PathBuf::from(&args[i]));
                }
                "--seed" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--seed requires a number".to_string());
                    }
                    seed = Some(args[i].parse().map_err(|_| "invalid seed")?);
                }
                "--sample-bytes" => {
                    i += 1;
                    if i >= args.len() {
                        return Err("--sample-bytes requires a number".to_string());
                    }
                    sample_bytes = Some(args[i].parse().map_err(|_| "invalid sample-bytes")?);
                }
                "--no-stats" => {
                    print_stats = false;
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(0);
                }
                _ => {
                    return Err(format!("unknown argument: {}", args[i]));
                }
            }
            i += 1;
        }

        let mode = mode.ok_or("one of --compress or --expand is required")?;

        if mode == Mode::Expand && input_file.is_none() {
            return Err("--expand requires --in <PATH>".to_string());
        }

        // Seed defaults to wall-clock time so unseeded runs differ
        let seed = seed.unwrap_or_else(|| {
            use std::time::{SystemTime, UNIX_EPOCH};
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|t| t.as_millis() as u64)
                .unwrap_or(0)
        });

        let output_file = output_file.unwrap_or_else(|| match mode {
            Mode::Compress => PathBuf::from("./out.hp"),
            Mode::Expand => PathBuf::from("./out.bin"),
        });

        Ok(Config {
            mode,
            input_file,
            output_file,
            seed,
            sample_bytes: sample_bytes.unwrap_or(65536),
            print_stats,
        })
    }
}

fn print_help() {
    println!("huffpress: static Huffman compressor/decompressor");
    println!();
    println!("USAGE:");
    println!("    huffpress --compress [OPTIONS]");
    println!("    huffpress --expand --in <PATH> [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --compress              Compress input into an artifact");
    println!("    --expand                Expand an artifact back to the original bytes");
    println!();
    println!("    --in <PATH>             Input file (compress default: generate sample)");
    println!("    --out <PATH>            Output file (default: ./out.hp or ./out.bin)");
    println!();
    println!("    --seed <N>              Seed for sample generation (default: time-based)");
    println!("    --sample-bytes <N>      Generated sample size (default: 65536)");
    println!();
    println!("    --no-stats              Don't print the stats summary");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffpress --compress --seed 42            # compress a deterministic sample");
    println!("    huffpress --compress --in book.txt --out book.hp");
    println!("    huffpress --expand --in book.hp --out book.txt");
    println!();
}
