//! huffpack: command-line front end for the huffpack-core codec.
//!
//! Thin glue: resolve configuration, read the input file (or generate a
//! sample), run the codec, write the output, report sizes. The one
//! interactive touch is inherited from the tool this replaces: if a
//! compressed file comes out larger than its input, ask before keeping it.

mod config;
mod input_gen;

use config::{Config, Mode};
use huffpack_core::{compress, decompress, CompressionStats};
use std::io::{BufRead, Write};
use std::path::PathBuf;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("try --help");
            std::process::exit(2);
        }
    };

    if let Err(error) = run(&config) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    // Obtain the input: an existing file, or a generated sample.
    let (input_path, input_data) = match &config.input_file {
        Some(path) => (path.clone(), std::fs::read(path)?),
        None => {
            let path = PathBuf::from("sample.bin");
            let data = input_gen::write_sample_file(&path, config.seed, config.sample_bytes)?;
            println!(
                "generated {} sample bytes (seed {}) -> {}",
                data.len(),
                config.seed,
                path.display()
            );
            (path, data)
        }
    };

    let mode = config.resolve_mode(&input_path);
    let output_path = config.resolve_output(&input_path, mode);

    match mode {
        Mode::Compress => {
            let container = compress(&input_data)?;
            std::fs::write(&output_path, &container)?;
            println!("compressed {} -> {}", input_path.display(), output_path.display());

            let stats = CompressionStats::new(input_data.len() as u64, container.len() as u64);
            if config.print_stats {
                stats.print_summary("Compression");
            }

            if config.verify {
                verify_round_trip(&input_data, &container)?;
            }

            if stats.inflated() && !config.assume_yes {
                println!(
                    "output is larger than the input ({} > {} bytes)",
                    stats.output_bytes, stats.input_bytes
                );
                if !confirm("keep the compressed file anyway?")? {
                    std::fs::remove_file(&output_path)?;
                    println!("removed {}", output_path.display());
                }
            }
        }
        Mode::Decompress => {
            let decoded = decompress(&input_data)?;
            std::fs::write(&output_path, &decoded)?;
            println!("decompressed {} -> {}", input_path.display(), output_path.display());

            if config.print_stats {
                let stats = CompressionStats::new(input_data.len() as u64, decoded.len() as u64);
                stats.print_summary("Decompression");
            }
        }
    }

    Ok(())
}

/// Decompress the fresh container in memory and compare checksums with the
/// original input.
fn verify_round_trip(
    original: &[u8],
    container: &[u8],
) -> Result<(), Box<dyn std::error::Error>> {
    let restored = decompress(container)?;

    let original_crc = crc32fast::hash(original);
    let restored_crc = crc32fast::hash(&restored);

    if original_crc == restored_crc {
        println!("verification: PASSED (crc32 {original_crc:#010x})");
        Ok(())
    } else {
        Err(format!(
            "verification failed: crc32 {original_crc:#010x} != {restored_crc:#010x}"
        )
        .into())
    }
}

/// Ask a yes/no question on stdout, read the answer from stdin.
fn confirm(question: &str) -> std::io::Result<bool> {
    print!("{question} [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;

    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
}
