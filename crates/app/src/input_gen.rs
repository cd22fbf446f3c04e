//! Sample input generation for demo runs.
//!
//! When no input file is specified, we generate data whose byte histogram
//! is deliberately uneven, so the code lengths (and the size summary) have
//! something to show. Everything is driven by a seeded RNG: the same seed
//! reproduces the same input byte for byte.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::Write;

/// Generate sample data with a skewed byte distribution.
///
/// The output alternates between three section kinds:
/// - runs of a single byte (near-degenerate histogram)
/// - text-like sections drawn from a small alphabet with a hot subset
/// - occasional uniform-random sections that resist coding
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    while data.len() < size_bytes {
        let section = (size_bytes - data.len()).min(rng.gen_range(512..=4096));

        match rng.gen_range(0..10u8) {
            // 40% single-byte runs
            0..=3 => {
                let byte: u8 = rng.gen();
                data.extend(std::iter::repeat(byte).take(section));
            }

            // 40% text-like, with the first few alphabet bytes heavily favored
            4..=7 => {
                let alphabet = b"etaoin shrdlucmfwypvbgkqjxz.,!\n";
                for _ in 0..section {
                    let idx = if rng.gen_bool(0.7) {
                        rng.gen_range(0..8)
                    } else {
                        rng.gen_range(0..alphabet.len())
                    };
                    data.push(alphabet[idx]);
                }
            }

            // 20% incompressible noise
            _ => {
                for _ in 0..section {
                    data.push(rng.gen());
                }
            }
        }
    }

    data.truncate(size_bytes);
    data
}

/// Generate sample data and write it to a file.
pub fn write_sample_file(
    path: &std::path::Path,
    seed: u64,
    size_bytes: usize,
) -> std::io::Result<Vec<u8>> {
    let data = generate_sample_data(seed, size_bytes);
    let mut file = std::fs::File::create(path)?;
    file.write_all(&data)?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_size() {
        for size in [0, 1, 513, 10_000, 100_000] {
            assert_eq!(generate_sample_data(7, size).len(), size);
        }
    }

    #[test]
    fn test_determinism() {
        assert_eq!(
            generate_sample_data(12345, 20_000),
            generate_sample_data(12345, 20_000)
        );
    }

    #[test]
    fn test_seeds_differ() {
        assert_ne!(
            generate_sample_data(1, 10_000),
            generate_sample_data(2, 10_000)
        );
    }

    #[test]
    fn test_histogram_is_skewed() {
        // Sample data should compress, which requires an uneven histogram.
        let data = generate_sample_data(42, 50_000);
        let mut counts = [0u32; 256];
        for &b in &data {
            counts[b as usize] += 1;
        }
        let max = counts.iter().max().copied().unwrap();
        assert!(max > (data.len() / 64) as u32);
    }
}
