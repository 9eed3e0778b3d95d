//! Sample-data generation for compress runs without an input file.
//!
//! Huffman coding shines on skewed symbol distributions, so the generator
//! leans into that: most of the output is text-like data drawn from a
//! weighted alphabet, broken up by byte runs and a little uniform noise so
//! the reported compression ratio reflects mixed real-world content.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Letters weighted roughly like English text; spaces dominate, rare
/// letters trail off. Skew is what matters here, not linguistic accuracy.
const WEIGHTED_ALPHABET: &[(u8, u32)] = &[
    (b' ', 18),
    (b'e', 12),
    (b't', 9),
    (b'a', 8),
    (b'o', 8),
    (b'i', 7),
    (b'n', 7),
    (b's', 6),
    (b'h', 6),
    (b'r', 6),
    (b'd', 4),
    (b'l', 4),
    (b'u', 3),
    (b'c', 3),
    (b'm', 2),
    (b'.', 1),
    (b'\n', 1),
];

/// Generate `size_bytes` of deterministic sample data for `seed`.
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    while data.len() < size_bytes {
        let section = (size_bytes - data.len()).min(rng.gen_range(512..=4096));
        match rng.gen_range(0u8..10) {
            // 60% weighted text
            0..=5 => push_weighted_text(&mut rng, &mut data, section),
            // 25% runs of a single byte
            6..=8 => {
                let value: u8 = rng.gen();
                data.extend(std::iter::repeat(value).take(section));
            }
            // 15% uniform noise
            _ => data.extend((0..section).map(|_| rng.gen::<u8>())),
        }
    }

    data.truncate(size_bytes);
    data
}

fn push_weighted_text(rng: &mut ChaCha8Rng, data: &mut Vec<u8>, count: usize) {
    let total: u32 = WEIGHTED_ALPHABET.iter().map(|&(_, w)| w).sum();
    for _ in 0..count {
        let mut pick = rng.gen_range(0..total);
        for &(byte, weight) in WEIGHTED_ALPHABET {
            if pick < weight {
                data.push(byte);
                break;
            }
            pick -= weight;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_size() {
        for size in [0, 1, 100, 1000, 100_000] {
            assert_eq!(generate_sample_data(9, size).len(), size);
        }
    }

    #[test]
    fn deterministic_per_seed() {
        assert_eq!(generate_sample_data(42, 5000), generate_sample_data(42, 5000));
        assert_ne!(generate_sample_data(1, 5000), generate_sample_data(2, 5000));
    }

    #[test]
    fn output_is_skewed_enough_to_compress() {
        let data = generate_sample_data(7, 32 * 1024);
        let artifact = huffpress_core::compress(&data).unwrap();
        assert!(artifact.len() < data.len());
    }
}
