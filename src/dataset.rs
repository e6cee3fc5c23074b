//! Workload acquisition: a seeded generator for reproducible benchmarking, or
//! a raw binary file of little-endian i32 values.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};

/// Generates `len` values deterministically from `seed`. The same seed and
/// length always produce the same workload.
pub fn generate(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut data = vec![0i32; len];
    for d in &mut data {
        *d = rng.i32(..);
    }
    data
}

/// Reads exactly `len` little-endian i32 values from `path`.
///
/// A missing file or a file holding fewer than `len` values is a hard error:
/// the sort must never run over a partially populated sequence.
pub fn load(path: &Path, len: usize) -> Result<Vec<i32>> {
    let file = File::open(path)
        .with_context(|| format!("cannot open workload file {}", path.display()))?;
    let mut bytes = vec![0u8; len * 4];
    BufReader::new(file)
        .read_exact(&mut bytes)
        .with_context(|| format!("failed to read {} values from {}", len, path.display()))?;
    let data = bytes
        .as_chunks::<4>()
        .0
        .iter()
        .map(|b| i32::from_le_bytes(*b))
        .collect();
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate(1000, 42), generate(1000, 42));
        assert_ne!(generate(1000, 42), generate(1000, 43));
    }

    #[test]
    fn generated_prefix_is_stable_across_lengths() {
        let long = generate(1000, 42);
        let short = generate(100, 42);
        assert_eq!(&long[..100], &short[..]);
    }

    #[test]
    fn load_round_trips() {
        let values = generate(256, 9);
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for v in &values {
            file.write_all(&v.to_le_bytes()).unwrap();
        }
        file.flush().unwrap();
        assert_eq!(load(file.path(), values.len()).unwrap(), values);
    }

    #[test]
    fn short_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&42i32.to_le_bytes()).unwrap();
        file.flush().unwrap();
        let err = load(file.path(), 2).unwrap_err();
        assert!(err.to_string().contains("failed to read 2 values"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent.bin"), 8).unwrap_err();
        assert!(err.to_string().contains("cannot open"));
    }
}
