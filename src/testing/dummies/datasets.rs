use crate::dataset::PairedSamples;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes `contents` to `data.csv` in a fresh temporary directory.
///
/// Keep the returned [`TempDir`] alive for as long as the file is needed.
pub fn write_dataset(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("data.csv");
    fs::write(&path, contents).expect("write dataset");
    (dir, path)
}

/// `n` samples of `y = slope * x + intercept` plus uniform noise in
/// `[-noise, noise]`, with x uniform in `[0, 100)`.
pub fn noisy_line(n: usize, slope: f64, intercept: f64, noise: f64, seed: u64) -> PairedSamples {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut samples = PairedSamples::default();
    for _ in 0..n {
        let x = rng.random_range(0.0..100.0);
        let jitter = if noise > 0.0 {
            rng.random_range(-noise..=noise)
        } else {
            0.0
        };
        samples.x.push(x);
        samples.y.push(slope * x + intercept + jitter);
    }
    samples
}
