// Chi-square goodness-of-fit checks. These are soft properties: the
// thresholds sit far beyond the 0.1% critical values so only real bias fails.

use fair_range::{HashChainSource, RangeGenerator, SecureByteSource};

fn chi_square<S: SecureByteSource + ?Sized>(
    rng: &RangeGenerator<'_, S>,
    max: i32,
    draws: usize,
) -> f64 {
    let mut counts = vec![0usize; max as usize];
    for _ in 0..draws {
        counts[rng.bounded_int31(max).unwrap() as usize] += 1;
    }

    let expected = draws as f64 / max as f64;
    counts
        .iter()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

#[test]
fn test_uniformity_deterministic_stream() {
    let source = HashChainSource::new(b"uniformity");
    let rng = RangeGenerator::with_source(&source);

    // 9 degrees of freedom, p = 0.001 critical value is 27.88
    let statistic = chi_square(&rng, 10, 100_000);
    assert!(statistic < 40.0, "chi-square {} too large", statistic);
}

#[test]
fn test_uniformity_with_rejection() {
    // max = 3 on one byte rejects 2 of 128 values; a naive modulo would
    // favour 0 and 1
    let source = HashChainSource::new(b"rejection");
    let rng = RangeGenerator::with_source(&source);

    // 2 degrees of freedom, p = 0.001 critical value is 13.82
    let statistic = chi_square(&rng, 3, 90_000);
    assert!(statistic < 22.0, "chi-square {} too large", statistic);
}

#[test]
fn test_uniformity_os_source() {
    let rng = RangeGenerator::new();

    // 5 degrees of freedom, p = 0.001 critical value is 20.52
    let statistic = chi_square(&rng, 6, 60_000);
    assert!(statistic < 35.0, "chi-square {} too large", statistic);
}
