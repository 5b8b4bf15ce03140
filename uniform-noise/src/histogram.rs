//! Uniformity diagnostics for corrected noise.
//!
//! The correction curves are only as good as their fit, so these helpers
//! measure how far a set of samples is from uniform over `[0, 1]`.

/// Equal-width histogram over `[0, 1]`.
///
/// Values outside the range (and NaN) are counted in the nearest end bin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<u64>,
    total: u64,
}

impl Histogram {
    /// Create an empty histogram. Zero bins is treated as one.
    #[must_use]
    pub fn new(bins: usize) -> Self {
        Self {
            counts: vec![0; bins.max(1)],
            total: 0,
        }
    }

    /// Count one value.
    pub fn record(&mut self, value: f32) {
        let bins = self.counts.len();
        // `as usize` saturates negatives and NaN to zero.
        let index = ((value * bins as f32) as usize).min(bins - 1);
        self.counts[index] += 1;
        self.total += 1;
    }

    /// Per-bin counts, lowest bin first.
    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Number of recorded values.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Pearson's chi-square statistic against a uniform distribution.
    ///
    /// Compare against the chi-square distribution with `bins - 1` degrees of
    /// freedom. Returns `0.0` for an empty histogram.
    #[must_use]
    pub fn chi_square_uniform(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let expected = self.total as f64 / self.counts.len() as f64;
        self.counts
            .iter()
            .map(|&count| {
                let diff = count as f64 - expected;
                diff * diff / expected
            })
            .sum()
    }

    /// Largest `|count / expected - 1|` over all bins.
    #[must_use]
    pub fn max_relative_deviation(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let expected = self.total as f64 / self.counts.len() as f64;
        self.counts
            .iter()
            .map(|&count| (count as f64 / expected - 1.0).abs())
            .fold(0.0, f64::max)
    }
}

impl Extend<f32> for Histogram {
    fn extend<I: IntoIterator<Item = f32>>(&mut self, iter: I) {
        for value in iter {
            self.record(value);
        }
    }
}

/// Kolmogorov-Smirnov statistic of `samples` against uniform `[0, 1]`.
///
/// Sorts `samples` in place. Returns `0.0` for an empty slice.
#[must_use]
pub fn ks_statistic_uniform(samples: &mut [f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.sort_by(f32::total_cmp);

    let n = samples.len() as f64;
    let mut max = 0.0_f64;
    for (i, &value) in samples.iter().enumerate() {
        let value = f64::from(value);
        let above = (i + 1) as f64 / n - value;
        let below = value - i as f64 / n;
        max = max.max(above).max(below);
    }
    max as f32
}
