/// Workload sizing handed to every driver invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Number of seeding rounds. Each round adds three records, and the
    /// middle index used by list tests is `count / 2`.
    pub count: usize,

    /// Order-inspection tests print up to `sample + 1` entries.
    pub sample: usize,
}

impl BenchConfig {
    pub const DEFAULT_COUNT: usize = 1_000_000;
    pub const DEFAULT_SAMPLE: usize = 20;

    pub const fn new(count: usize, sample: usize) -> BenchConfig {
        BenchConfig { count, sample }
    }

    pub const fn seed_volume(&self) -> usize {
        self.count.saturating_mul(3)
    }

    pub const fn middle(&self) -> usize {
        self.count / 2
    }
}

impl Default for BenchConfig {
    fn default() -> BenchConfig {
        BenchConfig::new(BenchConfig::DEFAULT_COUNT, BenchConfig::DEFAULT_SAMPLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_a_million_rounds() {
        let config = BenchConfig::default();
        assert_eq!(config.seed_volume(), 3_000_000);
        assert_eq!(config.middle(), 500_000);
        assert_eq!(config.sample, 20);
    }
}
