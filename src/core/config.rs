/// Tuning knobs for the scan engine. Correctness never depends on these;
/// both pattern strategies produce identical results.
#[derive(Debug, Clone)]
pub struct ScanPolicy {
    /// Allow the pool-precomputed pattern strategy at all.
    pub pattern_precompute: bool,
}

impl Default for ScanPolicy {
    fn default() -> Self {
        ScanPolicy {
            pattern_precompute: true,
        }
    }
}

impl ScanPolicy {
    /// Whether a glob/regex scan over `range_len` rows should precompute a
    /// match table over the whole pool instead of evaluating row by row.
    ///
    /// Precomputation amortizes one matcher call per distinct string across
    /// repeated rows, so it only pays off when the scanned range is at least
    /// as large as the pool. Pools holding oversized strings are excluded:
    /// their identifier space is not cheap to table.
    pub fn use_precomputed(&self, range_len: u64, pool_len: u64, has_large_string: bool) -> bool {
        self.pattern_precompute && range_len >= pool_len && !has_large_string
    }
}
