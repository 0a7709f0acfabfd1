use crate::core::config::ScanPolicy;
use crate::core::types::{RowRange, StringId};
use crate::pool::string_pool::StringPool;

/// One string column: an interned identifier per row plus the sortedness
/// flag declared at construction.
///
/// The column is immutable once built. When `is_sorted` is true the caller
/// asserts that decoding the identifiers in array order yields a
/// non-decreasing string sequence with no null rows; the engine consumes
/// the flag and never verifies it.
#[derive(Debug)]
pub struct StringColumn {
    values: Vec<StringId>,
    is_sorted: bool,
    policy: ScanPolicy,
}

impl StringColumn {
    pub fn new(values: Vec<StringId>, is_sorted: bool) -> Self {
        StringColumn {
            values,
            is_sorted,
            policy: ScanPolicy::default(),
        }
    }

    /// Interns `texts` through `pool`; None rows hold the null sentinel.
    pub fn from_texts(pool: &mut StringPool, texts: &[Option<&str>], is_sorted: bool) -> Self {
        let values = texts
            .iter()
            .map(|text| match text {
                Some(t) => pool.intern(t),
                None => pool.null_id(),
            })
            .collect();
        StringColumn::new(values, is_sorted)
    }

    pub fn with_policy(mut self, policy: ScanPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_sorted(&self) -> bool {
        self.is_sorted
    }

    pub fn values(&self) -> &[StringId] {
        &self.values
    }

    pub fn policy(&self) -> &ScanPolicy {
        &self.policy
    }

    /// The whole column as a row range.
    pub fn full_range(&self) -> RowRange {
        RowRange::new(0, self.values.len() as u32)
    }

    /// Reorder caller-owned `indices` by decoded content, ties broken
    /// arbitrarily. Null rows order before all content rows. The stored
    /// array itself is never reordered.
    pub fn sort_indices(&self, pool: &StringPool, indices: &mut [u32]) {
        indices.sort_unstable_by(|a, b| {
            pool.get(self.values[*a as usize])
                .cmp(&pool.get(self.values[*b as usize]))
        });
    }

    /// Same ordering as `sort_indices`, but equal-content rows keep their
    /// original relative order. Needed when composing with a secondary key.
    pub fn stable_sort_indices(&self, pool: &StringPool, indices: &mut [u32]) {
        indices.sort_by(|a, b| {
            pool.get(self.values[*a as usize])
                .cmp(&pool.get(self.values[*b as usize]))
        });
    }
}
