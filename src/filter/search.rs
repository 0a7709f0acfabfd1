use roaring::RoaringBitmap;
use tracing::trace;

use crate::column::string_column::StringColumn;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{FieldValue, FilterOp, RowRange};
use crate::filter::binary::binary_search_range;
use crate::filter::scan::{index_scan, linear_scan};
use crate::filter::selection::Selection;
use crate::pool::string_pool::StringPool;

impl StringColumn {
    /// Evaluate `op value` over the contiguous rows `range`.
    ///
    /// Sorted columns answer through binary search; unsorted columns scan.
    /// The call reads shared state only and allocates nothing that outlives
    /// it. The pool must not be mutated for the duration of the call.
    pub fn search(
        &self,
        pool: &StringPool,
        op: FilterOp,
        value: &FieldValue,
        range: RowRange,
    ) -> Result<Selection> {
        trace!(?op, start = range.start, end = range.end, "string column search");
        if self.is_sorted() {
            if op != FilterOp::Ne {
                return Ok(Selection::Range(binary_search_range(
                    self.values(),
                    pool,
                    op,
                    value,
                    range,
                )));
            }
            // Not-equal does not define one contiguous run: it is the
            // complement of the Eq range within the search domain.
            if value.as_text().is_none() {
                return Ok(Selection::empty());
            }
            let eq = binary_search_range(self.values(), pool, FilterOp::Eq, value, range);
            let mut bits = RoaringBitmap::new();
            bits.insert_range(range.start..eq.start);
            bits.insert_range(eq.end..range.end);
            return Ok(Selection::Bitmap(bits));
        }
        linear_scan(self.values(), pool, op, value, range, self.policy())
    }

    /// Evaluate `op value` over an explicit index list. `sorted` declares
    /// that the list itself is pre-sorted by this column's content order.
    ///
    /// The sorted path would binary-search the index list; it is not
    /// implemented and reports Unsupported rather than mis-answering.
    pub fn index_search(
        &self,
        pool: &StringPool,
        op: FilterOp,
        value: &FieldValue,
        indices: &[u32],
        sorted: bool,
    ) -> Result<Selection> {
        trace!(?op, count = indices.len(), sorted, "string column index search");
        if sorted {
            return Err(Error::new(
                ErrorKind::Unsupported,
                "binary search over a pre-sorted index list is not implemented".to_string(),
            ));
        }
        index_scan(self.values(), pool, op, value, indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_setup(texts: &[&str]) -> (StringPool, StringColumn) {
        let mut pool = StringPool::new();
        let texts: Vec<Option<&str>> = texts.iter().map(|t| Some(*t)).collect();
        let col = StringColumn::from_texts(&mut pool, &texts, true);
        (pool, col)
    }

    #[test]
    fn sorted_eq_comes_back_as_a_range() {
        let (pool, col) = sorted_setup(&["a", "a", "b", "c"]);
        let got = col
            .search(&pool, FilterOp::Eq, &FieldValue::text("a"), col.full_range())
            .unwrap();
        assert_eq!(got, Selection::Range(RowRange::new(0, 2)));
    }

    #[test]
    fn sorted_ne_is_the_complement_bitmap() {
        let (pool, col) = sorted_setup(&["a", "a", "b", "c"]);
        let got = col
            .search(&pool, FilterOp::Ne, &FieldValue::text("a"), col.full_range())
            .unwrap();
        assert!(matches!(got, Selection::Bitmap(_)));
        assert_eq!(got.to_vec(), vec![2, 3]);
    }

    #[test]
    fn sorted_ne_of_an_absent_value_matches_the_whole_range() {
        let (pool, col) = sorted_setup(&["a", "b", "c"]);
        let got = col
            .search(&pool, FilterOp::Ne, &FieldValue::text("bb"), col.full_range())
            .unwrap();
        assert_eq!(got.to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn sorted_ne_respects_the_guards() {
        let (pool, col) = sorted_setup(&["a", "b"]);
        let got = col
            .search(&pool, FilterOp::Ne, &FieldValue::Null, col.full_range())
            .unwrap();
        assert!(got.is_empty());
        let got = col
            .search(&pool, FilterOp::Ne, &FieldValue::Number(1.0), col.full_range())
            .unwrap();
        assert!(got.is_empty());
    }

    #[test]
    fn sorted_ne_over_a_sub_range() {
        let (pool, col) = sorted_setup(&["a", "b", "b", "c", "d"]);
        let got = col
            .search(
                &pool,
                FilterOp::Ne,
                &FieldValue::text("b"),
                RowRange::new(1, 4),
            )
            .unwrap();
        assert_eq!(got.to_vec(), vec![3]);
    }

    #[test]
    fn unsorted_column_scans() {
        let mut pool = StringPool::new();
        let col = StringColumn::from_texts(
            &mut pool,
            &[Some("b"), Some("a"), Some("a"), Some("c")],
            false,
        );
        let got = col
            .search(&pool, FilterOp::Eq, &FieldValue::text("a"), col.full_range())
            .unwrap();
        assert!(matches!(got, Selection::Bitmap(_)));
        assert_eq!(got.to_vec(), vec![1, 2]);
    }

    #[test]
    fn extrinsic_sorted_index_search_is_unsupported() {
        let (pool, col) = sorted_setup(&["a", "b"]);
        let err = col
            .index_search(&pool, FilterOp::Eq, &FieldValue::text("a"), &[0, 1], true)
            .unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Unsupported));
    }

    #[test]
    fn unsorted_index_search_scans_the_list() {
        let (pool, col) = sorted_setup(&["a", "b", "c"]);
        let got = col
            .index_search(&pool, FilterOp::Ge, &FieldValue::text("b"), &[2, 0, 1], false)
            .unwrap();
        assert_eq!(got.to_vec(), vec![0, 2]);
    }

    #[test]
    fn sorted_glob_through_search_is_defined_empty() {
        let (pool, col) = sorted_setup(&["apple", "avocado", "banana"]);
        let got = col
            .search(&pool, FilterOp::Glob, &FieldValue::text("a*"), col.full_range())
            .unwrap();
        assert!(got.is_empty());
    }
}
