use regex::Regex;
use roaring::RoaringBitmap;
use crate::core::config::ScanPolicy;
use crate::core::error::Result;
use crate::core::types::{FieldValue, FilterOp, RowRange, StringId};
use crate::filter::comparator::RowPredicate;
use crate::filter::pattern::{GlobPattern, precompute_matches};
use crate::filter::selection::Selection;
use crate::pool::string_pool::StringPool;

/// Build the comparator for one evaluation call. Ok(None) means a guard
/// fired: the predicate is defined to match no rows, which is not an error.
fn build_predicate<'a>(
    pool: &StringPool,
    op: FilterOp,
    value: &'a FieldValue,
    precompute: bool,
) -> Result<Option<RowPredicate<'a>>> {
    if value.is_null() && !matches!(op, FilterOp::IsNull | FilterOp::IsNotNull) {
        return Ok(None);
    }
    if op == FilterOp::IsNull {
        return Ok(Some(RowPredicate::IsNull));
    }
    if op == FilterOp::IsNotNull {
        return Ok(Some(RowPredicate::IsNotNull));
    }
    let text = match value.as_text() {
        Some(t) => t,
        None => return Ok(None),
    };
    let predicate = match op {
        FilterOp::Eq => RowPredicate::IdEq(pool.lookup(text)),
        FilterOp::Ne => RowPredicate::IdNe(pool.lookup(text)),
        FilterOp::Lt => RowPredicate::StrLt(text),
        FilterOp::Le => RowPredicate::StrLe(text),
        FilterOp::Gt => RowPredicate::StrGt(text),
        FilterOp::Ge => RowPredicate::StrGe(text),
        FilterOp::Glob => match GlobPattern::compile(text)? {
            // No metacharacters: the pattern is equality, which skips both
            // decoding and the matcher entirely.
            GlobPattern::Literal(literal) => RowPredicate::IdEq(pool.lookup(&literal)),
            GlobPattern::Wildcard(re) => {
                if precompute {
                    RowPredicate::Precomputed(precompute_matches(pool, &re))
                } else {
                    RowPredicate::Pattern(re)
                }
            }
        },
        FilterOp::Regex => {
            let re = Regex::new(text)?;
            if precompute {
                RowPredicate::Precomputed(precompute_matches(pool, &re))
            } else {
                RowPredicate::Pattern(re)
            }
        }
        FilterOp::IsNull | FilterOp::IsNotNull => unreachable!("handled above"),
    };
    Ok(Some(predicate))
}

/// Evaluate every row in `range`, producing a bitmap of matching row
/// indices.
pub(crate) fn linear_scan(
    values: &[StringId],
    pool: &StringPool,
    op: FilterOp,
    value: &FieldValue,
    range: RowRange,
    policy: &ScanPolicy,
) -> Result<Selection> {
    let precompute = policy.use_precomputed(
        range.len() as u64,
        pool.len() as u64,
        pool.has_large_string(),
    );
    let predicate = match build_predicate(pool, op, value, precompute)? {
        Some(p) => p,
        None => return Ok(Selection::empty()),
    };
    let mut bits = RoaringBitmap::new();
    for row in range.start..range.end {
        if predicate.matches(pool, values[row as usize]) {
            bits.insert(row);
        }
    }
    Ok(Selection::Bitmap(bits))
}

/// Evaluate the rows named by `indices`, in order, producing a bitmap of
/// matching offsets into the index list. Index lists never amortize well,
/// so pattern operators always evaluate directly.
pub(crate) fn index_scan(
    values: &[StringId],
    pool: &StringPool,
    op: FilterOp,
    value: &FieldValue,
    indices: &[u32],
) -> Result<Selection> {
    let predicate = match build_predicate(pool, op, value, false)? {
        Some(p) => p,
        None => return Ok(Selection::empty()),
    };
    let mut bits = RoaringBitmap::new();
    for (pos, &row) in indices.iter().enumerate() {
        if predicate.matches(pool, values[row as usize]) {
            bits.insert(pos as u32);
        }
    }
    Ok(Selection::Bitmap(bits))
}
