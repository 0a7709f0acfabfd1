use crate::core::types::{FieldValue, FilterOp, RowRange, StringId};
use crate::pool::string_pool::StringPool;

/// First index in `range` whose decoded content is >= `target`. Null rows
/// order before all content.
pub fn lower_bound(values: &[StringId], pool: &StringPool, target: &str, range: RowRange) -> u32 {
    let slice = &values[range.start as usize..range.end as usize];
    let off = slice.partition_point(|id| pool.get(*id).map_or(true, |s| s < target));
    range.start + off as u32
}

/// First index in `range` whose decoded content is > `target`.
pub fn upper_bound(values: &[StringId], pool: &StringPool, target: &str, range: RowRange) -> u32 {
    let slice = &values[range.start as usize..range.end as usize];
    let off = slice.partition_point(|id| pool.get(*id).map_or(true, |s| s <= target));
    range.start + off as u32
}

/// Range-producing search over a sorted column, restricted to `range`.
/// Ordering follows decoded string content, never identifier value.
///
/// Ne never reaches this function; the dispatcher rewrites it as the
/// complement of Eq. IsNull, Glob and Regex are not order-decidable, so
/// requested directly here they are defined to return the empty range.
pub fn binary_search_range(
    values: &[StringId],
    pool: &StringPool,
    op: FilterOp,
    value: &FieldValue,
    range: RowRange,
) -> RowRange {
    if value.is_null() && !matches!(op, FilterOp::IsNull | FilterOp::IsNotNull) {
        return RowRange::empty();
    }
    // A sorted column carries no null rows, so every row is non-null.
    if op == FilterOp::IsNotNull {
        return range;
    }
    let target = match value.as_text() {
        Some(t) => t,
        None => return RowRange::empty(),
    };
    match op {
        FilterOp::Eq => RowRange::new(
            lower_bound(values, pool, target, range),
            upper_bound(values, pool, target, range),
        ),
        FilterOp::Le => RowRange::new(range.start, upper_bound(values, pool, target, range)),
        FilterOp::Lt => RowRange::new(range.start, lower_bound(values, pool, target, range)),
        FilterOp::Ge => RowRange::new(lower_bound(values, pool, target, range), range.end),
        FilterOp::Gt => RowRange::new(upper_bound(values, pool, target, range), range.end),
        _ => RowRange::empty(),
    }
}
