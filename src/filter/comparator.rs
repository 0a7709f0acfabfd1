use regex::Regex;
use roaring::RoaringBitmap;
use crate::core::types::StringId;
use crate::pool::string_pool::StringPool;

/// Closed comparator set for the scan engine, one variant per operator
/// shape, dispatched through a single switch in `matches`.
///
/// A predicate borrows the pool and the target text only for the one
/// evaluation call that built it.
pub enum RowPredicate<'a> {
    /// Identifier equality. None when the target was never interned, which
    /// no row can match.
    IdEq(Option<StringId>),
    /// Identifier inequality, null rows excluded.
    IdNe(Option<StringId>),
    StrLt(&'a str),
    StrLe(&'a str),
    StrGt(&'a str),
    StrGe(&'a str),
    IsNull,
    IsNotNull,
    /// Compiled glob or regex evaluated against each decoded row.
    Pattern(Regex),
    /// Match table keyed by raw identifier, built once over the whole pool.
    Precomputed(RoaringBitmap),
}

impl RowPredicate<'_> {
    pub fn matches(&self, pool: &StringPool, id: StringId) -> bool {
        match self {
            RowPredicate::IdEq(target) => *target == Some(id),
            RowPredicate::IdNe(target) => !id.is_null() && *target != Some(id),
            RowPredicate::StrLt(val) => pool.get(id).map_or(false, |s| s < *val),
            RowPredicate::StrLe(val) => pool.get(id).map_or(false, |s| s <= *val),
            RowPredicate::StrGt(val) => pool.get(id).map_or(false, |s| s > *val),
            RowPredicate::StrGe(val) => pool.get(id).map_or(false, |s| s >= *val),
            RowPredicate::IsNull => id.is_null(),
            RowPredicate::IsNotNull => !id.is_null(),
            RowPredicate::Pattern(re) => pool.get(id).map_or(false, |s| re.is_match(s)),
            RowPredicate::Precomputed(table) => table.contains(id.value()),
        }
    }
}
