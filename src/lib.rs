pub mod core;
pub mod pool;
pub mod column;
pub mod filter;

/*
┌──────────────────────────── LEXCOL STRUCTURE ─────────────────────────────┐
│                                                                            │
│  StringPool                 StringColumn                                   │
│  • intern / lookup          • values: Vec<StringId>                        │
│  • get(id) -> Option<&str>  • is_sorted: bool                              │
│  • null_id (id 0)           • policy: ScanPolicy                           │
│  • has_large_string         • sort_indices / stable_sort_indices           │
│                             • search / index_search (filter::search)       │
│                                                                            │
│  search dispatch:                                                          │
│    sorted, op != Ne  ──> filter::binary  ──> Selection::Range              │
│    sorted, op == Ne  ──> Eq range complemented ──> Selection::Bitmap       │
│    unsorted / lists  ──> filter::scan ──> RowPredicate ──> Bitmap          │
│                              │                                             │
│                              └─ Glob/Regex: filter::pattern chooses        │
│                                 direct vs pool-precomputed per ScanPolicy  │
│                                                                            │
│  column::serializer: sortedness byte + raw LE u32 ids, row count external  │
└────────────────────────────────────────────────────────────────────────────┘
*/
