use serde::{Serialize, Deserialize};

/// Interned string identifier. Id 0 is reserved for the null sentinel and
/// never maps to stored content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StringId(pub u32);

impl StringId {
    pub const NULL: StringId = StringId(0);

    pub fn new(id: u32) -> Self {
        StringId(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_null(&self) -> bool {
        *self == StringId::NULL
    }
}

impl From<u32> for StringId {
    fn from(id: u32) -> Self {
        StringId(id)
    }
}

/// Filter operator supplied by the query layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Glob,
    Regex,
    IsNull,
    IsNotNull,
}

/// Typed predicate value. Anything other than `Text` is a type mismatch for
/// the pattern operators and resolves to an empty selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Null,
}

impl FieldValue {
    pub fn text(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

/// Half-open row range [start, end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowRange {
    pub start: u32,
    pub end: u32,
}

impl RowRange {
    pub fn new(start: u32, end: u32) -> Self {
        RowRange { start, end }
    }

    pub fn empty() -> Self {
        RowRange { start: 0, end: 0 }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}
