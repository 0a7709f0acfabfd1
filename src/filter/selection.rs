use roaring::RoaringBitmap;
use crate::core::types::RowRange;

/// Matching positions produced by a predicate evaluation: one contiguous
/// run when the engine can prove it, a bitmap otherwise.
///
/// Bitmap positions are absolute row indices for range-domain searches and
/// offsets into the supplied index list for index-domain searches.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Range(RowRange),
    Bitmap(RoaringBitmap),
}

impl Selection {
    pub fn empty() -> Self {
        Selection::Range(RowRange::empty())
    }

    pub fn len(&self) -> u64 {
        match self {
            Selection::Range(r) => r.len() as u64,
            Selection::Bitmap(b) => b.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, pos: u32) -> bool {
        match self {
            Selection::Range(r) => pos >= r.start && pos < r.end,
            Selection::Bitmap(b) => b.contains(pos),
        }
    }

    /// Matching positions in ascending order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = u32> + '_> {
        match self {
            Selection::Range(r) => Box::new(r.start..r.end),
            Selection::Bitmap(b) => Box::new(b.iter()),
        }
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }
}
