use regex::Regex;
use roaring::RoaringBitmap;
use crate::core::error::Result;
use crate::pool::string_pool::StringPool;

/// Compiled glob pattern. `*` matches any run of characters, `?` exactly
/// one; everything else is literal.
pub enum GlobPattern {
    /// No metacharacters: the pattern is plain identifier equality.
    Literal(String),
    /// Anchored whole-string regex; `*` crosses newlines.
    Wildcard(Regex),
}

impl GlobPattern {
    pub fn compile(pattern: &str) -> Result<GlobPattern> {
        if !pattern.contains(['*', '?']) {
            return Ok(GlobPattern::Literal(pattern.to_string()));
        }
        let mut re = String::with_capacity(pattern.len() + 8);
        re.push_str("(?s)^");
        let mut literal = String::new();
        for ch in pattern.chars() {
            match ch {
                '*' | '?' => {
                    if !literal.is_empty() {
                        re.push_str(&regex::escape(&literal));
                        literal.clear();
                    }
                    if ch == '*' {
                        re.push_str(".*");
                    } else {
                        re.push('.');
                    }
                }
                _ => literal.push(ch),
            }
        }
        if !literal.is_empty() {
            re.push_str(&regex::escape(&literal));
        }
        re.push('$');
        Ok(GlobPattern::Wildcard(Regex::new(&re)?))
    }

    pub fn is_equality(&self) -> bool {
        matches!(self, GlobPattern::Literal(_))
    }
}

/// Evaluate `matcher` once against every distinct pool entry, producing a
/// match table keyed by raw identifier. The null sentinel decodes to
/// nothing and is never inserted.
///
/// Precondition: the pool holds no oversized strings, so the whole
/// identifier space is cheap to walk. The strategy choice in `ScanPolicy`
/// enforces this.
pub fn precompute_matches(pool: &StringPool, matcher: &Regex) -> RoaringBitmap {
    let mut table = RoaringBitmap::new();
    for id in pool.iter_ids() {
        if let Some(s) = pool.get(id) {
            if matcher.is_match(s) {
                table.insert(id.value());
            }
        }
    }
    table
}
