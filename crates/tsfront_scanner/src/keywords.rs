//! The keyword table consulted when scanning identifiers.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use tsfront_ast::syntax_kind::SyntaxKind;

/// Maps keyword spellings to their token kinds.
///
/// Built once and shared read-only by every scanner. Contextual keywords
/// are in the table too; the parser decides where they act as identifiers.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    map: FxHashMap<&'static str, SyntaxKind>,
}

impl KeywordTable {
    /// All TypeScript reserved words and contextual keywords.
    pub fn typescript() -> Self {
        let map = SyntaxKind::ALL_KEYWORDS
            .iter()
            .filter_map(|&kind| kind.keyword_text().map(|text| (text, kind)))
            .collect();
        Self { map }
    }

    /// A process-wide instance of [`KeywordTable::typescript`].
    pub fn shared() -> &'static KeywordTable {
        static TABLE: OnceLock<KeywordTable> = OnceLock::new();
        TABLE.get_or_init(KeywordTable::typescript)
    }

    #[inline]
    pub fn lookup(&self, text: &str) -> Option<SyntaxKind> {
        // Every keyword is 2..=11 lowercase ASCII letters.
        if text.len() < 2 || text.len() > 11 || !text.as_bytes()[0].is_ascii_lowercase() {
            return None;
        }
        self.map.get(text).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::typescript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let table = KeywordTable::typescript();
        assert_eq!(table.len(), SyntaxKind::ALL_KEYWORDS.len());
        assert_eq!(table.lookup("infer"), Some(SyntaxKind::InferKeyword));
        assert_eq!(table.lookup("instanceof"), Some(SyntaxKind::InstanceOfKeyword));
        assert_eq!(table.lookup("constructor"), Some(SyntaxKind::ConstructorKeyword));
        assert_eq!(table.lookup("Infer"), None);
        assert_eq!(table.lookup("x"), None);
    }

    #[test]
    fn test_shared_is_singleton() {
        assert!(std::ptr::eq(KeywordTable::shared(), KeywordTable::shared()));
    }
}
