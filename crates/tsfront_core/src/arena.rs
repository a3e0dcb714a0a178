//! Arena helpers for building the AST.
//!
//! Every node of one parse lives in a single `bumpalo::Bump`. When the parse
//! result is dropped the whole arena is freed at once.

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

/// Move the contents of a vector into the arena and return the slice.
///
/// An empty vector does not touch the arena.
#[inline]
pub fn alloc_slice<'a, T>(arena: &'a Bump, items: Vec<T>) -> &'a [T] {
    if items.is_empty() {
        return &[];
    }
    BumpVec::from_iter_in(items, arena).into_bump_slice()
}

/// Copy a string into the arena.
#[inline]
pub fn alloc_str<'a>(arena: &'a Bump, s: &str) -> &'a str {
    if s.is_empty() {
        return "";
    }
    arena.alloc_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_slice() {
        let arena = Bump::new();
        let slice = alloc_slice(&arena, vec![String::from("a"), String::from("b")]);
        assert_eq!(slice.len(), 2);
        assert_eq!(slice[1], "b");

        let empty: &[u32] = alloc_slice(&arena, Vec::new());
        assert!(empty.is_empty());
    }

    #[test]
    fn test_alloc_str() {
        let arena = Bump::new();
        let owned = String::from("hello");
        let s = alloc_str(&arena, &owned);
        drop(owned);
        assert_eq!(s, "hello");
    }
}
