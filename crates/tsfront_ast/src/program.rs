//! The parse result for one source unit.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use tsfront_core::text::{LineMap, TextRange};

use crate::node::{Declaration, InterfaceDecl};

/// Lookup from interface name to its (merged) declaration, in first-seen order.
pub type InterfaceMap<'a> = IndexMap<&'a str, &'a InterfaceDecl<'a>, FxBuildHasher>;

/// Ordered top-level declarations of one source unit.
#[derive(Debug)]
pub struct Program<'a> {
    pub file_name: &'a str,
    pub source_text: &'a str,
    pub declarations: &'a [Declaration<'a>],
    pub line_map: LineMap,
    /// Top-level interfaces by name. Points into `declarations`.
    pub interfaces: InterfaceMap<'a>,
}

impl<'a> Program<'a> {
    pub fn range(&self) -> TextRange {
        TextRange::new(0, self.source_text.len() as u32)
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn interface(&self, name: &str) -> Option<&'a InterfaceDecl<'a>> {
        self.interfaces.get(name).copied()
    }

    /// Top-level declarations with the given name, looking through `export`.
    pub fn declarations_named<'p>(&'p self, name: &'p str) -> impl Iterator<Item = &'p Declaration<'a>> + 'p {
        self.declarations.iter().filter(move |d| d.name() == Some(name))
    }
}
