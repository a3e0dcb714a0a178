//! tsfront_tests: TypeScript fixture corpus shared by the integration tests.

use bumpalo::Bump;
use tsfront_parser::{parse_source, ParseOutput, ParserOptions};

/// A named TypeScript source file.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub name: &'static str,
    pub source: &'static str,
    /// Whether the file is expected to parse without diagnostics.
    pub clean: bool,
}

macro_rules! fixture {
    ($name:literal, $clean:expr) => {
        Fixture {
            name: $name,
            source: include_str!(concat!("../fixtures/", $name)),
            clean: $clean,
        }
    };
}

pub const FIXTURES: &[Fixture] = &[
    fixture!("classes.ts", true),
    fixture!("enums.ts", true),
    fixture!("generics.ts", true),
    fixture!("imports_exports.ts", true),
    fixture!("interfaces.ts", true),
    fixture!("advanced_types.ts", true),
    fixture!("recovery.ts", false),
];

pub fn fixture(name: &str) -> Option<&'static Fixture> {
    FIXTURES.iter().find(|f| f.name == name)
}

pub fn clean_fixtures() -> impl Iterator<Item = &'static Fixture> {
    FIXTURES.iter().filter(|f| f.clean)
}

impl Fixture {
    /// Parse into a fresh arena and hand the output to `f`.
    pub fn with_parsed<R>(&self, options: &ParserOptions, f: impl FnOnce(&ParseOutput<'_>) -> R) -> R {
        let arena = Bump::new();
        let output = parse_source(&arena, self.name, self.source, options);
        f(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_lookup() {
        assert!(fixture("enums.ts").is_some());
        assert!(fixture("missing.ts").is_none());
        assert_eq!(clean_fixtures().count(), FIXTURES.len() - 1);
        assert!(FIXTURES.iter().all(|f| !f.source.is_empty()));
    }
}
