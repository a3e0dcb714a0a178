//! Parser configuration.

use serde::{Deserialize, Serialize};
use tsfront_scanner::KeywordTable;

/// Immutable settings shared by every parse. Build once and pass by
/// reference; the value is `Sync`, so one instance serves parallel parses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParserOptions {
    /// Nesting limit for types and expressions. Deeper input is reported
    /// instead of recursing further.
    pub max_recursion_depth: u32,
    /// Upper bound on tokens inspected when deciding whether `<` in an
    /// expression opens a type argument list.
    pub max_speculation_tokens: u32,
    /// Merge same-named top-level interfaces into one declaration.
    pub merge_interfaces: bool,
    #[serde(skip)]
    pub keywords: KeywordTable,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_recursion_depth: 200,
            max_speculation_tokens: 4096,
            merge_interfaces: true,
            keywords: KeywordTable::typescript(),
        }
    }
}

/// Errors from reading or validating [`ParserOptions`].
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("invalid parser options: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be at least 1")]
    OutOfRange { field: &'static str },
}

impl ParserOptions {
    /// Read options from JSON. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, OptionsError> {
        let options: ParserOptions = serde_json::from_str(text)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.max_recursion_depth == 0 {
            return Err(OptionsError::OutOfRange { field: "maxRecursionDepth" });
        }
        if self.max_speculation_tokens == 0 {
            return Err(OptionsError::OutOfRange { field: "maxSpeculationTokens" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParserOptions::default();
        assert_eq!(options.max_recursion_depth, 200);
        assert_eq!(options.max_speculation_tokens, 4096);
        assert!(options.merge_interfaces);
        assert!(!options.keywords.is_empty());
    }

    #[test]
    fn test_from_json_partial() {
        let options = ParserOptions::from_json(r#"{ "mergeInterfaces": false }"#).unwrap();
        assert!(!options.merge_interfaces);
        assert_eq!(options.max_recursion_depth, 200);
    }

    #[test]
    fn test_from_json_rejects_zero_depth() {
        let err = ParserOptions::from_json(r#"{ "maxRecursionDepth": 0 }"#).unwrap_err();
        assert_eq!(err.to_string(), "maxRecursionDepth must be at least 1");
    }

    #[test]
    fn test_from_json_rejects_bad_json() {
        assert!(matches!(ParserOptions::from_json("{"), Err(OptionsError::Json(_))));
    }

    #[test]
    fn test_options_round_trip_through_json() {
        let options = ParserOptions { max_recursion_depth: 64, ..ParserOptions::default() };
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains("\"maxRecursionDepth\":64"));
        assert!(!json.contains("keywords"));
    }
}
