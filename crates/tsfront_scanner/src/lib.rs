//! tsfront_scanner: converts TypeScript source text into tokens.
//!
//! The scanner works on byte offsets into the UTF-8 source and hands out
//! token text borrowed from it whenever no escape had to be cooked. It
//! tracks template nesting itself, so `}` closing a `${` placeholder comes
//! back as a template middle or tail token without parser help.

pub mod char_codes;
mod keywords;
mod scanner;
mod token;

pub use keywords::KeywordTable;
pub use scanner::{Scanner, ScannerState, Tokens};
pub use token::TokenInfo;
