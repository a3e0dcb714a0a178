//! tsfront_parser: Recursive descent parser for TypeScript.
//!
//! Parses the scanner's token stream into an arena-allocated AST, recovers
//! from malformed top-level items, and assembles the result into a
//! [`Program`] with merged interfaces.

mod assembly;
pub mod options;
mod parser;
mod precedence;
mod utilities;

pub use options::{OptionsError, ParserOptions};
pub use parser::{ParseResult, ParsedUnit, Parser};

use bumpalo::Bump;
use tsfront_ast::program::{InterfaceMap, Program};
use tsfront_core::text::{LineMap, TextSpan};
use tsfront_diagnostics::{messages, Diagnostic, DiagnosticKind};

/// A parsed unit and every diagnostic reported for it.
#[derive(Debug)]
pub struct ParseOutput<'a> {
    pub program: Program<'a>,
    /// Ordered by position, with line and column resolved.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput<'_> {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Parse one source unit. Nodes are allocated in `arena`.
pub fn parse_source<'a>(
    arena: &'a Bump,
    file_name: &str,
    source_text: &'a str,
    options: &'a ParserOptions,
) -> ParseOutput<'a> {
    let span = tracing::debug_span!("parse", file = file_name, len = source_text.len());
    let _enter = span.enter();

    let unit = Parser::new(arena, file_name, source_text, options).parse_unit();
    let (declarations, interfaces) = assembly::assemble(arena, unit.declarations, options.merge_interfaces);
    tracing::debug!(
        declarations = declarations.len(),
        interfaces = interfaces.len(),
        diagnostics = unit.diagnostics.len(),
        "parsed unit"
    );
    ParseOutput {
        program: Program {
            file_name: unit.file_name,
            source_text,
            declarations,
            line_map: unit.line_map,
            interfaces,
        },
        diagnostics: unit.diagnostics.into_diagnostics(),
    }
}

/// Parse raw bytes. Input that is not valid UTF-8 yields an empty program
/// and one diagnostic at the first invalid byte.
pub fn parse_bytes<'a>(
    arena: &'a Bump,
    file_name: &str,
    bytes: &'a [u8],
    options: &'a ParserOptions,
) -> ParseOutput<'a> {
    match simdutf8::compat::from_utf8(bytes) {
        Ok(text) => parse_source(arena, file_name, text, options),
        Err(error) => {
            let valid_up_to = error.valid_up_to();
            tracing::debug!(file = file_name, valid_up_to, "input is not valid UTF-8");
            let prefix = simdutf8::compat::from_utf8(&bytes[..valid_up_to]).unwrap_or_default();
            let line_map = LineMap::new(prefix);
            let diagnostic = Diagnostic::new(
                DiagnosticKind::LexError,
                file_name,
                TextSpan::new(valid_up_to as u32, 1),
                &messages::FILE_APPEARS_TO_BE_BINARY,
                &[],
            )
            .with_start(&line_map);
            ParseOutput {
                program: Program {
                    file_name: tsfront_core::alloc_str(arena, file_name),
                    source_text: "",
                    declarations: &[],
                    line_map,
                    interfaces: InterfaceMap::default(),
                },
                diagnostics: vec![diagnostic],
            }
        }
    }
}
