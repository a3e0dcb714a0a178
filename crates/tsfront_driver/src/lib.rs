//! tsfront_driver: Parse many source units in parallel.
//!
//! Every unit is parsed independently on a rayon pool into its own arena.
//! Results come back in the order the units were added.

use std::path::Path;

use bumpalo::Bump;
use rayon::prelude::*;
use tsfront_diagnostics::Diagnostic;
use tsfront_parser::{parse_bytes, ParseOutput, ParserOptions};

/// Stack size of the parser threads. Deeply nested input recurses up to
/// `max_recursion_depth` frames per construct before it is rejected.
pub const DEFAULT_STACK_SIZE: usize = 16 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to start the parser thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// One named source unit. The text is kept as bytes so that input read from
/// disk is validated by the parser rather than rejected up front.
#[derive(Debug, Clone)]
struct SourceUnit {
    file_name: String,
    bytes: Vec<u8>,
}

/// Summary of one parsed unit, independent of its arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitReport {
    pub file_name: String,
    pub declaration_count: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl UnitReport {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// Collects source units and parses them together.
pub struct Driver {
    options: ParserOptions,
    units: Vec<SourceUnit>,
    stack_size: usize,
    num_threads: usize,
}

impl Driver {
    pub fn new(options: ParserOptions) -> Self {
        Self {
            options,
            units: Vec::new(),
            stack_size: DEFAULT_STACK_SIZE,
            num_threads: 0,
        }
    }

    /// Stack size for each parser thread, in bytes.
    pub fn with_stack_size(mut self, stack_size: usize) -> Self {
        self.stack_size = stack_size;
        self
    }

    /// Number of parser threads; 0 lets rayon decide.
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Add an in-memory source unit.
    pub fn add_source(&mut self, file_name: impl Into<String>, source_text: impl Into<String>) {
        self.units.push(SourceUnit {
            file_name: file_name.into(),
            bytes: source_text.into().into_bytes(),
        });
    }

    /// Read a file from disk and add it as a unit named by its path.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> Result<(), DriverError> {
        let path = path.as_ref();
        let file_name = path.to_string_lossy().into_owned();
        let bytes = std::fs::read(path).map_err(|source| DriverError::Io {
            path: file_name.clone(),
            source,
        })?;
        tracing::debug!(file = %file_name, bytes = bytes.len(), "added source file");
        self.units.push(SourceUnit { file_name, bytes });
        Ok(())
    }

    /// Parse every unit in parallel and map each result through `f`.
    ///
    /// `f` sees the unit's [`ParseOutput`] while its arena is alive; the
    /// returned values are in insertion order.
    pub fn parse_all<F, R>(&self, f: F) -> Result<Vec<R>, DriverError>
    where
        F: Fn(&ParseOutput<'_>) -> R + Sync,
        R: Send,
    {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.num_threads)
            .stack_size(self.stack_size)
            .thread_name(|index| format!("tsfront-parse-{}", index))
            .build()?;
        let span = tracing::info_span!("parse_all", units = self.units.len());
        let _guard = span.enter();
        let results = pool.install(|| {
            self.units
                .par_iter()
                .map(|unit| {
                    let _unit_span = tracing::debug_span!("parse_unit", file = %unit.file_name).entered();
                    let arena = Bump::new();
                    let output = parse_bytes(&arena, &unit.file_name, &unit.bytes, &self.options);
                    tracing::debug!(
                        declarations = output.program.declarations.len(),
                        diagnostics = output.diagnostics.len(),
                        arena_bytes = arena.allocated_bytes(),
                        "parsed unit"
                    );
                    f(&output)
                })
                .collect()
        });
        Ok(results)
    }

    /// Parse every unit and report its declaration count and diagnostics.
    pub fn check_all(&self) -> Result<Vec<UnitReport>, DriverError> {
        let reports = self.parse_all(|output| UnitReport {
            file_name: output.program.file_name.to_string(),
            declaration_count: output.program.declarations.len(),
            diagnostics: output.diagnostics.clone(),
        })?;
        let failed = reports.iter().filter(|r| r.has_errors()).count();
        tracing::info!(units = reports.len(), failed, "checked all units");
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_driver() {
        let driver = Driver::new(ParserOptions::default());
        assert!(driver.is_empty());
        assert!(driver.check_all().unwrap().is_empty());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let mut driver = Driver::new(ParserOptions::default());
        let error = driver.add_file("/nonexistent/dir/missing.ts").unwrap_err();
        assert!(matches!(error, DriverError::Io { .. }));
        assert!(error.to_string().starts_with("failed to read /nonexistent/dir/missing.ts"));
        assert!(driver.is_empty());
    }

    #[test]
    fn test_report_has_errors() {
        let mut driver = Driver::new(ParserOptions::default()).with_num_threads(1);
        driver.add_source("bad.ts", "class {");
        let reports = driver.check_all().unwrap();
        assert!(reports[0].has_errors());
    }
}
