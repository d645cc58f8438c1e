use crate::error::{CodescapeError, Result};
use log::{debug, trace};
use tree_sitter::{Parser, Tree};

pub mod bindings;

/// Caller-owned tree-sitter parser bound to the Java grammar.
///
/// A handle starts unbound; `initialize` loads the grammar once and later
/// calls are no-ops. Parsing through an unbound handle fails with
/// `CodescapeError::NotInitialized`. Concurrent callers each own a handle.
pub struct JavaParser {
    parser: Parser,
    initialized: bool,
}

impl JavaParser {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
            initialized: false,
        }
    }

    /// Creates a handle with the grammar already loaded.
    pub fn initialized() -> Result<Self> {
        let mut parser = Self::new();
        parser.initialize()?;
        Ok(parser)
    }

    pub fn initialize(&mut self) -> Result<()> {
        if self.initialized {
            trace!("Java grammar already loaded, skipping");
            return Ok(());
        }

        self.parser.set_language(&bindings::java_language())?;
        self.initialized = true;
        debug!("Loaded Java grammar into parser");

        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn parse(&mut self, content: &str) -> Result<Tree> {
        if !self.initialized {
            return Err(CodescapeError::NotInitialized);
        }

        self.parser
            .parse(content.as_bytes(), None)
            .ok_or(CodescapeError::ParseFailure)
    }
}

impl Default for JavaParser {
    fn default() -> Self {
        Self::new()
    }
}
