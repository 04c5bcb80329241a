use std::sync::Arc;

use arborium_tree_sitter as tree_sitter;
use tree_sitter::Language;

pub mod builtin;

pub use builtin::*;

/// User-facing language type.
pub type Lang = Arc<dyn LangImpl>;

/// Facade over tree-sitter's Language API.
pub trait LangImpl: Send + Sync {
    /// Parse source code into a tree-sitter tree.
    ///
    /// Returns `None` only if tree-sitter refuses the grammar (ABI mismatch).
    /// Syntax errors still produce a tree, with error nodes in it.
    fn parse(&self, source: &str) -> Option<tree_sitter::Tree>;
}

#[derive(Debug)]
pub struct LangInner {
    ts_lang: Language,
}

impl LangInner {
    pub fn new(ts_lang: Language) -> Self {
        Self { ts_lang }
    }
}

impl LangImpl for LangInner {
    fn parse(&self, source: &str) -> Option<tree_sitter::Tree> {
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&self.ts_lang).ok()?;
        parser.parse(source, None)
    }
}
