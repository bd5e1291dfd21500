//! Table detection backed by a syntax tree
//!
//! Navigation only ever asks one question of the syntax layer: does this
//! document offset lie inside a table? [`TableProbe`] is that question.
//! [`MarkdownSyntax`] answers it with a tree-sitter parse; [`NoSyntax`]
//! answers "no" for hosts without a parser.

use crate::constants::{errors, syntax::TABLE_NODE_MARKER};
use crate::error::{ErrorType, NavError};
use std::path::Path;
use tracing::debug;
use tree_sitter::{Node, Parser, Tree};

pub mod loader;

/// Classifies document byte offsets as inside or outside a table
pub trait TableProbe {
    fn is_within_table_construct(&self, offset: usize) -> bool;
}

impl<F> TableProbe for F
where
    F: Fn(usize) -> bool,
{
    fn is_within_table_construct(&self, offset: usize) -> bool {
        self(offset)
    }
}

/// Probe for documents without a syntax tree: nothing is a table
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSyntax;

impl TableProbe for NoSyntax {
    fn is_within_table_construct(&self, _offset: usize) -> bool {
        false
    }
}

/// Whether a node kind names a table construct.
///
/// The match is a case-insensitive substring test so that `pipe_table`,
/// `TableCell` and `tableDelimiter` style names all qualify regardless of
/// the grammar's naming scheme.
pub fn is_table_kind(kind: &str) -> bool {
    kind.to_ascii_lowercase().contains(TABLE_NODE_MARKER)
}

/// Markdown syntax tree for one document snapshot
pub struct MarkdownSyntax {
    parser: Parser,
    pub tree: Option<Tree>,
}

impl MarkdownSyntax {
    pub fn new(loaded: loader::LoadedLanguage) -> Result<Self, NavError> {
        let mut parser = Parser::new();
        parser.set_language(&loaded.language).map_err(|e| {
            NavError::new(ErrorType::Syntax, errors::LANGUAGE_ERROR, e.to_string())
        })?;
        debug!(language = %loaded.name, "parser ready");

        Ok(Self { parser, tree: None })
    }

    /// Build a parser for the bundled Markdown grammar and parse `text`
    pub fn for_text(text: &str) -> Result<Self, NavError> {
        let loaded = loader::LanguageLoader::new().load_language("markdown")?;
        Self::parsed(loaded, text)
    }

    /// Pick the grammar from `path`'s extension and parse `text`.
    /// Fails for files that are not Markdown.
    pub fn for_file(path: &Path, text: &str) -> Result<Self, NavError> {
        let loaded = loader::LanguageLoader::new().load_language_for_file(path)?;
        Self::parsed(loaded, text)
    }

    fn parsed(loaded: loader::LoadedLanguage, text: &str) -> Result<Self, NavError> {
        let mut syntax = Self::new(loaded)?;
        syntax.parse(text)?;
        Ok(syntax)
    }

    /// Reparse from scratch. The previous tree is dropped even on failure.
    pub fn parse(&mut self, text: &str) -> Result<(), NavError> {
        self.tree = self.parser.parse(text, None);
        if self.tree.is_none() {
            return Err(NavError::warning(
                ErrorType::Syntax,
                errors::PARSE_FAILED,
                "parser produced no tree",
            ));
        }
        Ok(())
    }

    /// Innermost node covering `offset`
    fn node_at(&self, offset: usize) -> Option<Node<'_>> {
        self.tree
            .as_ref()?
            .root_node()
            .descendant_for_byte_range(offset, offset)
    }
}

impl TableProbe for MarkdownSyntax {
    fn is_within_table_construct(&self, offset: usize) -> bool {
        let mut node = self.node_at(offset);
        while let Some(n) = node {
            if is_table_kind(n.kind()) {
                return true;
            }
            node = n.parent();
        }
        false
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
