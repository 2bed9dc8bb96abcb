//! JavaScript language adapter with tree-sitter integration.

use tree_sitter::{Node, Parser, Tree};

use super::registry::create_parser_for_language;
use super::visitor::{walk_tree, JsVisitor};
use crate::core::errors::{Result, StubgenError};

#[cfg(test)]
#[path = "javascript_tests.rs"]
mod tests;

const SNIPPET_LIMIT: usize = 24;

/// JavaScript-specific parsing and traversal
pub struct JavaScriptAdapter {
    /// Tree-sitter parser for JavaScript (JSX included)
    parser: Parser,
}

impl JavaScriptAdapter {
    /// Create a new JavaScript adapter
    pub fn new() -> Result<Self> {
        let parser = create_parser_for_language("js")?;
        Ok(Self { parser })
    }

    /// Parse JavaScript source into a syntax tree.
    ///
    /// tree-sitter recovers from syntax errors by inserting `ERROR` and
    /// `MISSING` nodes; any such node makes the source unparseable here, and
    /// the first one in document order is reported.
    pub fn parse_tree(&mut self, source: &str, file_path: &str) -> Result<Tree> {
        let tree = self.parser.parse(source, None).ok_or_else(|| {
            StubgenError::parse("javascript", format!("{file_path}: parser produced no tree"))
        })?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(syntax_error(root, source, file_path));
        }

        Ok(tree)
    }

    /// Parse `source` and walk it with `visitor`.
    pub fn visit_source(
        &mut self,
        source: &str,
        file_path: &str,
        visitor: &mut impl JsVisitor,
    ) -> Result<()> {
        let tree = self.parse_tree(source, file_path)?;
        walk_tree(&tree, source, visitor);
        Ok(())
    }
}

fn syntax_error(root: Node<'_>, source: &str, file_path: &str) -> StubgenError {
    let Some(node) = first_error_node(root) else {
        return StubgenError::parse_with_location(
            "javascript",
            format!("{file_path}: invalid syntax"),
            file_path,
            None,
            None,
        );
    };

    let position = node.start_position();
    let (line, column) = (position.row + 1, position.column + 1);
    let detail = if node.is_missing() {
        format!("missing `{}`", node.kind())
    } else {
        match snippet(node, source) {
            Some(text) => format!("unexpected `{text}`"),
            None => "unexpected end of input".to_string(),
        }
    };

    StubgenError::parse_with_location(
        "javascript",
        format!("{file_path}:{line}:{column}: {detail}"),
        file_path,
        Some(line),
        Some(column),
    )
}

fn first_error_node(root: Node<'_>) -> Option<Node<'_>> {
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if !node.has_error() {
            continue;
        }

        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }

    None
}

fn snippet(node: Node<'_>, source: &str) -> Option<String> {
    let text = node.utf8_text(source.as_bytes()).ok()?;
    let first_line = text.lines().next()?.trim();
    if first_line.is_empty() {
        return None;
    }

    Some(if first_line.chars().count() > SNIPPET_LIMIT {
        let cut: String = first_line.chars().take(SNIPPET_LIMIT).collect();
        format!("{cut}...")
    } else {
        first_line.to_string()
    })
}
