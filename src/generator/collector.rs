//! Discovery of testable functions and collection of their test blocks.

use std::fmt;

use indexmap::IndexSet;
use tracing::debug;

use super::renderer::TestBlockRenderer;
use crate::core::config::DiscoveryConfig;
use crate::core::errors::Result;
use crate::lang::visitor::{
    AssignmentExpression, AssignmentTarget, FunctionDeclaration, JsVisitor, SourceSpan,
    ValueKind, VariableDeclarator,
};

/// Which syntactic pattern produced a binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKind {
    /// `function name() {}`
    FunctionDeclaration,
    /// `const name = () => {}` and friends
    FunctionVariable,
    /// `exports.name = ...` or `module.exports.name = ...`
    ExportAssignment,
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::FunctionDeclaration => "function declaration",
            Self::FunctionVariable => "function variable",
            Self::ExportAssignment => "export assignment",
        };
        f.write_str(label)
    }
}

/// A function name found in the source, in traversal order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredBinding {
    /// Function name used in the generated block
    pub name: String,
    /// Pattern that matched
    pub kind: BindingKind,
    /// Where the matching construct starts
    pub span: SourceSpan,
}

/// Visitor that records every binding matching one of the three patterns.
#[derive(Debug)]
pub struct BindingCollector {
    discovery: DiscoveryConfig,
    bindings: Vec<DiscoveredBinding>,
}

impl BindingCollector {
    /// Create an empty collector
    pub fn new(discovery: DiscoveryConfig) -> Self {
        Self {
            discovery,
            bindings: Vec::new(),
        }
    }

    /// Bindings recorded so far
    pub fn bindings(&self) -> &[DiscoveredBinding] {
        &self.bindings
    }

    /// Render every binding and collapse identical blocks.
    ///
    /// Blocks are keyed by their rendered text; the first occurrence decides
    /// the position in the output.
    pub fn into_suite(
        self,
        renderer: &TestBlockRenderer,
        module_name: &str,
    ) -> Result<TestSuite> {
        let mut blocks = IndexSet::with_capacity(self.bindings.len());
        for binding in &self.bindings {
            let block = renderer.render(&binding.name, module_name)?;
            if !blocks.insert(block) {
                debug!(
                    "Duplicate test block for '{}' at {}:{} collapsed",
                    binding.name, binding.span.line, binding.span.column
                );
            }
        }

        Ok(TestSuite {
            blocks,
            bindings: self.bindings,
        })
    }

    fn is_function_value(&self, value: ValueKind) -> bool {
        match value {
            ValueKind::ArrowFunction | ValueKind::FunctionExpression => true,
            ValueKind::GeneratorFunction => self.discovery.include_generators,
            ValueKind::Other => false,
        }
    }

    fn record(&mut self, name: &str, kind: BindingKind, span: SourceSpan) {
        debug!("Found {} '{}' at {}:{}", kind, name, span.line, span.column);
        self.bindings.push(DiscoveredBinding {
            name: name.to_string(),
            kind,
            span,
        });
    }
}

impl JsVisitor for BindingCollector {
    fn visit_function_declaration(&mut self, decl: &FunctionDeclaration) {
        if decl.is_generator && !self.discovery.include_generators {
            return;
        }
        if let Some(name) = &decl.name {
            self.record(name, BindingKind::FunctionDeclaration, decl.span);
        }
    }

    fn visit_variable_declarator(&mut self, decl: &VariableDeclarator) {
        let (Some(name), Some(value)) = (&decl.name, decl.value) else {
            return;
        };
        if self.is_function_value(value) {
            self.record(name, BindingKind::FunctionVariable, decl.span);
        }
    }

    fn visit_assignment_expression(&mut self, assign: &AssignmentExpression) {
        let AssignmentTarget::Member {
            object_path: Some(object_path),
            property: Some(property),
        } = &assign.target
        else {
            return;
        };

        if !is_export_object(object_path) {
            return;
        }
        if self.discovery.strict_exports && !self.is_function_value(assign.value) {
            return;
        }

        self.record(property, BindingKind::ExportAssignment, assign.span);
    }
}

/// `module`, `exports` or `module.exports`
fn is_export_object(path: &[String]) -> bool {
    match path {
        [object] => object == "module" || object == "exports",
        [module, exports] => module == "module" && exports == "exports",
        _ => false,
    }
}

/// The deduplicated blocks generated for one source file
#[derive(Debug, Clone)]
pub struct TestSuite {
    /// Rendered blocks in first-insertion order
    pub blocks: IndexSet<String>,
    /// Every binding that matched, duplicates included
    pub bindings: Vec<DiscoveredBinding>,
}

impl TestSuite {
    /// True when no block was generated
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of distinct blocks
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// File content: blocks separated by one blank line, no trailing newline.
    pub fn content(&self) -> String {
        self.blocks
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
