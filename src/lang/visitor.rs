//! Pre-order traversal of a JavaScript syntax tree.
//!
//! The walk reduces tree-sitter nodes to three tagged categories (function
//! declarations, variable declarators and assignments) and hands each one to a
//! [`JsVisitor`]. Nothing beyond these three shapes is surfaced; every other
//! node is traversed but otherwise ignored.

use tree_sitter::{Node, Tree};

/// 1-based position of a node in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpan {
    /// Line number, 1-based
    pub line: usize,
    /// Byte column, 1-based
    pub column: usize,
}

impl SourceSpan {
    fn of(node: &Node<'_>) -> Self {
        let start = node.start_position();
        Self {
            line: start.row + 1,
            column: start.column + 1,
        }
    }
}

/// Shape of an initializer or assigned value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `(...) => ...`
    ArrowFunction,
    /// `function (...) { ... }`, named or anonymous
    FunctionExpression,
    /// `function* (...) { ... }`
    GeneratorFunction,
    /// Anything else, including calls that return functions
    Other,
}

/// `function name(...) { ... }` or `function* name(...) { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDeclaration {
    /// Declared identifier, if any
    pub name: Option<String>,
    /// Whether this is a `function*` declaration
    pub is_generator: bool,
    /// Position of the declaration
    pub span: SourceSpan,
}

/// One declarator inside `const`/`let`/`var`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclarator {
    /// Bound identifier; `None` for destructuring patterns
    pub name: Option<String>,
    /// Shape of the initializer; `None` when there is no initializer
    pub value: Option<ValueKind>,
    /// Position of the declarator
    pub span: SourceSpan,
}

/// Left-hand side of an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentTarget {
    /// `object.property = ...`
    Member {
        /// Dotted identifier chain of the object (`["module", "exports"]`),
        /// `None` when the object is not a plain identifier chain
        object_path: Option<Vec<String>>,
        /// Property name; `None` for private `#fields`
        property: Option<String>,
    },
    /// Identifiers, subscripts and destructuring patterns
    Other,
}

/// `target = value`, including compound operators like `+=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentExpression {
    /// Shape of the assignment target
    pub target: AssignmentTarget,
    /// Shape of the assigned value
    pub value: ValueKind,
    /// Position of the assignment
    pub span: SourceSpan,
}

/// The node categories surfaced by [`walk_tree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsNode {
    /// A named (or generator) function declaration
    FunctionDeclaration(FunctionDeclaration),
    /// A variable declarator
    VariableDeclarator(VariableDeclarator),
    /// An assignment expression
    AssignmentExpression(AssignmentExpression),
}

/// Callbacks invoked by [`walk_tree`]. All methods default to no-ops.
pub trait JsVisitor {
    /// Called for `function` and `function*` declarations
    fn visit_function_declaration(&mut self, _decl: &FunctionDeclaration) {}

    /// Called for each declarator in `const`/`let`/`var`
    fn visit_variable_declarator(&mut self, _decl: &VariableDeclarator) {}

    /// Called for plain and compound assignments
    fn visit_assignment_expression(&mut self, _assign: &AssignmentExpression) {}
}

/// Walk `tree` in pre-order, dispatching every recognised node to `visitor`.
pub fn walk_tree(tree: &Tree, source: &str, visitor: &mut impl JsVisitor) {
    let mut cursor = tree.walk();

    loop {
        if let Some(node) = classify_node(&cursor.node(), source) {
            dispatch(&node, visitor);
        }

        if cursor.goto_first_child() {
            continue;
        }

        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
        }
    }
}

fn dispatch(node: &JsNode, visitor: &mut impl JsVisitor) {
    match node {
        JsNode::FunctionDeclaration(decl) => visitor.visit_function_declaration(decl),
        JsNode::VariableDeclarator(decl) => visitor.visit_variable_declarator(decl),
        JsNode::AssignmentExpression(assign) => visitor.visit_assignment_expression(assign),
    }
}

/// Reduce a tree-sitter node to one of the surfaced categories.
pub fn classify_node(node: &Node<'_>, source: &str) -> Option<JsNode> {
    match node.kind() {
        "function_declaration" | "generator_function_declaration" => {
            Some(JsNode::FunctionDeclaration(FunctionDeclaration {
                name: node
                    .child_by_field_name("name")
                    .and_then(|name| identifier_text(&name, source)),
                is_generator: node.kind() == "generator_function_declaration",
                span: SourceSpan::of(node),
            }))
        }
        "variable_declarator" => Some(JsNode::VariableDeclarator(VariableDeclarator {
            name: node
                .child_by_field_name("name")
                .and_then(|name| identifier_text(&name, source)),
            value: node
                .child_by_field_name("value")
                .map(|value| classify_value(&value)),
            span: SourceSpan::of(node),
        })),
        "assignment_expression" | "augmented_assignment_expression" => {
            let left = node.child_by_field_name("left")?;
            let right = node.child_by_field_name("right")?;
            Some(JsNode::AssignmentExpression(AssignmentExpression {
                target: classify_target(&left, source),
                value: classify_value(&right),
                span: SourceSpan::of(node),
            }))
        }
        _ => None,
    }
}

fn classify_value(node: &Node<'_>) -> ValueKind {
    match node.kind() {
        "arrow_function" => ValueKind::ArrowFunction,
        // older grammars name function expressions plain "function"
        "function_expression" | "function" => ValueKind::FunctionExpression,
        "generator_function" => ValueKind::GeneratorFunction,
        "parenthesized_expression" => match single_named_child(node) {
            Some(inner) => classify_value(&inner),
            None => ValueKind::Other,
        },
        _ => ValueKind::Other,
    }
}

fn classify_target(node: &Node<'_>, source: &str) -> AssignmentTarget {
    if node.kind() != "member_expression" {
        return AssignmentTarget::Other;
    }

    let property = node
        .child_by_field_name("property")
        .filter(|property| property.kind() == "property_identifier")
        .and_then(|property| node_text(&property, source));

    let object_path = node
        .child_by_field_name("object")
        .and_then(|object| identifier_path(&object, source));

    AssignmentTarget::Member {
        object_path,
        property,
    }
}

/// Flatten `a.b.c` into `["a", "b", "c"]`; `None` for anything else.
fn identifier_path(node: &Node<'_>, source: &str) -> Option<Vec<String>> {
    match node.kind() {
        "identifier" => Some(vec![node_text(node, source)?]),
        "member_expression" => {
            let property = node.child_by_field_name("property")?;
            if property.kind() != "property_identifier" {
                return None;
            }
            let mut path = identifier_path(&node.child_by_field_name("object")?, source)?;
            path.push(node_text(&property, source)?);
            Some(path)
        }
        _ => None,
    }
}

fn single_named_child<'tree>(node: &Node<'tree>) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let mut named = node.named_children(&mut cursor).filter(|c| c.kind() != "comment");
    let first = named.next()?;
    named.next().is_none().then_some(first)
}

fn identifier_text(node: &Node<'_>, source: &str) -> Option<String> {
    (node.kind() == "identifier")
        .then(|| node_text(node, source))
        .flatten()
}

fn node_text(node: &Node<'_>, source: &str) -> Option<String> {
    node.utf8_text(source.as_bytes()).ok().map(str::to_string)
}
