//! Rendering of placeholder Jest test blocks.

use handlebars::Handlebars;
use serde_json::json;

use crate::core::errors::Result;

const TEST_BLOCK_TEMPLATE: &str = include_str!("../templates/test_block.js.hbs");
const TEST_BLOCK: &str = "test_block";

/// Renders one `describe`/`it` block per function.
///
/// The block always calls the function with two literal inputs and leaves the
/// expected value empty; arity and parameter names are never consulted.
#[derive(Debug)]
pub struct TestBlockRenderer {
    handlebars: Handlebars<'static>,
}

impl TestBlockRenderer {
    /// Create a renderer with the built-in template registered
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_template_string(TEST_BLOCK, TEST_BLOCK_TEMPLATE)?;

        Ok(Self { handlebars })
    }

    /// Render the block for `function_name`, requiring it from `./<module_name>`.
    ///
    /// The result carries no leading or trailing whitespace.
    pub fn render(&self, function_name: &str, module_name: &str) -> Result<String> {
        let rendered = self.handlebars.render(
            TEST_BLOCK,
            &json!({
                "function_name": function_name,
                "module_name": module_name,
            }),
        )?;

        Ok(rendered.trim().to_string())
    }
}
