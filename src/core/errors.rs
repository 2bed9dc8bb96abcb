//! Error types for the stubgen library.
//!
//! Every fallible operation in the crate returns [`Result`], whose error side is
//! [`StubgenError`]. The binary wraps these in `anyhow` at the top level.

use std::io;

use thiserror::Error;

/// Main result type for stubgen operations.
pub type Result<T> = std::result::Result<T, StubgenError>;

/// Error type for all stubgen operations.
#[derive(Error, Debug)]
pub enum StubgenError {
    /// I/O related errors (reading the source, writing the stub file)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Parsing errors reported by the tree-sitter grammar
    #[error("Parse error in {language}: {message}")]
    Parse {
        /// Programming language being parsed
        language: String,
        /// Error description
        message: String,
        /// File path where error occurred
        file_path: Option<String>,
        /// Line number, 1-based
        line: Option<usize>,
        /// Column number, 1-based
        column: Option<usize>,
    },

    /// Validation errors for input data
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field or input that failed validation
        field: Option<String>,
    },

    /// Test block template failed to register or render
    #[error("Template error: {message}")]
    Template {
        /// Error description
        message: String,
    },

    /// Unsupported operation or input
    #[error("Unsupported: {message}")]
    Unsupported {
        /// Error description
        message: String,
    },
}

impl StubgenError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a configuration error tied to a specific field
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new parse error
    pub fn parse(language: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            language: language.into(),
            message: message.into(),
            file_path: None,
            line: None,
            column: None,
        }
    }

    /// Create a parse error with file location information
    pub fn parse_with_location(
        language: impl Into<String>,
        message: impl Into<String>,
        file_path: impl Into<String>,
        line: Option<usize>,
        column: Option<usize>,
    ) -> Self {
        Self::Parse {
            language: language.into(),
            message: message.into(),
            file_path: Some(file_path.into()),
            line,
            column,
        }
    }

    /// Create a validation error tied to a specific field
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new template error
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template {
            message: message.into(),
        }
    }

    /// Create a new unsupported error
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }
}

impl From<serde_yaml::Error> for StubgenError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::config(format!("YAML deserialization failed: {err}"))
    }
}

impl From<serde_json::Error> for StubgenError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(format!("JSON deserialization failed: {err}"))
    }
}

impl From<handlebars::TemplateError> for StubgenError {
    fn from(err: handlebars::TemplateError) -> Self {
        Self::template(format!("failed to register template: {err}"))
    }
}

impl From<handlebars::RenderError> for StubgenError {
    fn from(err: handlebars::RenderError) -> Self {
        Self::template(format!("failed to render template: {err}"))
    }
}
