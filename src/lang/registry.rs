//! Grammar lookup and parser construction for supported source languages.

use tree_sitter::Language;

use crate::core::errors::{Result, StubgenError};

/// Metadata describing one of the built-in languages.
#[derive(Debug, Clone, Copy)]
pub struct LanguageInfo {
    /// Canonical short key (e.g. "js").
    pub key: &'static str,
    /// Human-friendly display name.
    pub name: &'static str,
    /// Supported file extensions (without leading dots).
    pub extensions: &'static [&'static str],
}

const REGISTERED_LANGUAGES: &[LanguageInfo] = &[LanguageInfo {
    key: "js",
    name: "JavaScript",
    extensions: &["js", "jsx", "mjs", "cjs"],
}];

/// Return the languages that are compiled into this build.
pub fn registered_languages() -> &'static [LanguageInfo] {
    REGISTERED_LANGUAGES
}

/// Get tree-sitter language for a given language key
pub fn get_tree_sitter_language(language_key: &str) -> Result<Language> {
    match normalize_language_key(language_key) {
        Some("js") => Ok(tree_sitter_javascript::LANGUAGE.into()),
        _ => Err(StubgenError::unsupported(format!(
            "No tree-sitter grammar for: {}",
            language_key
        ))),
    }
}

/// Create a new parser for the given language
pub fn create_parser_for_language(language_key: &str) -> Result<tree_sitter::Parser> {
    let mut parser = tree_sitter::Parser::new();
    let tree_sitter_language = get_tree_sitter_language(language_key)?;
    parser.set_language(&tree_sitter_language).map_err(|e| {
        StubgenError::parse(
            language_key,
            format!("Failed to set parser language: {}", e),
        )
    })?;
    Ok(parser)
}

/// Check whether a file extension (with or without leading dot) is supported.
///
/// Matching is case-sensitive: `module.JS` is not treated as JavaScript.
pub fn extension_is_supported(ext: &str) -> bool {
    find_language_by_extension(ext.trim_start_matches('.')).is_some()
}

fn find_language_by_extension(ext: &str) -> Option<&'static LanguageInfo> {
    let target = ext.trim_start_matches('.');
    registered_languages()
        .iter()
        .find(|info| info.extensions.iter().any(|candidate| *candidate == target))
}

fn normalize_language_key(language: &str) -> Option<&'static str> {
    match language.to_ascii_lowercase().as_str() {
        "js" | "jsx" | "mjs" | "cjs" | "javascript" => Some("js"),
        other => registered_languages()
            .iter()
            .find(|info| info.key == other)
            .map(|info| info.key),
    }
}
