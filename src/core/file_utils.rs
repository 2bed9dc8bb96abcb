//! File utilities: reading sources and deriving the names of generated files.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::errors::{Result, StubgenError};
use crate::lang::registry::extension_is_supported;

/// Safe file reading with UTF-8 validation and fallback handling
pub struct FileReader;

impl FileReader {
    /// Read a file to string, converting invalid UTF-8 lossily.
    pub async fn read_to_string(file_path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(file_path).await.map_err(|e| {
            StubgenError::io(format!("Failed to read {}", file_path.display()), e)
        })?;
        debug!("Read {} bytes from {}", bytes.len(), file_path.display());

        match String::from_utf8(bytes) {
            Ok(content) => Ok(content),
            Err(err) => {
                warn!(
                    "File contained invalid UTF-8, converted with lossy encoding: {}",
                    file_path.display()
                );
                Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
            }
        }
    }
}

/// Derive the path of the generated test file for `source`.
///
/// `math.js` becomes `math.<suffix>.js`, keeping the directory and the original
/// JavaScript extension. Paths without a JavaScript extension are rejected
/// because the derived name would collide with the source itself.
pub fn test_file_path(source: &Path, suffix: &str) -> Result<PathBuf> {
    let file_name = source_file_name(source)?;

    let (stem, extension) = match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && extension_is_supported(ext) => (stem, ext),
        _ => {
            return Err(StubgenError::validation_field(
                format!(
                    "refusing to derive a test file for {}: not a JavaScript file, \
                     the output would overwrite the source",
                    source.display()
                ),
                "input",
            ))
        }
    };

    Ok(source.with_file_name(format!("{stem}.{suffix}.{extension}")))
}

/// Name used in the generated `require('./<name>')` call.
///
/// A trailing `.js` is dropped so Node's resolver finds the file; any other
/// extension is kept because `require` does not probe for it.
pub fn module_reference(source: &Path) -> Result<String> {
    let file_name = source_file_name(source)?;

    Ok(match file_name.strip_suffix(".js") {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => file_name.to_string(),
    })
}

fn source_file_name(source: &Path) -> Result<&str> {
    source
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            StubgenError::validation_field(
                format!("input path has no UTF-8 file name: {}", source.display()),
                "input",
            )
        })
}
