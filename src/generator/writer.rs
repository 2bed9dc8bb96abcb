//! Persisting generated suites.

use std::path::Path;

use tracing::info;

use super::collector::TestSuite;
use crate::core::errors::{Result, StubgenError};

/// Write `suite` to `output_path` in one whole-content write.
pub async fn write_suite(suite: &TestSuite, output_path: &Path) -> Result<()> {
    let content = suite.content();
    tokio::fs::write(output_path, content.as_bytes())
        .await
        .map_err(|e| {
            StubgenError::io(
                format!("Failed to write test file: {}", output_path.display()),
                e,
            )
        })?;

    info!(
        "Wrote {} test block(s) ({} bytes) to {}",
        suite.len(),
        content.len(),
        output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;
    use tempfile::TempDir;

    fn suite(blocks: &[&str]) -> TestSuite {
        TestSuite {
            blocks: blocks.iter().map(|b| b.to_string()).collect::<IndexSet<_>>(),
            bindings: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_writes_joined_blocks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("math.test.js");

        write_suite(&suite(&["first", "second"]), &path).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\n\nsecond");
    }

    #[tokio::test]
    async fn test_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("math.test.js");
        std::fs::write(&path, "stale content that is much longer than the new one").unwrap();

        write_suite(&suite(&["fresh"]), &path).await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[tokio::test]
    async fn test_missing_directory_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("math.test.js");

        let err = write_suite(&suite(&["block"]), &path).await.unwrap_err();
        assert!(matches!(err, StubgenError::Io { .. }));
        assert!(err.to_string().contains("math.test.js"));
    }
}
