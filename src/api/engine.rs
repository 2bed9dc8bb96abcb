//! Main generation engine: read, traverse, render, write.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::config::StubgenConfig;
use crate::core::errors::Result;
use crate::core::file_utils::{module_reference, test_file_path, FileReader};
use crate::generator::collector::{BindingCollector, DiscoveredBinding, TestSuite};
use crate::generator::renderer::TestBlockRenderer;
use crate::generator::writer::write_suite;
use crate::lang::javascript::JavaScriptAdapter;

/// Result of one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The test file was written
    Written {
        /// Path of the generated file
        output_path: PathBuf,
        /// Number of distinct blocks written
        block_count: usize,
    },
    /// Nothing was written; the content that would have been
    DryRun {
        /// Path the file would have been written to
        output_path: PathBuf,
        /// Generated file content
        content: String,
        /// Bindings found, duplicates included
        bindings: Vec<DiscoveredBinding>,
    },
    /// The source had no supported function definitions; nothing was written
    NoFunctionsFound,
}

/// Stub test generation engine
#[derive(Debug)]
pub struct StubgenEngine {
    config: StubgenConfig,
    renderer: TestBlockRenderer,
}

impl StubgenEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: StubgenConfig) -> Result<Self> {
        config.validate()?;
        let renderer = TestBlockRenderer::new()?;

        Ok(Self { config, renderer })
    }

    /// Path the generated tests for `source_path` are written to
    pub fn output_path_for(&self, source_path: &Path) -> Result<PathBuf> {
        test_file_path(source_path, &self.config.output.test_suffix)
    }

    /// Parse `source` and build its suite without touching the filesystem.
    ///
    /// `source_path` is only used for the module name and error messages.
    pub fn discover(&self, source: &str, source_path: &Path) -> Result<TestSuite> {
        let module_name = module_reference(source_path)?;
        let display_path = source_path.display().to_string();

        let mut adapter = JavaScriptAdapter::new()?;
        let mut collector = BindingCollector::new(self.config.discovery.clone());
        adapter.visit_source(source, &display_path, &mut collector)?;

        let suite = collector.into_suite(&self.renderer, &module_name)?;
        debug!(
            "{}: {} binding(s), {} distinct block(s)",
            display_path,
            suite.bindings.len(),
            suite.len()
        );
        Ok(suite)
    }

    /// Generate the test file for `source_path`.
    pub async fn generate_tests(&self, source_path: &Path) -> Result<GenerationOutcome> {
        let output_path = self.output_path_for(source_path)?;
        let suite = self.load_suite(source_path).await?;

        if suite.is_empty() {
            return Ok(GenerationOutcome::NoFunctionsFound);
        }

        write_suite(&suite, &output_path).await?;
        Ok(GenerationOutcome::Written {
            output_path,
            block_count: suite.len(),
        })
    }

    /// Like [`generate_tests`](Self::generate_tests) but returns the content
    /// instead of writing it.
    pub async fn preview_tests(&self, source_path: &Path) -> Result<GenerationOutcome> {
        let output_path = self.output_path_for(source_path)?;
        let suite = self.load_suite(source_path).await?;

        if suite.is_empty() {
            return Ok(GenerationOutcome::NoFunctionsFound);
        }

        Ok(GenerationOutcome::DryRun {
            output_path,
            content: suite.content(),
            bindings: suite.bindings,
        })
    }

    async fn load_suite(&self, source_path: &Path) -> Result<TestSuite> {
        info!("Generating tests for {}", source_path.display());
        let source = FileReader::read_to_string(source_path).await?;
        self.discover(&source, source_path)
    }
}
