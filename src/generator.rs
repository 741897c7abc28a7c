//! The page generator.
//!
//! [`PageGenerator`] is the single entry point for turning one metadata
//! record line into one wiki page on disk. It is configured once, holds no
//! mutable state, and every [`render_line`](PageGenerator::render_line) call
//! is independent: repeat invocations for the same record are idempotent,
//! different records touch disjoint output files.
//!
//! Rendering is synchronous and single-threaded — blocking reads of the two
//! source files, one blocking write of the page. Any failure aborts that
//! record and propagates; there are no retries and no partial-success
//! states.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::RenderError;
use crate::paths;
use crate::record::BugPatternRecord;
use crate::render::{render_page, RenderOptions};

/// Renders metadata record lines into wiki pages.
///
/// # Examples
///
/// ```rust,no_run
/// use lintdoc::config::Config;
/// use lintdoc::generator::PageGenerator;
///
/// let generator = PageGenerator::from_config(&Config::default());
/// let written = generator.render_line("...\t...")?;
/// println!("wrote {}", written.display());
/// # Ok::<(), lintdoc::error::RenderError>(())
/// ```
pub struct PageGenerator {
    output_dir: PathBuf,
    example_base: PathBuf,
    explanation_base: PathBuf,
    options: RenderOptions,
}

impl PageGenerator {
    pub fn new(
        output_dir: &Path,
        example_base: &Path,
        explanation_base: &Path,
        options: RenderOptions,
    ) -> PageGenerator {
        PageGenerator {
            output_dir: output_dir.to_path_buf(),
            example_base: example_base.to_path_buf(),
            explanation_base: explanation_base.to_path_buf(),
            options,
        }
    }

    /// Builds a generator from a loaded [`Config`].
    pub fn from_config(config: &Config) -> PageGenerator {
        PageGenerator::new(
            &config.dirs.output,
            &config.dirs.examples,
            &config.dirs.explanations,
            RenderOptions::new(config.render.front_matter, config.render.pygments),
        )
    }

    /// Renders one record line and writes `<output>/<short_name>.md`.
    ///
    /// The page is assembled fully in memory, written to a temporary file in
    /// the output directory, and only then persisted over the final path —
    /// a failed render never leaves a partial page behind. An existing page
    /// with the same name is overwritten.
    ///
    /// # Errors
    ///
    /// [`RenderError::Record`] for a malformed line,
    /// [`RenderError::MissingExample`] / [`RenderError::MissingExplanation`]
    /// when a source is absent, [`RenderError::Io`] for read/write failures.
    pub fn render_line(&self, line: &str) -> Result<PathBuf, RenderError> {
        let record = BugPatternRecord::parse(line)?;
        let page = self.render_record(&record)?;

        let out = paths::output_path(&self.output_dir, &record.short_name);
        let mut tmp = tempfile::NamedTempFile::new_in(&self.output_dir)?;
        tmp.write_all(page.as_bytes())?;
        tmp.persist(&out).map_err(|e| RenderError::Io(e.error))?;
        Ok(out)
    }

    /// Renders one record line to a string without touching the output
    /// directory. Used by `lintdoc preview`.
    pub fn render_to_string(&self, line: &str) -> Result<String, RenderError> {
        let record = BugPatternRecord::parse(line)?;
        self.render_record(&record)
    }

    fn render_record(&self, record: &BugPatternRecord) -> Result<String, RenderError> {
        let example = self.read_example(record)?;
        let explanation = self.resolve_explanation(record)?;
        Ok(render_page(record, &explanation, &example, &self.options))
    }

    fn read_example(&self, record: &BugPatternRecord) -> Result<String, RenderError> {
        let path = paths::example_path(&self.example_base, &record.qualified_name);
        if !path.is_file() {
            return Err(RenderError::MissingExample(path));
        }
        Ok(fs::read_to_string(&path)?)
    }

    /// Resolves the long-form explanation for a record.
    ///
    /// A non-empty inline field always wins; otherwise the sidecar
    /// `<short_name>.md` under the explanation base directory is read.
    /// Sidecar content is trimmed of trailing whitespace so that a sidecar
    /// holding exactly the inline text renders byte-identically.
    fn resolve_explanation(&self, record: &BugPatternRecord) -> Result<String, RenderError> {
        if !record.explanation.is_empty() {
            return Ok(record.explanation.clone());
        }
        let sidecar = paths::sidecar_path(&self.explanation_base, &record.short_name);
        if !sidecar.is_file() {
            return Err(RenderError::MissingExplanation(record.short_name.clone()));
        }
        let content = fs::read_to_string(&sidecar)?;
        let trimmed = content.trim_end();
        if trimmed.is_empty() {
            return Err(RenderError::MissingExplanation(record.short_name.clone()));
        }
        Ok(trimmed.to_string())
    }
}
