//! Index page export
//!
//! The guide's home page can come from `indexPageContent` in the
//! configuration or from an `index.md`/`index.xml` file in the user's
//! ig-data directory. Exactly one source is used; it is wrapped in a
//! "do not edit" banner, written under the output directory and registered
//! in the guide definition as `index.html`.

pub mod banner;
pub mod source;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE;
use crate::error::{ExportError, Result};
use crate::logging::LogSink;
use crate::manifest::PageEntry;

pub use banner::Provenance;
pub use source::{
    Candidate, ContentSource, Format, FoundFile, Location, Resolved, CANDIDATES, INLINE_CANDIDATE,
};

/// Directory name used in messages when no ig-data directory exists
const DEFAULT_IG_DATA_NAME: &str = "ig-data";

/// What an index page export did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionResult {
    /// A page was written and registered
    Written {
        output_path: PathBuf,
        entry: PageEntry,
    },
    /// No source was configured or provided
    Absent,
}

/// Manifest entry for an index page of the given format
pub fn index_entry(format: Format) -> PageEntry {
    PageEntry::new("index.html", "Home", format.generation())
}

/// Resolves, wraps, writes and registers the guide's index page
pub struct IndexPageResolver<'a> {
    ig_data_dir: Option<&'a Path>,
    output_dir: &'a Path,
    log: &'a dyn LogSink,
}

impl<'a> IndexPageResolver<'a> {
    /// Create a resolver reading from `ig_data_dir` and writing under `output_dir`
    pub fn new(ig_data_dir: Option<&'a Path>, output_dir: &'a Path, log: &'a dyn LogSink) -> Self {
        Self {
            ig_data_dir,
            output_dir,
            log,
        }
    }

    /// Choose the index page source, warning when inline content hides a file
    pub fn resolve(&self, inline: Option<&str>) -> Option<Resolved> {
        let resolved = source::resolve(inline, source::discover(self.ig_data_dir))?;

        if let Some(ignored) = &resolved.superseded {
            self.log.warn(&format!(
                "Found both an \"indexPageContent\" property in {} and an index file at {}. \
                 The \"indexPageContent\" property will be used and the index file will be ignored.\n  File: {}",
                CONFIG_FILE,
                self.project_relative(ignored).display(),
                ignored.path.display()
            ));
        }

        Some(resolved)
    }

    /// Export the index page and append its entry to `pages`
    pub fn export(&self, inline: Option<&str>, pages: &mut Vec<PageEntry>) -> Result<ResolutionResult> {
        let Some(resolved) = self.resolve(inline) else {
            return Ok(ResolutionResult::Absent);
        };

        let candidate = resolved.source.candidate();
        let content = self.wrap(&resolved.source)?;

        self.remove_stale_outputs(candidate)?;

        let output_path = self.output_dir.join(candidate.relative_path());
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
        }
        fs::write(&output_path, content).map_err(|e| ExportError::io(&output_path, e))?;
        tracing::debug!("Wrote index page {:?}", output_path);

        let entry = index_entry(candidate.format);
        pages.push(entry.clone());

        Ok(ResolutionResult::Written { output_path, entry })
    }

    /// Final bytes for the chosen source
    fn wrap(&self, source: &ContentSource) -> Result<Vec<u8>> {
        match source {
            ContentSource::Inline(text) => Ok(banner::wrap(
                INLINE_CANDIDATE,
                Provenance::Config {
                    config_file: CONFIG_FILE,
                    ig_data_name: &self.ig_data_name(),
                },
                text.as_bytes(),
            )),
            ContentSource::File(found) => {
                let content = fs::read(&found.path).map_err(|e| ExportError::io(&found.path, e))?;
                let relative = self.project_relative(found);
                Ok(banner::wrap(
                    found.candidate,
                    Provenance::SourceFile(&relative),
                    &content,
                ))
            }
        }
    }

    /// Path of a found file as the user sees it, e.g. `ig-data/input/pages/index.md`
    fn project_relative(&self, found: &FoundFile) -> PathBuf {
        match self.ig_data_dir.and_then(Path::file_name) {
            Some(name) => Path::new(name).join(found.candidate.relative_path()),
            None => found.path.clone(),
        }
    }

    fn ig_data_name(&self) -> String {
        self.ig_data_dir
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_IG_DATA_NAME.to_string())
    }

    /// Delete index pages left by an earlier export at the other candidate
    /// paths. Only files carrying the generated banner are removed.
    fn remove_stale_outputs(&self, keep: Candidate) -> Result<()> {
        for candidate in CANDIDATES.iter().filter(|c| **c != keep) {
            let path = self.output_dir.join(candidate.relative_path());
            if !path.is_file() {
                continue;
            }
            let bytes = fs::read(&path).map_err(|e| ExportError::io(&path, e))?;
            if banner::is_generated(&bytes) {
                fs::remove_file(&path).map_err(|e| ExportError::io(&path, e))?;
                tracing::debug!("Removed stale index page {:?}", path);
            }
        }
        Ok(())
    }
}
