//! guidegen: exports generated pages for an implementation guide
//!
//! This crate resolves the guide's home page from configuration or from the
//! user's `ig-data` directory, writes it under the output directory with a
//! "do not edit" banner, and records it in the guide's `ImplementationGuide`
//! resource.

pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod manifest;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Directory holding user-provided guide material
pub const IG_DATA_DIR: &str = "ig-data";

/// Default output directory, relative to the project
pub const OUTPUT_DIR: &str = "fsh-generated";

/// The main guide project
#[derive(Clone)]
pub struct Guide {
    /// Guide configuration
    pub config: config::GuideConfig,
    /// Project ("tank") directory
    pub base_dir: PathBuf,
    /// User-provided material, if the project has an ig-data directory
    pub ig_data_dir: Option<PathBuf>,
    /// Output directory
    pub output_dir: PathBuf,
}

impl Guide {
    /// Create a new Guide instance from a project directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = config::GuideConfig::load_from_dir(&base_dir)?;

        let ig_data_dir = Some(base_dir.join(IG_DATA_DIR)).filter(|dir| dir.is_dir());
        let output_dir = base_dir.join(OUTPUT_DIR);

        Ok(Self {
            config,
            base_dir,
            ig_data_dir,
            output_dir,
        })
    }

    /// Write output somewhere other than the default directory
    pub fn with_output_dir<P: AsRef<Path>>(mut self, output_dir: P) -> Self {
        let output_dir = output_dir.as_ref();
        self.output_dir = if output_dir.is_absolute() {
            output_dir.to_path_buf()
        } else {
            self.base_dir.join(output_dir)
        };
        self
    }

    /// Export the guide's pages and definition
    pub fn export(&self) -> Result<commands::export::ExportSummary> {
        commands::export::run(self)
    }

    /// Clean the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
