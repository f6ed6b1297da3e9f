//! Export the guide's generated pages and definition

use anyhow::Result;
use std::path::PathBuf;

use crate::index::{IndexPageResolver, ResolutionResult};
use crate::logging::{LogSink, TracingSink};
use crate::manifest::ImplementationGuide;
use crate::Guide;

/// What an export produced
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Outcome of the index page step
    pub index: ResolutionResult,
    /// Path of the written `ImplementationGuide` resource
    pub guide_path: PathBuf,
}

/// Export using the `tracing` log sink
pub fn run(guide: &Guide) -> Result<ExportSummary> {
    run_with_log(guide, &TracingSink)
}

/// Export, sending user-facing messages to `log`
pub fn run_with_log(guide: &Guide, log: &dyn LogSink) -> Result<ExportSummary> {
    let start = std::time::Instant::now();

    let mut ig = ImplementationGuide::from_config(&guide.config);

    let index = IndexPageResolver::new(guide.ig_data_dir.as_deref(), &guide.output_dir, log)
        .export(guide.config.index_page_content(), ig.pages_mut())?;

    match &index {
        ResolutionResult::Written { output_path, entry } => {
            tracing::info!(
                "Generated index page {:?} ({})",
                output_path,
                entry.generation
            );
        }
        ResolutionResult::Absent => {
            tracing::debug!("No index page content found, skipping index page");
        }
    }

    let guide_path = ig.write(&guide.output_dir)?;

    let duration = start.elapsed();
    tracing::info!(
        "Exported {} page(s) in {:.2}s",
        ig.pages().len(),
        duration.as_secs_f64()
    );

    Ok(ExportSummary { index, guide_path })
}
