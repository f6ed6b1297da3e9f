//! Clean the output directory

use anyhow::Result;
use std::fs;

use crate::Guide;

/// Remove everything a previous export wrote
pub fn run(guide: &Guide) -> Result<()> {
    if guide.output_dir.exists() {
        fs::remove_dir_all(&guide.output_dir)?;
        tracing::info!("Deleted: {:?}", guide.output_dir);
    }

    Ok(())
}
