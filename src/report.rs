use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::errors::ReportError;

/// Averaged learning curves keyed by agent description, ready for plotting
/// (x-axis: step index).
#[derive(Debug, Default, PartialEq, Serialize)]
pub struct Report {
    /// Mean cumulative reward per step.
    pub rewards: BTreeMap<String, Vec<f64>>,
    /// Mean fraction of optimal pulls per step, in [0, 1].
    pub optimal_action_rate: BTreeMap<String, Vec<f64>>,
}

impl Report {
    pub fn write_to_file(&self, path: &Path) -> Result<(), ReportError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_json(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn write_json(&self, mut writer: impl Write) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        Ok(())
    }
}
