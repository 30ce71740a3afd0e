//! Line-delimited label table

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};

/// Class labels, one per model output index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    labels: Vec<String>,
}

impl LabelTable {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Reads one label per line. Line endings (`\n` or `\r\n`) are stripped,
    /// everything else is kept verbatim, including empty lines.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let labels = reader
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .map_err(|e| PipelineError::LabelReadError(e.to_string()))?;
        debug!("Loaded {} labels", labels.len());
        Ok(Self { labels })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| PipelineError::LabelReadError(format!("{}: {}", path.display(), e)))?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl FromIterator<String> for LabelTable {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
