use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::common::frame::ArgbFrame;
use crate::image_pipeline::snapshot::types::SnapshotConfig;

pub trait SnapshotWriter {
    fn write_snapshot(&self, frame: &ArgbFrame, output: &mut dyn Write, config: &SnapshotConfig) -> Result<()>;
}
