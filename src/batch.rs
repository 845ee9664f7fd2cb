//! Batch processing of independent documents.
//!
//! Documents share no state, so a batch is processed in parallel with
//! zero coordination. Failure on one document is logged and counted;
//! it never aborts the rest of the batch.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::sync::Mutex;

use rayon::prelude::*;

use crate::config::InferConfig;
use crate::error::Result;
use crate::infer::infer_outline;
use crate::model::DocumentOutline;
use crate::output::{write_json, JsonFormat};
use crate::source::FragmentSource;

/// Destination for one document's outline record.
pub trait OutlineSink: Send + Sync {
    /// Write the outline record.
    fn write(&self, outline: &DocumentOutline) -> Result<()>;
}

/// One unit of batch work: a document handle paired with its output
/// destination.
pub struct BatchJob {
    /// Where the fragments come from
    pub source: Box<dyn FragmentSource>,
    /// Where the outline goes
    pub sink: Box<dyn OutlineSink>,
}

impl BatchJob {
    /// Pair a source with a sink.
    pub fn new(source: Box<dyn FragmentSource>, sink: Box<dyn OutlineSink>) -> Self {
        Self { source, sink }
    }
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Documents processed successfully
    pub processed: usize,
    /// Documents skipped due to source or sink failure
    pub failed: usize,
}

/// Process one document: pull fragments, infer, write.
pub fn process_document(
    source: &dyn FragmentSource,
    sink: &dyn OutlineSink,
    config: &InferConfig,
) -> Result<DocumentOutline> {
    let id = source.document_id();
    log::info!("{}: reading fragments", id);
    let fragments = source.fragments()?;

    log::info!("{}: inferring outline from {} fragments", id, fragments.len());
    let outline = infer_outline(&fragments, config);

    log::info!(
        "{}: title={:?}, {} entries",
        id,
        outline.title,
        outline.outline.len()
    );
    sink.write(&outline)?;
    Ok(outline)
}

/// Run a batch of jobs in parallel.
pub fn run_batch(jobs: &[BatchJob], config: &InferConfig) -> BatchSummary {
    let failures: usize = jobs
        .par_iter()
        .map(|job| {
            match process_document(job.source.as_ref(), job.sink.as_ref(), config) {
                Ok(_) => 0,
                Err(e) => {
                    log::warn!("{}: skipped: {}", job.source.document_id(), e);
                    1
                }
            }
        })
        .sum();

    BatchSummary {
        processed: jobs.len() - failures,
        failed: failures,
    }
}

/// Sink that writes pretty or compact JSON to a file path.
///
/// The file is created on write, so constructing the sink is cheap
/// and side-effect free.
pub struct JsonFileSink {
    path: PathBuf,
    format: JsonFormat,
}

impl JsonFileSink {
    /// Create a sink for the given path.
    pub fn new(path: impl Into<PathBuf>, format: JsonFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    /// The destination path.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl OutlineSink for JsonFileSink {
    fn write(&self, outline: &DocumentOutline) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        write_json(outline, &mut writer, self.format)
    }
}

/// In-memory sink, mainly useful in tests.
#[derive(Default)]
pub struct MemorySink {
    captured: Mutex<Option<DocumentOutline>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the captured outline, if any was written.
    pub fn take(&self) -> Option<DocumentOutline> {
        self.captured.lock().expect("sink mutex poisoned").take()
    }
}

impl OutlineSink for MemorySink {
    fn write(&self, outline: &DocumentOutline) -> Result<()> {
        *self.captured.lock().expect("sink mutex poisoned") = Some(outline.clone());
        Ok(())
    }
}
