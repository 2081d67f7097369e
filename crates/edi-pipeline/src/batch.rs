//! Batch processing logic
//!
//! Files are processed one at a time: read, parse, generate, write, then
//! archive. Any failure in that chain routes the source file to the error
//! directory and the loop moves on to the next file.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use edi_adapter_edifact::{OrderParser, read_segments};
use edi_adapter_xml::XmlGenerator;
use edi_order::EventSink;
use tracing::{debug, info_span};

use crate::archive::move_into;
use crate::inbox::{Directories, discover_inputs};
use crate::naming::{NamingMode, OutputNamer};
use crate::{Error, Result};

/// A successfully converted input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// Input path as discovered in the inbox
    pub source: PathBuf,
    /// Written XML file
    pub output: PathBuf,
    /// Number of line items in the order
    pub item_count: usize,
    /// Whether the input reached the archive directory
    pub archived: bool,
}

/// An input file whose conversion failed
#[derive(Debug, Clone)]
pub struct FileFailure {
    /// Input path as discovered in the inbox
    pub source: PathBuf,
    /// What went wrong
    pub error: Error,
    /// Whether the input reached the error directory
    pub moved_to_error: bool,
}

/// Result of one batch run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Converted files, in processing order
    pub converted: Vec<FileOutcome>,
    /// Failed files, in processing order
    pub failed: Vec<FileFailure>,
    /// Set when the inbox held no EDI files
    pub no_input: bool,
    /// Wall time of the run
    pub duration: Duration,
}

impl RunSummary {
    /// Number of files attempted
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    /// Whether every attempted file converted and was archived
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty() && self.converted.iter().all(|o| o.archived)
    }
}

/// Sequential inbox-to-outbox converter
pub struct BatchRunner<'a> {
    dirs: Directories,
    sink: &'a dyn EventSink,
    parser: OrderParser,
    generator: XmlGenerator,
    namer: OutputNamer,
    limit: Option<usize>,
}

impl<'a> BatchRunner<'a> {
    /// Create a runner reporting to `sink`
    pub fn new(dirs: Directories, sink: &'a dyn EventSink) -> Self {
        Self {
            dirs,
            sink,
            parser: OrderParser::new(),
            generator: XmlGenerator::new(),
            namer: OutputNamer::default(),
            limit: None,
        }
    }

    /// Select how output files are named
    pub fn naming(mut self, mode: NamingMode) -> Self {
        self.namer = OutputNamer::new(mode);
        self
    }

    /// Indent the generated XML
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.generator = self.generator.pretty(pretty);
        self
    }

    /// Process at most `limit` files per run
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Directories this runner works with
    pub fn directories(&self) -> &Directories {
        &self.dirs
    }

    /// Convert every EDI file in the inbox.
    ///
    /// Returns `Err` only when the inbox itself cannot be read. An empty
    /// inbox ends the run gracefully with [`RunSummary::no_input`] set.
    pub fn run(&mut self) -> Result<RunSummary> {
        let start = Instant::now();
        self.sink.info("Process started.");

        let mut inputs = discover_inputs(&self.dirs.inbox).inspect_err(|e| {
            self.sink.error(&format!("Cannot scan inbox: {e}"));
        })?;

        let mut summary = RunSummary::default();
        if inputs.is_empty() {
            self.sink.error("No EDI files found.");
            summary.no_input = true;
            summary.duration = start.elapsed();
            return Ok(summary);
        }

        if let Some(limit) = self.limit {
            inputs.truncate(limit);
        }

        for path in inputs {
            let name = file_name(&path);
            let _span = info_span!("file", name = %name).entered();
            self.sink.info(&format!("Processing EDI file: {name}"));

            match self.process_file(&path) {
                Ok(outcome) => summary.converted.push(outcome),
                Err(error) => {
                    self.sink
                        .error(&format!("Error processing {name}: {error}"));
                    let moved_to_error = self.route_to_error(&path, &name);
                    summary.failed.push(FileFailure {
                        source: path,
                        error,
                        moved_to_error,
                    });
                }
            }
        }

        summary.duration = start.elapsed();
        debug!(
            converted = summary.converted.len(),
            failed = summary.failed.len(),
            elapsed_ms = summary.duration.as_millis(),
            "Batch run finished"
        );
        self.sink.info("All files processed.");
        Ok(summary)
    }

    /// Run the full pipeline for one file, without error routing.
    ///
    /// A failed archive move is reported through the sink and reflected in
    /// [`FileOutcome::archived`]; it does not fail the file.
    pub fn process_file(&mut self, path: &Path) -> Result<FileOutcome> {
        let name = file_name(path);

        let segments = read_segments(path, self.sink)?;
        let order = self.parser.parse(&segments, self.sink);
        let xml = self
            .generator
            .generate(&order, self.sink)
            .map_err(|e| Error::generate(path, e.to_string()))?;

        let output = self.namer.next_path(&self.dirs.outbox);
        std::fs::write(&output, xml).map_err(|e| Error::write(&output, e.to_string()))?;
        self.sink
            .info(&format!("XML file created: {}", output.display()));

        let archived = match move_into(path, &self.dirs.archive) {
            Ok(_) => {
                self.sink.info(&format!("Archived EDI file: {name}"));
                true
            }
            Err(e) => {
                self.sink
                    .error(&format!("Failed to archive EDI file: {name}: {e}"));
                false
            }
        };

        Ok(FileOutcome {
            source: path.to_path_buf(),
            output,
            item_count: order.item_count(),
            archived,
        })
    }

    fn route_to_error(&self, path: &Path, name: &str) -> bool {
        match move_into(path, &self.dirs.error) {
            Ok(_) => {
                self.sink
                    .info(&format!("Moved EDI file to error directory: {name}"));
                true
            }
            Err(e) => {
                self.sink.error(&format!(
                    "Failed to move EDI file to error directory: {name}: {e}"
                ));
                false
            }
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}
