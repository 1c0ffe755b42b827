//! JSON-lines record pipeline service.

use std::io::{BufRead, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::domain::{FilterChain, JsonRecord, ListenerError};
use crate::listener::{FilteringListener, MessageListener, SharedStrategy};

/// Counters for one pipeline run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    /// Records read from input
    pub received: u64,
    /// Records written to output
    pub admitted: u64,
    /// Records dropped by filters
    pub discarded: u64,
}

/// Delegate listener writing each admitted record as one JSON line.
pub struct JsonLinesWriter<W> {
    writer: Mutex<W>,
    written: AtomicU64,
}

impl<W: Write> JsonLinesWriter<W> {
    /// Create a new JsonLinesWriter.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            written: AtomicU64::new(0),
        }
    }

    /// Number of records written so far.
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    /// Flush buffered output.
    pub fn flush(&self) -> std::io::Result<()> {
        self.writer
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }
}

impl<W: Write + Send> MessageListener<String, serde_json::Value> for JsonLinesWriter<W> {
    fn on_message(&self, record: JsonRecord) -> Result<(), ListenerError> {
        let line = serde_json::to_string(&record)?;
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{}", line).map_err(|e| {
            ListenerError::Delegate(format!(
                "failed to write record {}/{}@{}: {}",
                record.topic, record.partition, record.offset, e
            ))
        })?;
        self.written.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

/// Service filtering a stream of JSON-lines records.
pub struct PipelineService {
    config: Config,
    strategy: SharedStrategy<String, serde_json::Value>,
}

impl PipelineService {
    /// Create a new PipelineService with filters built from configuration.
    pub fn new(config: Config) -> Self {
        let strategy: SharedStrategy<String, serde_json::Value> =
            Arc::new(FilterChain::from_config(&config));
        Self { config, strategy }
    }

    /// Run the pipeline.
    ///
    /// Reads one record per line from `reader` and writes admitted records to
    /// `writer`. Blank lines are ignored. Stops at the first malformed line
    /// or filter failure.
    pub fn run<R, W>(&self, reader: R, writer: W) -> Result<PipelineStats>
    where
        R: BufRead,
        W: Write + Send,
    {
        let listener =
            FilteringListener::new(JsonLinesWriter::new(writer), Some(self.strategy.clone()))?;
        listener.set_skip_filtering(self.config.skip_filtering);
        debug!("Pipeline started: skip_filtering={}", listener.is_skip_filtering());

        let mut received = 0u64;
        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
            if line.trim().is_empty() {
                continue;
            }

            let record: JsonRecord = match serde_json::from_str(&line) {
                Ok(record) => record,
                Err(e) => {
                    error!("Malformed record on line {}: {}", line_no, e);
                    return Err(e).with_context(|| format!("Malformed record on line {}", line_no));
                }
            };
            received += 1;

            debug!(
                "Received record: topic={}, partition={}, offset={}",
                record.topic, record.partition, record.offset
            );

            if let Err(e) = listener.on_message(record) {
                error!("Failed to process record on line {}: {}", line_no, e);
                return Err(e)
                    .with_context(|| format!("Failed to process record on line {}", line_no));
            }
        }

        listener
            .delegate()
            .flush()
            .context("Failed to flush output")?;

        let stats = PipelineStats {
            received,
            admitted: listener.delegate().written(),
            discarded: listener.discarded_count(),
        };
        info!(
            "Pipeline finished: received={}, admitted={}, discarded={}",
            stats.received, stats.admitted, stats.discarded
        );

        Ok(stats)
    }
}
