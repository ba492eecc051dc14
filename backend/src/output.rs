//! Snapshot output sinks
//!
//! Trials periodically emit `(label, time, infected fraction)` snapshots.
//! The sink is injected by the caller, so the same trial code can stream to a
//! TSV file, collect into memory for inspection, or discard everything when
//! only the terminal count matters.

use std::io::{self, Write};

/// One emitted trial snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub label: String,
    pub time: f64,
    pub infected_fraction: f64,
}

/// Destination for trial snapshots
pub trait SnapshotSink {
    /// Record one snapshot
    fn record(&mut self, label: &str, time: f64, infected_fraction: f64) -> io::Result<()>;
}

/// Tab-separated snapshot writer
///
/// Writes a `model\ttime\ti` header when constructed, then one
/// `label\ttime\tfraction` row per snapshot with times to three decimals and
/// fractions to five.
///
/// # Example
///
/// ```rust
/// use sis_simulator_core_rs::{SnapshotSink, TsvSink};
///
/// let mut sink = TsvSink::new(Vec::new()).unwrap();
/// sink.record("Cont", 1.5, 0.25).unwrap();
/// let text = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(text, "model\ttime\ti\nCont\t1.500\t0.25000\n");
/// ```
pub struct TsvSink<W: Write> {
    writer: W,
}

impl<W: Write> TsvSink<W> {
    /// Wrap a writer, emitting the header line immediately
    pub fn new(mut writer: W) -> io::Result<Self> {
        writeln!(writer, "model\ttime\ti")?;
        Ok(Self { writer })
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SnapshotSink for TsvSink<W> {
    fn record(&mut self, label: &str, time: f64, infected_fraction: f64) -> io::Result<()> {
        writeln!(self.writer, "{}\t{:.3}\t{:.5}", label, time, infected_fraction)
    }
}

/// Sink that collects snapshots in memory (tests, FFI)
#[derive(Debug, Default)]
pub struct MemorySink {
    snapshots: Vec<Snapshot>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots recorded so far
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Consume the sink, returning the collected snapshots
    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots
    }
}

impl SnapshotSink for MemorySink {
    fn record(&mut self, label: &str, time: f64, infected_fraction: f64) -> io::Result<()> {
        self.snapshots.push(Snapshot {
            label: label.to_string(),
            time,
            infected_fraction,
        });
        Ok(())
    }
}

/// Sink that discards every snapshot (ensemble runs)
#[derive(Debug, Default)]
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn record(&mut self, _label: &str, _time: f64, _infected_fraction: f64) -> io::Result<()> {
        Ok(())
    }
}
