//! crates/logging-sink/src/sink/mod.rs
//! The line sink and its file-backed alias.

use std::fmt;

/// Streaming sink that writes rendered log lines into an [`std::io::Write`] target.
///
/// Each call to [`write_line`](Self::write_line) writes the line, terminates it
/// with `\n` and flushes the writer so that nothing is left buffered if the
/// process stops abruptly.
///
/// ```
/// use logging_sink::MessageSink;
///
/// let mut buffer = Vec::new();
/// let mut sink = MessageSink::new(&mut buffer);
///
/// sink.write_line("INFO: started (RUN-001)")?;
/// sink.write_line("WARNING: disk low (DISK-002)")?;
/// drop(sink);
///
/// let output = String::from_utf8(buffer).expect("utf-8");
/// assert_eq!(output, "INFO: started (RUN-001)\nWARNING: disk low (DISK-002)\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct MessageSink<W> {
    writer: W,
    lines_written: u64,
}

mod file;
mod writing;

pub use file::FileSink;

impl<W> MessageSink<W> {
    /// Wraps `writer`.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            lines_written: 0,
        }
    }

    /// Number of lines successfully written through this sink.
    #[must_use]
    pub const fn lines_written(&self) -> u64 {
        self.lines_written
    }
}

impl<W> fmt::Debug for MessageSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("lines_written", &self.lines_written)
            .finish_non_exhaustive()
    }
}
