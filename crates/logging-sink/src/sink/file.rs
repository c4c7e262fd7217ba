//! crates/logging-sink/src/sink/file.rs

use std::fs::File;
use std::io;
use std::path::Path;

use super::MessageSink;

/// A sink that writes to a log file.
pub type FileSink = MessageSink<File>;

impl MessageSink<File> {
    /// Creates `path`, truncating any existing file, and wraps it in a sink.
    ///
    /// Lines are written straight to the file without an intermediate buffer;
    /// [`write_line`](MessageSink::write_line) flushes after every line.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        File::create(path).map(Self::new)
    }

    /// Flushes outstanding data and syncs it to disk, consuming the sink.
    pub fn close(mut self) -> io::Result<()> {
        self.flush()?;
        self.writer.sync_all()
    }
}
