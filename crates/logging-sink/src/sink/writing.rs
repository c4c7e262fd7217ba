//! crates/logging-sink/src/sink/writing.rs

use super::MessageSink;
use std::io::{self, Write};

impl<W> MessageSink<W>
where
    W: Write,
{
    /// Writes `line` followed by `\n` and flushes.
    ///
    /// The line is expected to be fully rendered; the sink never inspects or
    /// rewrites it. Flushing after every line keeps files readable by other
    /// processes while the logger is still running.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.lines_written += 1;
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_line_is_newline_terminated() {
        let mut buffer = Vec::new();
        let mut sink = MessageSink::new(&mut buffer);
        sink.write_line("INFO: first (A)").expect("write succeeds");
        sink.write_line("ERROR: second (B)").expect("write succeeds");
        assert_eq!(sink.lines_written(), 2);
        drop(sink);

        assert_eq!(buffer, b"INFO: first (A)\nERROR: second (B)\n");
    }

    #[test]
    fn empty_line_is_still_terminated() {
        let mut buffer = Vec::new();
        MessageSink::new(&mut buffer)
            .write_line("")
            .expect("write succeeds");
        assert_eq!(buffer, b"\n");
    }

    #[test]
    fn failed_write_is_not_counted() {
        struct Full;

        impl Write for Full {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("no space left"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut sink = MessageSink::new(Full);
        assert!(sink.write_line("lost").is_err());
        assert_eq!(sink.lines_written(), 0);
    }
}
