#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/test-support/src/lib.rs
//!
//! Shared test utilities for the codelog workspace.
//!
//! [`SharedBuffer`] stands in for standard output so tests can assert on what
//! a logger printed, and [`LogDir`] hands out paths inside a temporary
//! directory that is removed when the value is dropped.

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use tempfile::TempDir;

/// An in-memory writer whose clones all append to the same buffer.
///
/// Hand one clone to the code under test as its console writer and keep the
/// other to inspect the output afterwards.
#[derive(Clone, Debug, Default)]
pub struct SharedBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.inner
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Everything written so far, decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    /// Everything written so far, split into lines.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }

    /// Reports whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Discards the captured output.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A temporary directory for log files.
#[derive(Debug)]
pub struct LogDir {
    dir: TempDir,
}

impl LogDir {
    /// Creates a fresh temporary directory.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temporary log directory"),
        }
    }

    /// Path of `name` inside the directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Reads `name` back as text.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("read log file")
    }

    /// Reads `name` back as lines, each still carrying its terminator.
    pub fn read_lines(&self, name: &str) -> Vec<String> {
        self.read(name)
            .split_inclusive('\n')
            .map(str::to_owned)
            .collect()
    }
}

impl Default for LogDir {
    fn default() -> Self {
        Self::new()
    }
}
