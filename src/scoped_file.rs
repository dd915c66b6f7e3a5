//! Acquire-then-guaranteed-release around a block.
//!
//! [`Scoped`] acquires its resource on entry and releases it in `Drop`, so
//! the release runs on normal exit, on early return and while unwinding.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};

use crate::error::{Result, ShowcaseError};

pub trait Resource {
    fn label(&self) -> String;
    fn acquire(&mut self) -> io::Result<()>;
    fn release(&mut self) -> io::Result<()>;
}

pub struct Scoped<R: Resource> {
    resource: R,
}

impl<R: Resource> Scoped<R> {
    /// Announces and acquires `resource`. Nothing is released if acquisition fails.
    pub fn enter(mut resource: R) -> io::Result<Self> {
        let label = resource.label();
        println!("  Opening {}", label);
        tracing::debug!(resource = %label, "entering scope");
        resource.acquire()?;
        Ok(Scoped { resource })
    }
}

impl<R: Resource> Deref for Scoped<R> {
    type Target = R;

    fn deref(&self) -> &R {
        &self.resource
    }
}

impl<R: Resource> DerefMut for Scoped<R> {
    fn deref_mut(&mut self) -> &mut R {
        &mut self.resource
    }
}

impl<R: Resource> Drop for Scoped<R> {
    fn drop(&mut self) {
        let label = self.resource.label();
        println!("  Closing {}", label);
        if let Err(e) = self.resource.release() {
            tracing::warn!(resource = %label, error = %e, "release failed");
        } else {
            tracing::debug!(resource = %label, "left scope");
        }
    }
}

/// Runs `body` inside a scope over `resource`.
pub fn with_scope<R, T, F>(resource: R, body: F) -> io::Result<T>
where
    R: Resource,
    F: FnOnce(&mut R) -> io::Result<T>,
{
    let mut scope = Scoped::enter(resource)?;
    body(&mut *scope)
}

// =============================================================================
// File resource
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Read,
    Write,
}

pub struct FileManager {
    path: PathBuf,
    mode: Mode,
    file: Option<File>,
}

impl FileManager {
    pub fn new(path: impl Into<PathBuf>, mode: Mode) -> Self {
        FileManager {
            path: path.into(),
            mode,
            file: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    fn open_file(&mut self) -> io::Result<&mut File> {
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotConnected, "file is not open"))
    }
}

impl Resource for FileManager {
    fn label(&self) -> String {
        self.path.display().to_string()
    }

    fn acquire(&mut self) -> io::Result<()> {
        let file = match self.mode {
            Mode::Read => File::open(&self.path)?,
            Mode::Write => File::create(&self.path)?,
        };
        self.file = Some(file);
        Ok(())
    }

    fn release(&mut self) -> io::Result<()> {
        match self.file.take() {
            Some(mut file) if self.mode == Mode::Write => file.flush(),
            _ => Ok(()),
        }
    }
}

impl Read for FileManager {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.open_file()?.read(buf)
    }
}

impl Write for FileManager {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.open_file()?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.open_file()?.flush()
    }
}

/// Writes `content` to `path`, reads it back, then deletes the file.
pub fn round_trip(path: &Path, content: &str) -> Result<String> {
    let io_err = |e| ShowcaseError::io(path.display().to_string(), e);

    with_scope(FileManager::new(path, Mode::Write), |file| {
        file.write_all(content.as_bytes())
    })
    .map_err(io_err)?;

    let read_back = with_scope(FileManager::new(path, Mode::Read), |file| {
        let mut buf = String::new();
        file.read_to_string(&mut buf)?;
        Ok(buf)
    })
    .map_err(io_err)?;

    fs::remove_file(path).map_err(io_err)?;
    Ok(read_back)
}
