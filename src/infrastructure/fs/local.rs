//! Local file store
//!
//! Implements the FileStore port for local disk operations. File copies go
//! through a tempfile-in-parent + rename so a destination file is never
//! observable half-written, and every handle is released before the
//! primitive returns.

use std::fs;
use std::io;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::{CopyOutcome, FileStore, FsError, FsResult};

/// Local filesystem implementation of the FileStore port
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    /// Create a new LocalStore instance
    pub fn new() -> Self {
        Self
    }

    fn write_file_atomic(src: &Path, dst: &Path) -> FsResult<()> {
        let parent = dst.parent().unwrap_or_else(|| Path::new("."));
        let mut reader = fs::File::open(src)?;
        let mut tmp = NamedTempFile::new_in(parent)?;
        io::copy(&mut reader, tmp.as_file_mut())?;
        tmp.persist(dst).map_err(|e| FsError::Io(e.error))?;
        Ok(())
    }
}

impl FileStore for LocalStore {
    fn create_dir(&self, path: &Path) -> FsResult<()> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(FsError::NotADirectory(path.to_path_buf())),
            Err(_) => {
                fs::create_dir_all(path)?;
                Ok(())
            }
        }
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> FsResult<CopyOutcome> {
        if !src.is_file() {
            return Ok(CopyOutcome::SkippedMissing);
        }
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        Self::write_file_atomic(src, dst)?;
        Ok(CopyOutcome::Copied)
    }

    fn copy_dir(&self, src: &Path, dst: &Path) -> FsResult<CopyOutcome> {
        if !src.is_dir() {
            return Ok(CopyOutcome::SkippedMissing);
        }
        self.create_dir(dst)?;

        for entry in fs::read_dir(src)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            let src_path = entry.path();
            let dst_path = dst.join(entry.file_name());

            if file_type.is_dir() {
                self.copy_dir(&src_path, &dst_path)?;
            } else if file_type.is_file() {
                self.copy_file(&src_path, &dst_path)?;
            }
            // Symlinks and special files are skipped
        }

        Ok(CopyOutcome::Copied)
    }

    fn delete_file(&self, path: &Path) -> FsResult<()> {
        match fs::metadata(path) {
            // No-op on directories; this primitive never recurses
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => {
                fs::remove_file(path)?;
                Ok(())
            }
            // No-op on missing paths
            Err(_) => Ok(()),
        }
    }

    fn delete_dir(&self, path: &Path) -> FsResult<()> {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => {
                fs::remove_dir_all(path)?;
                Ok(())
            }
            // No-op on regular files and missing paths
            _ => Ok(()),
        }
    }

    fn read_lines(&self, path: &Path) -> FsResult<Vec<String>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        Ok(content
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect())
    }
}
