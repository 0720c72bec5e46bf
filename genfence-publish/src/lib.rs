//! Local artifact publishing.
//!
//! Copies built artifacts (e.g. a package manifest and the artifact itself)
//! into a destination repository tree on the local filesystem. Copies are not
//! atomic: a mid-way failure may leave a partially populated destination, but
//! each copy overwrites rather than appends, so the operation is safe to
//! retry.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced while publishing to the local filesystem.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to create destination directory '{path}'")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to copy '{src}' to '{dst}'")]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Publishes artifacts under a destination root directory.
#[derive(Debug, Clone)]
pub struct LocalPublisher {
    root: PathBuf,
}

impl LocalPublisher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Destination root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Copy each artifact into `<root>/<product_path>` under its base name,
    /// creating the destination tree if absent. One progress line per file is
    /// written to `out`.
    ///
    /// If the destination directory cannot be created, no file is copied.
    pub fn publish(
        &self,
        product_path: impl AsRef<Path>,
        artifacts: &[PathBuf],
        out: &mut dyn Write,
    ) -> Result<(), PublishError> {
        let dst_dir = self.root.join(product_path.as_ref());
        std::fs::create_dir_all(&dst_dir).map_err(|source| PublishError::CreateDir {
            path: dst_dir.clone(),
            source,
        })?;

        for artifact in artifacts {
            copy_artifact(artifact, &dst_dir, out)?;
        }
        Ok(())
    }
}

fn copy_artifact(src: &Path, dst_dir: &Path, out: &mut dyn Write) -> Result<(), PublishError> {
    let Some(name) = src.file_name() else {
        return Err(PublishError::Copy {
            src: src.to_path_buf(),
            dst: dst_dir.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "source path has no file name",
            ),
        });
    };
    let dst = dst_dir.join(name);

    // Progress output is best effort.
    let _ = writeln!(out, "Copying {} to {}...", src.display(), dst.display());

    std::fs::copy(src, &dst).map_err(|source| PublishError::Copy {
        src: src.to_path_buf(),
        dst,
        source,
    })?;
    Ok(())
}
