// ABOUTME: Output writers for rendered acts (stdout, files)
// ABOUTME: Handles writing formatted content to the chosen destination

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use super::error::{OutputError, Result};

#[async_trait]
pub trait OutputWriter: Send + Sync {
    async fn write(&self, content: &str) -> Result<()>;
}

#[derive(Default)]
pub struct StdoutWriter;

pub struct FileWriter {
    path: PathBuf,
    create_dirs: bool,
}

impl StdoutWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OutputWriter for StdoutWriter {
    async fn write(&self, content: &str) -> Result<()> {
        println!("{}", content);
        debug!("Output written to stdout ({} chars)", content.len());
        Ok(())
    }
}

impl FileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            create_dirs: true,
        }
    }

    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl OutputWriter for FileWriter {
    async fn write(&self, content: &str) -> Result<()> {
        if self.create_dirs {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|source| OutputError::CreateDir {
                        path: parent.to_path_buf(),
                        source,
                    })?;
            }
        }

        fs::write(&self.path, content)
            .await
            .map_err(|source| OutputError::WriteError {
                path: self.path.clone(),
                source,
            })?;

        info!("Output written to {}", self.path.display());
        Ok(())
    }
}
