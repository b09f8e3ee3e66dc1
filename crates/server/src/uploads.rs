use anyhow::{Context, Result};
use dela_core::sanitize::{numbered_file_name, sanitize_file_name};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Give up after this many taken names.
const MAX_ATTEMPTS: u32 = 1000;

/// Directory uploaded task attachments are stored in and served from.
#[derive(Clone, Debug)]
pub struct Uploads {
    dir: PathBuf,
}

impl Uploads {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Store `bytes` under a sanitized form of `client_name`, returning the
    /// name actually used. Existing files are never overwritten.
    pub fn store(&self, client_name: &str, bytes: &[u8]) -> Result<String> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating uploads directory {}", self.dir.display()))?;

        let base = sanitize_file_name(client_name);
        for attempt in 0..MAX_ATTEMPTS {
            let name = numbered_file_name(&base, attempt);
            let path = self.dir.join(&name);
            let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(e).with_context(|| format!("creating {}", path.display()));
                }
            };
            file.write_all(bytes)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(file = %name, size = bytes.len(), "stored upload");
            return Ok(name);
        }

        anyhow::bail!("no free file name for {base} after {MAX_ATTEMPTS} attempts")
    }
}
