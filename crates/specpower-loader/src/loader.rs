//! Corpus loading: directory → Dataset

use crate::{LoaderConfig, LoaderError, RowOrder};
use rayon::prelude::*;
use specpower_domain::{Dataset, RawReport, Record};
use specpower_extractor::{RecordBuilder, Schema};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Loads every matching report in one directory into a [`Dataset`]
///
/// # Examples
///
/// ```no_run
/// use specpower_loader::{CorpusLoader, LoaderConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let loader = CorpusLoader::new(LoaderConfig::parallel());
/// let dataset = loader.load("data/")?;
/// for record in &dataset {
///     println!("{}: {:?}", record.source(), record.max_power_w());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CorpusLoader<'s> {
    config: LoaderConfig,
    builder: RecordBuilder<'s>,
}

impl CorpusLoader<'static> {
    /// Create a loader that extracts with the built-in schema
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            builder: RecordBuilder::default(),
        }
    }
}

impl<'s> CorpusLoader<'s> {
    /// Create a loader that extracts with a custom schema
    pub fn with_schema(config: LoaderConfig, schema: &'s Schema) -> Self {
        Self {
            config,
            builder: RecordBuilder::new(schema),
        }
    }

    /// Loader configuration
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load every matching report in `dir`, one record per file
    ///
    /// Aborts on the first unreadable file (earliest in row order); no
    /// partial dataset is returned.
    pub fn load(&self, dir: impl AsRef<Path>) -> Result<Dataset, LoaderError> {
        let dir = dir.as_ref();
        self.config.validate().map_err(LoaderError::Config)?;

        info!(
            "Loading reports from '{}' (extension '{}', parallel: {})",
            dir.display(),
            self.config.extension,
            self.config.parallel
        );

        let candidates = self.candidates(dir)?;
        let records = self.load_paths(&candidates)?;

        let complete = records.iter().filter(|r| r.is_complete()).count();
        info!(
            "Load complete: {} records from '{}' ({} with every field present)",
            records.len(),
            dir.display(),
            complete
        );

        Ok(Dataset::new(records))
    }

    /// Read and extract the given files, one record each, in the given order
    ///
    /// In parallel mode every file is attempted and the error of the earliest
    /// failing path is returned.
    pub fn load_paths(&self, paths: &[PathBuf]) -> Result<Vec<Record>, LoaderError> {
        if self.config.parallel {
            paths
                .par_iter()
                .map(|path| self.load_file(path))
                .collect::<Vec<_>>()
                .into_iter()
                .collect()
        } else {
            paths.iter().map(|path| self.load_file(path)).collect()
        }
    }

    /// Regular files in `dir` whose name ends with the configured extension,
    /// in row order
    pub fn candidates(&self, dir: &Path) -> Result<Vec<PathBuf>, LoaderError> {
        let unreadable = |source| LoaderError::DirectoryUnreadable {
            path: dir.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(unreadable)? {
            let entry = entry.map_err(unreadable)?;
            let path = entry.path();
            let name = entry.file_name();

            if !name.to_string_lossy().ends_with(self.config.extension.as_str()) {
                debug!("Skipping '{}': extension does not match", path.display());
                continue;
            }

            let file_type = entry
                .file_type()
                .map_err(|source| source_unreadable(&path, source))?;

            if file_type.is_file() {
                paths.push(path);
            } else if file_type.is_symlink() {
                match fs::metadata(&path) {
                    Ok(meta) if meta.is_file() => paths.push(path),
                    Ok(_) => debug!(
                        "Skipping '{}': link target is not a regular file",
                        path.display()
                    ),
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {
                        debug!("Skipping '{}': dangling link", path.display())
                    }
                    Err(e) => return Err(source_unreadable(&path, e)),
                }
            } else {
                debug!("Skipping '{}': not a regular file", path.display());
            }
        }

        if self.config.row_order == RowOrder::FileName {
            paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }

        Ok(paths)
    }

    fn load_file(&self, path: &Path) -> Result<Record, LoaderError> {
        let bytes = fs::read(path).map_err(|source| source_unreadable(path, source))?;

        let source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        debug!("Extracting '{}' ({} bytes)", source, bytes.len());
        Ok(self.builder.build(&RawReport::from_bytes(source, &bytes)))
    }
}

fn source_unreadable(path: &Path, source: io::Error) -> LoaderError {
    LoaderError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    }
}

impl Default for CorpusLoader<'static> {
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}
