//! Atomic file replacement and small JSON helpers
//!
//! Everything the tracker persists goes through `write_atomic`: output is
//! written to a sibling `.tmp` file, synced, then renamed over the target, so
//! an interrupted save leaves the previous file in place.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::{DeserializeOwned, IgnoredAny};

use crate::error::{ExpenseError, ExpenseResult};

/// Read a JSON document, or `T::default()` if there is no file yet
///
/// A file that exists but cannot be read or parsed is an `ExpenseError::Load`
/// naming the path.
pub fn read_json_or_default<T>(path: &Path) -> ExpenseResult<T>
where
    T: DeserializeOwned + Default,
{
    let load_error = |message: String| ExpenseError::Load {
        path: path.to_path_buf(),
        message,
    };

    match File::open(path) {
        Ok(file) => {
            serde_json::from_reader(BufReader::new(file)).map_err(|e| load_error(e.to_string()))
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(T::default()),
        Err(e) => Err(load_error(e.to_string())),
    }
}

/// Replace `path` with whatever `write` produces
///
/// Parent directories are created as needed. If `write` fails the target is
/// untouched and the temporary file is removed.
pub fn write_atomic<F, E>(path: &Path, write: F) -> ExpenseResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), E>,
    E: Into<ExpenseError>,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ExpenseError::Storage(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let temp_path = temp_path_for(path);
    let written = write_temp(&temp_path, write)
        .and_then(|()| fs::rename(&temp_path, path).map_err(ExpenseError::from));

    if written.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    written
}

fn write_temp<F, E>(temp_path: &Path, write: F) -> ExpenseResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), E>,
    E: Into<ExpenseError>,
{
    let mut writer = BufWriter::new(File::create(temp_path)?);
    write(&mut writer).map_err(Into::into)?;
    writer.flush()?;
    writer.get_ref().sync_all()?;
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Whether `path` holds a well-formed JSON document, whatever its shape
pub fn is_valid_json(path: &Path) -> bool {
    File::open(path)
        .map(|file| serde_json::from_reader::<_, IgnoredAny>(BufReader::new(file)).is_ok())
        .unwrap_or(false)
}
