use crate::domain::model::Person;
use crate::domain::ports::Storer;
use crate::utils::error::{Result, ScaffoldError};
use crate::utils::time::compact_timestamp;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes person records as pretty-printed JSON files under a base directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_path: PathBuf,
}

impl FileStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// `<timestamp>_<surname>.json`, surname lower-cased with anything outside
    /// `[a-z0-9]` replaced by `-`.
    pub fn file_name_for(person: &Person) -> Result<String> {
        let surname: String = person
            .surname
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
            .collect();
        if surname.is_empty() {
            return Err(ScaffoldError::StorageError {
                message: "cannot derive a file name from an empty surname".to_string(),
            });
        }
        Ok(format!("{}_{}.json", compact_timestamp(Utc::now()), surname))
    }
}

impl Storer for FileStore {
    fn save(&self, person: &Person) -> Result<usize> {
        let full_path = self.base_path.join(Self::file_name_for(person)?);
        self.save_to(&full_path, person)
    }

    fn save_to(&self, path: &Path, person: &Person) -> Result<usize> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_vec_pretty(person)?;
        fs::write(path, &data)?;

        tracing::debug!(path = %path.display(), bytes = data.len(), "person saved");
        Ok(data.len())
    }
}
