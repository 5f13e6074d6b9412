//! Line-oriented persistence of the entry list

use crate::domain::{Entry, EntryList};
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract persistence for the journal
pub trait EntryStorage {
    /// Write the goals and every backing entry, replacing whatever was stored before
    fn save(&self, list: &EntryList) -> Result<()>;

    /// Rebuild the list (its milk total and goals included) from storage
    fn load(&self) -> Result<EntryList>;
}

/// Plain text file: goal lines first, then one storage line per entry
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        FileStorage { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write through a temp file in the same directory, then rename over the target.
    ///
    /// On Windows `rename` does not overwrite an existing file, so the target is
    /// removed first there.
    fn write_atomic(&self, content: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.mama-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("mama.txt"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl EntryStorage for FileStorage {
    fn save(&self, list: &EntryList) -> Result<()> {
        let mut content = String::new();
        for line in list.goals().to_storage_lines() {
            content.push_str(&line);
            content.push('\n');
        }
        for entry in list.iter() {
            content.push_str(&entry.to_storage_string());
            content.push('\n');
        }

        self.write_atomic(&content)?;
        tracing::debug!(entries = list.size(), path = %self.path.display(), "saved journal");
        Ok(())
    }

    fn load(&self) -> Result<EntryList> {
        let mut list = EntryList::new();

        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no journal file yet, starting empty");
            return Ok(list);
        }

        let content = fs::read_to_string(&self.path)?;
        for (number, line) in content.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            match list.goals_mut().read_storage_line(line) {
                Ok(true) => continue,
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(line = number + 1, "skipping unreadable goal line: {}", e);
                    continue;
                }
            }

            match Entry::from_storage(line) {
                Ok(entry) => list.add(entry),
                Err(e) => {
                    tracing::warn!(line = number + 1, "skipping unreadable journal line: {}", e);
                }
            }
        }

        tracing::debug!(entries = list.size(), path = %self.path.display(), "loaded journal");
        Ok(list)
    }
}
