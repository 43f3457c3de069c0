use crate::book::AddressBook;
use crate::error::StorageResult;
use crate::repositories::traits::BookRepository;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info};

/// JSON file implementation of BookRepository.
///
/// The whole book is read and written in one go; a missing file is treated
/// as an empty book.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a repository backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sibling file a save is written to before it replaces the book.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl BookRepository for JsonFileRepository {
    fn load(&self) -> StorageResult<AddressBook> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No saved address book, starting empty");
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(e.into()),
        };

        let book: AddressBook = serde_json::from_str(&contents)?;
        info!(path = %self.path.display(), records = book.len(), "Loaded address book");
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let contents = serde_json::to_string_pretty(book)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Replace the book in one rename so an interrupted save leaves the
        // previous file intact.
        let staging = self.staging_path();
        fs::write(&staging, contents)?;
        fs::rename(&staging, &self.path)?;

        info!(path = %self.path.display(), records = book.len(), "Saved address book");
        Ok(())
    }
}
