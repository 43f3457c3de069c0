use crate::book::AddressBook;
use crate::error::StorageResult;

/// Repository for persisting the address book between runs.
///
/// Provides abstraction over where and how the book is stored,
/// enabling different implementations (JSON file, in-memory mock).
pub trait BookRepository {
    /// Load the stored address book.
    ///
    /// Returns an empty book when nothing has been saved yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Persist the whole address book, replacing what was stored before.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
