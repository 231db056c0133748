//! Record stores.

use std::{
	collections::HashMap,
	path::{Path, PathBuf},
	sync::Arc,
};

use log::debug;

use crate::{ResRef, ResourceKind, Table, TableProvider, VfsError};

/// Read access to game records addressed by name and kind.
pub trait RecordStore {
	/// Loads the raw bytes of a record.
	///
	/// # Errors
	///
	/// Returns [`VfsError::NotFound`] if the record does not exist, or an IO
	/// error if it exists but cannot be read.
	fn load(&self, name: &ResRef, kind: ResourceKind) -> Result<Vec<u8>, VfsError>;

	/// Returns `true` if the record exists.
	fn exists(&self, name: &ResRef, kind: ResourceKind) -> bool;
}

/// An in-memory record store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
	records: HashMap<(ResRef, ResourceKind), Arc<[u8]>>,
	tables: HashMap<String, Arc<Table>>,
}

impl MemoryStore {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a record, replacing any previous record with the same name
	/// and kind.
	pub fn insert(&mut self, name: ResRef, kind: ResourceKind, data: impl Into<Arc<[u8]>>) {
		self.records.insert((name, kind), data.into());
	}

	/// Registers a parsed table under the given name.
	pub fn insert_table(&mut self, name: &str, table: Table) {
		self.tables.insert(name.to_ascii_uppercase(), Arc::new(table));
	}

	/// Removes a record. Returns `true` if it existed.
	pub fn remove(&mut self, name: &ResRef, kind: ResourceKind) -> bool {
		self.records.remove(&(name.clone(), kind)).is_some()
	}

	/// Returns the number of registered records (tables excluded).
	pub fn len(&self) -> usize {
		self.records.len()
	}

	/// Returns `true` if no records are registered.
	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl RecordStore for MemoryStore {
	fn load(&self, name: &ResRef, kind: ResourceKind) -> Result<Vec<u8>, VfsError> {
		self.records.get(&(name.clone(), kind)).map(|data| data.to_vec()).ok_or_else(|| {
			VfsError::NotFound {
				name: name.to_string(),
				kind,
			}
		})
	}

	fn exists(&self, name: &ResRef, kind: ResourceKind) -> bool {
		self.records.contains_key(&(name.clone(), kind))
	}
}

impl TableProvider for MemoryStore {
	fn table(&self, name: &str) -> Option<Arc<Table>> {
		self.tables.get(&name.to_ascii_uppercase()).cloned()
	}
}

/// A store backed by loose `NAME.EXT` files in one directory.
///
/// File names are matched case-insensitively, so `sw1h01.itm` and
/// `SW1H01.ITM` both resolve `SW1H01` of kind [`ResourceKind::Item`].
#[derive(Debug, Clone)]
pub struct DirStore {
	root: PathBuf,
	index: HashMap<String, PathBuf>,
}

impl DirStore {
	/// Indexes the given directory.
	///
	/// # Errors
	///
	/// Returns an IO error if the directory cannot be listed.
	pub fn open(root: impl AsRef<Path>) -> Result<Self, VfsError> {
		let root = root.as_ref().to_path_buf();
		let mut index = HashMap::new();
		for entry in std::fs::read_dir(&root)? {
			let path = entry?.path();
			if !path.is_file() {
				continue;
			}
			if let Some(file_name) = path.file_name().and_then(|s| s.to_str()) {
				index.insert(file_name.to_ascii_uppercase(), path.clone());
			}
		}
		debug!("Indexed {} files under {}", index.len(), root.display());
		Ok(Self {
			root,
			index,
		})
	}

	/// Returns the indexed directory.
	pub fn root(&self) -> &Path {
		&self.root
	}

	fn path_of(&self, name: &str, extension: &str) -> Option<&PathBuf> {
		self.index.get(&format!("{}.{}", name.to_ascii_uppercase(), extension))
	}
}

impl RecordStore for DirStore {
	fn load(&self, name: &ResRef, kind: ResourceKind) -> Result<Vec<u8>, VfsError> {
		let path = self.path_of(name.as_str(), kind.extension()).ok_or_else(|| {
			VfsError::NotFound {
				name: name.to_string(),
				kind,
			}
		})?;
		Ok(std::fs::read(path)?)
	}

	fn exists(&self, name: &ResRef, kind: ResourceKind) -> bool {
		self.path_of(name.as_str(), kind.extension()).is_some()
	}
}

impl TableProvider for DirStore {
	fn table(&self, name: &str) -> Option<Arc<Table>> {
		let path = self.path_of(name, ResourceKind::Table.extension())?;
		let data = std::fs::read(path).ok()?;
		let text = String::from_utf8_lossy(&data);
		match Table::parse(name, &text) {
			Ok(table) => Some(Arc::new(table)),
			Err(e) => {
				debug!("Ignoring table {name}: {e}");
				None
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_memory_store_load() {
		let mut store = MemoryStore::new();
		let name = ResRef::new("SPWI112").unwrap();
		store.insert(name.clone(), ResourceKind::Spell, vec![1u8, 2, 3]);

		assert_eq!(store.load(&name, ResourceKind::Spell).unwrap(), vec![1u8, 2, 3]);
		let missing = store.load(&name, ResourceKind::Item);
		assert!(missing.is_err_and(|e| e.is_not_found()));
	}

	#[test]
	fn test_memory_store_tables_are_case_insensitive() {
		let mut store = MemoryStore::new();
		store.insert_table("splprot", Table::parse("SPLPROT", "0\nSTAT VALUE\nA 1 2\n").unwrap());
		assert!(store.table("SPLPROT").is_some());
		assert!(store.table("RANDCOLR").is_none());
	}

	#[test]
	fn test_memory_store_remove() {
		let mut store = MemoryStore::new();
		let name = ResRef::new("X").unwrap();
		store.insert(name.clone(), ResourceKind::Effect, vec![0u8]);
		assert_eq!(store.len(), 1);
		assert!(store.remove(&name, ResourceKind::Effect));
		assert!(store.is_empty());
	}
}
