//! Resource access seams for `cresprite-rs`.
//!
//! The resolution engine never touches the file system directly. It reads
//! records through a [`RecordStore`] and small tabular overrides through a
//! [`TableProvider`]. Two implementations are provided:
//!
//! - [`MemoryStore`]: records and tables registered in memory, used by tests
//!   and by tools that already hold decoded game archives.
//! - [`DirStore`]: loose `NAME.EXT` files in a directory (an override folder).
//!
//! # Examples
//!
//! ```
//! use cresprite_vfs::{MemoryStore, RecordStore, ResRef, ResourceKind};
//!
//! let mut store = MemoryStore::new();
//! let name = ResRef::new("SW1H01").unwrap();
//! store.insert(name.clone(), ResourceKind::Item, vec![0u8; 4]);
//!
//! assert!(store.exists(&name, ResourceKind::Item));
//! assert!(!store.exists(&name, ResourceKind::Spell));
//! ```

mod error;
mod resref;
mod store;
mod table;

pub use error::VfsError;
pub use resref::{RESREF_LEN, ResRef, ResourceKind};
pub use store::{DirStore, MemoryStore, RecordStore};
pub use table::{Table, TableProvider};
