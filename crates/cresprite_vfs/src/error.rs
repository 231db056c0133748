//! Error types for resource access.

use thiserror::Error;

use crate::ResourceKind;

/// Errors that can occur when looking up records or tables
#[derive(Debug, Error)]
pub enum VfsError {
	/// The requested resource does not exist in the store
	#[error("Resource not found: {name}.{}", kind.extension())]
	NotFound {
		/// Resource name
		name: String,
		/// Resource kind
		kind: ResourceKind,
	},

	/// A resource name is empty, too long or not ASCII
	#[error("Invalid resource name: {0:?}")]
	InvalidResRef(String),

	/// A 2DA table could not be parsed
	#[error("Malformed table {name}: {message}")]
	MalformedTable {
		/// Table name
		name: String,
		/// Description of the problem
		message: String,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

impl VfsError {
	/// Returns `true` if this error only reports a missing resource.
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound { .. })
	}
}
