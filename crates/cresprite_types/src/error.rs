//! Error types for record parsing and creature resolution.

use cresprite_vfs::{ResourceKind, VfsError};
use thiserror::Error;

use crate::game::Game;

/// Errors that can occur when reading fields from a binary record
#[derive(Debug, Error)]
pub enum RecordError {
	/// Not enough data to read a field or sub-record
	#[error(
		"Insufficient data in {kind} record: need {expected} bytes at offset {offset:#X}, record has {actual} bytes"
	)]
	InsufficientData {
		/// Kind of the record being read
		kind: ResourceKind,
		/// Offset of the field
		offset: usize,
		/// Number of bytes required at the offset
		expected: usize,
		/// Total size of the record
		actual: usize,
	},

	/// The record does not start with the expected signature
	#[error("Invalid {kind} signature: {magic:02X?}")]
	InvalidMagic {
		/// Kind of the record being read
		kind: ResourceKind,
		/// Signature found in the data
		magic: [u8; 4],
	},

	/// The record version is not one this engine knows how to read
	#[error("Unsupported {kind} version: {version:?}")]
	UnsupportedVersion {
		/// Kind of the record being read
		kind: ResourceKind,
		/// Version tag found in the data
		version: String,
	},

	/// A field holds a value the engine cannot interpret
	#[error("Invalid {field} in {kind} record: {value}")]
	InvalidField {
		/// Kind of the record being read
		kind: ResourceKind,
		/// Field name
		field: &'static str,
		/// Offending value
		value: u64,
	},
}

/// Errors that abort the resolution of a whole creature
#[derive(Debug, Error)]
pub enum ResolveError {
	/// The creature record itself could not be read
	#[error(transparent)]
	Record(#[from] RecordError),

	/// The creature record version has no slot layout for the active game
	#[error("Creature record version {version} is not supported for {game}")]
	UnsupportedVersion {
		/// Record version tag
		version: String,
		/// Active game
		game: Game,
	},

	/// The creature record could not be loaded
	#[error(transparent)]
	Vfs(#[from] VfsError),
}
