//! Resource references and resource kinds.

use std::fmt;

use crate::VfsError;

/// Maximum length of a resource reference in bytes
pub const RESREF_LEN: usize = 8;

/// Kind of a resource, equivalent to its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResourceKind {
	/// Creature record (`.CRE`)
	Creature,
	/// Item record (`.ITM`)
	Item,
	/// Spell record (`.SPL`)
	Spell,
	/// Secondary effect record (`.EFF`)
	Effect,
	/// Two-dimensional text table (`.2DA`)
	Table,
	/// Identifier list (`.IDS`)
	Ids,
}

impl ResourceKind {
	/// Returns the upper-case file extension for this kind.
	pub const fn extension(self) -> &'static str {
		match self {
			Self::Creature => "CRE",
			Self::Item => "ITM",
			Self::Spell => "SPL",
			Self::Effect => "EFF",
			Self::Table => "2DA",
			Self::Ids => "IDS",
		}
	}

	/// Parses a file extension (case-insensitive).
	pub fn from_extension(ext: &str) -> Option<Self> {
		match ext.to_ascii_uppercase().as_str() {
			"CRE" => Some(Self::Creature),
			"ITM" => Some(Self::Item),
			"SPL" => Some(Self::Spell),
			"EFF" => Some(Self::Effect),
			"2DA" => Some(Self::Table),
			"IDS" => Some(Self::Ids),
			_ => None,
		}
	}
}

impl fmt::Display for ResourceKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.extension())
	}
}

/// An up to 8 character resource name.
///
/// Names are stored upper-case because the engine compares them
/// case-insensitively. The empty reference is valid and means "none".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResRef(String);

impl ResRef {
	/// Creates a resource reference from a string.
	///
	/// # Errors
	///
	/// Returns [`VfsError::InvalidResRef`] if the name is longer than 8 bytes
	/// or contains non-ASCII characters.
	pub fn new(name: &str) -> Result<Self, VfsError> {
		let trimmed = name.trim();
		if trimmed.len() > RESREF_LEN || !trimmed.is_ascii() {
			return Err(VfsError::InvalidResRef(name.to_string()));
		}
		Ok(Self(trimmed.to_ascii_uppercase()))
	}

	/// Reads a resource reference from its 8-byte on-disk form.
	///
	/// The field is NUL padded; anything after the first NUL is ignored.
	/// Non-ASCII bytes are dropped.
	pub fn from_bytes(raw: &[u8; RESREF_LEN]) -> Self {
		let end = raw.iter().position(|&b| b == 0).unwrap_or(RESREF_LEN);
		let name: String = raw[..end]
			.iter()
			.filter(|b| b.is_ascii() && !b.is_ascii_control())
			.map(|&b| char::from(b).to_ascii_uppercase())
			.collect();
		Self(name.trim().to_string())
	}

	/// Returns the 8-byte NUL padded form.
	pub fn to_bytes(&self) -> [u8; RESREF_LEN] {
		let mut raw = [0u8; RESREF_LEN];
		raw[..self.0.len()].copy_from_slice(self.0.as_bytes());
		raw
	}

	/// Returns the name as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns `true` for the empty ("none") reference.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Display for ResRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl TryFrom<&str> for ResRef {
	type Error = VfsError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::new(value)
	}
}
