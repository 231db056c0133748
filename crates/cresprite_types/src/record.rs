//! Bounds-checked access to little-endian record fields.

use cresprite_vfs::{RESREF_LEN, ResRef, ResourceKind};
use encoding_rs::WINDOWS_1252;

use crate::error::RecordError;

/// A read-only view over the bytes of one binary record.
///
/// Every accessor checks the field against the record size and reports the
/// offending offset through [`RecordError::InsufficientData`].
#[derive(Debug, Clone, Copy)]
pub struct RecordView<'a> {
	data: &'a [u8],
	kind: ResourceKind,
}

impl<'a> RecordView<'a> {
	/// Creates a view over a record of the given kind.
	pub const fn new(data: &'a [u8], kind: ResourceKind) -> Self {
		Self {
			data,
			kind,
		}
	}

	/// Returns the record kind.
	pub const fn kind(&self) -> ResourceKind {
		self.kind
	}

	/// Returns the record size in bytes.
	pub const fn len(&self) -> usize {
		self.data.len()
	}

	/// Returns `true` if the record holds no bytes.
	pub const fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Returns `len` bytes starting at `offset`.
	pub fn bytes(&self, offset: usize, len: usize) -> Result<&'a [u8], RecordError> {
		offset
			.checked_add(len)
			.and_then(|end| self.data.get(offset..end))
			.ok_or(RecordError::InsufficientData {
				kind: self.kind,
				offset,
				expected: len,
				actual: self.data.len(),
			})
	}

	/// Returns a view over a sub-record.
	pub fn sub(&self, offset: usize, len: usize) -> Result<Self, RecordError> {
		Ok(Self::new(self.bytes(offset, len)?, self.kind))
	}

	/// Reads a byte.
	pub fn u8(&self, offset: usize) -> Result<u8, RecordError> {
		Ok(self.bytes(offset, 1)?[0])
	}

	/// Reads a little-endian `u16`.
	pub fn u16(&self, offset: usize) -> Result<u16, RecordError> {
		let b = self.bytes(offset, 2)?;
		Ok(u16::from_le_bytes([b[0], b[1]]))
	}

	/// Reads a little-endian `i16`.
	pub fn i16(&self, offset: usize) -> Result<i16, RecordError> {
		let b = self.bytes(offset, 2)?;
		Ok(i16::from_le_bytes([b[0], b[1]]))
	}

	/// Reads a little-endian `u32`.
	pub fn u32(&self, offset: usize) -> Result<u32, RecordError> {
		let b = self.bytes(offset, 4)?;
		Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
	}

	/// Reads a little-endian `i32`.
	pub fn i32(&self, offset: usize) -> Result<i32, RecordError> {
		let b = self.bytes(offset, 4)?;
		Ok(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
	}

	/// Reads a little-endian `u32` used as an offset or count.
	pub fn usize(&self, offset: usize) -> Result<usize, RecordError> {
		Ok(self.u32(offset)? as usize)
	}

	/// Reads an 8-byte resource reference.
	pub fn resref(&self, offset: usize) -> Result<ResRef, RecordError> {
		let mut raw = [0u8; RESREF_LEN];
		raw.copy_from_slice(self.bytes(offset, RESREF_LEN)?);
		Ok(ResRef::from_bytes(&raw))
	}

	/// Reads a NUL-terminated Windows-1252 string from a fixed-size field.
	pub fn text(&self, offset: usize, len: usize) -> Result<String, RecordError> {
		let raw = self.bytes(offset, len)?;
		let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
		let (text, _, _) = WINDOWS_1252.decode(&raw[..end]);
		Ok(text.into_owned())
	}

	/// Reads the 4-byte signature at the start of the record.
	pub fn signature(&self) -> Result<[u8; 4], RecordError> {
		let mut magic = [0u8; 4];
		magic.copy_from_slice(self.bytes(0, 4)?);
		Ok(magic)
	}

	/// Reads the 4-byte version tag following the signature.
	pub fn version(&self) -> Result<[u8; 4], RecordError> {
		let mut version = [0u8; 4];
		version.copy_from_slice(self.bytes(4, 4)?);
		Ok(version)
	}

	/// Checks the signature against `expected`.
	pub fn expect_signature(&self, expected: &[u8; 4]) -> Result<(), RecordError> {
		let magic = self.signature()?;
		if &magic != expected {
			return Err(RecordError::InvalidMagic {
				kind: self.kind,
				magic,
			});
		}
		Ok(())
	}

	/// Builds an unsupported-version error for this record.
	pub fn unsupported_version(&self, version: [u8; 4]) -> RecordError {
		RecordError::UnsupportedVersion {
			kind: self.kind,
			version: String::from_utf8_lossy(&version).trim_end().to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_little_endian_reads() {
		let data = [0x34, 0x12, 0xFF, 0xFF, 0x78, 0x56, 0x34, 0x12];
		let view = RecordView::new(&data, ResourceKind::Item);
		assert_eq!(view.u16(0).unwrap(), 0x1234);
		assert_eq!(view.i16(2).unwrap(), -1);
		assert_eq!(view.u32(4).unwrap(), 0x1234_5678);
	}

	#[test]
	fn test_out_of_bounds_reports_offset() {
		let data = [0u8; 6];
		let view = RecordView::new(&data, ResourceKind::Creature);
		let err = view.u32(4).unwrap_err();
		assert!(matches!(
			err,
			RecordError::InsufficientData {
				offset: 4,
				expected: 4,
				actual: 6,
				..
			}
		));
	}

	#[test]
	fn test_text_decodes_windows_1252() {
		let data = [b'A', 0xE9, 0, b'X'];
		let view = RecordView::new(&data, ResourceKind::Creature);
		assert_eq!(view.text(0, 4).unwrap(), "A\u{e9}");
	}

	#[test]
	fn test_expect_signature() {
		let data = *b"ITM V1  ";
		let view = RecordView::new(&data, ResourceKind::Item);
		assert!(view.expect_signature(b"ITM ").is_ok());
		assert!(matches!(view.expect_signature(b"SPL "), Err(RecordError::InvalidMagic { .. })));
		assert_eq!(view.version().unwrap(), *b"V1  ");
	}
}
