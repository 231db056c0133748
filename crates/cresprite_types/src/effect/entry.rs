//! Effect payloads in their V1 (item / spell / V1 creature) and V2 (EFF file /
//! V2 creature) layouts.

use cresprite_vfs::{ResRef, ResourceKind};
use log::warn;

use crate::{error::RecordError, record::RecordView};

/// Size of a V1 effect entry
pub const EFFECT_V1_SIZE: usize = 0x30;

/// Size of a V2 effect body, as embedded in creature records
pub const EFFECT_V2_BODY_SIZE: usize = 0x108;

/// Size of a standalone V2 effect file
pub const EFF_FILE_SIZE: usize = EFFECT_V2_BODY_SIZE + 8;

/// One effect payload.
///
/// Effects are immutable once parsed. The effect that caused an effect to be
/// resolved is tracked by the owning [`EffectSet`](super::EffectSet), not by
/// the payload itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Effect {
	/// Opcode
	pub opcode: u16,
	/// Target type
	pub target: u8,
	/// Power level
	pub power: u8,
	/// First opcode-dependent parameter
	pub param1: u32,
	/// Second opcode-dependent parameter
	pub param2: u32,
	/// Timing mode
	pub timing: u8,
	/// Dispel / resistance mode
	pub dispel_resist: u8,
	/// Duration
	pub duration: u32,
	/// Upper bound of the probability range
	pub probability1: u8,
	/// Lower bound of the probability range
	pub probability2: u8,
	/// Primary resource reference
	pub resource: ResRef,
	/// Dice count or maximum level
	pub dice_count: u32,
	/// Dice size or minimum level
	pub dice_size: u32,
	/// Saving throw flags
	pub save_flags: u32,
	/// Saving throw bonus
	pub save_bonus: i32,
	/// Special value
	pub special: u32,
	/// Secondary resource reference (V2 layouts only)
	pub resource2: ResRef,
}

impl Effect {
	/// Creates an effect with the given opcode and all other fields zeroed.
	pub fn new(opcode: u16) -> Self {
		Self {
			opcode,
			..Self::default()
		}
	}

	/// Parses a V1 effect entry.
	pub fn from_v1_bytes(data: &[u8]) -> Result<Self, RecordError> {
		let view = RecordView::new(data, ResourceKind::Effect);
		Self::read_v1(&view, 0)
	}

	/// Parses a V2 effect body (an EFF file without its leading 8 bytes).
	pub fn from_v2_body(data: &[u8]) -> Result<Self, RecordError> {
		let view = RecordView::new(data, ResourceKind::Effect);
		Self::read_v2(&view, 0)
	}

	/// Parses a standalone `EFF V2.0` file.
	pub fn from_eff_bytes(data: &[u8]) -> Result<Self, RecordError> {
		let view = RecordView::new(data, ResourceKind::Effect);
		view.expect_signature(b"EFF ")?;
		let version = view.version()?;
		if &version != b"V2.0" {
			return Err(view.unsupported_version(version));
		}
		Self::read_v2(&view, 8)
	}

	pub(crate) fn read_v1(view: &RecordView<'_>, base: usize) -> Result<Self, RecordError> {
		// Bounds-check the whole entry once so a short entry fails as a unit.
		view.bytes(base, EFFECT_V1_SIZE)?;
		Ok(Self {
			opcode: view.u16(base)?,
			target: view.u8(base + 0x02)?,
			power: view.u8(base + 0x03)?,
			param1: view.u32(base + 0x04)?,
			param2: view.u32(base + 0x08)?,
			timing: view.u8(base + 0x0C)?,
			dispel_resist: view.u8(base + 0x0D)?,
			duration: view.u32(base + 0x0E)?,
			probability1: view.u8(base + 0x12)?,
			probability2: view.u8(base + 0x13)?,
			resource: view.resref(base + 0x14)?,
			dice_count: view.u32(base + 0x1C)?,
			dice_size: view.u32(base + 0x20)?,
			save_flags: view.u32(base + 0x24)?,
			save_bonus: view.i32(base + 0x28)?,
			special: view.u32(base + 0x2C)?,
			resource2: ResRef::default(),
		})
	}

	pub(crate) fn read_v2(view: &RecordView<'_>, base: usize) -> Result<Self, RecordError> {
		view.bytes(base, EFFECT_V2_BODY_SIZE)?;
		let opcode = view.u32(base + 0x08)?;
		let opcode = u16::try_from(opcode).map_err(|_| RecordError::InvalidField {
			kind: ResourceKind::Effect,
			field: "opcode",
			value: u64::from(opcode),
		})?;
		Ok(Self {
			opcode,
			target: saturate(view.u32(base + 0x0C)?),
			power: saturate(view.u32(base + 0x10)?),
			param1: view.u32(base + 0x14)?,
			param2: view.u32(base + 0x18)?,
			timing: saturate(u32::from(view.u16(base + 0x1C)?)),
			dispel_resist: saturate(view.u32(base + 0x54)?),
			duration: view.u32(base + 0x20)?,
			probability1: saturate(u32::from(view.u16(base + 0x24)?)),
			probability2: saturate(u32::from(view.u16(base + 0x26)?)),
			resource: view.resref(base + 0x28)?,
			dice_count: view.u32(base + 0x30)?,
			dice_size: view.u32(base + 0x34)?,
			save_flags: view.u32(base + 0x38)?,
			save_bonus: view.i32(base + 0x3C)?,
			special: view.u32(base + 0x40)?,
			resource2: view.resref(base + 0x68)?,
		})
	}

	/// Returns the low byte of `param2`, which color opcodes use as their
	/// location.
	pub const fn location_byte(&self) -> u8 {
		(self.param2 & 0xFF) as u8
	}

	/// Decodes `param1` as a `0xRRGGBB` color.
	///
	/// Tint opcodes store the color as `[unused, r, g, b]` bytes.
	pub const fn rgb(&self) -> u32 {
		let r = (self.param1 >> 8) & 0xFF;
		let g = (self.param1 >> 16) & 0xFF;
		let b = (self.param1 >> 24) & 0xFF;
		(r << 16) | (g << 8) | b
	}
}

fn saturate(value: u32) -> u8 {
	u8::try_from(value).unwrap_or(u8::MAX)
}

/// Limits an entry count to the entries that fit between `table_offset` and
/// the end of the record.
fn clamp_entries(view: &RecordView<'_>, table_offset: usize, size: usize, end: usize) -> usize {
	let fits = view.len().saturating_sub(table_offset) / size;
	if end > fits {
		warn!("{} record declares {end} effect entries but only {fits} fit, truncating", view.kind());
	}
	end.min(fits)
}

/// Reads `count` consecutive V1 effect entries starting at entry `index` of the
/// effect table located at `table_offset`.
///
/// Entries that run past the end of the record are skipped with a warning.
pub(crate) fn read_v1_list(view: &RecordView<'_>, table_offset: usize, index: usize, count: usize) -> Vec<Effect> {
	let end = clamp_entries(view, table_offset, EFFECT_V1_SIZE, index.saturating_add(count));
	(index.min(end)..end)
		.filter_map(|i| {
			let offset = table_offset + i * EFFECT_V1_SIZE;
			match Effect::read_v1(view, offset) {
				Ok(effect) => Some(effect),
				Err(e) => {
					warn!("Skipping effect entry {i} of {} record: {e}", view.kind());
					None
				}
			}
		})
		.collect()
}

/// Reads `count` consecutive V2 effect bodies starting at `table_offset`.
pub(crate) fn read_v2_list(view: &RecordView<'_>, table_offset: usize, count: usize) -> Vec<Effect> {
	(0..clamp_entries(view, table_offset, EFFECT_V2_BODY_SIZE, count))
		.filter_map(|i| {
			let offset = table_offset + i * EFFECT_V2_BODY_SIZE;
			match Effect::read_v2(view, offset) {
				Ok(effect) => Some(effect),
				Err(e) => {
					warn!("Skipping V2 effect {i} of {} record: {e}", view.kind());
					None
				}
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_v1_entry() {
		let mut data = vec![0u8; EFFECT_V1_SIZE];
		data[0x00..0x02].copy_from_slice(&7u16.to_le_bytes());
		data[0x04..0x08].copy_from_slice(&42u32.to_le_bytes());
		data[0x08..0x0C].copy_from_slice(&0x21u32.to_le_bytes());
		data[0x14..0x1C].copy_from_slice(b"SPWI112\0");

		let effect = Effect::from_v1_bytes(&data).unwrap();
		assert_eq!(effect.opcode, 7);
		assert_eq!(effect.param1, 42);
		assert_eq!(effect.location_byte(), 0x21);
		assert_eq!(effect.resource.as_str(), "SPWI112");
	}

	#[test]
	fn test_short_v1_entry_fails() {
		let data = vec![0u8; EFFECT_V1_SIZE - 1];
		assert!(matches!(Effect::from_v1_bytes(&data), Err(RecordError::InsufficientData { .. })));
	}

	#[test]
	fn test_list_count_is_clamped_to_record() {
		let mut data = vec![0u8; 3 * EFFECT_V1_SIZE + 5];
		for (i, chunk) in data.chunks_exact_mut(EFFECT_V1_SIZE).enumerate() {
			chunk[0x00..0x02].copy_from_slice(&(i as u16 + 7).to_le_bytes());
		}
		let view = RecordView::new(&data, ResourceKind::Creature);

		let effects = read_v1_list(&view, 0, 0, u32::MAX as usize);
		assert_eq!(effects.iter().map(|effect| effect.opcode).collect::<Vec<_>>(), vec![7, 8, 9]);
		assert_eq!(read_v1_list(&view, 0, 2, usize::MAX).len(), 1);
		assert!(read_v1_list(&view, 0, usize::MAX, 4).is_empty());
		assert!(read_v1_list(&view, usize::MAX, 0, 4).is_empty());
		assert!(read_v2_list(&view, 0, u32::MAX as usize).is_empty());
	}

	#[test]
	fn test_parse_eff_file() {
		let mut data = vec![0u8; EFF_FILE_SIZE];
		data[0..8].copy_from_slice(b"EFF V2.0");
		data[8..16].copy_from_slice(b"EFF V2.0");
		data[0x10..0x14].copy_from_slice(&66u32.to_le_bytes());
		data[0x1C..0x20].copy_from_slice(&200u32.to_le_bytes());
		data[0x70..0x78].copy_from_slice(b"IMOEN\0\0\0");

		let effect = Effect::from_eff_bytes(&data).unwrap();
		assert_eq!(effect.opcode, 66);
		assert_eq!(effect.param1, 200);
		assert_eq!(effect.resource2.as_str(), "IMOEN");
	}

	#[test]
	fn test_eff_file_rejects_v1() {
		let mut data = vec![0u8; EFF_FILE_SIZE];
		data[0..8].copy_from_slice(b"EFF V1.0");
		assert!(matches!(Effect::from_eff_bytes(&data), Err(RecordError::UnsupportedVersion { .. })));
	}

	#[test]
	fn test_rgb_decoding() {
		let effect = Effect {
			param1: 0x3322_1100,
			..Effect::new(51)
		};
		assert_eq!(effect.rgb(), 0x11_22_33);
	}
}
