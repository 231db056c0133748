//! Spell records, read only as far as effect indirection needs.

use cresprite_vfs::ResourceKind;

use super::{Effect, entry::read_v1_list};
use crate::{error::RecordError, record::RecordView};

/// Size of a spell ability entry
pub const SPELL_ABILITY_SIZE: usize = 0x28;

/// The effects a cast spell applies to its target.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpellEffects {
	/// Global (casting) effects
	pub global: Vec<Effect>,
	/// Effects of the first ability
	pub first_ability: Vec<Effect>,
}

impl SpellEffects {
	/// Parses a `SPL V1` or `SPL V2.0` record.
	///
	/// # Errors
	///
	/// Fails if the header is short, the signature is wrong or the version is
	/// unknown. Individual short effect entries are skipped.
	pub fn from_bytes(data: &[u8]) -> Result<Self, RecordError> {
		let view = RecordView::new(data, ResourceKind::Spell);
		view.expect_signature(b"SPL ")?;
		let version = view.version()?;
		if !matches!(&version, b"V1  " | b"V2.0") {
			return Err(view.unsupported_version(version));
		}

		let abilities_offset = view.usize(0x64)?;
		let ability_count = usize::from(view.u16(0x68)?);
		let effects_offset = view.usize(0x6A)?;
		let global_index = usize::from(view.u16(0x6E)?);
		let global_count = usize::from(view.u16(0x70)?);

		let global = read_v1_list(&view, effects_offset, global_index, global_count);
		let first_ability = if ability_count > 0 {
			let ability = view.sub(abilities_offset, SPELL_ABILITY_SIZE)?;
			let count = usize::from(ability.u16(0x1E)?);
			let index = usize::from(ability.u16(0x20)?);
			read_v1_list(&view, effects_offset, index, count)
		} else {
			Vec::new()
		};

		Ok(Self {
			global,
			first_ability,
		})
	}

	/// Consumes the record, yielding global effects followed by the first
	/// ability's effects.
	pub fn into_effects(self) -> Vec<Effect> {
		let mut effects = self.global;
		effects.extend(self.first_ability);
		effects
	}
}
