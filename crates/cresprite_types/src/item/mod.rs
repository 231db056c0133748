//! Equipment facts decoded from item records.
//!
//! # File Format
//!
//! `ITM V1  ` (BG, BG2, IWD, EE), `ITM V1.1` (PST) and `ITM V2.0` (IWD2)
//! share the header fields read here:
//!
//! | Offset | Field |
//! |---|---|
//! | 0x08 / 0x0C | Unidentified / identified name |
//! | 0x18 | Flags |
//! | 0x1C | Category |
//! | 0x1E | Usability |
//! | 0x22 | Appearance code |
//! | 0x29, 0x2B, 0x2D, 0x2F | Kit usability bytes |
//! | 0x31 | Proficiency |
//! | 0x38 | Stack size |
//! | 0x60 | Enchantment |
//! | 0x64 / 0x68 | Ability offset / count |
//! | 0x6A | Effect table offset |
//! | 0x6E / 0x70 | Global effect index / count |

mod ability;
pub mod category;

use cresprite_vfs::{ResRef, ResourceKind};

pub use ability::{AbilityEntry, AbilityType, ITEM_ABILITY_SIZE, Launcher};

use crate::{
	effect::{Effect, read_v1_list},
	error::RecordError,
	record::RecordView,
};

/// Offset of the category field, read directly by launcher scans
pub const CATEGORY_OFFSET: usize = 0x1C;

/// Item flag: the item needs both hands
pub const FLAG_TWO_HANDED: u32 = 0x0000_0002;

/// Item flag: the item may not be used in the off hand
pub const FLAG_NO_OFF_HAND: u32 = 0x0000_2000;

/// Item record versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemVersion {
	/// `V1  `
	V1,
	/// `V1.1`
	V11,
	/// `V2.0`
	V20,
}

/// Melee weapon refinement for [`EquipmentFact::is_melee_weapon`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeleeKind {
	/// Any melee weapon
	Any,
	/// Only two-handed melee weapons
	TwoHanded,
	/// Only melee weapons usable in the off hand
	LeftHand,
}

/// Read-only facts about one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentFact {
	/// Resource name
	pub resref: ResRef,
	/// Record version
	pub version: ItemVersion,
	/// Unidentified name string reference
	pub name_unidentified: u32,
	/// Identified name string reference
	pub name_identified: u32,
	/// Item flags
	pub flags: u32,
	/// Item category
	pub category: u16,
	/// Class / race / alignment usability bits
	pub usability: u32,
	/// Kit usability bits
	pub kit_usability: u32,
	/// Two-letter overlay appearance code
	pub appearance: String,
	/// Proficiency id
	pub proficiency: u8,
	/// Maximum stack size
	pub stack_size: u16,
	/// Enchantment level
	pub enchantment: u32,
	/// Abilities (extended headers)
	pub abilities: Vec<AbilityEntry>,
	/// Global effects granted while equipped, not yet resolved
	pub effects: Vec<Effect>,
}

impl EquipmentFact {
	/// Parses an item record.
	///
	/// # Errors
	///
	/// Fails if the header is short, the signature is wrong or the version is
	/// unknown. Short abilities fail the whole item; short effect entries are
	/// skipped.
	pub fn from_bytes(resref: ResRef, data: &[u8]) -> Result<Self, RecordError> {
		let view = RecordView::new(data, ResourceKind::Item);
		view.expect_signature(b"ITM ")?;
		let raw_version = view.version()?;
		let version = match &raw_version {
			b"V1  " => ItemVersion::V1,
			b"V1.1" => ItemVersion::V11,
			b"V2.0" => ItemVersion::V20,
			_ => return Err(view.unsupported_version(raw_version)),
		};

		let abilities_offset = view.usize(0x64)?;
		let ability_count = usize::from(view.u16(0x68)?);
		let abilities = (0..ability_count)
			.map(|i| AbilityEntry::from_view(&view.sub(abilities_offset + i * ITEM_ABILITY_SIZE, ITEM_ABILITY_SIZE)?))
			.collect::<Result<Vec<_>, _>>()?;

		let effects_offset = view.usize(0x6A)?;
		let effects = read_v1_list(
			&view,
			effects_offset,
			usize::from(view.u16(0x6E)?),
			usize::from(view.u16(0x70)?),
		);

		Ok(Self {
			resref,
			version,
			name_unidentified: view.u32(0x08)?,
			name_identified: view.u32(0x0C)?,
			flags: view.u32(0x18)?,
			category: view.u16(CATEGORY_OFFSET)?,
			usability: view.u32(0x1E)?,
			kit_usability: u32::from_le_bytes([view.u8(0x29)?, view.u8(0x2B)?, view.u8(0x2D)?, view.u8(0x2F)?]),
			appearance: view.text(0x22, 2)?,
			proficiency: view.u8(0x31)?,
			stack_size: view.u16(0x38)?,
			enchantment: view.u32(0x60)?,
			abilities,
			effects,
		})
	}

	/// Returns the launcher the first ability requires.
	pub fn required_launcher(&self) -> Launcher {
		self.abilities.first().map_or(Launcher::None, |ability| ability.launcher)
	}

	/// Returns `true` if the item can be worn or wielded.
	pub fn is_equippable(&self) -> bool {
		!category::NOT_EQUIPPABLE.contains(&self.category)
	}

	/// Returns `true` for weapons.
	pub fn is_weapon(&self) -> bool {
		category::WEAPONS.contains(&self.category)
	}

	/// Returns `true` for weapons that need both hands.
	pub fn is_two_handed_weapon(&self) -> bool {
		self.is_weapon() && self.flags & FLAG_TWO_HANDED != 0
	}

	/// Returns `true` for melee weapons of the requested kind.
	pub fn is_melee_weapon(&self, kind: MeleeKind) -> bool {
		if !self.is_weapon() || category::RANGED_WEAPONS.contains(&self.category) {
			return false;
		}
		match kind {
			MeleeKind::Any => true,
			MeleeKind::TwoHanded => self.flags & FLAG_TWO_HANDED != 0,
			MeleeKind::LeftHand => self.flags & (FLAG_TWO_HANDED | FLAG_NO_OFF_HAND) == 0,
		}
	}

	/// Returns `true` for ranged weapons, optionally restricted to one
	/// launcher type.
	pub fn is_ranged_weapon(&self, launcher: Option<Launcher>) -> bool {
		if !category::RANGED_WEAPONS.contains(&self.category) {
			return false;
		}
		launcher.is_none_or(|launcher| launcher.category() == Some(self.category))
	}

	/// Returns `true` for shields.
	pub fn is_shield(&self) -> bool {
		category::SHIELDS.contains(&self.category)
	}

	/// Returns `true` for body armor.
	pub fn is_armor(&self) -> bool {
		category::ARMORS.contains(&self.category)
	}

	/// Returns `true` for headgear.
	pub fn is_helmet(&self) -> bool {
		category::HELMETS.contains(&self.category)
	}
}
