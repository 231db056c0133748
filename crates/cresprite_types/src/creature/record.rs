//! Creature records.
//!
//! Four record versions are read. Their header fields sit at different
//! offsets, captured by one [`HeaderLayout`] row per version:
//!
//! | Version | Games | Effects |
//! |---|---|---|
//! | `V1.0` | BG, BG2, EE | V1 or V2 (header flag) |
//! | `V1.2` | PST | V1 |
//! | `V2.2` | IWD2 | V2 |
//! | `V9.0` | IWD | V1 or V2 (header flag) |

use std::fmt;

use cresprite_vfs::{ResRef, ResourceKind};

use crate::{
	effect::{Effect, read_v1_list, read_v2_list},
	error::RecordError,
	record::RecordView,
};

/// Size of an item entry
pub const ITEM_ENTRY_SIZE: usize = 0x14;

/// Slot table value of an empty slot
pub const EMPTY_SLOT: u16 = 0xFFFF;

/// Length of the script name field
pub const SCRIPT_NAME_LEN: usize = 32;

/// Creature flag bits marking a dual-classed character
pub const FLAG_DUAL_CLASS_MASK: u32 = 0x0000_01F8;

/// Creature record versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreatureVersion {
	/// `V1.0`
	V10,
	/// `V1.2`
	V12,
	/// `V2.2`
	V22,
	/// `V9.0`
	V90,
}

impl CreatureVersion {
	/// Returns the on-disk version tag.
	pub const fn tag(self) -> &'static [u8; 4] {
		match self {
			Self::V10 => b"V1.0",
			Self::V12 => b"V1.2",
			Self::V22 => b"V2.2",
			Self::V90 => b"V9.0",
		}
	}

	/// Decodes a version tag.
	pub fn from_tag(tag: &[u8; 4]) -> Option<Self> {
		[Self::V10, Self::V12, Self::V22, Self::V90].into_iter().find(|v| v.tag() == tag)
	}
}

impl fmt::Display for CreatureVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&String::from_utf8_lossy(self.tag()))
	}
}

/// Field offsets of one creature record version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HeaderLayout {
	pub(crate) version: CreatureVersion,
	/// Header size
	pub(crate) size: usize,
	/// Class level bytes
	pub(crate) levels: &'static [usize],
	/// STR, STR extra, INT, WIS, DEX, CON, CHR
	pub(crate) attributes: [Option<usize>; 7],
	pub(crate) kit: Option<usize>,
	/// EA; general, race, class, specifics and gender follow
	pub(crate) ids: usize,
	pub(crate) alignment: usize,
	pub(crate) script_name: usize,
	/// Slot table offset; item table offset / count and effect table offset /
	/// count follow as `u32`s
	pub(crate) tables: usize,
	pub(crate) slot_count: usize,
}

const V1_LEVELS: &[usize] = &[0x234, 0x235, 0x236];
const V1_ATTRIBUTES: [Option<usize>; 7] =
	[Some(0x238), Some(0x239), Some(0x23A), Some(0x23B), Some(0x23C), Some(0x23D), Some(0x23E)];

pub(crate) const HEADER_LAYOUTS: [HeaderLayout; 4] = [
	HeaderLayout {
		version: CreatureVersion::V10,
		size: 0x2D4,
		levels: V1_LEVELS,
		attributes: V1_ATTRIBUTES,
		kit: Some(0x244),
		ids: 0x270,
		alignment: 0x27B,
		script_name: 0x280,
		tables: 0x2B8,
		slot_count: 38,
	},
	HeaderLayout {
		version: CreatureVersion::V12,
		size: 0x378,
		levels: V1_LEVELS,
		attributes: V1_ATTRIBUTES,
		kit: None,
		ids: 0x314,
		alignment: 0x31F,
		script_name: 0x324,
		tables: 0x35C,
		slot_count: 46,
	},
	HeaderLayout {
		version: CreatureVersion::V22,
		size: 0x62E,
		levels: &[0x8B, 0x8C, 0x8D, 0x8E, 0x8F, 0x90, 0x91, 0x92, 0x93, 0x94, 0x95],
		attributes: [Some(0x266), None, Some(0x267), Some(0x268), Some(0x269), Some(0x26A), Some(0x26B)],
		kit: None,
		ids: 0x384,
		alignment: 0x38F,
		script_name: 0x394,
		tables: 0x612,
		slot_count: 50,
	},
	HeaderLayout {
		version: CreatureVersion::V90,
		size: 0x33C,
		levels: V1_LEVELS,
		attributes: V1_ATTRIBUTES,
		kit: Some(0x244),
		ids: 0x2D8,
		alignment: 0x2E3,
		script_name: 0x2E8,
		tables: 0x320,
		slot_count: 38,
	},
];

impl HeaderLayout {
	pub(crate) fn for_version(version: CreatureVersion) -> &'static Self {
		match version {
			CreatureVersion::V10 => &HEADER_LAYOUTS[0],
			CreatureVersion::V12 => &HEADER_LAYOUTS[1],
			CreatureVersion::V22 => &HEADER_LAYOUTS[2],
			CreatureVersion::V90 => &HEADER_LAYOUTS[3],
		}
	}
}

/// Identifier values of a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdsValues {
	/// EA.IDS
	pub allegiance: u8,
	/// GENERAL.IDS
	pub general: u8,
	/// RACE.IDS
	pub race: u8,
	/// CLASS.IDS
	pub class: u8,
	/// SPECIFIC.IDS
	pub specifics: u8,
	/// GENDER.IDS
	pub gender: u8,
	/// ALIGN.IDS
	pub alignment: u8,
}

/// Ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attributes {
	/// Strength
	pub strength: u8,
	/// Exceptional strength percentage
	pub strength_extra: u8,
	/// Intelligence
	pub intelligence: u8,
	/// Wisdom
	pub wisdom: u8,
	/// Dexterity
	pub dexterity: u8,
	/// Constitution
	pub constitution: u8,
	/// Charisma
	pub charisma: u8,
}

/// How [`CreatureRecord::class_level`] combines the levels of active classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelMode {
	/// Integer average of the active class levels
	Average,
	/// Highest active class level
	Maximum,
}

/// The fields of a creature record this engine reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureRecord {
	/// Record version
	pub version: CreatureVersion,
	/// Creature flags
	pub flags: u32,
	/// State flags
	pub state_flags: u32,
	/// Maximum hit points
	pub max_hit_points: u16,
	/// Animation id
	pub animation_id: u16,
	/// Metal, minor, major, skin, leather, armor and hair color gradients
	pub colors: [u8; 7],
	/// Class levels (3, or 11 for IWD2)
	pub levels: Vec<u8>,
	/// Ability scores
	pub attributes: Attributes,
	/// Kit
	pub kit: u32,
	/// Identifier values
	pub ids: IdsValues,
	/// Script name
	pub script_name: String,
	/// Item table
	pub items: Vec<ResRef>,
	/// Slot table; each value indexes `items` or is [`EMPTY_SLOT`]
	pub slots: Vec<u16>,
	/// Selected weapon value
	pub selected_weapon: i16,
	/// Selected weapon ability
	pub selected_ability: u16,
	/// Embedded effects
	pub effects: Vec<Effect>,
}

impl CreatureRecord {
	/// Parses a creature record.
	///
	/// # Errors
	///
	/// Fails with [`RecordError::UnsupportedVersion`] for unknown versions and
	/// [`RecordError::InsufficientData`] if the header, item table or slot
	/// table is short. Short effect entries are skipped.
	pub fn from_bytes(data: &[u8]) -> Result<Self, RecordError> {
		let view = RecordView::new(data, ResourceKind::Creature);
		view.expect_signature(b"CRE ")?;
		let tag = view.version()?;
		let version = CreatureVersion::from_tag(&tag).ok_or_else(|| view.unsupported_version(tag))?;
		let layout = HeaderLayout::for_version(version);
		view.bytes(0, layout.size)?;

		let mut colors = [0u8; 7];
		colors.copy_from_slice(view.bytes(0x2C, 7)?);

		let levels = layout.levels.iter().map(|&offset| view.u8(offset)).collect::<Result<Vec<_>, _>>()?;
		let attribute = |index: usize| -> Result<u8, RecordError> {
			layout.attributes[index].map_or(Ok(0), |offset| view.u8(offset))
		};
		let attributes = Attributes {
			strength: attribute(0)?,
			strength_extra: attribute(1)?,
			intelligence: attribute(2)?,
			wisdom: attribute(3)?,
			dexterity: attribute(4)?,
			constitution: attribute(5)?,
			charisma: attribute(6)?,
		};
		let ids = IdsValues {
			allegiance: view.u8(layout.ids)?,
			general: view.u8(layout.ids + 1)?,
			race: view.u8(layout.ids + 2)?,
			class: view.u8(layout.ids + 3)?,
			specifics: view.u8(layout.ids + 4)?,
			gender: view.u8(layout.ids + 5)?,
			alignment: view.u8(layout.alignment)?,
		};

		let slots_offset = view.usize(layout.tables)?;
		let items_offset = view.usize(layout.tables + 4)?;
		let item_count = view.usize(layout.tables + 8)?;
		let effects_offset = view.usize(layout.tables + 12)?;
		let effect_count = view.usize(layout.tables + 16)?;

		view.bytes(items_offset, item_count.saturating_mul(ITEM_ENTRY_SIZE))?;
		let items = (0..item_count)
			.map(|i| view.resref(items_offset + i * ITEM_ENTRY_SIZE))
			.collect::<Result<Vec<_>, _>>()?;
		let slots = (0..layout.slot_count)
			.map(|i| view.u16(slots_offset + i * 2))
			.collect::<Result<Vec<_>, _>>()?;
		let selected_weapon = view.i16(slots_offset + layout.slot_count * 2)?;
		let selected_ability = view.u16(slots_offset + layout.slot_count * 2 + 2)?;

		let v2_effects = match version {
			CreatureVersion::V10 | CreatureVersion::V90 => view.u8(0x33)? != 0,
			CreatureVersion::V12 => false,
			CreatureVersion::V22 => true,
		};
		let effects = if v2_effects {
			read_v2_list(&view, effects_offset, effect_count)
		} else {
			read_v1_list(&view, effects_offset, 0, effect_count)
		};

		Ok(Self {
			version,
			flags: view.u32(0x10)?,
			state_flags: view.u32(0x20)?,
			max_hit_points: view.u16(0x26)?,
			animation_id: view.u16(0x28)?,
			colors,
			levels,
			attributes,
			kit: layout.kit.map_or(Ok(0), |offset| view.u32(offset))?,
			ids,
			script_name: view.text(layout.script_name, SCRIPT_NAME_LEN)?,
			items,
			slots,
			selected_weapon,
			selected_ability,
			effects,
		})
	}

	/// Returns the name of the item in a slot, if any.
	pub fn item_in_slot(&self, slot: usize) -> Option<&ResRef> {
		let index = *self.slots.get(slot)?;
		if index == EMPTY_SLOT {
			return None;
		}
		self.items.get(usize::from(index)).filter(|name| !name.is_empty())
	}

	/// Returns the number of classes whose levels count.
	///
	/// IWD2 records keep every class level; the others derive the count from
	/// the class id and the dual-class flags.
	pub fn active_class_count(&self) -> usize {
		if self.version == CreatureVersion::V22 {
			return self.levels.iter().filter(|&&level| level > 0).count();
		}
		let count = match self.ids.class {
			// Fighter/mage, fighter/cleric, fighter/thief, mage/thief,
			// cleric/mage, cleric/thief, fighter/druid, cleric/ranger
			7 | 8 | 9 | 13 | 14 | 15 | 16 | 18 => 2,
			// Fighter/mage/cleric, fighter/mage/thief
			10 | 17 => 3,
			_ => 1,
		};
		if count == 1 && self.flags & FLAG_DUAL_CLASS_MASK != 0 {
			// The old class only counts once the new class has overtaken it.
			let new = self.levels.first().copied().unwrap_or(0);
			let old = self.levels.get(1).copied().unwrap_or(0);
			return if new > old { 2 } else { 1 };
		}
		count
	}

	/// Returns the creature level combined across active classes.
	pub fn class_level(&self, mode: LevelMode) -> u8 {
		let active: Vec<u8> = if self.version == CreatureVersion::V22 {
			self.levels.iter().copied().filter(|&level| level > 0).collect()
		} else {
			self.levels.iter().copied().take(self.active_class_count()).collect()
		};
		if active.is_empty() {
			return 0;
		}
		match mode {
			LevelMode::Maximum => active.iter().copied().max().unwrap_or(0),
			LevelMode::Average => {
				let sum: usize = active.iter().map(|&level| usize::from(level)).sum();
				u8::try_from(sum / active.len()).unwrap_or(u8::MAX)
			}
		}
	}
}
