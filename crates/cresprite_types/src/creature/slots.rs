//! Equipment slot layouts.
//!
//! Each record version numbers its inventory slots differently. The layouts
//! below map the generalized [`ItemSlot`]s onto slot table indices so the
//! resolver never branches on the version itself.

use std::fmt;

use crate::game::{Game, GameFamily};

use super::CreatureVersion;

/// Selected weapon value of the magically created weapon
pub const MAGIC_WEAPON_VALUE: i16 = 1000;

/// A generalized equipment slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemSlot {
	/// Helmet (PST: right earring)
	Helmet,
	/// Body armor
	Armor,
	/// Shield
	Shield,
	/// Gauntlets or bracers (PST: hand)
	Gauntlets,
	/// Left ring
	RingLeft,
	/// Right ring
	RingRight,
	/// Amulet (PST: left earring)
	Amulet,
	/// Belt (PST: lower right tattoo)
	Belt,
	/// Boots (PST: wrist)
	Boots,
	/// Cloak (PST: left tattoo)
	Cloak,
	/// The active weapon
	Weapon,
}

impl ItemSlot {
	/// Order in which equipped items contribute effects and colors.
	pub const EVALUATION_ORDER: [Self; 11] = [
		Self::Helmet,
		Self::Armor,
		Self::Shield,
		Self::Gauntlets,
		Self::RingRight,
		Self::RingLeft,
		Self::Amulet,
		Self::Belt,
		Self::Boots,
		Self::Cloak,
		Self::Weapon,
	];
}

impl fmt::Display for ItemSlot {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Helmet => "helmet",
			Self::Armor => "armor",
			Self::Shield => "shield",
			Self::Gauntlets => "gauntlets",
			Self::RingLeft => "ring-left",
			Self::RingRight => "ring-right",
			Self::Amulet => "amulet",
			Self::Belt => "belt",
			Self::Boots => "boots",
			Self::Cloak => "cloak",
			Self::Weapon => "weapon",
		};
		f.write_str(name)
	}
}

/// What the selected weapon value of a creature refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponSelection {
	/// A regular weapon slot (weapon set index)
	Weapon(usize),
	/// A quiver slot
	Quiver(usize),
	/// The magically created weapon
	Magic,
}

/// Slot table layout of one record version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotLayout {
	/// Layout name
	pub name: &'static str,
	/// Generalized slots other than weapon and shield sets
	pub equipment: &'static [(ItemSlot, usize)],
	/// Regular weapon slots
	pub weapons: &'static [usize],
	/// Shield slot of each weapon set; empty when the layout has a single
	/// shield slot in `equipment`
	pub shields: &'static [usize],
	/// Quiver slots
	pub quivers: &'static [usize],
	/// Magically created weapon slot
	pub magic_weapon: usize,
	/// Selected weapon value of the first quiver
	pub quiver_base: i16,
}

const QUIVERS: &[usize] = &[13, 14, 15, 16];
const WEAPONS: &[usize] = &[9, 10, 11, 12];

const PST_EQUIPMENT: &[(ItemSlot, usize)] = &[
	(ItemSlot::Helmet, 0),
	(ItemSlot::Armor, 1),
	(ItemSlot::Cloak, 2),
	(ItemSlot::Gauntlets, 3),
	(ItemSlot::RingLeft, 4),
	(ItemSlot::RingRight, 5),
	(ItemSlot::Amulet, 6),
	(ItemSlot::Belt, 7),
	(ItemSlot::Boots, 8),
];

/// BG, BG2 and the BG-based Enhanced Editions.
pub const STANDARD: SlotLayout = SlotLayout {
	name: "standard",
	equipment: &[
		(ItemSlot::Helmet, 0),
		(ItemSlot::Armor, 1),
		(ItemSlot::Shield, 2),
		(ItemSlot::Gauntlets, 3),
		(ItemSlot::RingLeft, 4),
		(ItemSlot::RingRight, 5),
		(ItemSlot::Amulet, 6),
		(ItemSlot::Belt, 7),
		(ItemSlot::Boots, 8),
		(ItemSlot::Cloak, 17),
	],
	weapons: WEAPONS,
	shields: &[],
	quivers: QUIVERS,
	magic_weapon: 37,
	quiver_base: 4,
};

/// Icewind Dale. Its slot numbering matches [`STANDARD`].
pub const ICEWIND: SlotLayout = SlotLayout {
	name: "icewind",
	..STANDARD
};

/// Icewind Dale II: a shield slot per weapon set.
pub const ICEWIND2: SlotLayout = SlotLayout {
	name: "icewind2",
	equipment: &[
		(ItemSlot::Helmet, 0),
		(ItemSlot::Armor, 1),
		(ItemSlot::Gauntlets, 2),
		(ItemSlot::RingLeft, 3),
		(ItemSlot::RingRight, 4),
		(ItemSlot::Amulet, 5),
		(ItemSlot::Belt, 6),
		(ItemSlot::Boots, 7),
		(ItemSlot::Cloak, 20),
	],
	weapons: &[8, 10, 12, 14],
	shields: &[9, 11, 13, 15],
	quivers: &[16, 17, 18, 19],
	magic_weapon: 48,
	quiver_base: 8,
};

/// Planescape: Torment EE, which stores PST slots in a `V1.0` record.
pub const TORMENT_EE: SlotLayout = SlotLayout {
	name: "torment-ee",
	equipment: PST_EQUIPMENT,
	weapons: WEAPONS,
	shields: &[],
	quivers: QUIVERS,
	magic_weapon: 37,
	quiver_base: 4,
};

/// Planescape: Torment, with earrings and tattoos in place of helmet, amulet,
/// belt and cloak.
pub const TORMENT: SlotLayout = SlotLayout {
	name: "torment",
	magic_weapon: 44,
	..TORMENT_EE
};

impl SlotLayout {
	/// Selects the layout for a record version in a game.
	///
	/// Returns `None` if the game never stores creatures in that version.
	pub fn for_record(game: Game, version: CreatureVersion) -> Option<&'static Self> {
		match (version, game.family()) {
			(CreatureVersion::V10, GameFamily::Pst) => Some(&TORMENT_EE),
			(CreatureVersion::V10, GameFamily::Iwd2) => None,
			(CreatureVersion::V10, _) => Some(&STANDARD),
			(CreatureVersion::V12, GameFamily::Pst) => Some(&TORMENT),
			(CreatureVersion::V22, GameFamily::Iwd2) => Some(&ICEWIND2),
			(CreatureVersion::V90, _) if matches!(game, Game::Iwd | Game::IwdEe) => Some(&ICEWIND),
			_ => None,
		}
	}

	/// Returns the slot index of a generalized slot outside the weapon sets.
	pub fn slot_of(&self, slot: ItemSlot) -> Option<usize> {
		self.equipment.iter().find(|(s, _)| *s == slot).map(|&(_, index)| index)
	}

	/// Decodes a selected weapon value.
	pub fn selection(&self, value: i16) -> Option<WeaponSelection> {
		if value == MAGIC_WEAPON_VALUE {
			return Some(WeaponSelection::Magic);
		}
		let index = usize::try_from(value).ok()?;
		if index < self.weapons.len() {
			return Some(WeaponSelection::Weapon(index));
		}
		let quiver = usize::try_from(value - self.quiver_base).ok()?;
		(quiver < self.quivers.len()).then_some(WeaponSelection::Quiver(quiver))
	}

	/// Returns the slot index of a selection.
	pub fn selection_slot(&self, selection: WeaponSelection) -> Option<usize> {
		match selection {
			WeaponSelection::Weapon(set) => self.weapons.get(set).copied(),
			WeaponSelection::Quiver(quiver) => self.quivers.get(quiver).copied(),
			WeaponSelection::Magic => Some(self.magic_weapon),
		}
	}

	/// Returns the shield slot paired with a weapon set, for layouts with one
	/// shield per set.
	pub fn set_shield(&self, set: usize) -> Option<usize> {
		self.shields.get(set).copied()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const ALL: [&SlotLayout; 5] = [&STANDARD, &ICEWIND, &ICEWIND2, &TORMENT_EE, &TORMENT];

	#[test]
	fn test_layouts_have_no_duplicate_indices() {
		for layout in ALL {
			let mut indices: Vec<usize> = layout.equipment.iter().map(|&(_, i)| i).collect();
			indices.extend(layout.weapons);
			indices.extend(layout.shields);
			indices.extend(layout.quivers);
			indices.push(layout.magic_weapon);
			let count = indices.len();
			indices.sort_unstable();
			indices.dedup();
			assert_eq!(indices.len(), count, "duplicate slot in {}", layout.name);
		}
	}

	#[test]
	fn test_layouts_fit_their_record_versions() {
		use crate::creature::record::HeaderLayout;

		let pairs = [
			(&STANDARD, CreatureVersion::V10),
			(&ICEWIND, CreatureVersion::V90),
			(&ICEWIND2, CreatureVersion::V22),
			(&TORMENT_EE, CreatureVersion::V10),
			(&TORMENT, CreatureVersion::V12),
		];
		for (layout, version) in pairs {
			let slot_count = HeaderLayout::for_version(version).slot_count;
			assert!(layout.magic_weapon < slot_count, "{} overflows {version}", layout.name);
		}
	}

	#[test]
	fn test_layout_selection() {
		assert_eq!(SlotLayout::for_record(Game::Bg2, CreatureVersion::V10), Some(&STANDARD));
		assert_eq!(SlotLayout::for_record(Game::PstEe, CreatureVersion::V10), Some(&TORMENT_EE));
		assert_eq!(SlotLayout::for_record(Game::Pst, CreatureVersion::V12), Some(&TORMENT));
		assert_eq!(SlotLayout::for_record(Game::Iwd2, CreatureVersion::V22), Some(&ICEWIND2));
		assert_eq!(SlotLayout::for_record(Game::Bg2, CreatureVersion::V22), None);
		assert_eq!(SlotLayout::for_record(Game::Iwd2, CreatureVersion::V10), None);
	}

	#[test]
	fn test_selection_decoding() {
		assert_eq!(STANDARD.selection(0), Some(WeaponSelection::Weapon(0)));
		assert_eq!(STANDARD.selection(5), Some(WeaponSelection::Quiver(1)));
		assert_eq!(STANDARD.selection(MAGIC_WEAPON_VALUE), Some(WeaponSelection::Magic));
		assert_eq!(STANDARD.selection(-1), None);
		assert_eq!(STANDARD.selection(8), None);
		assert_eq!(ICEWIND2.selection(9), Some(WeaponSelection::Quiver(1)));

		assert_eq!(STANDARD.selection_slot(WeaponSelection::Quiver(1)), Some(14));
		assert_eq!(TORMENT.selection_slot(WeaponSelection::Magic), Some(44));
	}

	#[test]
	fn test_torment_has_no_shield() {
		assert_eq!(TORMENT.slot_of(ItemSlot::Shield), None);
		assert_eq!(TORMENT.slot_of(ItemSlot::Cloak), Some(2));
		assert_eq!(STANDARD.slot_of(ItemSlot::Cloak), Some(17));
	}
}
