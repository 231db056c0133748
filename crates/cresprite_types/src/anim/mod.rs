//! Animation types.
//!
//! A creature's 16-bit animation id selects how its sprites are stored and
//! drawn. The id ranges of each type differ between game families, and the
//! Enhanced Editions reassign a few ranges through higher-priority overrides.
//!
//! # Examples
//!
//! ```
//! use cresprite_types::{anim::{AnimationTypeId, AnimationTypeTable}, game::Game};
//!
//! let table = AnimationTypeTable::new(Game::Bg2, false);
//! assert_eq!(table.type_of_id(0x6500), Some(AnimationTypeId::Character));
//! assert_eq!(table.type_of_id(0x7F01), Some(AnimationTypeId::Monster));
//! ```

mod layout;
mod range;

use std::fmt;

pub use layout::{SequenceEntry, SequenceLayout, StoredDirections};
pub use range::AnimRange;

use crate::game::{
	Game,
	GameFamily::{self, Bg1, Bg2, Ee, Iwd, Iwd2, Pst},
};

/// Animation type identifiers, in lookup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationTypeId {
	/// Spell and projectile effects
	Effect,
	/// Large monsters split into quadrants
	MonsterQuadrant,
	/// Multi-part monsters (dragons)
	MonsterMulti,
	/// Multi-part monsters in the newer format
	MonsterMultiNew,
	/// Layered monsters with spell overlays
	MonsterLayeredSpell,
	/// Ankhegs
	MonsterAnkheg,
	/// Static townsfolk
	TownStatic,
	/// Paperdoll characters with weapon, shield and helmet overlays
	Character,
	/// Older paperdoll characters
	CharacterOld,
	/// Monsters
	Monster,
	/// Older monsters
	MonsterOld,
	/// Monsters with weapon overlays
	MonsterLayered,
	/// Large monsters
	MonsterLarge,
	/// Large monsters with sixteen directions
	MonsterLarge16,
	/// Static ambient creatures
	AmbientStatic,
	/// Ambient creatures
	Ambient,
	/// Flying creatures
	Flying,
	/// Icewind Dale monsters
	MonsterIcewind,
	/// Planescape: Torment creatures
	MonsterPlanescape,
}

impl AnimationTypeId {
	/// Every type in lookup order.
	pub const ALL: [Self; 19] = [
		Self::Effect,
		Self::MonsterQuadrant,
		Self::MonsterMulti,
		Self::MonsterMultiNew,
		Self::MonsterLayeredSpell,
		Self::MonsterAnkheg,
		Self::TownStatic,
		Self::Character,
		Self::CharacterOld,
		Self::Monster,
		Self::MonsterOld,
		Self::MonsterLayered,
		Self::MonsterLarge,
		Self::MonsterLarge16,
		Self::AmbientStatic,
		Self::Ambient,
		Self::Flying,
		Self::MonsterIcewind,
		Self::MonsterPlanescape,
	];

	/// Returns the type's definition.
	pub fn info(self) -> &'static AnimationType {
		&TYPES[self as usize]
	}

	/// Returns the cycle layout of the type's resources.
	pub const fn sequence_layout(self) -> &'static SequenceLayout {
		match self {
			Self::Effect | Self::TownStatic | Self::AmbientStatic => &layout::STATIC,
			Self::Character | Self::CharacterOld => &layout::CHARACTER,
			Self::MonsterOld | Self::MonsterLarge => &layout::MONSTER_OLD,
			Self::Ambient | Self::Flying => &layout::AMBIENT,
			Self::MonsterAnkheg => &layout::ANKHEG,
			Self::MonsterIcewind => &layout::ICEWIND,
			Self::MonsterPlanescape => &layout::PLANESCAPE,
			Self::MonsterQuadrant
			| Self::MonsterMulti
			| Self::MonsterMultiNew
			| Self::MonsterLayeredSpell
			| Self::Monster
			| Self::MonsterLayered
			| Self::MonsterLarge16 => &layout::MONSTER,
		}
	}

	/// Returns `true` for types drawing item overlays from equipment.
	pub const fn has_equipment_overlays(self) -> bool {
		matches!(self, Self::Character | Self::CharacterOld | Self::MonsterLayered)
	}
}

impl fmt::Display for AnimationTypeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.info().section)
	}
}

/// Definition of one animation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationType {
	/// Type identifier
	pub id: AnimationTypeId,
	/// Section name in animation descriptions
	pub section: &'static str,
	/// Base animation slots of the type
	pub slots: &'static [u16],
	/// Covered ids, by game family
	pub ranges: &'static [(&'static [GameFamily], &'static [AnimRange])],
	/// Ids claimed by this type whenever overrides are enabled
	pub overrides: &'static [AnimRange],
}

impl AnimationType {
	/// Returns `true` if the type covers the id in a game family, ignoring
	/// overrides.
	pub fn covers(&self, family: GameFamily, id: u16) -> bool {
		self.ranges
			.iter()
			.filter(|(families, _)| families.contains(&family))
			.any(|(_, ranges)| ranges.iter().any(|range| range.contains(id)))
	}

	/// Returns `true` if one of the type's override ranges covers the id.
	pub fn overrides(&self, id: u16) -> bool {
		self.overrides.iter().any(|range| range.contains(id))
	}
}

const NOT_PST: &[GameFamily] = &[Bg1, Bg2, Iwd, Iwd2, Ee];
const CLASSIC: &[GameFamily] = &[Bg1, Bg2, Iwd, Ee];
const BG: &[GameFamily] = &[Bg1, Bg2, Ee];
const BG2: &[GameFamily] = &[Bg2, Ee];

const fn ty(
	id: AnimationTypeId,
	section: &'static str,
	slots: &'static [u16],
	ranges: &'static [(&'static [GameFamily], &'static [AnimRange])],
) -> AnimationType {
	AnimationType {
		id,
		section,
		slots,
		ranges,
		overrides: &[],
	}
}

static TYPES: [AnimationType; 19] = [
	ty(AnimationTypeId::Effect, "effect", &[0x0000], &[(NOT_PST, &[AnimRange::simple(0x0000, 0x0FFF)])]),
	ty(AnimationTypeId::MonsterQuadrant, "monster_quadrant", &[0x1000], &[(BG2, &[AnimRange::simple(0x1000, 0x11FF)])]),
	ty(
		AnimationTypeId::MonsterMulti,
		"monster_multi",
		&[0x1200, 0x1400],
		&[(BG2, &[AnimRange::simple(0x1200, 0x12FF), AnimRange::simple(0x1400, 0x14FF)])],
	),
	AnimationType {
		overrides: &[AnimRange::simple(0x1200, 0x12FF)],
		..ty(AnimationTypeId::MonsterMultiNew, "multi_new", &[0x1300], &[(BG2, &[AnimRange::simple(0x1300, 0x13FF)])])
	},
	ty(
		AnimationTypeId::MonsterLayeredSpell,
		"monster_layered_spell",
		&[0x2000],
		&[(BG2, &[AnimRange::simple(0x2000, 0x20FF)])],
	),
	ty(AnimationTypeId::MonsterAnkheg, "monster_ankheg", &[0x3000], &[(CLASSIC, &[AnimRange::simple(0x3000, 0x3FFF)])]),
	ty(AnimationTypeId::TownStatic, "town_static", &[0x4000], &[(CLASSIC, &[AnimRange::simple(0x4000, 0x4FFF)])]),
	ty(
		AnimationTypeId::Character,
		"character",
		&[0x5000, 0x6000],
		&[(
			&[Bg2, Iwd, Iwd2, Ee],
			&[AnimRange::generated(0x5000, 0, 6, 8, 0x20), AnimRange::generated(0x6000, 0, 6, 8, 0x20)],
		)],
	),
	ty(
		AnimationTypeId::CharacterOld,
		"character_old",
		&[0x5000, 0x6000],
		&[
			(&[Bg1], &[AnimRange::simple(0x5000, 0x6FFF)]),
			(BG2, &[AnimRange::generated(0x6020, 0, 4, 8, 0x20)]),
		],
	),
	ty(AnimationTypeId::Monster, "monster", &[0x7000], &[(BG2, &[AnimRange::simple(0x7000, 0x7FFF)])]),
	ty(AnimationTypeId::MonsterOld, "monster_old", &[0x7000], &[(&[Bg1], &[AnimRange::simple(0x7000, 0x7FFF)])]),
	ty(AnimationTypeId::MonsterLayered, "monster_layered", &[0x8000], &[(BG2, &[AnimRange::simple(0x8000, 0x8FFF)])]),
	ty(AnimationTypeId::MonsterLarge, "monster_large", &[0x9000], &[(BG, &[AnimRange::simple(0x9000, 0x9FFF)])]),
	ty(AnimationTypeId::MonsterLarge16, "monster_large16", &[0xA000], &[(BG, &[AnimRange::simple(0xA000, 0xAFFF)])]),
	ty(AnimationTypeId::AmbientStatic, "ambient_static", &[0xB000], &[(CLASSIC, &[AnimRange::simple(0xB000, 0xBFFF)])]),
	ty(AnimationTypeId::Ambient, "ambient", &[0xC000], &[(CLASSIC, &[AnimRange::simple(0xC000, 0xCFFF)])]),
	ty(AnimationTypeId::Flying, "flying", &[0xD000], &[(CLASSIC, &[AnimRange::simple(0xD000, 0xDFFF)])]),
	ty(
		AnimationTypeId::MonsterIcewind,
		"monster_icewind",
		&[0x7000, 0xE000],
		&[
			(&[Iwd, Iwd2], &[AnimRange::simple(0x7000, 0x7FFF), AnimRange::simple(0xE000, 0xEFFF)]),
			(&[Ee], &[AnimRange::simple(0xE000, 0xEFFF)]),
		],
	),
	ty(
		AnimationTypeId::MonsterPlanescape,
		"monster_planescape",
		&[0xF000],
		&[(&[Pst], &[AnimRange::simple(0x0000, 0xFFFF)]), (&[Ee], &[AnimRange::simple(0xF000, 0xFFFF)])],
	),
];

/// Animation type lookup for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTypeTable {
	game: Game,
	overrides_enabled: bool,
}

impl AnimationTypeTable {
	/// Creates the lookup for a game.
	pub fn new(game: Game, overrides_enabled: bool) -> Self {
		Self {
			game,
			overrides_enabled,
		}
	}

	/// Returns the game.
	pub fn game(&self) -> Game {
		self.game
	}

	/// Returns `true` if override ranges are consulted.
	pub fn overrides_enabled(&self) -> bool {
		self.overrides_enabled
	}

	/// Returns `true` if the id belongs to the type.
	///
	/// When overrides are enabled and any type's override range covers the
	/// id, only that type's claim counts and regular ranges are ignored.
	pub fn contains(&self, ty: AnimationTypeId, id: u16) -> bool {
		if self.overrides_enabled && TYPES.iter().any(|t| t.overrides(id)) {
			return ty.info().overrides(id);
		}
		ty.info().covers(self.game.family(), id)
	}

	/// Returns the first type, in lookup order, containing the id.
	pub fn type_of_id(&self, id: u16) -> Option<AnimationTypeId> {
		AnimationTypeId::ALL.into_iter().find(|&ty| self.contains(ty, id))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_types_are_indexed_by_id() {
		for id in AnimationTypeId::ALL {
			assert_eq!(id.info().id, id);
		}
	}

	#[test]
	fn test_character_ranges() {
		let table = AnimationTypeTable::new(Game::Bg2, false);
		assert_eq!(table.type_of_id(0x6000), Some(AnimationTypeId::Character));
		assert_eq!(table.type_of_id(0x6510), Some(AnimationTypeId::Character));
		assert_eq!(table.type_of_id(0x6120), Some(AnimationTypeId::CharacterOld));
		assert_eq!(table.type_of_id(0x6600), None);

		let bg1 = AnimationTypeTable::new(Game::Bg1, false);
		assert_eq!(bg1.type_of_id(0x6000), Some(AnimationTypeId::CharacterOld));
		assert_eq!(bg1.type_of_id(0x7001), Some(AnimationTypeId::MonsterOld));
	}

	#[test]
	fn test_family_specific_ranges() {
		let iwd = AnimationTypeTable::new(Game::Iwd, false);
		assert_eq!(iwd.type_of_id(0x7001), Some(AnimationTypeId::MonsterIcewind));

		let pst = AnimationTypeTable::new(Game::Pst, false);
		assert_eq!(pst.type_of_id(0x0001), Some(AnimationTypeId::MonsterPlanescape));
		assert_eq!(pst.type_of_id(0x6000), Some(AnimationTypeId::MonsterPlanescape));

		let pst_ee = AnimationTypeTable::new(Game::PstEe, false);
		assert_eq!(pst_ee.type_of_id(0x7001), Some(AnimationTypeId::MonsterPlanescape));
	}

	#[test]
	fn test_override_wins_outright() {
		let plain = AnimationTypeTable::new(Game::Bg2Ee, false);
		assert_eq!(plain.type_of_id(0x1200), Some(AnimationTypeId::MonsterMulti));

		let overridden = AnimationTypeTable::new(Game::Bg2Ee, true);
		assert_eq!(overridden.type_of_id(0x1200), Some(AnimationTypeId::MonsterMultiNew));
		assert!(!overridden.contains(AnimationTypeId::MonsterMulti, 0x1200));
		assert!(overridden.contains(AnimationTypeId::MonsterMulti, 0x1400));
	}

	#[test]
	fn test_at_most_one_override_claims_an_id() {
		for id in (0..=u16::MAX).step_by(7) {
			let claims = TYPES.iter().filter(|t| t.overrides(id)).count();
			assert!(claims <= 1, "{id:#06X} claimed {claims} times");
		}
	}

	#[test]
	fn test_override_ids_always_resolve_to_the_override() {
		for game in Game::ALL {
			let table = AnimationTypeTable::new(game, true);
			for ty in &TYPES {
				for range in ty.overrides {
					for id in range.ids() {
						assert_eq!(table.type_of_id(id), Some(ty.id));
					}
				}
			}
		}
	}

	#[test]
	fn test_every_type_has_a_layout_with_stand_or_walk() {
		for id in AnimationTypeId::ALL {
			let layout = id.sequence_layout();
			assert!(
				layout.entry(crate::seq::Sequence::Stand).is_some() || layout.entry(crate::seq::Sequence::Walk).is_some()
			);
		}
	}
}
