use std::fmt;

use super::category;
use crate::{error::RecordError, record::RecordView};

/// Size of an item ability entry
pub const ITEM_ABILITY_SIZE: usize = 0x38;

/// Launcher an ability requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Launcher {
	/// No launcher required
	None,
	/// A bow
	Bow,
	/// A crossbow
	Crossbow,
	/// A sling
	Sling,
	/// An unknown launcher code
	Other(u8),
}

impl Launcher {
	/// Decodes the launcher code of an ability.
	pub const fn from_code(code: u8) -> Self {
		match code {
			0 => Self::None,
			1 => Self::Bow,
			2 => Self::Crossbow,
			3 => Self::Sling,
			other => Self::Other(other),
		}
	}

	/// Returns the item category of the required launcher.
	pub const fn category(self) -> Option<u16> {
		match self {
			Self::Bow => Some(category::BOW),
			Self::Crossbow => Some(category::CROSSBOW),
			Self::Sling => Some(category::SLING),
			Self::None | Self::Other(_) => None,
		}
	}
}

impl fmt::Display for Launcher {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::None => f.write_str("none"),
			Self::Bow => f.write_str("bow"),
			Self::Crossbow => f.write_str("crossbow"),
			Self::Sling => f.write_str("sling"),
			Self::Other(code) => write!(f, "launcher #{code}"),
		}
	}
}

/// Attack type of an ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbilityType {
	/// Default / unused
	Default,
	/// Melee
	Melee,
	/// Ranged
	Ranged,
	/// Magical
	Magical,
	/// Launcher
	Launcher,
	/// Unknown type code
	Other(u8),
}

impl AbilityType {
	/// Decodes the ability type code.
	pub const fn from_code(code: u8) -> Self {
		match code {
			0 => Self::Default,
			1 => Self::Melee,
			2 => Self::Ranged,
			3 => Self::Magical,
			4 => Self::Launcher,
			other => Self::Other(other),
		}
	}
}

/// One extended header of an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilityEntry {
	/// Attack type
	pub ability_type: AbilityType,
	/// Ability location (weapon slot, spell slot, item slot)
	pub location: u8,
	/// Target type
	pub target: u8,
	/// Required launcher
	pub launcher: Launcher,
	/// Damage type
	pub damage_type: u16,
	/// Number of effects of this ability
	pub effect_count: u16,
	/// Index of the first effect of this ability
	pub effect_index: u16,
	/// Ability flags
	pub flags: u32,
	/// Projectile id
	pub projectile: u16,
	/// Overhand, backhand and thrust animation probabilities
	pub attack_probabilities: [u16; 3],
	/// Arrow, bolt and bullet ammo flags
	pub ammo_flags: [bool; 3],
}

impl AbilityEntry {
	/// Parses an ability entry.
	pub fn from_view(view: &RecordView<'_>) -> Result<Self, RecordError> {
		view.bytes(0, ITEM_ABILITY_SIZE)?;
		Ok(Self {
			ability_type: AbilityType::from_code(view.u8(0x00)?),
			location: view.u8(0x02)?,
			target: view.u8(0x0C)?,
			launcher: Launcher::from_code(view.u8(0x10)?),
			damage_type: view.u16(0x1C)?,
			effect_count: view.u16(0x1E)?,
			effect_index: view.u16(0x20)?,
			flags: view.u32(0x26)?,
			projectile: view.u16(0x2A)?,
			attack_probabilities: [view.u16(0x2C)?, view.u16(0x2E)?, view.u16(0x30)?],
			ammo_flags: [view.u16(0x32)? != 0, view.u16(0x34)? != 0, view.u16(0x36)? != 0],
		})
	}
}
