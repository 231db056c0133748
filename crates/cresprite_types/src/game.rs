//! Supported game variants.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A supported Infinity Engine game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Game {
	/// Baldur's Gate
	Bg1,
	/// Baldur's Gate II
	Bg2,
	/// Icewind Dale
	Iwd,
	/// Icewind Dale II
	Iwd2,
	/// Planescape: Torment
	Pst,
	/// Baldur's Gate: Enhanced Edition
	BgEe,
	/// Baldur's Gate II: Enhanced Edition
	Bg2Ee,
	/// Icewind Dale: Enhanced Edition
	IwdEe,
	/// Planescape: Torment Enhanced Edition
	PstEe,
	/// Enhanced Edition Trilogy
	Eet,
}

/// Game family used to select animation id ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameFamily {
	/// Original Baldur's Gate
	Bg1,
	/// Original Baldur's Gate II
	Bg2,
	/// Original Icewind Dale
	Iwd,
	/// Icewind Dale II
	Iwd2,
	/// Planescape: Torment and its Enhanced Edition
	Pst,
	/// Enhanced Edition titles on the BG2 engine
	Ee,
}

impl Game {
	/// All supported games.
	pub const ALL: [Self; 10] = [
		Self::Bg1,
		Self::Bg2,
		Self::Iwd,
		Self::Iwd2,
		Self::Pst,
		Self::BgEe,
		Self::Bg2Ee,
		Self::IwdEe,
		Self::PstEe,
		Self::Eet,
	];

	/// Returns the animation range family of this game.
	pub const fn family(self) -> GameFamily {
		match self {
			Self::Bg1 => GameFamily::Bg1,
			Self::Bg2 => GameFamily::Bg2,
			Self::Iwd => GameFamily::Iwd,
			Self::Iwd2 => GameFamily::Iwd2,
			Self::Pst | Self::PstEe => GameFamily::Pst,
			Self::BgEe | Self::Bg2Ee | Self::IwdEe | Self::Eet => GameFamily::Ee,
		}
	}

	/// Returns `true` for the Enhanced Edition titles.
	pub const fn is_enhanced_edition(self) -> bool {
		matches!(self, Self::BgEe | Self::Bg2Ee | Self::IwdEe | Self::PstEe | Self::Eet)
	}

	/// Returns `true` if the engine implements the item-type and curse
	/// variants of the secondary effect opcode.
	pub const fn has_item_type_secondary_effects(self) -> bool {
		matches!(self, Self::Bg2) || self.is_enhanced_edition()
	}

	/// Returns `true` if the engine implements the "apply effects list" opcode.
	pub const fn has_effect_lists(self) -> bool {
		self.is_enhanced_edition()
	}

	/// Returns `true` if party members may define their own weapon slots.
	pub const fn has_custom_weapon_slots(self) -> bool {
		matches!(self.family(), GameFamily::Pst)
	}
}

impl fmt::Display for Game {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Bg1 => "Baldur's Gate",
			Self::Bg2 => "Baldur's Gate II",
			Self::Iwd => "Icewind Dale",
			Self::Iwd2 => "Icewind Dale II",
			Self::Pst => "Planescape: Torment",
			Self::BgEe => "Baldur's Gate: EE",
			Self::Bg2Ee => "Baldur's Gate II: EE",
			Self::IwdEe => "Icewind Dale: EE",
			Self::PstEe => "Planescape: Torment EE",
			Self::Eet => "EET",
		};
		f.write_str(name)
	}
}

impl FromStr for Game {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().replace(['-', '_', ':'], "").as_str() {
			"bg1" | "bg" => Ok(Self::Bg1),
			"bg2" | "soa" | "tob" => Ok(Self::Bg2),
			"iwd" | "iwd1" => Ok(Self::Iwd),
			"iwd2" => Ok(Self::Iwd2),
			"pst" => Ok(Self::Pst),
			"bgee" => Ok(Self::BgEe),
			"bg2ee" => Ok(Self::Bg2Ee),
			"iwdee" => Ok(Self::IwdEe),
			"pstee" => Ok(Self::PstEe),
			"eet" => Ok(Self::Eet),
			_ => Err(format!("unknown game: {s}")),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_game_families() {
		assert_eq!(Game::PstEe.family(), GameFamily::Pst);
		assert_eq!(Game::Eet.family(), GameFamily::Ee);
		assert_eq!(Game::Iwd2.family(), GameFamily::Iwd2);
	}

	#[test]
	fn test_opcode_gating() {
		assert!(Game::Bg2.has_item_type_secondary_effects());
		assert!(!Game::Iwd.has_item_type_secondary_effects());
		assert!(Game::BgEe.has_effect_lists());
		assert!(!Game::Bg2.has_effect_lists());
	}

	#[test]
	fn test_parse_game() {
		assert_eq!("BG2-EE".parse::<Game>(), Ok(Game::Bg2Ee));
		assert_eq!("pst".parse::<Game>(), Ok(Game::Pst));
		assert!("nwn".parse::<Game>().is_err());
	}
}
