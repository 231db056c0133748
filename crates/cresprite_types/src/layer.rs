//! Sprite layers.

use std::fmt;

/// One image layer of a creature sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpriteLayer {
	/// The creature body
	Avatar = 0,
	/// Weapon overlay
	Weapon = 1,
	/// Shield overlay
	Shield = 2,
	/// Helmet overlay
	Helmet = 3,
}

impl SpriteLayer {
	/// All layers in drawing order.
	pub const ALL: [Self; 4] = [Self::Avatar, Self::Weapon, Self::Shield, Self::Helmet];

	/// Decodes a layer from the high nibble of a color location byte.
	///
	/// Unknown nibbles select the avatar.
	pub const fn from_nibble(value: u8) -> Self {
		match value {
			1 => Self::Weapon,
			2 => Self::Shield,
			3 => Self::Helmet,
			_ => Self::Avatar,
		}
	}

	/// Returns the layer's position in [`SpriteLayer::ALL`].
	pub const fn index(self) -> usize {
		self as usize
	}
}

impl fmt::Display for SpriteLayer {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Avatar => "avatar",
			Self::Weapon => "weapon",
			Self::Shield => "shield",
			Self::Helmet => "helmet",
		};
		f.write_str(name)
	}
}
