//! Closed classification of effect opcodes.

use cresprite_vfs::{ResRef, ResourceKind};

use super::{
	Effect,
	condition::{ConditionTables, EffectSubject, IdsFilter, RelationalCondition},
};
use crate::{game::Game, layer::SpriteLayer, palette::TintOp};

/// Effect opcodes this engine interprets.
pub mod opcode {
	/// Set a color gradient at a location
	pub const SET_COLOR: u16 = 7;
	/// Solid glow
	pub const GLOW_SOLID: u16 = 8;
	/// Pulsing glow
	pub const GLOW_PULSE: u16 = 9;
	/// Panic
	pub const PANIC: u16 = 24;
	/// Pulsing color
	pub const COLOR_PULSE: u16 = 50;
	/// Solid tint
	pub const TINT_SOLID: u16 = 51;
	/// Bright tint
	pub const TINT_BRIGHT: u16 = 52;
	/// Blur
	pub const BLUR: u16 = 65;
	/// Translucency
	pub const TRANSLUCENCY: u16 = 66;
	/// Petrification
	pub const PETRIFICATION: u16 = 134;
	/// Cast a spell on the subject
	pub const CAST_SPELL: u16 = 146;
	/// Apply a secondary effect file
	pub const USE_EFF: u16 = 177;
	/// Apply a secondary effect file while an item of some category is equipped
	pub const USE_EFF_FOR_ITEM_TYPE: u16 = 183;
	/// Apply a secondary effect file as a curse
	pub const USE_EFF_AS_CURSE: u16 = 283;
	/// Apply a spell's effects when a relational condition holds
	pub const APPLY_EFFECTS_LIST: u16 = 326;

	/// Opcodes whose `param2` encodes a layer and color location.
	pub const COLOR_RELATED: [u16; 6] = [SET_COLOR, GLOW_SOLID, GLOW_PULSE, COLOR_PULSE, TINT_SOLID, TINT_BRIGHT];

	/// Opcodes that tint a palette range.
	pub const TINTS: [u16; 5] = [GLOW_SOLID, GLOW_PULSE, COLOR_PULSE, TINT_SOLID, TINT_BRIGHT];
}

/// Location byte value that matches every location.
pub const WILDCARD_LOCATION: u8 = 0xFF;

/// Target layer and color location of a color-related effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorLocation {
	/// Layer the effect applies to
	pub layer: SpriteLayer,
	/// Location index (low nibble), or [`WILDCARD_LOCATION`]
	pub index: u8,
}

impl ColorLocation {
	/// Decodes a location byte: high nibble selects the layer, low nibble the
	/// location. `0xFF` is a wildcard on the avatar.
	pub const fn from_byte(value: u8) -> Self {
		if value == WILDCARD_LOCATION {
			return Self {
				layer: SpriteLayer::Avatar,
				index: WILDCARD_LOCATION,
			};
		}
		Self {
			layer: SpriteLayer::from_nibble(value >> 4),
			index: value & 0x0F,
		}
	}

	/// Returns `true` if this location covers `location`.
	///
	/// `0xFF` on either side matches everything.
	pub const fn matches(&self, location: u8) -> bool {
		self.index == WILDCARD_LOCATION || location == WILDCARD_LOCATION || self.index == (location & 0x0F)
	}
}

/// The resource an indirection effect pulls its payload from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Indirection {
	/// A spell: its global effects plus those of its first ability
	Spell(ResRef),
	/// A secondary effect file holding a single effect
	SecondaryEffect(ResRef),
}

impl Indirection {
	/// Returns the referenced resource name.
	pub const fn name(&self) -> &ResRef {
		match self {
			Self::Spell(name) | Self::SecondaryEffect(name) => name,
		}
	}

	/// Returns the kind of the referenced resource.
	pub const fn kind(&self) -> ResourceKind {
		match self {
			Self::Spell(_) => ResourceKind::Spell,
			Self::SecondaryEffect(_) => ResourceKind::Effect,
		}
	}
}

/// What an effect does, as far as creature presentation is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectKind {
	/// Replace the color gradient at a location
	SetColor {
		/// Target layer and location
		location: ColorLocation,
		/// Gradient index
		gradient: u8,
	},
	/// Tint or glow over a location
	Tint {
		/// Original opcode
		opcode: u16,
		/// Blend formula
		op: TintOp,
		/// Target layer and location
		location: ColorLocation,
		/// Color as `0xRRGGBB`
		rgb: u32,
	},
	/// Translucency
	Translucency {
		/// Amount, 0 (opaque) to 255
		amount: u8,
	},
	/// Blur
	Blur,
	/// Panic
	Panic,
	/// Petrification
	Petrification,
	/// Cast a spell and apply its effects
	CastSpell {
		/// Spell to pull effects from
		source: Indirection,
	},
	/// Apply a secondary effect to subjects passing an IDS filter
	UseEff {
		/// Secondary effect file
		source: Indirection,
		/// Subject filter
		filter: IdsFilter,
		/// Applied as a curse
		curse: bool,
	},
	/// Apply a secondary effect while an item of a category is equipped
	UseEffForItemType {
		/// Secondary effect file
		source: Indirection,
		/// Required item category
		category: u16,
	},
	/// Apply a spell's effects when a relational table row holds
	ApplyEffectsList {
		/// Spell to pull effects from
		source: Indirection,
		/// Table row and reference value
		condition: RelationalCondition,
	},
	/// Any other opcode
	Other {
		/// Opcode
		opcode: u16,
	},
}

impl EffectKind {
	/// Classifies an effect for the given game.
	///
	/// Opcodes the game's engine does not implement classify as
	/// [`EffectKind::Other`].
	pub fn classify(effect: &Effect, game: Game) -> Self {
		let location = ColorLocation::from_byte(effect.location_byte());
		match effect.opcode {
			opcode::SET_COLOR => Self::SetColor {
				location,
				gradient: (effect.param1 & 0xFF) as u8,
			},
			op @ (opcode::GLOW_SOLID
			| opcode::GLOW_PULSE
			| opcode::COLOR_PULSE
			| opcode::TINT_SOLID
			| opcode::TINT_BRIGHT) => Self::Tint {
				opcode: op,
				op: TintOp::from_opcode(op).unwrap_or(TintOp::Glow),
				location,
				rgb: effect.rgb(),
			},
			opcode::TRANSLUCENCY => Self::Translucency {
				amount: u8::try_from(effect.param1).unwrap_or(u8::MAX),
			},
			opcode::BLUR => Self::Blur,
			opcode::PANIC => Self::Panic,
			opcode::PETRIFICATION => Self::Petrification,
			opcode::CAST_SPELL => Self::CastSpell {
				source: Indirection::Spell(effect.resource.clone()),
			},
			opcode::USE_EFF => Self::UseEff {
				source: Indirection::SecondaryEffect(effect.resource.clone()),
				filter: IdsFilter::from_effect(effect),
				curse: false,
			},
			opcode::USE_EFF_AS_CURSE if game.has_item_type_secondary_effects() => Self::UseEff {
				source: Indirection::SecondaryEffect(effect.resource.clone()),
				filter: IdsFilter::from_effect(effect),
				curse: true,
			},
			opcode::USE_EFF_FOR_ITEM_TYPE if game.has_item_type_secondary_effects() => Self::UseEffForItemType {
				source: Indirection::SecondaryEffect(effect.resource.clone()),
				category: (effect.param2 & 0xFFFF) as u16,
			},
			opcode::APPLY_EFFECTS_LIST if game.has_effect_lists() => Self::ApplyEffectsList {
				source: Indirection::Spell(effect.resource.clone()),
				condition: RelationalCondition {
					row: effect.param2,
					value: effect.param1,
				},
			},
			opcode => Self::Other {
				opcode,
			},
		}
	}

	/// Returns the referenced resource for indirection effects.
	pub const fn indirection(&self) -> Option<&Indirection> {
		match self {
			Self::CastSpell {
				source,
			}
			| Self::UseEff {
				source,
				..
			}
			| Self::UseEffForItemType {
				source,
				..
			}
			| Self::ApplyEffectsList {
				source,
				..
			} => Some(source),
			_ => None,
		}
	}

	/// Returns the color location of color-related effects.
	pub const fn color_location(&self) -> Option<ColorLocation> {
		match self {
			Self::SetColor {
				location,
				..
			}
			| Self::Tint {
				location,
				..
			} => Some(*location),
			_ => None,
		}
	}

	/// Returns the layer the effect targets. Non-color effects target the
	/// avatar.
	pub const fn layer(&self) -> SpriteLayer {
		match self.color_location() {
			Some(location) => location.layer,
			None => SpriteLayer::Avatar,
		}
	}

	/// Evaluates this effect's own applicability condition.
	///
	/// Effects without a condition always apply.
	pub fn applies_to(&self, subject: &dyn EffectSubject, tables: &ConditionTables) -> bool {
		match self {
			Self::UseEff {
				filter,
				..
			} => filter.matches(subject),
			Self::UseEffForItemType {
				category,
				..
			} => subject.has_item_category(*category),
			Self::ApplyEffectsList {
				condition,
				..
			} => tables.evaluate(*condition, subject),
			_ => true,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_location_byte_decoding() {
		let location = ColorLocation::from_byte(0x22);
		assert_eq!(location.layer, SpriteLayer::Shield);
		assert_eq!(location.index, 2);

		let location = ColorLocation::from_byte(0x05);
		assert_eq!(location.layer, SpriteLayer::Avatar);
		assert!(location.matches(5));
		assert!(!location.matches(4));
		assert!(location.matches(WILDCARD_LOCATION));

		let wildcard = ColorLocation::from_byte(0xFF);
		assert_eq!(wildcard.layer, SpriteLayer::Avatar);
		assert!(wildcard.matches(3));
	}

	#[test]
	fn test_unknown_layer_nibble_targets_avatar() {
		assert_eq!(ColorLocation::from_byte(0x74).layer, SpriteLayer::Avatar);
	}

	#[test]
	fn test_classify_color_opcodes() {
		let effect = Effect {
			param1: 77,
			param2: 0x13,
			..Effect::new(opcode::SET_COLOR)
		};
		let kind = EffectKind::classify(&effect, Game::Bg2);
		assert_eq!(kind.layer(), SpriteLayer::Weapon);
		assert!(matches!(
			kind,
			EffectKind::SetColor {
				gradient: 77,
				..
			}
		));

		let tint = EffectKind::classify(&Effect::new(opcode::TINT_BRIGHT), Game::Bg2);
		assert!(matches!(
			tint,
			EffectKind::Tint {
				op: TintOp::Bright,
				..
			}
		));
	}

	#[test]
	fn test_classify_gates_by_game() {
		let effect = Effect::new(opcode::USE_EFF_FOR_ITEM_TYPE);
		assert!(matches!(EffectKind::classify(&effect, Game::Bg2), EffectKind::UseEffForItemType { .. }));
		assert!(matches!(EffectKind::classify(&effect, Game::Iwd), EffectKind::Other { opcode: 183 }));

		let effect = Effect::new(opcode::APPLY_EFFECTS_LIST);
		assert!(matches!(EffectKind::classify(&effect, Game::Bg2Ee), EffectKind::ApplyEffectsList { .. }));
		assert!(matches!(EffectKind::classify(&effect, Game::Bg2), EffectKind::Other { .. }));
	}

	#[test]
	fn test_non_color_effects_target_avatar() {
		let effect = Effect {
			param2: 0x30,
			..Effect::new(opcode::TRANSLUCENCY)
		};
		assert_eq!(EffectKind::classify(&effect, Game::Bg2).layer(), SpriteLayer::Avatar);
	}
}
