//! Resolver configuration.
//!
//! Controls the safety limits and table names used while resolving creature
//! facts. The limits bound work on malformed or self-referencing game data.

use serde::{Deserialize, Serialize};

use crate::game::Game;

/// Configuration for creature fact resolution.
///
/// # Presets
///
/// - `default()`: balanced limits (indirection depth 8, retries 8, 16384 effect nodes)
/// - `lenient()`: deeper indirection chains for heavily modded data (32, 16, 262144)
/// - `strict()`: shallow chains, single random retry (4, 1, 1024)
///
/// # Examples
///
/// ```
/// use cresprite_types::config::ResolverConfig;
///
/// let config = ResolverConfig::default();
/// assert_eq!(config.max_indirection_depth, 8);
///
/// let config = ResolverConfig::strict();
/// assert_eq!(config.random_color_retries, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
	/// Maximum number of nested spell / secondary effect indirections
	pub max_indirection_depth: usize,
	/// Maximum number of effects collected for one creature, indirections
	/// included
	pub max_effect_nodes: usize,
	/// Maximum nesting of OR rows in the spell protection table
	pub max_condition_depth: usize,
	/// Number of random picks attempted before a direct color lookup
	pub random_color_retries: usize,
	/// Forces animation override ranges on or off; `None` enables them for
	/// Enhanced Edition games only
	pub animation_overrides: Option<bool>,
	/// Level-indexed fist item table
	pub fist_table: String,
	/// Random color indirection table
	pub random_color_table: String,
	/// Relational spell protection table
	pub spell_protection_table: String,
	/// Per-party-member weapon slot table
	pub weapon_slot_table: String,
}

impl Default for ResolverConfig {
	fn default() -> Self {
		Self {
			max_indirection_depth: 8,
			max_effect_nodes: 16_384,
			max_condition_depth: 4,
			random_color_retries: 8,
			animation_overrides: None,
			fist_table: "MONKFIST".to_string(),
			random_color_table: "RANDCOLR".to_string(),
			spell_protection_table: "SPLPROT".to_string(),
			weapon_slot_table: "WPNSLOT".to_string(),
		}
	}
}

impl ResolverConfig {
	/// Create a lenient configuration with deeper limits.
	pub fn lenient() -> Self {
		Self {
			max_indirection_depth: 32,
			max_effect_nodes: 262_144,
			max_condition_depth: 8,
			random_color_retries: 16,
			..Self::default()
		}
	}

	/// Create a strict configuration with shallow limits.
	pub fn strict() -> Self {
		Self {
			max_indirection_depth: 4,
			max_effect_nodes: 1_024,
			max_condition_depth: 2,
			random_color_retries: 1,
			..Self::default()
		}
	}

	/// Returns whether animation override ranges apply for the given game.
	pub fn overrides_enabled(&self, game: Game) -> bool {
		self.animation_overrides.unwrap_or_else(|| game.is_enhanced_edition())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_overrides_follow_game_by_default() {
		let config = ResolverConfig::default();
		assert!(config.overrides_enabled(Game::Bg2Ee));
		assert!(!config.overrides_enabled(Game::Bg2));
	}

	#[test]
	fn test_overrides_can_be_forced() {
		let config = ResolverConfig {
			animation_overrides: Some(true),
			..ResolverConfig::default()
		};
		assert!(config.overrides_enabled(Game::Bg1));
	}

	#[test]
	fn test_presets_order() {
		assert!(ResolverConfig::strict().max_indirection_depth < ResolverConfig::default().max_indirection_depth);
		assert!(ResolverConfig::lenient().max_indirection_depth > ResolverConfig::default().max_indirection_depth);
		assert!(ResolverConfig::strict().max_effect_nodes < ResolverConfig::default().max_effect_nodes);
		assert!(ResolverConfig::lenient().max_effect_nodes > ResolverConfig::default().max_effect_nodes);
	}
}
