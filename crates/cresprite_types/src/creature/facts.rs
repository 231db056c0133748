use std::{collections::BTreeMap, sync::Arc};

use crate::{
	anim::AnimationTypeId,
	effect::{
		ConditionTables, EffectId, EffectKind, EffectNode, EffectOrigin, EffectSet, EffectSubject, IdsField, condition::stat,
		opcode,
	},
	game::Game,
	item::EquipmentFact,
	layer::SpriteLayer,
};

use super::{CreatureRecord, ItemSlot, LevelMode};

/// Stored allegiance override meaning "no override"
pub const NO_ALLEGIANCE_OVERRIDE: i16 = -1;

/// Translucency of animations flagged as translucent
pub const BASE_TRANSLUCENCY: u8 = 128;

/// State flag bits read by the status predicates.
pub mod state {
	/// Panicked
	pub const PANIC: u32 = 0x0000_0004;
	/// Died frozen
	pub const FROZEN_DEATH: u32 = 0x0000_0040;
	/// Died petrified
	pub const STONE_DEATH: u32 = 0x0000_0080;
	/// Died burning
	pub const FLAME_DEATH: u32 = 0x0000_0200;
}

/// Presentation traits of the creature's animation, supplied by the caller's
/// animation data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationTraits {
	/// The animation is drawn translucent
	pub translucent: bool,
	/// Translucency stat of the Enhanced Edition rules
	pub translucency_stat: Option<u8>,
	/// Selection circle size
	pub circle_size: Option<u8>,
}

/// Everything needed to draw a creature, derived from its record, equipment
/// and effects.
///
/// Facts are resolved once per creature state by
/// [`Resolver`](super::Resolver) and replaced on the next resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureFacts {
	pub(super) game: Game,
	pub(super) record: CreatureRecord,
	pub(super) animation_type: Option<AnimationTypeId>,
	pub(super) equipment: BTreeMap<ItemSlot, Arc<EquipmentFact>>,
	pub(super) effects: EffectSet,
	pub(super) conditions: ConditionTables,
	pub(super) traits: AnimationTraits,
	pub(super) allegiance_override: i16,
}

impl CreatureFacts {
	/// Returns the game the facts were resolved for.
	pub fn game(&self) -> Game {
		self.game
	}

	/// Returns the creature record.
	pub fn record(&self) -> &CreatureRecord {
		&self.record
	}

	/// Returns the animation type of the creature's animation id.
	pub fn animation_type(&self) -> Option<AnimationTypeId> {
		self.animation_type
	}

	/// Returns the animation traits the facts were resolved with.
	pub fn traits(&self) -> AnimationTraits {
		self.traits
	}

	/// Returns the resolved effect forest.
	pub fn effects(&self) -> &EffectSet {
		&self.effects
	}

	/// Returns the item in a slot.
	pub fn item(&self, slot: ItemSlot) -> Option<&EquipmentFact> {
		self.equipment.get(&slot).map(Arc::as_ref)
	}

	/// Iterates over equipped items in evaluation order.
	pub fn equipped_items(&self) -> impl Iterator<Item = (ItemSlot, &EquipmentFact)> {
		ItemSlot::EVALUATION_ORDER.into_iter().filter_map(|slot| self.item(slot).map(|item| (slot, item)))
	}

	/// Returns the overlay appearance codes of the weapon, shield and helmet.
	pub fn overlay_codes(&self) -> Vec<(SpriteLayer, &str)> {
		[(SpriteLayer::Weapon, ItemSlot::Weapon), (SpriteLayer::Shield, ItemSlot::Shield), (SpriteLayer::Helmet, ItemSlot::Helmet)]
			.into_iter()
			.filter_map(|(layer, slot)| {
				let code = self.item(slot)?.appearance.trim();
				(!code.is_empty()).then_some((layer, code))
			})
			.collect()
	}

	/// Returns `true` if an effect and all its ancestors apply to this
	/// creature.
	pub fn is_effect_valid(&self, id: EffectId) -> bool {
		self.effects.is_valid(id, self, &self.conditions)
	}

	/// Returns the color gradient at a location and whether a random color
	/// index may be resolved.
	///
	/// A creature-level color effect beats an item color effect, which beats
	/// the creature's own color. Effect colors are never random.
	pub fn effective_color(&self, layer: SpriteLayer, location: u8) -> Option<(u8, bool)> {
		let own = *self.record.colors.get(usize::from(location))?;
		let color = self
			.color_effect(layer, location, |origin| origin == EffectOrigin::Creature)
			.or_else(|| self.item_effect(|slot| self.color_effect(layer, location, |origin| origin == EffectOrigin::Item(slot))))
			.and_then(|id| match self.effects.get(id)?.kind {
				EffectKind::SetColor {
					gradient,
					..
				} => Some((gradient, false)),
				_ => None,
			});
		Some(color.unwrap_or((own, true)))
	}

	/// Returns the winning tint opcode and its `0xRRGGBB` color at a location,
	/// with the same precedence as [`CreatureFacts::effective_color`].
	pub fn effective_tint(&self, layer: SpriteLayer, location: u8) -> Option<(u16, u32)> {
		let id = self
			.tint_effect(layer, location, EffectOrigin::Creature)
			.or_else(|| self.item_effect(|slot| self.tint_effect(layer, location, EffectOrigin::Item(slot))))?;
		match self.effects.get(id)?.kind {
			EffectKind::Tint {
				opcode,
				rgb,
				..
			} => Some((opcode, rgb)),
			_ => None,
		}
	}

	/// Returns the translucency, 0 (opaque) to 255.
	///
	/// The animation's translucent flag is overridden by the Enhanced Edition
	/// translucency stat, which is overridden by the strongest translucency
	/// effect.
	pub fn effective_translucency(&self) -> u8 {
		let mut value = if self.traits.translucent { BASE_TRANSLUCENCY } else { 0 };
		if self.game.is_enhanced_edition() {
			if let Some(stat) = self.traits.translucency_stat {
				value = stat;
			}
		}
		self.effects
			.all_matches(SpriteLayer::Avatar, |id, node| {
				matches!(node.kind, EffectKind::Translucency { .. }) && self.is_effect_valid(id)
			})
			.into_iter()
			.filter_map(|id| match self.effects.get(id)?.kind {
				EffectKind::Translucency {
					amount,
				} => Some(amount),
				_ => None,
			})
			.max()
			.unwrap_or(value)
	}

	/// Returns `true` if the creature is panicked.
	pub fn is_panicked(&self) -> bool {
		self.record.state_flags & state::PANIC != 0 || self.has_effect(|kind| matches!(kind, EffectKind::Panic))
	}

	/// Returns `true` if the creature is petrified.
	pub fn is_stoned(&self) -> bool {
		self.record.state_flags & state::STONE_DEATH != 0
			|| self.has_effect(|kind| matches!(kind, EffectKind::Petrification))
	}

	/// Returns `true` if the creature froze to death.
	pub fn is_frozen(&self) -> bool {
		self.record.state_flags & state::FROZEN_DEATH != 0
	}

	/// Returns `true` if the creature burned to death.
	pub fn is_burned(&self) -> bool {
		self.record.state_flags & state::FLAME_DEATH != 0
	}

	/// Returns `true` if the creature is blurred.
	pub fn is_blurred(&self) -> bool {
		self.has_effect(|kind| matches!(kind, EffectKind::Blur))
	}

	/// Returns the creature level combined across active classes.
	pub fn class_level(&self, mode: LevelMode) -> u8 {
		self.record.class_level(mode)
	}

	/// Returns the effective allegiance.
	pub fn allegiance(&self) -> u8 {
		self.allegiance_override().unwrap_or(self.record.ids.allegiance)
	}

	/// Returns the allegiance override, if set.
	pub fn allegiance_override(&self) -> Option<u8> {
		u8::try_from(self.allegiance_override).ok()
	}

	/// Sets or clears the allegiance override.
	pub fn set_allegiance_override(&mut self, value: Option<u8>) {
		self.allegiance_override = value.map_or(NO_ALLEGIANCE_OVERRIDE, i16::from);
	}

	fn item_effect(&self, mut find: impl FnMut(ItemSlot) -> Option<EffectId>) -> Option<EffectId> {
		self.equipped_items().find_map(|(slot, _)| find(slot))
	}

	fn color_effect(
		&self,
		layer: SpriteLayer,
		location: u8,
		origin: impl Fn(EffectOrigin) -> bool,
	) -> Option<EffectId> {
		self.effects
			.color_by_location(layer, opcode::SET_COLOR, location, |id, node| origin(node.origin) && self.is_effect_valid(id))
	}

	fn tint_effect(&self, layer: SpriteLayer, location: u8, origin: EffectOrigin) -> Option<EffectId> {
		self.effects.first_match(layer, |id, node: &EffectNode| {
			node.origin == origin
				&& matches!(node.kind, EffectKind::Tint { location: l, .. } if l.matches(location))
				&& self.is_effect_valid(id)
		})
	}

	fn has_effect(&self, predicate: impl Fn(&EffectKind) -> bool) -> bool {
		self.effects.first_match(SpriteLayer::Avatar, |id, node| predicate(&node.kind) && self.is_effect_valid(id)).is_some()
	}
}

impl EffectSubject for CreatureFacts {
	fn ids_value(&self, field: IdsField) -> u32 {
		let ids = &self.record.ids;
		match field {
			IdsField::Allegiance => u32::from(self.allegiance()),
			IdsField::General => u32::from(ids.general),
			IdsField::Race => u32::from(ids.race),
			IdsField::Class => u32::from(ids.class),
			IdsField::Specifics => u32::from(ids.specifics),
			IdsField::Gender => u32::from(ids.gender),
			IdsField::Alignment => u32::from(ids.alignment),
			IdsField::Kit => self.record.kit,
		}
	}

	fn script_name(&self) -> &str {
		&self.record.script_name
	}

	fn state_flags(&self) -> u32 {
		self.record.state_flags
	}

	fn stat(&self, id: u16) -> Option<i64> {
		let record = &self.record;
		let attributes = &record.attributes;
		let level = |index: usize| record.levels.get(index).map(|&level| i64::from(level));
		match id {
			stat::MAX_HIT_POINTS => Some(i64::from(record.max_hit_points)),
			stat::LEVEL => level(0),
			stat::LEVEL2 => level(1),
			stat::LEVEL3 => level(2),
			stat::STR => Some(i64::from(attributes.strength)),
			stat::STR_EXTRA => Some(i64::from(attributes.strength_extra)),
			stat::INT => Some(i64::from(attributes.intelligence)),
			stat::WIS => Some(i64::from(attributes.wisdom)),
			stat::DEX => Some(i64::from(attributes.dexterity)),
			stat::CON => Some(i64::from(attributes.constitution)),
			stat::CHR => Some(i64::from(attributes.charisma)),
			stat::KIT => Some(i64::from(record.kit)),
			_ => None,
		}
	}

	fn has_item_category(&self, category: u16) -> bool {
		self.equipment.values().any(|item| item.category == category)
	}

	fn circle_size(&self) -> Option<i64> {
		self.traits.circle_size.map(i64::from)
	}
}
