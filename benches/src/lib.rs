//! Benchmark helper utilities for cresprite-rs
//!
//! This module builds synthetic game data for the benchmarks: a fully equipped
//! creature whose items carry color effects and chained spell indirections,
//! and an in-memory animation resource set.

use std::collections::HashMap;

use cresprite_types::{
	creature::CreatureVersion,
	effect::{Effect, opcode},
	fixtures::{CreatureBuilder, ItemBuilder, SpellBuilder},
	item::category,
	seq::CycleInfo,
};
use cresprite_vfs::{MemoryStore, ResRef, ResourceKind};

const EQUIPMENT: [(usize, u16); 10] = [
	(0, category::HELMET),
	(1, category::ARMOR),
	(2, category::LARGE_SHIELD),
	(3, category::BRACERS),
	(4, category::RING),
	(5, category::RING),
	(6, category::AMULET),
	(7, category::BELT),
	(8, category::BOOTS),
	(17, category::CLOAK),
];

fn name(value: &str) -> ResRef {
	ResRef::new(value).unwrap_or_else(|e| panic!("{e}"))
}

fn color(gradient: u32, location: u32) -> Effect {
	Effect {
		param1: gradient,
		param2: location,
		..Effect::new(opcode::SET_COLOR)
	}
}

/// Builds a store holding one creature (`BENCH`) with every equipment slot and
/// the first weapon slot filled.
///
/// Each item carries `effects_per_item` color effects. The creature casts a
/// spell chain `depth` spells deep, each spell adding one color effect.
pub fn equipped_creature_store(effects_per_item: usize, depth: usize) -> MemoryStore {
	let mut store = MemoryStore::new();
	let mut creature = CreatureBuilder::new(CreatureVersion::V10).animation_id(0x6100).colors([1, 2, 3, 4, 5, 6, 7]);

	for (i, &(slot, category)) in EQUIPMENT.iter().enumerate() {
		let item_name = format!("ITEM{i:02}");
		let mut item = ItemBuilder::new(category).appearance("A2");
		for e in 0..effects_per_item {
			item = item.effect(color((i * 7 + e) as u32 % 100, (e % 7) as u32));
		}
		store.insert(name(&item_name), ResourceKind::Item, item.build());
		creature = creature.item(slot, &item_name);
	}
	store.insert(name("SWORD"), ResourceKind::Item, ItemBuilder::new(category::LARGE_SWORD).appearance("S1").ability(0).build());
	creature = creature.item(9, "SWORD");

	for level in 0..depth {
		let mut spell = SpellBuilder::new().global(color(level as u32, 0xFF));
		if level + 1 < depth {
			spell = spell.global(Effect {
				resource: name(&format!("CHAIN{:02}", level + 1)),
				..Effect::new(opcode::CAST_SPELL)
			});
		}
		store.insert(name(&format!("CHAIN{level:02}")), ResourceKind::Spell, spell.build());
	}
	if depth > 0 {
		creature = creature.effect(Effect {
			resource: name("CHAIN00"),
			..Effect::new(opcode::CAST_SPELL)
		});
	}

	store.insert(name("BENCH"), ResourceKind::Creature, creature.build());
	store
}

/// In-memory cycle and frame counts of animation resources.
#[derive(Debug, Default)]
pub struct SyntheticCycles(HashMap<String, Vec<usize>>);

impl SyntheticCycles {
	/// Creates character animation resources for the given prefixes.
	///
	/// Every prefix gets `G1`, `A1`-`A3`, `SA` and `CA` resources with 63
	/// cycles of `frames` frames.
	pub fn character(prefixes: &[&str], frames: usize) -> Self {
		let mut cycles = HashMap::new();
		for prefix in prefixes {
			for suffix in ["G1", "A1", "A2", "A3", "SA", "CA"] {
				cycles.insert(format!("{prefix}{suffix}"), vec![frames; 63]);
			}
		}
		Self(cycles)
	}
}

impl CycleInfo for SyntheticCycles {
	fn cycle_count(&self, resource: &ResRef) -> usize {
		self.0.get(resource.as_str()).map_or(0, Vec::len)
	}

	fn cycle_frame_count(&self, resource: &ResRef, cycle: usize) -> usize {
		self.0.get(resource.as_str()).and_then(|frames| frames.get(cycle)).copied().unwrap_or(0)
	}
}
