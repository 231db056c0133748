use cresprite_rs::prelude::*;
use cresprite_types::{
	fixtures::{CreatureBuilder, ItemBuilder},
	item::{FLAG_TWO_HANDED, category},
	seq::STOPPED,
};

use crate::{add_item, color_effect, resref};

#[test_log::test]
fn two_handed_weapon_hides_shield() {
	let mut store = MemoryStore::new();
	add_item(&mut store, "HALB01", &ItemBuilder::new(category::HALBERD).flags(FLAG_TWO_HANDED).appearance("HB"));
	add_item(&mut store, "SHLD05", &ItemBuilder::new(category::SMALL_SHIELD).appearance("D1"));
	let data = CreatureBuilder::new(CreatureVersion::V10).item(2, "SHLD05").item(9, "HALB01").build();
	store.insert(resref("KELDORN"), ResourceKind::Creature, data);

	let cache = ResourceCache::new();
	let resolver = Resolver::new(&store, &store, &cache, Game::Bg2);
	let facts = resolver.resolve_named(&resref("KELDORN")).unwrap();

	assert!(facts.item(ItemSlot::Shield).is_none());
	let slots: Vec<ItemSlot> = facts.equipped_items().map(|(slot, _)| slot).collect();
	assert_eq!(slots, vec![ItemSlot::Weapon]);
	// The shield item was still decoded and cached.
	assert!(cache.item(&resref("SHLD05")).is_some());
}

#[test_log::test]
fn creature_and_item_colors_per_layer() {
	let mut store = MemoryStore::new();
	let shield = ItemBuilder::new(category::LARGE_SHIELD).appearance("D3").effect(color_effect(66, 0x22));
	add_item(&mut store, "SHLD10", &shield);
	let data = CreatureBuilder::new(CreatureVersion::V10)
		.item(2, "SHLD10")
		.effect(color_effect(14, 0x02))
		.build();

	let cache = ResourceCache::new();
	let facts = Resolver::new(&store, &store, &cache, Game::Bg2Ee).resolve_bytes(&data).unwrap();

	assert_eq!(facts.effective_color(SpriteLayer::Avatar, 2), Some((14, false)));
	assert_eq!(facts.effective_color(SpriteLayer::Shield, 2), Some((66, false)));
}

#[test_log::test]
fn monk_level_selects_fist_from_table() {
	let mut store = MemoryStore::new();
	let fists = "2DA V1.0\n*\n   RESREF\n1  MFIST1\n4  MFIST4\n7  MFIST7\n";
	store.insert_table("MONKFIST", Table::parse("MONKFIST", fists).unwrap());
	for name in ["MFIST1", "MFIST4", "MFIST7", "MFIST3"] {
		add_item(&mut store, name, &ItemBuilder::new(category::FIST));
	}
	let data = CreatureBuilder::new(CreatureVersion::V10).animation_id(0x6500).levels(&[7]).class(20).build();

	let cache = ResourceCache::new();
	let facts = Resolver::new(&store, &store, &cache, Game::Bg2).resolve_bytes(&data).unwrap();

	assert_eq!(facts.item(ItemSlot::Weapon).map(|item| item.resref.as_str()), Some("MFIST7"));
	assert_eq!(facts.animation_type(), Some(AnimationTypeId::Character));
}

#[test]
fn repeat_segments_wrap_at_cycle_maximum() {
	let segment = |layer, frames| SegmentDef::new(resref("CHMFG1"), 9, layer, Behavior::Repeat, frames);
	let mut cycle = CycleDef::new(vec![segment(SpriteLayer::Avatar, 4), segment(SpriteLayer::Weapon, 6)]);

	let mut short = Vec::new();
	for _ in 0..10 {
		cycle.advance();
		short.push(cycle.segments()[0].current_frame());
	}

	assert_eq!(short, vec![1, 2, 3, 4, 5, 0, 1, 2, 3, 4]);
	let frames: Vec<i32> = cycle.segments().iter().map(SegmentDef::current_frame).collect();
	assert_eq!(frames, vec![4, 4]);
	assert_eq!(cycle.segments()[0].visible_frame(), None);
	assert_eq!(cycle.segments()[1].visible_frame(), Some(4));
	assert_ne!(cycle.segments()[0].current_frame(), STOPPED);
}
