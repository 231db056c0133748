use std::collections::HashMap;

use cresprite_rs::prelude::*;
use cresprite_types::{
	fixtures::{CreatureBuilder, ItemBuilder},
	item::category,
};

use crate::add_item;

struct Sprites(HashMap<String, usize>);

impl CycleInfo for Sprites {
	fn cycle_count(&self, resource: &ResRef) -> usize {
		if self.0.contains_key(resource.as_str()) { 63 } else { 0 }
	}

	fn cycle_frame_count(&self, resource: &ResRef, _cycle: usize) -> usize {
		self.0.get(resource.as_str()).copied().unwrap_or(0)
	}
}

#[test_log::test]
fn equipment_overlays_animate_with_the_body() {
	let mut store = MemoryStore::new();
	add_item(&mut store, "SW1H01", &ItemBuilder::new(category::LARGE_SWORD).appearance("S1"));
	add_item(&mut store, "SHLD01", &ItemBuilder::new(category::MEDIUM_SHIELD).appearance("D2"));
	let data = CreatureBuilder::new(CreatureVersion::V10).animation_id(0x6100).item(2, "SHLD01").item(9, "SW1H01").build();

	let cache = ResourceCache::new();
	let facts = Resolver::new(&store, &store, &cache, Game::Bg2).resolve_bytes(&data).unwrap();
	let animation = facts.animation_type().unwrap();
	assert!(animation.has_equipment_overlays());

	let mut layers = vec![LayerSource::new(SpriteLayer::Avatar, "CFTB")];
	layers.extend(facts.overlay_codes().into_iter().map(|(layer, code)| LayerSource::new(layer, format!("WQS{code}"))));
	let sprites = Sprites(HashMap::from([
		("CFTBG1".to_string(), 8),
		("WQSS1G1".to_string(), 8),
		("WQSD2G1".to_string(), 5),
	]));

	let mut walk = build_sequence(animation, Sequence::Walk, &Direction::ALL, &layers, &sprites).unwrap();
	assert_eq!(walk.len(), 16);
	assert!(walk.directions().iter().all(|dir| dir.cycle.segments().len() == 3));
	assert_eq!(walk.directions().iter().filter(|dir| dir.mirrored).count(), 7);

	for _ in 0..6 {
		walk.advance();
	}
	let east = walk.direction(Direction::E).unwrap();
	let shield = east.cycle.segment(SpriteLayer::Shield).unwrap();
	assert_eq!(shield.current_frame(), 6);
	assert_eq!(shield.visible_frame(), None);
	assert_eq!(east.cycle.segment(SpriteLayer::Weapon).unwrap().visible_frame(), Some(6));
}

#[test]
fn die_sequence_freezes_on_last_frame() {
	let layers = [LayerSource::new(SpriteLayer::Avatar, "MOGR")];
	let sprites = Sprites(HashMap::from([("MOGRG3".to_string(), 7)]));

	let mut die = build_sequence(AnimationTypeId::Monster, Sequence::Die, &[Direction::SW], &layers, &sprites).unwrap();
	for _ in 0..20 {
		die.advance();
	}
	let segment = &die.directions()[0].cycle.segments()[0];
	assert_eq!(segment.behavior(), Behavior::Freeze);
	assert_eq!(segment.cycle(), 11);
	assert_eq!(segment.visible_frame(), Some(6));
}
