use std::{fs, path::PathBuf};

use config::{Config, File, FileFormat};
use cresprite_rs::prelude::*;
use cresprite_types::{
	effect::opcode,
	fixtures::{CreatureBuilder, ItemBuilder, SpellBuilder},
	item::category,
};

use crate::color_effect;

struct Override(PathBuf);

impl Override {
	fn create(test: &str) -> Self {
		let dir = std::env::temp_dir().join(format!("cresprite-{test}-{}", std::process::id()));
		let _ = fs::remove_dir_all(&dir);
		fs::create_dir_all(&dir).unwrap();
		Self(dir)
	}

	fn write(&self, file: &str, data: &[u8]) {
		fs::write(self.0.join(file), data).unwrap();
	}
}

impl Drop for Override {
	fn drop(&mut self) {
		let _ = fs::remove_dir_all(&self.0);
	}
}

#[test_log::test]
fn resolves_from_loose_files() {
	let dir = Override::create("loose");
	dir.write("sw1h01.itm", &ItemBuilder::new(category::LARGE_SWORD).appearance("S1").build());
	dir.write(
		"SPWI120.SPL",
		&SpellBuilder::new().ability(vec![Effect {
			param1: 128,
			..Effect::new(opcode::TRANSLUCENCY)
		}])
		.build(),
	);
	let creature = CreatureBuilder::new(CreatureVersion::V10)
		.item(9, "SW1H01")
		.effect(Effect {
			resource: ResRef::new("SPWI120").unwrap(),
			..Effect::new(opcode::CAST_SPELL)
		})
		.effect(color_effect(33, 0x15))
		.build();
	dir.write("Jaheira.cre", &creature);

	let store = DirStore::open(&dir.0).unwrap();
	let cache = ResourceCache::new();
	let resolver = Resolver::new(&store, &store, &cache, Game::Bg2);
	let facts = resolver.resolve_named(&ResRef::new("JAHEIRA").unwrap()).unwrap();

	assert_eq!(facts.item(ItemSlot::Weapon).map(|item| item.appearance.as_str()), Some("S1"));
	assert_eq!(facts.effective_color(SpriteLayer::Weapon, 5), Some((33, false)));
	assert_eq!(facts.effective_translucency(), 128);
	assert!(facts.effects().len() >= 3);
}

#[test_log::test]
fn missing_creature_file_reports_not_found() {
	let dir = Override::create("missing");
	let store = DirStore::open(&dir.0).unwrap();
	let cache = ResourceCache::new();
	let resolver = Resolver::new(&store, &store, &cache, Game::Iwd);

	let err = resolver.resolve_named(&ResRef::new("NOBODY").unwrap()).unwrap_err();
	assert!(matches!(err, ResolveError::Vfs(ref e) if e.is_not_found()));
}

#[test]
fn config_loads_from_toml() {
	let text = "max_indirection_depth = 2\nmax_effect_nodes = 500\nanimation_overrides = false\nfist_table = \"FISTS\"\n";
	let config: ResolverConfig = Config::builder()
		.add_source(File::from_str(text, FileFormat::Toml))
		.build()
		.unwrap()
		.try_deserialize()
		.unwrap();

	assert_eq!(config.max_indirection_depth, 2);
	assert_eq!(config.max_effect_nodes, 500);
	assert_eq!(config.animation_overrides, Some(false));
	assert_eq!(config.fist_table, "FISTS");
	assert_eq!(config.random_color_retries, ResolverConfig::default().random_color_retries);

	let store = MemoryStore::new();
	let cache = ResourceCache::new();
	let resolver = Resolver::new(&store, &store, &cache, Game::Bg2Ee).with_config(config);
	assert!(!resolver.animation_types().overrides_enabled());
}
