use std::{collections::BTreeMap, ops::RangeInclusive, sync::Arc};

use cresprite_vfs::{RecordStore, ResRef, ResourceKind, TableProvider};
use log::{debug, warn};

use super::{
	AnimationTraits, CreatureFacts, CreatureRecord, ItemSlot, LevelMode, NO_ALLEGIANCE_OVERRIDE, SlotLayout,
	WeaponSelection,
};
use crate::{
	anim::AnimationTypeTable,
	cache::ResourceCache,
	config::ResolverConfig,
	effect::{ConditionTables, EffectOrigin, EffectResolver, EffectSet},
	error::ResolveError,
	game::Game,
	item::{CATEGORY_OFFSET, EquipmentFact},
	palette::ColorGradients,
	record::RecordView,
};

/// Animation ids of unarmed-combat (monk) character animations
pub const MONK_ANIMATIONS: RangeInclusive<u16> = 0x6500..=0x65FF;

/// Fist items by minimum level, used when the fist table is unavailable
pub const FALLBACK_FISTS: [(u8, &str); 6] =
	[(1, "MFIST1"), (3, "MFIST2"), (6, "MFIST3"), (9, "MFIST4"), (12, "MFIST5"), (15, "MFIST6")];

/// Resolves creature records into [`CreatureFacts`].
///
/// # Examples
///
/// ```
/// use cresprite_types::prelude::*;
///
/// let store = MemoryStore::new();
/// let cache = ResourceCache::new();
/// let resolver = Resolver::new(&store, &store, &cache, Game::Bg2);
///
/// let name = ResRef::new("IMOEN").unwrap();
/// let err = resolver.resolve_named(&name).unwrap_err();
/// assert!(matches!(err, ResolveError::Vfs(e) if e.is_not_found()));
/// ```
pub struct Resolver<'a> {
	store: &'a dyn RecordStore,
	tables: &'a dyn TableProvider,
	cache: &'a ResourceCache,
	game: Game,
	config: ResolverConfig,
}

impl<'a> Resolver<'a> {
	/// Creates a resolver with the default configuration.
	pub fn new(store: &'a dyn RecordStore, tables: &'a dyn TableProvider, cache: &'a ResourceCache, game: Game) -> Self {
		Self {
			store,
			tables,
			cache,
			game,
			config: ResolverConfig::default(),
		}
	}

	/// Replaces the configuration.
	pub fn with_config(mut self, config: ResolverConfig) -> Self {
		self.config = config;
		self
	}

	/// Returns the active game.
	pub fn game(&self) -> Game {
		self.game
	}

	/// Returns the configuration.
	pub fn config(&self) -> &ResolverConfig {
		&self.config
	}

	/// Returns the animation type table for the active game.
	pub fn animation_types(&self) -> AnimationTypeTable {
		AnimationTypeTable::new(self.game, self.config.overrides_enabled(self.game))
	}

	/// Loads an item fact through the cache.
	///
	/// Missing and malformed items yield `None`.
	pub fn item(&self, name: &ResRef) -> Option<Arc<EquipmentFact>> {
		if let Some(fact) = self.cache.item(name) {
			return Some(fact);
		}
		let data = match self.store.load(name, ResourceKind::Item) {
			Ok(data) => data,
			Err(e) if e.is_not_found() => {
				debug!("Item {name} is missing");
				return None;
			}
			Err(e) => {
				warn!("Cannot load item {name}: {e}");
				return None;
			}
		};
		match EquipmentFact::from_bytes(name.clone(), &data) {
			Ok(fact) => Some(self.cache.insert_item(fact)),
			Err(e) => {
				warn!("Skipping malformed item {name}: {e}");
				None
			}
		}
	}

	/// Builds the color gradient lookup from the cached gradient table and the
	/// random color table.
	///
	/// Returns `None` until a gradient table has been stored in the cache.
	pub fn color_gradients(&self) -> Option<ColorGradients> {
		let table = self.cache.gradients()?;
		let random = self.cache.random_colors(self.tables, &self.config.random_color_table);
		Some(ColorGradients::new(table, random, self.config.random_color_retries))
	}

	/// Loads and resolves a creature by name.
	pub fn resolve_named(&self, name: &ResRef) -> Result<CreatureFacts, ResolveError> {
		let data = self.store.load(name, ResourceKind::Creature)?;
		self.resolve_bytes(&data)
	}

	/// Parses and resolves a creature record.
	pub fn resolve_bytes(&self, data: &[u8]) -> Result<CreatureFacts, ResolveError> {
		let record = CreatureRecord::from_bytes(data)?;
		self.resolve(&record)
	}

	/// Resolves a creature record with default animation traits.
	///
	/// # Errors
	///
	/// Fails with [`ResolveError::UnsupportedVersion`] if the record version
	/// has no slot layout in the active game. Missing or malformed items,
	/// spells and secondary effects never fail the resolution.
	pub fn resolve(&self, record: &CreatureRecord) -> Result<CreatureFacts, ResolveError> {
		self.resolve_with_traits(record, AnimationTraits::default())
	}

	/// Resolves a creature record.
	pub fn resolve_with_traits(
		&self,
		record: &CreatureRecord,
		traits: AnimationTraits,
	) -> Result<CreatureFacts, ResolveError> {
		let layout = SlotLayout::for_record(self.game, record.version).ok_or_else(|| ResolveError::UnsupportedVersion {
			version: record.version.to_string(),
			game: self.game,
		})?;

		let mut equipment = BTreeMap::new();
		for &(slot, index) in layout.equipment {
			if let Some(item) = self.slot_item(record, index) {
				equipment.insert(slot, item);
			}
		}

		let selection = layout.selection(record.selected_weapon);
		if !layout.shields.is_empty() {
			let set = match selection {
				Some(WeaponSelection::Weapon(set)) => set,
				_ => 0,
			};
			if let Some(shield) = layout.set_shield(set).and_then(|slot| self.slot_item(record, slot)) {
				equipment.insert(ItemSlot::Shield, shield);
			}
		}

		if let Some(weapon) = self.active_weapon(record, layout, selection) {
			if weapon.is_two_handed_weapon() && equipment.remove(&ItemSlot::Shield).is_some() {
				debug!("Two-handed {} clears the shield slot", weapon.resref);
			}
			equipment.insert(ItemSlot::Weapon, weapon);
		}

		let resolver = EffectResolver::new(self.store, self.game, &self.config);
		let mut effects = EffectSet::new();
		for effect in &record.effects {
			resolver.add(&mut effects, effect.clone(), EffectOrigin::Creature);
		}
		for slot in ItemSlot::EVALUATION_ORDER {
			let Some(item) = equipment.get(&slot) else {
				continue;
			};
			for effect in &item.effects {
				resolver.add(&mut effects, effect.clone(), EffectOrigin::Item(slot));
			}
		}

		let conditions = ConditionTables::new(
			self.tables.table(&self.config.spell_protection_table),
			self.config.max_condition_depth,
		);
		debug!(
			"Resolved creature {:?}: {} items, {} effect nodes",
			record.script_name,
			equipment.len(),
			effects.len()
		);

		Ok(CreatureFacts {
			game: self.game,
			record: record.clone(),
			animation_type: self.animation_types().type_of_id(record.animation_id),
			equipment,
			effects,
			conditions,
			traits,
			allegiance_override: NO_ALLEGIANCE_OVERRIDE,
		})
	}

	fn slot_item(&self, record: &CreatureRecord, slot: usize) -> Option<Arc<EquipmentFact>> {
		self.item(record.item_in_slot(slot)?)
	}

	fn active_weapon(
		&self,
		record: &CreatureRecord,
		layout: &SlotLayout,
		selection: Option<WeaponSelection>,
	) -> Option<Arc<EquipmentFact>> {
		let slot = selection.and_then(|selection| self.weapon_slot(record, layout, selection));
		let mut weapon = slot.and_then(|slot| self.slot_item(record, slot));

		if let Some(category) = weapon.as_ref().and_then(|w| w.required_launcher().category()) {
			weapon = self.find_launcher(record, layout, category);
		}
		weapon.or_else(|| self.fist_item(record))
	}

	fn weapon_slot(&self, record: &CreatureRecord, layout: &SlotLayout, selection: WeaponSelection) -> Option<usize> {
		match selection {
			WeaponSelection::Weapon(set) if self.game.has_custom_weapon_slots() => {
				self.party_weapon_slot(record, set).or_else(|| layout.selection_slot(selection))
			}
			_ => layout.selection_slot(selection),
		}
	}

	/// Looks up a party member's own weapon slot numbering.
	fn party_weapon_slot(&self, record: &CreatureRecord, set: usize) -> Option<usize> {
		let table = self.tables.table(&self.config.weapon_slot_table)?;
		let slot = table.get_int(&record.script_name, &format!("WEAPON{set}"))?;
		usize::try_from(slot).ok()
	}

	/// Scans the weapon slots for a launcher of the given category.
	///
	/// The category is read straight from the record so ammunition checks do
	/// not decode and cache every carried weapon.
	fn find_launcher(&self, record: &CreatureRecord, layout: &SlotLayout, category: u16) -> Option<Arc<EquipmentFact>> {
		for &slot in layout.weapons {
			let Some(name) = record.item_in_slot(slot) else {
				continue;
			};
			let Ok(data) = self.store.load(name, ResourceKind::Item) else {
				continue;
			};
			if RecordView::new(&data, ResourceKind::Item).u16(CATEGORY_OFFSET).ok() == Some(category) {
				return self.item(name);
			}
		}
		debug!("No launcher of category {category} equipped");
		None
	}

	fn fist_item(&self, record: &CreatureRecord) -> Option<Arc<EquipmentFact>> {
		if !MONK_ANIMATIONS.contains(&record.animation_id) {
			return None;
		}
		let level = record.class_level(LevelMode::Maximum);
		let name = self.table_fist(level).or_else(|| fallback_fist(level))?;
		self.item(&name)
	}

	/// Picks the fist of the highest table row not above `level`.
	fn table_fist(&self, level: u8) -> Option<ResRef> {
		let table = self.tables.table(&self.config.fist_table)?;
		let column = table.columns().first()?;
		let (_, row) = table
			.row_labels()
			.filter_map(|label| label.parse::<u8>().ok().map(|min| (min, label)))
			.filter(|&(min, _)| min <= level)
			.max_by_key(|&(min, _)| min)?;
		let cell = table.get(row, column)?;
		if cell == table.default_value() || cell.starts_with('*') {
			return None;
		}
		ResRef::new(cell).ok()
	}
}

fn fallback_fist(level: u8) -> Option<ResRef> {
	let (_, name) = FALLBACK_FISTS.iter().rev().find(|(min, _)| level >= *min).unwrap_or(&FALLBACK_FISTS[0]);
	ResRef::new(name).ok()
}
