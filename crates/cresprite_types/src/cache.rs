//! Shared resource cache.
//!
//! Item facts, the gradient table and the random color table are decoded once
//! and shared between resolutions. Entries are never evicted; game content is
//! immutable within a session. Call [`ResourceCache::invalidate`] when the
//! underlying resource set changes.

use std::{
	collections::HashMap,
	sync::{Arc, PoisonError, RwLock},
};

use cresprite_vfs::{ResRef, TableProvider};
use log::debug;

use crate::{
	item::EquipmentFact,
	palette::{GradientTable, RandomColors},
};

/// Append-only cache of decoded resources.
#[derive(Debug, Default)]
pub struct ResourceCache {
	items: RwLock<HashMap<ResRef, Arc<EquipmentFact>>>,
	gradients: RwLock<Option<Arc<GradientTable>>>,
	random_colors: RwLock<Option<Arc<RandomColors>>>,
}

impl ResourceCache {
	/// Creates an empty cache.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns a cached item fact.
	pub fn item(&self, name: &ResRef) -> Option<Arc<EquipmentFact>> {
		self.items.read().unwrap_or_else(PoisonError::into_inner).get(name).cloned()
	}

	/// Caches an item fact and returns the shared copy.
	///
	/// If another caller cached the same item first, that copy is returned.
	pub fn insert_item(&self, fact: EquipmentFact) -> Arc<EquipmentFact> {
		let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
		items.entry(fact.resref.clone()).or_insert_with(|| Arc::new(fact)).clone()
	}

	/// Returns the number of cached item facts.
	pub fn item_count(&self) -> usize {
		self.items.read().unwrap_or_else(PoisonError::into_inner).len()
	}

	/// Returns the gradient table, if one was provided.
	pub fn gradients(&self) -> Option<Arc<GradientTable>> {
		self.gradients.read().unwrap_or_else(PoisonError::into_inner).clone()
	}

	/// Stores the gradient table decoded from the game's gradient image.
	pub fn insert_gradients(&self, table: GradientTable) -> Arc<GradientTable> {
		let table = Arc::new(table);
		*self.gradients.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&table));
		table
	}

	/// Returns the random color table, loading it on first use.
	pub fn random_colors(&self, tables: &dyn TableProvider, name: &str) -> Option<Arc<RandomColors>> {
		if let Some(random) = self.random_colors.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
			return Some(Arc::clone(random));
		}
		let Some(table) = tables.table(name) else {
			debug!("Random color table {name} is missing");
			return None;
		};
		let random = Arc::new(RandomColors::from_table(&table));
		let mut slot = self.random_colors.write().unwrap_or_else(PoisonError::into_inner);
		Some(Arc::clone(slot.get_or_insert(random)))
	}

	/// Drops every cached resource.
	pub fn invalidate(&self) {
		self.items.write().unwrap_or_else(PoisonError::into_inner).clear();
		*self.gradients.write().unwrap_or_else(PoisonError::into_inner) = None;
		*self.random_colors.write().unwrap_or_else(PoisonError::into_inner) = None;
		debug!("Resource cache invalidated");
	}
}
