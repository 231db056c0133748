//! Prelude module for `cresprite_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```
//! use cresprite_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let store = MemoryStore::new();
//! let cache = ResourceCache::new();
//! let resolver = Resolver::new(&store, &store, &cache, Game::Iwd);
//! assert_eq!(resolver.config(), &ResolverConfig::default());
//! ```

// Resource access
#[doc(inline)]
pub use cresprite_vfs::{DirStore, MemoryStore, RecordStore, ResRef, ResourceKind, Table, TableProvider, VfsError};

// Configuration and errors
#[doc(inline)]
pub use crate::{
	cache::ResourceCache,
	config::ResolverConfig,
	error::{RecordError, ResolveError},
	game::{Game, GameFamily},
	layer::SpriteLayer,
};

// Creature resolution
#[doc(inline)]
pub use crate::creature::{
	AnimationTraits, CreatureFacts, CreatureRecord, CreatureVersion, ItemSlot, LevelMode, Resolver, SlotLayout,
	WeaponSelection,
};

// Items and effects
#[doc(inline)]
pub use crate::{
	effect::{Effect, EffectId, EffectKind, EffectOrigin, EffectSet, EffectSubject},
	item::{EquipmentFact, Launcher, MeleeKind},
};

// Animation
#[doc(inline)]
pub use crate::{
	anim::{AnimationTypeId, AnimationTypeTable},
	palette::{Color, ColorGradients, Palette, TintOp},
	seq::{Behavior, CycleDef, CycleInfo, DirDef, Direction, LayerSource, SegmentDef, SeqDef, Sequence, build_sequence},
};
