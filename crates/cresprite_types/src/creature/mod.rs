//! Creature records and the facts resolved from them.
//!
//! [`Resolver`] turns a [`CreatureRecord`] into [`CreatureFacts`]:
//!
//! 1. The record version selects a [`SlotLayout`].
//! 2. Each generalized [`ItemSlot`] is filled from the slot table.
//! 3. The selected weapon is resolved, following launchers for ammunition and
//!    falling back to fists for unarmed-combat animations.
//! 4. A two-handed weapon clears the shield slot.
//! 5. Creature effects, then item effects in [`ItemSlot::EVALUATION_ORDER`],
//!    are expanded into an [`EffectSet`](crate::effect::EffectSet).
//!
//! Facts are immutable apart from the allegiance override; a new resolution
//! produces a new value.

mod facts;
pub(crate) mod record;
mod resolver;
mod slots;


pub use facts::{AnimationTraits, BASE_TRANSLUCENCY, CreatureFacts, NO_ALLEGIANCE_OVERRIDE, state};
pub use record::{
	Attributes, CreatureRecord, CreatureVersion, EMPTY_SLOT, FLAG_DUAL_CLASS_MASK, ITEM_ENTRY_SIZE, IdsValues, LevelMode,
	SCRIPT_NAME_LEN,
};
pub use resolver::{FALLBACK_FISTS, MONK_ANIMATIONS, Resolver};
pub use slots::{ICEWIND, ICEWIND2, ItemSlot, MAGIC_WEAPON_VALUE, STANDARD, SlotLayout, TORMENT, TORMENT_EE, WeaponSelection};
