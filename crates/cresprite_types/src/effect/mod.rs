//! Effects, their classification and their resolution into per-subject
//! forests.
//!
//! # Resolution
//!
//! [`EffectResolver::add`] classifies an effect for the active game and, for
//! indirection opcodes, loads the referenced resource and adds its payload as
//! children:
//!
//! | Opcode | Payload |
//! |---|---|
//! | 146 cast spell | spell global effects + first ability effects |
//! | 177 use EFF | the EFF file's effect |
//! | 183 use EFF for item type (BG2, EE) | the EFF file's effect |
//! | 283 use EFF as curse (BG2, EE) | the EFF file's effect |
//! | 326 apply effects list (EE) | spell global effects + first ability effects |
//!
//! Leaves are indexed by the layer encoded in the high nibble of their color
//! location; non-color opcodes target the avatar.
//!
//! # Validity
//!
//! An effect applies only if its own condition and the condition of every
//! ancestor hold, see [`EffectSet::is_valid`].

pub mod condition;
mod entry;
mod kind;
mod set;
mod spell;


pub use condition::{ConditionTables, EffectSubject, IdsField, IdsFilter, Relation, RelationalCondition};
pub use entry::{EFF_FILE_SIZE, EFFECT_V1_SIZE, EFFECT_V2_BODY_SIZE, Effect};
pub(crate) use entry::{read_v1_list, read_v2_list};
pub use kind::{ColorLocation, EffectKind, Indirection, WILDCARD_LOCATION, opcode};
pub use set::{EffectId, EffectNode, EffectOrigin, EffectResolver, EffectSet};
pub use spell::{SPELL_ABILITY_SIZE, SpellEffects};
