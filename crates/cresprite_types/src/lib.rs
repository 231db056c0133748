//! This crate provides the creature visual-state engine of the `cresprite-rs`
//! project.
//!
//! # Modules
//!
//! - **creature**: CRE records, equipment slots and the [`Resolver`](creature::Resolver)
//!   producing per-creature facts
//! - **item**: ITM records and equipment predicates
//! - **effect**: effect classification, indirection and conditional validity
//! - **anim**: animation types and the id ranges they claim per game
//! - **seq**: animation playback definitions (segments, cycles, sequences)
//! - **palette**: palettes, tints and color gradients
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use cresprite_types::prelude::*;
//!
//! let store = DirStore::open("override").unwrap();
//! let cache = ResourceCache::new();
//! let resolver = Resolver::new(&store, &store, &cache, Game::Bg2Ee);
//!
//! let facts = resolver.resolve_named(&ResRef::new("IMOEN").unwrap()).unwrap();
//! println!("{:?}", facts.effective_color(SpriteLayer::Avatar, 0));
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use cresprite_types::{anim::AnimationTypeTable, game::Game};
//!
//! let table = AnimationTypeTable::new(Game::Bg1, false);
//! assert!(table.type_of_id(0x6000).is_some());
//! ```

pub mod anim;
pub mod cache;
pub mod config;
pub mod creature;
pub mod effect;
pub mod error;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
pub mod game;
pub mod item;
pub mod layer;
pub mod palette;
pub mod record;
pub mod seq;

/// `use cresprite_types::prelude::*;` to import commonly used items.
pub mod prelude;
