//! Prelude module for `cresprite_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use cresprite_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let store = MemoryStore::new();
//! let cache = ResourceCache::new();
//! let resolver = Resolver::new(&store, &store, &cache, Game::Pst);
//! assert_eq!(resolver.animation_types().game(), Game::Pst);
//! ```

// Re-export everything from cresprite_types::prelude
#[doc(inline)]
pub use cresprite_types::prelude::*;

// Re-export the entire cresprite_types module for advanced usage
#[doc(inline)]
pub use cresprite_types;
