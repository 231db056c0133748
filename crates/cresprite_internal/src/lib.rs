//! This module is separated into its own crate to enable simple dynamic linking for `cresprite_rs`, and should not be used directly.

/// `use cresprite_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export the member crates for convenience
pub use cresprite_types;
pub use cresprite_vfs;

// Re-export commonly used types at crate root
pub use cresprite_types::{
	creature::{CreatureFacts, Resolver},
	error::ResolveError,
	game::Game,
};
