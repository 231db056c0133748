#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `cresprite-rs` resolves what an Infinity Engine creature looks like: which
//! equipment it shows, which colors, tints and translucency apply, and how its
//! animation sequences are assembled from sprite layers.
//!
pub use cresprite_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use cresprite_dylib;
