//! End-to-end checks of creature visual resolution for `cresprite-rs`

mod on_disk;
mod scenarios;
mod sequences;

use cresprite_rs::prelude::*;
use cresprite_types::fixtures::ItemBuilder;

pub(crate) fn resref(name: &str) -> ResRef {
	ResRef::new(name).unwrap()
}

pub(crate) fn add_item(store: &mut MemoryStore, name: &str, item: &ItemBuilder) {
	store.insert(resref(name), ResourceKind::Item, item.build());
}

pub(crate) fn color_effect(gradient: u32, location: u32) -> Effect {
	Effect {
		param1: gradient,
		param2: location,
		..Effect::new(cresprite_types::effect::opcode::SET_COLOR)
	}
}
