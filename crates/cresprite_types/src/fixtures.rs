//! Synthetic record builders.
//!
//! Produce minimal but well-formed ITM, SPL, EFF and CRE records for tests and
//! benchmarks. Only the fields the engine reads are populated.

use cresprite_vfs::ResRef;

use crate::{
	creature::{CreatureVersion, EMPTY_SLOT, ITEM_ENTRY_SIZE, record::HeaderLayout},
	effect::{EFF_FILE_SIZE, EFFECT_V1_SIZE, EFFECT_V2_BODY_SIZE, Effect, SPELL_ABILITY_SIZE},
	item::{ITEM_ABILITY_SIZE, ItemVersion},
};

fn put_u16(data: &mut [u8], offset: usize, value: u16) {
	data[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

fn put_u32(data: &mut [u8], offset: usize, value: u32) {
	data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

fn put_resref(data: &mut [u8], offset: usize, name: &ResRef) {
	data[offset..offset + 8].copy_from_slice(&name.to_bytes());
}

fn as_u32(value: usize) -> u32 {
	u32::try_from(value).unwrap_or(u32::MAX)
}

fn as_u16(value: usize) -> u16 {
	u16::try_from(value).unwrap_or(u16::MAX)
}

/// Encodes an effect as a V1 entry.
pub fn effect_v1_bytes(effect: &Effect) -> Vec<u8> {
	let mut data = vec![0u8; EFFECT_V1_SIZE];
	put_u16(&mut data, 0x00, effect.opcode);
	data[0x02] = effect.target;
	data[0x03] = effect.power;
	put_u32(&mut data, 0x04, effect.param1);
	put_u32(&mut data, 0x08, effect.param2);
	data[0x0C] = effect.timing;
	data[0x0D] = effect.dispel_resist;
	put_u32(&mut data, 0x0E, effect.duration);
	data[0x12] = effect.probability1;
	data[0x13] = effect.probability2;
	put_resref(&mut data, 0x14, &effect.resource);
	put_u32(&mut data, 0x1C, effect.dice_count);
	put_u32(&mut data, 0x20, effect.dice_size);
	put_u32(&mut data, 0x24, effect.save_flags);
	data[0x28..0x2C].copy_from_slice(&effect.save_bonus.to_le_bytes());
	put_u32(&mut data, 0x2C, effect.special);
	data
}

/// Encodes an effect as a V2 body.
pub fn effect_v2_body(effect: &Effect) -> Vec<u8> {
	let mut data = vec![0u8; EFFECT_V2_BODY_SIZE];
	data[0..8].copy_from_slice(b"EFF V2.0");
	put_u32(&mut data, 0x08, u32::from(effect.opcode));
	put_u32(&mut data, 0x0C, u32::from(effect.target));
	put_u32(&mut data, 0x10, u32::from(effect.power));
	put_u32(&mut data, 0x14, effect.param1);
	put_u32(&mut data, 0x18, effect.param2);
	put_u16(&mut data, 0x1C, u16::from(effect.timing));
	put_u32(&mut data, 0x20, effect.duration);
	put_u16(&mut data, 0x24, u16::from(effect.probability1));
	put_u16(&mut data, 0x26, u16::from(effect.probability2));
	put_resref(&mut data, 0x28, &effect.resource);
	put_u32(&mut data, 0x30, effect.dice_count);
	put_u32(&mut data, 0x34, effect.dice_size);
	put_u32(&mut data, 0x38, effect.save_flags);
	data[0x3C..0x40].copy_from_slice(&effect.save_bonus.to_le_bytes());
	put_u32(&mut data, 0x40, effect.special);
	put_u32(&mut data, 0x54, u32::from(effect.dispel_resist));
	put_resref(&mut data, 0x68, &effect.resource2);
	data
}

/// Encodes an effect as a standalone `EFF V2.0` file.
pub fn eff_file(effect: &Effect) -> Vec<u8> {
	let mut data = Vec::with_capacity(EFF_FILE_SIZE);
	data.extend_from_slice(b"EFF V2.0");
	data.extend_from_slice(&effect_v2_body(effect));
	data
}

/// Builds an item record.
#[derive(Debug, Clone)]
pub struct ItemBuilder {
	version: ItemVersion,
	category: u16,
	flags: u32,
	appearance: [u8; 2],
	launchers: Vec<u8>,
	effects: Vec<Effect>,
}

impl ItemBuilder {
	/// Starts a `V1` item of the given category.
	pub fn new(category: u16) -> Self {
		Self {
			version: ItemVersion::V1,
			category,
			flags: 0,
			appearance: *b"  ",
			launchers: Vec::new(),
			effects: Vec::new(),
		}
	}

	/// Sets the record version.
	pub fn version(mut self, version: ItemVersion) -> Self {
		self.version = version;
		self
	}

	/// Sets the item flags.
	pub fn flags(mut self, flags: u32) -> Self {
		self.flags = flags;
		self
	}

	/// Sets the two-letter appearance code.
	pub fn appearance(mut self, code: &str) -> Self {
		for (slot, byte) in self.appearance.iter_mut().zip(code.bytes()) {
			*slot = byte;
		}
		self
	}

	/// Adds an ability with the given launcher code.
	pub fn ability(mut self, launcher: u8) -> Self {
		self.launchers.push(launcher);
		self
	}

	/// Adds a global effect.
	pub fn effect(mut self, effect: Effect) -> Self {
		self.effects.push(effect);
		self
	}

	/// Encodes the record.
	pub fn build(&self) -> Vec<u8> {
		let (tag, header) = match self.version {
			ItemVersion::V1 => (b"V1  ", 0x72),
			ItemVersion::V11 => (b"V1.1", 0x9A),
			ItemVersion::V20 => (b"V2.0", 0x82),
		};
		let abilities_offset = header;
		let effects_offset = abilities_offset + self.launchers.len() * ITEM_ABILITY_SIZE;
		let mut data = vec![0u8; effects_offset + self.effects.len() * EFFECT_V1_SIZE];

		data[0..4].copy_from_slice(b"ITM ");
		data[4..8].copy_from_slice(tag);
		put_u32(&mut data, 0x18, self.flags);
		put_u16(&mut data, 0x1C, self.category);
		data[0x22..0x24].copy_from_slice(&self.appearance);
		put_u16(&mut data, 0x38, 1);
		put_u32(&mut data, 0x64, as_u32(abilities_offset));
		put_u16(&mut data, 0x68, as_u16(self.launchers.len()));
		put_u32(&mut data, 0x6A, as_u32(effects_offset));
		put_u16(&mut data, 0x6E, 0);
		put_u16(&mut data, 0x70, as_u16(self.effects.len()));

		for (i, &launcher) in self.launchers.iter().enumerate() {
			let base = abilities_offset + i * ITEM_ABILITY_SIZE;
			data[base] = 1;
			data[base + 0x10] = launcher;
			// Attack animation probabilities
			put_u16(&mut data, base + 0x2C, 34);
			put_u16(&mut data, base + 0x2E, 33);
			put_u16(&mut data, base + 0x30, 33);
		}
		for (i, effect) in self.effects.iter().enumerate() {
			let base = effects_offset + i * EFFECT_V1_SIZE;
			data[base..base + EFFECT_V1_SIZE].copy_from_slice(&effect_v1_bytes(effect));
		}
		data
	}
}

/// Builds a `SPL V1` record.
#[derive(Debug, Clone, Default)]
pub struct SpellBuilder {
	global: Vec<Effect>,
	abilities: Vec<Vec<Effect>>,
}

impl SpellBuilder {
	/// Starts an empty spell.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a global (casting) effect.
	pub fn global(mut self, effect: Effect) -> Self {
		self.global.push(effect);
		self
	}

	/// Adds an ability with its effects.
	pub fn ability(mut self, effects: Vec<Effect>) -> Self {
		self.abilities.push(effects);
		self
	}

	/// Encodes the record.
	pub fn build(&self) -> Vec<u8> {
		let header = 0x72;
		let effects_offset = header + self.abilities.len() * SPELL_ABILITY_SIZE;
		let effect_count = self.global.len() + self.abilities.iter().map(Vec::len).sum::<usize>();
		let mut data = vec![0u8; effects_offset + effect_count * EFFECT_V1_SIZE];

		data[0..8].copy_from_slice(b"SPL V1  ");
		put_u32(&mut data, 0x64, as_u32(header));
		put_u16(&mut data, 0x68, as_u16(self.abilities.len()));
		put_u32(&mut data, 0x6A, as_u32(effects_offset));
		put_u16(&mut data, 0x6E, 0);
		put_u16(&mut data, 0x70, as_u16(self.global.len()));

		let mut index = 0;
		for effect in &self.global {
			let base = effects_offset + index * EFFECT_V1_SIZE;
			data[base..base + EFFECT_V1_SIZE].copy_from_slice(&effect_v1_bytes(effect));
			index += 1;
		}
		for (i, effects) in self.abilities.iter().enumerate() {
			let ability = header + i * SPELL_ABILITY_SIZE;
			put_u16(&mut data, ability + 0x1E, as_u16(effects.len()));
			put_u16(&mut data, ability + 0x20, as_u16(index));
			for effect in effects {
				let base = effects_offset + index * EFFECT_V1_SIZE;
				data[base..base + EFFECT_V1_SIZE].copy_from_slice(&effect_v1_bytes(effect));
				index += 1;
			}
		}
		data
	}
}

/// Builds a creature record.
#[derive(Debug, Clone)]
pub struct CreatureBuilder {
	version: CreatureVersion,
	flags: u32,
	state_flags: u32,
	max_hit_points: u16,
	animation_id: u16,
	colors: [u8; 7],
	levels: Vec<u8>,
	attributes: [u8; 7],
	kit: u32,
	ids: [u8; 6],
	alignment: u8,
	script_name: String,
	items: Vec<(usize, ResRef)>,
	selected_weapon: i16,
	v2_effects: bool,
	effects: Vec<Effect>,
}

impl CreatureBuilder {
	/// Starts a record of the given version.
	pub fn new(version: CreatureVersion) -> Self {
		Self {
			version,
			flags: 0,
			state_flags: 0,
			max_hit_points: 10,
			animation_id: 0x6000,
			colors: [0; 7],
			levels: vec![1],
			attributes: [10; 7],
			kit: 0,
			ids: [0; 6],
			alignment: 0,
			script_name: String::new(),
			items: Vec::new(),
			selected_weapon: 0,
			v2_effects: version == CreatureVersion::V22,
			effects: Vec::new(),
		}
	}

	/// Sets the creature flags.
	pub fn flags(mut self, flags: u32) -> Self {
		self.flags = flags;
		self
	}

	/// Sets the state flags.
	pub fn state_flags(mut self, state_flags: u32) -> Self {
		self.state_flags = state_flags;
		self
	}

	/// Sets maximum hit points.
	pub fn max_hit_points(mut self, hp: u16) -> Self {
		self.max_hit_points = hp;
		self
	}

	/// Sets the animation id.
	pub fn animation_id(mut self, id: u16) -> Self {
		self.animation_id = id;
		self
	}

	/// Sets the seven color gradients.
	pub fn colors(mut self, colors: [u8; 7]) -> Self {
		self.colors = colors;
		self
	}

	/// Sets class levels in record order.
	pub fn levels(mut self, levels: &[u8]) -> Self {
		self.levels = levels.to_vec();
		self
	}

	/// Sets the ability scores (STR, STR extra, INT, WIS, DEX, CON, CHR).
	pub fn attributes(mut self, attributes: [u8; 7]) -> Self {
		self.attributes = attributes;
		self
	}

	/// Sets the kit.
	pub fn kit(mut self, kit: u32) -> Self {
		self.kit = kit;
		self
	}

	/// Sets EA, general, race, class, specifics and gender.
	pub fn ids(mut self, ids: [u8; 6]) -> Self {
		self.ids = ids;
		self
	}

	/// Sets the class id only.
	pub fn class(mut self, class: u8) -> Self {
		self.ids[3] = class;
		self
	}

	/// Sets the alignment.
	pub fn alignment(mut self, alignment: u8) -> Self {
		self.alignment = alignment;
		self
	}

	/// Sets the script name.
	pub fn script_name(mut self, name: &str) -> Self {
		self.script_name = name.to_string();
		self
	}

	/// Places an item in a slot table index.
	///
	/// # Panics
	///
	/// Panics if `name` is not a valid resource name.
	pub fn item(mut self, slot: usize, name: &str) -> Self {
		let name = ResRef::new(name).unwrap_or_else(|e| panic!("{e}"));
		self.items.push((slot, name));
		self
	}

	/// Sets the selected weapon value.
	pub fn selected_weapon(mut self, value: i16) -> Self {
		self.selected_weapon = value;
		self
	}

	/// Stores embedded effects in the V2 layout (V1.0 and V9.0 only).
	pub fn v2_effects(mut self, enabled: bool) -> Self {
		self.v2_effects = enabled;
		self
	}

	/// Adds an embedded effect.
	pub fn effect(mut self, effect: Effect) -> Self {
		self.effects.push(effect);
		self
	}

	/// Encodes the record.
	pub fn build(&self) -> Vec<u8> {
		let layout = HeaderLayout::for_version(self.version);
		let v2 = match self.version {
			CreatureVersion::V22 => true,
			CreatureVersion::V12 => false,
			CreatureVersion::V10 | CreatureVersion::V90 => self.v2_effects,
		};
		let effect_size = if v2 { EFFECT_V2_BODY_SIZE } else { EFFECT_V1_SIZE };

		let items_offset = layout.size;
		let slots_offset = items_offset + self.items.len() * ITEM_ENTRY_SIZE;
		let effects_offset = slots_offset + layout.slot_count * 2 + 4;
		let mut data = vec![0u8; effects_offset + self.effects.len() * effect_size];

		data[0..4].copy_from_slice(b"CRE ");
		data[4..8].copy_from_slice(self.version.tag());
		put_u32(&mut data, 0x10, self.flags);
		put_u32(&mut data, 0x20, self.state_flags);
		put_u16(&mut data, 0x26, self.max_hit_points);
		put_u16(&mut data, 0x28, self.animation_id);
		data[0x2C..0x33].copy_from_slice(&self.colors);
		if matches!(self.version, CreatureVersion::V10 | CreatureVersion::V90) {
			data[0x33] = u8::from(v2);
		}

		for (&offset, &level) in layout.levels.iter().zip(&self.levels) {
			data[offset] = level;
		}
		for (offset, &value) in layout.attributes.iter().zip(&self.attributes) {
			if let Some(offset) = *offset {
				data[offset] = value;
			}
		}
		if let Some(offset) = layout.kit {
			put_u32(&mut data, offset, self.kit);
		}
		data[layout.ids..layout.ids + 6].copy_from_slice(&self.ids);
		data[layout.alignment] = self.alignment;
		for (i, byte) in self.script_name.bytes().take(31).enumerate() {
			data[layout.script_name + i] = byte;
		}

		put_u32(&mut data, layout.tables, as_u32(slots_offset));
		put_u32(&mut data, layout.tables + 4, as_u32(items_offset));
		put_u32(&mut data, layout.tables + 8, as_u32(self.items.len()));
		put_u32(&mut data, layout.tables + 12, as_u32(effects_offset));
		put_u32(&mut data, layout.tables + 16, as_u32(self.effects.len()));

		let mut slots = vec![EMPTY_SLOT; layout.slot_count];
		for (i, (slot, name)) in self.items.iter().enumerate() {
			put_resref(&mut data, items_offset + i * ITEM_ENTRY_SIZE, name);
			if let Some(entry) = slots.get_mut(*slot) {
				*entry = as_u16(i);
			}
		}
		for (i, value) in slots.iter().enumerate() {
			put_u16(&mut data, slots_offset + i * 2, *value);
		}
		let selected = slots_offset + layout.slot_count * 2;
		data[selected..selected + 2].copy_from_slice(&self.selected_weapon.to_le_bytes());

		for (i, effect) in self.effects.iter().enumerate() {
			let base = effects_offset + i * effect_size;
			let encoded = if v2 { effect_v2_body(effect) } else { effect_v1_bytes(effect) };
			data[base..base + effect_size].copy_from_slice(&encoded);
		}
		data
	}
}
