use std::{fmt, str::FromStr};

use cresprite_vfs::ResRef;

use super::{Behavior, CycleDef, CycleInfo, DirDef, Direction, SegmentDef};
use crate::layer::SpriteLayer;

/// Maximum number of directions in a sequence
pub const MAX_DIRECTIONS: usize = 16;

/// Named animation sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sequence {
	/// Idle
	Stand,
	/// Combat-ready idle
	Ready,
	/// Walking
	Walk,
	/// Overhead swing
	AttackSlash,
	/// Backhand swing
	AttackBackslash,
	/// Thrust
	AttackJab,
	/// Ranged attack
	Shoot,
	/// Spell release
	Cast,
	/// Spell preparation
	Conjure,
	/// Taking a hit
	Damage,
	/// Dying
	Die,
	/// Twitching on the ground
	Twitch,
	/// Falling asleep
	Sleep,
	/// Getting up
	GetUp,
	/// Emerging from hiding
	Emerge,
	/// Hiding
	Hide,
}

impl Sequence {
	/// Every sequence.
	pub const ALL: [Self; 16] = [
		Self::Stand,
		Self::Ready,
		Self::Walk,
		Self::AttackSlash,
		Self::AttackBackslash,
		Self::AttackJab,
		Self::Shoot,
		Self::Cast,
		Self::Conjure,
		Self::Damage,
		Self::Die,
		Self::Twitch,
		Self::Sleep,
		Self::GetUp,
		Self::Emerge,
		Self::Hide,
	];

	/// Returns the sequence name.
	pub const fn name(self) -> &'static str {
		match self {
			Self::Stand => "stand",
			Self::Ready => "ready",
			Self::Walk => "walk",
			Self::AttackSlash => "attack-slash",
			Self::AttackBackslash => "attack-backslash",
			Self::AttackJab => "attack-jab",
			Self::Shoot => "shoot",
			Self::Cast => "cast",
			Self::Conjure => "conjure",
			Self::Damage => "damage",
			Self::Die => "die",
			Self::Twitch => "twitch",
			Self::Sleep => "sleep",
			Self::GetUp => "get-up",
			Self::Emerge => "emerge",
			Self::Hide => "hide",
		}
	}

	/// Returns the behavior segments play with unless a layer overrides it.
	pub const fn default_behavior(self) -> Behavior {
		match self {
			Self::Stand | Self::Ready | Self::Walk | Self::Conjure | Self::Twitch => Behavior::Repeat,
			Self::Die | Self::Sleep => Behavior::Freeze,
			Self::GetUp => Behavior::ReverseSingle,
			Self::AttackSlash
			| Self::AttackBackslash
			| Self::AttackJab
			| Self::Shoot
			| Self::Cast
			| Self::Damage
			| Self::Emerge
			| Self::Hide => Behavior::Single,
		}
	}
}

impl fmt::Display for Sequence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Sequence {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|sequence| sequence.name().eq_ignore_ascii_case(s))
			.ok_or_else(|| format!("unknown sequence: {s}"))
	}
}

/// A sequence ready for playback: one cycle per available direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqDef {
	sequence: Sequence,
	directions: Vec<DirDef>,
}

impl SeqDef {
	/// Creates a sequence without directions.
	pub fn new(sequence: Sequence) -> Self {
		Self {
			sequence,
			directions: Vec::new(),
		}
	}

	/// Builds a single-layer sequence from consecutive cycles.
	///
	/// Direction `i` of `directions` plays cycle `base_cycle + i`, or cycle
	/// `base_cycle + len - 1 - i` when the stored data is mirrored.
	#[allow(clippy::too_many_arguments)]
	pub fn from_consecutive(
		sequence: Sequence,
		resource: &ResRef,
		layer: SpriteLayer,
		behavior: Behavior,
		base_cycle: usize,
		directions: &[Direction],
		mirrored: bool,
		info: &dyn CycleInfo,
	) -> Self {
		let mut seq = Self::new(sequence);
		let count = directions.len();
		for (i, &direction) in directions.iter().enumerate() {
			let cycle = if mirrored { base_cycle + count - 1 - i } else { base_cycle + i };
			let frames = info.cycle_frame_count(resource, cycle);
			let segment = SegmentDef::new(resource.clone(), cycle, layer, behavior, frames);
			seq.add_direction(DirDef::new(direction, mirrored, CycleDef::new(vec![segment])));
		}
		seq
	}

	/// Returns the sequence.
	pub fn sequence(&self) -> Sequence {
		self.sequence
	}

	/// Adds a direction, replacing an earlier definition of the same
	/// direction.
	pub fn add_direction(&mut self, dir: DirDef) {
		match self.directions.iter_mut().find(|d| d.direction == dir.direction) {
			Some(existing) => *existing = dir,
			None => self.directions.push(dir),
		}
	}

	/// Returns the definition of a direction.
	pub fn direction(&self, direction: Direction) -> Option<&DirDef> {
		self.directions.iter().find(|d| d.direction == direction)
	}

	/// Returns the defined directions.
	pub fn directions(&self) -> &[DirDef] {
		&self.directions
	}

	/// Returns the number of defined directions.
	pub fn len(&self) -> usize {
		self.directions.len()
	}

	/// Returns `true` if no direction is defined.
	pub fn is_empty(&self) -> bool {
		self.directions.is_empty()
	}

	/// Advances every direction by one tick.
	pub fn advance(&mut self) {
		for dir in &mut self.directions {
			dir.cycle.advance();
		}
	}

	/// Resets every direction.
	pub fn reset(&mut self) {
		for dir in &mut self.directions {
			dir.cycle.reset();
		}
	}
}
