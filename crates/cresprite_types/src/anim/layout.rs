//! Where each sequence's cycles live in an animation's resources.

use crate::seq::{Direction, Sequence};

/// Directions stored in the resources of an animation type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoredDirections {
	/// A single cycle used for every direction
	One,
	/// South, southwest, west, northwest and north
	Five,
	/// South through north in sixteenth steps
	Nine,
}

impl StoredDirections {
	/// Returns the number of stored cycles per sequence.
	pub const fn count(self) -> usize {
		match self {
			Self::One => 1,
			Self::Five => 5,
			Self::Nine => 9,
		}
	}

	/// Returns the stored cycle offset of a direction and whether it must be
	/// mirrored.
	///
	/// Eastern directions reuse their western counterpart flipped. Five-way
	/// data rounds odd directions down to the previous stored one.
	pub const fn locate(self, direction: Direction) -> (usize, bool) {
		let mirrored = direction.is_eastern();
		let source = direction.mirror_source().index();
		match self {
			Self::One => (0, false),
			Self::Five => (source / 2, mirrored),
			Self::Nine => (source, mirrored),
		}
	}
}

/// Resource suffix and first cycle of one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceEntry {
	/// Sequence
	pub sequence: Sequence,
	/// Appended to the animation prefix to name the resource
	pub suffix: &'static str,
	/// Cycle of the first stored direction
	pub base_cycle: usize,
}

const fn entry(sequence: Sequence, suffix: &'static str, base_cycle: usize) -> SequenceEntry {
	SequenceEntry {
		sequence,
		suffix,
		base_cycle,
	}
}

/// Cycle layout of an animation type's resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceLayout {
	/// Stored directions per sequence
	pub directions: StoredDirections,
	/// Available sequences
	pub entries: &'static [SequenceEntry],
}

impl SequenceLayout {
	/// Returns the entry of a sequence, if the animation has it.
	pub fn entry(&self, sequence: Sequence) -> Option<&SequenceEntry> {
		self.entries.iter().find(|entry| entry.sequence == sequence)
	}
}

/// Static scenery: one cycle
pub const STATIC: SequenceLayout = SequenceLayout {
	directions: StoredDirections::One,
	entries: &[entry(Sequence::Stand, "", 0)],
};

/// Paperdoll characters: movement in `G1`, one resource per attack
pub const CHARACTER: SequenceLayout = SequenceLayout {
	directions: StoredDirections::Nine,
	entries: &[
		entry(Sequence::Walk, "G1", 0),
		entry(Sequence::Stand, "G1", 9),
		entry(Sequence::Ready, "G1", 18),
		entry(Sequence::Damage, "G1", 27),
		entry(Sequence::Die, "G1", 36),
		entry(Sequence::Twitch, "G1", 45),
		entry(Sequence::Sleep, "G1", 54),
		entry(Sequence::GetUp, "G1", 54),
		entry(Sequence::AttackSlash, "A1", 0),
		entry(Sequence::AttackBackslash, "A2", 0),
		entry(Sequence::AttackJab, "A3", 0),
		entry(Sequence::Shoot, "SA", 0),
		entry(Sequence::Conjure, "CA", 0),
		entry(Sequence::Cast, "CA", 9),
	],
};

/// Monsters split over `G1` (movement), `G2` (attacks) and `G3` (damage)
pub const MONSTER: SequenceLayout = SequenceLayout {
	directions: StoredDirections::Nine,
	entries: &[
		entry(Sequence::Walk, "G1", 0),
		entry(Sequence::Stand, "G1", 9),
		entry(Sequence::Ready, "G1", 18),
		entry(Sequence::AttackSlash, "G2", 0),
		entry(Sequence::AttackBackslash, "G2", 9),
		entry(Sequence::AttackJab, "G2", 18),
		entry(Sequence::Shoot, "G2", 27),
		entry(Sequence::Cast, "G2", 36),
		entry(Sequence::Damage, "G3", 0),
		entry(Sequence::Die, "G3", 9),
		entry(Sequence::Twitch, "G3", 18),
		entry(Sequence::Sleep, "G3", 9),
		entry(Sequence::GetUp, "G3", 9),
	],
};

/// Older monsters storing five directions in one resource
pub const MONSTER_OLD: SequenceLayout = SequenceLayout {
	directions: StoredDirections::Five,
	entries: &[
		entry(Sequence::Walk, "", 0),
		entry(Sequence::Stand, "", 5),
		entry(Sequence::Ready, "", 10),
		entry(Sequence::AttackSlash, "", 15),
		entry(Sequence::Damage, "", 20),
		entry(Sequence::Die, "", 25),
		entry(Sequence::Sleep, "", 25),
		entry(Sequence::GetUp, "", 25),
		entry(Sequence::Twitch, "", 30),
	],
};

/// Ambient creatures and flyers
pub const AMBIENT: SequenceLayout = SequenceLayout {
	directions: StoredDirections::Nine,
	entries: &[
		entry(Sequence::Stand, "", 0),
		entry(Sequence::Walk, "", 9),
		entry(Sequence::Die, "", 18),
		entry(Sequence::Twitch, "", 27),
	],
};

/// Ankhegs, which burrow instead of walking
pub const ANKHEG: SequenceLayout = SequenceLayout {
	directions: StoredDirections::Nine,
	entries: &[
		entry(Sequence::Emerge, "G1", 0),
		entry(Sequence::Hide, "G1", 9),
		entry(Sequence::Stand, "G2", 0),
		entry(Sequence::AttackSlash, "G2", 9),
		entry(Sequence::Shoot, "G2", 18),
		entry(Sequence::Damage, "G3", 0),
		entry(Sequence::Die, "G3", 9),
		entry(Sequence::Twitch, "G3", 18),
	],
};

/// Icewind Dale monsters: one resource per sequence
pub const ICEWIND: SequenceLayout = SequenceLayout {
	directions: StoredDirections::Nine,
	entries: &[
		entry(Sequence::AttackSlash, "A1", 0),
		entry(Sequence::AttackBackslash, "A2", 0),
		entry(Sequence::AttackJab, "A3", 0),
		entry(Sequence::Die, "DE", 0),
		entry(Sequence::Damage, "GH", 0),
		entry(Sequence::GetUp, "GU", 0),
		entry(Sequence::Ready, "SC", 0),
		entry(Sequence::Stand, "SD", 0),
		entry(Sequence::Sleep, "SL", 0),
		entry(Sequence::Conjure, "SP", 0),
		entry(Sequence::Cast, "CA", 0),
		entry(Sequence::Twitch, "TW", 0),
		entry(Sequence::Walk, "WK", 0),
	],
};

/// Planescape: Torment creatures: one resource per sequence, five directions
pub const PLANESCAPE: SequenceLayout = SequenceLayout {
	directions: StoredDirections::Five,
	entries: &[
		entry(Sequence::AttackSlash, "AT1", 0),
		entry(Sequence::AttackBackslash, "AT2", 0),
		entry(Sequence::Damage, "HIT", 0),
		entry(Sequence::Die, "DFB", 0),
		entry(Sequence::GetUp, "GUP", 0),
		entry(Sequence::Stand, "STD", 0),
		entry(Sequence::Ready, "STC", 0),
		entry(Sequence::Walk, "WLK", 0),
		entry(Sequence::Cast, "SP1", 0),
		entry(Sequence::Conjure, "SP2", 0),
		entry(Sequence::Twitch, "TWT", 0),
	],
};

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_locate_directions() {
		assert_eq!(StoredDirections::Nine.locate(Direction::S), (0, false));
		assert_eq!(StoredDirections::Nine.locate(Direction::N), (8, false));
		assert_eq!(StoredDirections::Nine.locate(Direction::NNE), (7, true));
		assert_eq!(StoredDirections::Nine.locate(Direction::SSE), (1, true));
		assert_eq!(StoredDirections::Five.locate(Direction::W), (2, false));
		assert_eq!(StoredDirections::Five.locate(Direction::WSW), (1, false));
		assert_eq!(StoredDirections::Five.locate(Direction::E), (2, true));
		assert_eq!(StoredDirections::One.locate(Direction::E), (0, false));
	}

	#[test]
	fn test_locate_stays_in_stored_range() {
		for stored in [StoredDirections::One, StoredDirections::Five, StoredDirections::Nine] {
			for direction in Direction::ALL {
				assert!(stored.locate(direction).0 < stored.count());
			}
		}
	}

	#[test]
	fn test_layouts_have_unique_sequences() {
		for layout in [STATIC, CHARACTER, MONSTER, MONSTER_OLD, AMBIENT, ANKHEG, ICEWIND, PLANESCAPE] {
			for (i, a) in layout.entries.iter().enumerate() {
				assert!(layout.entries[i + 1..].iter().all(|b| b.sequence != a.sequence), "{:?} repeats", a.sequence);
			}
		}
	}
}
