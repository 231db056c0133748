use std::fmt;

use super::CycleDef;

/// One of the sixteen compass directions, counted clockwise from south.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Direction {
	/// South
	S = 0,
	/// South-southwest
	SSW,
	/// Southwest
	SW,
	/// West-southwest
	WSW,
	/// West
	W,
	/// West-northwest
	WNW,
	/// Northwest
	NW,
	/// North-northwest
	NNW,
	/// North
	N,
	/// North-northeast
	NNE,
	/// Northeast
	NE,
	/// East-northeast
	ENE,
	/// East
	E,
	/// East-southeast
	ESE,
	/// Southeast
	SE,
	/// South-southeast
	SSE,
}

impl Direction {
	/// Every direction in index order.
	pub const ALL: [Self; 16] = [
		Self::S,
		Self::SSW,
		Self::SW,
		Self::WSW,
		Self::W,
		Self::WNW,
		Self::NW,
		Self::NNW,
		Self::N,
		Self::NNE,
		Self::NE,
		Self::ENE,
		Self::E,
		Self::ESE,
		Self::SE,
		Self::SSE,
	];

	/// The eight directions most animations are drawn in.
	pub const CARDINAL_AND_DIAGONAL: [Self; 8] = [Self::S, Self::SW, Self::W, Self::NW, Self::N, Self::NE, Self::E, Self::SE];

	/// Returns the direction with the given index, modulo 16.
	pub const fn from_index(index: usize) -> Self {
		Self::ALL[index % 16]
	}

	/// Returns the direction index, 0 (south) to 15.
	pub const fn index(self) -> usize {
		self as usize
	}

	/// Returns `true` for directions east of the north-south axis, which are
	/// drawn by mirroring their western counterpart.
	pub const fn is_eastern(self) -> bool {
		self.index() > Self::N.index()
	}

	/// Returns the western direction this one mirrors.
	///
	/// Southern, western and northern directions map to themselves.
	pub const fn mirror_source(self) -> Self {
		if self.is_eastern() { Self::from_index(16 - self.index()) } else { self }
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

/// The cycle drawn for one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirDef {
	/// Direction
	pub direction: Direction,
	/// The cycle is flipped horizontally to fake a missing direction
	pub mirrored: bool,
	/// Segments drawn in this direction
	pub cycle: CycleDef,
}

impl DirDef {
	/// Creates a direction definition.
	pub fn new(direction: Direction, mirrored: bool, cycle: CycleDef) -> Self {
		Self {
			direction,
			mirrored,
			cycle,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_mirror_sources() {
		assert_eq!(Direction::E.mirror_source(), Direction::W);
		assert_eq!(Direction::NE.mirror_source(), Direction::NW);
		assert_eq!(Direction::SSE.mirror_source(), Direction::SSW);
		assert_eq!(Direction::N.mirror_source(), Direction::N);
		assert_eq!(Direction::S.mirror_source(), Direction::S);
		assert!(Direction::ALL.iter().all(|d| !d.mirror_source().is_eastern()));
	}

	#[test]
	fn test_from_index_wraps() {
		assert_eq!(Direction::from_index(4), Direction::W);
		assert_eq!(Direction::from_index(20), Direction::W);
		assert_eq!(Direction::SE.index(), 14);
	}
}
