use std::fmt;

use cresprite_vfs::ResRef;

use crate::layer::SpriteLayer;

/// Frame counter value of a stopped segment
pub const STOPPED: i32 = -1;

/// How a segment's frame counter moves on each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Behavior {
	/// Loop, wrapping at the cycle's longest segment
	#[default]
	Repeat,
	/// Play once, then stop
	Single,
	/// Play once, then hold the last frame
	Freeze,
	/// Play until the cycle's shortest segment ends, then stop
	Cut,
	/// [`Behavior::Repeat`] counting down
	ReverseRepeat,
	/// [`Behavior::Single`] counting down
	ReverseSingle,
	/// [`Behavior::Freeze`] counting down
	ReverseFreeze,
	/// [`Behavior::Cut`] counting down
	ReverseCut,
}

impl Behavior {
	/// Every behavior.
	pub const ALL: [Self; 8] = [
		Self::Repeat,
		Self::Single,
		Self::Freeze,
		Self::Cut,
		Self::ReverseRepeat,
		Self::ReverseSingle,
		Self::ReverseFreeze,
		Self::ReverseCut,
	];

	/// Returns `true` for behaviors counting down from the last frame.
	pub const fn is_reverse(self) -> bool {
		matches!(self, Self::ReverseRepeat | Self::ReverseSingle | Self::ReverseFreeze | Self::ReverseCut)
	}

	/// Returns the behavior playing in the opposite direction.
	pub const fn reversed(self) -> Self {
		match self {
			Self::Repeat => Self::ReverseRepeat,
			Self::Single => Self::ReverseSingle,
			Self::Freeze => Self::ReverseFreeze,
			Self::Cut => Self::ReverseCut,
			Self::ReverseRepeat => Self::Repeat,
			Self::ReverseSingle => Self::Single,
			Self::ReverseFreeze => Self::Freeze,
			Self::ReverseCut => Self::Cut,
		}
	}
}

impl fmt::Display for Behavior {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::Repeat => "repeat",
			Self::Single => "single",
			Self::Freeze => "freeze",
			Self::Cut => "cut",
			Self::ReverseRepeat => "reverse-repeat",
			Self::ReverseSingle => "reverse-single",
			Self::ReverseFreeze => "reverse-freeze",
			Self::ReverseCut => "reverse-cut",
		};
		f.write_str(name)
	}
}

/// One playback unit: a cycle of one resource drawn on one layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentDef {
	resource: ResRef,
	cycle: usize,
	layer: SpriteLayer,
	behavior: Behavior,
	num_frames: i32,
	current: i32,
}

impl SegmentDef {
	/// Creates a segment positioned at its first frame.
	pub fn new(resource: ResRef, cycle: usize, layer: SpriteLayer, behavior: Behavior, num_frames: usize) -> Self {
		let mut segment = Self {
			resource,
			cycle,
			layer,
			behavior,
			num_frames: i32::try_from(num_frames).unwrap_or(i32::MAX),
			current: STOPPED,
		};
		segment.reset();
		segment
	}

	/// Returns the resource the cycle belongs to.
	pub fn resource(&self) -> &ResRef {
		&self.resource
	}

	/// Returns the cycle index.
	pub fn cycle(&self) -> usize {
		self.cycle
	}

	/// Returns the sprite layer.
	pub fn layer(&self) -> SpriteLayer {
		self.layer
	}

	/// Returns the playback behavior.
	pub fn behavior(&self) -> Behavior {
		self.behavior
	}

	/// Returns the cycle's frame count.
	pub fn num_frames(&self) -> usize {
		usize::try_from(self.num_frames).unwrap_or(0)
	}

	/// Returns the raw frame counter; [`STOPPED`] once playback ended.
	///
	/// The counter of a repeating segment runs up to the cycle's longest
	/// segment and may exceed this segment's own frame count.
	pub fn current_frame(&self) -> i32 {
		self.current
	}

	/// Returns the frame to draw, or `None` if the segment is stopped or its
	/// counter lies past its own frames.
	pub fn visible_frame(&self) -> Option<usize> {
		usize::try_from(self.current).ok().filter(|&frame| frame < self.num_frames())
	}

	/// Returns `true` once playback stopped.
	pub fn is_stopped(&self) -> bool {
		self.current == STOPPED
	}

	/// Moves the counter back to the start of playback.
	pub fn reset(&mut self) {
		self.current = if self.num_frames == 0 {
			STOPPED
		} else if self.behavior.is_reverse() {
			self.num_frames - 1
		} else {
			0
		};
	}

	/// Advances the counter by one tick.
	///
	/// `min_frames` and `max_frames` are the shortest and longest frame counts
	/// of the owning cycle.
	pub fn advance(&mut self, min_frames: i32, max_frames: i32) {
		if self.num_frames == 0 || self.current == STOPPED {
			return;
		}
		let len = self.num_frames;
		let cur = self.current;
		self.current = match self.behavior {
			Behavior::Repeat => {
				if cur + 1 >= max_frames.max(1) { 0 } else { cur + 1 }
			}
			Behavior::Single => {
				if cur + 1 >= len { STOPPED } else { cur + 1 }
			}
			Behavior::Freeze => (cur + 1).min(len - 1),
			Behavior::Cut => {
				if cur + 1 >= min_frames.min(len) { STOPPED } else { cur + 1 }
			}
			Behavior::ReverseRepeat => {
				if cur <= 0 { len.min(max_frames.max(1)) - 1 } else { cur - 1 }
			}
			Behavior::ReverseSingle => {
				if cur <= 0 { STOPPED } else { cur - 1 }
			}
			Behavior::ReverseFreeze => (cur - 1).max(0),
			Behavior::ReverseCut => {
				let played = len - cur;
				if played >= min_frames.min(len) { STOPPED } else { cur - 1 }
			}
		};
	}
}

/// The segments drawn together for one direction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CycleDef {
	segments: Vec<SegmentDef>,
	frame_limit: Option<usize>,
}

impl CycleDef {
	/// Creates a cycle from its segments.
	pub fn new(segments: Vec<SegmentDef>) -> Self {
		Self {
			segments,
			frame_limit: None,
		}
	}

	/// Caps the cycle length, so repeating segments wrap early.
	pub fn with_frame_limit(mut self, limit: usize) -> Self {
		self.frame_limit = Some(limit);
		self
	}

	/// Appends a segment.
	pub fn add_segment(&mut self, segment: SegmentDef) {
		self.segments.push(segment);
	}

	/// Returns the segments in drawing order.
	pub fn segments(&self) -> &[SegmentDef] {
		&self.segments
	}

	/// Returns the segment drawn on a layer.
	pub fn segment(&self, layer: SpriteLayer) -> Option<&SegmentDef> {
		self.segments.iter().find(|segment| segment.layer == layer)
	}

	/// Returns `true` if the cycle has no segments.
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// Returns the shortest non-empty segment's frame count.
	pub fn min_frames(&self) -> usize {
		self.limited(self.lengths().min().unwrap_or(0))
	}

	/// Returns the longest segment's frame count.
	pub fn max_frames(&self) -> usize {
		self.limited(self.lengths().max().unwrap_or(0))
	}

	/// Returns `true` once every segment stopped.
	pub fn is_finished(&self) -> bool {
		self.segments.iter().all(SegmentDef::is_stopped)
	}

	/// Advances every segment by one tick.
	pub fn advance(&mut self) {
		let min = i32::try_from(self.min_frames()).unwrap_or(i32::MAX);
		let max = i32::try_from(self.max_frames()).unwrap_or(i32::MAX);
		for segment in &mut self.segments {
			segment.advance(min, max);
		}
	}

	/// Resets every segment.
	pub fn reset(&mut self) {
		for segment in &mut self.segments {
			segment.reset();
		}
	}

	fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
		self.segments.iter().map(SegmentDef::num_frames).filter(|&len| len > 0)
	}

	fn limited(&self, len: usize) -> usize {
		self.frame_limit.map_or(len, |limit| len.min(limit))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn segment(behavior: Behavior, frames: usize) -> SegmentDef {
		SegmentDef::new(ResRef::new("MHUMG1").unwrap(), 0, SpriteLayer::Avatar, behavior, frames)
	}

	fn frames(cycle: &CycleDef) -> Vec<i32> {
		cycle.segments().iter().map(SegmentDef::current_frame).collect()
	}

	#[test]
	fn test_repeat_wraps_at_cycle_maximum() {
		let mut cycle = CycleDef::new(vec![segment(Behavior::Repeat, 4), segment(Behavior::Repeat, 6)]);
		for _ in 0..4 {
			cycle.advance();
		}
		// The short segment keeps counting with the long one.
		assert_eq!(frames(&cycle), vec![4, 4]);
		assert_eq!(cycle.segments()[0].visible_frame(), None);
		assert_eq!(cycle.segments()[1].visible_frame(), Some(4));

		for _ in 0..6 {
			cycle.advance();
		}
		assert_eq!(frames(&cycle), vec![4, 4]);

		cycle.advance();
		cycle.advance();
		assert_eq!(frames(&cycle), vec![0, 0]);
		assert_eq!(cycle.segments()[0].visible_frame(), Some(0));
	}

	#[test]
	fn test_repeat_wraps_at_frame_limit() {
		let mut cycle = CycleDef::new(vec![segment(Behavior::Repeat, 8)]).with_frame_limit(5);
		for _ in 0..5 {
			cycle.advance();
		}
		assert_eq!(frames(&cycle), vec![0]);
	}

	#[test]
	fn test_single_stops() {
		let mut cycle = CycleDef::new(vec![segment(Behavior::Single, 3)]);
		cycle.advance();
		cycle.advance();
		assert_eq!(frames(&cycle), vec![2]);
		cycle.advance();
		assert!(cycle.is_finished());
		cycle.advance();
		assert_eq!(frames(&cycle), vec![STOPPED]);

		cycle.reset();
		assert_eq!(frames(&cycle), vec![0]);
	}

	#[test]
	fn test_freeze_holds_last_frame() {
		let mut cycle = CycleDef::new(vec![segment(Behavior::Freeze, 3), segment(Behavior::ReverseFreeze, 3)]);
		for _ in 0..5 {
			cycle.advance();
		}
		assert_eq!(frames(&cycle), vec![2, 0]);
	}

	#[test]
	fn test_cut_stops_at_shortest_segment() {
		let mut cycle = CycleDef::new(vec![segment(Behavior::Cut, 6), segment(Behavior::Repeat, 2)]);
		assert_eq!(cycle.min_frames(), 2);
		cycle.advance();
		assert_eq!(frames(&cycle), vec![1, 1]);
		cycle.advance();
		assert_eq!(frames(&cycle), vec![STOPPED, 2]);
	}

	#[test]
	fn test_cut_without_frames_stays_stopped() {
		let mut cycle = CycleDef::new(vec![segment(Behavior::Cut, 0)]);
		assert_eq!(frames(&cycle), vec![STOPPED]);
		for _ in 0..10 {
			cycle.advance();
			assert_eq!(frames(&cycle), vec![STOPPED]);
		}
		cycle.reset();
		assert_eq!(frames(&cycle), vec![STOPPED]);
	}

	#[test]
	fn test_reverse_behaviors_count_down() {
		let mut cycle = CycleDef::new(vec![
			segment(Behavior::ReverseRepeat, 3),
			segment(Behavior::ReverseSingle, 3),
			segment(Behavior::ReverseCut, 3),
		]);
		assert_eq!(frames(&cycle), vec![2, 2, 2]);
		cycle.advance();
		cycle.advance();
		assert_eq!(frames(&cycle), vec![0, 0, 0]);
		cycle.advance();
		assert_eq!(frames(&cycle), vec![2, STOPPED, STOPPED]);
	}

	#[test]
	fn test_reverse_cut_stops_after_shortest_segment() {
		let mut cycle = CycleDef::new(vec![segment(Behavior::ReverseCut, 5), segment(Behavior::Freeze, 2)]);
		cycle.advance();
		assert_eq!(frames(&cycle), vec![3, 1]);
		cycle.advance();
		assert_eq!(frames(&cycle), vec![STOPPED, 1]);
	}

	#[test]
	fn test_behavior_reversal() {
		for behavior in Behavior::ALL {
			assert_ne!(behavior.is_reverse(), behavior.reversed().is_reverse());
			assert_eq!(behavior.reversed().reversed(), behavior);
		}
	}
}
