/// A set of animation ids.
///
/// Besides plain inclusive ranges, a range can describe gap-structured blocks:
/// `base + (sub << shift) + low` for every `sub` in
/// `sub_base..sub_base + sub_count` and `low` in `0..len`.
///
/// # Examples
///
/// ```
/// use cresprite_types::anim::AnimRange;
///
/// // 0x6000..=0x600F, 0x6100..=0x610F, 0x6200..=0x620F
/// let range = AnimRange::generated(0x6000, 0, 3, 8, 0x10);
/// assert!(range.contains(0x6105));
/// assert!(!range.contains(0x6015));
/// assert!(!range.contains(0x6300));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimRange {
	base: u32,
	sub_base: u32,
	sub_count: u32,
	shift: u32,
	len: u32,
}

impl AnimRange {
	/// Creates the inclusive range `start..=end`.
	pub const fn simple(start: u16, end: u16) -> Self {
		let len = if end >= start { end as u32 - start as u32 + 1 } else { 0 };
		Self {
			base: start as u32,
			sub_base: 0,
			sub_count: 1,
			shift: 16,
			len,
		}
	}

	/// Creates a gap-structured range.
	pub const fn generated(base: u16, sub_base: u16, sub_count: u16, shift: u8, len: u16) -> Self {
		Self {
			base: base as u32,
			sub_base: sub_base as u32,
			sub_count: sub_count as u32,
			shift: shift as u32,
			len: len as u32,
		}
	}

	/// Returns `true` if the id lies in the range.
	pub const fn contains(&self, id: u16) -> bool {
		let id = id as u32;
		if id < self.base {
			return false;
		}
		let offset = id - self.base;
		let (sub, low) = if self.shift >= 16 {
			(0, offset)
		} else {
			(offset >> self.shift, offset & ((1 << self.shift) - 1))
		};
		sub >= self.sub_base && sub < self.sub_base + self.sub_count && low < self.len
	}

	/// Iterates over every id in the range.
	pub fn ids(&self) -> impl Iterator<Item = u16> + '_ {
		(0..=u16::MAX).filter(|&id| self.contains(id))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_simple_range() {
		let range = AnimRange::simple(0x7000, 0x7FFF);
		assert!(range.contains(0x7000));
		assert!(range.contains(0x7FFF));
		assert!(!range.contains(0x6FFF));
		assert!(!range.contains(0x8000));
		assert_eq!(range.ids().count(), 0x1000);

		let full = AnimRange::simple(0, u16::MAX);
		assert!(full.contains(0) && full.contains(u16::MAX));
	}

	#[test]
	fn test_generated_range_skips_gaps() {
		let range = AnimRange::generated(0x6020, 0, 4, 8, 0x20);
		assert!(range.contains(0x6020));
		assert!(range.contains(0x633F));
		assert!(!range.contains(0x6100));
		assert!(!range.contains(0x6040));
		assert!(!range.contains(0x6420));
		assert_eq!(range.ids().count(), 4 * 0x20);
	}

	#[test]
	fn test_sub_base_offsets_blocks() {
		let range = AnimRange::generated(0x5000, 2, 2, 8, 0x10);
		assert!(!range.contains(0x5000));
		assert!(range.contains(0x5200));
		assert!(range.contains(0x530F));
		assert!(!range.contains(0x5400));
	}
}
