use super::{Color, Palette};
use crate::effect::opcode;

/// Blend formula of a tint opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TintOp {
	/// Additive glow: `s + d - s/4`
	Glow,
	/// Multiplicative tint: `d * s / 255`
	Solid,
	/// Brightening tint: `s + d * (s/8)`
	Bright,
}

impl TintOp {
	/// Maps a tint opcode to its formula.
	pub const fn from_opcode(op: u16) -> Option<Self> {
		match op {
			opcode::GLOW_SOLID | opcode::GLOW_PULSE | opcode::COLOR_PULSE => Some(Self::Glow),
			opcode::TINT_SOLID => Some(Self::Solid),
			opcode::TINT_BRIGHT => Some(Self::Bright),
			_ => None,
		}
	}

	fn blend(self, s: u8, d: u8) -> u8 {
		let (s, d) = (u32::from(s), u32::from(d));
		let value = match self {
			Self::Glow => s + d - s / 4,
			Self::Solid => d * s / 255,
			Self::Bright => s + d * (s / 8),
		};
		value.min(255) as u8
	}
}

/// Returns a copy of `palette` with `op` applied to `len` entries starting at
/// `start`, using `color` as `0xRRGGBB`.
///
/// The range is clipped to the palette. Alpha is left untouched.
pub fn tint_colors(palette: &Palette, start: u8, len: usize, op: TintOp, color: u32) -> Palette {
	let tint = Color::from_rgb24(color);
	let mut result = palette.clone();
	for entry in result.colors_mut().iter_mut().skip(start as usize).take(len) {
		entry.r = op.blend(entry.r, tint.r);
		entry.g = op.blend(entry.g, tint.g);
		entry.b = op.blend(entry.b, tint.b);
	}
	result
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_solid_white_is_identity() {
		let palette = Palette::grayscale();
		let tinted = tint_colors(&palette, 0, 256, TintOp::Solid, 0xFFFFFF);
		assert_eq!(tinted, palette);
	}

	#[test]
	fn test_solid_black_zeroes_range() {
		let palette = Palette::grayscale();
		let tinted = tint_colors(&palette, 16, 12, TintOp::Solid, 0x000000);
		for i in 16..28 {
			assert_eq!(tinted.get(i), Color::rgb(0, 0, 0));
		}
		assert_eq!(tinted.get(15), palette.get(15));
		assert_eq!(tinted.get(28), palette.get(28));
	}

	#[test]
	fn test_glow_and_bright_clamp() {
		let mut palette = Palette::new();
		palette.set(0, Color::rgb(200, 100, 0));

		let glow = tint_colors(&palette, 0, 1, TintOp::Glow, 0x804000);
		// 200 + 128 - 50 clamps, 100 + 64 - 25, 0 + 0 - 0
		assert_eq!(glow.get(0), Color::rgb(255, 139, 0));

		let bright = tint_colors(&palette, 0, 1, TintOp::Bright, 0x010101);
		// 200 + 1 * 25, 100 + 1 * 12
		assert_eq!(bright.get(0), Color::rgb(225, 112, 0));
	}

	#[test]
	fn test_from_opcode() {
		assert_eq!(TintOp::from_opcode(8), Some(TintOp::Glow));
		assert_eq!(TintOp::from_opcode(50), Some(TintOp::Glow));
		assert_eq!(TintOp::from_opcode(51), Some(TintOp::Solid));
		assert_eq!(TintOp::from_opcode(52), Some(TintOp::Bright));
		assert_eq!(TintOp::from_opcode(7), None);
	}
}
