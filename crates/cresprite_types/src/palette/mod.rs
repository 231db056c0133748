//! Palettes, tints and color gradients.
//!
//! - [`Palette`]: 256 RGBA colors.
//! - [`tint_colors`]: applies one of the three tint formulas to a palette range.
//! - [`GradientTable`] and [`RandomColors`]: color gradient rows and the
//!   random color indirection table, combined by [`ColorGradients`].

mod gradient;
mod tint;

use std::fmt;

pub use gradient::{ColorGradients, GRADIENT_LENGTH, GradientTable, RandomColors};
pub use tint::{TintOp, tint_colors};

/// RGBA color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
	/// Red component (0-255)
	pub r: u8,
	/// Green component (0-255)
	pub g: u8,
	/// Blue component (0-255)
	pub b: u8,
	/// Alpha component (0-255)
	pub a: u8,
}

impl Color {
	/// Creates a new RGBA color.
	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self {
			r,
			g,
			b,
			a,
		}
	}

	/// Creates a new RGB color with full opacity.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self::new(r, g, b, 255)
	}

	/// Creates a new grayscale color.
	pub const fn gray(value: u8) -> Self {
		Self::rgb(value, value, value)
	}

	/// Creates a transparent black color.
	pub const fn transparent() -> Self {
		Self::new(0, 0, 0, 0)
	}

	/// Creates an opaque color from a `0xRRGGBB` value.
	pub const fn from_rgb24(rgb: u32) -> Self {
		Self::rgb(((rgb >> 16) & 0xFF) as u8, ((rgb >> 8) & 0xFF) as u8, (rgb & 0xFF) as u8)
	}

	/// Returns the color as a `0xRRGGBB` value.
	pub const fn to_rgb24(&self) -> u32 {
		((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
	}
}

impl Default for Color {
	fn default() -> Self {
		Self::transparent()
	}
}

impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RGBA({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// A 256-color palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
	colors: [Color; 256],
}

impl Palette {
	/// Number of palette entries
	pub const PALETTE_SIZE: usize = 256;

	/// Creates a palette with all colors set to transparent black.
	pub fn new() -> Self {
		Self {
			colors: [Color::transparent(); 256],
		}
	}

	/// Reads a palette stored as 256 BGRX quadruplets, the layout used by
	/// BAM and BMP palettes.
	///
	/// Missing trailing entries stay transparent black.
	pub fn from_bgrx_bytes(data: &[u8]) -> Self {
		let mut palette = Self::new();
		for (slot, bgrx) in palette.colors.iter_mut().zip(data.chunks_exact(4)) {
			*slot = Color::rgb(bgrx[2], bgrx[1], bgrx[0]);
		}
		palette
	}

	/// Creates a grayscale palette where each color matches its index.
	pub fn grayscale() -> Self {
		let mut palette = Self::new();
		for (i, color) in palette.colors.iter_mut().enumerate() {
			*color = Color::gray(i as u8);
		}
		palette
	}

	/// Gets a color by index.
	#[inline]
	pub fn get(&self, index: u8) -> Color {
		self.colors[index as usize]
	}

	/// Sets a color at the specified index.
	#[inline]
	pub fn set(&mut self, index: u8, color: Color) {
		self.colors[index as usize] = color;
	}

	/// Returns a reference to the color array.
	#[inline]
	pub fn colors(&self) -> &[Color; 256] {
		&self.colors
	}

	/// Returns a mutable reference to the color array.
	#[inline]
	pub fn colors_mut(&mut self) -> &mut [Color; 256] {
		&mut self.colors
	}

	/// Copies a gradient into the palette starting at `start`.
	///
	/// Colors that would land past the last entry are dropped.
	pub fn apply_gradient(&mut self, start: u8, gradient: &[Color]) {
		for (slot, color) in self.colors[start as usize..].iter_mut().zip(gradient) {
			*slot = *color;
		}
	}
}

impl Default for Palette {
	fn default() -> Self {
		Self::new()
	}
}

impl std::ops::Index<u8> for Palette {
	type Output = Color;

	fn index(&self, index: u8) -> &Self::Output {
		&self.colors[index as usize]
	}
}

impl std::ops::IndexMut<u8> for Palette {
	fn index_mut(&mut self, index: u8) -> &mut Self::Output {
		&mut self.colors[index as usize]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_color_rgb24() {
		let color = Color::from_rgb24(0xFF8040);
		assert_eq!(color, Color::rgb(255, 128, 64));
		assert_eq!(color.to_rgb24(), 0xFF8040);
	}

	#[test]
	fn test_palette_grayscale() {
		let palette = Palette::grayscale();
		assert_eq!(palette.get(0), Color::gray(0));
		assert_eq!(palette[128], Color::gray(128));
		assert_eq!(palette.get(255), Color::gray(255));
	}

	#[test]
	fn test_palette_from_bgrx() {
		let data = [64, 128, 255, 0, 1, 2, 3, 0];
		let palette = Palette::from_bgrx_bytes(&data);
		assert_eq!(palette.get(0), Color::rgb(255, 128, 64));
		assert_eq!(palette.get(1), Color::rgb(3, 2, 1));
		assert_eq!(palette.get(2), Color::transparent());
	}

	#[test]
	fn test_apply_gradient_clips_at_end() {
		let mut palette = Palette::new();
		palette.apply_gradient(254, &[Color::gray(1), Color::gray(2), Color::gray(3)]);
		assert_eq!(palette.get(254), Color::gray(1));
		assert_eq!(palette.get(255), Color::gray(2));
	}
}
