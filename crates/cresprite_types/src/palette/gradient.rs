use std::{collections::HashMap, sync::Arc};

use cresprite_vfs::Table;
use log::debug;
use rand::Rng;

use super::Color;

/// Number of colors in one gradient row
pub const GRADIENT_LENGTH: usize = 12;

/// Color gradient rows, one per gradient index, taken from a game's gradient
/// image.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GradientTable {
	rows: Vec<Vec<Color>>,
}

impl GradientTable {
	/// Creates a table from explicit rows.
	pub fn from_rows(rows: Vec<Vec<Color>>) -> Self {
		Self {
			rows,
		}
	}

	/// Splits an image, given as row-major pixels, into gradient rows of
	/// `width` colors each. A trailing partial row is dropped.
	pub fn from_pixels(width: usize, pixels: &[Color]) -> Self {
		if width == 0 {
			return Self::default();
		}
		Self {
			rows: pixels.chunks_exact(width).map(<[Color]>::to_vec).collect(),
		}
	}

	/// Returns the gradient row for an index.
	pub fn row(&self, index: u8) -> Option<&[Color]> {
		self.rows.get(usize::from(index)).map(Vec::as_slice)
	}

	/// Returns the number of rows.
	pub fn len(&self) -> usize {
		self.rows.len()
	}

	/// Returns `true` if the table has no rows.
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}
}

/// The random color indirection table.
///
/// Each column maps one "random" gradient index, given in the first data row,
/// to the candidate gradient indices listed below it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RandomColors {
	entries: HashMap<u8, Vec<u8>>,
}

impl RandomColors {
	/// Builds the indirection map from its table form.
	pub fn from_table(table: &Table) -> Self {
		let mut entries = HashMap::new();
		for column in 0..table.columns().len() {
			let Some(id) = table.get_int_by_index(0, column).and_then(|v| u8::try_from(v).ok()) else {
				continue;
			};
			let candidates = (1..table.row_count())
				.filter_map(|row| table.get_int_by_index(row, column))
				.filter_map(|v| u8::try_from(v).ok())
				.collect();
			entries.insert(id, candidates);
		}
		Self {
			entries,
		}
	}

	/// Creates the map from explicit entries.
	pub fn from_entries(entries: impl IntoIterator<Item = (u8, Vec<u8>)>) -> Self {
		Self {
			entries: entries.into_iter().collect(),
		}
	}

	/// Returns the candidates of a random index.
	pub fn candidates(&self, index: u8) -> Option<&[u8]> {
		self.entries.get(&index).map(Vec::as_slice)
	}

	/// Returns `true` if `index` is itself a random index.
	pub fn is_random(&self, index: u8) -> bool {
		self.entries.contains_key(&index)
	}
}

/// Gradient lookup with optional random indirection.
#[derive(Debug, Clone)]
pub struct ColorGradients {
	table: Arc<GradientTable>,
	random: Option<Arc<RandomColors>>,
	retries: usize,
}

impl ColorGradients {
	/// Combines a gradient table with an optional random color table.
	///
	/// `retries` bounds the number of random picks per lookup.
	pub fn new(table: Arc<GradientTable>, random: Option<Arc<RandomColors>>, retries: usize) -> Self {
		Self {
			table,
			random,
			retries,
		}
	}

	/// Returns the gradient for a color index.
	///
	/// With `allow_random`, a random index first picks among its candidates.
	/// A pick that is itself random or has no gradient row is retried; once
	/// the retries are exhausted the index is looked up directly.
	pub fn get_color_gradient<R: Rng + ?Sized>(&self, index: u8, allow_random: bool, rng: &mut R) -> Option<&[Color]> {
		if allow_random {
			let candidates = self.random.as_deref().and_then(|random| random.candidates(index).map(|c| (random, c)));
			if let Some((random, candidates)) = candidates.filter(|(_, c)| !c.is_empty()) {
				for _ in 0..self.retries {
					let pick = candidates[rng.random_range(0..candidates.len())];
					if random.is_random(pick) {
						continue;
					}
					if let Some(row) = self.table.row(pick) {
						return Some(row);
					}
				}
				debug!("Random color {index} found no usable candidate in {} picks", self.retries);
			}
		}
		self.table.row(index)
	}
}
