//! `.2DA` text table support.
//!
//! # File Format
//!
//! ```text
//! 2DA V1.0
//! <default value>
//!         COLUMN_A  COLUMN_B
//! ROW_1   value     value
//! ROW_2   value
//! ```
//!
//! The first line is the signature, the second holds the value returned for
//! cells missing from short rows, the third lists the column labels and every
//! following line starts with a row label. Labels compare case-insensitively.

use std::sync::Arc;

use crate::VfsError;

/// Signature line of a 2DA table
const SIGNATURE: &str = "2DA V1.0";

/// Source of small tabular overrides (fist items, random colors, spell
/// protection rows).
pub trait TableProvider {
	/// Returns the table with the given name, or `None` if it does not exist
	/// or cannot be parsed.
	fn table(&self, name: &str) -> Option<Arc<Table>>;
}

/// A parsed 2DA table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
	default_value: String,
	columns: Vec<String>,
	rows: Vec<(String, Vec<String>)>,
}

impl Table {
	/// Parses a table from its text form.
	///
	/// A missing signature line is tolerated, matching the original engines
	/// which only look at the data lines.
	///
	/// # Errors
	///
	/// Returns [`VfsError::MalformedTable`] if the default value line or the
	/// column header line is missing.
	pub fn parse(name: &str, text: &str) -> Result<Self, VfsError> {
		let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty()).peekable();

		if lines.peek().is_some_and(|line| line.to_ascii_uppercase().starts_with(SIGNATURE)) {
			lines.next();
		}

		let default_value = lines.next().ok_or_else(|| VfsError::MalformedTable {
			name: name.to_string(),
			message: "missing default value line".to_string(),
		})?;
		let header = lines.next().ok_or_else(|| VfsError::MalformedTable {
			name: name.to_string(),
			message: "missing column header line".to_string(),
		})?;

		let columns = header.split_whitespace().map(str::to_ascii_uppercase).collect();
		let rows = lines
			.filter_map(|line| {
				let mut cells = line.split_whitespace().map(str::to_string);
				let label = cells.next()?.to_ascii_uppercase();
				Some((label, cells.collect()))
			})
			.collect();

		Ok(Self {
			default_value: default_value.to_string(),
			columns,
			rows,
		})
	}

	/// Returns the default value used for missing cells.
	pub fn default_value(&self) -> &str {
		&self.default_value
	}

	/// Returns the column labels.
	pub fn columns(&self) -> &[String] {
		&self.columns
	}

	/// Returns the number of data rows.
	pub fn row_count(&self) -> usize {
		self.rows.len()
	}

	/// Returns the row labels in file order.
	pub fn row_labels(&self) -> impl Iterator<Item = &str> {
		self.rows.iter().map(|(label, _)| label.as_str())
	}

	/// Looks up a cell by row and column label.
	///
	/// Returns `None` if the row or column does not exist. A row that is
	/// shorter than the header yields the default value.
	pub fn get(&self, row: &str, column: &str) -> Option<&str> {
		let row = self.rows.iter().position(|(label, _)| label.eq_ignore_ascii_case(row))?;
		let column = self.column_index(column)?;
		self.get_by_index(row, column)
	}

	/// Looks up a cell by row and column position.
	pub fn get_by_index(&self, row: usize, column: usize) -> Option<&str> {
		if column >= self.columns.len() {
			return None;
		}
		let (_, cells) = self.rows.get(row)?;
		Some(cells.get(column).map_or(self.default_value.as_str(), String::as_str))
	}

	/// Parses a cell as an integer; accepts decimal and `0x` hexadecimal.
	pub fn get_int(&self, row: &str, column: &str) -> Option<i64> {
		parse_int(self.get(row, column)?)
	}

	/// Parses a cell addressed by position as an integer.
	pub fn get_int_by_index(&self, row: usize, column: usize) -> Option<i64> {
		parse_int(self.get_by_index(row, column)?)
	}

	/// Returns the position of a column label.
	pub fn column_index(&self, column: &str) -> Option<usize> {
		self.columns.iter().position(|label| label.eq_ignore_ascii_case(column))
	}
}

fn parse_int(cell: &str) -> Option<i64> {
	let cell = cell.trim();
	if let Some(hex) = cell.strip_prefix("0x").or_else(|| cell.strip_prefix("0X")) {
		i64::from_str_radix(hex, 16).ok()
	} else {
		cell.parse().ok()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const MONKFIST: &str = "2DA V1.0\n\
		****\n\
		        FIST\n\
		1       MFIST1\n\
		7       MFIST3\n\
		9\n";

	#[test]
	fn test_parse_table() {
		let table = Table::parse("MONKFIST", MONKFIST).unwrap();
		assert_eq!(table.columns(), ["FIST"]);
		assert_eq!(table.row_count(), 3);
		assert_eq!(table.get("7", "fist"), Some("MFIST3"));
		assert_eq!(table.get("8", "FIST"), None);
	}

	#[test]
	fn test_short_row_yields_default() {
		let table = Table::parse("MONKFIST", MONKFIST).unwrap();
		assert_eq!(table.get("9", "FIST"), Some("****"));
	}

	#[test]
	fn test_missing_signature_is_tolerated() {
		let table = Table::parse("T", "0\nA B\nR1 1 0x10\n").unwrap();
		assert_eq!(table.get_int("R1", "A"), Some(1));
		assert_eq!(table.get_int("R1", "B"), Some(16));
		assert_eq!(table.get_int_by_index(0, 1), Some(16));
	}

	#[test]
	fn test_missing_header_is_an_error() {
		let result = Table::parse("T", "2DA V1.0\n0\n");
		assert!(matches!(result, Err(VfsError::MalformedTable { .. })));
	}
}
