//! Applicability conditions of conditional effects.
//!
//! Three opcode families only apply to some subjects:
//!
//! - IDS filters compare one identifier field (allegiance, race, class, ...)
//!   or the script name against a reference value.
//! - Item-type filters require an equipped item of some category.
//! - Effect lists look up a row of the relational spell protection table,
//!   which names a stat, a reference value and a relation.
//!
//! A missing relational table, a missing row or an unknown stat lets the
//! condition pass. Older game data references rows that only exist in later
//! releases, and the engines apply the effect in that case.

use std::sync::Arc;

use cresprite_vfs::Table;
use log::{debug, warn};

use super::Effect;

/// Identifier fields an IDS filter or a relational stat can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdsField {
	/// Enemy-ally (EA.IDS)
	Allegiance,
	/// GENERAL.IDS
	General,
	/// RACE.IDS
	Race,
	/// CLASS.IDS
	Class,
	/// SPECIFIC.IDS
	Specifics,
	/// GENDER.IDS
	Gender,
	/// ALIGN.IDS
	Alignment,
	/// KIT.IDS
	Kit,
}

impl IdsField {
	/// Decodes the type code of a secondary effect filter.
	pub const fn from_filter_code(code: u32) -> Option<Self> {
		match code {
			2 => Some(Self::Allegiance),
			3 => Some(Self::General),
			4 => Some(Self::Race),
			5 => Some(Self::Class),
			6 => Some(Self::Specifics),
			7 => Some(Self::Gender),
			8 => Some(Self::Alignment),
			9 => Some(Self::Kit),
			_ => None,
		}
	}

	/// Decodes one of the relational table's IDS pseudo-stats.
	pub const fn from_stat(stat: u16) -> Option<Self> {
		match stat {
			stat::EA => Some(Self::Allegiance),
			stat::GENERAL => Some(Self::General),
			stat::RACE => Some(Self::Race),
			stat::CLASS => Some(Self::Class),
			stat::SPECIFIC => Some(Self::Specifics),
			stat::GENDER => Some(Self::Gender),
			stat::ALIGNMENT => Some(Self::Alignment),
			_ => None,
		}
	}
}

/// Stat ids understood by relational conditions.
pub mod stat {
	/// Maximum hit points
	pub const MAX_HIT_POINTS: u16 = 1;
	/// First class level
	pub const LEVEL: u16 = 34;
	/// Strength
	pub const STR: u16 = 36;
	/// Exceptional strength
	pub const STR_EXTRA: u16 = 37;
	/// Intelligence
	pub const INT: u16 = 38;
	/// Wisdom
	pub const WIS: u16 = 39;
	/// Dexterity
	pub const DEX: u16 = 40;
	/// Constitution
	pub const CON: u16 = 41;
	/// Charisma
	pub const CHR: u16 = 42;
	/// Second class level
	pub const LEVEL2: u16 = 68;
	/// Third class level
	pub const LEVEL3: u16 = 69;
	/// Kit
	pub const KIT: u16 = 152;

	/// EA.IDS value
	pub const EA: u16 = 0x102;
	/// GENERAL.IDS value
	pub const GENERAL: u16 = 0x103;
	/// RACE.IDS value
	pub const RACE: u16 = 0x104;
	/// CLASS.IDS value
	pub const CLASS: u16 = 0x105;
	/// SPECIFIC.IDS value
	pub const SPECIFIC: u16 = 0x106;
	/// GENDER.IDS value
	pub const GENDER: u16 = 0x107;
	/// ALIGN.IDS value
	pub const ALIGNMENT: u16 = 0x108;
	/// State flags
	pub const STATE: u16 = 0x109;
	/// Caster is the target
	pub const SELF: u16 = 0x10B;
	/// Selection circle size
	pub const CIRCLE_SIZE: u16 = 0x10C;
	/// Either of two rows holds
	pub const OR: u16 = 0x10D;
	/// Neither of two rows holds
	pub const NOR: u16 = 0x10E;
}

/// The subject whose facts conditional effects are checked against.
pub trait EffectSubject {
	/// Returns the value of an identifier field.
	fn ids_value(&self, field: IdsField) -> u32;

	/// Returns the script name.
	fn script_name(&self) -> &str;

	/// Returns the state flag bits.
	fn state_flags(&self) -> u32;

	/// Returns a numeric stat, or `None` if the subject does not track it.
	fn stat(&self, stat: u16) -> Option<i64>;

	/// Returns `true` if any equipped item has the given category.
	fn has_item_category(&self, category: u16) -> bool;

	/// Returns the selection circle size, if known.
	fn circle_size(&self) -> Option<i64>;
}

/// Subject filter of the secondary effect opcodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdsFilter {
	/// Applies to everyone (type codes 0 and 1)
	Always,
	/// Compares an identifier field; a reference of 0 matches everything
	Field {
		/// Selected field
		field: IdsField,
		/// Reference value
		value: u32,
	},
	/// Compares the script name; an empty name matches everything
	ScriptName(String),
	/// A type code this engine does not interpret; applies to everyone
	Unsupported(u32),
}

impl IdsFilter {
	/// Type code selecting the script name
	pub const SCRIPT_NAME_CODE: u32 = 11;

	/// Builds the filter from an effect's `param1` (reference) and `param2`
	/// (type code).
	pub fn from_effect(effect: &Effect) -> Self {
		match effect.param2 {
			0 | 1 => Self::Always,
			Self::SCRIPT_NAME_CODE => Self::ScriptName(effect.resource2.as_str().to_string()),
			code => match IdsField::from_filter_code(code) {
				Some(field) => Self::Field {
					field,
					value: effect.param1,
				},
				None => Self::Unsupported(code),
			},
		}
	}

	/// Returns `true` if the subject passes the filter.
	pub fn matches(&self, subject: &dyn EffectSubject) -> bool {
		match self {
			Self::Always | Self::Unsupported(_) => true,
			Self::Field {
				field,
				value,
			} => *value == 0 || subject.ids_value(*field) == *value,
			Self::ScriptName(name) => name.is_empty() || name.eq_ignore_ascii_case(subject.script_name()),
		}
	}
}

/// Relation codes of the spell protection table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
	/// `stat <= value`
	LessOrEqual,
	/// `stat == value`
	Equal,
	/// `stat < value`
	Less,
	/// `stat > value`
	Greater,
	/// `stat >= value`
	GreaterOrEqual,
	/// `stat != value`
	NotEqual,
	/// Every stat bit is set in value
	Subset,
	/// Every value bit is set in stat
	Superset,
	/// Stat and value share a bit
	Intersects,
	/// Stat and value share no bit
	Disjoint,
	/// Superset and not equal
	StrictSuperset,
	/// Subset and not equal
	StrictSubset,
}

impl Relation {
	/// Decodes a relation code.
	pub const fn from_code(code: i64) -> Option<Self> {
		Some(match code {
			0 => Self::LessOrEqual,
			1 => Self::Equal,
			2 => Self::Less,
			3 => Self::Greater,
			4 => Self::GreaterOrEqual,
			5 => Self::NotEqual,
			6 => Self::Subset,
			7 => Self::Superset,
			8 => Self::Intersects,
			9 => Self::Disjoint,
			10 => Self::StrictSuperset,
			11 => Self::StrictSubset,
			_ => return None,
		})
	}

	/// Evaluates `actual <relation> reference`.
	///
	/// Bitwise relations operate on the low 32 bits.
	pub const fn evaluate(self, actual: i64, reference: i64) -> bool {
		let (a, r) = (actual as u32, reference as u32);
		match self {
			Self::LessOrEqual => actual <= reference,
			Self::Equal => actual == reference,
			Self::Less => actual < reference,
			Self::Greater => actual > reference,
			Self::GreaterOrEqual => actual >= reference,
			Self::NotEqual => actual != reference,
			Self::Subset => a & !r == 0,
			Self::Superset => a & r == r,
			Self::Intersects => a & r != 0,
			Self::Disjoint => a & r == 0,
			Self::StrictSuperset => a & r == r && a != r,
			Self::StrictSubset => a & !r == 0 && a != r,
		}
	}
}

/// A reference to a relational table row plus the effect's own value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationalCondition {
	/// Row index in the spell protection table
	pub row: u32,
	/// Value substituted for a `-1` table value
	pub value: u32,
}

/// Tables consulted while evaluating conditions, captured at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConditionTables {
	spell_protection: Option<Arc<Table>>,
	max_depth: usize,
}

impl ConditionTables {
	/// Creates the condition context.
	///
	/// `max_depth` bounds the nesting of OR / NOR rows.
	pub fn new(spell_protection: Option<Arc<Table>>, max_depth: usize) -> Self {
		Self {
			spell_protection,
			max_depth,
		}
	}

	/// Returns the spell protection table, if present.
	pub fn spell_protection(&self) -> Option<&Table> {
		self.spell_protection.as_deref()
	}

	/// Evaluates a relational condition against the subject.
	pub fn evaluate(&self, condition: RelationalCondition, subject: &dyn EffectSubject) -> bool {
		self.evaluate_row(i64::from(condition.row), condition.value, subject, 0)
	}

	fn evaluate_row(&self, row: i64, param: u32, subject: &dyn EffectSubject, depth: usize) -> bool {
		let Some(table) = self.spell_protection.as_deref() else {
			debug!("No spell protection table, condition on row {row} passes");
			return true;
		};
		let Ok(row_index) = usize::try_from(row) else {
			debug!("Negative spell protection row {row}, condition passes");
			return true;
		};
		let cell = |column: &str| table.column_index(column).and_then(|c| table.get_int_by_index(row_index, c));
		let (Some(stat), Some(value), Some(relation)) = (cell("STAT"), cell("VALUE"), cell("RELATION")) else {
			debug!("Spell protection row {row} is missing, condition passes");
			return true;
		};
		let reference = if value == -1 {
			i64::from(param as i32)
		} else {
			value
		};

		let Ok(stat) = u16::try_from(stat) else {
			debug!("Unknown stat {stat} in spell protection row {row}, condition passes");
			return true;
		};
		match stat {
			stat::OR | stat::NOR => {
				if depth >= self.max_depth {
					warn!("Spell protection row {row} nests deeper than {}, condition passes", self.max_depth);
					return true;
				}
				let either = self.evaluate_row(value, param, subject, depth + 1)
					|| self.evaluate_row(relation, param, subject, depth + 1);
				if stat == stat::OR { either } else { !either }
			}
			stat::SELF => true,
			_ => {
				let Some(relation) = Relation::from_code(relation) else {
					debug!("Unknown relation {relation} in spell protection row {row}, condition passes");
					return true;
				};
				let actual = match stat {
					stat::STATE => Some(i64::from(subject.state_flags())),
					stat::CIRCLE_SIZE => subject.circle_size(),
					_ => match IdsField::from_stat(stat) {
						Some(field) => Some(i64::from(subject.ids_value(field))),
						None => subject.stat(stat),
					},
				};
				match actual {
					Some(actual) => relation.evaluate(actual, reference),
					None => {
						debug!("Subject has no stat {stat:#X}, condition on row {row} passes");
						true
					}
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	struct Subject;

	impl EffectSubject for Subject {
		fn ids_value(&self, field: IdsField) -> u32 {
			match field {
				IdsField::Allegiance => 2,
				IdsField::Race => 1,
				IdsField::Class => 20,
				_ => 0,
			}
		}

		fn script_name(&self) -> &str {
			"imoen"
		}

		fn state_flags(&self) -> u32 {
			0b0110
		}

		fn stat(&self, stat: u16) -> Option<i64> {
			match stat {
				stat::STR => Some(18),
				stat::LEVEL => Some(7),
				_ => None,
			}
		}

		fn has_item_category(&self, category: u16) -> bool {
			category == 15
		}

		fn circle_size(&self) -> Option<i64> {
			None
		}
	}

	fn splprot() -> ConditionTables {
		let text = "2DA V1.0\n\
			0\n\
			   STAT  VALUE  RELATION\n\
			0  36    17     3\n\
			1  0x104 2      1\n\
			2  0x10D 0      1\n\
			3  0x10E 0      1\n\
			4  0x109 0x2    7\n\
			5  34    -1     4\n\
			6  0x10C 3      1\n\
			7  0x10D 7      7\n";
		ConditionTables::new(Some(Arc::new(Table::parse("SPLPROT", text).unwrap())), 4)
	}

	fn check(tables: &ConditionTables, row: u32, value: u32) -> bool {
		tables.evaluate(
			RelationalCondition {
				row,
				value,
			},
			&Subject,
		)
	}

	#[test]
	fn test_relations() {
		assert!(Relation::LessOrEqual.evaluate(3, 3));
		assert!(!Relation::Less.evaluate(3, 3));
		assert!(Relation::Subset.evaluate(0b0010, 0b0110));
		assert!(!Relation::Subset.evaluate(0b1010, 0b0110));
		assert!(Relation::Superset.evaluate(0b0111, 0b0110));
		assert!(Relation::Intersects.evaluate(0b0100, 0b0110));
		assert!(Relation::Disjoint.evaluate(0b1000, 0b0110));
		assert!(!Relation::StrictSuperset.evaluate(0b0110, 0b0110));
		assert!(Relation::StrictSubset.evaluate(0b0010, 0b0110));
		assert_eq!(Relation::from_code(12), None);
	}

	#[test]
	fn test_regular_and_ids_rows() {
		let tables = splprot();
		// STR 18 > 17
		assert!(check(&tables, 0, 0));
		// race 1 != 2
		assert!(!check(&tables, 1, 0));
		// state 0b0110 is a superset of 0b0010
		assert!(check(&tables, 4, 0));
	}

	#[test]
	fn test_value_minus_one_uses_effect_parameter() {
		let tables = splprot();
		assert!(check(&tables, 5, 7));
		assert!(!check(&tables, 5, 8));
	}

	#[test]
	fn test_or_and_nor_rows() {
		let tables = splprot();
		// row 0 passes, row 1 fails
		assert!(check(&tables, 2, 0));
		assert!(!check(&tables, 3, 0));
	}

	#[test]
	fn test_self_referencing_or_row_is_bounded() {
		let tables = splprot();
		assert!(check(&tables, 7, 0));
	}

	#[test_log::test]
	fn test_missing_row_passes() {
		let tables = splprot();
		assert!(check(&tables, 99, 0));
	}

	#[test_log::test]
	fn test_missing_table_passes() {
		let tables = ConditionTables::default();
		assert!(check(&tables, 1, 0));
	}

	#[test]
	fn test_unknown_circle_size_passes() {
		let tables = splprot();
		assert!(check(&tables, 6, 0));
	}

	#[test]
	fn test_ids_filter() {
		let filter = IdsFilter::Field {
			field: IdsField::Class,
			value: 20,
		};
		assert!(filter.matches(&Subject));

		let filter = IdsFilter::Field {
			field: IdsField::Allegiance,
			value: 255,
		};
		assert!(!filter.matches(&Subject));

		let wildcard = IdsFilter::Field {
			field: IdsField::Allegiance,
			value: 0,
		};
		assert!(wildcard.matches(&Subject));

		assert!(IdsFilter::ScriptName("IMOEN".to_string()).matches(&Subject));
		assert!(!IdsFilter::ScriptName("JAHEIRA".to_string()).matches(&Subject));
	}

	#[test]
	fn test_ids_filter_from_effect() {
		let effect = Effect {
			param1: 4,
			param2: 5,
			..Effect::new(177)
		};
		assert_eq!(
			IdsFilter::from_effect(&effect),
			IdsFilter::Field {
				field: IdsField::Class,
				value: 4,
			}
		);
		let effect = Effect {
			param2: 1,
			..Effect::new(177)
		};
		assert_eq!(IdsFilter::from_effect(&effect), IdsFilter::Always);
	}
}
