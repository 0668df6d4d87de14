//! Canonical menu item model and input normalization.
//!
//! Callers hand over heterogeneous input: bare labels or structured entries
//! with an optional jump key and arbitrary extra data. [`normalize`] resolves
//! that input once into [`MenuItem`]s; downstream code never branches on the
//! original shape again. The selected element is returned to the callback
//! verbatim, so a bare string round-trips as a bare string.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ItemDefect, MenuError};

/// Caller-supplied menu input, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawItem {
	/// Plain label with no payload.
	Text(String),
	/// Structured entry with optional jump key and opaque extra fields.
	Entry {
		/// Display label.
		word: String,
		/// Single-character jump key. Validated during normalization.
		#[serde(default, skip_serializing_if = "Option::is_none")]
		shortcut: Option<String>,
		/// Arbitrary extra fields, preserved verbatim as the payload.
		#[serde(flatten)]
		rest: Map<String, Value>,
	},
}

impl RawItem {
	/// Bare label item.
	pub fn text(label: impl Into<String>) -> Self {
		Self::Text(label.into())
	}

	/// Structured entry with no shortcut or payload.
	pub fn entry(word: impl Into<String>) -> Self {
		Self::Entry {
			word: word.into(),
			shortcut: None,
			rest: Map::new(),
		}
	}

	/// Returns this item in structured form with the jump key set.
	pub fn with_shortcut(self, shortcut: char) -> Self {
		let (word, _, rest) = self.into_parts();
		Self::Entry {
			word,
			shortcut: Some(shortcut.to_string()),
			rest,
		}
	}

	/// Returns this item in structured form with an extra payload field.
	pub fn with_field(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		let (word, shortcut, mut rest) = self.into_parts();
		rest.insert(key.into(), value.into());
		Self::Entry { word, shortcut, rest }
	}

	fn into_parts(self) -> (String, Option<String>, Map<String, Value>) {
		match self {
			Self::Text(label) => (label, None, Map::new()),
			Self::Entry { word, shortcut, rest } => (word, shortcut, rest),
		}
	}

	/// Display label, regardless of shape.
	pub fn display(&self) -> &str {
		match self {
			Self::Text(label) => label,
			Self::Entry { word, .. } => word,
		}
	}

	/// Opaque extra fields, when structured. `None` for bare labels.
	pub fn payload(&self) -> Option<&Map<String, Value>> {
		match self {
			Self::Text(_) => None,
			Self::Entry { rest, .. } => Some(rest),
		}
	}

	/// Converts a loose JSON value into an item.
	///
	/// Strings become bare labels. Objects must carry a string `word` field;
	/// `shortcut` is picked out when present and every other field is kept as
	/// payload.
	pub fn from_value(value: Value) -> Result<Self, ItemDefect> {
		match value {
			Value::String(label) => Ok(Self::Text(label)),
			Value::Object(mut map) => {
				let word = match map.remove("word") {
					Some(Value::String(word)) => word,
					_ => return Err(ItemDefect::MissingDisplay),
				};
				let shortcut = match map.remove("shortcut") {
					None | Some(Value::Null) => None,
					Some(Value::String(s)) => Some(s),
					Some(other) => return Err(ItemDefect::BadShortcut(other.to_string())),
				};
				Ok(Self::Entry {
					word,
					shortcut,
					rest: map,
				})
			}
			other => Err(ItemDefect::UnsupportedShape(json_type_name(&other))),
		}
	}

	/// Converts a list of loose JSON values, reporting the first bad index.
	pub fn from_values(values: Vec<Value>) -> Result<Vec<Self>, MenuError> {
		values
			.into_iter()
			.enumerate()
			.map(|(index, value)| {
				Self::from_value(value).map_err(|defect| MenuError::invalid_item(index, defect))
			})
			.collect()
	}
}

impl From<&str> for RawItem {
	fn from(label: &str) -> Self {
		Self::text(label)
	}
}

impl From<String> for RawItem {
	fn from(label: String) -> Self {
		Self::Text(label)
	}
}

fn json_type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

/// A normalized menu row.
///
/// Constructed once by [`normalize`]; immutable afterwards. Identity is
/// positional: the row's index in the session's sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
	display: String,
	shortcut: Option<char>,
	source: RawItem,
}

impl MenuItem {
	/// Display label shown in the popup.
	pub fn display(&self) -> &str {
		&self.display
	}

	/// Jump key bound to this row, if any.
	pub fn shortcut(&self) -> Option<char> {
		self.shortcut
	}

	/// The original input element, returned to the callback on selection.
	pub fn source(&self) -> &RawItem {
		&self.source
	}

	/// Opaque payload fields. `None` when the input was a bare label.
	pub fn payload(&self) -> Option<&Map<String, Value>> {
		self.source.payload()
	}

	/// Popup projection: `"<display> [<shortcut>]"` when a jump key exists.
	///
	/// Cosmetic only; payload round-trip is never affected by this text.
	pub fn abbr(&self) -> String {
		match self.shortcut {
			Some(c) => format!("{} [{}]", self.display, c),
			None => self.display.clone(),
		}
	}
}

/// Resolves heterogeneous caller input into canonical items.
///
/// Pure; called once per open. The first malformed record aborts with its
/// index so callers can point at the offending element.
pub fn normalize(raw: Vec<RawItem>) -> Result<Vec<MenuItem>, MenuError> {
	raw.into_iter()
		.enumerate()
		.map(|(index, item)| {
			if item.display().is_empty() {
				return Err(MenuError::invalid_item(index, ItemDefect::EmptyDisplay));
			}
			let shortcut = match &item {
				RawItem::Text(_) => None,
				RawItem::Entry { shortcut: None, .. } => None,
				RawItem::Entry {
					shortcut: Some(s), ..
				} => {
					let mut chars = s.chars();
					match (chars.next(), chars.next()) {
						(Some(c), None) => Some(c),
						_ => {
							return Err(MenuError::invalid_item(
								index,
								ItemDefect::BadShortcut(s.clone()),
							));
						}
					}
				}
			};
			Ok(MenuItem {
				display: item.display().to_string(),
				shortcut,
				source: item,
			})
		})
		.collect()
}
