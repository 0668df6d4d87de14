//! Open-time menu configuration.

use serde::{Deserialize, Serialize};

use crate::item::RawItem;

/// Cosmetic icon decoration for an open menu.
///
/// The icon character is appended to the first rendered line; it never
/// participates in selection or payload round-trip. Deserializing rejects
/// multi-character input because `character` is a `char`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSpec {
	/// Character appended to the first popup line.
	pub character: char,
	/// Color name for host-side styling.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub foreground: Option<String>,
}

impl IconSpec {
	/// Icon with no foreground color.
	pub fn new(character: char) -> Self {
		Self {
			character,
			foreground: None,
		}
	}

	/// Sets the foreground color name.
	pub fn with_foreground(mut self, color: impl Into<String>) -> Self {
		self.foreground = Some(color.into());
		self
	}
}

/// Everything one `open` call needs.
///
/// Constructed from caller input at open time and consumed by the session;
/// nothing here outlives the close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
	/// Items to present, in order. May be empty; opening is then a no-op.
	pub items: Vec<RawItem>,
	/// Name of the host-side callback that receives the outcome.
	pub callback: String,
	/// Optional icon decoration.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub icon: Option<IconSpec>,
}

impl MenuConfig {
	/// Config with items and a callback name, no icon.
	pub fn new(items: Vec<RawItem>, callback: impl Into<String>) -> Self {
		Self {
			items,
			callback: callback.into(),
			icon: None,
		}
	}

	/// Adds the icon decoration.
	pub fn with_icon(mut self, icon: IconSpec) -> Self {
		self.icon = Some(icon);
		self
	}
}
