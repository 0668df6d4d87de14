//! Shortcut key index.

use rustc_hash::FxHashMap;

use crate::item::MenuItem;

/// Mapping from jump character to item index.
///
/// Built once per session by iterating items in order. The first item
/// claiming a character wins; later claims for the same character are
/// ignored rather than rejected.
#[derive(Debug, Default, Clone)]
pub struct ShortcutIndex {
	by_char: FxHashMap<char, usize>,
}

impl ShortcutIndex {
	/// Builds the index over normalized items.
	pub fn build(items: &[MenuItem]) -> Self {
		let mut by_char = FxHashMap::default();
		for (index, item) in items.iter().enumerate() {
			if let Some(c) = item.shortcut() {
				by_char.entry(c).or_insert(index);
			}
		}
		Self { by_char }
	}

	/// Item index bound to `c`, if any.
	pub fn get(&self, c: char) -> Option<usize> {
		self.by_char.get(&c).copied()
	}

	/// Returns true when no item defines a shortcut.
	pub fn is_empty(&self) -> bool {
		self.by_char.is_empty()
	}

	/// Characters with a binding, in no particular order.
	pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
		self.by_char.keys().copied()
	}
}
